use crate::accounts;
use crate::entries;
use crate::errors::AppError;
use crate::insights::build_insights;
use crate::models::{
    ActivityKind, AvailabilityResponse, ChatMessage, ChatRequest, ChatRole, InsightsSummary,
    JournalEntry, LoginRequest, MoodEntry, NewJournalRequest, NewMoodRequest, RegisterRequest,
    StreakData, UpdateProfileRequest, UserProfile, UsernameQuery,
};
use crate::state::AppState;
use crate::storage::Collection;
use crate::streaks;
use axum::{
    Json,
    extract::{Query, State},
};
use chrono::Utc;
use uuid::Uuid;

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<Json<UserProfile>, AppError> {
    if body.email.trim().is_empty() || body.username.trim().is_empty() {
        return Err(AppError::bad_request("email and username are required"));
    }
    if body.password.is_empty() {
        return Err(AppError::bad_request("password is required"));
    }

    let store = state.store.lock().await;
    let user = accounts::register(&store, body).await?;
    Ok(Json(user.into()))
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<UserProfile>, AppError> {
    let store = state.store.lock().await;
    let user = accounts::login(&store, &body.identifier, &body.password).await?;
    Ok(Json(user.into()))
}

pub async fn logout(State(state): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let store = state.store.lock().await;
    accounts::logout(&store).await?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

pub async fn me(State(state): State<AppState>) -> Json<Option<UserProfile>> {
    let store = state.store.lock().await;
    Json(accounts::current_user(&store).await.map(UserProfile::from))
}

pub async fn username_available(
    State(state): State<AppState>,
    Query(query): Query<UsernameQuery>,
) -> Json<AvailabilityResponse> {
    let store = state.store.lock().await;
    let available = accounts::username_available(&store, &query.username).await;
    Json(AvailabilityResponse {
        username: query.username,
        available,
    })
}

pub async fn update_profile(
    State(state): State<AppState>,
    Json(body): Json<UpdateProfileRequest>,
) -> Result<Json<UserProfile>, AppError> {
    let store = state.store.lock().await;
    let mut user = accounts::current_user(&store)
        .await
        .ok_or(AppError::InvalidCredentials)?;

    user.name = body.name;
    user.avatar_url = body.avatar_url;
    accounts::update_profile(&store, user.clone()).await?;
    Ok(Json(user.into()))
}

pub async fn list_moods(State(state): State<AppState>) -> Json<Vec<MoodEntry>> {
    let store = state.store.lock().await;
    Json(entries::list_moods(&store).await)
}

/// The tip is fetched before the lock is taken so a slow advisor call
/// blocks only this request.
pub async fn check_in_mood(
    State(state): State<AppState>,
    Json(body): Json<NewMoodRequest>,
) -> Result<Json<MoodEntry>, AppError> {
    let ai_insight = Some(state.advisor.mood_tip(body.mood).await);

    let entry = MoodEntry {
        id: Uuid::new_v4(),
        mood: body.mood,
        timestamp: Utc::now().to_rfc3339(),
        note: body.note,
        ai_insight,
    };

    let store = state.store.lock().await;
    entries::append_mood(&store, entry.clone()).await?;
    Ok(Json(entry))
}

pub async fn list_journals(State(state): State<AppState>) -> Json<Vec<JournalEntry>> {
    let store = state.store.lock().await;
    Json(entries::list_journals(&store).await)
}

pub async fn save_journal(
    State(state): State<AppState>,
    Json(body): Json<NewJournalRequest>,
) -> Result<Json<JournalEntry>, AppError> {
    if body.content.trim().is_empty() {
        return Err(AppError::bad_request("journal content must not be empty"));
    }

    let ai_analysis = Some(state.advisor.analyze_journal(&body.content).await);

    let entry = JournalEntry {
        id: Uuid::new_v4(),
        content: body.content,
        timestamp: Utc::now().to_rfc3339(),
        tags: body.tags,
        mood: body.mood,
        is_locked: body.is_locked,
        ai_analysis,
    };

    let store = state.store.lock().await;
    entries::append_journal(&store, entry.clone()).await?;
    Ok(Json(entry))
}

pub async fn chat_history(State(state): State<AppState>) -> Json<Vec<ChatMessage>> {
    let store = state.store.lock().await;
    Json(entries::list_chat(&store).await)
}

pub async fn send_chat(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatMessage>, AppError> {
    if body.message.trim().is_empty() {
        return Err(AppError::bad_request("message must not be empty"));
    }

    // Persist the user's message first, then release the lock while the
    // advisor thinks. The transcript handed to the advisor is the history
    // up to (not including) the new message.
    let (history, display_name) = {
        let store = state.store.lock().await;
        let history = entries::list_chat(&store).await;

        let user_message = ChatMessage {
            id: Uuid::new_v4(),
            role: ChatRole::User,
            text: body.message.clone(),
            timestamp: Utc::now().to_rfc3339(),
        };
        entries::append_chat(&store, user_message).await?;

        let display_name = accounts::current_user(&store)
            .await
            .map(|user| user.name)
            .unwrap_or_else(|| "Friend".into());
        (history, display_name)
    };

    let reply = state
        .advisor
        .converse(&history, &body.message, &display_name)
        .await;

    let model_message = ChatMessage {
        id: Uuid::new_v4(),
        role: ChatRole::Model,
        text: reply,
        timestamp: Utc::now().to_rfc3339(),
    };

    let store = state.store.lock().await;
    entries::append_chat(&store, model_message.clone()).await?;
    Ok(Json(model_message))
}

pub async fn clear_chat(State(state): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let store = state.store.lock().await;
    entries::clear_chat(&store).await?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

/// Invoked by the focus timer once per finished focus interval; breaks and
/// abandoned timers never reach this endpoint.
pub async fn complete_focus(State(state): State<AppState>) -> Result<Json<StreakData>, AppError> {
    let store = state.store.lock().await;
    let data = streaks::record_activity(&store, ActivityKind::Focus).await?;
    Ok(Json(data))
}

pub async fn get_streaks(State(state): State<AppState>) -> Json<StreakData> {
    let store = state.store.lock().await;
    let data: StreakData = store.read(Collection::Streaks).await.unwrap_or_default();
    Json(data)
}

pub async fn get_insights(State(state): State<AppState>) -> Json<InsightsSummary> {
    let store = state.store.lock().await;
    let moods = entries::list_moods(&store).await;
    Json(build_insights(&moods))
}
