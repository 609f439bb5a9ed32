use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/auth/register", post(handlers::register))
        .route("/api/auth/login", post(handlers::login))
        .route("/api/auth/logout", post(handlers::logout))
        .route("/api/auth/me", get(handlers::me))
        .route(
            "/api/auth/username-available",
            get(handlers::username_available),
        )
        .route("/api/auth/profile", put(handlers::update_profile))
        .route("/api/moods", get(handlers::list_moods).post(handlers::check_in_mood))
        .route(
            "/api/journals",
            get(handlers::list_journals).post(handlers::save_journal),
        )
        .route(
            "/api/chat",
            get(handlers::chat_history)
                .post(handlers::send_chat)
                .delete(handlers::clear_chat),
        )
        .route("/api/focus/complete", post(handlers::complete_focus))
        .route("/api/streaks", get(handlers::get_streaks))
        .route("/api/insights", get(handlers::get_insights))
        .with_state(state)
}
