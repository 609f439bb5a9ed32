use crate::errors::AppError;
use crate::models::{RegisterRequest, User};
use crate::storage::{Collection, Store};
use chrono::Utc;
use uuid::Uuid;

async fn all_users(store: &Store) -> Vec<User> {
    store.read(Collection::Users).await.unwrap_or_default()
}

/// Appends the candidate to the user directory and opens a session for it.
/// Email and username are unique case-insensitively across all users.
pub async fn register(store: &Store, request: RegisterRequest) -> Result<User, AppError> {
    let mut users = all_users(store).await;

    if users
        .iter()
        .any(|u| u.email.eq_ignore_ascii_case(&request.email))
    {
        return Err(AppError::DuplicateEmail);
    }
    if users
        .iter()
        .any(|u| u.username.eq_ignore_ascii_case(&request.username))
    {
        return Err(AppError::DuplicateUsername);
    }

    let avatar_url = request
        .avatar_url
        .unwrap_or_else(|| default_avatar(&request.username));
    let user = User {
        id: Uuid::new_v4(),
        name: request.name,
        email: request.email,
        username: request.username,
        password: request.password,
        avatar_url,
        joined_date: Utc::now().to_rfc3339(),
    };

    users.push(user.clone());
    store.write(Collection::Users, &users).await?;
    store.write(Collection::Session, &user).await?;

    Ok(user)
}

/// The identifier may be either the email or the username, matched
/// case-insensitively; passwords compare by exact equality. Any mismatch
/// yields the same error so callers cannot tell which field was wrong.
pub async fn login(store: &Store, identifier: &str, password: &str) -> Result<User, AppError> {
    let users = all_users(store).await;
    let user = users
        .into_iter()
        .find(|u| {
            (u.email.eq_ignore_ascii_case(identifier)
                || u.username.eq_ignore_ascii_case(identifier))
                && u.password == password
        })
        .ok_or(AppError::InvalidCredentials)?;

    store.write(Collection::Session, &user).await?;
    Ok(user)
}

/// Pure query; suitable for per-keystroke availability probes.
pub async fn username_available(store: &Store, username: &str) -> bool {
    !all_users(store)
        .await
        .iter()
        .any(|u| u.username.eq_ignore_ascii_case(username))
}

/// Overwrites the session record and the id-matching directory entry. Which
/// fields changed is the caller's business; the store does not police it.
pub async fn update_profile(store: &Store, updated: User) -> Result<(), AppError> {
    store.write(Collection::Session, &updated).await?;

    let mut users = all_users(store).await;
    if let Some(existing) = users.iter_mut().find(|u| u.id == updated.id) {
        *existing = updated;
        store.write(Collection::Users, &users).await?;
    }
    Ok(())
}

pub async fn logout(store: &Store) -> Result<(), AppError> {
    store.clear(Collection::Session).await
}

pub async fn current_user(store: &Store) -> Option<User> {
    store.read(Collection::Session).await
}

fn default_avatar(username: &str) -> String {
    format!("https://api.dicebear.com/7.x/avataaars/svg?seed={username}")
}
