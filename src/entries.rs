use crate::errors::AppError;
use crate::models::{ActivityKind, ChatMessage, JournalEntry, MoodEntry, StreakData};
use crate::storage::{Collection, Store};
use crate::streaks;

/// Newest first.
pub async fn list_moods(store: &Store) -> Vec<MoodEntry> {
    store.read(Collection::Moods).await.unwrap_or_default()
}

pub async fn append_mood(store: &Store, entry: MoodEntry) -> Result<StreakData, AppError> {
    let mut moods = list_moods(store).await;
    moods.insert(0, entry);
    store.write(Collection::Moods, &moods).await?;
    streaks::record_activity(store, ActivityKind::Mood).await
}

/// Newest first.
pub async fn list_journals(store: &Store) -> Vec<JournalEntry> {
    store.read(Collection::Journals).await.unwrap_or_default()
}

pub async fn append_journal(store: &Store, entry: JournalEntry) -> Result<StreakData, AppError> {
    let mut journals = list_journals(store).await;
    journals.insert(0, entry);
    store.write(Collection::Journals, &journals).await?;
    streaks::record_activity(store, ActivityKind::Journal).await
}

/// Chronological.
pub async fn list_chat(store: &Store) -> Vec<ChatMessage> {
    store.read(Collection::Chats).await.unwrap_or_default()
}

/// Chat does not feed the streak engine.
pub async fn append_chat(store: &Store, message: ChatMessage) -> Result<(), AppError> {
    let mut history = list_chat(store).await;
    history.push(message);
    store.write(Collection::Chats, &history).await
}

pub async fn clear_chat(store: &Store) -> Result<(), AppError> {
    store.clear(Collection::Chats).await
}
