use crate::errors::AppError;
use serde::{Serialize, de::DeserializeOwned};
use std::path::PathBuf;
use tokio::fs;
use tracing::error;

/// The six persisted collections. Each lives in its own JSON file under the
/// data directory; the store itself knows nothing about their schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Session,
    Users,
    Moods,
    Journals,
    Chats,
    Streaks,
}

impl Collection {
    fn file_name(self) -> &'static str {
        match self {
            Collection::Session => "session.json",
            Collection::Users => "users.json",
            Collection::Moods => "moods.json",
            Collection::Journals => "journals.json",
            Collection::Chats => "chats.json",
            Collection::Streaks => "streaks.json",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Missing or unreadable collections read as `None`; callers treat that
    /// as an empty collection rather than an error.
    pub async fn read<T: DeserializeOwned>(&self, collection: Collection) -> Option<T> {
        let path = self.dir.join(collection.file_name());
        match fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(value) => Some(value),
                Err(err) => {
                    error!("failed to parse {}: {err}", collection.file_name());
                    None
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                error!("failed to read {}: {err}", collection.file_name());
                None
            }
        }
    }

    pub async fn write<T: Serialize>(
        &self,
        collection: Collection,
        value: &T,
    ) -> Result<(), AppError> {
        let payload = serde_json::to_vec_pretty(value)?;
        fs::write(self.dir.join(collection.file_name()), payload).await?;
        Ok(())
    }

    /// Removing a collection that was never written is a success.
    pub async fn clear(&self, collection: Collection) -> Result<(), AppError> {
        match fs::remove_file(self.dir.join(collection.file_name())).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::{MoodEntry, StreakData};

    pub(crate) fn scratch_store(tag: &str) -> Store {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let dir =
            std::env::temp_dir().join(format!("wellmate_{tag}_{}_{nanos}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        Store::new(dir)
    }

    #[tokio::test]
    async fn missing_collection_reads_as_none() {
        let store = scratch_store("missing");
        let moods: Option<Vec<MoodEntry>> = store.read(Collection::Moods).await;
        assert!(moods.is_none());
    }

    #[tokio::test]
    async fn corrupt_collection_reads_as_none() {
        let store = scratch_store("corrupt");
        std::fs::write(store.dir.join("streaks.json"), b"{not json").unwrap();

        let streaks: Option<StreakData> = store.read(Collection::Streaks).await;
        assert!(streaks.is_none());
    }

    #[tokio::test]
    async fn write_then_read_round_trips() {
        let store = scratch_store("roundtrip");
        let data = StreakData {
            current_streak: 3,
            ..StreakData::default()
        };
        store.write(Collection::Streaks, &data).await.unwrap();

        let loaded: StreakData = store.read(Collection::Streaks).await.unwrap();
        assert_eq!(loaded.current_streak, 3);
    }

    #[tokio::test]
    async fn clear_is_idempotent() {
        let store = scratch_store("clear");
        store.clear(Collection::Chats).await.unwrap();
        store.write(Collection::Chats, &Vec::<MoodEntry>::new()).await.unwrap();
        store.clear(Collection::Chats).await.unwrap();
        store.clear(Collection::Chats).await.unwrap();
    }
}
