use crate::advisor::Advisor;
use crate::storage::Store;
use std::sync::Arc;
use tokio::sync::Mutex;

/// One lock around the record store: every handler's read-modify-write runs
/// to completion before the next one starts, so the file-per-collection
/// store never sees interleaved updates.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<Store>>,
    pub advisor: Arc<dyn Advisor>,
}

impl AppState {
    pub fn new(store: Store, advisor: Arc<dyn Advisor>) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            advisor,
        }
    }
}
