pub mod accounts;
pub mod advisor;
pub mod app;
pub mod config;
pub mod entries;
pub mod errors;
pub mod handlers;
pub mod insights;
pub mod models;
pub mod state;
pub mod storage;
pub mod streaks;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::Store;
