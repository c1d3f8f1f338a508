pub mod aggregate;
pub mod app;
pub mod dashboard;
pub mod errors;
pub mod filter;
pub mod handlers;
pub mod models;
pub mod period;
pub mod state;
pub mod storage;

pub use app::router;
pub use dashboard::Dashboard;
pub use state::AppState;
pub use storage::{load_data, resolve_data_path};
