use crate::dashboard::Dashboard;
use crate::models::AppData;
use crate::period::local_now;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

/// Full store contents plus the derived dashboard view. Kept behind
/// one mutex so every mutation sees both in a consistent state
/// (single-writer discipline).
pub struct DashboardState {
    pub records: AppData,
    pub dashboard: Dashboard,
}

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub inner: Arc<Mutex<DashboardState>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, records: AppData) -> Self {
        let mut dashboard = Dashboard::default();
        dashboard.reload(&records.appointments, local_now());
        Self {
            data_path,
            inner: Arc::new(Mutex::new(DashboardState { records, dashboard })),
        }
    }
}
