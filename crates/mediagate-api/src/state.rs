use crate::services::upload::UploadService;
use mediagate_core::Config;
use mediagate_storage::Storage;
use std::sync::Arc;

/// Shared, read-only application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub storage: Arc<dyn Storage>,
    pub uploads: UploadService,
}

impl AppState {
    pub fn new(config: Config, storage: Arc<dyn Storage>) -> Self {
        let uploads = UploadService::new(config.limits, storage.clone());
        Self {
            config,
            storage,
            uploads,
        }
    }
}
