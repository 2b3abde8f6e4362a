use crate::{S3Storage, Storage};
use mediagate_core::Config;
use std::sync::Arc;

/// Create the storage backend from configuration.
///
/// Never fails: missing settings are reported here and surface again as a
/// failed upload.
pub fn create_storage(config: &Config) -> Arc<dyn Storage> {
    let missing = config.storage.missing_settings();
    if missing.is_empty() {
        tracing::info!(
            url_style = %config.storage.url_style,
            region = %config.storage.region,
            "Storage configured"
        );
    } else {
        tracing::warn!(
            missing = %missing.join(", "),
            "Storage is not fully configured"
        );
    }

    Arc::new(S3Storage::new(&config.storage))
}
