//! Runtime environment helpers
//!
//! Wires configuration to a concrete data service so binaries only depend on
//! `service` and `configs`.

use std::sync::Arc;

use configs::{StorageBackend, StorageConfig};
use models::Review;
use tracing::info;

use crate::crud::repo::{json_file::JsonFileDataService, memory::InMemoryDataService};
use crate::crud::{CrudDataService, CrudService};

/// Review service bound to whichever data service the configuration selects.
pub type ReviewService = CrudService<Review, i64, dyn CrudDataService<Review, i64> + Send + Sync>;

/// Ensure expected directories exist for the configured backend.
pub fn ensure_env(storage: &StorageConfig) -> anyhow::Result<()> {
    match storage.backend {
        StorageBackend::Memory => Ok(()),
        StorageBackend::JsonFile => common::env::ensure_data_dir(&storage.data_dir),
    }
}

/// Build the review service for `storage`.
pub fn review_service(storage: &StorageConfig) -> anyhow::Result<ReviewService> {
    ensure_env(storage)?;
    let data: Arc<dyn CrudDataService<Review, i64> + Send + Sync> = match storage.backend {
        StorageBackend::Memory => Arc::new(InMemoryDataService::<Review>::new()),
        StorageBackend::JsonFile => Arc::new(JsonFileDataService::<Review>::open(storage.file_path())?),
    };
    info!(backend = ?storage.backend, "review_service_ready");
    Ok(CrudService::new(data))
}
