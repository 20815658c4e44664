use std::sync::Arc;

use sqlx::PgPool;

use crate::config::cors::CorsConfig;
use crate::config::database::init_db_pool;
use crate::config::storage::StorageConfig;
use crate::middleware::policy::{AccessPolicy, AllowAll};
use crate::utils::storage::{FileStore, LocalFileStore};

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub cors_config: CorsConfig,
    pub file_store: Arc<dyn FileStore>,
    pub access_policy: Arc<dyn AccessPolicy>,
}

pub async fn init_app_state() -> AppState {
    let storage_config = StorageConfig::from_env();

    AppState {
        db: init_db_pool().await,
        cors_config: CorsConfig::from_env(),
        file_store: Arc::new(LocalFileStore::new(storage_config.upload_dir)),
        access_policy: Arc::new(AllowAll),
    }
}
