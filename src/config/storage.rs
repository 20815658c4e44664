use std::env;
use std::path::PathBuf;

/// Location of uploaded document files on the local filesystem.
#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub upload_dir: PathBuf,
}

impl StorageConfig {
    pub fn from_env() -> Self {
        let upload_dir = env::var("UPLOAD_DIR")
            .unwrap_or_else(|_| "uploads/documents".to_string())
            .into();

        Self { upload_dir }
    }
}
