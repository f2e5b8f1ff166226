// Media storage collaborator: upload(file) -> URL. The application layer
// only ever sees the returned URL.

use std::path::PathBuf;

use uuid::Uuid;

#[::async_trait::async_trait]
pub trait MediaStorage: Send + Sync {
    /// Stores the bytes and returns a publicly addressable URL.
    async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> anyhow::Result<String>;
}

/// Filesystem-backed media storage. Files land under `root` and are served
/// from `public_base` by whatever fronts the API.
pub struct LocalMediaStorage {
    root: PathBuf,
    public_base: String,
}

impl LocalMediaStorage {
    pub fn new(root: impl Into<PathBuf>, public_base: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_base: public_base.into(),
        }
    }
}

#[::async_trait::async_trait]
impl MediaStorage for LocalMediaStorage {
    async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> anyhow::Result<String> {
        let extension = std::path::Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("bin");
        let stored_name = format!("{}.{}", Uuid::new_v4(), extension);

        tokio::fs::create_dir_all(&self.root).await?;
        tokio::fs::write(self.root.join(&stored_name), bytes).await?;

        Ok(format!(
            "{}/{}",
            self.public_base.trim_end_matches('/'),
            stored_name
        ))
    }
}
