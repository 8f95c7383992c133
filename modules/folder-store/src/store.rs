//! Single-file JSON store.
//!
//! The whole state is read and written as one document. Writes go to a temp
//! file in the same directory which is then renamed over the target, so a
//! reader never sees a partial file. A `RwLock` orders readers and writers
//! inside this process; concurrent saves are still last-writer-wins.

use folder_store_types::FolderState;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no data has been saved yet")]
    NotFound,
    #[error("io: {0}")]
    Io(#[from] io::Error),
    #[error("invalid stored JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("write task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

pub struct JsonStore {
    path: PathBuf,
    lock: RwLock<()>,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: RwLock::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn exists(&self) -> bool {
        tokio::fs::try_exists(&self.path).await.unwrap_or(false)
    }

    /// Read the whole state. `StoreError::NotFound` if nothing was saved yet.
    pub async fn load(&self) -> Result<FolderState, StoreError> {
        let _guard = self.lock.read().await;
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(StoreError::NotFound),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Replace the whole state.
    pub async fn save(&self, state: &FolderState) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(state)?;
        let _guard = self.lock.write().await;
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || write_atomic(&path, &bytes)).await??;
        Ok(())
    }
}

/// Write `bytes` to a sibling temp file, flush it to disk and rename it over `path`.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
