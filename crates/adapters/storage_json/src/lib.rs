//! # domo-adapter-storage-json
//!
//! File-based persistence adapter: one pretty-printed JSON document per
//! layout, named by layout id, inside a configurable directory.
//!
//! ## Responsibilities
//! - Implement the [`LayoutStore`] port defined in `domo-app`
//! - Own the directory layout and file naming
//! - Map between domain layouts and their serialized form
//!
//! The only contract the core relies on is that a round-tripped layout
//! compares equal to the original; the tests here cover exactly that.
//!
//! ## Dependency rule
//! Depends on `domo-app` (for the port trait) and `domo-domain` (for domain
//! types). The `app` and `domain` crates must never reference this adapter.

pub mod error;

use std::future::Future;
use std::path::{Path, PathBuf};

use domo_app::ports::LayoutStore;
use domo_domain::error::DomoError;
use domo_domain::id::LayoutId;
use domo_domain::layout::HouseLayout;

use crate::error::StorageError;

/// Directory-backed layout store.
pub struct JsonLayoutStore {
    dir: PathBuf,
}

impl JsonLayoutStore {
    /// Create a store rooted at `dir`. The directory is created lazily on
    /// the first save.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory holding the layout documents.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: LayoutId) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }
}

impl LayoutStore for JsonLayoutStore {
    fn save(&self, layout: HouseLayout) -> impl Future<Output = Result<(), DomoError>> + Send {
        let dir = self.dir.clone();
        let path = self.path_for(layout.id());
        async move {
            tokio::fs::create_dir_all(&dir)
                .await
                .map_err(StorageError::from)?;
            let json = serde_json::to_vec_pretty(&layout).map_err(StorageError::from)?;
            tokio::fs::write(&path, json)
                .await
                .map_err(StorageError::from)?;
            tracing::debug!(path = %path.display(), "layout saved");
            Ok(())
        }
    }

    fn load(
        &self,
        id: LayoutId,
    ) -> impl Future<Output = Result<Option<HouseLayout>, DomoError>> + Send {
        let path = self.path_for(id);
        async move {
            let content = match tokio::fs::read(&path).await {
                Ok(content) => content,
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
                Err(err) => return Err(StorageError::from(err).into()),
            };
            let layout = serde_json::from_slice(&content).map_err(StorageError::from)?;
            Ok(Some(layout))
        }
    }

    fn list(&self) -> impl Future<Output = Result<Vec<HouseLayout>, DomoError>> + Send {
        let dir = self.dir.clone();
        async move {
            let mut entries = match tokio::fs::read_dir(&dir).await {
                Ok(entries) => entries,
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
                Err(err) => return Err(StorageError::from(err).into()),
            };

            let mut layouts = Vec::new();
            while let Some(entry) = entries.next_entry().await.map_err(StorageError::from)? {
                let path = entry.path();
                if path.extension().is_none_or(|ext| ext != "json") {
                    continue;
                }
                let content = tokio::fs::read(&path).await.map_err(StorageError::from)?;
                let layout: HouseLayout =
                    serde_json::from_slice(&content).map_err(StorageError::from)?;
                layouts.push(layout);
            }
            Ok(layouts)
        }
    }

    fn remove(&self, id: LayoutId) -> impl Future<Output = Result<(), DomoError>> + Send {
        let path = self.path_for(id);
        async move {
            match tokio::fs::remove_file(&path).await {
                Ok(()) => Ok(()),
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
                Err(err) => Err(StorageError::from(err).into()),
            }
        }
    }
}
