//! Priority Repository
//!
//! Server-side storage for custom priority overrides: an in-memory map with
//! JSON persistence to `priorities.json` in the data directory.
//!
//! # Design Notes
//! - Writers are serialised by the write lock, which is held until the file
//!   has been replaced
//! - Files are written to a temporary sibling and renamed into place
//! - Last writer wins; there is no versioning

use chrono::{DateTime, Utc};
use dashboard_core::CustomPriorities;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::sync::RwLock;

const FILE_NAME: &str = "priorities.json";
const FORMAT_VERSION: u32 = 1;

/// Persistent issue key → label map
#[derive(Debug)]
pub struct PriorityRepository {
    entries: RwLock<CustomPriorities>,
    path: PathBuf,
}

/// Serialization format for JSON persistence
#[derive(Serialize, Deserialize)]
struct PriorityFile {
    version: u32,
    saved_at: DateTime<Utc>,
    priorities: CustomPriorities,
}

impl PriorityRepository {
    /// Open (or create) the repository in a data directory
    pub async fn open(data_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let data_dir = data_dir.as_ref();
        tokio::fs::create_dir_all(data_dir).await?;

        let path = data_dir.join(FILE_NAME);
        let entries = if tokio::fs::try_exists(&path).await? {
            Self::load_from_file(&path).await?
        } else {
            CustomPriorities::new()
        };

        tracing::info!(path = ?path, count = entries.len(), "Opened priority repository");

        Ok(Self {
            entries: RwLock::new(entries),
            path,
        })
    }

    async fn load_from_file(path: &Path) -> Result<CustomPriorities, StoreError> {
        let bytes = tokio::fs::read(path).await?;
        let file: PriorityFile = serde_json::from_slice(&bytes).map_err(|e| {
            StoreError::Serialization(format!("Failed to load priorities: {}", e))
        })?;
        Ok(file.priorities)
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Snapshot of every override
    pub async fn all(&self) -> CustomPriorities {
        self.entries.read().await.clone()
    }

    /// Override for one issue
    pub async fn get(&self, issue_key: &str) -> Option<String> {
        self.entries.read().await.get(issue_key).cloned()
    }

    /// Set the override for one issue
    pub async fn set(&self, issue_key: &str, priority: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().await;
        entries.insert(issue_key.to_string(), priority.to_string());
        self.persist(&entries).await
    }

    /// Remove the override for one issue; returns whether one existed
    pub async fn remove(&self, issue_key: &str) -> Result<bool, StoreError> {
        let mut entries = self.entries.write().await;
        if entries.remove(issue_key).is_none() {
            return Ok(false);
        }
        self.persist(&entries).await?;
        Ok(true)
    }

    /// Remove every override
    pub async fn clear(&self) -> Result<(), StoreError> {
        let mut entries = self.entries.write().await;
        entries.clear();
        self.persist(&entries).await
    }

    async fn persist(&self, entries: &CustomPriorities) -> Result<(), StoreError> {
        let file = PriorityFile {
            version: FORMAT_VERSION,
            saved_at: Utc::now(),
            priorities: entries.clone(),
        };
        let json = serde_json::to_vec_pretty(&file)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        tracing::debug!(count = entries.len(), "Persisted priorities");
        Ok(())
    }
}

/// Priority storage errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}
