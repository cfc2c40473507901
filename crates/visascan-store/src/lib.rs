//! Filesystem output sinks for lookup runs.
//!
//! Three sink families under one root directory:
//! - an append-only default dataset (`dataset.jsonl`),
//! - a named additional-info dataset that is dropped and recreated on every
//!   run (`additional-info.jsonl`),
//! - two single-slot artifacts overwritten per run (`RESULT.json`,
//!   `report.html`).

use std::path::PathBuf;

pub mod dataset;
pub mod error;
pub mod kv;

pub use dataset::{AdditionalInfoRecord, VisaRecord};
pub use error::StoreError;

/// Handle to the output directory. Methods create the directory on demand;
/// construction itself never touches the filesystem.
#[derive(Debug, Clone)]
pub struct OutputStore {
    root: PathBuf,
}

impl OutputStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub(crate) fn ensure_root(&self) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.root).map_err(|source| StoreError::Io {
            path: self.root.display().to_string(),
            source,
        })
    }

    pub(crate) fn path_of(&self, file_name: &str) -> PathBuf {
        self.root.join(file_name)
    }
}
