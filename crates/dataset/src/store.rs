//! In-memory dataset store.
//!
//! The dataset is loaded eagerly from a JSON file at startup and never
//! mutated afterwards, so it can be shared across request handlers without
//! synchronization.

use std::path::Path;

use faqbot_core::{AppError, AppResult};

use crate::types::{DatasetFile, DatasetRecord};

/// Read-only store of dataset records.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    records: Vec<DatasetRecord>,
}

impl DatasetStore {
    /// Load the dataset from a JSON file of the form `{"dataset": [...]}`.
    ///
    /// A missing file or malformed JSON is a `Dataset` error; the server
    /// treats it as fatal at startup.
    pub fn load(path: &Path) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Dataset(format!("Failed to read dataset file {:?}: {}", path, e))
        })?;

        let file: DatasetFile = serde_json::from_str(&contents).map_err(|e| {
            AppError::Dataset(format!("Invalid JSON in dataset file {:?}: {}", path, e))
        })?;

        tracing::info!(records = file.dataset.len(), "Loaded dataset");

        Ok(Self {
            records: file.dataset,
        })
    }

    /// Build a store directly from records. Used by tests and embedding.
    pub fn from_records(records: Vec<DatasetRecord>) -> Self {
        Self { records }
    }

    /// All records, in dataset order.
    pub fn records(&self) -> &[DatasetRecord] {
        &self.records
    }

    /// Number of records in the store.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
