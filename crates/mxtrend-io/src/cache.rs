//! Process-wide, write-once dataset cache.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use mxtrend_core::{Dataset, TrendResult};
use tracing::debug;

use crate::loader::{self, Snapshot};
use crate::source::SourceId;

/// Datasets keyed by source. An entry is inserted once and never replaced;
/// callers share it through `Arc`.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entries: RwLock<HashMap<String, Arc<Dataset>>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<Arc<Dataset>> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.get(key).cloned()
    }

    /// Cached dataset for `key`, running `load` on a miss. A failed load
    /// leaves no entry behind.
    pub fn get_or_load<F>(&self, key: &str, load: F) -> TrendResult<Arc<Dataset>>
    where
        F: FnOnce() -> TrendResult<Dataset>,
    {
        if let Some(hit) = self.get(key) {
            debug!(key, "dataset cache hit");
            return Ok(hit);
        }
        let dataset = Arc::new(load()?);
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        // Another caller may have filled the slot meanwhile; the first insert wins.
        let entry = entries.entry(key.to_string()).or_insert(dataset);
        Ok(Arc::clone(entry))
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Data directory plus cache: the entry point the CLI loads through.
#[derive(Debug)]
pub struct SnapshotStore {
    data_dir: PathBuf,
    cache: DatasetCache,
}

impl SnapshotStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            cache: DatasetCache::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn load(&self, source: &SourceId) -> TrendResult<Arc<Dataset>> {
        self.cache
            .get_or_load(&source.cache_key(), || loader::load(source, &self.data_dir))
    }

    /// Fresh read with row counters, bypassing the cache.
    pub fn load_snapshot(&self, source: &SourceId) -> TrendResult<Snapshot> {
        debug!(source = %source, "reading snapshot with stats");
        loader::load_path_with_stats(&source.resolve(self.data_dir()))
    }
}
