use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::errors::SimulationError;

use super::dataset::MissionDataset;

/// Loads each distinct dataset source once and shares it afterwards.
///
/// Owned by the caller (one per session); nothing is process-global.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entries: HashMap<PathBuf, Arc<MissionDataset>>,
    loads: usize,
}

impl DatasetCache {
    pub fn new() -> Self {
        DatasetCache::default()
    }

    pub fn get_or_load(
        &mut self,
        path: impl AsRef<Path>,
    ) -> Result<Arc<MissionDataset>, SimulationError> {
        let key = cache_key(path.as_ref());
        if let Some(dataset) = self.entries.get(&key) {
            debug!("Dataset cache hit for {:?}", key);
            return Ok(Arc::clone(dataset));
        }

        let dataset = Arc::new(MissionDataset::from_path(&key)?);
        self.loads += 1;
        self.entries.insert(key, Arc::clone(&dataset));
        Ok(dataset)
    }

    /// Number of times a source was actually read from disk.
    pub fn loads(&self) -> usize {
        self.loads
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

fn cache_key(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}
