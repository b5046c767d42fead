//! [`PredictionIdCache`] backed by a small JSON file
//!
//! The file holds `{"prediction_id": <id>}` and survives restarts, so
//! feedback can still be sent for the last prediction.

use hike_application::PredictionIdCache;
use hike_domain::PredictionId;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Serialize, Deserialize)]
struct CacheFile {
    prediction_id: PredictionId,
}

/// File-backed prediction id cache
pub struct FilePredictionIdCache {
    path: PathBuf,
}

impl FilePredictionIdCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$XDG_DATA_HOME/hike-predictor/last_prediction.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join("hike-predictor").join("last_prediction.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PredictionIdCache for FilePredictionIdCache {
    fn load(&self) -> Option<PredictionId> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!("Could not read prediction cache {}: {}", self.path.display(), e);
                return None;
            }
        };

        match serde_json::from_str::<CacheFile>(&content) {
            Ok(file) => Some(file.prediction_id),
            Err(e) => {
                warn!("Ignoring corrupt prediction cache {}: {}", self.path.display(), e);
                None
            }
        }
    }

    fn store(&self, id: &PredictionId) {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!("Could not create cache directory {}: {}", parent.display(), e);
            return;
        }

        let file = CacheFile {
            prediction_id: id.clone(),
        };
        let json = match serde_json::to_string(&file) {
            Ok(json) => json,
            Err(e) => {
                warn!("Could not encode prediction id {}: {}", id, e);
                return;
            }
        };

        match std::fs::write(&self.path, json) {
            Ok(()) => debug!("Cached prediction id {} at {}", id, self.path.display()),
            Err(e) => warn!("Could not write prediction cache {}: {}", self.path.display(), e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_loads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let cache = FilePredictionIdCache::new(dir.path().join("none.json"));
        assert_eq!(cache.load(), None);
    }

    #[test]
    fn test_store_then_load_survives_new_instance() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("last_prediction.json");

        FilePredictionIdCache::new(&path).store(&PredictionId::Number(99));

        let reopened = FilePredictionIdCache::new(&path);
        assert_eq!(reopened.load(), Some(PredictionId::Number(99)));
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            r#"{"prediction_id":99}"#
        );
    }

    #[test]
    fn test_store_overwrites_previous_id() {
        let dir = tempfile::tempdir().unwrap();
        let cache = FilePredictionIdCache::new(dir.path().join("c.json"));
        cache.store(&PredictionId::Number(1));
        cache.store(&PredictionId::from("later"));
        assert_eq!(cache.load(), Some(PredictionId::from("later")));
    }

    #[test]
    fn test_failed_store_is_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        // The target path is a directory, so the write fails
        let cache = FilePredictionIdCache::new(dir.path());
        cache.store(&PredictionId::Number(5));
        assert_eq!(cache.load(), None);
    }

    #[test]
    fn test_corrupt_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("c.json");
        std::fs::write(&path, "not json").unwrap();
        assert_eq!(FilePredictionIdCache::new(&path).load(), None);
    }
}
