//! Port for remembering the last prediction id.
//!
//! Feedback needs the id the service returned. When a result arrives
//! without one (or the session was restored), the last cached id is used.

use hike_domain::PredictionId;
use std::sync::Mutex;

/// Storage for a single prediction id.
///
/// Failures are the adapter's concern; callers treat a missing id and an
/// unreadable cache the same way.
pub trait PredictionIdCache: Send + Sync {
    fn load(&self) -> Option<PredictionId>;
    fn store(&self, id: &PredictionId);
}

/// Cache that remembers nothing.
pub struct NoPredictionCache;

impl PredictionIdCache for NoPredictionCache {
    fn load(&self) -> Option<PredictionId> {
        None
    }

    fn store(&self, _id: &PredictionId) {}
}

/// Process-local cache, for tests and `--no-cache` runs.
#[derive(Default)]
pub struct InMemoryPredictionCache {
    id: Mutex<Option<PredictionId>>,
}

impl InMemoryPredictionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(id: PredictionId) -> Self {
        Self {
            id: Mutex::new(Some(id)),
        }
    }
}

impl PredictionIdCache for InMemoryPredictionCache {
    fn load(&self) -> Option<PredictionId> {
        self.id.lock().ok().and_then(|guard| guard.clone())
    }

    fn store(&self, id: &PredictionId) {
        if let Ok(mut guard) = self.id.lock() {
            *guard = Some(id.clone());
        }
    }
}
