use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::DEFAULT_STORAGE_KEY;
use crate::domain::unit::Unit;
use crate::store::KeyValueStore;

/// Last-used inputs, written after every successful conversion
///
/// Serialized as `{"value": .., "from": "C", "to": "F", "live": false}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavedState {
    pub value: f64,
    #[serde(rename = "from")]
    pub from_unit: Unit,
    #[serde(rename = "to")]
    pub to_unit: Unit,
    #[serde(rename = "live", default)]
    pub live_mode: bool,
}

/// Best-effort cache of [`SavedState`] on top of a key-value store
///
/// Failures never reach the caller: a failed save is logged and dropped, a
/// failed or corrupt load reads as "nothing saved".
pub struct StatePersistence {
    store: Box<dyn KeyValueStore>,
    key: String,
}

impl StatePersistence {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(store: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn save(&mut self, state: &SavedState) {
        let json = match serde_json::to_string(state) {
            Ok(json) => json,
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to serialize saved state");
                return;
            }
        };

        match self.store.set(&self.key, &json) {
            Ok(()) => debug!(key = %self.key, "saved widget state"),
            Err(e) => warn!(key = %self.key, error = %e, "failed to save widget state"),
        }
    }

    pub fn load(&self) -> Option<SavedState> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to read saved state");
                return None;
            }
        };

        match serde_json::from_str::<SavedState>(&raw) {
            Ok(state) if state.value.is_finite() => Some(state),
            Ok(_) => {
                warn!(key = %self.key, "ignoring saved state with non-finite value");
                None
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "ignoring corrupt saved state");
                None
            }
        }
    }
}
