//! Persistence port and adapters
//!
//! The widget remembers its last inputs in a key-value store. The store is an
//! advisory cache: nothing in the widget depends on a write succeeding.

pub mod file;
pub mod memory;
pub mod saved;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use saved::{SavedState, StatePersistence};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid storage key: '{0}'")]
    InvalidKey(String),

    #[error("Storage is unavailable")]
    Unavailable,
}

/// Port for string-keyed, string-valued storage
///
/// Implementations decide where the data lives (memory, files, a browser's
/// local storage); callers only see keys and serialized values.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` if nothing is stored
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}
