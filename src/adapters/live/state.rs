//! File-backed state store.
//!
//! Keys and values live in one JSON file under the state directory. The
//! store only has to outlive a process restart, so a flat file is enough.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::ports::state::StateStore;
use crate::ports::PortError;

const STATE_FILE: &str = "state.json";

/// State store persisting to `<state_dir>/state.json`.
pub struct FileStateStore {
    path: PathBuf,
}

impl FileStateStore {
    /// Creates a store rooted at the given state directory.
    #[must_use]
    pub fn new(state_dir: &Path) -> Self {
        Self { path: state_dir.join(STATE_FILE) }
    }

    fn load(&self) -> Result<HashMap<String, String>, PortError> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let contents = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn save(&self, values: &HashMap<String, String>) -> Result<(), PortError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(values)?;
        Ok(std::fs::write(&self.path, json)?)
    }
}

impl StateStore for FileStateStore {
    fn get(&self, key: &str) -> Result<Option<String>, PortError> {
        Ok(self.load()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PortError> {
        let mut values = self.load()?;
        values.insert(key.to_string(), value.to_string());
        self.save(&values)
    }

    fn clear(&self, key: &str) -> Result<(), PortError> {
        let mut values = self.load()?;
        if values.remove(key).is_some() {
            self.save(&values)?;
        }
        Ok(())
    }
}
