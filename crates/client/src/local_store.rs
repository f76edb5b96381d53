//! Local key-value store
//!
//! Small JSON-file store for the bits that outlive a run: the signed-in
//! identity and the storefront cart. Every write persists immediately, so
//! a crash never loses more than the in-flight mutation. Clones share the
//! same underlying map, so the session gate and the cart can hold handles
//! to one store without clobbering each other's keys.
//!
//! The file lives at `<data dir>/local_store.json`; the data directory is
//! the `CAFE_CONSOLE_DATA_DIR` environment variable when set, otherwise
//! the working directory.

use cafe_core::{ConsoleError, ConsoleResult};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::warn;

const STORE_FILE: &str = "local_store.json";
const DATA_DIR_ENV: &str = "CAFE_CONSOLE_DATA_DIR";

/// Persistent string-keyed JSON store
#[derive(Debug, Clone)]
pub struct LocalStore {
    path: PathBuf,
    values: Arc<Mutex<Map<String, Value>>>,
}

impl LocalStore {
    /// Open the store in the default data directory
    pub fn open_default() -> ConsoleResult<Self> {
        Self::open(default_data_dir())
    }

    /// Open the store in a specific directory, creating it if needed
    ///
    /// An unreadable or corrupt store file starts over empty rather than
    /// blocking startup.
    pub fn open(dir: impl AsRef<Path>) -> ConsoleResult<Self> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;
        let path = dir.join(STORE_FILE);

        let values = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<Value>(&raw) {
                Ok(Value::Object(map)) => map,
                Ok(_) | Err(_) => {
                    warn!(path = %path.display(), "corrupt local store, starting empty");
                    Map::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Map::new(),
            Err(e) => {
                return Err(ConsoleError::FileRead {
                    path,
                    message: e.to_string(),
                });
            }
        };

        Ok(Self {
            path,
            values: Arc::new(Mutex::new(values)),
        })
    }

    /// Where this store persists
    pub fn path(&self) -> &Path {
        &self.path
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Get a string value
    pub fn get_string(&self, key: &str) -> Option<String> {
        match self.lock().get(key) {
            Some(Value::String(s)) => Some(s.clone()),
            _ => None,
        }
    }

    /// Set a string value and persist
    pub fn set_string(&self, key: impl Into<String>, value: impl Into<String>) -> ConsoleResult<()> {
        self.lock().insert(key.into(), Value::String(value.into()));
        self.save()
    }

    /// Get and deserialize a structured value
    pub fn get_value<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.lock().get(key)?.clone();
        serde_json::from_value(value).ok()
    }

    /// Serialize and set a structured value, then persist
    pub fn set_value<T: Serialize>(&self, key: impl Into<String>, value: &T) -> ConsoleResult<()> {
        let value = serde_json::to_value(value)?;
        self.lock().insert(key.into(), value);
        self.save()
    }

    /// Remove a key and persist; absent keys are fine
    pub fn remove(&self, key: &str) -> ConsoleResult<()> {
        if self.lock().remove(key).is_some() {
            self.save()?;
        }
        Ok(())
    }

    /// Check whether a key is present
    pub fn contains(&self, key: &str) -> bool {
        self.lock().contains_key(key)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Map<String, Value>> {
        self.values.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn save(&self) -> ConsoleResult<()> {
        let snapshot = Value::Object(self.lock().clone());
        let raw = serde_json::to_string_pretty(&snapshot)?;
        std::fs::write(&self.path, raw).map_err(|e| ConsoleError::FileWrite {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }
}

/// The directory the store file lives in
pub fn default_data_dir() -> PathBuf {
    match std::env::var(DATA_DIR_ENV) {
        Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
        _ => PathBuf::from("."),
    }
}

// ============================================================================
// Tests
// ============================================================================
