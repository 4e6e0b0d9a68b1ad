use std::collections::HashMap;

use anyhow::Context;
use komento_api::AppData;

/// The single key under which the whole serialized state lives.
pub const KEY_APP_DATA: &str = "appData";

/// The persistence collaborator: an opaque key-value store holding JSON
/// text. Browser local storage, a file, or the in-memory double below.
pub trait Storage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
}

/// In-process implementation, also the test double.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> MemoryStorage {
        MemoryStorage::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.items.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.items.remove(key);
    }
}

fn parse_app_data(raw: &str) -> anyhow::Result<AppData> {
    serde_json::from_str(raw).context("parsing stored app data")
}

/// Read-through load. A corrupt stored document is logged and treated as
/// absent so the caller falls back to the fetch source.
pub fn load_app_data<S: Storage>(storage: &S) -> Option<AppData> {
    let raw = storage.get(KEY_APP_DATA)?;
    match parse_app_data(&raw) {
        Ok(data) => Some(data),
        Err(e) => {
            tracing::warn!("discarding corrupt stored state: {e:#}");
            None
        }
    }
}

/// Write-through save, fire-and-forget: failures are logged and swallowed,
/// never propagated back into the interaction that triggered them.
pub fn save_app_data<S: Storage>(storage: &mut S, data: &AppData) {
    match serde_json::to_string(data) {
        Ok(raw) => {
            storage.set(KEY_APP_DATA, raw);
            tracing::trace!("app data saved");
        }
        Err(e) => tracing::warn!("failed serializing app data: {e}"),
    }
}
