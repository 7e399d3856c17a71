use serde::{de::DeserializeOwned, Serialize};
use shared::visitor::{KeyValueStore, StoreError};
use web_sys::{window, Storage};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageKind {
    Local,
    Session,
}

/// `KeyValueStore` over the browser's Web Storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrowserStore {
    kind: StorageKind,
}

impl BrowserStore {
    pub fn local() -> Self {
        Self { kind: StorageKind::Local }
    }

    pub fn session() -> Self {
        Self { kind: StorageKind::Session }
    }

    fn storage(&self) -> Result<Storage, StoreError> {
        let window = window().ok_or(StoreError::Unavailable)?;
        let storage = match self.kind {
            StorageKind::Local => window.local_storage(),
            StorageKind::Session => window.session_storage(),
        };
        storage.ok().flatten().ok_or(StoreError::Unavailable)
    }

    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.get(key) {
            Ok(Some(raw)) => serde_json::from_str(&raw)
                .map_err(|e| log::warn!("could not decode {}: {}", key, e))
                .ok(),
            Ok(None) => None,
            Err(e) => {
                log::warn!("{}", e);
                None
            }
        }
    }

    pub fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value).map_err(|e| StoreError::Write {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        self.set(key, &raw)
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?
            .get_item(key)
            .map_err(|_| StoreError::Unavailable)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Write {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.storage()?
            .remove_item(key)
            .map_err(|_| StoreError::Unavailable)
    }
}
