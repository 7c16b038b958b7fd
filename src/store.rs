//! Item Store
//!
//! Persistence for the ordered item list. The whole list lives as one JSON
//! array under a single key and is replaced on every save.

use std::sync::Mutex;

use thiserror::Error;
use tracing::{debug, warn};

use crate::models::Item;

/// Default `localStorage` key
pub const STORAGE_KEY: &str = "portfolio.gallery.items.v1";

/// Errors from writing the item list
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage is not available")]
    Unavailable,
    #[error("failed to serialize items: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write storage: {0}")]
    Write(String),
}

/// Load/save contract for the item collection
///
/// `load` never fails: missing or unreadable data is an empty list.
pub trait ItemStore: Send + Sync {
    fn load(&self) -> Vec<Item>;

    fn save(&self, items: &[Item]) -> Result<(), StoreError>;
}

/// Decode a stored value into items.
///
/// Anything that is not a JSON array yields an empty list; array elements
/// that are not item objects are skipped.
pub fn decode_items(raw: Option<&str>) -> Vec<Item> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    let values: Vec<serde_json::Value> = match serde_json::from_str(raw) {
        Ok(values) => values,
        Err(e) => {
            warn!("discarding stored items: {}", e);
            return Vec::new();
        }
    };
    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value::<Item>(value) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!("skipping stored item #{}: {}", index, e);
                None
            }
        })
        .collect()
}

pub fn encode_items(items: &[Item]) -> Result<String, StoreError> {
    Ok(serde_json::to_string(items)?)
}

/// Browser `localStorage` under a fixed key
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// True when the current window exposes `localStorage`
    pub fn is_available() -> bool {
        Self::storage().is_some()
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl ItemStore for LocalStorageStore {
    fn load(&self) -> Vec<Item> {
        let raw = Self::storage().and_then(|s| s.get_item(&self.key).ok().flatten());
        let items = decode_items(raw.as_deref());
        debug!("loaded {} items from {}", items.len(), self.key);
        items
    }

    fn save(&self, items: &[Item]) -> Result<(), StoreError> {
        let storage = Self::storage().ok_or(StoreError::Unavailable)?;
        let raw = encode_items(items)?;
        storage
            .set_item(&self.key, &raw)
            .map_err(|e| StoreError::Write(format!("{:?}", e)))?;
        debug!("saved {} items to {}", items.len(), self.key);
        Ok(())
    }
}

/// In-process raw slot with the same semantics as `localStorage`
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an arbitrary raw stored value (possibly corrupt)
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(raw.into())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.slot.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl ItemStore for MemoryStore {
    fn load(&self) -> Vec<Item> {
        decode_items(self.raw().as_deref())
    }

    fn save(&self, items: &[Item]) -> Result<(), StoreError> {
        let raw = encode_items(items)?;
        *self.slot.lock().unwrap_or_else(|e| e.into_inner()) = Some(raw);
        Ok(())
    }
}
