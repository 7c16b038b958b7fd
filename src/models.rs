//! Gallery Models
//!
//! The persisted item record, the raw form draft it is built from, and the
//! id source used when a new record needs one.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One gallery record, stored as `{ id, title, image, desc }`
///
/// Only `id` is required when loading; missing text fields load as empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// UUID, immutable once created
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Image URL (not validated)
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub desc: String,
}

/// Produces ids for newly created items
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Random v4 UUIDs (browser crypto RNG under wasm)
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Which field of the item form an input event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Image,
    Desc,
}

/// Raw item form values as typed, before trimming
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDraft {
    /// Hidden id field; blank means "create"
    pub id: String,
    pub title: String,
    pub image: String,
    pub desc: String,
}

impl ItemDraft {
    /// Draft pre-filled from an existing item (edit mode)
    pub fn from_item(item: &Item) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            image: item.image.clone(),
            desc: item.desc.clone(),
        }
    }

    pub fn set_field(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Title => self.title = value,
            DraftField::Image => self.image = value,
            DraftField::Desc => self.desc = value,
        }
    }

    /// Build the record to persist: trimmed fields, fresh id when blank
    pub fn into_item(self, ids: &mut dyn IdGenerator) -> Item {
        let id = if self.id.is_empty() {
            ids.next_id()
        } else {
            self.id
        };
        Item {
            id,
            title: self.title.trim().to_string(),
            image: self.image.trim().to_string(),
            desc: self.desc.trim().to_string(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::SequentialIds;
    use super::*;

    #[test]
    fn test_item_json_shape() {
        let item = Item {
            id: "a".into(),
            title: "T".into(),
            image: "u".into(),
            desc: "d".into(),
        };
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"id":"a","title":"T","image":"u","desc":"d"}"#);
    }

    #[test]
    fn test_draft_trims_and_assigns_id() {
        let draft = ItemDraft {
            id: String::new(),
            title: "  Portfolio  ".into(),
            image: " https://x/y.png\n".into(),
            desc: "\tdesc ".into(),
        };
        let item = draft.into_item(&mut SequentialIds::default());
        assert_eq!(item.id, "id-1");
        assert_eq!(item.title, "Portfolio");
        assert_eq!(item.image, "https://x/y.png");
        assert_eq!(item.desc, "desc");
    }

    #[test]
    fn test_draft_keeps_existing_id() {
        let mut ids = SequentialIds::default();
        let draft = ItemDraft {
            id: "keep-me".into(),
            ..Default::default()
        };
        let item = draft.into_item(&mut ids);
        assert_eq!(item.id, "keep-me");
        assert_eq!(ids.0, 0);
    }

    #[test]
    fn test_uuid_ids_are_unique() {
        let mut ids = UuidGenerator;
        let a = ids.next_id();
        let b = ids.next_id();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(&a).is_ok());
    }
}
