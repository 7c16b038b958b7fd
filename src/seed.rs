//! Demo Data
//!
//! The fixed three-project list written on first load and on reset.

use tracing::info;

use crate::models::{IdGenerator, Item};
use crate::store::{ItemStore, StoreError};

/// (title, image, desc) for each demo project
const DEMO_ITEMS: &[(&str, &str, &str)] = &[
    (
        "Landing Page",
        "https://images.unsplash.com/photo-1522199710521-72d69614c702?q=80&w=1200&auto=format&fit=crop",
        "Fast static site for a marketing campaign.",
    ),
    (
        "Restaurant Site",
        "https://images.unsplash.com/photo-1498050108023-c5249f4df085?q=80&w=1200&auto=format&fit=crop",
        "Menu, reservations, and gallery.",
    ),
    (
        "Shop Front",
        "https://images.unsplash.com/photo-1557825835-70d97c4aa2d7?q=80&w=1200&auto=format&fit=crop",
        "E\u{2011}commerce storefront with cart & checkout.",
    ),
];

/// Demo items, each with a fresh id
pub fn demo_items(ids: &mut dyn IdGenerator) -> Vec<Item> {
    DEMO_ITEMS
        .iter()
        .map(|(title, image, desc)| Item {
            id: ids.next_id(),
            title: title.to_string(),
            image: image.to_string(),
            desc: desc.to_string(),
        })
        .collect()
}

/// Overwrite the store with a demo list
pub fn seed(store: &dyn ItemStore, items: &[Item]) -> Result<(), StoreError> {
    store.save(items)?;
    info!("seeded {} demo items", items.len());
    Ok(())
}

/// Load the store, seeding it first when it is empty
pub fn load_or_seed(store: &dyn ItemStore, ids: &mut dyn IdGenerator) -> Vec<Item> {
    let items = store.load();
    if !items.is_empty() {
        return items;
    }
    let items = demo_items(ids);
    if let Err(e) = seed(store, &items) {
        tracing::error!("failed to seed demo items: {}", e);
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_support::{make_item, SequentialIds};
    use crate::store::MemoryStore;

    struct ReadOnlyStore;

    impl ItemStore for ReadOnlyStore {
        fn load(&self) -> Vec<Item> {
            Vec::new()
        }

        fn save(&self, _items: &[Item]) -> Result<(), StoreError> {
            Err(StoreError::Write("quota exceeded".into()))
        }
    }

    #[test]
    fn test_demo_items_fixed_content() {
        let items = demo_items(&mut SequentialIds::default());
        let titles: Vec<_> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, ["Landing Page", "Restaurant Site", "Shop Front"]);
        assert_eq!(items[1].desc, "Menu, reservations, and gallery.");
        assert!(items.iter().all(|i| i.image.starts_with("https://images.unsplash.com/")));
    }

    #[test]
    fn test_demo_items_get_fresh_ids() {
        let mut ids = SequentialIds::default();
        let first = demo_items(&mut ids);
        let second = demo_items(&mut ids);
        assert_eq!(first[0].id, "id-1");
        assert_eq!(second[0].id, "id-4");
    }

    #[test]
    fn test_empty_store_is_seeded_with_three() {
        let store = MemoryStore::new();
        let items = load_or_seed(&store, &mut SequentialIds::default());
        assert_eq!(items.len(), 3);
        assert_eq!(store.load(), items);
    }

    #[test]
    fn test_corrupt_store_is_seeded() {
        let store = MemoryStore::with_raw("{broken");
        let items = load_or_seed(&store, &mut SequentialIds::default());
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn test_non_empty_store_is_left_alone() {
        let store = MemoryStore::new();
        store.save(&[make_item("mine", "Mine")]).unwrap();
        let items = load_or_seed(&store, &mut SequentialIds::default());
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "mine");
    }

    #[test]
    fn test_seed_overwrites_existing() {
        let store = MemoryStore::new();
        store.save(&[make_item("mine", "Mine")]).unwrap();
        seed(&store, &demo_items(&mut SequentialIds::default())).unwrap();
        let loaded = store.load();
        assert_eq!(loaded.len(), 3);
        assert!(loaded.iter().all(|i| i.id != "mine"));
    }

    #[test]
    fn test_item_missing_desc_is_kept() {
        let store = MemoryStore::with_raw(r#"[{"id":"mine","title":"Mine","image":"u"}]"#);
        let items = load_or_seed(&store, &mut SequentialIds::default());
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "mine");
        assert_eq!(items[0].desc, "");
        assert!(store.raw().unwrap().contains("mine"));
    }

    #[test]
    fn test_failed_seed_returns_the_items_it_tried_to_save() {
        let mut ids = SequentialIds::default();
        let items = load_or_seed(&ReadOnlyStore, &mut ids);
        let got: Vec<_> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(got, ["id-1", "id-2", "id-3"]);
        assert_eq!(ids.0, 3);
    }
}
