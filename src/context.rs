//! Gallery Context
//!
//! Shared state provided via Leptos Context API. Every user action goes
//! through `dispatch`, which applies the command and persists the item list
//! when it changed.

use std::sync::Arc;

use leptos::prelude::*;
use tracing::{debug, error};

use crate::models::UuidGenerator;
use crate::router::Command;
use crate::state::GalleryState;
use crate::store::ItemStore;

#[derive(Clone, Copy)]
pub struct GalleryContext {
    /// Everything the page renders
    pub state: RwSignal<GalleryState>,
    store: StoredValue<Arc<dyn ItemStore>>,
    /// Show add/edit/delete/reset controls (fixed at startup)
    pub crud_enabled: bool,
}

impl GalleryContext {
    pub fn new(state: GalleryState, store: Arc<dyn ItemStore>, crud_enabled: bool) -> Self {
        Self {
            state: RwSignal::new(state),
            store: StoredValue::new(store),
            crud_enabled,
        }
    }

    /// Apply a command and save the items if it changed them
    pub fn dispatch(&self, command: Command) {
        debug!("dispatch {:?}", command);
        let changed = self
            .state
            .try_update(|state| state.apply(command, &mut UuidGenerator))
            .unwrap_or(false);
        if changed {
            self.persist();
        }
    }

    fn persist(&self) {
        let items = self.state.with_untracked(|state| state.items.clone());
        let result = self.store.with_value(|store| store.save(&items));
        if let Err(e) = result {
            error!("failed to save {} items: {}", items.len(), e);
        }
    }
}

/// Get the gallery context
pub fn use_gallery() -> GalleryContext {
    expect_context::<GalleryContext>()
}
