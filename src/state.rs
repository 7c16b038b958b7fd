//! Gallery State
//!
//! Everything the page displays, and the reducer that applies commands to
//! it. Persistence is left to the caller: `apply` reports whether the item
//! list changed.

use tracing::debug;

use crate::models::{IdGenerator, Item, ItemDraft};
use crate::router::Command;
use crate::seed::demo_items;

pub const CONTACT_THANKS: &str = "Thanks! We will get back to you shortly.";
pub const CAREER_THANKS: &str =
    "Thank you for your application! We will review it and get back to you soon.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalMode {
    #[default]
    Add,
    Edit,
}

/// Add/edit dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    pub open: bool,
    pub mode: ModalMode,
    /// Current form field values
    pub draft: ItemDraft,
}

impl ModalState {
    /// Open with every field cleared
    pub fn open_add(&mut self) {
        self.open = true;
        self.mode = ModalMode::Add;
        self.draft = ItemDraft::default();
    }

    /// Open pre-filled from `item`
    pub fn open_edit(&mut self, item: &Item) {
        self.open = true;
        self.mode = ModalMode::Edit;
        self.draft = ItemDraft::from_item(item);
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn heading(&self) -> &'static str {
        match self.mode {
            ModalMode::Add => "Add Item",
            ModalMode::Edit => "Edit Item",
        }
    }

    /// Value for the `aria-hidden` attribute
    pub fn aria_hidden(&self) -> &'static str {
        if self.open {
            "false"
        } else {
            "true"
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryState {
    pub items: Vec<Item>,
    pub modal: ModalState,
    /// Mobile nav list expanded
    pub nav_open: bool,
    pub contact_status: Option<&'static str>,
    pub career_status: Option<&'static str>,
}

impl GalleryState {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            ..Default::default()
        }
    }

    /// Apply one command. Returns true when `items` changed and must be saved.
    pub fn apply(&mut self, command: Command, ids: &mut dyn IdGenerator) -> bool {
        match command {
            Command::CloseModal => {
                self.modal.close();
                false
            }
            Command::OpenAdd => {
                self.modal.open_add();
                false
            }
            Command::OpenEdit(id) => {
                match self.items.iter().find(|item| item.id == id) {
                    Some(item) => self.modal.open_edit(item),
                    None => debug!("edit: no item with id {}", id),
                }
                false
            }
            Command::Delete(id) => {
                let before = self.items.len();
                self.items.retain(|item| item.id != id);
                if self.items.len() == before {
                    debug!("delete: no item with id {}", id);
                }
                true
            }
            Command::ResetDemo => {
                self.items = demo_items(ids);
                true
            }
            Command::SubmitItem(draft) => {
                self.upsert(draft.into_item(ids));
                self.modal.close();
                true
            }
            Command::SubmitContact => {
                self.contact_status = Some(CONTACT_THANKS);
                false
            }
            Command::SubmitCareer => {
                self.career_status = Some(CAREER_THANKS);
                false
            }
            Command::ToggleNav => {
                self.nav_open = !self.nav_open;
                false
            }
            Command::CloseNav => {
                self.nav_open = false;
                false
            }
        }
    }

    /// Replace in place when the id exists, otherwise prepend
    fn upsert(&mut self, item: Item) {
        match self.items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => *existing = item,
            None => self.items.insert(0, item),
        }
    }
}
