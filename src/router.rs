//! Event Router
//!
//! The page installs one delegated click handler. Each click is reduced to a
//! `ClickTarget` snapshot of the clicked element and classified into the
//! commands it triggers.

use crate::models::ItemDraft;

/// Id of the add-item trigger
pub const ADD_ITEM_ID: &str = "addItemBtn";
/// Id of the reset-demo trigger
pub const RESET_DEMO_ID: &str = "resetDemoBtn";

/// Everything the router needs to know about a clicked element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickTarget {
    pub id: String,
    /// Carries a `data-close` attribute
    pub close: bool,
    /// Value of `data-edit`
    pub edit: Option<String>,
    /// Value of `data-delete`
    pub delete: Option<String>,
    /// An `<a>` inside the `.nav` container
    pub nav_link: bool,
}

/// Something the user asked the gallery to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CloseModal,
    OpenAdd,
    OpenEdit(String),
    Delete(String),
    ResetDemo,
    CloseNav,
    ToggleNav,
    SubmitItem(ItemDraft),
    SubmitContact,
    SubmitCareer,
}

/// Classify a click. Checks are independent, so one element can trigger
/// several commands; they are returned in dispatch order.
pub fn classify(target: &ClickTarget) -> Vec<Command> {
    let mut commands = Vec::new();
    if target.close {
        commands.push(Command::CloseModal);
    }
    if target.id == ADD_ITEM_ID {
        commands.push(Command::OpenAdd);
    }
    if let Some(id) = target.edit.as_deref().filter(|id| !id.is_empty()) {
        commands.push(Command::OpenEdit(id.to_string()));
    }
    if let Some(id) = target.delete.as_deref().filter(|id| !id.is_empty()) {
        commands.push(Command::Delete(id.to_string()));
    }
    if target.id == RESET_DEMO_ID {
        commands.push(Command::ResetDemo);
    }
    if target.nav_link {
        commands.push(Command::CloseNav);
    }
    commands
}
