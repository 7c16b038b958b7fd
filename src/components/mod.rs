//! UI Components
//!
//! Leptos components for the gallery page.

mod demo_form;
mod footer;
mod gallery;
mod item_modal;
mod nav_bar;

pub use demo_form::{DemoForm, DemoFormKind};
pub use footer::Footer;
pub use gallery::Gallery;
pub use item_modal::ItemModal;
pub use nav_bar::NavBar;
