//! Portfolio Gallery App
//!
//! Page shell: opens the store, seeds it on first run, provides the gallery
//! context and routes every click on the page through `router::classify`.

use std::sync::Arc;

use leptos::prelude::*;
use tracing::{info, warn};
use wasm_bindgen::JsCast;

use crate::components::{DemoForm, DemoFormKind, Footer, Gallery, ItemModal, NavBar};
use crate::config::GalleryConfig;
use crate::context::GalleryContext;
use crate::models::UuidGenerator;
use crate::router::{classify, ClickTarget};
use crate::seed::load_or_seed;
use crate::state::GalleryState;
use crate::store::{ItemStore, LocalStorageStore, MemoryStore};

#[component]
pub fn App(config: GalleryConfig) -> impl IntoView {
    let store = open_store(&config.storage_key);
    let items = load_or_seed(store.as_ref(), &mut UuidGenerator);
    info!(
        "[APP] gallery ready: {} items, crud {}",
        items.len(),
        if config.crud_enabled { "on" } else { "off" }
    );

    let ctx = GalleryContext::new(GalleryState::new(items), store, config.crud_enabled);
    provide_context(ctx);

    let on_click = move |ev: web_sys::MouseEvent| {
        let Some(target) = click_target(&ev) else {
            return;
        };
        for command in classify(&target) {
            ctx.dispatch(command);
        }
    };

    view! {
        <div class="page" on:click=on_click>
            <NavBar />
            <main id="top">
                <section class="hero">
                    <h1>"We build websites that work."</h1>
                    <p>"A small studio for landing pages, storefronts and everything in between."</p>
                </section>
                <Gallery />
                <DemoForm kind=DemoFormKind::Contact />
                <DemoForm kind=DemoFormKind::Career />
            </main>
            <Footer />
            <ItemModal />
        </div>
    }
}

fn open_store(key: &str) -> Arc<dyn ItemStore> {
    if LocalStorageStore::is_available() {
        Arc::new(LocalStorageStore::new(key))
    } else {
        warn!("[APP] localStorage unavailable, items will not persist");
        Arc::new(MemoryStore::new())
    }
}

/// Snapshot the clicked element for the router
fn click_target(ev: &web_sys::MouseEvent) -> Option<ClickTarget> {
    let el = ev.target()?.dyn_into::<web_sys::HtmlElement>().ok()?;
    let nav_link = el.tag_name().eq_ignore_ascii_case("a")
        && el.closest(".nav").ok().flatten().is_some();
    Some(ClickTarget {
        id: el.id(),
        close: el.has_attribute("data-close"),
        edit: el.get_attribute("data-edit"),
        delete: el.get_attribute("data-delete"),
        nav_link,
    })
}
