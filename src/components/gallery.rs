//! Gallery Component
//!
//! The card grid plus the add/reset triggers. Cards are injected as HTML;
//! their edit/delete buttons are handled by the page-level click handler.

use leptos::prelude::*;

use crate::context::use_gallery;
use crate::render::render_gallery;
use crate::router::{ADD_ITEM_ID, RESET_DEMO_ID};

#[component]
pub fn Gallery() -> impl IntoView {
    let ctx = use_gallery();
    let crud = ctx.crud_enabled;

    // Only re-inject when the rendered markup actually changes
    let grid_html = Memo::new(move |_| ctx.state.with(|s| render_gallery(&s.items, crud)));

    view! {
        <section id="work" class="section">
            <div class="section-head">
                <h2>"Our Work"</h2>
                {crud.then(|| view! {
                    <div class="gallery-actions">
                        <button type="button" id=ADD_ITEM_ID class="btn">"Add Item"</button>
                        <button type="button" id=RESET_DEMO_ID class="btn light">"Reset Demo"</button>
                    </div>
                })}
            </div>
            <div id="galleryGrid" class="gallery-grid" inner_html=move || grid_html.get()></div>
        </section>
    }
}
