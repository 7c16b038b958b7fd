//! Item Modal Component
//!
//! Add/edit dialog. Field edits are written straight into the modal draft;
//! submit hands the draft to the reducer.

use leptos::prelude::*;

use crate::context::use_gallery;
use crate::models::DraftField;
use crate::router::Command;

#[component]
pub fn ItemModal() -> impl IntoView {
    let ctx = use_gallery();
    let modal = Memo::new(move |_| ctx.state.with(|s| s.modal.clone()));

    let set_field = move |field: DraftField, value: String| {
        ctx.state.update(|s| s.modal.draft.set_field(field, value));
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = modal.with_untracked(|m| m.draft.clone());
        ctx.dispatch(Command::SubmitItem(draft));
    };

    view! {
        <div
            id="itemModal"
            class=move || if modal.with(|m| m.open) { "modal open" } else { "modal" }
            aria-hidden=move || modal.with(|m| m.aria_hidden())
        >
            <div class="modal-backdrop" data-close=""></div>
            <div class="modal-dialog" role="dialog" aria-modal="true" aria-labelledby="modalTitle">
                <div class="modal-header">
                    <h3 id="modalTitle">{move || modal.with(|m| m.heading())}</h3>
                    <button type="button" class="icon-btn" data-close="" aria-label="Close">"×"</button>
                </div>
                <form id="itemForm" on:submit=on_submit>
                    <input type="hidden" id="itemId" prop:value=move || modal.with(|m| m.draft.id.clone()) />

                    <label for="itemTitle">"Title"</label>
                    <input
                        type="text"
                        id="itemTitle"
                        required=true
                        prop:value=move || modal.with(|m| m.draft.title.clone())
                        on:input=move |ev| set_field(DraftField::Title, event_target_value(&ev))
                    />

                    <label for="itemImage">"Image URL"</label>
                    <input
                        type="text"
                        id="itemImage"
                        inputmode="url"
                        placeholder="https://..."
                        required=true
                        prop:value=move || modal.with(|m| m.draft.image.clone())
                        on:input=move |ev| set_field(DraftField::Image, event_target_value(&ev))
                    />

                    <label for="itemDesc">"Description"</label>
                    <textarea
                        id="itemDesc"
                        rows="3"
                        required=true
                        prop:value=move || modal.with(|m| m.draft.desc.clone())
                        on:input=move |ev| set_field(DraftField::Desc, event_target_value(&ev))
                    ></textarea>

                    <div class="modal-actions">
                        <button type="button" class="btn light" data-close="">"Cancel"</button>
                        <button type="submit" class="btn">"Save"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
