//! Demo Forms
//!
//! Contact and career forms. Submitting only shows a thank-you message and
//! clears the fields; nothing is sent or stored.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::use_gallery;
use crate::router::Command;
use crate::state::GalleryState;

/// (name, label, input type); "textarea" renders a textarea
type FieldSpec = (&'static str, &'static str, &'static str);

const CONTACT_FIELDS: &[FieldSpec] = &[
    ("name", "Name", "text"),
    ("email", "Email", "email"),
    ("message", "Message", "textarea"),
];

const CAREER_FIELDS: &[FieldSpec] = &[
    ("name", "Full name", "text"),
    ("email", "Email", "email"),
    ("position", "Position", "text"),
    ("about", "Tell us about yourself", "textarea"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DemoFormKind {
    Contact,
    Career,
}

impl DemoFormKind {
    /// Anchor target for the nav links
    fn section_id(self) -> &'static str {
        match self {
            DemoFormKind::Contact => "contact",
            DemoFormKind::Career => "career",
        }
    }

    fn form_id(self) -> &'static str {
        match self {
            DemoFormKind::Contact => "contactForm",
            DemoFormKind::Career => "careerForm",
        }
    }

    fn status_id(self) -> &'static str {
        match self {
            DemoFormKind::Contact => "contactStatus",
            DemoFormKind::Career => "careerStatus",
        }
    }

    fn heading(self) -> &'static str {
        match self {
            DemoFormKind::Contact => "Contact Us",
            DemoFormKind::Career => "Careers",
        }
    }

    fn fields(self) -> &'static [FieldSpec] {
        match self {
            DemoFormKind::Contact => CONTACT_FIELDS,
            DemoFormKind::Career => CAREER_FIELDS,
        }
    }

    fn command(self) -> Command {
        match self {
            DemoFormKind::Contact => Command::SubmitContact,
            DemoFormKind::Career => Command::SubmitCareer,
        }
    }

    fn status(self, state: &GalleryState) -> Option<&'static str> {
        match self {
            DemoFormKind::Contact => state.contact_status,
            DemoFormKind::Career => state.career_status,
        }
    }
}

#[component]
pub fn DemoForm(kind: DemoFormKind) -> impl IntoView {
    let ctx = use_gallery();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.dispatch(kind.command());
        if let Some(form) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlFormElement>().ok())
        {
            form.reset();
        }
    };

    view! {
        <section id=kind.section_id() class="section">
            <h2>{kind.heading()}</h2>
            <form id=kind.form_id() class="demo-form" on:submit=on_submit>
                {kind.fields().iter().map(|&(name, label, input_type)| {
                    let field_id = format!("{}-{}", kind.form_id(), name);
                    let input = if input_type == "textarea" {
                        view! { <textarea id=field_id.clone() name=name rows="4" required=true></textarea> }.into_any()
                    } else {
                        view! { <input type=input_type id=field_id.clone() name=name required=true /> }.into_any()
                    };
                    view! {
                        <label for=field_id>{label}</label>
                        {input}
                    }
                }).collect_view()}
                <button type="submit" class="btn">"Send"</button>
                <p id=kind.status_id() class="form-status" role="status">
                    {move || ctx.state.with(|s| kind.status(s)).unwrap_or_default()}
                </p>
            </form>
        </section>
    }
}
