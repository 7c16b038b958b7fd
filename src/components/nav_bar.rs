//! Navigation Bar
//!
//! Header nav with a mobile toggle. Link clicks collapse the list through the
//! page-level click handler.

use leptos::prelude::*;

use crate::context::use_gallery;
use crate::router::Command;

const NAV_LINKS: &[(&str, &str)] = &[
    ("#work", "Work"),
    ("#contact", "Contact"),
    ("#career", "Careers"),
];

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_gallery();
    let nav_open = Memo::new(move |_| ctx.state.with(|s| s.nav_open));

    view! {
        <header class="site-header">
            <nav class="nav">
                <a class="brand" href="#top">"Portfolio"</a>
                <button
                    type="button"
                    class="nav-toggle"
                    aria-label="Toggle navigation"
                    aria-expanded=move || nav_open.get().to_string()
                    on:click=move |_| ctx.dispatch(Command::ToggleNav)
                >
                    "☰"
                </button>
                <ul class=move || if nav_open.get() { "nav-list open" } else { "nav-list" }>
                    {NAV_LINKS.iter().map(|&(href, label)| view! {
                        <li><a href=href>{label}</a></li>
                    }).collect_view()}
                </ul>
            </nav>
        </header>
    }
}
