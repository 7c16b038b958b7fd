use leptos::prelude::*;

/// Page footer with the current year
#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="site-footer">
            <p>"© " <span id="year">{year}</span> " Portfolio. All rights reserved."</p>
        </footer>
    }
}
