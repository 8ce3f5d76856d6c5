use leptos::prelude::*;

use crate::config::SITE_NAME;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="siteFooter">
            <span>{format!("© {} {} — catalogo prodotti", year, SITE_NAME)}</span>
        </footer>
    }
}
