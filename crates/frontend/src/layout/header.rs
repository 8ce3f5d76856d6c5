use leptos::prelude::*;

use crate::config::SITE_NAME;
use crate::layout::global_context::AppGlobalContext;

/// Top bar: brand (returns to the listing) and the cart badge.
#[component]
pub fn Header() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <header class="topbar">
            <button class="brand" type="button" on:click=move |_| ctx.open_listing()>
                {SITE_NAME}
            </button>
            <div class="cartPill" title="Articoli nel carrello">
                <span class="cartIcon" aria-hidden="true">"🛒"</span>
                <span class="cartCount">{move || ctx.cart_count.get()}</span>
            </div>
        </header>
    }
}
