use crate::catalog::ui::details::ProductPage;
use crate::catalog::ui::list::ListingPage;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::layout::{Footer, Header};
use leptos::prelude::*;

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Initialize router integration. This runs once when the component
    // is created.
    ctx.init_router_integration();

    view! {
        <Header />
        <main class="page">
            {move || match ctx.page.get() {
                Page::Listing => view! { <ListingPage /> }.into_any(),
                Page::Product { sku } => view! { <ProductPage sku=sku /> }.into_any(),
            }}
        </main>
        <Footer />
    }
}
