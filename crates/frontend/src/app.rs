use crate::catalog::store::CatalogStore;
use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the navigation context and the catalog store to the whole
    // app via context.
    provide_context(AppGlobalContext::new());
    provide_context(CatalogStore::new());

    view! {
        <AppRoutes />
    }
}
