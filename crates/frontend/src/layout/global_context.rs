use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use crate::shared::cart_storage;
use crate::shared::dom::scroll_window_top;

/// The two logical pages of the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Listing,
    Product { sku: String },
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub page: RwSignal<Page>,
    /// Total unit count of the persisted cart, for the header badge.
    pub cart_count: RwSignal<u32>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            page: RwSignal::new(Page::Listing),
            cart_count: RwSignal::new(cart_storage::badge_total()),
        }
    }

    /// Initialize router integration: pick the boot page from the query
    /// string (`?sku=...`, legacy `?id=...`) and keep the URL in sync
    /// with the page signal afterwards. Runs once at app start.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(sku) = params.get("sku").or_else(|| params.get("id")) {
            if !sku.trim().is_empty() {
                self.page.set(Page::Product {
                    sku: sku.trim().to_string(),
                });
            }
        }

        let this = *self;
        Effect::new(move |_| {
            let new_search = match this.page.get() {
                Page::Listing => String::new(),
                Page::Product { sku } => {
                    let query_string = serde_qs::to_string(&HashMap::from([(
                        "sku".to_string(),
                        sku,
                    )]))
                    .unwrap_or_default();
                    format!("?{}", query_string)
                }
            };

            // Use untracked reads of the location to avoid creating
            // reactive dependencies; only touch history when the query
            // actually changed.
            let Some(w) = window() else { return };
            let current_search = w.location().search().unwrap_or_default();
            if current_search == new_search {
                return;
            }
            let path = w.location().pathname().unwrap_or_else(|_| "/".to_string());
            if let Ok(history) = w.history() {
                let _ = history.replace_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(&format!("{}{}", path, new_search)),
                );
            }
        });
    }

    pub fn open_product(&self, sku: &str) {
        self.page.set(Page::Product {
            sku: sku.to_string(),
        });
        scroll_window_top();
    }

    pub fn open_listing(&self) {
        self.page.set(Page::Listing);
        scroll_window_top();
    }
}
