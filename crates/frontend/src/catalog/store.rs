//! In-memory catalog store, provided as a context at the app root.
//!
//! Products and the category model are rebuilt in full on every load;
//! the `Ready` state is the memo reused across page switches.

use catalogo::{build_model, normalize_rows, MacroGroup, Product};
use leptos::prelude::*;

use crate::catalog::api;
use crate::config::{DATA_URL_CANDIDATES, PLACEHOLDER_COVER};

#[derive(Debug, Clone)]
pub struct CatalogData {
    pub products: Vec<Product>,
    pub model: Vec<MacroGroup>,
}

#[derive(Debug, Clone, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready(CatalogData),
    Failed(String),
}

#[derive(Clone, Copy)]
pub struct CatalogStore {
    pub state: RwSignal<LoadState>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(LoadState::Idle),
        }
    }

    /// Memo check-and-set: a no-op while a load is in flight or after a
    /// successful one, unless `force` invalidates the memo. Safe
    /// without synchronization on the single-threaded event loop.
    pub fn ensure_loaded(&self, force: bool) {
        let proceed = self.state.with_untracked(|st| match st {
            LoadState::Idle | LoadState::Failed(_) => true,
            LoadState::Loading => false,
            LoadState::Ready(_) => force,
        });
        if !proceed {
            return;
        }

        let state = self.state;
        state.set(LoadState::Loading);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_catalog_rows(DATA_URL_CANDIDATES).await {
                Ok(rows) => {
                    let products = normalize_rows(&rows, PLACEHOLDER_COVER);
                    let model = build_model(&products);
                    log::info!("catalogo pronto: {} prodotti", products.len());
                    state.set(LoadState::Ready(CatalogData { products, model }));
                }
                Err(e) => {
                    log::error!("caricamento catalogo fallito: {e}");
                    state.set(LoadState::Failed(e));
                }
            }
        });
    }
}
