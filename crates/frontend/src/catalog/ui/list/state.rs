use catalogo::{BrowseState, SortMode, ViewMode};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::LIST_STATE_STORAGE_KEY;

/// Subset of [`BrowseState`] that survives page reloads. The expanded
/// tree nodes are deliberately not persisted; they reseed from the
/// model on boot.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct PersistedState {
    pub q: String,
    pub macro_slug: String,
    pub sub_slug: String,
    pub sort: SortMode,
    pub per_page: usize,
    pub page: usize,
    pub view: ViewMode,
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn load_persisted() -> Option<PersistedState> {
    let raw = storage()?.get_item(LIST_STATE_STORAGE_KEY).ok().flatten()?;
    serde_json::from_str::<PersistedState>(&raw).ok()
}

fn save_persisted(st: &PersistedState) {
    let Some(storage) = storage() else { return };
    let Ok(raw) = serde_json::to_string(st) else { return };
    let _ = storage.set_item(LIST_STATE_STORAGE_KEY, &raw);
}

pub fn persist_state(signal: RwSignal<BrowseState>) {
    let st = signal.get_untracked();
    let persisted = PersistedState {
        q: st.q,
        macro_slug: st.macro_slug,
        sub_slug: st.sub_slug,
        sort: st.sort,
        per_page: st.per_page,
        page: st.page,
        view: st.view,
    };
    save_persisted(&persisted);
}

pub fn create_state() -> RwSignal<BrowseState> {
    let mut st = BrowseState::default();
    if let Some(p) = load_persisted() {
        st.q = p.q;
        st.macro_slug = p.macro_slug;
        st.sub_slug = p.sub_slug;
        st.sort = p.sort;
        st.per_page = p.per_page.max(1);
        st.page = p.page.max(1);
        st.view = p.view;
    }
    RwSignal::new(st)
}
