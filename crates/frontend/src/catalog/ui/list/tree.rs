use catalogo::{BrowseState, MacroGroup, ALL};
use leptos::prelude::*;

use super::state::persist_state;
use crate::catalog::store::{CatalogStore, LoadState};

/// Sidebar category tree: an "all" entry plus one expandable node per
/// macro category, each with its sub-categories and counts.
#[component]
pub fn CategoryTree(state: RwSignal<BrowseState>) -> impl IntoView {
    let store = leptos::context::use_context::<CatalogStore>()
        .expect("CatalogStore context not found");

    view! {
        <nav class="tree" aria-label="Categorie">
            {move || match store.state.get() {
                LoadState::Failed(_) => {
                    view! { <div class="treeNote">"Errore caricamento categorie."</div> }
                        .into_any()
                }
                LoadState::Ready(data) => {
                    let total = data.products.len();
                    view! {
                        <div class="treeItem" class:active=move || state.get().macro_slug == ALL>
                            <div class="treeRow">
                                <button
                                    class="macroBtn"
                                    type="button"
                                    on:click=move |_| {
                                        state.update(|st| st.select_all());
                                        persist_state(state);
                                    }
                                >
                                    "Tutti"
                                </button>
                                <span class="cnt">{total}</span>
                            </div>
                        </div>
                        {data
                            .model
                            .into_iter()
                            .map(|group| view! { <TreeNode group=group state=state /> })
                            .collect_view()}
                    }
                        .into_any()
                }
                _ => view! { <div class="treeNote">"Caricamento…"</div> }.into_any(),
            }}
        </nav>
    }
}

#[component]
fn TreeNode(group: MacroGroup, state: RwSignal<BrowseState>) -> impl IntoView {
    let slug = group.slug.clone();

    let is_open = {
        let slug = slug.clone();
        move || state.get().open_macros.contains(&slug)
    };
    let is_active = {
        let slug = slug.clone();
        move || {
            let st = state.get();
            st.macro_slug == slug && st.sub_slug == ALL
        }
    };

    let toggle_slug = slug.clone();
    let select_slug = slug.clone();
    let tri_char = {
        let is_open = is_open.clone();
        move || if is_open() { "▼" } else { "▶" }
    };

    view! {
        <div class="treeItem" class:open=is_open.clone() class:active=is_active>
            <div class="treeRow">
                <button
                    class="tri"
                    type="button"
                    aria-label="Apri/chiudi"
                    on:click=move |_| state.update(|st| st.toggle_macro(&toggle_slug))
                >
                    <span class="triBox">{tri_char}</span>
                </button>
                <button
                    class="macroBtn"
                    type="button"
                    on:click=move |_| {
                        state.update(|st| st.select_macro(&select_slug));
                        persist_state(state);
                    }
                >
                    {group.name.clone()}
                </button>
                <span class="cnt">{group.total}</span>
            </div>

            <div class="children">
                {group
                    .cats
                    .iter()
                    .map(|cat| {
                        let macro_slug = slug.clone();
                        let sub_slug = cat.slug.clone();
                        let active_macro = slug.clone();
                        let active_sub = cat.slug.clone();
                        view! {
                            <button
                                class="subBtn"
                                type="button"
                                title=cat.full.clone()
                                class:active=move || {
                                    let st = state.get();
                                    st.macro_slug == active_macro && st.sub_slug == active_sub
                                }
                                on:click=move |_| {
                                    state.update(|st| st.select_sub(&macro_slug, &sub_slug));
                                    persist_state(state);
                                }
                            >
                                <span>{cat.short.clone()}</span>
                                <small>{cat.count}</small>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
