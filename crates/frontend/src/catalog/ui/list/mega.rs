use catalogo::{split_into_columns, BrowseState};
use leptos::prelude::*;

use super::state::persist_state;
use crate::catalog::store::{CatalogStore, LoadState};
use crate::config::MEGA_COLUMNS;
use crate::shared::dom::{scroll_window_top, set_body_scroll_locked};

/// Full-screen category browser. Closes on the ✕ button, a backdrop
/// click, Escape, or after picking a category.
#[component]
pub fn MegaOverlay(open: RwSignal<bool>, state: RwSignal<BrowseState>) -> impl IntoView {
    let store = leptos::context::use_context::<CatalogStore>()
        .expect("CatalogStore context not found");

    let close = move || {
        open.set(false);
        set_body_scroll_locked(false);
    };

    // Escape closes the overlay from anywhere on the page.
    {
        use wasm_bindgen::prelude::*;
        use wasm_bindgen::JsCast;

        // The leaked listener can outlive this page; the try_ variants
        // keep it inert once the signal is disposed.
        let closure = Closure::wrap(Box::new(move |ev: web_sys::KeyboardEvent| {
            if ev.key() == "Escape" && open.try_get_untracked().unwrap_or(false) {
                let _ = open.try_set(false);
                set_body_scroll_locked(false);
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget(); // keep the listener alive for the page lifetime
        }
    }

    let pick_sub = move |macro_slug: &str, sub_slug: &str| {
        state.update(|st| st.select_sub(macro_slug, sub_slug));
        persist_state(state);
        close();
        scroll_window_top();
    };

    let pick_all = move |_| {
        state.update(|st| st.select_all());
        persist_state(state);
        close();
        scroll_window_top();
    };

    view! {
        <div
            class="catOverlay"
            class:open=move || open.get()
            on:click=move |ev| {
                // only the backdrop itself, not the panel
                if ev.target() == ev.current_target() {
                    close();
                }
            }
        >
            <div class="catPanel">
                <div class="catHead">
                    <h2>"Tutte le categorie"</h2>
                    <span class="catCount">
                        {move || match store.state.get() {
                            LoadState::Ready(data) => format!("{} prodotti", data.products.len()),
                            _ => String::new(),
                        }}
                    </span>
                    <button class="megaAll" type="button" on:click=pick_all>
                        "Mostra tutto"
                    </button>
                    <button
                        class="megaClose"
                        type="button"
                        aria-label="Chiudi"
                        on:click=move |_| close()
                    >
                        "✕"
                    </button>
                </div>

                <div class="catBody">
                    {move || match store.state.get() {
                        LoadState::Ready(data) => {
                            let columns = split_into_columns(&data.model, MEGA_COLUMNS);
                            view! {
                                <div class="catCols">
                                    {columns
                                        .into_iter()
                                        .map(|column| {
                                            view! {
                                                <div class="catCol">
                                                    {column
                                                        .into_iter()
                                                        .map(|group| {
                                                            let macro_slug = group.slug.clone();
                                                            view! {
                                                                <div class="colTitle">{group.name.clone()}</div>
                                                                <div class="colList">
                                                                    {group
                                                                        .cats
                                                                        .iter()
                                                                        .map(|cat| {
                                                                            let macro_slug = macro_slug.clone();
                                                                            let sub_slug = cat.slug.clone();
                                                                            view! {
                                                                                <button
                                                                                    class="colItem"
                                                                                    type="button"
                                                                                    title=cat.full.clone()
                                                                                    on:click=move |_| pick_sub(&macro_slug, &sub_slug)
                                                                                >
                                                                                    <span class="colArrow">"›"</span>
                                                                                    <span class="colLabel">{cat.short.clone()}</span>
                                                                                    <span class="colCount">{cat.count}</span>
                                                                                </button>
                                                                            }
                                                                        })
                                                                        .collect_view()}
                                                                </div>
                                                            }
                                                        })
                                                        .collect_view()}
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                                .into_any()
                        }
                        _ => ().into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}
