use catalogo::{paginate, sort_products, Product, SortMode, ViewMode, ALL};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use super::card::ProductCard;
use super::mega::MegaOverlay;
use super::pager::Pager;
use super::state::{create_state, persist_state};
use super::tree::CategoryTree;
use crate::catalog::store::{CatalogStore, LoadState};
use crate::config::SEARCH_DEBOUNCE_MS;
use crate::shared::dom::{scroll_window_top, set_body_scroll_locked};

#[component]
pub fn ListingPage() -> impl IntoView {
    let store = leptos::context::use_context::<CatalogStore>()
        .expect("CatalogStore context not found");
    store.ensure_loaded(false);

    let state = create_state();

    // Open the two most populated macros once the model is available,
    // unless the user already expanded something.
    let seeded = StoredValue::new(false);
    Effect::new(move |_| {
        let LoadState::Ready(data) = store.state.get() else {
            return;
        };
        if seeded.get_value() {
            return;
        }
        seeded.set_value(true);
        state.update(|st| {
            if st.open_macros.is_empty() {
                for group in data.model.iter().take(2) {
                    st.open_macros.insert(group.slug.clone());
                }
                if st.macro_slug != ALL {
                    st.open_macros.insert(st.macro_slug.clone());
                }
            }
        });
    });

    // Filtered + sorted result set for the current state.
    let filtered = move || -> Vec<Product> {
        let LoadState::Ready(data) = store.state.get() else {
            return Vec::new();
        };
        let st = state.get();
        let mut list: Vec<Product> = data
            .products
            .iter()
            .filter(|p| st.matches(p))
            .cloned()
            .collect();
        sort_products(&mut list, st.sort);
        list
    };

    let current_slice = move || {
        let st = state.get();
        paginate(filtered().len(), st.per_page, st.page)
    };

    let page_items = move || -> Vec<Product> {
        let list = filtered();
        let st = state.get();
        let slice = paginate(list.len(), st.per_page, st.page);
        list[slice.start..slice.end].to_vec()
    };

    let meta_text = move || {
        let total = filtered().len();
        if total == 0 {
            "Mostro 0-0 di 0 prodotto(i)".to_string()
        } else {
            let slice = current_slice();
            format!(
                "Mostro {}-{} di {} prodotto(i)",
                slice.start + 1,
                slice.end,
                total
            )
        }
    };

    let heading = move || match store.state.get() {
        LoadState::Ready(data) => state.get().current_label(&data.model),
        _ => "Home".to_string(),
    };

    let count_pill = move || match store.state.get() {
        LoadState::Ready(data) => format!("{} prodotti", data.products.len()),
        LoadState::Failed(_) => "Errore".to_string(),
        _ => "Carico...".to_string(),
    };

    // Debounced free-text search: the input signal updates on every
    // keystroke, the browse state only after the timer survives.
    let (filter_input, set_filter_input) = signal(state.get_untracked().q.clone());
    let debounce_gen = StoredValue::new(0u64);
    let handle_search_input = move |val: String| {
        set_filter_input.set(val.clone());
        let gen = debounce_gen.get_value() + 1;
        debounce_gen.set_value(gen);
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if debounce_gen.get_value() == gen {
                state.update(|st| st.set_query(val));
                persist_state(state);
            }
        });
    };

    let mega_open = RwSignal::new(false);
    let open_mega = move |_| {
        mega_open.set(true);
        set_body_scroll_locked(true);
    };

    let goto_page = Callback::new(move |page: usize| {
        let pages = current_slice().pages;
        state.update(|st| st.goto_page(page, pages));
        persist_state(state);
        scroll_window_top();
    });

    view! {
        <section class="catalogo" id="catalogo">
            <aside class="sidebar">
                <div class="sideHead">
                    <span class="sideTitle">"Categorie"</span>
                    <span class="countPill">{count_pill}</span>
                </div>
                <CategoryTree state=state />
            </aside>

            <div class="listing">
                <div class="crumbs">
                    <span class="crumbLabel">{heading}</span>
                    <span class="metaHead">{meta_text}</span>
                </div>

                <div class="toolbar">
                    <input
                        class="search"
                        type="search"
                        placeholder="Cerca per nome, marca, codice o categoria…"
                        prop:value=move || filter_input.get()
                        on:input=move |ev| handle_search_input(event_target_value(&ev))
                    />

                    <button class="megaBtn" type="button" on:click=open_mega>
                        "Tutte le categorie ▾"
                    </button>

                    <select
                        class="sortSel"
                        on:change=move |ev| {
                            state.update(|st| st.set_sort(SortMode::parse(&event_target_value(&ev))));
                            persist_state(state);
                        }
                        prop:value=move || state.get().sort.as_str().to_string()
                    >
                        <option value="rel">"Rilevanza"</option>
                        <option value="az">"Nome (A-Z)"</option>
                        <option value="priceUp">"Prezzo crescente"</option>
                        <option value="priceDown">"Prezzo decrescente"</option>
                    </select>

                    <select
                        class="perPageSel"
                        on:change=move |ev| {
                            let per = event_target_value(&ev).parse().unwrap_or(12);
                            state.update(|st| st.set_per_page(per));
                            persist_state(state);
                        }
                        prop:value=move || state.get().per_page.to_string()
                    >
                        <option value="12">"12 per pagina"</option>
                        <option value="24">"24 per pagina"</option>
                        <option value="48">"48 per pagina"</option>
                    </select>

                    <div class="viewToggle">
                        <button
                            class="viewBtn"
                            type="button"
                            title="Griglia"
                            class:active=move || state.get().view == ViewMode::Grid
                            on:click=move |_| {
                                state.update(|st| st.view = ViewMode::Grid);
                                persist_state(state);
                            }
                        >
                            "▦"
                        </button>
                        <button
                            class="viewBtn"
                            type="button"
                            title="Elenco"
                            class:active=move || state.get().view == ViewMode::List
                            on:click=move |_| {
                                state.update(|st| st.view = ViewMode::List);
                                persist_state(state);
                            }
                        >
                            "☰"
                        </button>
                    </div>

                    <button
                        class="resetAll"
                        type="button"
                        on:click=move |_| {
                            state.update(|st| st.select_all());
                            persist_state(state);
                        }
                    >
                        "Azzera filtri"
                    </button>
                </div>

                <div class="metaLineTop">{meta_text}</div>

                <div class="grid" class:list=move || state.get().view == ViewMode::List>
                    {move || match store.state.get() {
                        LoadState::Failed(err) => {
                            view! {
                                <div class="emptyState">
                                    <div>
                                        <h3>"Errore caricamento"</h3>
                                        <div class="emptyHint">
                                            "Non riesco a caricare il catalogo. Apri la console (F12) per il dettaglio."
                                        </div>
                                        <div class="emptyDetail">{err}</div>
                                        <button
                                            class="retryBtn"
                                            type="button"
                                            on:click=move |_| store.ensure_loaded(true)
                                        >
                                            "Riprova"
                                        </button>
                                    </div>
                                </div>
                            }
                                .into_any()
                        }
                        LoadState::Ready(_) => {
                            let items = page_items();
                            if items.is_empty() {
                                view! {
                                    <div class="emptyState">
                                        <div>
                                            <h3>"Nessun prodotto trovato"</h3>
                                            <div class="emptyHint">"Prova a cambiare ricerca o categoria."</div>
                                        </div>
                                    </div>
                                }
                                    .into_any()
                            } else {
                                items
                                    .into_iter()
                                    .map(|p| view! { <ProductCard product=p /> })
                                    .collect_view()
                                    .into_any()
                            }
                        }
                        _ => {
                            view! { <div class="emptyState"><div>"Caricamento catalogo…"</div></div> }
                                .into_any()
                        }
                    }}
                </div>

                <Show when=move || !filtered().is_empty()>
                    <Pager
                        current=Signal::derive(move || current_slice().page)
                        pages=Signal::derive(move || current_slice().pages)
                        on_page=goto_page
                    />
                </Show>

                <div class="metaLineBottom">{meta_text}</div>
            </div>
        </section>

        <MegaOverlay open=mega_open state=state />
    }
}
