use catalogo::{find_by_sku, Product};
use leptos::prelude::*;

use super::buy_box::BuyBox;
use super::gallery::Gallery;
use crate::catalog::store::{CatalogStore, LoadState};
use crate::config::SITE_NAME;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::dom::set_document_title;
use crate::shared::links::{marketplace_search_url, whatsapp_url};

#[component]
pub fn ProductPage(sku: String) -> impl IntoView {
    let store = leptos::context::use_context::<CatalogStore>()
        .expect("CatalogStore context not found");
    store.ensure_loaded(false);

    view! {
        <section class="productPage">
            {move || match store.state.get() {
                LoadState::Failed(err) => {
                    view! {
                        <div class="pEmpty">
                            <h2>"Errore caricamento prodotto"</h2>
                            <p>
                                "Non riesco a caricare il catalogo. Apri la console (F12) per vedere il dettaglio."
                            </p>
                            <p class="pEmptyDetail">{err}</p>
                        </div>
                    }
                        .into_any()
                }
                LoadState::Ready(data) => {
                    match find_by_sku(&data.products, &sku) {
                        Some(product) => {
                            view! { <ProductDetails product=product.clone() /> }.into_any()
                        }
                        None => view! { <NotFound /> }.into_any(),
                    }
                }
                _ => view! { <div class="pEmpty"><p>"Caricamento…"</p></div> }.into_any(),
            }}
        </section>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="pEmpty">
            <h2>"Prodotto non trovato"</h2>
            <p>"Il codice richiesto non esiste nel catalogo."</p>
            <button class="backBtn" type="button" on:click=move |_| ctx.open_listing()>
                "← Torna al catalogo"
            </button>
        </div>
    }
}

#[component]
fn ProductDetails(product: Product) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    set_document_title(&format!("{} • {}", product.title, SITE_NAME));

    let crumb = if product.cat_line.is_empty() {
        "Prodotto".to_string()
    } else {
        product.cat_line.clone()
    };
    let badge = if product.micro_badge.is_empty() {
        "PRODOTTO".to_string()
    } else {
        product.micro_badge.to_uppercase()
    };
    // The export carries no description; keep the page coherent anyway.
    let desc = format!(
        "Prodotto selezionato dal catalogo {}. Codice: {}.",
        SITE_NAME, product.sku
    );
    let cat_label = if product.cat_line.is_empty() {
        "—".to_string()
    } else {
        product.cat_line.clone()
    };
    let brand_label = if product.brand.trim().is_empty() {
        "—".to_string()
    } else {
        product.brand.clone()
    };
    let buy_href = marketplace_search_url(&product.title, &product.sku);
    let wa_href = whatsapp_url(&product.title, &product.sku);

    view! {
        <div class="pCrumbs">
            <button class="backBtn" type="button" on:click=move |_| ctx.open_listing()>
                "← Catalogo"
            </button>
            <span class="crumbPill">{crumb}</span>
        </div>

        <div class="pLayout">
            <Gallery sku=product.sku.clone() title=product.title.clone() />

            <div class="pInfo">
                <span class="badge">{badge}</span>
                <h1 class="pTitle">{product.title.clone()}</h1>
                <p class="pDesc">{desc}</p>

                <div class="pPrice">{product.price_label.clone()}</div>
                <div class="skuLine">{format!("SKU: {}", product.sku)}</div>

                <dl class="pSpecs">
                    <dt>"Categoria"</dt>
                    <dd>{cat_label}</dd>
                    <dt>"Produttore"</dt>
                    <dd>{brand_label}</dd>
                </dl>

                <div class="pActions">
                    <a class="buyBtn" href=buy_href target="_blank" rel="noopener">
                        "Cerca su eBay"
                    </a>
                    <a class="waBtn" href=wa_href target="_blank" rel="noopener">
                        "Chiedi info su WhatsApp"
                    </a>
                </div>

                <BuyBox product=product.clone() />
            </div>
        </div>
    }
}
