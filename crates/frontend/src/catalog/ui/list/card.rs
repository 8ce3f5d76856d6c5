use catalogo::Product;
use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;

/// One product card of the grid. The whole card behaves as a link to
/// the product page (click, Enter or Space).
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let badge = if product.micro_badge.is_empty() {
        "SENZA CATEGORIA".to_string()
    } else {
        product
            .micro_badge
            .to_uppercase()
            .chars()
            .take(22)
            .collect()
    };

    let meta = if product.cat_line.is_empty() {
        product.category.clone()
    } else {
        product.cat_line.clone()
    };
    let brand = product.brand.trim().to_string();

    let sku_click = product.sku.clone();
    let sku_key = product.sku.clone();
    let open_label = format!("Apri {}", product.title);

    view! {
        <article
            class="card"
            role="link"
            tabindex="0"
            aria-label=open_label
            on:click=move |_| ctx.open_product(&sku_click)
            on:keydown=move |ev| {
                if ev.key() == "Enter" || ev.key() == " " {
                    ev.prevent_default();
                    ctx.open_product(&sku_key);
                }
            }
        >
            <div class="thumb">
                <span class="badge">{badge}</span>
                <div class="photoFrame">
                    <img src=product.cover.clone() alt=product.title.clone() loading="lazy" />
                </div>
            </div>

            <div class="content">
                <h3 class="title">{product.title.clone()}</h3>

                <div class="metaLine">{meta}</div>
                {(!brand.is_empty()).then(|| view! { <div class="metaLine brandLine">{brand}</div> })}

                <div class="bottomRow">
                    <div class="price">{product.price_label.clone()}</div>
                    <span class="openBtn">"Apri →"</span>
                </div>
            </div>
        </article>
    }
}
