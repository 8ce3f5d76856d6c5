use catalogo::{entry_for, total_qty, Product};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::config::TOAST_MS;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::cart_storage;

/// Quantity stepper plus the add-to-cart action. The cart is read,
/// merged by SKU and fully rewritten on every add.
#[component]
pub fn BuyBox(product: Product) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let qty = RwSignal::new(1u32);
    let (toast, set_toast) = signal(Option::<String>::None);
    let toast_gen = StoredValue::new(0u64);

    let show_toast = move |msg: String| {
        set_toast.set(Some(msg));
        let gen = toast_gen.get_value() + 1;
        toast_gen.set_value(gen);
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(TOAST_MS).await;
            if toast_gen.get_value() == gen {
                set_toast.set(None);
            }
        });
    };

    let add_to_cart = move |_| {
        let units = qty.get_untracked().max(1);
        let cart = cart_storage::add_entry(entry_for(&product, units));
        ctx.cart_count.set(total_qty(&cart));
        show_toast(format!("Aggiunto al carrello: {} × {}", units, product.title));
    };

    view! {
        <div class="buyRow">
            <div class="qtyBox">
                <button
                    class="qtyBtn"
                    type="button"
                    aria-label="Diminuisci"
                    on:click=move |_| qty.update(|q| *q = q.saturating_sub(1).max(1))
                >
                    "−"
                </button>
                <input
                    class="qtyInput"
                    type="number"
                    min="1"
                    prop:value=move || qty.get().to_string()
                    on:change=move |ev| {
                        let parsed = event_target_value(&ev).parse::<u32>().unwrap_or(1);
                        qty.set(parsed.max(1));
                    }
                />
                <button
                    class="qtyBtn"
                    type="button"
                    aria-label="Aumenta"
                    on:click=move |_| qty.update(|q| *q += 1)
                >
                    "+"
                </button>
            </div>

            <button class="addCart" type="button" on:click=add_to_cart>
                "Aggiungi al carrello"
            </button>
        </div>

        <div class="toast" class:show=move || toast.get().is_some()>
            {move || toast.get().unwrap_or_default()}
        </div>
    }
}
