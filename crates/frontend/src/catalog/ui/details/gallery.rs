use catalogo::image_candidates;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::PLACEHOLDER_COVER;

/// Swaps a broken image for the placeholder. Guarded so a missing
/// placeholder cannot loop the error handler.
fn on_image_error(ev: web_sys::ErrorEvent) {
    let Some(img) = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlImageElement>().ok())
    else {
        return;
    };
    if !img.src().ends_with("placeholder.jpg") {
        img.set_src(PLACEHOLDER_COVER);
    }
}

/// Hero image plus thumbstrip. Candidate paths follow the fixed
/// per-SKU pattern; nothing is verified up front.
#[component]
pub fn Gallery(sku: String, title: String) -> impl IntoView {
    let images = image_candidates(&sku, PLACEHOLDER_COVER);
    let (active, set_active) = signal(0usize);

    let hero_src = {
        let images = images.clone();
        move || images[active.get().min(images.len() - 1)].clone()
    };

    view! {
        <div class="gallery">
            <div class="hero">
                <img
                    src=hero_src
                    alt=title.clone()
                    on:error=on_image_error
                />
            </div>

            <div class="thumbs">
                {images
                    .iter()
                    .enumerate()
                    .map(|(i, src)| {
                        let alt = format!("{} foto {}", title, i + 1);
                        view! {
                            <div
                                class="thumb"
                                role="button"
                                tabindex="0"
                                aria-label=format!("Foto {}", i + 1)
                                class:active=move || active.get() == i
                                on:click=move |_| set_active.set(i)
                                on:keydown=move |ev| {
                                    if ev.key() == "Enter" || ev.key() == " " {
                                        ev.prevent_default();
                                        set_active.set(i);
                                    }
                                }
                            >
                                <div class="frame">
                                    <img src=src.clone() alt=alt on:error=on_image_error />
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
