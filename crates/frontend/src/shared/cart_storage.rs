//! Local-storage persistence of the cart.
//!
//! The cart is read and fully rewritten on each mutation. Storage being
//! unavailable (private mode, disabled cookies) degrades to a no-op:
//! the helpers below never propagate an error.

use catalogo::{add_to_cart, total_qty, CartEntry};

use crate::config::CART_STORAGE_KEY;

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn load_cart() -> Vec<CartEntry> {
    let Some(raw) = storage().and_then(|s| s.get_item(CART_STORAGE_KEY).ok().flatten()) else {
        return Vec::new();
    };
    serde_json::from_str(&raw).unwrap_or_default()
}

pub fn save_cart(cart: &[CartEntry]) {
    let Some(storage) = storage() else { return };
    let Ok(raw) = serde_json::to_string(cart) else { return };
    let _ = storage.set_item(CART_STORAGE_KEY, &raw);
}

/// Read-merge-write; returns the updated cart.
pub fn add_entry(entry: CartEntry) -> Vec<CartEntry> {
    let mut cart = load_cart();
    add_to_cart(&mut cart, entry);
    save_cart(&cart);
    cart
}

/// Total unit count for the header badge.
pub fn badge_total() -> u32 {
    total_qty(&load_cart())
}
