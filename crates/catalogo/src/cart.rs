//! Persisted shopping-cart entries.
//!
//! The cart lives in browser local storage as a JSON array; the key
//! names below are part of that persisted format and must not change.

use serde::{Deserialize, Serialize};

use crate::product::Product;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    pub sku: String,
    pub title: String,
    /// `None` when the product price was unparseable.
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(rename = "priceLabel", default)]
    pub price_label: String,
    #[serde(rename = "microBadge", default)]
    pub micro_badge: String,
    #[serde(rename = "catLine", default)]
    pub cat_line: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub qty: u32,
}

/// Builds a cart entry for `qty` units of a product.
pub fn entry_for(product: &Product, qty: u32) -> CartEntry {
    CartEntry {
        sku: product.sku.clone(),
        title: product.title.clone(),
        price: if product.price.is_nan() {
            None
        } else {
            Some(product.price)
        },
        price_label: product.price_label.clone(),
        micro_badge: if product.micro_badge.is_empty() {
            "PRODOTTO".to_string()
        } else {
            product.micro_badge.clone()
        },
        cat_line: product.cat_line.clone(),
        brand: product.brand.clone(),
        qty,
    }
}

/// Merges an entry into the cart: same SKU accumulates quantity, a new
/// SKU is appended. The cart never holds two entries for one SKU.
pub fn add_to_cart(cart: &mut Vec<CartEntry>, entry: CartEntry) {
    match cart.iter_mut().find(|e| e.sku == entry.sku) {
        Some(existing) => existing.qty += entry.qty,
        None => cart.push(entry),
    }
}

/// Total unit count across the cart (the header badge number).
pub fn total_qty(cart: &[CartEntry]) -> u32 {
    cart.iter().map(|e| e.qty).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(sku: &str, qty: u32) -> CartEntry {
        CartEntry {
            sku: sku.to_string(),
            title: format!("Prodotto {sku}"),
            price: Some(10.0),
            price_label: "€ 10,00".to_string(),
            micro_badge: "PRODOTTO".to_string(),
            cat_line: String::new(),
            brand: String::new(),
            qty,
        }
    }

    #[test]
    fn repeated_adds_accumulate_quantity() {
        let mut cart = Vec::new();
        add_to_cart(&mut cart, entry("A1", 2));
        add_to_cart(&mut cart, entry("A1", 3));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].qty, 5);
    }

    #[test]
    fn distinct_skus_stay_separate() {
        let mut cart = Vec::new();
        add_to_cart(&mut cart, entry("A1", 1));
        add_to_cart(&mut cart, entry("B2", 1));
        assert_eq!(cart.len(), 2);
        assert_eq!(total_qty(&cart), 2);
    }

    #[test]
    fn persisted_shape_uses_the_storage_key_names() {
        let json = serde_json::to_value(entry("A1", 2)).unwrap();
        assert!(json.get("priceLabel").is_some());
        assert!(json.get("microBadge").is_some());
        assert!(json.get("catLine").is_some());
        // round trip
        let back: CartEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry("A1", 2));
    }

    #[test]
    fn unpriced_products_serialize_a_null_price() {
        let mut product_entry = entry("A1", 1);
        product_entry.price = None;
        let json = serde_json::to_value(&product_entry).unwrap();
        assert!(json["price"].is_null());
    }
}
