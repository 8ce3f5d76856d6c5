//! Outbound link builders for the product page.

use urlencoding::encode;

use crate::config::{MARKETPLACE_SEARCH_BASE, WHATSAPP_NUMBER, WHATSAPP_TEXT};

/// Marketplace search keyed by title + SKU.
pub fn marketplace_search_url(title: &str, sku: &str) -> String {
    let query = format!("{title} {sku}");
    format!("{MARKETPLACE_SEARCH_BASE}{}", encode(query.trim()))
}

/// Messaging deep link with the templated product reference.
pub fn whatsapp_url(title: &str, sku: &str) -> String {
    let text = format!("{WHATSAPP_TEXT}\n\nProdotto: {title}\nCodice: {sku}");
    format!("https://wa.me/{WHATSAPP_NUMBER}?text={}", encode(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_url_is_percent_encoded() {
        let url = marketplace_search_url("Ancora inox 5kg", "A1");
        assert!(url.starts_with(MARKETPLACE_SEARCH_BASE));
        assert!(url.ends_with("Ancora%20inox%205kg%20A1"));
    }

    #[test]
    fn whatsapp_url_carries_the_template() {
        let url = whatsapp_url("Ancora", "A1");
        assert!(url.starts_with(&format!("https://wa.me/{WHATSAPP_NUMBER}?text=")));
        assert!(url.contains("Prodotto%3A%20Ancora"));
        assert!(url.contains("Codice%3A%20A1"));
    }
}
