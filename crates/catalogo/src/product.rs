//! Canonical product record produced by the row normalizer.

use crate::text::norm;

/// One normalized catalog product.
///
/// `sku` is the spreadsheet code verbatim, leading zeros preserved
/// (`"0016189"`). `price` is [`f64::NAN`] when the list price could not
/// be parsed; `price_label` already carries the `—` placeholder then.
#[derive(Debug, Clone)]
pub struct Product {
    pub sku: String,
    pub title: String,
    pub brand: String,
    /// Full slash-path as found in the export, e.g. `"Nautica » Ancore"`.
    pub category: String,
    /// Same path with normalized `" » "` spacing, for display.
    pub cat_line: String,
    /// First path segment.
    pub macro_name: String,
    /// Last path segment, shown uppercased on cards.
    pub micro_badge: String,
    pub macro_slug: String,
    pub cat_slug: String,
    pub price: f64,
    pub price_label: String,
    /// Cover image path (placeholder until real photos exist).
    pub cover: String,
}

/// Resolves a product by SKU: exact match first, then a soft fallback
/// where either string contains the other. First match wins.
pub fn find_by_sku<'a>(products: &'a [Product], wanted: &str) -> Option<&'a Product> {
    let wanted = norm(wanted);
    if wanted.is_empty() {
        return None;
    }

    products
        .iter()
        .find(|p| p.sku == wanted)
        .or_else(|| {
            products
                .iter()
                .find(|p| p.sku.contains(&wanted) || wanted.contains(&p.sku))
        })
}

/// Candidate gallery paths for a product: numbered per-SKU filenames
/// plus the placeholder. Existence is not checked here; the view swaps
/// in the placeholder when an image fails to load.
pub fn image_candidates(sku: &str, placeholder: &str) -> Vec<String> {
    vec![
        format!("assets/img/prodotti/{sku}-1.jpg"),
        format!("assets/img/prodotti/{sku}-2.jpg"),
        format!("assets/img/prodotti/{sku}-3.jpg"),
        placeholder.to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(sku: &str) -> Product {
        Product {
            sku: sku.to_string(),
            title: format!("Prodotto {sku}"),
            brand: String::new(),
            category: "Senza categoria".to_string(),
            cat_line: "Senza categoria".to_string(),
            macro_name: "Senza categoria".to_string(),
            micro_badge: "Senza categoria".to_string(),
            macro_slug: "senza-categoria".to_string(),
            cat_slug: "senza-categoria".to_string(),
            price: f64::NAN,
            price_label: "—".to_string(),
            cover: "placeholder.jpg".to_string(),
        }
    }

    #[test]
    fn exact_match_wins_over_substring() {
        let all = vec![product("016189"), product("0016189")];
        assert_eq!(find_by_sku(&all, "0016189").unwrap().sku, "0016189");
    }

    #[test]
    fn substring_fallback_both_directions() {
        let all = vec![product("A100"), product("B200")];
        // query contained in a sku
        assert_eq!(find_by_sku(&all, "200").unwrap().sku, "B200");
        // sku contained in the query
        assert_eq!(find_by_sku(&all, "xxA100yy").unwrap().sku, "A100");
    }

    #[test]
    fn empty_query_finds_nothing() {
        let all = vec![product("A100")];
        assert!(find_by_sku(&all, "  ").is_none());
    }

    #[test]
    fn gallery_candidates_end_with_placeholder() {
        let imgs = image_candidates("A1", "ph.jpg");
        assert_eq!(imgs.len(), 4);
        assert_eq!(imgs[0], "assets/img/prodotti/A1-1.jpg");
        assert_eq!(imgs[3], "ph.jpg");
    }
}
