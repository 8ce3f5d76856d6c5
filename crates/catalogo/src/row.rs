//! Raw Danea export rows and their normalization into [`Product`]s.
//!
//! The export is a JSON array mixing two row shapes: category markers
//! (the empty-string column holds `"Categoria: ..."`) and product rows
//! (non-empty `Cod.`). Markers set the category carried into following
//! product rows that lack their own.

use anyhow::Context;
use serde::Deserialize;

use crate::price::{format_eur, parse_price_number, parse_price_text};
use crate::product::Product;
use crate::text::{norm, slugify, split_parts};

/// Category applied when neither the row nor a preceding marker has one.
pub const DEFAULT_CATEGORY: &str = "Senza categoria";

/// A single spreadsheet cell: the export is loose about types, numeric
/// columns show up as strings and vice versa.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    #[default]
    Null,
    Num(f64),
    Text(String),
}

impl Cell {
    /// Whitespace-normalized text content; numbers render without a
    /// trailing `.0`, null renders empty.
    fn as_text(&self) -> String {
        match self {
            Cell::Null => String::new(),
            Cell::Text(s) => norm(s),
            Cell::Num(n) if n.fract() == 0.0 => format!("{}", *n as i64),
            Cell::Num(n) => format!("{}", n),
        }
    }

    /// Interprets the cell as a list price. Non-negative or NaN.
    fn as_price(&self) -> f64 {
        match self {
            Cell::Null => f64::NAN,
            Cell::Num(n) => parse_price_number(*n),
            Cell::Text(s) => parse_price_text(s),
        }
    }
}

/// One record of the export with the recognized columns; anything else
/// is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRow {
    /// Category-marker text lives under the empty column name.
    #[serde(rename = "", default)]
    pub marker: Cell,
    #[serde(rename = "Cod.", default)]
    pub code: Cell,
    #[serde(rename = "Descrizione", default)]
    pub description: Cell,
    #[serde(rename = "Categoria", default)]
    pub category: Cell,
    #[serde(rename = "Listino 1 (ivato)", default)]
    pub list_price: Cell,
    #[serde(rename = "Produttore", default)]
    pub brand: Cell,
}

/// Parses the fetched body. The export must be a JSON array of rows.
pub fn parse_rows(text: &str) -> anyhow::Result<Vec<RawRow>> {
    let value: serde_json::Value =
        serde_json::from_str(text).context("products.json: invalid JSON")?;
    anyhow::ensure!(value.is_array(), "products.json: not a JSON array");
    serde_json::from_value(value).context("products.json: unexpected row shape")
}

/// Converts raw rows into products, in input order.
///
/// Marker rows update the carried category (text after the first `:`,
/// when non-empty) and are skipped. Rows without a product code are
/// skipped. A product row's own non-empty `Categoria` always overrides
/// the carried one; an empty one inherits it.
pub fn normalize_rows(rows: &[RawRow], placeholder_cover: &str) -> Vec<Product> {
    let mut current_category = DEFAULT_CATEGORY.to_string();
    let mut out = Vec::new();

    for row in rows {
        let marker = row.marker.as_text();
        if marker.to_lowercase().starts_with("categoria") {
            if let Some((_, rest)) = marker.split_once(':') {
                let found = norm(rest);
                if !found.is_empty() {
                    current_category = found;
                }
            }
            continue;
        }

        let sku = row.code.as_text();
        if sku.is_empty() {
            continue;
        }

        let title = {
            let t = row.description.as_text();
            if t.is_empty() {
                "(Senza nome)".to_string()
            } else {
                t
            }
        };
        let brand = row.brand.as_text();

        let own = row.category.as_text();
        let category = if own.is_empty() {
            current_category.clone()
        } else {
            own
        };

        let parts = split_parts(&category);
        let macro_name = parts
            .first()
            .cloned()
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
        let micro_badge = parts.last().cloned().unwrap_or_else(|| macro_name.clone());
        let cat_line = parts.join(" » ");

        let price = row.list_price.as_price();

        out.push(Product {
            macro_slug: slugify(&macro_name),
            cat_slug: slugify(&category),
            price_label: format_eur(price),
            sku,
            title,
            brand,
            category,
            cat_line,
            macro_name,
            micro_badge,
            price,
            cover: placeholder_cover.to_string(),
        });
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows_from(value: serde_json::Value) -> Vec<RawRow> {
        parse_rows(&value.to_string()).unwrap()
    }

    #[test]
    fn non_array_body_is_rejected() {
        assert!(parse_rows("{\"a\":1}").is_err());
        assert!(parse_rows("nope").is_err());
        assert!(parse_rows("[]").unwrap().is_empty());
    }

    #[test]
    fn rows_without_code_are_skipped() {
        let rows = rows_from(json!([
            { "Cod.": "", "Descrizione": "vuota" },
            { "Descrizione": "senza codice" },
            { "Cod.": "A1", "Descrizione": "vera" }
        ]));
        let products = normalize_rows(&rows, "ph.jpg");
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].sku, "A1");
    }

    #[test]
    fn marker_rows_set_the_carried_category() {
        let rows = rows_from(json!([
            { "": "Categoria: Ancore", "Cod.": "", "Descrizione": "" },
            { "Cod.": "A1", "Descrizione": "Ancora 5kg", "Categoria": "", "Listino 1 (ivato)": "-49,90" }
        ]));
        let products = normalize_rows(&rows, "ph.jpg");
        assert_eq!(products.len(), 1);
        let p = &products[0];
        assert_eq!(p.sku, "A1");
        assert_eq!(p.category, "Ancore");
        assert_eq!(p.macro_name, "Ancore");
        assert_eq!(p.price, 49.9);
        assert_eq!(p.price_label, "€ 49,90");
    }

    #[test]
    fn own_category_overrides_the_carried_one() {
        let rows = rows_from(json!([
            { "": "Categoria: Ancore" },
            { "Cod.": "A1", "Categoria": "Vernici » Antivegetativa" },
            { "Cod.": "A2" }
        ]));
        let products = normalize_rows(&rows, "ph.jpg");
        assert_eq!(products[0].category, "Vernici » Antivegetativa");
        assert_eq!(products[0].macro_name, "Vernici");
        assert_eq!(products[0].micro_badge, "Antivegetativa");
        assert_eq!(products[0].cat_line, "Vernici » Antivegetativa");
        // the marker still applies to the next row
        assert_eq!(products[1].category, "Ancore");
    }

    #[test]
    fn empty_marker_text_keeps_the_previous_category() {
        let rows = rows_from(json!([
            { "": "Categoria: Ancore" },
            { "": "Categoria:   " },
            { "Cod.": "A1" }
        ]));
        let products = normalize_rows(&rows, "ph.jpg");
        assert_eq!(products[0].category, "Ancore");
    }

    #[test]
    fn defaults_degrade_gracefully() {
        let rows = rows_from(json!([
            { "Cod.": "A1", "Listino 1 (ivato)": "n.d." }
        ]));
        let p = &normalize_rows(&rows, "ph.jpg")[0];
        assert_eq!(p.title, "(Senza nome)");
        assert_eq!(p.category, DEFAULT_CATEGORY);
        assert!(p.price.is_nan());
        assert_eq!(p.price_label, "—");
        assert_eq!(p.cover, "ph.jpg");
    }

    #[test]
    fn numeric_cells_are_accepted() {
        let rows = rows_from(json!([
            { "Cod.": "A1", "Listino 1 (ivato)": -1234.5 }
        ]));
        let p = &normalize_rows(&rows, "ph.jpg")[0];
        assert_eq!(p.price, 1234.5);
        assert_eq!(p.price_label, "€ 1.234,50");
    }

    #[test]
    fn order_is_preserved() {
        let rows = rows_from(json!([
            { "Cod.": "B" }, { "Cod.": "A" }, { "Cod.": "C" }
        ]));
        let skus: Vec<_> = normalize_rows(&rows, "ph.jpg")
            .into_iter()
            .map(|p| p.sku)
            .collect();
        assert_eq!(skus, ["B", "A", "C"]);
    }
}
