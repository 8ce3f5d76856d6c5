//! Category model: macro → sub-category tree with counts, rebuilt in
//! full on every catalog load.

use std::collections::HashMap;

use crate::product::Product;
use crate::text::{slugify, split_parts};

/// One full category path within a macro group.
#[derive(Debug, Clone, PartialEq)]
pub struct SubCategory {
    /// Full path, e.g. `"Nautica » Ancore"`.
    pub full: String,
    /// Last path segment, used as the visible label.
    pub short: String,
    pub slug: String,
    pub count: usize,
}

/// A macro category with its sub-categories, sorted by popularity.
#[derive(Debug, Clone, PartialEq)]
pub struct MacroGroup {
    pub name: String,
    pub slug: String,
    pub total: usize,
    pub cats: Vec<SubCategory>,
}

/// Groups products into macro groups with per-path counts.
///
/// Sub-categories sort descending by count within each macro, macros
/// descending by total; ties keep discovery order (the sorts are
/// stable).
pub fn build_model(products: &[Product]) -> Vec<MacroGroup> {
    struct Accum {
        name: String,
        cat_order: Vec<String>,
        counts: HashMap<String, usize>,
    }

    let mut macro_index: HashMap<String, usize> = HashMap::new();
    let mut accums: Vec<Accum> = Vec::new();

    for p in products {
        let idx = *macro_index.entry(p.macro_name.clone()).or_insert_with(|| {
            accums.push(Accum {
                name: p.macro_name.clone(),
                cat_order: Vec::new(),
                counts: HashMap::new(),
            });
            accums.len() - 1
        });
        let accum = &mut accums[idx];
        let count = accum.counts.entry(p.category.clone()).or_insert(0);
        if *count == 0 {
            accum.cat_order.push(p.category.clone());
        }
        *count += 1;
    }

    let mut groups: Vec<MacroGroup> = accums
        .into_iter()
        .map(|accum| {
            let mut cats: Vec<SubCategory> = accum
                .cat_order
                .iter()
                .map(|full| {
                    let parts = split_parts(full);
                    let short = parts.last().cloned().unwrap_or_else(|| full.clone());
                    SubCategory {
                        short,
                        slug: slugify(full),
                        count: accum.counts[full],
                        full: full.clone(),
                    }
                })
                .collect();
            cats.sort_by(|a, b| b.count.cmp(&a.count));

            let total = cats.iter().map(|c| c.count).sum();
            MacroGroup {
                slug: slugify(&accum.name),
                name: accum.name,
                total,
                cats,
            }
        })
        .collect();

    groups.sort_by(|a, b| b.total.cmp(&a.total));
    groups
}

/// Distributes macro groups over `cols` columns for the mega overlay:
/// heaviest group first, each appended to the currently lightest column
/// by cumulative count. A greedy heuristic, not an optimal partition.
pub fn split_into_columns(model: &[MacroGroup], cols: usize) -> Vec<Vec<MacroGroup>> {
    if cols == 0 {
        return Vec::new();
    }

    let mut sorted: Vec<&MacroGroup> = model.iter().collect();
    sorted.sort_by(|a, b| b.total.cmp(&a.total));

    let mut columns: Vec<Vec<MacroGroup>> = vec![Vec::new(); cols];
    let mut weights = vec![0usize; cols];

    for group in sorted {
        let lightest = weights
            .iter()
            .enumerate()
            .min_by_key(|(_, w)| **w)
            .map(|(i, _)| i)
            .unwrap_or(0);
        columns[lightest].push(group.clone());
        weights[lightest] += group.total;
    }

    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::{normalize_rows, parse_rows};

    fn products_with_categories(cats: &[&str]) -> Vec<Product> {
        let rows: Vec<serde_json::Value> = cats
            .iter()
            .enumerate()
            .map(|(i, cat)| serde_json::json!({ "Cod.": format!("P{i}"), "Categoria": cat }))
            .collect();
        let raw = parse_rows(&serde_json::Value::Array(rows).to_string()).unwrap();
        normalize_rows(&raw, "ph.jpg")
    }

    #[test]
    fn sub_counts_sum_to_macro_total() {
        let products = products_with_categories(&[
            "Nautica » Ancore",
            "Nautica » Ancore",
            "Nautica » Cime",
            "Vernici",
        ]);
        let model = build_model(&products);
        for group in &model {
            let sum: usize = group.cats.iter().map(|c| c.count).sum();
            assert_eq!(sum, group.total, "macro {}", group.name);
        }
    }

    #[test]
    fn macros_sort_descending_with_stable_ties() {
        let products =
            products_with_categories(&["Vernici", "Nautica", "Nautica", "Elettronica"]);
        let model = build_model(&products);
        let names: Vec<_> = model.iter().map(|g| g.name.as_str()).collect();
        // Nautica (2) first; Vernici and Elettronica tie at 1 and keep
        // discovery order.
        assert_eq!(names, ["Nautica", "Vernici", "Elettronica"]);
    }

    #[test]
    fn subcategories_sort_by_count() {
        let products = products_with_categories(&[
            "Nautica » Cime",
            "Nautica » Ancore",
            "Nautica » Ancore",
        ]);
        let model = build_model(&products);
        let subs: Vec<_> = model[0].cats.iter().map(|c| c.short.as_str()).collect();
        assert_eq!(subs, ["Ancore", "Cime"]);
        assert_eq!(model[0].cats[0].slug, "nautica->-ancore");
    }

    #[test]
    fn greedy_split_balances_by_weight() {
        let products = products_with_categories(&["A", "A", "A", "B", "B", "C"]);
        let model = build_model(&products);
        let cols = split_into_columns(&model, 2);
        assert_eq!(cols.len(), 2);
        // A (3) takes column 0, B (2) the lighter column 1, C (1) then
        // lands on column 1 (weight 2 vs 3).
        assert_eq!(cols[0].len(), 1);
        assert_eq!(cols[0][0].name, "A");
        let right: Vec<_> = cols[1].iter().map(|g| g.name.as_str()).collect();
        assert_eq!(right, ["B", "C"]);
    }

    #[test]
    fn empty_inputs() {
        assert!(build_model(&[]).is_empty());
        let empty = split_into_columns(&[], 3);
        assert_eq!(empty.len(), 3);
        assert!(empty.iter().all(|c| c.is_empty()));
    }
}
