//! Listing page state machine: filter predicate, sort modes and
//! pagination math, kept free of any DOM concern so the view layer
//! stays a thin adapter.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::model::MacroGroup;
use crate::product::Product;

/// Sentinel slug meaning "no filter" for both macro and sub selection.
pub const ALL: &str = "tutti";

const DEFAULT_PER_PAGE: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortMode {
    /// Input order of the export.
    #[default]
    Relevance,
    Alphabetical,
    PriceAsc,
    PriceDesc,
}

impl SortMode {
    /// Stable value used in the `<select>` and the persisted state.
    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::Relevance => "rel",
            SortMode::Alphabetical => "az",
            SortMode::PriceAsc => "priceUp",
            SortMode::PriceDesc => "priceDown",
        }
    }

    pub fn parse(s: &str) -> SortMode {
        match s {
            "az" => SortMode::Alphabetical,
            "priceUp" => SortMode::PriceAsc,
            "priceDown" => SortMode::PriceDesc,
            _ => SortMode::Relevance,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// The whole listing state. Owned by the page controller and mutated
/// only through the transition methods below.
#[derive(Debug, Clone)]
pub struct BrowseState {
    pub q: String,
    pub macro_slug: String,
    pub sub_slug: String,
    pub sort: SortMode,
    pub per_page: usize,
    /// 1-based.
    pub page: usize,
    pub view: ViewMode,
    /// Expanded sidebar nodes; purely visual, never affects filtering.
    pub open_macros: HashSet<String>,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self {
            q: String::new(),
            macro_slug: ALL.to_string(),
            sub_slug: ALL.to_string(),
            sort: SortMode::default(),
            per_page: DEFAULT_PER_PAGE,
            page: 1,
            view: ViewMode::default(),
            open_macros: HashSet::new(),
        }
    }
}

impl BrowseState {
    pub fn select_all(&mut self) {
        self.macro_slug = ALL.to_string();
        self.sub_slug = ALL.to_string();
        self.page = 1;
    }

    pub fn select_macro(&mut self, slug: &str) {
        self.macro_slug = slug.to_string();
        self.sub_slug = ALL.to_string();
        self.page = 1;
        self.open_macros.insert(slug.to_string());
    }

    pub fn select_sub(&mut self, macro_slug: &str, sub_slug: &str) {
        self.macro_slug = macro_slug.to_string();
        self.sub_slug = sub_slug.to_string();
        self.page = 1;
        self.open_macros.insert(macro_slug.to_string());
    }

    pub fn toggle_macro(&mut self, slug: &str) {
        if !self.open_macros.remove(slug) {
            self.open_macros.insert(slug.to_string());
        }
    }

    pub fn set_query(&mut self, q: String) {
        self.q = q;
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort: SortMode) {
        self.sort = sort;
        self.page = 1;
    }

    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = if per_page == 0 {
            DEFAULT_PER_PAGE
        } else {
            per_page
        };
        self.page = 1;
    }

    /// Explicit navigation, clamped to `[1, total_pages]`.
    pub fn goto_page(&mut self, page: usize, total_pages: usize) {
        self.page = page.clamp(1, total_pages.max(1));
    }

    /// The filter predicate: macro AND sub AND free-text query.
    pub fn matches(&self, p: &Product) -> bool {
        if self.macro_slug != ALL && p.macro_slug != self.macro_slug {
            return false;
        }
        if self.sub_slug != ALL && p.cat_slug != self.sub_slug {
            return false;
        }

        let q = self.q.trim().to_lowercase();
        if q.is_empty() {
            return true;
        }
        let hay = format!("{} {} {} {}", p.title, p.brand, p.sku, p.category).to_lowercase();
        hay.contains(&q)
    }

    /// Breadcrumb / heading label for the current selection.
    pub fn current_label(&self, model: &[MacroGroup]) -> String {
        if self.macro_slug == ALL {
            return "Home".to_string();
        }
        let Some(group) = model.iter().find(|g| g.slug == self.macro_slug) else {
            return "Categoria".to_string();
        };
        if self.sub_slug == ALL {
            return group.name.clone();
        }
        group
            .cats
            .iter()
            .find(|c| c.slug == self.sub_slug)
            .map(|c| c.short.clone())
            .unwrap_or_else(|| group.name.clone())
    }
}

/// Stable in-place sort; `Relevance` keeps the input order. Products
/// without a price sort last in both price directions.
pub fn sort_products(list: &mut [Product], mode: SortMode) {
    match mode {
        SortMode::Relevance => {}
        SortMode::Alphabetical => {
            list.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
        }
        SortMode::PriceAsc => {
            list.sort_by(|a, b| price_key(a, f64::INFINITY).total_cmp(&price_key(b, f64::INFINITY)));
        }
        SortMode::PriceDesc => {
            list.sort_by(|a, b| {
                price_key(b, f64::NEG_INFINITY).total_cmp(&price_key(a, f64::NEG_INFINITY))
            });
        }
    }
}

fn price_key(p: &Product, nan_as: f64) -> f64 {
    if p.price.is_nan() {
        nan_as
    } else {
        p.price
    }
}

/// Current page slice over a filtered total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSlice {
    /// Clamped 1-based page.
    pub page: usize,
    /// Always at least 1, even for an empty result set.
    pub pages: usize,
    pub start: usize,
    pub end: usize,
}

pub fn paginate(total: usize, per_page: usize, page: usize) -> PageSlice {
    let per = per_page.max(1);
    let pages = (total.div_ceil(per)).max(1);
    let page = page.clamp(1, pages);
    let start = (page - 1) * per;
    let end = (start + per).min(total);
    PageSlice {
        page,
        pages,
        start,
        end,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::{normalize_rows, parse_rows};

    fn sample_products() -> Vec<Product> {
        let raw = parse_rows(
            &serde_json::json!([
                { "Cod.": "A1", "Descrizione": "Ancora inox", "Categoria": "Nautica » Ancore",
                  "Produttore": "ForzaMare", "Listino 1 (ivato)": "49,90" },
                { "Cod.": "C7", "Descrizione": "Cima ormeggio", "Categoria": "Nautica » Cime",
                  "Listino 1 (ivato)": "12,00" },
                { "Cod.": "V2", "Descrizione": "Vernice blu", "Categoria": "Vernici",
                  "Listino 1 (ivato)": "n.d." }
            ])
            .to_string(),
        )
        .unwrap();
        normalize_rows(&raw, "ph.jpg")
    }

    #[test]
    fn predicate_is_a_conjunction() {
        let products = sample_products();
        let mut st = BrowseState::default();

        assert!(products.iter().all(|p| st.matches(p)));

        st.select_macro("nautica");
        assert!(st.matches(&products[0]));
        assert!(!st.matches(&products[2]));

        st.select_sub("nautica", "nautica->-ancore");
        assert!(st.matches(&products[0]));
        assert!(!st.matches(&products[1]));

        // Changing the query alone never flips the macro/sub outcome.
        st.set_query("vernice".to_string());
        assert!(!st.matches(&products[2]));
        st.set_query("ancora".to_string());
        assert!(st.matches(&products[0]));
    }

    #[test]
    fn query_matches_title_brand_sku_and_category() {
        let products = sample_products();
        let mut st = BrowseState::default();
        for q in ["ancora", "forzamare", "a1", "ancore"] {
            st.set_query(q.to_string());
            assert!(st.matches(&products[0]), "query {q:?}");
        }
        st.set_query("ormeggio".to_string());
        assert!(!st.matches(&products[0]));
    }

    #[test]
    fn transitions_reset_paging() {
        let mut st = BrowseState::default();
        st.page = 4;
        st.set_query("x".into());
        assert_eq!(st.page, 1);

        st.page = 4;
        st.select_macro("nautica");
        assert_eq!((st.page, st.sub_slug.as_str()), (1, ALL));
        assert!(st.open_macros.contains("nautica"));

        st.page = 4;
        st.set_sort(SortMode::PriceAsc);
        assert_eq!(st.page, 1);

        st.page = 4;
        st.set_per_page(24);
        assert_eq!(st.page, 1);

        st.page = 4;
        st.select_all();
        assert_eq!((st.page, st.macro_slug.as_str()), (1, ALL));
    }

    #[test]
    fn toggling_tree_nodes_never_filters() {
        let products = sample_products();
        let mut st = BrowseState::default();
        st.toggle_macro("nautica");
        assert!(products.iter().all(|p| st.matches(p)));
        st.toggle_macro("nautica");
        assert!(!st.open_macros.contains("nautica"));
    }

    #[test]
    fn pagination_math() {
        let empty = paginate(0, 12, 1);
        assert_eq!((empty.pages, empty.start, empty.end), (1, 0, 0));

        let third = paginate(25, 12, 3);
        assert_eq!(third.pages, 3);
        assert_eq!((third.start, third.end), (24, 25));

        // clamping on both ends
        assert_eq!(paginate(25, 12, 99).page, 3);
        assert_eq!(paginate(25, 12, 0).page, 1);
    }

    #[test]
    fn goto_page_clamps() {
        let mut st = BrowseState::default();
        st.goto_page(99, 3);
        assert_eq!(st.page, 3);
        st.goto_page(0, 3);
        assert_eq!(st.page, 1);
        st.goto_page(5, 0);
        assert_eq!(st.page, 1);
    }

    #[test]
    fn price_sorts_put_unpriced_last() {
        let mut products = sample_products();
        sort_products(&mut products, SortMode::PriceAsc);
        let skus: Vec<_> = products.iter().map(|p| p.sku.as_str()).collect();
        assert_eq!(skus, ["C7", "A1", "V2"]);

        let mut products = sample_products();
        sort_products(&mut products, SortMode::PriceDesc);
        let skus: Vec<_> = products.iter().map(|p| p.sku.as_str()).collect();
        assert_eq!(skus, ["A1", "C7", "V2"]);
    }

    #[test]
    fn alphabetical_sort_ignores_case() {
        let mut products = sample_products();
        sort_products(&mut products, SortMode::Alphabetical);
        let titles: Vec<_> = products.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Ancora inox", "Cima ormeggio", "Vernice blu"]);
    }

    #[test]
    fn labels_follow_the_selection() {
        let products = sample_products();
        let model = crate::model::build_model(&products);
        let mut st = BrowseState::default();
        assert_eq!(st.current_label(&model), "Home");

        st.select_macro("nautica");
        assert_eq!(st.current_label(&model), "Nautica");

        st.select_sub("nautica", "nautica->-ancore");
        assert_eq!(st.current_label(&model), "Ancore");

        st.select_macro("sconosciuta");
        assert_eq!(st.current_label(&model), "Categoria");
    }

    #[test]
    fn sort_mode_round_trips_select_values() {
        for mode in [
            SortMode::Relevance,
            SortMode::Alphabetical,
            SortMode::PriceAsc,
            SortMode::PriceDesc,
        ] {
            assert_eq!(SortMode::parse(mode.as_str()), mode);
        }
        assert_eq!(SortMode::parse("boh"), SortMode::Relevance);
    }
}
