//! Pure catalog core: normalization of the Danea spreadsheet export,
//! category model building, listing state and the persisted cart shape.
//!
//! Nothing in this crate touches the DOM or the network; the frontend
//! crate is a thin reactive adapter over these functions.

pub mod browse;
pub mod cart;
pub mod model;
pub mod price;
pub mod product;
pub mod row;
pub mod text;

pub use browse::{paginate, sort_products, BrowseState, PageSlice, SortMode, ViewMode, ALL};
pub use cart::{add_to_cart, entry_for, total_qty, CartEntry};
pub use model::{build_model, split_into_columns, MacroGroup, SubCategory};
pub use product::{find_by_sku, image_candidates, Product};
pub use row::{normalize_rows, parse_rows, RawRow, DEFAULT_CATEGORY};
