//! Compile-time configuration. The app consumes no environment
//! variables; everything deploy-specific lives here.

/// Candidate locations of the catalog export, tried in order.
pub const DATA_URL_CANDIDATES: &[&str] = &[
    "./data/products.json",
    "data/products.json",
    "/data/products.json",
];

/// Shown wherever a product photo is missing or fails to load.
pub const PLACEHOLDER_COVER: &str = "assets/img/prodotti/placeholder.jpg";

/// Local-storage key of the persisted cart. Part of the stored format.
pub const CART_STORAGE_KEY: &str = "cart_ic";

/// Local-storage key of the persisted listing state. Versioned: bump it
/// when the persisted shape changes.
pub const LIST_STATE_STORAGE_KEY: &str = "catalogo_list_state_v1";

pub const SITE_NAME: &str = "Il Capitano";

/// Contact number for the messaging deep link, international format
/// without the leading `+`.
pub const WHATSAPP_NUMBER: &str = "390000000000";
pub const WHATSAPP_TEXT: &str = "Ciao! Mi dai info su questo prodotto?";

pub const MARKETPLACE_SEARCH_BASE: &str = "https://www.ebay.it/sch/i.html?_nkw=";

/// Columns of the mega category overlay.
pub const MEGA_COLUMNS: usize = 3;

pub const SEARCH_DEBOUNCE_MS: u32 = 140;
pub const TOAST_MS: u32 = 1600;
