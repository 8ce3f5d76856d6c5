//! Product detail page: resolution by SKU, gallery, outbound links and
//! the add-to-cart box.

mod buy_box;
mod gallery;
mod page;

pub use page::ProductPage;
