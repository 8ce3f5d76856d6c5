//! Listing page: sidebar tree, toolbar, grid, pager, mega overlay.

mod card;
mod mega;
mod pager;
mod state;
mod tree;
mod widget;

pub use widget::ListingPage;
