pub mod cart_storage;
pub mod dom;
pub mod links;
