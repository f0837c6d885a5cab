//! Shopping List Domain Module
//!
//! - Domain models (ShoppingItem and its client-supplied fields)
//! - REST API handlers mounted under `/shopping-list`

pub mod handlers;
pub mod models;

pub use handlers::routes;
pub use models::{ShoppingItem, ShoppingItemFields};
