//! Recipe Domain Module

pub mod handlers;
pub mod models;

pub use handlers::routes;
pub use models::{Recipe, RecipeFields};
