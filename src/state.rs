//! Application State

use crate::{recipes::Recipe, shopping_list::ShoppingItem, store::Collection};
use std::sync::Arc;

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Both in-memory collections. Nothing is persisted across restarts.
#[derive(Default)]
pub struct AppState {
    pub shopping_list: Collection<ShoppingItem>,
    pub recipes: Collection<Recipe>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
