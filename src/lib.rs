//! Pantry API Library
//!
//! An in-memory JSON-over-HTTP service exposing two independent
//! collections: shopping-list items and recipes.

// Domain modules
pub mod recipes;
pub mod shopping_list;

// Infrastructure
pub mod config;
pub mod error;
pub mod router;
pub mod state;
pub mod store;
