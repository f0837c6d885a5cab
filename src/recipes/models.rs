//! Recipe Domain Models

use crate::store::Resource;
use serde::{Deserialize, Serialize};

/// A named recipe and its ingredient list
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recipe {
    pub id: String,
    pub name: String,

    /// Ingredients in the order they were given
    pub ingredients: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RecipeFields {
    pub name: String,

    #[serde(default)]
    pub ingredients: Vec<String>,
}

impl Resource for Recipe {
    type Fields = RecipeFields;

    const KIND: &'static str = "recipe";

    fn assemble(id: String, fields: RecipeFields) -> Self {
        Self {
            id,
            name: fields.name,
            ingredients: fields.ingredients,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}
