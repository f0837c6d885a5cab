//! Shopping List Domain Models

use crate::store::Resource;
use serde::{Deserialize, Serialize};

/// One entry on the shopping list
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ShoppingItem {
    /// Store-assigned identifier
    pub id: String,

    /// What to buy
    pub name: String,

    /// Whether the item has been picked up
    pub checked: bool,
}

/// Client-supplied fields of a shopping item
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ShoppingItemFields {
    pub name: String,

    /// New items start unchecked when the field is omitted
    #[serde(default)]
    pub checked: bool,
}

impl Resource for ShoppingItem {
    type Fields = ShoppingItemFields;

    const KIND: &'static str = "shopping item";

    fn assemble(id: String, fields: ShoppingItemFields) -> Self {
        Self {
            id,
            name: fields.name,
            checked: fields.checked,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}
