//! Store Actions
//!
//! The only ways to change store state. Each action is applied by
//! [`reduce`](super::reducer::reduce).

use super::models::{CartEntry, CartState};
use serde::{Deserialize, Serialize};

/// Cart category an action targets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
}

impl CartState {
    /// Entries stored under `category`
    pub(crate) fn entries_mut(&mut self, category: Category) -> &mut Vec<CartEntry> {
        match category {
            Category::Food => &mut self.food,
        }
    }
}

/// Actions accepted by the store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Action {
    /// Insert an entry, or merge its quantity into an existing one
    AddItem { category: Category, item: CartEntry },

    /// Set the quantity of an existing entry
    UpdateQuantity {
        category: Category,
        id: u32,
        quantity: u32,
    },
}
