//! Store State Models
//!
//! This module contains the data structures held by the application store:
//! the inventory catalog, the cart, and the user identity.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// =============================================================================
// Catalog & Cart Models
// =============================================================================

/// A sellable food item from the inventory catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogItem {
    /// Unique identifier of the item
    pub id: u32,

    /// Display name
    pub name: String,

    /// Short description shown under the name
    pub description: String,

    /// Unit price, serialized as a JSON number
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Glyph used as the item image
    pub image: String,
}

/// A cart record linking a catalog item to a selected quantity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartEntry {
    /// Snapshot of the catalog item this entry refers to
    #[serde(flatten)]
    pub item: CatalogItem,

    /// Selected quantity. Zero keeps the entry addressable.
    pub quantity: u32,
}

impl CartEntry {
    /// Creates an entry for `item` with the given quantity
    pub fn new(item: &CatalogItem, quantity: u32) -> Self {
        Self {
            item: item.clone(),
            quantity,
        }
    }

    pub fn id(&self) -> u32 {
        self.item.id
    }

    /// Unit price multiplied by quantity, unrounded. `None` on overflow.
    pub fn line_total(&self) -> Option<Decimal> {
        self.item.price.checked_mul(Decimal::from(self.quantity))
    }
}

/// Identity of the user owning the cart
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserIdentity {
    pub username: String,
    pub token: String,
}

// =============================================================================
// State Slices
// =============================================================================

/// Inventory slice: catalog items grouped by category
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct InventoryState {
    pub food: Vec<CatalogItem>,
}

/// Cart slice: cart entries grouped by category
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CartState {
    pub food: Vec<CartEntry>,
}

/// Root state object held by a [`Store`](super::Store)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StoreState {
    pub inventory: InventoryState,
    pub cart: CartState,
    pub user: UserIdentity,
}

impl StoreState {
    /// Creates a state with the given catalog, an empty cart and `user`
    pub fn new(catalog: Vec<CatalogItem>, user: UserIdentity) -> Self {
        Self {
            inventory: InventoryState { food: catalog },
            cart: CartState::default(),
            user,
        }
    }
}
