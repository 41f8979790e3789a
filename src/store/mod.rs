//! Application Store Module
//!
//! This module contains the explicit application-state object, including:
//! - State models (catalog items, cart entries, user identity)
//! - Actions and the pure reducer that applies them
//! - The store itself (dispatch and subscription)

pub mod actions;
pub mod models;
pub mod reducer;
pub mod state;

// Re-export commonly used types for convenience
pub use actions::{Action, Category};
pub use models::{CartEntry, CatalogItem, StoreState, UserIdentity};
pub use state::Store;
