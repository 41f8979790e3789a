//! Food List Domain Module
//!
//! This module contains the food list view and its cart logic, including:
//! - Quantity resolver and cart mutation handlers
//! - Food summary submission
//! - View projection and HTML rendering
//! - Catalog bootstrap and per-session state
//! - REST API handlers

pub mod catalog;
pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;
pub mod summary;
pub mod view;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use state::{AppState, SessionLimits, SharedState};
