//! Food List Models and Constants
//!
//! This module contains request/response bodies for the food list endpoints
//! and the constants shared across the food domain.

use serde::{Deserialize, Serialize};

// =============================================================================
// Constants
// =============================================================================

/// Default remote endpoint that receives food summaries
pub const DEFAULT_SUMMARY_ENDPOINT: &str =
    "https://68db5a3c23ebc87faa32af49.mockapi.io/users/food_summary";
/// Cookie carrying the session identifier
pub const SESSION_COOKIE: &str = "food_session";
/// Username assigned to new sessions
pub const GUEST_USERNAME: &str = "guest";
/// Heading of the food list view
pub const VIEW_TITLE: &str = "🍕 Delicious Food Menu";
/// Label of the summary submit button
pub const SUBMIT_LABEL: &str = "📤 Send Food Summary to API";

// =============================================================================
// Request & Response Bodies
// =============================================================================

/// Input for POST /api/cart/add
#[derive(Debug, Deserialize)]
pub struct AddToCartInput {
    /// Catalog identifier of the item to add
    pub id: u32,
}

/// Input for POST /api/cart/quantity
#[derive(Debug, Deserialize)]
pub struct QuantityChangeInput {
    /// Catalog identifier of the item to change
    pub id: u32,

    /// Signed quantity delta, usually +1 or -1
    pub change: i64,
}

/// Response for POST /api/summary
#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// Notice kind (`empty_cart`, `sent` or `failed`)
    pub notice: super::summary::Notice,

    /// User-facing notice text
    pub message: String,
}
