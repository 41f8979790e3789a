//! Food Summary Submission
//!
//! Builds a summary of the cart and posts it once to the remote endpoint.
//! Submission is at-most-once: failures are logged and reported as a
//! [`Notice`], never retried or queued.

use super::helpers::to_fixed_2;
use crate::store::{CartEntry, StoreState};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

// =============================================================================
// Payload
// =============================================================================

/// One line of the summary payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryLine {
    pub id: u32,
    pub name: String,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Line total with two decimal places
    pub total: String,
}

/// Aggregated cart snapshot sent to the remote endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SummaryPayload {
    pub username: String,
    pub food_items: Vec<SummaryLine>,
    /// Sum of all quantities
    pub total_items: u64,
    /// Sum of all line totals with two decimal places
    pub total_price: String,
    pub user_token: String,
}

impl SummaryPayload {
    /// Joins the food cart against the user identity.
    ///
    /// Fails with [`SummaryError::Overflow`] when a line or the grand total
    /// exceeds the decimal range.
    pub fn from_state(state: &StoreState) -> Result<Self, SummaryError> {
        let entries = &state.cart.food;

        let mut food_items = Vec::with_capacity(entries.len());
        let mut total_price = Decimal::ZERO;
        for entry in entries {
            let line_total = entry.line_total().ok_or(SummaryError::Overflow)?;
            total_price = total_price
                .checked_add(line_total)
                .ok_or(SummaryError::Overflow)?;
            food_items.push(summary_line(entry, line_total));
        }

        Ok(Self {
            username: state.user.username.clone(),
            food_items,
            total_items: entries.iter().map(|e| u64::from(e.quantity)).sum(),
            total_price: to_fixed_2(total_price),
            user_token: state.user.token.clone(),
        })
    }
}

fn summary_line(entry: &CartEntry, line_total: Decimal) -> SummaryLine {
    SummaryLine {
        id: entry.item.id,
        name: entry.item.name.clone(),
        quantity: entry.quantity,
        price: entry.item.price,
        total: to_fixed_2(line_total),
    }
}

// =============================================================================
// Notices & Errors
// =============================================================================

/// Outcome shown to the user after a submission attempt
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    EmptyCart,
    Sent,
    Failed,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Self::EmptyCart => "No food items in cart to send!",
            Self::Sent => "Food summary sent to API successfully!",
            Self::Failed => "Failed to send food summary. Check console for details.",
        }
    }
}

/// Errors that can occur while posting a summary
#[derive(Debug, Error)]
pub enum SummaryError {
    /// Transport failure or client construction failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status
    #[error("API error: {status}")]
    Api { status: u16 },

    /// Endpoint answered with a body that is not JSON
    #[error("Parse error: {0}")]
    Parse(String),

    /// Cart totals do not fit in a decimal
    #[error("Summary totals overflowed")]
    Overflow,
}

// =============================================================================
// Client
// =============================================================================

/// HTTP client bound to the summary endpoint
#[derive(Debug, Clone)]
pub struct SummaryClient {
    client: reqwest::Client,
    endpoint: String,
}

impl SummaryClient {
    /// Creates a client posting to `endpoint`.
    ///
    /// No timeout is configured; a request waits for the endpoint.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, SummaryError> {
        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Posts `payload` as JSON and returns the parsed response body.
    pub async fn post_summary(&self, payload: &SummaryPayload) -> Result<Value, SummaryError> {
        let response = self.client.post(&self.endpoint).json(payload).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(SummaryError::Api {
                status: status.as_u16(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| SummaryError::Parse(e.to_string()))
    }
}

/// Sends the food summary for `state` and reports the outcome.
///
/// An empty cart short-circuits without touching the network.
pub async fn send_food_summary(client: &SummaryClient, state: &StoreState) -> Notice {
    if state.cart.food.is_empty() {
        tracing::info!("No food items in cart, summary not sent");
        return Notice::EmptyCart;
    }

    let payload = match SummaryPayload::from_state(state) {
        Ok(payload) => payload,
        Err(error) => {
            tracing::error!(%error, "Failed to build food summary");
            return Notice::Failed;
        }
    };
    tracing::info!(payload = ?payload, "Sending food summary");

    match client.post_summary(&payload).await {
        Ok(result) => {
            tracing::info!(response = %result, "Food summary posted successfully");
            Notice::Sent
        }
        Err(error) => {
            tracing::error!(%error, endpoint = client.endpoint(), "Failed to post food summary");
            Notice::Failed
        }
    }
}
