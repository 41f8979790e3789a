//! Food Cart Business Logic Helpers
//!
//! This module contains the quantity resolver and the cart mutation handlers
//! bound to the food category.

use super::models::SESSION_COOKIE;
use crate::store::{Action, CartEntry, CatalogItem, Category, Store};
use axum::http::{header, HeaderMap};
use rust_decimal::{Decimal, RoundingStrategy};
use uuid::Uuid;

/// Reads the session id from the request cookies.
///
/// Only ids in the format the server issues are returned; anything else is
/// treated as no cookie at all.
pub fn read_session_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::try_parse(value).ok())
        .map(|id| id.simple().to_string())
}

/// Generates a fresh session id
pub fn new_session_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Returns the quantity stored for `item_id`, or 0 when the cart has no entry.
pub fn get_item_quantity(cart_items: &[CartEntry], item_id: u32) -> u32 {
    cart_items
        .iter()
        .find(|entry| entry.id() == item_id)
        .map_or(0, |entry| entry.quantity)
}

/// Dispatches an add-item action for `item` with quantity 1.
///
/// Merging with an existing entry is left to the reducer.
pub fn handle_add_to_cart(store: &Store, item: &CatalogItem) {
    store.dispatch(Action::AddItem {
        category: Category::Food,
        item: CartEntry::new(item, 1),
    });
}

/// Shifts the quantity of `item` by `change` and dispatches the result.
///
/// Results at or below zero are clamped to 0 so the entry stays addressable.
/// The current quantity is read under the same lock that applies the update.
pub fn handle_quantity_change(store: &Store, item: &CatalogItem, change: i64) {
    store.dispatch_with(|state| {
        let current = get_item_quantity(&state.cart.food, item.id);
        Action::UpdateQuantity {
            category: Category::Food,
            id: item.id,
            quantity: shifted_quantity(current, change),
        }
    });
}

fn shifted_quantity(current: u32, change: i64) -> u32 {
    let new_quantity = i64::from(current).saturating_add(change);
    if new_quantity <= 0 {
        0
    } else {
        u32::try_from(new_quantity).unwrap_or(u32::MAX)
    }
}

/// Rounds half away from zero and renders exactly two decimal places.
///
/// Example output: `"19.98"`, `"20.00"`.
pub fn to_fixed_2(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}
