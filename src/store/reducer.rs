//! Pure state transitions for store actions.

use super::actions::Action;
use super::models::StoreState;

/// Applies `action` to `state` and returns the next state.
///
/// # Behaviour
///
/// * `AddItem` aggregates into an existing entry with the same id, otherwise
///   appends the entry.
/// * `UpdateQuantity` overwrites the quantity of a matching entry. Entries are
///   never removed, and an unknown id leaves the cart untouched.
pub fn reduce(state: &StoreState, action: &Action) -> StoreState {
    let mut next = state.clone();

    match action {
        Action::AddItem { category, item } => {
            let entries = next.cart.entries_mut(*category);
            if let Some(existing) = entries.iter_mut().find(|e| e.id() == item.id()) {
                existing.quantity = existing.quantity.saturating_add(item.quantity);
            } else {
                entries.push(item.clone());
            }
        }
        Action::UpdateQuantity {
            category,
            id,
            quantity,
        } => {
            if let Some(existing) = next
                .cart
                .entries_mut(*category)
                .iter_mut()
                .find(|e| e.id() == *id)
            {
                existing.quantity = *quantity;
            }
        }
    }

    next
}
