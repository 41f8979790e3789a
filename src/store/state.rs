//! Store State Management
//!
//! Holds one [`StoreState`] behind a `tokio::sync::watch` channel. Every
//! dispatch runs the pure reducer and notifies subscribers.

use super::{actions::Action, models::StoreState, reducer::reduce};
use tokio::sync::watch;

// =============================================================================
// Store
// =============================================================================

/// Application store: current state plus change notifications
#[derive(Debug)]
pub struct Store {
    tx: watch::Sender<StoreState>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new(StoreState::default())
    }
}

impl Store {
    /// Creates a store seeded with `initial`
    pub fn new(initial: StoreState) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Returns a snapshot of the current state
    pub fn state(&self) -> StoreState {
        self.tx.borrow().clone()
    }

    /// Reads a slice of the current state without cloning the whole tree
    pub fn select<T>(&self, selector: impl FnOnce(&StoreState) -> T) -> T {
        selector(&self.tx.borrow())
    }

    /// Applies `action` through the reducer and wakes all subscribers
    pub fn dispatch(&self, action: Action) {
        tracing::debug!(?action, "dispatch");
        self.tx.send_modify(|state| *state = reduce(state, &action));
    }

    /// Builds an action from the current state and applies it, holding the
    /// write lock for the whole read-compute-reduce step.
    pub fn dispatch_with(&self, build: impl FnOnce(&StoreState) -> Action) {
        self.tx.send_modify(|state| {
            let action = build(state);
            tracing::debug!(?action, "dispatch");
            *state = reduce(state, &action);
        });
    }

    /// Subscribes to state changes. The current state is already marked seen.
    pub fn subscribe(&self) -> watch::Receiver<StoreState> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::actions::Category;
    use crate::store::models::{CartEntry, CatalogItem, UserIdentity};
    use rust_decimal::Decimal;

    fn salad() -> CatalogItem {
        CatalogItem {
            id: 7,
            name: "Salad".into(),
            description: "Green".into(),
            price: Decimal::new(675, 2),
            image: "🥗".into(),
        }
    }

    #[test]
    fn test_select_reads_slices() {
        let store = Store::new(StoreState::new(
            vec![salad()],
            UserIdentity {
                username: "alice".into(),
                token: "abc".into(),
            },
        ));

        assert_eq!(store.select(|s| s.inventory.food.len()), 1);
        assert_eq!(store.select(|s| s.user.username.clone()), "alice");
        assert!(store.select(|s| s.cart.food.is_empty()));
    }

    #[tokio::test]
    async fn test_dispatch_notifies_subscribers() {
        let store = Store::new(StoreState::new(vec![salad()], UserIdentity::default()));
        let mut rx = store.subscribe();

        store.dispatch(Action::AddItem {
            category: Category::Food,
            item: CartEntry::new(&salad(), 1),
        });

        rx.changed().await.expect("store dropped");
        assert_eq!(rx.borrow_and_update().cart.food[0].quantity, 1);
    }
}
