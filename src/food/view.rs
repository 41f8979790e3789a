//! Food List View
//!
//! Projects store state into a view tree and renders it to HTML. The view is
//! recomputed from scratch on every pass; nothing is cached between renders.

use super::helpers::get_item_quantity;
use super::models::{SUBMIT_LABEL, VIEW_TITLE};
use crate::store::StoreState;
use askama::Template;
use serde::Serialize;
use tokio::sync::watch;

/// Controls shown on a food card
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardControls {
    /// Item is not in the cart (or held at zero)
    AddToCart,
    /// Decrement/increment pair around the current quantity
    Stepper { quantity: u32 },
}

/// One catalog item as displayed
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FoodCard {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: String,
    pub quantity: u32,
    pub controls: CardControls,
}

impl FoodCard {
    pub fn in_cart(&self) -> bool {
        matches!(self.controls, CardControls::Stepper { .. })
    }
}

/// Whole food list view
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FoodListView {
    pub title: String,
    pub submit_label: String,
    /// False when the cart has no entries
    pub can_submit: bool,
    pub cards: Vec<FoodCard>,
}

/// Projects catalog and cart state into a [`FoodListView`].
pub fn project(state: &StoreState) -> FoodListView {
    let cart = &state.cart.food;

    let cards = state
        .inventory
        .food
        .iter()
        .map(|item| {
            let quantity = get_item_quantity(cart, item.id);
            let controls = if quantity > 0 {
                CardControls::Stepper { quantity }
            } else {
                CardControls::AddToCart
            };

            FoodCard {
                id: item.id,
                name: item.name.clone(),
                description: item.description.clone(),
                price: item.price.to_string(),
                image: item.image.clone(),
                quantity,
                controls,
            }
        })
        .collect();

    FoodListView {
        title: VIEW_TITLE.to_string(),
        submit_label: SUBMIT_LABEL.to_string(),
        can_submit: !cart.is_empty(),
        cards,
    }
}

/// Page template for the food list
#[derive(Template)]
#[template(path = "food_list.html")]
struct FoodListPage<'a> {
    view: &'a FoodListView,
}

/// Renders `view` to an HTML document.
pub fn render_html(view: &FoodListView) -> Result<String, askama::Error> {
    FoodListPage { view }.render()
}

/// Waits for the next state change and re-projects it.
///
/// Returns `None` once the store has been dropped.
pub async fn next_view(rx: &mut watch::Receiver<StoreState>) -> Option<FoodListView> {
    rx.changed().await.ok()?;
    let view = project(&rx.borrow_and_update());
    Some(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::food::helpers::{handle_add_to_cart, handle_quantity_change};
    use crate::store::{CartEntry, CatalogItem, Store, UserIdentity};
    use rust_decimal::Decimal;

    fn menu() -> Vec<CatalogItem> {
        vec![
            CatalogItem {
                id: 1,
                name: "Pizza".into(),
                description: "Cheesy".into(),
                price: Decimal::new(999, 2),
                image: "🍕".into(),
            },
            CatalogItem {
                id: 2,
                name: "Tacos & Salsa".into(),
                description: "Spicy".into(),
                price: Decimal::new(725, 2),
                image: "🌮".into(),
            },
        ]
    }

    #[test]
    fn test_project_empty_cart() {
        let view = project(&StoreState::new(menu(), UserIdentity::default()));

        assert!(!view.can_submit);
        assert_eq!(view.cards.len(), 2);
        assert!(view
            .cards
            .iter()
            .all(|c| c.controls == CardControls::AddToCart && c.quantity == 0));
        assert_eq!(view.cards[0].price, "9.99");
    }

    #[test]
    fn test_project_stepper_and_zero_entries() {
        let items = menu();
        let mut state = StoreState::new(items.clone(), UserIdentity::default());
        state.cart.food.push(CartEntry::new(&items[0], 3));
        state.cart.food.push(CartEntry::new(&items[1], 0));

        let view = project(&state);

        assert!(view.can_submit);
        assert_eq!(view.cards[0].controls, CardControls::Stepper { quantity: 3 });
        assert_eq!(view.cards[1].controls, CardControls::AddToCart);
    }

    #[test]
    fn test_render_html_escapes_and_shows_controls() {
        let items = menu();
        let mut state = StoreState::new(items.clone(), UserIdentity::default());
        state.cart.food.push(CartEntry::new(&items[0], 2));

        let html = render_html(&project(&state)).unwrap();

        assert!(html.contains("Delicious Food Menu"));
        assert!(html.contains("Tacos &amp; Salsa"));
        assert!(html.contains("quantity-controls"));
        assert!(html.contains("add-to-cart-btn"));
        assert!(!html.contains("disabled"));
    }

    #[test]
    fn test_render_html_disables_submit_when_empty() {
        let html = render_html(&project(&StoreState::new(menu(), UserIdentity::default()))).unwrap();
        assert!(html.contains("disabled"));
    }

    #[tokio::test]
    async fn test_next_view_follows_dispatches() {
        let items = menu();
        let store = Store::new(StoreState::new(items.clone(), UserIdentity::default()));
        let mut rx = store.subscribe();

        handle_add_to_cart(&store, &items[0]);
        let view = next_view(&mut rx).await.unwrap();
        assert_eq!(view.cards[0].controls, CardControls::Stepper { quantity: 1 });

        handle_quantity_change(&store, &items[0], -1);
        let view = next_view(&mut rx).await.unwrap();
        assert_eq!(view.cards[0].controls, CardControls::AddToCart);

        drop(store);
        assert!(next_view(&mut rx).await.is_none());
    }
}
