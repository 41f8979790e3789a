//! REST API handlers for the food list
//!
//! This module implements the HTTP endpoints that render the food list,
//! drive the cart mutation handlers and submit the food summary.

use super::{helpers::*, models::*, state::SharedState, summary::send_food_summary, view::*};
use crate::error::AppError;
use crate::store::{CatalogItem, Store};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderMap, HeaderValue},
    response::{
        sse::{Event, KeepAlive, Sse},
        Html, IntoResponse, Response,
    },
    routing::{get, post},
    Json, Router,
};
use futures_util::stream::{self, Stream, StreamExt};
use std::{convert::Infallible, sync::Arc};

/// Creates routes for food list operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(food_page))
        .route("/api/food", get(food_view))
        .route("/api/food/events", get(food_events))
        .route("/api/cart/add", post(add_to_cart))
        .route("/api/cart/quantity", post(change_quantity))
        .route("/api/summary", post(send_summary))
}

/// Session-scoped store resolved from the request cookies
struct Session {
    id: String,
    is_new: bool,
    store: Arc<Store>,
}

impl Session {
    /// Reuses the live session named by the cookie, or starts a new one.
    ///
    /// Call only once the request is known to be valid.
    fn resolve(state: &SharedState, headers: &HeaderMap) -> Self {
        let existing = read_session_cookie(headers)
            .and_then(|id| state.session_store(&id).map(|store| (id, store)));

        match existing {
            Some((id, store)) => Self {
                id,
                is_new: false,
                store,
            },
            None => {
                let (id, store) = state.create_session();
                Self {
                    id,
                    is_new: true,
                    store,
                }
            }
        }
    }

    /// Attaches the session cookie when the session was just created
    fn respond(&self, body: impl IntoResponse) -> Response {
        let mut response = body.into_response();

        if self.is_new {
            let cookie_val = format!(
                "{}={}; Path=/; HttpOnly; SameSite=Lax",
                SESSION_COOKIE, self.id
            );
            if let Ok(value) = HeaderValue::from_str(&cookie_val) {
                response.headers_mut().insert(header::SET_COOKIE, value);
            }
        }

        response
    }
}

fn find_food(state: &SharedState, id: u32) -> Result<CatalogItem, AppError> {
    state
        .find_food(id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("food item {id}")))
}

/// Endpoint: GET /
/// Renders the food list as HTML.
async fn food_page(
    State(state): State<SharedState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let session = Session::resolve(&state, &headers);
    let html = render_html(&project(&session.store.state()))?;
    Ok(session.respond(Html(html)))
}

/// Endpoint: GET /api/food
/// Returns the projected view as JSON.
async fn food_view(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let session = Session::resolve(&state, &headers);
    let view = project(&session.store.state());
    session.respond(Json(view))
}

/// Endpoint: GET /api/food/events
/// Streams the current view, then a re-projection after every state change.
async fn food_events(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let session = Session::resolve(&state, &headers);
    let stream = view_events(&session.store);
    session.respond(Sse::new(stream).keep_alive(KeepAlive::default()))
}

fn view_events(store: &Store) -> impl Stream<Item = Result<Event, Infallible>> {
    let rx = store.subscribe();
    let initial = project(&store.state());

    let updates = stream::unfold(rx, |mut rx| async move {
        let view = next_view(&mut rx).await?;
        Some((view, rx))
    });

    stream::once(async move { initial })
        .chain(updates)
        .map(|view| {
            let event = Event::default()
                .event("view")
                .json_data(&view)
                .unwrap_or_else(|_| Event::default().event("error"));
            Ok::<_, Infallible>(event)
        })
}

/// Endpoint: POST /api/cart/add
/// Adds one unit of a catalog item to the session cart.
async fn add_to_cart(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Result<Json<AddToCartInput>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(input) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let item = find_food(&state, input.id)?;
    let session = Session::resolve(&state, &headers);

    handle_add_to_cart(&session.store, &item);

    let view = project(&session.store.state());
    Ok(session.respond(Json(view)))
}

/// Endpoint: POST /api/cart/quantity
/// Shifts the quantity of a catalog item in the session cart.
async fn change_quantity(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Result<Json<QuantityChangeInput>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(input) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let item = find_food(&state, input.id)?;
    let session = Session::resolve(&state, &headers);

    handle_quantity_change(&session.store, &item, input.change);

    let view = project(&session.store.state());
    Ok(session.respond(Json(view)))
}

/// Endpoint: POST /api/summary
/// Sends the session's food summary to the remote endpoint.
async fn send_summary(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let session = Session::resolve(&state, &headers);
    let snapshot = session.store.state();

    let notice = send_food_summary(&state.summary_client, &snapshot).await;
    tracing::info!(
        session_id = %session.id,
        entries = snapshot.cart.food.len(),
        ?notice,
        "Summary attempt finished"
    );

    session.respond(Json(SummaryResponse {
        notice,
        message: notice.message().to_string(),
    }))
}
