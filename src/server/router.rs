//! Route wiring and shared application state

use crate::core::id::{IdSupplier, UuidIdSupplier};
use crate::core::store::ResourceStore;
use crate::entities::dish::{Dish, handlers as dish_handlers};
use crate::entities::order::{Order, handlers as order_handlers};
use axum::Router;
use axum::http::{Method, StatusCode, Uri};
use axum::response::Json;
use axum::routing::get;
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared state handed to every handler: one store per resource type plus
/// the id supplier. Stores are injected here rather than living as
/// globals, so tests can hold a clone and inspect them directly.
#[derive(Clone)]
pub struct AppState {
    pub dishes: ResourceStore<Dish>,
    pub orders: ResourceStore<Order>,
    pub ids: Arc<dyn IdSupplier>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            dishes: ResourceStore::new(),
            orders: ResourceStore::new(),
            ids: Arc::new(UuidIdSupplier),
        }
    }

    /// Swap in a different id supplier (deterministic ids in tests).
    pub fn with_ids(mut self, ids: Arc<dyn IdSupplier>) -> Self {
        self.ids = ids;
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/dishes",
            get(dish_handlers::list_dishes).post(dish_handlers::create_dish),
        )
        .route(
            "/dishes/{dish_id}",
            get(dish_handlers::read_dish).put(dish_handlers::update_dish),
        )
        .route(
            "/orders",
            get(order_handlers::list_orders).post(order_handlers::create_order),
        )
        .route(
            "/orders/{order_id}",
            get(order_handlers::read_order)
                .put(order_handlers::update_order)
                .delete(order_handlers::delete_order),
        )
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "platter"
    }))
}

async fn not_found(method: Method, uri: Uri) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": format!("Not found: {method} {uri}") })),
    )
}
