//! grocery-api — HTTP transport for the grocery list service.
//!
//! Provides axum route handlers over a [`GroceryStore`]. Every mutating
//! route resolves the item's status first and passes it to the store
//! operation, so transport and core share one validation path.
//!
//! # Routes
//!
//! | Method | Path | Description |
//! |---|---|---|
//! | GET | `/grocerylist` | The full grocery list as JSON |
//! | POST | `/grocerylist/add` | Add an item, 201 on success |
//! | PUT | `/grocerylist/update` | Update an item's fields, 200 on success |
//! | DELETE | `/grocerylist/delete` | Remove an item, 200 on success |
//!
//! Rejections are 400 with the status message; unmatched routes are 404.

pub mod handlers;

use axum::Router;
use axum::routing::{delete, get, post, put};
use grocery_store::GroceryStore;

/// Shared state for API handlers.
#[derive(Clone)]
pub struct ApiState {
    pub store: GroceryStore,
}

/// Build the grocery list router over the given store.
pub fn build_router(store: GroceryStore) -> Router {
    let state = ApiState { store };

    Router::new()
        .route("/grocerylist", get(handlers::get_grocery_list))
        .route("/grocerylist/add", post(handlers::add_item))
        .route("/grocerylist/update", put(handlers::update_item))
        .route("/grocerylist/delete", delete(handlers::delete_item))
        .fallback(handlers::not_found)
        .with_state(state)
}
