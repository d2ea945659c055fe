//! Route handlers for the grocery list API.
//!
//! Each mutating handler follows the two-call contract: resolve the item's
//! status against the store, then pass item and status to the store
//! operation. On rejection the status message is surfaced verbatim as the
//! response body. Accepted operations are logged at info level, rejections
//! at error level.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::{error, info};

use grocery_store::{Item, ItemStatus, ItemUpdate};

use crate::ApiState;

/// Response body carrying a single human-readable message.
#[derive(serde::Serialize)]
struct MessageResponse {
    message: String,
}

fn message(text: String) -> Json<MessageResponse> {
    Json(MessageResponse { message: text })
}

fn rejection(status: &ItemStatus) -> impl IntoResponse {
    (StatusCode::BAD_REQUEST, message(status.message.clone()))
}

/// GET /grocerylist
pub async fn get_grocery_list(State(state): State<ApiState>) -> impl IntoResponse {
    let list = state.store.grocery_list();
    info!(items = list.len(), "grocery list requested");
    Json(list)
}

/// POST /grocerylist/add
pub async fn add_item(
    State(state): State<ApiState>,
    Json(item): Json<Item>,
) -> impl IntoResponse {
    let status = state.store.resolve_status(&item.name);
    let name = item.name.clone();
    if state.store.add_item(item, &status) {
        info!(%name, "item added to the grocery list");
        (StatusCode::CREATED, message(format!("{name} Added Successfully!"))).into_response()
    } else {
        error!(reason = %status.message, "rejected add to the grocery list");
        rejection(&status).into_response()
    }
}

/// PUT /grocerylist/update
pub async fn update_item(
    State(state): State<ApiState>,
    Json(update): Json<ItemUpdate>,
) -> impl IntoResponse {
    let status = state.store.resolve_status(&update.name);
    if state.store.update_item(&update, &status) {
        info!(name = %update.name, "item updated on the grocery list");
        (
            StatusCode::OK,
            message(format!("{} Updated Successfully!", update.name)),
        )
            .into_response()
    } else {
        error!(reason = %status.message, "rejected update on the grocery list");
        rejection(&status).into_response()
    }
}

/// DELETE /grocerylist/delete
pub async fn delete_item(
    State(state): State<ApiState>,
    Json(item): Json<Item>,
) -> impl IntoResponse {
    let status = state.store.resolve_status(&item.name);
    if state.store.delete_item(&item.name, &status) {
        info!(name = %item.name, "item deleted from the grocery list");
        (
            StatusCode::OK,
            message(format!("{} Deleted Successfully!", item.name)),
        )
            .into_response()
    } else {
        error!(reason = %status.message, "rejected delete from the grocery list");
        rejection(&status).into_response()
    }
}

/// Fallback for unmatched method+path pairs.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found")
}
