//! REST API handlers for the shopping list

use super::models::{ShoppingItem, ShoppingItemFields};
use crate::{error::ApiError, state::SharedState, store::Replacement};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

/// Creates routes for shopping list operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/shopping-list", get(list_items).post(create_item))
        .route(
            "/shopping-list/:id",
            get(get_item).put(update_item).delete(delete_item),
        )
}

/// Endpoint: GET /shopping-list
async fn list_items(State(state): State<SharedState>) -> Json<Vec<ShoppingItem>> {
    Json(state.shopping_list.list())
}

/// Endpoint: GET /shopping-list/:id
async fn get_item(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<ShoppingItem>, ApiError> {
    state.shopping_list.get(&id).map(Json)
}

/// Endpoint: POST /shopping-list
/// Stores a new item and echoes it back with its assigned id.
async fn create_item(
    State(state): State<SharedState>,
    body: Result<Json<ShoppingItemFields>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(fields) = body?;
    let item = state.shopping_list.create(fields);
    tracing::info!("added '{}' to shopping list ({})", item.name, item.id);

    Ok((StatusCode::CREATED, Json(item)))
}

/// Endpoint: PUT /shopping-list/:id
/// Replaces the item wholesale and returns the stored result.
async fn update_item(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    body: Result<Json<Replacement<ShoppingItemFields>>, JsonRejection>,
) -> Result<Json<ShoppingItem>, ApiError> {
    let Json(replacement) = body?;
    let fields = replacement.into_fields(&id)?;

    state.shopping_list.update(&id, fields).map(Json)
}

/// Endpoint: DELETE /shopping-list/:id
/// Always acknowledges with 204, whether or not the item existed.
async fn delete_item(State(state): State<SharedState>, Path(id): Path<String>) -> StatusCode {
    state.shopping_list.delete(&id);
    StatusCode::NO_CONTENT
}
