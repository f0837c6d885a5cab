//! Liveness endpoint

use crate::state::SharedState;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

pub fn routes() -> Router<SharedState> {
    Router::new().route("/health", get(health))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthResponse {
    status: &'static str,
    shopping_list: usize,
    recipes: usize,
}

/// Endpoint: GET /health
/// Reports record counts for each collection.
async fn health(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        shopping_list: state.shopping_list.len(),
        recipes: state.recipes.len(),
    })
}
