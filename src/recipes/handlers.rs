//! REST API handlers for recipes

use super::models::{Recipe, RecipeFields};
use crate::{error::ApiError, state::SharedState, store::Replacement};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

/// Creates routes for recipe operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/recipes", get(list_recipes).post(create_recipe))
        .route(
            "/recipes/:id",
            get(get_recipe).put(update_recipe).delete(delete_recipe),
        )
}

/// Endpoint: GET /recipes
async fn list_recipes(State(state): State<SharedState>) -> Json<Vec<Recipe>> {
    Json(state.recipes.list())
}

/// Endpoint: GET /recipes/:id
async fn get_recipe(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Recipe>, ApiError> {
    state.recipes.get(&id).map(Json)
}

/// Endpoint: POST /recipes
async fn create_recipe(
    State(state): State<SharedState>,
    body: Result<Json<RecipeFields>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(fields) = body?;
    let recipe = state.recipes.create(fields);
    tracing::info!(
        "saved recipe '{}' with {} ingredient(s) ({})",
        recipe.name,
        recipe.ingredients.len(),
        recipe.id
    );

    Ok((StatusCode::CREATED, Json(recipe)))
}

/// Endpoint: PUT /recipes/:id
/// Same convention as the shopping list: 200 with the updated recipe.
async fn update_recipe(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    body: Result<Json<Replacement<RecipeFields>>, JsonRejection>,
) -> Result<Json<Recipe>, ApiError> {
    let Json(replacement) = body?;
    let fields = replacement.into_fields(&id)?;

    state.recipes.update(&id, fields).map(Json)
}

/// Endpoint: DELETE /recipes/:id
async fn delete_recipe(State(state): State<SharedState>, Path(id): Path<String>) -> StatusCode {
    state.recipes.delete(&id);
    StatusCode::NO_CONTENT
}
