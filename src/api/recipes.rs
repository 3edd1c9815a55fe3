//! Recipe API endpoints.

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};

use super::{recipe_id, ApiResult, MessageResponse};
use crate::models::{Recipe, RecipeRequest};
use crate::AppState;

/// GET /api/recipes - List all recipes.
pub async fn list_recipes(State(state): State<AppState>) -> ApiResult<Json<Vec<Recipe>>> {
    Ok(Json(state.recipes.list().await?))
}

/// GET /api/recipes/:id - Get a single recipe.
pub async fn get_recipe(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Recipe>> {
    let id = recipe_id(path)?;
    Ok(Json(state.recipes.get(id).await?))
}

/// POST /api/recipes - Create a new recipe.
pub async fn create_recipe(
    State(state): State<AppState>,
    payload: Result<Json<RecipeRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Recipe>)> {
    let Json(request) = payload?;
    let recipe = state.recipes.create(request).await?;
    Ok((StatusCode::CREATED, Json(recipe)))
}

/// PUT /api/recipes/:id - Replace a recipe.
pub async fn update_recipe(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<RecipeRequest>, JsonRejection>,
) -> ApiResult<Json<Recipe>> {
    let id = recipe_id(path)?;
    let Json(request) = payload?;
    Ok(Json(state.recipes.update(id, request).await?))
}

/// DELETE /api/recipes/:id - Delete a recipe.
pub async fn delete_recipe(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let id = recipe_id(path)?;
    state.recipes.delete(id).await?;
    Ok(Json(MessageResponse::new("Recipe deleted")))
}
