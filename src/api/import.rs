//! URL import endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use super::ApiResult;
use crate::import::ImportError;
use crate::models::{ImportRequest, ImportedRecipe};
use crate::AppState;

/// POST /api/import-recipe - Build pre-fill data from a URL. Nothing is stored.
pub async fn import_recipe(
    State(state): State<AppState>,
    payload: Result<Json<ImportRequest>, JsonRejection>,
) -> ApiResult<Json<ImportedRecipe>> {
    let Json(request) = payload?;
    let url = request.url.ok_or(ImportError::MissingUrl)?;
    Ok(Json(state.importer.resolve(&url).await?))
}
