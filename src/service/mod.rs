//! Recipe service.
//!
//! Validates requests at the boundary and turns store results into the
//! not-found errors the API reports. Storage encoding of ingredients is
//! handled inside each store.

use std::sync::Arc;

use crate::db::RecipeStore;
use crate::errors::AppError;
use crate::models::{Recipe, RecipeRequest};

/// CRUD operations over a pluggable [`RecipeStore`].
#[derive(Clone)]
pub struct RecipeService {
    store: Arc<dyn RecipeStore>,
}

impl RecipeService {
    pub fn new(store: Arc<dyn RecipeStore>) -> Self {
        Self { store }
    }

    /// List all recipes.
    pub async fn list(&self) -> Result<Vec<Recipe>, AppError> {
        self.store.list().await
    }

    /// Get a single recipe.
    pub async fn get(&self, id: i64) -> Result<Recipe, AppError> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Validate and store a new recipe.
    pub async fn create(&self, request: RecipeRequest) -> Result<Recipe, AppError> {
        let recipe = request.validate()?;
        let created = self.store.insert(&recipe).await?;
        tracing::info!(id = created.id, name = %created.name, "Recipe created");
        Ok(created)
    }

    /// Replace all mutable fields of an existing recipe.
    pub async fn update(&self, id: i64, request: RecipeRequest) -> Result<Recipe, AppError> {
        let recipe = request.validate()?;
        let updated = self
            .store
            .update(id, &recipe)
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::info!(id, name = %updated.name, "Recipe updated");
        Ok(updated)
    }

    /// Delete a recipe.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.store.delete(id).await? {
            return Err(not_found(id));
        }
        tracing::info!(id, "Recipe deleted");
        Ok(())
    }
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Recipe {} not found", id))
}
