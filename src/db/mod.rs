//! Database module for recipe persistence.
//!
//! The service talks to a [`RecipeStore`]; which SQL engine backs it is
//! decided once at startup from the configured database URL.

mod postgres;
mod sqlite;

pub use postgres::PgRecipeStore;
pub use sqlite::SqliteRecipeStore;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::DatabaseConfig;
use crate::errors::AppError;
use crate::models::{NewRecipe, Recipe};

/// Capability set every persistence engine provides.
///
/// Each call is a single statement committed on its own. Implementations
/// report a missing row through `None`/`false` and leave it to the caller to
/// turn that into a not-found error.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// All recipes, ordered by id.
    async fn list(&self) -> Result<Vec<Recipe>, AppError>;
    async fn get(&self, id: i64) -> Result<Option<Recipe>, AppError>;
    /// Insert a row and return it with its assigned id.
    async fn insert(&self, recipe: &NewRecipe) -> Result<Recipe, AppError>;
    /// Replace every mutable field of row `id`.
    async fn update(&self, id: i64, recipe: &NewRecipe) -> Result<Option<Recipe>, AppError>;
    /// Returns whether a row was removed.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
    fn backend_name(&self) -> &'static str;
}

/// Connect to the configured database and provision the schema.
pub async fn open_store(config: &DatabaseConfig) -> Result<Arc<dyn RecipeStore>, AppError> {
    let store: Arc<dyn RecipeStore> = match config {
        DatabaseConfig::Sqlite(path) => Arc::new(SqliteRecipeStore::open(path).await?),
        DatabaseConfig::Postgres(url) => Arc::new(PgRecipeStore::connect(url).await?),
    };
    tracing::info!("Recipe store ready ({})", store.backend_name());
    Ok(store)
}
