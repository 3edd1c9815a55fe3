//! PostgreSQL-backed recipe store for managed database deployments.

use async_trait::async_trait;
use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions, PgRow};
use sqlx::Row;

use super::RecipeStore;
use crate::errors::AppError;
use crate::models::{ingredients, NewRecipe, Recipe};

/// Casts let tables created with `SERIAL` ids or `json`/`jsonb` ingredients
/// decode the same way as the provisioned schema.
const RECIPE_COLUMNS: &str =
    "id::bigint AS id, name, description, image, ingredients::text AS ingredients, url, category";

/// Recipe store on top of a Postgres connection pool.
#[derive(Clone)]
pub struct PgRecipeStore {
    pool: PgPool,
}

impl PgRecipeStore {
    /// Connect with `database_url` and provision the table.
    pub async fn connect(database_url: &str) -> Result<Self, AppError> {
        Self::connect_with(PgConnectOptions::from_str(database_url)?).await
    }

    pub async fn connect_with(options: PgConnectOptions) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.provision().await?;
        Ok(store)
    }

    async fn provision(&self) -> Result<(), AppError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS recipes (
                id BIGSERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                description TEXT NOT NULL,
                image TEXT,
                ingredients TEXT NOT NULL,
                url TEXT,
                category TEXT
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl RecipeStore for PgRecipeStore {
    async fn list(&self) -> Result<Vec<Recipe>, AppError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM recipes ORDER BY id",
            RECIPE_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(recipe_from_row).collect()
    }

    async fn get(&self, id: i64) -> Result<Option<Recipe>, AppError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM recipes WHERE id = $1",
            RECIPE_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(recipe_from_row).transpose()
    }

    async fn insert(&self, recipe: &NewRecipe) -> Result<Recipe, AppError> {
        let row = sqlx::query(&format!(
            "INSERT INTO recipes (name, description, image, ingredients, url, category) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {}",
            RECIPE_COLUMNS
        ))
        .bind(&recipe.name)
        .bind(&recipe.description)
        .bind(&recipe.image)
        .bind(ingredients::encode(&recipe.ingredients))
        .bind(&recipe.url)
        .bind(&recipe.category)
        .fetch_one(&self.pool)
        .await?;

        recipe_from_row(&row)
    }

    async fn update(&self, id: i64, recipe: &NewRecipe) -> Result<Option<Recipe>, AppError> {
        let row = sqlx::query(&format!(
            "UPDATE recipes SET name = $1, description = $2, image = $3, ingredients = $4, \
             url = $5, category = $6 WHERE id = $7 RETURNING {}",
            RECIPE_COLUMNS
        ))
        .bind(&recipe.name)
        .bind(&recipe.description)
        .bind(&recipe.image)
        .bind(ingredients::encode(&recipe.ingredients))
        .bind(&recipe.url)
        .bind(&recipe.category)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(recipe_from_row).transpose()
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}

fn recipe_from_row(row: &PgRow) -> Result<Recipe, AppError> {
    let stored: String = row.try_get("ingredients")?;
    Ok(Recipe {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        ingredients: ingredients::decode(&stored),
        image: row.try_get("image")?,
        url: row.try_get("url")?,
        category: row.try_get("category")?,
    })
}
