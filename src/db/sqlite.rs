//! SQLite-backed recipe store.
//!
//! Used for local, single-file deployments. The table is created on open if
//! it does not exist yet.

use std::path::Path;
use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;

use super::RecipeStore;
use crate::errors::AppError;
use crate::models::{ingredients, NewRecipe, Recipe};

/// Recipe store on top of an SQLite connection pool.
#[derive(Clone)]
pub struct SqliteRecipeStore {
    pool: SqlitePool,
}

impl SqliteRecipeStore {
    /// Open (creating if needed) the database file at `db_path`.
    pub async fn open(db_path: &Path) -> Result<Self, AppError> {
        // Ensure the parent directory exists
        if let Some(parent) = db_path.parent() {
            tokio::fs::create_dir_all(parent).await.ok();
        }

        let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

        let options = SqliteConnectOptions::from_str(&db_url)?
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
            .busy_timeout(std::time::Duration::from_secs(30));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        let store = Self::new(pool);
        store.provision().await?;
        Ok(store)
    }

    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the recipes table if it is missing.
    pub async fn provision(&self) -> Result<(), AppError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS recipes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                description TEXT NOT NULL,
                image TEXT,
                ingredients TEXT NOT NULL,
                url TEXT,
                category TEXT
            );
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl RecipeStore for SqliteRecipeStore {
    async fn list(&self) -> Result<Vec<Recipe>, AppError> {
        let rows = sqlx::query(
            "SELECT id, name, description, image, ingredients, url, category FROM recipes ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(recipe_from_row).collect()
    }

    async fn get(&self, id: i64) -> Result<Option<Recipe>, AppError> {
        let row = sqlx::query(
            "SELECT id, name, description, image, ingredients, url, category FROM recipes WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(recipe_from_row).transpose()
    }

    async fn insert(&self, recipe: &NewRecipe) -> Result<Recipe, AppError> {
        let result = sqlx::query(
            "INSERT INTO recipes (name, description, image, ingredients, url, category) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&recipe.name)
        .bind(&recipe.description)
        .bind(&recipe.image)
        .bind(ingredients::encode(&recipe.ingredients))
        .bind(&recipe.url)
        .bind(&recipe.category)
        .execute(&self.pool)
        .await?;

        Ok(recipe.clone().into_recipe(result.last_insert_rowid()))
    }

    async fn update(&self, id: i64, recipe: &NewRecipe) -> Result<Option<Recipe>, AppError> {
        let result = sqlx::query(
            "UPDATE recipes SET name = ?, description = ?, image = ?, ingredients = ?, url = ?, category = ? WHERE id = ?",
        )
        .bind(&recipe.name)
        .bind(&recipe.description)
        .bind(&recipe.image)
        .bind(ingredients::encode(&recipe.ingredients))
        .bind(&recipe.url)
        .bind(&recipe.category)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        Ok(Some(recipe.clone().into_recipe(id)))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    fn backend_name(&self) -> &'static str {
        "sqlite"
    }
}

fn recipe_from_row(row: &SqliteRow) -> Result<Recipe, AppError> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn temp_store() -> (SqliteRecipeStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = SqliteRecipeStore::open(&temp_dir.path().join("recipes.sqlite"))
            .await
            .unwrap();
        (store, temp_dir)
    }

    fn soup() -> NewRecipe {
        NewRecipe {
            name: "Tomato Soup".to_string(),
            description: "Simple and warm".to_string(),
            ingredients: vec!["tomato".to_string(), "salt, to taste".to_string()],
            image: None,
            url: Some("https://example.com/soup".to_string()),
            category: Some("Soup".to_string()),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let (store, _dir) = temp_store().await;
        let first = store.insert(&soup()).await.unwrap();
        let second = store.insert(&soup()).await.unwrap();
        assert!(first.id > 0);
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_ingredients_with_commas_survive_storage() {
        let (store, _dir) = temp_store().await;
        let created = store.insert(&soup()).await.unwrap();
        let fetched = store.get(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.ingredients[1], "salt, to taste");
    }

    #[tokio::test]
    async fn test_legacy_delimited_row_is_read_leniently() {
        let (store, _dir) = temp_store().await;
        sqlx::query("INSERT INTO recipes (name, description, ingredients) VALUES ('Old', 'Legacy', 'salt, pepper')")
            .execute(store.pool())
            .await
            .unwrap();

        let recipes = store.list().await.unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].ingredients, vec!["salt, pepper".to_string()]);
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_rows() {
        let (store, _dir) = temp_store().await;
        assert!(store.update(42, &soup()).await.unwrap().is_none());
        assert!(!store.delete(42).await.unwrap());
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_reopen_keeps_rows() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("recipes.sqlite");

        let created = {
            let store = SqliteRecipeStore::open(&path).await.unwrap();
            store.insert(&soup()).await.unwrap()
        };

        let store = SqliteRecipeStore::open(&path).await.unwrap();
        assert_eq!(store.get(created.id).await.unwrap(), Some(created));
    }
}
