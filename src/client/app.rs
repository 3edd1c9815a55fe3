//! Client-side catalog state.
//!
//! Mirrors what the browser front end keeps in memory: the loaded recipes, a
//! draft form and which recipe (if any) is being edited. After every
//! successful mutation the collection is reloaded with [`CatalogApp::refresh`]
//! instead of being patched locally. A failed call records a message in
//! `error` and leaves everything else as it was.

use std::collections::HashSet;

use super::{ClientError, RecipeClient};
use crate::models::{ingredients, Recipe, RecipeRequest};

/// Editable form fields. Ingredients are kept as one comma-separated string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeDraft {
    pub name: String,
    pub description: String,
    pub image: String,
    pub ingredients: String,
    pub url: String,
    pub category: String,
}

impl RecipeDraft {
    /// Copy a stored recipe into the form.
    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name.clone(),
            description: recipe.description.clone(),
            image: recipe.image.clone().unwrap_or_default(),
            ingredients: ingredients::to_display(&recipe.ingredients),
            url: recipe.url.clone().unwrap_or_default(),
            category: recipe.category.clone().unwrap_or_default(),
        }
    }

    pub fn ingredient_list(&self) -> Vec<String> {
        ingredients::from_display(&self.ingredients)
    }

    /// Check required fields and build the request body.
    pub fn to_request(&self) -> Result<RecipeRequest, ClientError> {
        let ingredients = self.ingredient_list();
        if self.name.trim().is_empty()
            || self.description.trim().is_empty()
            || ingredients.is_empty()
        {
            return Err(ClientError::InvalidDraft(
                "Name, description and ingredients are required".to_string(),
            ));
        }

        Ok(RecipeRequest {
            name: Some(self.name.clone()),
            description: Some(self.description.clone()),
            ingredients: Some(ingredients),
            image: Some(self.image.clone()),
            url: Some(self.url.clone()),
            category: Some(self.category.clone()),
        })
    }
}

/// Flatten ingredients across recipes and drop exact duplicates.
///
/// Entries come out in first-seen order, but treat the result as a set.
pub fn shopping_list(recipes: &[Recipe]) -> Vec<String> {
    let mut seen = HashSet::new();
    recipes
        .iter()
        .flat_map(|recipe| recipe.ingredients.iter())
        .filter(|item| seen.insert(item.as_str()))
        .cloned()
        .collect()
}

/// In-memory state of the catalog front end.
pub struct CatalogApp {
    client: RecipeClient,
    pub recipes: Vec<Recipe>,
    pub draft: RecipeDraft,
    pub editing: Option<i64>,
    pub error: Option<String>,
}

impl CatalogApp {
    pub fn new(client: RecipeClient) -> Self {
        Self {
            client,
            recipes: Vec::new(),
            draft: RecipeDraft::default(),
            editing: None,
            error: None,
        }
    }

    /// Reload the whole collection.
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        let result = self.client.list().await;
        match result {
            Ok(recipes) => {
                self.recipes = recipes;
                self.error = None;
                Ok(())
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Start a blank draft for a new recipe.
    pub fn new_recipe(&mut self) {
        self.draft = RecipeDraft::default();
        self.editing = None;
        self.error = None;
    }

    /// Load a recipe from the current collection into the draft.
    pub fn begin_edit(&mut self, id: i64) -> Result<(), ClientError> {
        let recipe = self
            .recipes
            .iter()
            .find(|recipe| recipe.id == id)
            .ok_or(ClientError::UnknownRecipe(id))?;
        self.draft = RecipeDraft::from_recipe(recipe);
        self.editing = Some(id);
        self.error = None;
        Ok(())
    }

    /// Drop the draft. The server is not contacted.
    pub fn cancel_edit(&mut self) {
        self.new_recipe();
    }

    /// Create or update from the draft, then reload.
    ///
    /// Once the save succeeds the saved recipe is returned even if the reload
    /// fails; the reload failure is left in `error` and the old list is kept.
    pub async fn submit(&mut self) -> Result<Recipe, ClientError> {
        let request = self.draft.to_request().map_err(|e| self.fail(e))?;

        let saved = match self.editing {
            Some(id) => self.client.update(id, &request).await,
            None => self.client.create(&request).await,
        }
        .map_err(|e| self.fail(e))?;

        self.new_recipe();
        self.reload_after_mutation().await;
        Ok(saved)
    }

    /// Delete a recipe, then reload. Confirmation is up to the caller.
    pub async fn delete(&mut self, id: i64) -> Result<(), ClientError> {
        self.client.delete(id).await.map_err(|e| self.fail(e))?;
        if self.editing == Some(id) {
            self.new_recipe();
        }
        self.reload_after_mutation().await;
        Ok(())
    }

    /// Fill the draft from the draft's URL. Nothing is saved.
    pub async fn import_from_url(&mut self) -> Result<(), ClientError> {
        let url = self.draft.url.trim().to_string();
        if url.is_empty() {
            return Err(self.fail(ClientError::InvalidDraft("A URL is required".to_string())));
        }

        let imported = self.client.import(&url).await.map_err(|e| self.fail(e))?;
        self.draft.name = imported.name;
        self.draft.description = imported.description;
        self.draft.image = imported.image;
        self.draft.ingredients = ingredients::to_display(&imported.ingredients);
        self.draft.category = imported.category;
        self.error = None;
        Ok(())
    }

    pub fn shopping_list(&self) -> Vec<String> {
        shopping_list(&self.recipes)
    }

    /// The mutation already happened, so a failed reload is only recorded.
    async fn reload_after_mutation(&mut self) {
        if self.refresh().await.is_err() {
            tracing::debug!("Keeping previous recipe list after failed reload");
        }
    }

    fn fail(&mut self, error: ClientError) -> ClientError {
        tracing::warn!("Catalog request failed: {}", error);
        self.error = Some(error.to_string());
        error
    }
}
