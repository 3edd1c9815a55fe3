//! Recipe model and request bodies.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// A stored recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Request body for creating or replacing a recipe.
///
/// Every field is optional at the wire level so that a missing field is
/// reported as a validation error instead of a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub ingredients: Option<Vec<String>>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Validated recipe fields, ready to be written to a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecipe {
    pub name: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub image: Option<String>,
    pub url: Option<String>,
    pub category: Option<String>,
}

impl NewRecipe {
    /// Attach a store-assigned id.
    pub fn into_recipe(self, id: i64) -> Recipe {
        Recipe {
            id,
            name: self.name,
            description: self.description,
            ingredients: self.ingredients,
            image: self.image,
            url: self.url,
            category: self.category,
        }
    }
}

impl RecipeRequest {
    /// Check required fields and normalize the request.
    ///
    /// Text fields are trimmed, empty ingredient tokens are dropped and empty
    /// optional fields become `None`.
    pub fn validate(self) -> Result<NewRecipe, AppError> {
        let name = required_text(self.name, "name")?;
        let description = required_text(self.description, "description")?;

        let ingredients: Vec<String> = self
            .ingredients
            .unwrap_or_default()
            .into_iter()
            .map(|item| item.trim().to_string())
            .filter(|item| !item.is_empty())
            .collect();
        if ingredients.is_empty() {
            return Err(AppError::Validation(
                "ingredients must be a non-empty list".to_string(),
            ));
        }

        Ok(NewRecipe {
            name,
            description,
            ingredients,
            image: optional_text(self.image),
            url: optional_text(self.url),
            category: optional_text(self.category),
        })
    }
}

fn required_text(value: Option<String>, field: &str) -> Result<String, AppError> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::Validation(format!("{} is required", field))),
    }
}

fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, description: &str, ingredients: &[&str]) -> RecipeRequest {
        RecipeRequest {
            name: Some(name.to_string()),
            description: Some(description.to_string()),
            ingredients: Some(ingredients.iter().map(|s| s.to_string()).collect()),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_accepts_complete_request() {
        let recipe = request("Pancakes", "Fluffy", &["egg", "milk"])
            .validate()
            .unwrap();
        assert_eq!(recipe.name, "Pancakes");
        assert_eq!(recipe.ingredients, vec!["egg", "milk"]);
        assert!(recipe.image.is_none());
    }

    #[test]
    fn test_validate_rejects_empty_ingredients() {
        let err = request("Pancakes", "Fluffy", &[]).validate().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_validate_rejects_blank_only_ingredients() {
        let err = request("Pancakes", "Fluffy", &["  ", ""])
            .validate()
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_validate_rejects_missing_name_and_description() {
        let missing_name = RecipeRequest {
            name: None,
            ..request("", "Fluffy", &["egg"])
        };
        assert!(matches!(
            missing_name.validate(),
            Err(AppError::Validation(msg)) if msg.contains("name")
        ));

        let blank_description = request("Pancakes", "   ", &["egg"]);
        assert!(matches!(
            blank_description.validate(),
            Err(AppError::Validation(msg)) if msg.contains("description")
        ));
    }

    #[test]
    fn test_validate_trims_and_clears_optional_fields() {
        let recipe = RecipeRequest {
            image: Some("  ".to_string()),
            category: Some(" Dessert ".to_string()),
            ..request(" Pancakes ", "Fluffy", &[" egg ", "", "milk"])
        }
        .validate()
        .unwrap();

        assert_eq!(recipe.name, "Pancakes");
        assert_eq!(recipe.ingredients, vec!["egg", "milk"]);
        assert_eq!(recipe.image, None);
        assert_eq!(recipe.category.as_deref(), Some("Dessert"));
    }
}
