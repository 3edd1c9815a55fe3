//! Import request and result bodies.

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/import-recipe`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportRequest {
    #[serde(default)]
    pub url: Option<String>,
}

/// Best-effort recipe fields produced from a URL.
///
/// This is pre-fill data for a form. It has no id and is never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportedRecipe {
    pub name: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub image: String,
    #[serde(default)]
    pub category: String,
}
