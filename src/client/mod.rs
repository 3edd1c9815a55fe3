//! Client library for the recipe API.
//!
//! [`RecipeClient`] speaks HTTP; [`CatalogApp`] holds the state a front end
//! renders and drives.

mod api;
mod app;

pub use api::RecipeClient;
pub use app::{shopping_list, CatalogApp, RecipeDraft};

use thiserror::Error;

/// Client errors
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("{0}")]
    InvalidDraft(String),

    #[error("Recipe {0} is not loaded")]
    UnknownRecipe(i64),
}
