//! Typed HTTP client for the recipe API.

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::json;

use super::ClientError;
use crate::errors::ErrorResponse;
use crate::models::{ImportedRecipe, Recipe, RecipeRequest};

/// Thin wrapper over `reqwest` for the `/api` endpoints.
#[derive(Debug, Clone)]
pub struct RecipeClient {
    http: reqwest::Client,
    base_url: String,
}

impl RecipeClient {
    /// `base_url` is the server root, e.g. `http://localhost:3001`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    pub async fn list(&self) -> Result<Vec<Recipe>, ClientError> {
        let response = self.http.get(self.url("/recipes")).send().await?;
        decode(response).await
    }

    pub async fn get(&self, id: i64) -> Result<Recipe, ClientError> {
        let response = self
            .http
            .get(self.url(&format!("/recipes/{}", id)))
            .send()
            .await?;
        decode(response).await
    }

    pub async fn create(&self, request: &RecipeRequest) -> Result<Recipe, ClientError> {
        let response = self
            .http
            .post(self.url("/recipes"))
            .json(request)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn update(&self, id: i64, request: &RecipeRequest) -> Result<Recipe, ClientError> {
        let response = self
            .http
            .put(self.url(&format!("/recipes/{}", id)))
            .json(request)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/recipes/{}", id)))
            .send()
            .await?;
        let _: serde_json::Value = decode(response).await?;
        Ok(())
    }

    pub async fn import(&self, url: &str) -> Result<ImportedRecipe, ClientError> {
        let response = self
            .http
            .post(self.url("/import-recipe"))
            .json(&json!({ "url": url }))
            .send()
            .await?;
        decode(response).await
    }
}

/// Parse a success body, or turn the error envelope into [`ClientError::Api`].
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorResponse>(&text)
        .map(|body| body.error.message)
        .unwrap_or_else(|_| fallback_message(status, &text));
    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

fn fallback_message(status: StatusCode, text: &str) -> String {
    if text.trim().is_empty() {
        status.to_string()
    } else {
        text.trim().to_string()
    }
}
