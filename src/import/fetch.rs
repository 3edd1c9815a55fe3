//! Fallback import that downloads the page as-is.

use std::time::Duration;

use async_trait::async_trait;

use super::{ImportError, RecipeSource, PENDING_INGREDIENT};
use crate::models::ImportedRecipe;

const USER_AGENT: &str = concat!("recipe-catalog/", env!("CARGO_PKG_VERSION"));

/// Largest page body accepted as a description.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Accepts every URL and wraps the raw response body as the description.
pub struct GenericFetchSource {
    client: reqwest::Client,
    max_body: usize,
}

impl GenericFetchSource {
    pub fn new(timeout: Duration) -> Result<Self, ImportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ImportError::Client(e.to_string()))?;
        Ok(Self {
            client,
            max_body: MAX_BODY_BYTES,
        })
    }

    /// Override the body size limit.
    pub fn with_max_body(mut self, max_body: usize) -> Self {
        self.max_body = max_body;
        self
    }
}

#[async_trait]
impl RecipeSource for GenericFetchSource {
    fn name(&self) -> &str {
        "web"
    }

    fn accepts(&self, _url: &str) -> bool {
        true
    }

    async fn resolve(&self, url: &str) -> Result<ImportedRecipe, ImportError> {
        let fetch_error = |e: reqwest::Error| ImportError::Fetch {
            url: url.to_string(),
            message: e.to_string(),
        };

        let too_large = || ImportError::TooLarge {
            url: url.to_string(),
            limit: self.max_body,
        };

        let mut response = self.client.get(url).send().await.map_err(fetch_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImportError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        if response
            .content_length()
            .is_some_and(|length| length > self.max_body as u64)
        {
            return Err(too_large());
        }

        // Content-Length may be absent or wrong, so the limit is also enforced
        // while reading.
        let mut bytes = Vec::new();
        while let Some(chunk) = response.chunk().await.map_err(fetch_error)? {
            if bytes.len() + chunk.len() > self.max_body {
                return Err(too_large());
            }
            bytes.extend_from_slice(&chunk);
        }
        tracing::debug!(url, bytes = bytes.len(), "Fetched import page");
        let body = String::from_utf8_lossy(&bytes).into_owned();

        let description = if body.trim().is_empty() {
            "No description".to_string()
        } else {
            body
        };

        Ok(ImportedRecipe {
            name: "Web Recipe".to_string(),
            description,
            ingredients: vec![PENDING_INGREDIENT.to_string()],
            image: String::new(),
            category: String::new(),
        })
    }
}
