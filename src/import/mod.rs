//! Recipe import from external URLs.
//!
//! No page content is parsed. Known social platforms get a canned placeholder
//! and any other URL is fetched and its raw body used as the description.
//! Each kind of URL is handled by a [`RecipeSource`]; the [`Importer`] asks
//! them in order and uses the first that accepts the URL.

mod fetch;
mod platform;

pub use fetch::GenericFetchSource;
pub use platform::PlatformSource;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::ImportedRecipe;

/// Placeholder used until real ingredient extraction exists.
pub const PENDING_INGREDIENT: &str = "Ingredients pending";

/// Import errors
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("a URL is required")]
    MissingUrl,

    #[error("could not fetch {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },

    #[error("{url} returned more than {limit} bytes")]
    TooLarge { url: String, limit: usize },

    #[error("no import source accepts {0}")]
    Unsupported(String),

    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

/// One way of turning a URL into pre-fill data.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Short label used in logs.
    fn name(&self) -> &str;
    fn accepts(&self, url: &str) -> bool;
    async fn resolve(&self, url: &str) -> Result<ImportedRecipe, ImportError>;
}

/// Ordered chain of import sources.
pub struct Importer {
    sources: Vec<Arc<dyn RecipeSource>>,
}

impl Importer {
    /// Known platforms first, then a generic fetch for everything else.
    pub fn new(fetch_timeout: Duration) -> Result<Self, ImportError> {
        let mut sources: Vec<Arc<dyn RecipeSource>> = PlatformSource::known()
            .into_iter()
            .map(|source| Arc::new(source) as Arc<dyn RecipeSource>)
            .collect();
        sources.push(Arc::new(GenericFetchSource::new(fetch_timeout)?));
        Ok(Self::with_sources(sources))
    }

    pub fn with_sources(sources: Vec<Arc<dyn RecipeSource>>) -> Self {
        Self { sources }
    }

    /// Resolve `url` with the first source that accepts it.
    pub async fn resolve(&self, url: &str) -> Result<ImportedRecipe, ImportError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(ImportError::MissingUrl);
        }

        let source = self
            .sources
            .iter()
            .find(|source| source.accepts(url))
            .ok_or_else(|| ImportError::Unsupported(url.to_string()))?;

        tracing::debug!(source = source.name(), url, "Resolving recipe import");
        source.resolve(url).await
    }
}
