//! Placeholder imports for social media platforms.

use async_trait::async_trait;

use super::{ImportError, RecipeSource, PENDING_INGREDIENT};
use crate::models::ImportedRecipe;

/// Matches URLs of one platform by domain substring.
#[derive(Debug, Clone)]
pub struct PlatformSource {
    platform: &'static str,
    domain: &'static str,
}

impl PlatformSource {
    pub const fn new(platform: &'static str, domain: &'static str) -> Self {
        Self { platform, domain }
    }

    /// Platforms recognized out of the box.
    pub fn known() -> Vec<Self> {
        vec![
            Self::new("Instagram", "instagram.com"),
            Self::new("TikTok", "tiktok.com"),
            Self::new("YouTube", "youtube.com"),
            Self::new("Facebook", "facebook.com"),
        ]
    }
}

#[async_trait]
impl RecipeSource for PlatformSource {
    fn name(&self) -> &str {
        self.platform
    }

    fn accepts(&self, url: &str) -> bool {
        url.contains(self.domain)
    }

    async fn resolve(&self, url: &str) -> Result<ImportedRecipe, ImportError> {
        // The post URL doubles as the image until thumbnails are extracted.
        Ok(ImportedRecipe {
            name: format!("{} Recipe", self.platform),
            description: format!("Imported from {}", self.platform),
            ingredients: vec![PENDING_INGREDIENT.to_string()],
            image: url.to_string(),
            category: String::new(),
        })
    }
}
