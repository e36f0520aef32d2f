use crate::error::AppError;
use crate::presentation::geometry::BoundingBox;
use crate::presentation::theme::ThemeResults;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the themes endpoints
#[async_trait]
pub trait ThemeService: Send + Sync {
    /// Gets the description of one theme
    async fn get_theme_info(&self, theme_name: &str) -> Result<Value, AppError>;

    /// Gets the description of every theme
    ///
    /// # Arguments
    /// * `more_info` - Include category and owner of each theme
    async fn get_all_themes_info(&self, more_info: bool) -> Result<Value, AppError>;

    /// Gets the features of a theme, optionally restricted to a bounding box
    async fn retrieve_theme(
        &self,
        theme: &str,
        bbox: Option<BoundingBox>,
    ) -> Result<ThemeResults, AppError>;

    /// Query names of every available theme
    async fn get_list_of_available_themes(&self) -> Result<Vec<String>, AppError>;
}
