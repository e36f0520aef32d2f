use crate::application::services::ThemeService;
use crate::constants::{ALL_THEMES_INFO_ENDPOINT, RETRIEVE_THEME_ENDPOINT, THEME_INFO_ENDPOINT};
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::{QueryParams, yes_no};
use crate::model::responses::ThemesInfoResponse;
use crate::presentation::geometry::BoundingBox;
use crate::presentation::theme::ThemeResults;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the themes service
pub struct ThemeServiceImpl {
    client: Arc<HttpClient>,
}

impl ThemeServiceImpl {
    /// Creates a new instance of the themes service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

fn require_theme(theme: &str) -> Result<&str, AppError> {
    let theme = theme.trim();
    if theme.is_empty() {
        return Err(AppError::Validation("theme name must not be empty".to_string()));
    }
    Ok(theme)
}

#[async_trait]
impl ThemeService for ThemeServiceImpl {
    async fn get_theme_info(&self, theme_name: &str) -> Result<Value, AppError> {
        let theme_name = require_theme(theme_name)?;
        debug!("Getting info for theme {}", theme_name);

        self.client
            .get_with_token(THEME_INFO_ENDPOINT, vec![("queryName", theme_name.to_string())])
            .await
    }

    async fn get_all_themes_info(&self, more_info: bool) -> Result<Value, AppError> {
        debug!("Getting all themes info");

        self.client
            .get_with_token(ALL_THEMES_INFO_ENDPOINT, vec![("moreInfo", yes_no(more_info))])
            .await
    }

    async fn retrieve_theme(
        &self,
        theme: &str,
        bbox: Option<BoundingBox>,
    ) -> Result<ThemeResults, AppError> {
        let theme = require_theme(theme)?;
        let mut query: QueryParams = vec![("queryName", theme.to_string())];
        if let Some(bbox) = bbox {
            bbox.check_finite()?;
            query.push(("extents", bbox.extents()));
        }
        info!("Retrieving theme {}", theme);

        let response = self.client.get_with_token(RETRIEVE_THEME_ENDPOINT, query).await?;
        let results = ThemeResults::from_response(response);

        debug!("Theme {} returned {} features", theme, results.results().len());
        Ok(results)
    }

    async fn get_list_of_available_themes(&self) -> Result<Vec<String>, AppError> {
        let response = self.get_all_themes_info(true).await?;
        let themes = ThemesInfoResponse::from_value(response)?;
        Ok(themes.query_names())
    }
}
