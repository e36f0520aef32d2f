use crate::application::services::CommonService;
use crate::constants::SEARCH_ENDPOINT;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::{ConvertRequest, ReverseGeocodeRequest, SearchRequest};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the common service
pub struct CommonServiceImpl {
    client: Arc<HttpClient>,
}

impl CommonServiceImpl {
    /// Creates a new instance of the common service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CommonService for CommonServiceImpl {
    async fn search(&self, request: &SearchRequest) -> Result<Value, AppError> {
        request.validate()?;
        info!("Searching for '{}'", request.search_val);

        let result = self.client.get(SEARCH_ENDPOINT, request.to_query()).await?;

        debug!(
            "Search returned {} matches",
            result.get("found").and_then(serde_json::Value::as_u64).unwrap_or(0)
        );
        Ok(result)
    }

    async fn convert_coordinates(&self, request: &ConvertRequest) -> Result<Value, AppError> {
        let query = request.to_query()?;
        debug!("Converting coordinates from {} to {}", request.source, request.target);

        self.client.get(&request.path(), query).await
    }

    async fn reverse_geocode(&self, request: &ReverseGeocodeRequest) -> Result<Value, AppError> {
        let query = request.to_query()?;
        debug!("Reverse geocoding within {} metres", request.buffer);

        self.client.get_with_token(&request.path(), query).await
    }
}
