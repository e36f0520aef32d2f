use crate::application::services::{CommonService, CommonServiceImpl, RoutingService};
use crate::constants::ROUTE_ENDPOINT;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::{RouteRequest, SearchRequest, TransitOptions};
use crate::model::responses::SearchResponse;
use crate::presentation::geometry::LatLng;
use crate::presentation::routing::RouteType;
use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

lazy_static! {
    static ref POSTAL_CODE: Regex = Regex::new(r"^[0-9]{6}$").unwrap();
}

/// Implementation of the routing service
pub struct RoutingServiceImpl {
    client: Arc<HttpClient>,
    common: CommonServiceImpl,
}

impl RoutingServiceImpl {
    /// Creates a new instance of the routing service
    pub fn new(client: Arc<HttpClient>) -> Self {
        let common = CommonServiceImpl::new(client.clone());
        Self { client, common }
    }

    /// Resolves a postal code to the location of its first search match
    pub async fn locate_postal_code(&self, postal: &str) -> Result<LatLng, AppError> {
        let postal = postal.trim();
        if !POSTAL_CODE.is_match(postal) {
            return Err(AppError::Validation(format!(
                "postal code must be exactly 6 digits, got `{postal}`"
            )));
        }

        let response = self.common.search(&SearchRequest::new(postal)).await?;
        let response = SearchResponse::from_value(response)?;
        let first = response.results.first().ok_or_else(|| {
            AppError::Validation(format!("no location found for postal code {postal}"))
        })?;

        let point = first.lat_lng()?;
        debug!("Postal code {} resolved to {}", postal, point.to_param());
        Ok(point)
    }
}

#[async_trait]
impl RoutingService for RoutingServiceImpl {
    async fn route(&self, request: &RouteRequest) -> Result<Value, AppError> {
        let query = request.to_query()?;
        info!(
            "Routing from {} to {} by {}",
            request.start.to_param(),
            request.end.to_param(),
            request.route_type
        );

        self.client.get_with_token(ROUTE_ENDPOINT, query).await
    }

    async fn route_from_postal(
        &self,
        start_postal: &str,
        end_postal: &str,
        route_type: RouteType,
        transit: Option<TransitOptions>,
    ) -> Result<Value, AppError> {
        let transit = transit.unwrap_or_default();
        // Fail on missing transit options before spending two searches
        if route_type.is_public_transport() {
            transit.to_query()?;
        }

        let start = self.locate_postal_code(start_postal).await?;
        let end = self.locate_postal_code(end_postal).await?;

        let request = RouteRequest::new(start, end, route_type).with_transit(transit);
        self.route(&request).await
    }
}
