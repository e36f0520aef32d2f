use crate::application::services::PlanningAreaService;
use crate::constants::{
    ALL_PLANNING_AREAS_ENDPOINT, DEFAULT_PLANNING_AREA_YEAR, PLANNING_AREA_ENDPOINT,
    PLANNING_AREA_NAMES_ENDPOINT,
};
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::presentation::LatLng;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Implementation of the planning area service
pub struct PlanningAreaServiceImpl {
    client: Arc<HttpClient>,
}

impl PlanningAreaServiceImpl {
    /// Creates a new instance of the planning area service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PlanningAreaService for PlanningAreaServiceImpl {
    async fn get_all_planning_areas(
        &self,
        year: Option<u16>,
        names_only: bool,
    ) -> Result<Value, AppError> {
        let year = year.unwrap_or(DEFAULT_PLANNING_AREA_YEAR);
        let path = if names_only {
            PLANNING_AREA_NAMES_ENDPOINT
        } else {
            ALL_PLANNING_AREAS_ENDPOINT
        };
        debug!("Getting planning areas for {} (names only: {})", year, names_only);

        self.client
            .get_with_token(path, vec![("year", year.to_string())])
            .await
    }

    async fn find_planning_area(
        &self,
        lat: f64,
        lng: f64,
        year: Option<u16>,
    ) -> Result<Value, AppError> {
        LatLng::new(lat, lng).check_finite("planning area lookup")?;
        let year = year.unwrap_or(DEFAULT_PLANNING_AREA_YEAR);
        debug!("Finding planning area at {},{} for {}", lat, lng, year);

        let query = vec![
            ("lat", lat.to_string()),
            ("lng", lng.to_string()),
            ("year", year.to_string()),
        ];
        self.client.get_with_token(PLANNING_AREA_ENDPOINT, query).await
    }
}
