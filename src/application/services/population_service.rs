use crate::application::services::PopulationService;
use crate::constants::POPULATION_ENDPOINT;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::QueryParams;
use crate::presentation::population::{Gender, PopulationDataType};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Implementation of the population statistics service
pub struct PopulationServiceImpl {
    client: Arc<HttpClient>,
}

impl PopulationServiceImpl {
    /// Creates a new instance of the population service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Queries a statistic by its name, e.g. "age" or "household_size"
    ///
    /// An unknown name fails before any request is made.
    pub async fn query_by_name(
        &self,
        data_type: &str,
        year: u16,
        planning_area: &str,
    ) -> Result<Value, AppError> {
        let data_type: PopulationDataType = data_type.parse()?;
        self.get_population_data(data_type, year, planning_area).await
    }

    async fn query(
        &self,
        data_type: PopulationDataType,
        year: u16,
        planning_area: &str,
        gender: Option<Gender>,
    ) -> Result<Value, AppError> {
        let planning_area = planning_area.trim();
        if planning_area.is_empty() {
            return Err(AppError::Validation(
                "planning area must not be empty".to_string(),
            ));
        }

        let mut query: QueryParams = vec![
            ("year", year.to_string()),
            ("planningArea", planning_area.to_string()),
        ];
        if let Some(gender) = gender {
            query.push(("gender", gender.to_string()));
        }

        let path = format!("{POPULATION_ENDPOINT}/{}", data_type.endpoint());
        debug!("Getting {} for {} in {}", data_type, planning_area, year);
        self.client.get_with_token(&path, query).await
    }
}

#[async_trait]
impl PopulationService for PopulationServiceImpl {
    async fn get_population_data(
        &self,
        data_type: PopulationDataType,
        year: u16,
        planning_area: &str,
    ) -> Result<Value, AppError> {
        self.query(data_type, year, planning_area, None).await
    }

    async fn get_population_by_gender(
        &self,
        data_type: PopulationDataType,
        year: u16,
        planning_area: &str,
        gender: Option<Gender>,
    ) -> Result<Value, AppError> {
        if gender.is_some() && !data_type.supports_gender() {
            warn!(
                "{} is not documented to support a gender breakdown, sending anyway",
                data_type
            );
        }
        self.query(data_type, year, planning_area, gender).await
    }
}
