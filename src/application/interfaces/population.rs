use crate::error::AppError;
use crate::presentation::population::{Gender, PopulationDataType};
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the population statistics endpoints
#[async_trait]
pub trait PopulationService: Send + Sync {
    /// Gets one statistic for a planning area
    ///
    /// # Arguments
    /// * `data_type` - Which statistic to query
    /// * `year` - Census year
    /// * `planning_area` - Planning area name, e.g. "Bedok"
    async fn get_population_data(
        &self,
        data_type: PopulationDataType,
        year: u16,
        planning_area: &str,
    ) -> Result<Value, AppError>;

    /// Gets one statistic for a planning area, optionally split by gender
    ///
    /// With `gender` set to `None` the request is the same as
    /// [`get_population_data`](Self::get_population_data).
    async fn get_population_by_gender(
        &self,
        data_type: PopulationDataType,
        year: u16,
        planning_area: &str,
        gender: Option<Gender>,
    ) -> Result<Value, AppError>;
}
