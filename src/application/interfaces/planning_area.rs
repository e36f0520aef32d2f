use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the planning area endpoints
#[async_trait]
pub trait PlanningAreaService: Send + Sync {
    /// Gets every planning area for a year
    ///
    /// # Arguments
    /// * `year` - Master plan year, 2014 when `None`
    /// * `names_only` - Return only the names instead of full geometries
    async fn get_all_planning_areas(
        &self,
        year: Option<u16>,
        names_only: bool,
    ) -> Result<Value, AppError>;

    /// Finds the planning area containing a WGS84 point
    async fn find_planning_area(
        &self,
        lat: f64,
        lng: f64,
        year: Option<u16>,
    ) -> Result<Value, AppError>;
}
