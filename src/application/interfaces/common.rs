use crate::error::AppError;
use crate::model::requests::{ConvertRequest, ReverseGeocodeRequest, SearchRequest};
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the common endpoints: search, conversion and reverse geocoding
#[async_trait]
pub trait CommonService: Send + Sync {
    /// Free-text search for buildings, roads and postal codes
    ///
    /// # Arguments
    /// * `request` - Search value and paging options
    async fn search(&self, request: &SearchRequest) -> Result<Value, AppError>;

    /// Converts a point between WGS84, SVY21 and EPSG:3857
    ///
    /// Projected sources need `x` and `y`, WGS84 needs `lat` and `lng`.
    async fn convert_coordinates(&self, request: &ConvertRequest) -> Result<Value, AppError>;

    /// Lists the buildings around a point
    async fn reverse_geocode(&self, request: &ReverseGeocodeRequest) -> Result<Value, AppError>;
}
