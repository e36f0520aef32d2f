use crate::error::AppError;
use crate::model::requests::{RouteRequest, TransitOptions};
use crate::presentation::routing::RouteType;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the routing endpoint
#[async_trait]
pub trait RoutingService: Send + Sync {
    /// Computes a route between two WGS84 points
    async fn route(&self, request: &RouteRequest) -> Result<Value, AppError>;

    /// Computes a route between two postal codes
    ///
    /// Each code is resolved to a point with a search first, so this issues
    /// three requests in sequence.
    ///
    /// # Arguments
    /// * `start_postal` - Six digit postal code of the origin
    /// * `end_postal` - Six digit postal code of the destination
    /// * `route_type` - Travel mode
    /// * `transit` - Required when `route_type` is public transport
    async fn route_from_postal(
        &self,
        start_postal: &str,
        end_postal: &str,
        route_type: RouteType,
        transit: Option<TransitOptions>,
    ) -> Result<Value, AppError>;
}
