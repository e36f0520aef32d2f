/// Coordinate reference systems supported by the conversion endpoint
pub mod crs;
/// Reverse geocoding options
pub mod geocode;
/// Points, projected coordinates and bounding boxes
pub mod geometry;
/// Population statistics categories
pub mod population;
/// Route types and transit modes
pub mod routing;
/// Theme query results
pub mod theme;

pub use crs::*;
pub use geocode::*;
pub use geometry::*;
pub use population::*;
pub use routing::*;
pub use theme::*;

use crate::error::AppError;

/// Builds the validation error returned when parsing an unknown name
pub(crate) fn unsupported_value(kind: &str, value: &str, supported: &[&str]) -> AppError {
    AppError::Validation(format!(
        "unsupported {kind} `{value}`, supported: {}",
        supported.join(", ")
    ))
}
