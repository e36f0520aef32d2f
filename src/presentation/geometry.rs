/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::constants::EXTENTS_PRECISION;
use crate::error::AppError;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// WGS84 point
#[derive(Debug, Copy, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct LatLng {
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lng: f64,
}

impl LatLng {
    /// Creates a new point
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Formats the point as the `lat,lng` query value used by the API
    pub fn to_param(&self) -> String {
        format!("{},{}", self.lat, self.lng)
    }

    /// Rejects NaN and infinite components; `what` names the point in the error
    pub fn check_finite(&self, what: &str) -> Result<(), AppError> {
        check_finite(what, self.lat, self.lng)
    }
}

impl From<(f64, f64)> for LatLng {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

/// Projected coordinate pair, SVY21 or EPSG:3857 metres
#[derive(Debug, Copy, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Xy {
    /// Easting
    pub x: f64,
    /// Northing
    pub y: f64,
}

impl Xy {
    /// Creates a new projected coordinate
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Formats the coordinate as the `x,y` query value used by the API
    pub fn to_param(&self) -> String {
        format!("{},{}", self.x, self.y)
    }

    /// Rejects NaN and infinite components; `what` names the point in the error
    pub fn check_finite(&self, what: &str) -> Result<(), AppError> {
        check_finite(what, self.x, self.y)
    }
}

impl From<(f64, f64)> for Xy {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Bounding box given by two opposite vertices
#[derive(Debug, Copy, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct BoundingBox {
    /// First vertex
    pub first: LatLng,
    /// Opposite vertex
    pub second: LatLng,
}

impl BoundingBox {
    /// Creates a bounding box from two opposite vertices
    pub fn new(first: impl Into<LatLng>, second: impl Into<LatLng>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Rejects a box with a non-finite vertex
    pub fn check_finite(&self) -> Result<(), AppError> {
        self.first.check_finite("first vertex")?;
        self.second.check_finite("second vertex")
    }

    /// Formats the box as `lat1,lng1,lat2,lng2` with five decimals per value
    pub fn extents(&self) -> String {
        format!(
            "{:.p$},{:.p$},{:.p$},{:.p$}",
            self.first.lat,
            self.first.lng,
            self.second.lat,
            self.second.lng,
            p = EXTENTS_PRECISION
        )
    }
}

fn check_finite(what: &str, a: f64, b: f64) -> Result<(), AppError> {
    if a.is_finite() && b.is_finite() {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "{what} must have finite coordinates, got ({a}, {b})"
        )))
    }
}
