use super::unsupported_value;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coordinate reference system accepted by the conversion endpoint
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Crs {
    /// WGS84 latitude/longitude (EPSG:4326)
    #[serde(rename = "WGS84")]
    Wgs84,
    /// SVY21 projected metres (EPSG:3414)
    #[serde(rename = "SVY21")]
    Svy21,
    /// Web Mercator projected metres
    #[serde(rename = "EPSG3857")]
    Epsg3857,
}

impl Crs {
    /// Every supported reference system
    pub const ALL: [Crs; 3] = [Crs::Wgs84, Crs::Svy21, Crs::Epsg3857];

    /// EPSG code used in the conversion path
    pub fn epsg(&self) -> &'static str {
        match self {
            Crs::Wgs84 => "4326",
            Crs::Svy21 => "3414",
            Crs::Epsg3857 => "3857",
        }
    }

    /// Name of the reference system
    pub fn as_str(&self) -> &'static str {
        match self {
            Crs::Wgs84 => "WGS84",
            Crs::Svy21 => "SVY21",
            Crs::Epsg3857 => "EPSG3857",
        }
    }

    /// Whether input coordinates are projected X/Y rather than lat/lng
    pub fn is_projected(&self) -> bool {
        !matches!(self, Crs::Wgs84)
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Crs {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Crs::ALL
            .into_iter()
            .find(|crs| crs.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let names: Vec<&str> = Crs::ALL.iter().map(Crs::as_str).collect();
                unsupported_value("coordinate reference system", s, &names)
            })
    }
}
