use super::unsupported_value;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of route requested from the routing endpoint
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum RouteType {
    /// Walking
    #[serde(rename = "walk")]
    Walk,
    /// Driving
    #[serde(rename = "drive")]
    Drive,
    /// Cycling
    #[serde(rename = "cycle")]
    Cycle,
    /// Public transport, requires date, time and mode
    #[serde(rename = "pt")]
    PublicTransport,
}

impl RouteType {
    /// Every supported route type
    pub const ALL: [RouteType; 4] = [
        RouteType::Walk,
        RouteType::Drive,
        RouteType::Cycle,
        RouteType::PublicTransport,
    ];

    /// Query value expected by the API
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteType::Walk => "walk",
            RouteType::Drive => "drive",
            RouteType::Cycle => "cycle",
            RouteType::PublicTransport => "pt",
        }
    }

    /// Whether the route type needs transit parameters
    pub fn is_public_transport(&self) -> bool {
        matches!(self, RouteType::PublicTransport)
    }
}

impl fmt::Display for RouteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouteType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|route_type| route_type.as_str() == name)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(Self::as_str).collect();
                unsupported_value("route type", s, &names)
            })
    }
}

/// Public transport mode
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransitMode {
    /// Bus and rail combined
    #[default]
    Transit,
    /// Bus only
    Bus,
    /// Rail only
    Rail,
}

impl TransitMode {
    /// Every supported transit mode
    pub const ALL: [TransitMode; 3] = [TransitMode::Transit, TransitMode::Bus, TransitMode::Rail];

    /// Query value expected by the API
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitMode::Transit => "TRANSIT",
            TransitMode::Bus => "BUS",
            TransitMode::Rail => "RAIL",
        }
    }
}

impl fmt::Display for TransitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransitMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == name)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(Self::as_str).collect();
                unsupported_value("transit mode", s, &names)
            })
    }
}
