use super::unsupported_value;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which properties reverse geocoding returns within the buffer
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum AddressType {
    /// Every building
    #[default]
    All,
    /// Public housing only
    #[serde(rename = "HDB")]
    Hdb,
}

impl AddressType {
    /// Query value expected by the API
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressType::All => "All",
            AddressType::Hdb => "HDB",
        }
    }
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AddressType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ALL" => Ok(AddressType::All),
            "HDB" => Ok(AddressType::Hdb),
            _ => Err(unsupported_value("address type", s, &["All", "HDB"])),
        }
    }
}
