/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::error::AppError;
use crate::presentation::LatLng;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response of `/commonapi/search`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SearchResponse {
    /// Total number of matches
    #[serde(default)]
    pub found: u64,
    /// Number of result pages
    #[serde(rename = "totalNumPages", default)]
    pub total_num_pages: u64,
    /// Current page
    #[serde(rename = "pageNum", default)]
    pub page_num: u64,
    /// Matches on this page
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

impl SearchResponse {
    /// Parses a raw search response
    pub fn from_value(value: Value) -> Result<Self, AppError> {
        serde_json::from_value(value)
            .map_err(|e| AppError::Deserialization(format!("search response: {e}")))
    }
}

/// Single search match
///
/// The API sends every field, coordinates included, as a string.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SearchResult {
    /// Matched value
    #[serde(rename = "SEARCHVAL", default)]
    pub search_val: Option<String>,
    /// Block number
    #[serde(rename = "BLK_NO", default)]
    pub blk_no: Option<String>,
    /// Road name
    #[serde(rename = "ROAD_NAME", default)]
    pub road_name: Option<String>,
    /// Building name
    #[serde(rename = "BUILDING", default)]
    pub building: Option<String>,
    /// Full address
    #[serde(rename = "ADDRESS", default)]
    pub address: Option<String>,
    /// Postal code
    #[serde(rename = "POSTAL", default)]
    pub postal: Option<String>,
    /// SVY21 X
    #[serde(rename = "X", default)]
    pub x: Option<Value>,
    /// SVY21 Y
    #[serde(rename = "Y", default)]
    pub y: Option<Value>,
    /// WGS84 latitude
    #[serde(rename = "LATITUDE", default)]
    pub latitude: Option<Value>,
    /// WGS84 longitude
    #[serde(rename = "LONGITUDE", default)]
    pub longitude: Option<Value>,
}

impl SearchResult {
    /// WGS84 location of the match
    pub fn lat_lng(&self) -> Result<LatLng, AppError> {
        let lat = number_field("LATITUDE", self.latitude.as_ref())?;
        let lng = number_field("LONGITUDE", self.longitude.as_ref())?;
        Ok(LatLng::new(lat, lng))
    }
}

/// Reads a coordinate sent either as a JSON number or as a numeric string
fn number_field(name: &str, value: Option<&Value>) -> Result<f64, AppError> {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| AppError::Deserialization(format!("missing or invalid {name}")))
}

/// Response of `getAllThemesInfo`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThemesInfoResponse {
    /// Every theme available to the account
    #[serde(rename = "Theme_Names")]
    pub theme_names: Vec<ThemeInfo>,
}

impl ThemesInfoResponse {
    /// Parses a raw `getAllThemesInfo` response
    pub fn from_value(value: Value) -> Result<Self, AppError> {
        serde_json::from_value(value)
            .map_err(|e| AppError::Deserialization(format!("themes info response: {e}")))
    }

    /// Query names, as accepted by `retrieveTheme`
    pub fn query_names(&self) -> Vec<String> {
        self.theme_names
            .iter()
            .map(|theme| theme.query_name.clone())
            .collect()
    }
}

/// Description of one theme
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThemeInfo {
    /// Display name
    #[serde(rename = "THEMENAME", default)]
    pub theme_name: Option<String>,
    /// Name used in theme queries
    #[serde(rename = "QUERYNAME")]
    pub query_name: String,
    /// Icon file name
    #[serde(rename = "ICON", default)]
    pub icon: Option<String>,
    /// Category
    #[serde(rename = "CATEGORY", default)]
    pub category: Option<String>,
    /// Agency owning the data
    #[serde(rename = "THEME_OWNER", default)]
    pub theme_owner: Option<String>,
}
