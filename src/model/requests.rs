/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::constants::{
    CONVERT_ENDPOINT, DEFAULT_GEOCODE_BUFFER, MAX_GEOCODE_BUFFER, MAX_ITINERARIES,
    REVERSE_GEOCODE_ENDPOINT,
};
use crate::error::AppError;
use crate::presentation::{AddressType, Crs, LatLng, RouteType, TransitMode, Xy};
use chrono::{NaiveDate, NaiveTime};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Query parameters in the order they are sent
pub type QueryParams = Vec<(&'static str, String)>;

/// Formats a flag as the `Y`/`N` value the API expects
pub fn yes_no(flag: bool) -> String {
    let value = if flag { "Y" } else { "N" };
    value.to_string()
}

/// Parameters for free-text search
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct SearchRequest {
    /// Text to search for: address, building name or postal code
    pub search_val: String,
    /// Whether to return the geometry of each result (default: true)
    pub return_geometry: bool,
    /// Whether to return the address details of each result (default: true)
    pub get_address_details: bool,
    /// Page of results to return, starting at 1
    pub page_num: u32,
}

impl SearchRequest {
    /// Create new parameters with just the search value
    pub fn new(search_val: impl Into<String>) -> Self {
        Self {
            search_val: search_val.into(),
            return_geometry: true,
            get_address_details: true,
            page_num: 1,
        }
    }

    /// Set whether geometry is returned
    pub fn with_geometry(mut self, return_geometry: bool) -> Self {
        self.return_geometry = return_geometry;
        self
    }

    /// Set whether address details are returned
    pub fn with_address_details(mut self, get_address_details: bool) -> Self {
        self.get_address_details = get_address_details;
        self
    }

    /// Set the page number
    pub fn with_page(mut self, page_num: u32) -> Self {
        self.page_num = page_num;
        self
    }

    /// Checks the parameters without touching the network
    pub fn validate(&self) -> Result<(), AppError> {
        if self.search_val.trim().is_empty() {
            return Err(AppError::Validation(
                "search value must not be empty".to_string(),
            ));
        }
        if self.page_num == 0 {
            return Err(AppError::Validation("page number starts at 1".to_string()));
        }
        Ok(())
    }

    /// Query parameters for `/commonapi/search`
    pub fn to_query(&self) -> QueryParams {
        vec![
            ("searchVal", self.search_val.clone()),
            ("returnGeom", yes_no(self.return_geometry)),
            ("getAddrDetails", yes_no(self.get_address_details)),
            ("pageNum", self.page_num.to_string()),
        ]
    }
}

/// Parameters for converting a point between reference systems
///
/// Projected sources (SVY21, EPSG3857) need `x` and `y`; WGS84 needs `lat` and `lng`.
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct ConvertRequest {
    /// Reference system of the input
    pub source: Crs,
    /// Reference system of the output
    pub target: Crs,
    /// X coordinate for projected sources
    pub x: Option<f64>,
    /// Y coordinate for projected sources
    pub y: Option<f64>,
    /// Latitude for a WGS84 source
    pub lat: Option<f64>,
    /// Longitude for a WGS84 source
    pub lng: Option<f64>,
}

impl ConvertRequest {
    /// Create a request without coordinates
    pub fn new(source: Crs, target: Crs) -> Self {
        Self {
            source,
            target,
            x: None,
            y: None,
            lat: None,
            lng: None,
        }
    }

    /// Create a request from a projected coordinate
    pub fn from_xy(source: Crs, target: Crs, xy: Xy) -> Self {
        Self::new(source, target).with_x(xy.x).with_y(xy.y)
    }

    /// Create a request from a WGS84 point
    pub fn from_latlng(target: Crs, point: LatLng) -> Self {
        Self::new(Crs::Wgs84, target)
            .with_lat(point.lat)
            .with_lng(point.lng)
    }

    /// Set the X coordinate
    pub fn with_x(mut self, x: f64) -> Self {
        self.x = Some(x);
        self
    }

    /// Set the Y coordinate
    pub fn with_y(mut self, y: f64) -> Self {
        self.y = Some(y);
        self
    }

    /// Set the latitude
    pub fn with_lat(mut self, lat: f64) -> Self {
        self.lat = Some(lat);
        self
    }

    /// Set the longitude
    pub fn with_lng(mut self, lng: f64) -> Self {
        self.lng = Some(lng);
        self
    }

    /// Endpoint path, e.g. `/commonapi/convert/3414to4326`
    pub fn path(&self) -> String {
        format!(
            "{CONVERT_ENDPOINT}/{}to{}",
            self.source.epsg(),
            self.target.epsg()
        )
    }

    /// Checks the parameters without touching the network
    pub fn validate(&self) -> Result<(), AppError> {
        self.to_query().map(|_| ())
    }

    /// Query parameters, `{X, Y}` or `{latitude, longitude}` depending on the source
    pub fn to_query(&self) -> Result<QueryParams, AppError> {
        if self.source.is_projected() {
            match (self.x, self.y) {
                (Some(x), Some(y)) => {
                    Xy::new(x, y).check_finite("x/y")?;
                    Ok(vec![("X", x.to_string()), ("Y", y.to_string())])
                }
                _ => Err(AppError::Validation(format!(
                    "x and y must both be provided when the source is {}",
                    self.source
                ))),
            }
        } else {
            match (self.lat, self.lng) {
                (Some(lat), Some(lng)) => {
                    LatLng::new(lat, lng).check_finite("lat/lng")?;
                    Ok(vec![
                        ("latitude", lat.to_string()),
                        ("longitude", lng.to_string()),
                    ])
                }
                _ => Err(AppError::Validation(format!(
                    "lat and lng must both be provided when the source is {}",
                    self.source
                ))),
            }
        }
    }
}

/// Parameters for reverse geocoding
///
/// Exactly one of `latlng` and `xy` must be set. `xy` selects the SVY21 variant
/// of the endpoint.
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct ReverseGeocodeRequest {
    /// WGS84 point
    pub latlng: Option<LatLng>,
    /// SVY21 coordinate
    pub xy: Option<Xy>,
    /// Search radius in metres, at most 500 (roads are only matched within 20)
    pub buffer: u32,
    /// Which buildings to return
    pub address_type: AddressType,
    /// Whether to include reservoirs, playgrounds, jetties and similar features
    pub other_features: bool,
}

impl Default for ReverseGeocodeRequest {
    fn default() -> Self {
        Self {
            latlng: None,
            xy: None,
            buffer: DEFAULT_GEOCODE_BUFFER,
            address_type: AddressType::All,
            other_features: true,
        }
    }
}

impl ReverseGeocodeRequest {
    /// Create a request around a WGS84 point
    pub fn from_latlng(point: impl Into<LatLng>) -> Self {
        Self {
            latlng: Some(point.into()),
            ..Default::default()
        }
    }

    /// Create a request around an SVY21 coordinate
    pub fn from_xy(xy: impl Into<Xy>) -> Self {
        Self {
            xy: Some(xy.into()),
            ..Default::default()
        }
    }

    /// Set the search radius
    pub fn with_buffer(mut self, buffer: u32) -> Self {
        self.buffer = buffer;
        self
    }

    /// Set the address type
    pub fn with_address_type(mut self, address_type: AddressType) -> Self {
        self.address_type = address_type;
        self
    }

    /// Set whether other features are returned
    pub fn with_other_features(mut self, other_features: bool) -> Self {
        self.other_features = other_features;
        self
    }

    /// Checks the parameters without touching the network
    pub fn validate(&self) -> Result<(), AppError> {
        match (&self.latlng, &self.xy) {
            (None, None) => {
                return Err(AppError::Validation(
                    "one of `latlng` or `xy` must be provided".to_string(),
                ));
            }
            (Some(_), Some(_)) => {
                return Err(AppError::Validation(
                    "only one of `latlng` or `xy` may be provided".to_string(),
                ));
            }
            (Some(point), None) => point.check_finite("latlng")?,
            (None, Some(xy)) => xy.check_finite("xy")?,
        }
        if self.buffer > MAX_GEOCODE_BUFFER {
            return Err(AppError::Validation(format!(
                "buffer must be at most {MAX_GEOCODE_BUFFER} metres, got {}",
                self.buffer
            )));
        }
        Ok(())
    }

    /// Endpoint path, with the `xy` suffix for projected input
    pub fn path(&self) -> String {
        if self.xy.is_some() && self.latlng.is_none() {
            format!("{REVERSE_GEOCODE_ENDPOINT}xy")
        } else {
            REVERSE_GEOCODE_ENDPOINT.to_string()
        }
    }

    /// Query parameters, excluding the token
    pub fn to_query(&self) -> Result<QueryParams, AppError> {
        self.validate()?;
        let location = match (&self.latlng, &self.xy) {
            (Some(point), None) => point.to_param(),
            (None, Some(xy)) => xy.to_param(),
            _ => {
                return Err(AppError::Validation(
                    "exactly one of `latlng` or `xy` must be provided".to_string(),
                ));
            }
        };
        Ok(vec![
            ("location", location),
            ("buffer", self.buffer.to_string()),
            ("addressType", self.address_type.to_string()),
            ("otherFeatures", yes_no(self.other_features)),
        ])
    }
}

/// Public transport parameters of a route request
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct TransitOptions {
    /// Date of travel
    pub date: Option<NaiveDate>,
    /// Departure time
    pub time: Option<NaiveTime>,
    /// Transit mode
    pub mode: Option<TransitMode>,
    /// Maximum walking distance in metres
    pub max_walk_distance: Option<u32>,
    /// Number of itineraries to return, 1 to 3
    pub num_itineraries: Option<u8>,
}

impl TransitOptions {
    /// Create options with the three mandatory values
    pub fn new(date: NaiveDate, time: NaiveTime, mode: TransitMode) -> Self {
        Self {
            date: Some(date),
            time: Some(time),
            mode: Some(mode),
            ..Default::default()
        }
    }

    /// Set the maximum walking distance
    pub fn with_max_walk_distance(mut self, metres: u32) -> Self {
        self.max_walk_distance = Some(metres);
        self
    }

    /// Set the number of itineraries
    pub fn with_num_itineraries(mut self, count: u8) -> Self {
        self.num_itineraries = Some(count);
        self
    }

    /// Public transport query parameters
    ///
    /// `date`, `time` and `mode` are mandatory, the rest only sent when set.
    pub fn to_query(&self) -> Result<QueryParams, AppError> {
        let (Some(date), Some(time), Some(mode)) = (self.date, self.time, self.mode) else {
            return Err(AppError::Validation(
                "`date`, `time` and `mode` must be provided when the route type is `pt`"
                    .to_string(),
            ));
        };

        let mut query = vec![
            ("date", date.format("%Y-%m-%d").to_string()),
            ("time", time.format("%H:%M:%S").to_string()),
            ("mode", mode.to_string()),
        ];

        if let Some(distance) = self.max_walk_distance {
            query.push(("maxWalkDistance", distance.to_string()));
        }
        if let Some(count) = self.num_itineraries {
            if count == 0 || count > MAX_ITINERARIES {
                return Err(AppError::Validation(format!(
                    "number of itineraries must be between 1 and {MAX_ITINERARIES}, got {count}"
                )));
            }
            query.push(("numItineraries", count.to_string()));
        }
        Ok(query)
    }
}

/// Parameters for the routing endpoint
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct RouteRequest {
    /// Start point
    pub start: LatLng,
    /// End point
    pub end: LatLng,
    /// Kind of route
    pub route_type: RouteType,
    /// Public transport parameters, only used when `route_type` is `pt`
    pub transit: TransitOptions,
}

impl RouteRequest {
    /// Create a request between two points
    pub fn new(start: impl Into<LatLng>, end: impl Into<LatLng>, route_type: RouteType) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            route_type,
            transit: TransitOptions::default(),
        }
    }

    /// Replace the public transport parameters
    pub fn with_transit(mut self, transit: TransitOptions) -> Self {
        self.transit = transit;
        self
    }

    /// Set the date of travel
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.transit.date = Some(date);
        self
    }

    /// Set the departure time
    pub fn with_time(mut self, time: NaiveTime) -> Self {
        self.transit.time = Some(time);
        self
    }

    /// Set the transit mode
    pub fn with_mode(mut self, mode: TransitMode) -> Self {
        self.transit.mode = Some(mode);
        self
    }

    /// Set the maximum walking distance
    pub fn with_max_walk_distance(mut self, metres: u32) -> Self {
        self.transit.max_walk_distance = Some(metres);
        self
    }

    /// Set the number of itineraries
    pub fn with_num_itineraries(mut self, count: u8) -> Self {
        self.transit.num_itineraries = Some(count);
        self
    }

    /// Checks the parameters without touching the network
    pub fn validate(&self) -> Result<(), AppError> {
        self.to_query().map(|_| ())
    }

    /// Query parameters, excluding the token
    pub fn to_query(&self) -> Result<QueryParams, AppError> {
        self.start.check_finite("start")?;
        self.end.check_finite("end")?;
        let mut query = vec![
            ("start", self.start.to_param()),
            ("end", self.end.to_param()),
            ("routeType", self.route_type.to_string()),
        ];

        if self.route_type.is_public_transport() {
            query.extend(self.transit.to_query()?);
        }
        Ok(query)
    }
}
