/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/

//! # OneMap Client Prelude
//!
//! Imports the client, the service traits that give it its methods, and the
//! request and parameter types most calls need.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use onemap_client::prelude::*;
//!
//! let client = Client::new(Config::new()).await?;
//! let matches = client.search(&SearchRequest::new("238880")).await?;
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the OneMap client
pub use crate::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, OneMapResult};

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

/// Authentication state and session
pub use crate::application::auth::{Auth, Session};

/// Client facade
pub use crate::application::client::Client;

/// Service interfaces
pub use crate::application::interfaces::common::CommonService;
pub use crate::application::interfaces::planning_area::PlanningAreaService;
pub use crate::application::interfaces::population::PopulationService;
pub use crate::application::interfaces::routing::RoutingService;
pub use crate::application::interfaces::theme::ThemeService;

/// Service implementations
pub use crate::application::services::{
    CommonServiceImpl, PlanningAreaServiceImpl, PopulationServiceImpl, RoutingServiceImpl,
    ThemeServiceImpl,
};

// ============================================================================
// REQUESTS AND RESPONSES
// ============================================================================

pub use crate::model::http::HttpClient;
pub use crate::model::requests::{
    ConvertRequest, ReverseGeocodeRequest, RouteRequest, SearchRequest, TransitOptions,
};
pub use crate::model::responses::{SearchResponse, SearchResult, ThemeInfo, ThemesInfoResponse};

// ============================================================================
// DOMAIN TYPES
// ============================================================================

pub use crate::presentation::{
    AddressType, BoundingBox, Crs, Gender, LatLng, PopulationDataType, RouteType, ThemeResults,
    TransitMode, Xy,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logger setup
pub use crate::utils::logger::setup_logger;
