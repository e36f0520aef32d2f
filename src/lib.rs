/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! # OneMap Client
//!
//! An async client for the OneMap geospatial API (Singapore Land Authority).
//!
//! The client covers:
//! - Token-based authentication, performed lazily on first use and shared by
//!   every service attached to the same [`Client`](application::client::Client)
//! - Free-text search, coordinate conversion between WGS84, SVY21 and EPSG:3857
//! - Reverse geocoding from either lat/lng or projected X/Y coordinates
//! - Planning areas and population statistics
//! - Themes (points of interest such as kindergartens) within a bounding box
//! - Routing for walk, drive, cycle and public transport
//!
//! ## Example
//! ```ignore
//! use onemap_client::prelude::*;
//!
//! setup_logger();
//! let client = Client::new_lazy(Config::new())?;
//! let results = client.search(&SearchRequest::new("Raffles Place")).await?;
//! let areas = client.get_all_planning_areas(None, true).await?;
//! ```

/// Application layer: configuration, authentication, services and the client facade
pub mod application;
/// Library wide constants
pub mod constants;
/// Error types
pub mod error;
/// HTTP transport and request/response models
pub mod model;
/// Convenience re-exports
pub mod prelude;
/// Domain types used as typed parameters
pub mod presentation;
/// Logging and environment helpers
pub mod utils;

pub use application::config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
