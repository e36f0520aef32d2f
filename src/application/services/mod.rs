/// Search, coordinate conversion and reverse geocoding
pub mod common_service;
/// Planning areas
pub mod planning_area_service;
/// Population statistics
pub mod population_service;
/// Routing, including routes between postal codes
pub mod routing_service;
/// Themes
pub mod theme_service;

pub use crate::application::interfaces::common::*;
pub use crate::application::interfaces::planning_area::*;
pub use crate::application::interfaces::population::*;
pub use crate::application::interfaces::routing::*;
pub use crate::application::interfaces::theme::*;
pub use common_service::*;
pub use planning_area_service::*;
pub use population_service::*;
pub use routing_service::*;
pub use theme_service::*;
