/// Search, coordinate conversion and reverse geocoding interface
pub mod common;
/// Planning area interface
pub mod planning_area;
/// Population statistics interface
pub mod population;
/// Routing interface
pub mod routing;
/// Themes interface
pub mod theme;
