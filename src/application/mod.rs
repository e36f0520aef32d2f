/// Token login and the session shared by every service
pub mod auth;
/// Client facade over every service
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces
pub mod interfaces;
/// Service implementations
pub mod services;
