/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
/// Login request and token response models
pub mod auth;
/// HTTP transport shared by every service
pub mod http;
/// Request models with local validation
pub mod requests;
/// Typed views over API responses
pub mod responses;
