/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of the login request
#[derive(Debug, Clone, Serialize)]
pub struct TokenRequest<'a> {
    /// Account email
    pub email: &'a str,
    /// Account password
    pub password: &'a str,
}

/// Body returned by a successful login
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenResponse {
    /// Bearer token attached to every later request
    pub access_token: String,
    /// Expiry reported by the API, as sent
    #[serde(default)]
    pub expiry_timestamp: Option<Value>,
}

impl TokenResponse {
    /// Whether the response carries a usable token
    pub fn has_token(&self) -> bool {
        !self.access_token.trim().is_empty()
    }
}
