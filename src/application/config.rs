use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::debug;
use tracing::error;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// Authentication credentials for the OneMap API
pub struct Credentials {
    /// Email of the registered OneMap account
    pub email: String,
    /// Password of the registered OneMap account
    #[serde(skip_serializing, default)]
    pub password: String,
}

impl Credentials {
    /// Whether both email and password are present
    pub fn is_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.is_empty()
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the OneMap API, without trailing slash
    pub base_url: String,
    /// Timeout in seconds for every request
    pub timeout: u64,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the OneMap API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Optional file the raw login response is written to after authenticating
    pub token_cache_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration from the environment
    ///
    /// A `.env` file is loaded first if present. Recognised variables:
    /// `ONEMAP_EMAIL`, `ONEMAP_PASSWORD`, `ONEMAP_BASE_URL` (default
    /// `https://developers.onemap.sg`), `ONEMAP_TIMEOUT` (seconds, default 10)
    /// and `ONEMAP_TOKEN_CACHE`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let email = get_env_or_default("ONEMAP_EMAIL", String::new());
        let password = get_env_or_default("ONEMAP_PASSWORD", String::new());

        if email.is_empty() {
            error!("ONEMAP_EMAIL not found in environment variables or .env file");
        }
        if password.is_empty() {
            error!("ONEMAP_PASSWORD not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials { email, password },
            rest_api: RestApiConfig {
                base_url: normalize_base_url(&get_env_or_default(
                    "ONEMAP_BASE_URL",
                    String::from(DEFAULT_BASE_URL),
                )),
                timeout: get_env_or_default("ONEMAP_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            token_cache_path: get_env_or_none("ONEMAP_TOKEN_CACHE"),
        }
    }

    /// Creates a configuration with explicit credentials and default API settings,
    /// without reading the environment
    pub fn with_credentials(email: impl Into<String>, password: impl Into<String>) -> Self {
        Config {
            credentials: Credentials {
                email: email.into(),
                password: password.into(),
            },
            rest_api: RestApiConfig::default(),
            token_cache_path: None,
        }
    }

    /// Overrides the base URL
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.rest_api.base_url = normalize_base_url(base_url);
        self
    }

    /// Overrides the request timeout
    pub fn timeout(mut self, timeout_secs: u64) -> Self {
        self.rest_api.timeout = timeout_secs;
        self
    }

    /// Sets the file the login response is cached to
    pub fn token_cache_path(mut self, path: impl Into<String>) -> Self {
        self.token_cache_path = Some(path.into());
        self
    }
}

fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}
