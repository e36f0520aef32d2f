/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

use crate::application::auth::{Auth, Session};
use crate::application::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::requests::QueryParams;
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// HTTP client shared by every OneMap service
///
/// Owns the authentication state, so every service built on the same
/// `HttpClient` sees the same token:
/// - Lazy login before the first request
/// - Bearer token attached to every request
/// - `token` query parameter for the private endpoints
pub struct HttpClient {
    auth: Arc<Auth>,
    http_client: Client,
    config: Arc<Config>,
}

impl HttpClient {
    /// Creates a new client without performing authentication
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    pub fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let http_client = build_http_client(&config)?;
        let auth = Arc::new(Auth::new(config.clone(), http_client.clone()));

        Ok(Self {
            auth,
            http_client,
            config,
        })
    }

    /// Makes an authenticated GET request to a public endpoint
    ///
    /// # Arguments
    /// * `path` - API endpoint path (e.g., "/commonapi/search")
    /// * `query` - Query parameters
    pub async fn get(&self, path: &str, query: QueryParams) -> Result<Value, AppError> {
        let session = self.auth.ensure_authenticated().await?;
        self.send(path, &session, &query).await
    }

    /// Makes an authenticated GET request to a private endpoint
    ///
    /// The token is sent first in the query string, followed by `query`.
    pub async fn get_with_token(&self, path: &str, query: QueryParams) -> Result<Value, AppError> {
        let session = self.auth.ensure_authenticated().await?;
        let mut params: QueryParams = Vec::with_capacity(query.len() + 1);
        params.push(("token", session.access_token.clone()));
        params.extend(query);
        self.send(path, &session, &params).await
    }

    async fn send(
        &self,
        path: &str,
        session: &Session,
        query: &[(&'static str, String)],
    ) -> Result<Value, AppError> {
        let url = self.url(path);
        let authorization = session.bearer();
        let headers = vec![
            ("Accept", "application/json"),
            ("Authorization", authorization.as_str()),
        ];

        let response = make_http_request(
            &self.http_client,
            Method::GET,
            &url,
            headers,
            query,
            &None::<()>,
        )
        .await?;

        parse_response(response).await
    }

    /// Full URL of an endpoint path
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http") {
            path.to_string()
        } else {
            let path = path.trim_start_matches('/');
            format!("{}/{}", self.config.rest_api.base_url, path)
        }
    }

    /// Gets Auth reference
    pub fn auth(&self) -> &Arc<Auth> {
        &self.auth
    }

    /// Gets the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Builds the underlying reqwest client with the configured timeout
pub fn build_http_client(config: &Config) -> Result<Client, AppError> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(config.rest_api.timeout))
        .build()?;
    Ok(client)
}

/// Makes a single HTTP request
///
/// No retry is attempted: every response, whatever its status, is handed back
/// to the caller. Only connection-level failures become an error here.
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `headers` - Vector of (header_name, header_value) tuples
/// * `query` - Query parameters, sent in order
/// * `body` - Optional request body (will be serialized to JSON)
pub async fn make_http_request<B: Serialize>(
    client: &Client,
    method: Method,
    url: &str,
    headers: Vec<(&str, &str)>,
    query: &[(&str, String)],
    body: &Option<B>,
) -> Result<Response, AppError> {
    debug!("{} {}", method, url);

    let mut request = client.request(method, url);

    for (name, value) in &headers {
        request = request.header(*name, *value);
    }

    if !query.is_empty() {
        request = request.query(query);
    }

    if let Some(b) = body {
        request = request.json(b);
    }

    let response = request.send().await?;
    debug!("Response status: {}", response.status());
    Ok(response)
}

/// Decodes a response body as JSON when the status is 200
///
/// Any other status becomes [`AppError::Api`] carrying the status and raw body.
pub async fn parse_response(response: Response) -> Result<Value, AppError> {
    let status = response.status();
    let body = response.text().await?;

    if status != StatusCode::OK {
        error!("Request failed with status {}: {}", status, body);
        return Err(AppError::Api { status, body });
    }

    Ok(serde_json::from_str(&body)?)
}
