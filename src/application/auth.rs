/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Authentication module for the OneMap API
//!
//! Credentials are exchanged for a bearer token once, lazily, on the first
//! request. The session is shared by every service built on the same client
//! and is never refreshed: a token that expires server-side surfaces as an
//! API error on the call that uses it.

use crate::application::config::Config;
use crate::constants::AUTH_ENDPOINT;
use crate::error::AppError;
use crate::model::auth::{TokenRequest, TokenResponse};
use crate::model::http::make_http_request;
use chrono::{DateTime, Utc};
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, error, info, warn};

/// Session information for authenticated requests
#[derive(Debug, Clone)]
pub struct Session {
    /// Bearer token returned by the login endpoint
    pub access_token: String,
    /// Expiry as reported by the API, kept for information only
    pub expiry_timestamp: Option<Value>,
    /// When the login happened
    pub authenticated_at: DateTime<Utc>,
}

impl Session {
    /// Value of the `Authorization` header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

impl From<TokenResponse> for Session {
    fn from(token: TokenResponse) -> Self {
        Self {
            access_token: token.access_token,
            expiry_timestamp: token.expiry_timestamp,
            authenticated_at: Utc::now(),
        }
    }
}

/// Authentication manager for the OneMap API
///
/// The unauthenticated to authenticated transition happens once and is never
/// undone. Concurrent callers queue on `login_lock`: they reuse the session
/// the first one stored, or get back the error of the attempt they waited on.
pub struct Auth {
    config: Arc<Config>,
    client: Client,
    session: Arc<RwLock<Option<Session>>>,
    attempts: AtomicU64,
    login_lock: Mutex<Option<AppError>>,
}

impl Auth {
    /// Creates a new Auth instance
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    /// * `client` - HTTP client used for the login request
    pub fn new(config: Arc<Config>, client: Client) -> Self {
        Self {
            config,
            client,
            session: Arc::new(RwLock::new(None)),
            attempts: AtomicU64::new(0),
            login_lock: Mutex::new(None),
        }
    }

    /// Gets the current session, if authenticated
    pub async fn current_session(&self) -> Option<Session> {
        self.session.read().await.clone()
    }

    /// Whether a token has been obtained
    pub async fn is_authenticated(&self) -> bool {
        self.session.read().await.is_some()
    }

    /// Current bearer token, if authenticated
    pub async fn token(&self) -> Option<String> {
        self.session
            .read()
            .await
            .as_ref()
            .map(|session| session.access_token.clone())
    }

    /// Returns the current session, logging in first if there is none
    ///
    /// A caller that queued behind a login which then failed receives that
    /// failure instead of sending another request. Callers arriving after
    /// the failure try again.
    ///
    /// # Returns
    /// * `Ok(Session)` - Existing or freshly obtained session
    /// * `Err(AppError)` - If credentials are missing or the login is rejected
    pub async fn ensure_authenticated(&self) -> Result<Session, AppError> {
        if let Some(session) = self.current_session().await {
            return Ok(session);
        }

        let seen = self.attempts.load(Ordering::Acquire);
        let mut last_failure = self.login_lock.lock().await;

        // Another task may have logged in while we waited
        if let Some(session) = self.current_session().await {
            return Ok(session);
        }

        if self.attempts.load(Ordering::Acquire) != seen {
            if let Some(failure) = last_failure.as_ref() {
                debug!("Reusing the outcome of the login attempt we waited on");
                return Err(failure.clone());
            }
        }

        warn!("Proceeding to authenticate");
        let outcome = self.login().await;
        *last_failure = outcome.as_ref().err().cloned();
        self.attempts.fetch_add(1, Ordering::Release);
        outcome
    }

    async fn login(&self) -> Result<Session, AppError> {
        let credentials = &self.config.credentials;
        if !credentials.is_complete() {
            error!("Please provide both email and password");
            return Err(AppError::MissingCredentials);
        }

        let url = format!("{}{}", self.config.rest_api.base_url, AUTH_ENDPOINT);
        debug!("Sending login request to: {}", url);

        let body = TokenRequest {
            email: &credentials.email,
            password: &credentials.password,
        };

        let response = make_http_request(
            &self.client,
            Method::POST,
            &url,
            vec![("Accept", "application/json")],
            &[],
            &Some(body),
        )
        .await?;

        let status = response.status();
        let text = response.text().await?;

        if status != StatusCode::OK {
            error!("Failed to authenticate, please check credentials ({})", status);
            return Err(AppError::Authentication { status, body: text });
        }

        let token = match serde_json::from_str::<TokenResponse>(&text) {
            Ok(token) if token.has_token() => token,
            _ => {
                error!("Failed to authenticate, no access token in response");
                return Err(AppError::Authentication { status, body: text });
            }
        };

        let session = Session::from(token);
        {
            let mut current = self.session.write().await;
            *current = Some(session.clone());
        }

        self.cache_token(&text).await;

        info!("Successful authentication");
        Ok(session)
    }

    /// Writes the raw login response to the configured cache file, if any
    async fn cache_token(&self, body: &str) {
        let Some(path) = self.config.token_cache_path.as_deref() else {
            return;
        };
        match tokio::fs::write(path, body).await {
            Ok(()) => debug!("Token cached to {}", path),
            Err(e) => warn!("Failed to write token cache {}: {}", path, e),
        }
    }
}
