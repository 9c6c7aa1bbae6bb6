use std::time::Duration;

use reqwest::{Client, ClientBuilder};
use serde::Deserialize;
use thiserror::Error;

use crate::config::GoogleConfig;
use crate::types::error::AppError;

/// Calendar access is the point of the integration; the userinfo scopes are
/// for greeting the student by name.
const SCOPES: &[&str] = &[
    "openid",
    "https://www.googleapis.com/auth/userinfo.email",
    "https://www.googleapis.com/auth/userinfo.profile",
    "https://www.googleapis.com/auth/calendar",
];

#[derive(Debug, Error)]
pub enum GoogleAuthError {
    #[error("failed to fetch token: {0}")]
    ExchangeFailed(String),
    #[error("Google unreachable: {0}")]
    Unreachable(String),
}

impl From<GoogleAuthError> for AppError {
    fn from(e: GoogleAuthError) -> Self {
        match e {
            GoogleAuthError::ExchangeFailed(msg) => {
                AppError::BadRequest(format!("failed to fetch token: {}", msg))
            }
            GoogleAuthError::Unreachable(msg) => AppError::UpstreamUnavailable(msg),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GoogleTokens {
    pub access_token: String,
    /// Only present with access_type=offline and a consenting prompt.
    pub refresh_token: Option<String>,
    pub expires_in: Option<i64>,
    pub scope: Option<String>,
}

#[derive(Clone)]
pub struct GoogleOAuthClient {
    http: Client,
    client_id: String,
    client_secret: String,
    auth_uri: String,
    token_uri: String,
    redirect_uri: String,
}

impl GoogleOAuthClient {
    pub fn from_config(cfg: &GoogleConfig) -> Result<Self, reqwest::Error> {
        let http = ClientBuilder::new()
            .user_agent("chronella/0.1 (+reqwest)")
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(GoogleOAuthClient {
            http,
            client_id: cfg.client_id.clone(),
            client_secret: cfg.client_secret.clone(),
            auth_uri: cfg.auth_uri.clone(),
            token_uri: cfg.token_uri.clone(),
            redirect_uri: cfg.redirect_uri.clone(),
        })
    }

    /// Consent URL the frontend redirects to. offline + consent together make
    /// Google hand back a refresh token on the exchange.
    pub fn authorization_url(&self) -> String {
        format!(
            "{}?client_id={}&redirect_uri={}&response_type=code&scope={}&access_type=offline&prompt=consent&include_granted_scopes=true",
            self.auth_uri,
            urlencoding::encode(&self.client_id),
            urlencoding::encode(&self.redirect_uri),
            urlencoding::encode(&SCOPES.join(" ")),
        )
    }

    pub async fn exchange_code(&self, code: &str) -> Result<GoogleTokens, GoogleAuthError> {
        let params = [
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("code", code),
            ("grant_type", "authorization_code"),
            ("redirect_uri", self.redirect_uri.as_str()),
        ];

        let response = self
            .http
            .post(&self.token_uri)
            .form(&params)
            .send()
            .await
            .map_err(|e| GoogleAuthError::Unreachable(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GoogleAuthError::Unreachable(e.to_string()))?;

        if !status.is_success() {
            return Err(GoogleAuthError::ExchangeFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        serde_json::from_str(&body)
            .map_err(|e| GoogleAuthError::ExchangeFailed(format!("parse error: {}", e)))
    }
}
