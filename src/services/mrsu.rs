use std::time::Duration;

use reqwest::{Client, ClientBuilder, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::error;

use crate::config::MrsuConfig;
use crate::types::error::AppError;

#[derive(Debug, Error)]
pub enum MrsuError {
    /// The portal refused the credentials or the token.
    #[error("MRSU rejected the request: {0}")]
    Rejected(String),
    /// The portal API no longer looks like we expect (moved endpoint, new shape).
    #[error("MRSU API changed: {0}")]
    ApiChanged(String),
    #[error("MRSU unreachable: {0}")]
    Unreachable(String),
}

impl From<MrsuError> for AppError {
    fn from(e: MrsuError) -> Self {
        match e {
            MrsuError::Rejected(_) => AppError::Unauthorized,
            MrsuError::ApiChanged(msg) => AppError::Upstream(msg),
            MrsuError::Unreachable(msg) => AppError::UpstreamUnavailable(msg),
        }
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Deserialize)]
struct TokenErrorBody {
    error: Option<String>,
}

/// Profile payload from the portal. Field names on papi drift between
/// releases, so everything is optional and aliased.
#[derive(Debug, Deserialize)]
pub struct MrsuProfile {
    #[serde(alias = "Id", alias = "id")]
    pub id: Option<serde_json::Value>,
    #[serde(alias = "FullName", alias = "Fio", alias = "FIO")]
    pub full_name: Option<String>,
    #[serde(alias = "Group", alias = "group")]
    pub group: Option<String>,
}

impl MrsuProfile {
    /// Student id normalized to text; papi has returned both numbers and
    /// strings here.
    pub fn student_id(&self) -> Option<String> {
        match &self.id {
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(serde_json::Value::Number(n)) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// Client for the university portal: password-grant token exchange on the
/// OAuth host, profile reads on the API host.
#[derive(Clone)]
pub struct MrsuClient {
    http: Client,
    token_url: String,
    api_base_url: String,
    client_id: String,
    client_secret: String,
}

impl MrsuClient {
    pub fn from_config(cfg: &MrsuConfig) -> Result<Self, reqwest::Error> {
        let http = ClientBuilder::new()
            .user_agent("chronella/0.1 (+reqwest)")
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(MrsuClient {
            http,
            token_url: cfg.token_url.clone(),
            api_base_url: cfg.api_base_url.clone(),
            client_id: cfg.client_id.clone(),
            client_secret: cfg.client_secret.clone(),
        })
    }

    /// Password grant against the portal. A success proves the credentials are
    /// live right now.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<String, MrsuError> {
        let params = [
            ("grant_type", "password"),
            ("username", username),
            ("password", password),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
        ];

        let response = self
            .http
            .post(&self.token_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| MrsuError::Unreachable(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| MrsuError::Unreachable(e.to_string()))?;

        if status != StatusCode::OK {
            let reason = serde_json::from_str::<TokenErrorBody>(&body)
                .ok()
                .and_then(|b| b.error)
                .unwrap_or_else(|| format!("HTTP {}", status));
            return Err(MrsuError::Rejected(reason));
        }

        let token: TokenResponse = serde_json::from_str(&body)
            .map_err(|_| MrsuError::ApiChanged("token response without access_token".into()))?;
        Ok(token.access_token)
    }

    pub async fn fetch_profile(&self, access_token: &str) -> Result<MrsuProfile, MrsuError> {
        let url = format!("{}/User", self.api_base_url);
        let response = self
            .http
            .get(&url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| MrsuError::Unreachable(e.to_string()))?;

        match response.status() {
            StatusCode::OK => response
                .json::<MrsuProfile>()
                .await
                .map_err(|_| MrsuError::ApiChanged("unparseable /User payload".into())),
            StatusCode::NOT_FOUND => {
                // 404 here means the API moved, not that the student is unknown
                error!("MRSU /User endpoint not found at {}", url);
                Err(MrsuError::ApiChanged("404 on /User".into()))
            }
            status => Err(MrsuError::Rejected(format!(
                "portal token not accepted: HTTP {}",
                status
            ))),
        }
    }

    /// Full link check: exchange credentials for a token, then read the
    /// profile with it. Nothing is persisted unless both steps pass.
    pub async fn login(&self, username: &str, password: &str) -> Result<MrsuProfile, MrsuError> {
        let token = self.authenticate(username, password).await?;
        self.fetch_profile(&token).await
    }
}
