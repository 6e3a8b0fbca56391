//! reqwest implementation of the backoffice client.
//!
//! One `reqwest::Client` is built at startup and shared, so connections are
//! pooled across requests. Every call carries the configured timeout; no
//! call is retried.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

use mc_core::domain::value_objects::{AccountSearch, MembershipAccount};
use mc_core::errors::{UpstreamError, UpstreamStep};
use mc_core::services::lookup::BackofficeClient;
use mc_shared::BackofficeConfig;

use super::wire::{ClientDetails, ClientsPage, Envelope, GetClientsRequest};
use crate::InfrastructureError;

/// Longest slice of an error body kept in an `UpstreamError::Status`
pub const MAX_ERROR_BODY_CHARS: usize = 300;

const AUTH_HEADER: &str = "Authentication";

/// HTTP client for the backoffice API
#[derive(Clone)]
pub struct HttpBackofficeClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
    max_rows: u32,
}

impl HttpBackofficeClient {
    pub fn new(config: &BackofficeConfig) -> Result<Self, InfrastructureError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("membership-check/", env!("CARGO_PKG_VERSION")))
            .build()?;

        tracing::info!(
            configured = config.has_api_key(),
            timeout_secs = config.timeout_secs,
            "Backoffice client initialized"
        );

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            max_rows: config.max_rows,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/Client/{}", self.base_url, path)
    }

    fn authenticated(
        &self,
        step: UpstreamStep,
        request: RequestBuilder,
    ) -> Result<RequestBuilder, UpstreamError> {
        match &self.api_key {
            Some(key) => Ok(request.header(AUTH_HEADER, key)),
            None => Err(UpstreamError::Transport {
                step,
                message: "API key not configured".to_string(),
            }),
        }
    }

    /// Send and return the raw body of a successful response
    async fn execute(
        &self,
        step: UpstreamStep,
        request: RequestBuilder,
    ) -> Result<String, UpstreamError> {
        let request = self.authenticated(step, request)?;

        let response = request.send().await.map_err(|e| transport(step, e))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| transport(step, e))?;

        if !status.is_success() {
            tracing::warn!(
                step = %step,
                status = status.as_u16(),
                "Backoffice returned non-success status"
            );
            return Err(UpstreamError::Status {
                step,
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        Ok(body)
    }
}

#[async_trait]
impl BackofficeClient for HttpBackofficeClient {
    async fn search_by_login(&self, login: &str) -> Result<AccountSearch, UpstreamError> {
        let step = UpstreamStep::GetClients;
        let request = self
            .http
            .post(self.endpoint("GetClients"))
            .json(&GetClientsRequest::exact_login(login, self.max_rows));

        let body = self.execute(step, request).await?;
        let page: Option<ClientsPage> = decode(step, &body)?;

        Ok(page.map(AccountSearch::from).unwrap_or_default())
    }

    async fn fetch_account(&self, id: i64) -> Result<MembershipAccount, UpstreamError> {
        let step = UpstreamStep::GetClientById;
        let request = self
            .http
            .get(self.endpoint("GetClientById"))
            .query(&[("id", id)]);

        let body = self.execute(step, request).await?;
        let details: Option<ClientDetails> = decode(step, &body)?;

        Ok(details
            .map(MembershipAccount::from)
            .unwrap_or_else(|| MembershipAccount::new(id)))
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Parse the envelope and surface its error flag
fn decode<T: DeserializeOwned>(
    step: UpstreamStep,
    body: &str,
) -> Result<Option<T>, UpstreamError> {
    let envelope: Envelope<T> = serde_json::from_str(body).map_err(|e| UpstreamError::Parse {
        step,
        message: e.to_string(),
    })?;

    if envelope.has_error {
        let message = envelope
            .alert_message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("{} returned HasError", step));
        return Err(UpstreamError::Flagged { step, message });
    }

    Ok(envelope.data)
}

fn transport(step: UpstreamStep, error: reqwest::Error) -> UpstreamError {
    let message = if error.is_timeout() {
        "request timed out".to_string()
    } else {
        // The URL is server configuration and stays out of messages
        error.without_url().to_string()
    };
    UpstreamError::Transport { step, message }
}

fn truncate_body(body: &str) -> String {
    body.chars().take(MAX_ERROR_BODY_CHARS).collect()
}
