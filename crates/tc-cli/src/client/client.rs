use crate::{CardRequest, CliClientResult, ClientError};

use std::time::Duration;

use log::debug;
use reqwest::{Client as ReqwestClient, RequestBuilder, Url};
use serde_json::Value;
use tc_config::Credentials;

/// HTTP client for the Trello REST API
pub struct Client {
    pub base_url: String,
    credentials: Credentials,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - API root (e.g., "https://api.trello.com/1")
    /// * `credentials` - API key and token sent with every call
    /// * `timeout` - Upper bound for each request, connect through body
    pub fn new(
        base_url: &str,
        credentials: Credentials,
        timeout: Duration,
    ) -> CliClientResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(ClientError::build)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
            client,
        })
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Full URL for the path `segments` with the auth pair followed by
    /// `params` as the query. Each segment is percent-encoded on its own.
    pub(crate) fn url(&self, segments: &[&str], params: &[(&str, String)]) -> CliClientResult<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ClientError::invalid_url(self.base_url.clone(), e.to_string()))?;

        url.path_segments_mut()
            .map_err(|_| {
                ClientError::invalid_url(self.base_url.clone(), "cannot be a base URL".to_string())
            })?
            .pop_if_empty()
            .extend(segments);

        url.query_pairs_mut()
            .append_pair("key", &self.credentials.api_key)
            .append_pair("token", &self.credentials.token)
            .extend_pairs(params.iter().map(|(name, value)| (*name, value.as_str())));

        Ok(url)
    }

    async fn post(&self, segments: &[&str], params: &[(&str, String)]) -> CliClientResult<Value> {
        let url = self.url(segments, params)?;
        debug!("POST {} ({} params)", url.path(), params.len());
        self.execute(self.client.post(url)).await
    }

    /// Send the request and turn any refusal into `ClientError::Api`.
    ///
    /// Trello reports most failures as a non-2xx status with a plain-text
    /// body, so the body is read as text before any JSON parsing.
    async fn execute(&self, req: RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<Value>(&text)
                .ok()
                .and_then(|body| error_message(&body))
                .unwrap_or_else(|| text.trim().to_string());
            let message = if message.is_empty() {
                status.canonical_reason().unwrap_or("Unknown error").to_string()
            } else {
                message
            };
            return Err(ClientError::api_error(status.as_u16(), message));
        }

        let body: Value = serde_json::from_str(&text)?;

        // Error-shaped body behind a success status
        if let Some(message) = error_message(&body) {
            return Err(ClientError::api_error(status.as_u16(), message));
        }

        Ok(body)
    }

    // =========================================================================
    // Card Operations
    // =========================================================================

    /// Create a card on `request.id_list`
    pub async fn create_card(&self, request: &CardRequest) -> CliClientResult<Value> {
        self.post(&["cards"], &request.query_params()).await
    }

    /// Create a new label directly on a card
    pub async fn add_label(&self, card_id: &str, name: &str, color: &str) -> CliClientResult<Value> {
        let params = [("name", name.to_string()), ("color", color.to_string())];
        self.post(&["cards", card_id, "labels"], &params).await
    }

    /// Add a comment action to a card
    pub async fn add_comment(&self, card_id: &str, text: &str) -> CliClientResult<Value> {
        let params = [("text", text.to_string())];
        self.post(&["cards", card_id, "actions", "comments"], &params)
            .await
    }
}

/// Message from a `{"error": ...}` body, if the body has that shape
fn error_message(body: &Value) -> Option<String> {
    let error = body.as_object()?.get("error")?;

    let message = body
        .get("message")
        .and_then(Value::as_str)
        .or_else(|| error.as_str())
        .map(String::from)
        .unwrap_or_else(|| error.to_string());

    Some(message)
}
