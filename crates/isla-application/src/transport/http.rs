use super::ChatTransport;
use async_trait::async_trait;
use isla_core::chat::{ChatErrorBody, ChatRequest, ChatResponse};
use isla_core::error::{IslaError, Result};
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Posts chat requests as JSON to a remote handler.
#[derive(Clone)]
pub struct HttpChatTransport {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl HttpChatTransport {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            api_key: None,
            timeout,
        }
    }

    /// Sends the key as a bearer token on every request.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

#[async_trait]
impl ChatTransport for HttpChatTransport {
    async fn send(&self, request: ChatRequest) -> Result<ChatResponse> {
        let mut builder = self
            .client
            .post(&self.endpoint)
            .header("content-type", "application/json")
            .timeout(self.timeout)
            .json(&request);
        if let Some(api_key) = &self.api_key {
            builder = builder.header("Authorization", format!("Bearer {api_key}"));
        }

        let response = builder.send().await.map_err(|err| {
            IslaError::transport(None, format!("Chat request failed: {err}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read chat error body".to_string());
            return Err(map_http_error(status, &body_text));
        }

        response.json::<ChatResponse>().await.map_err(|err| {
            IslaError::transport(
                Some(status.as_u16()),
                format!("Failed to parse chat response: {err}"),
            )
        })
    }
}

fn map_http_error(status: StatusCode, body: &str) -> IslaError {
    let message = serde_json::from_str::<ChatErrorBody>(body)
        .map(|parsed| parsed.error)
        .unwrap_or_else(|_| body.trim().to_string());
    tracing::debug!(target: "chat", status = status.as_u16(), "Chat endpoint returned an error");
    IslaError::transport(Some(status.as_u16()), message)
}
