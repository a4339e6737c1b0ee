use std::time::Duration;

use async_trait::async_trait;
use relay_core::{mask_token, Credentials, DeliveryOutcome, MessageSender, OutboundMessage};
use reqwest::{header, Client, StatusCode};
use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::types::{SendRequest, SendResponse};

pub const DEFAULT_MESSAGES_API_URL: &str = "https://sandbox.nexmodemo.com/v0.1/messages/";

/// Connection settings for the Messages API.
#[derive(Debug, Clone)]
pub struct MessagesApiConfig {
    /// Full URL of the send endpoint.
    pub api_url: String,
    /// Per-attempt timeout.
    pub timeout: Duration,
    /// Retries after the first attempt.
    pub max_retries: u32,
    /// Sleep before retry `n` is `retry_backoff * n`.
    pub retry_backoff: Duration,
    pub locale: String,
}

impl Default for MessagesApiConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_MESSAGES_API_URL.to_string(),
            timeout: Duration::from_secs(10),
            max_retries: 2,
            retry_backoff: Duration::from_millis(500),
            locale: "en".to_string(),
        }
    }
}

/// Client construction failure.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// Failure of a single send attempt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SendError {
    #[error("Provider rejected message with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("Network failure: {0}")]
    Network(String),
}

impl SendError {
    /// Only network failures and server errors get another attempt; any 4xx is final.
    pub fn is_retryable(&self) -> bool {
        match self {
            SendError::Network(_) => true,
            SendError::Rejected { status, .. } => {
                StatusCode::from_u16(*status).is_ok_and(|s| s.is_server_error())
            }
        }
    }
}

impl From<SendError> for DeliveryOutcome {
    fn from(err: SendError) -> Self {
        match err {
            SendError::Rejected { status, body } => {
                DeliveryOutcome::ProviderRejected { status, body }
            }
            SendError::Network(reason) => DeliveryOutcome::NetworkFailure { reason },
        }
    }
}

/// Messages API client. Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct WhatsAppClient {
    client: Client,
    config: MessagesApiConfig,
}

impl WhatsAppClient {
    pub fn new(config: MessagesApiConfig) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &MessagesApiConfig {
        &self.config
    }

    /// One POST to the send endpoint. Returns the provider's message uuid on success.
    async fn send_once(
        &self,
        credentials: &Credentials,
        message: &OutboundMessage,
    ) -> Result<Option<String>, SendError> {
        let body = SendRequest::text(
            &credentials.whatsapp_number,
            &message.to,
            &message.text,
            &self.config.locale,
        );

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&credentials.jwt)
            .header(header::ACCEPT, "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| SendError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| SendError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(SendError::Rejected {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: SendResponse = serde_json::from_str(&text).unwrap_or_default();
        Ok(parsed.message_uuid)
    }
}

#[async_trait]
impl MessageSender for WhatsAppClient {
    #[instrument(skip_all, fields(to = %message.to, from = %credentials.whatsapp_number))]
    async fn send(&self, credentials: &Credentials, message: &OutboundMessage) -> DeliveryOutcome {
        info!(
            api_url = %self.config.api_url,
            token = %mask_token(&credentials.jwt),
            text_len = message.text.len(),
            "Messages API send request"
        );

        let mut attempt: u32 = 0;
        loop {
            match self.send_once(credentials, message).await {
                Ok(message_uuid) => {
                    info!(attempt, message_uuid = ?message_uuid, "Messages API accepted message");
                    return DeliveryOutcome::Delivered { message_uuid };
                }
                Err(err) if err.is_retryable() && attempt < self.config.max_retries => {
                    attempt += 1;
                    warn!(error = %err, attempt, max_retries = self.config.max_retries, "Messages API send failed, retrying");
                    tokio::time::sleep(self.config.retry_backoff * attempt).await;
                }
                Err(err) => {
                    warn!(error = %err, attempt, "Messages API send failed");
                    return err.into();
                }
            }
        }
    }
}
