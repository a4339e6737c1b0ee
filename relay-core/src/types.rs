//! Core types: inbound message record, credential bundle, delivery outcome.

use serde::{Deserialize, Serialize};

use crate::error::{RelayError, Result};

/// One inbound WhatsApp message waiting to be pulled into the ticketing platform.
///
/// Carries no id and no timestamp; both are synthesized when the record is drained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    from: String,
    content: String,
}

impl MessageRecord {
    pub fn new(from: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            content: content.into(),
        }
    }

    /// Sender's WhatsApp number.
    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Per-account credential bundle. The platform stores it and sends it back on every
/// pull / channelback call; this service never persists it.
///
/// Wire form is the JSON object `{ "name", "jwt", "whatsappNumber" }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub jwt: String,
    #[serde(rename = "whatsappNumber", default)]
    pub whatsapp_number: String,
}

impl Credentials {
    pub fn new(
        name: impl Into<String>,
        jwt: impl Into<String>,
        whatsapp_number: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            jwt: jwt.into(),
            whatsapp_number: whatsapp_number.into(),
        }
    }

    /// Parses the serialized bundle the platform round-trips in its `metadata` field.
    pub fn from_metadata(metadata: &str) -> Result<Self> {
        serde_json::from_str(metadata)
            .map_err(|e| RelayError::InvalidCredentials(e.to_string()))
    }

    /// Serializes the bundle for the platform's `metadata` field.
    pub fn to_metadata(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Result of one outbound provider call. The platform never sees it; it is logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// Provider accepted the message. `message_uuid` is the provider-assigned id when returned.
    Delivered { message_uuid: Option<String> },
    /// Provider answered with a non-success status.
    ProviderRejected { status: u16, body: String },
    /// Request never got a response (connect error, timeout, ...).
    NetworkFailure { reason: String },
}

impl DeliveryOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, DeliveryOutcome::Delivered { .. })
    }

    /// Short label for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            DeliveryOutcome::Delivered { .. } => "delivered",
            DeliveryOutcome::ProviderRejected { .. } => "provider_rejected",
            DeliveryOutcome::NetworkFailure { .. } => "network_failure",
        }
    }
}
