//! Outbound transport abstraction.
//!
//! [`MessageSender`] is provider-agnostic; whatsapp-client implements it over the Messages API.

use async_trait::async_trait;

use crate::types::{Credentials, DeliveryOutcome};

/// A reply leaving the bridge towards a WhatsApp user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    /// Destination WhatsApp number (the platform's thread id).
    pub to: String,
    pub text: String,
}

impl OutboundMessage {
    pub fn new(to: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            text: text.into(),
        }
    }
}

/// Sends one text message on behalf of the account described by `credentials`.
///
/// Failures are not errors at this seam: every call resolves to a [`DeliveryOutcome`].
#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send(&self, credentials: &Credentials, message: &OutboundMessage) -> DeliveryOutcome;
}

/// Masks a bearer token for safe logging: first 7 chars + "***" + last 4 chars.
/// If length <= 11, returns "***" to avoid leaking any part of the token.
pub fn mask_token(token: &str) -> String {
    let len = token.len();
    if len <= 11 {
        return "***".to_string();
    }
    match (token.get(..7), token.get(len - 4..)) {
        (Some(head), Some(tail)) => format!("{}***{}", head, tail),
        _ => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_token_short() {
        assert_eq!(mask_token(""), "***");
        assert_eq!(mask_token("abcdefghijk"), "***");
    }

    #[test]
    fn test_mask_token_long() {
        assert_eq!(mask_token("eyJhbGciOiJSUzI1NiJ9.payload.sig"), "eyJhbGc***.sig");
    }

    #[test]
    fn test_mask_token_non_char_boundary_falls_back() {
        // 'é' is two bytes; byte 7 lands inside it.
        assert_eq!(mask_token("abcdeféghijklmn"), "***");
    }

    #[test]
    fn test_outbound_message_new() {
        let msg = OutboundMessage::new("+1555", "hi");
        assert_eq!(msg.to, "+1555");
        assert_eq!(msg.text, "hi");
    }
}
