//! # WhatsApp Messages API client
//!
//! Implements [`relay_core::MessageSender`] over the provider's Messages API: one JSON `POST` per
//! reply, authenticated with the account's bearer token.
//!
//! ## Example
//!
//! ```rust,no_run
//! use relay_core::{Credentials, MessageSender, OutboundMessage};
//! use whatsapp_client::{MessagesApiConfig, WhatsAppClient};
//!
//! async fn example() -> Result<(), whatsapp_client::ClientError> {
//!     let client = WhatsAppClient::new(MessagesApiConfig::default())?;
//!     let creds = Credentials::new("Acme", "your-jwt", "+1999");
//!     let outcome = client.send(&creds, &OutboundMessage::new("+1555", "Hi!")).await;
//!     println!("{}", outcome.kind());
//!     Ok(())
//! }
//! ```
//!
//! ## Delivery
//!
//! - Each attempt is bounded by [`MessagesApiConfig::timeout`].
//! - Network failures and `5xx` answers are retried up to [`MessagesApiConfig::max_retries`]
//!   times with linear backoff; other rejections, `429` included, are final.
//! - The result is always a [`relay_core::DeliveryOutcome`]; nothing is queued for later.

mod client;
mod types;

pub use client::{ClientError, MessagesApiConfig, SendError, WhatsAppClient, DEFAULT_MESSAGES_API_URL};
