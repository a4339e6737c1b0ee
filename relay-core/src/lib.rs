//! # relay-core
//!
//! Core types and traits for the WhatsApp bridge: [`MessageRecord`], [`Credentials`],
//! [`DeliveryOutcome`], the [`MessageSender`] trait, error types, and tracing initialization.
//! Transport-agnostic; used by message-queue, whatsapp-client and whatsapp-bridge.

pub mod error;
pub mod logger;
pub mod sender;
pub mod types;

pub use error::{RelayError, Result};
pub use logger::init_tracing;
pub use sender::{mask_token, MessageSender, OutboundMessage};
pub use types::{Credentials, DeliveryOutcome, MessageRecord};
