//! # WhatsApp bridge application
//!
//! Relays WhatsApp messages from the Messages API into a ticketing platform's channel framework
//! and ticket replies back out as WhatsApp messages.
//!
//! Wires relay-core, message-queue and whatsapp-client behind an axum router:
//! provider → `/inbound` → [`InboundHandler`] → queue → `/pull` → [`OutboundPoller`] → platform;
//! platform → `/channelback` → [`ReplyDispatcher`] → provider.

pub mod cli;
pub mod components;
pub mod config;
pub mod handlers;
pub mod runner;
pub mod web;

pub use cli::{load_config, Cli, Commands};
pub use components::{build_components, BridgeComponents};
pub use config::BridgeConfig;
pub use handlers::{
    AdminRegistration, AdminSubmission, Author, AuthorField, ChannelbackAck, InboundHandler,
    OutboundPoller, Registration, RegistrationError, ReplyDispatcher, ResourceRecord,
};
pub use runner::{run_bridge, serve};
pub use web::{build_router, AppState, Manifest};

pub use relay_core::{Credentials, DeliveryOutcome, MessageRecord, MessageSender, OutboundMessage};
