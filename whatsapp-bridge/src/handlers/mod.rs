//! Relay operations: inbound queueing, outbound polling, reply dispatch, admin registration.

mod admin;
mod dispatcher;
mod inbound;
mod poller;

pub use admin::{AdminRegistration, AdminSubmission, Registration, RegistrationError};
pub use dispatcher::{ChannelbackAck, ReplyDispatcher};
pub use inbound::InboundHandler;
pub use poller::{Author, AuthorField, OutboundPoller, ResourceRecord};
