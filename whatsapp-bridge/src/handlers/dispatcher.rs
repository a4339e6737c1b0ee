//! Forwards platform replies to the provider without waiting for the result.

use std::sync::Arc;

use relay_core::{Credentials, DeliveryOutcome, MessageSender, OutboundMessage};
use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::{error, info, Instrument};
use uuid::Uuid;

/// Acknowledgment returned to the platform for every channelback.
///
/// `external_id` is generated here and has no relation to the provider's own message id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelbackAck {
    pub external_id: Uuid,
    pub allow_channelback: bool,
}

impl ChannelbackAck {
    fn accepted() -> Self {
        Self {
            external_id: Uuid::new_v4(),
            allow_channelback: true,
        }
    }
}

#[derive(Clone)]
pub struct ReplyDispatcher {
    sender: Arc<dyn MessageSender>,
}

impl ReplyDispatcher {
    pub fn new(sender: Arc<dyn MessageSender>) -> Self {
        Self { sender }
    }

    /// Spawns the provider call and returns the acknowledgment immediately.
    ///
    /// The acknowledgment does not depend on the outcome. The outcome is logged by the spawned
    /// task and also returned through the handle, which callers may drop.
    pub fn dispatch(
        &self,
        credentials: Credentials,
        message: OutboundMessage,
    ) -> (ChannelbackAck, JoinHandle<DeliveryOutcome>) {
        let ack = ChannelbackAck::accepted();
        let sender = self.sender.clone();
        let span = tracing::info_span!(
            "channelback",
            external_id = %ack.external_id,
            to = %message.to,
            from = %credentials.whatsapp_number
        );

        let handle = tokio::spawn(
            async move {
                let outcome = sender.send(&credentials, &message).await;
                log_outcome(&outcome);
                outcome
            }
            .instrument(span),
        );

        (ack, handle)
    }
}

fn log_outcome(outcome: &DeliveryOutcome) {
    match outcome {
        DeliveryOutcome::Delivered { message_uuid } => {
            info!(outcome = outcome.kind(), message_uuid = ?message_uuid, "Reply delivered to provider");
        }
        DeliveryOutcome::ProviderRejected { status, body } => {
            error!(outcome = outcome.kind(), status, body = %body, "Reply rejected by provider");
        }
        DeliveryOutcome::NetworkFailure { reason } => {
            error!(outcome = outcome.kind(), reason = %reason, "Reply not delivered");
        }
    }
}
