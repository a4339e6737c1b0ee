//! Queues provider-pushed messages under the business number they were sent to.

use message_queue::{PushOutcome, QueueStore};
use relay_core::MessageRecord;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone)]
pub struct InboundHandler {
    queues: QueueStore,
}

impl InboundHandler {
    pub fn new(queues: QueueStore) -> Self {
        Self { queues }
    }

    /// Appends the message to `recipient_id`'s queue. Unregistered recipients drop it; the caller
    /// acknowledges the webhook either way.
    #[instrument(skip(self, text))]
    pub async fn handle(&self, sender_id: &str, recipient_id: &str, text: &str) -> PushOutcome {
        let outcome = self
            .queues
            .push(recipient_id, MessageRecord::new(sender_id, text))
            .await;
        match outcome {
            PushOutcome::Queued { depth } => {
                info!(from = %sender_id, to = %recipient_id, depth, "Inbound message queued");
            }
            PushOutcome::Unregistered => {
                warn!(
                    from = %sender_id,
                    to = %recipient_id,
                    "Inbound message for unregistered number dropped"
                );
            }
        }
        outcome
    }
}
