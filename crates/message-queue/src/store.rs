use relay_core::MessageRecord;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

type Queue = Arc<Mutex<Vec<MessageRecord>>>;

/// Result of [`QueueStore::push`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    /// Appended; `depth` is the queue length after the append.
    Queued { depth: usize },
    /// No queue is registered for the recipient; the record was dropped.
    Unregistered,
}

/// Recipient number → insertion-ordered pending records. Cheap to clone; clones share state.
#[derive(Debug, Clone, Default)]
pub struct QueueStore {
    queues: Arc<RwLock<HashMap<String, Queue>>>,
}

impl QueueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty queue for `recipient` unless one exists. Existing records are kept.
    /// Returns true when a new queue was created.
    pub async fn register(&self, recipient: &str) -> bool {
        let mut queues = self.queues.write().await;
        if queues.contains_key(recipient) {
            debug!(recipient = %recipient, "Queue already registered");
            return false;
        }
        queues.insert(recipient.to_string(), Arc::new(Mutex::new(Vec::new())));
        info!(recipient = %recipient, "Queue registered");
        true
    }

    pub async fn is_registered(&self, recipient: &str) -> bool {
        self.queues.read().await.contains_key(recipient)
    }

    /// Appends `record` to the recipient's queue. Unknown recipients drop the record with a warning.
    pub async fn push(&self, recipient: &str, record: MessageRecord) -> PushOutcome {
        let Some(queue) = self.queue(recipient).await else {
            warn!(
                recipient = %recipient,
                from = %record.from(),
                "No queue registered for recipient, dropping message"
            );
            return PushOutcome::Unregistered;
        };

        let mut records = queue.lock().await;
        records.push(record);
        let depth = records.len();
        debug!(recipient = %recipient, depth, "Message queued");
        PushOutcome::Queued { depth }
    }

    /// Takes every pending record for `recipient` in receipt order and leaves its queue empty.
    /// Unknown recipients yield an empty batch and stay unregistered.
    pub async fn drain(&self, recipient: &str) -> Vec<MessageRecord> {
        let Some(queue) = self.queue(recipient).await else {
            info!(recipient = %recipient, "No queue to drain for recipient");
            return Vec::new();
        };

        let drained = std::mem::take(&mut *queue.lock().await);
        debug!(recipient = %recipient, count = drained.len(), "Queue drained");
        drained
    }

    /// Number of pending records for `recipient`; 0 when unregistered.
    pub async fn len(&self, recipient: &str) -> usize {
        match self.queue(recipient).await {
            Some(queue) => queue.lock().await.len(),
            None => 0,
        }
    }

    pub async fn is_empty(&self, recipient: &str) -> bool {
        self.len(recipient).await == 0
    }

    /// Number of registered recipients.
    pub async fn recipient_count(&self) -> usize {
        self.queues.read().await.len()
    }

    async fn queue(&self, recipient: &str) -> Option<Queue> {
        self.queues.read().await.get(recipient).cloned()
    }
}
