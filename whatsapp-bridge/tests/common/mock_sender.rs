//! RecordingSender: a [`MessageSender`] that records every call and answers with a fixed outcome.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use whatsapp_bridge::{Credentials, DeliveryOutcome, MessageSender, OutboundMessage};

#[derive(Debug)]
pub struct RecordingSender {
    outcome: DeliveryOutcome,
    calls: Mutex<Vec<(Credentials, OutboundMessage)>>,
}

impl RecordingSender {
    pub fn delivering() -> Self {
        Self::with_outcome(DeliveryOutcome::Delivered {
            message_uuid: Some("provider-uuid".to_string()),
        })
    }

    pub fn failing() -> Self {
        Self::with_outcome(DeliveryOutcome::NetworkFailure {
            reason: "connection refused".to_string(),
        })
    }

    pub fn with_outcome(outcome: DeliveryOutcome) -> Self {
        Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(Credentials, OutboundMessage)> {
        self.calls.lock().unwrap().clone()
    }

    /// Waits until at least `n` calls were recorded (dispatch runs on a spawned task).
    pub async fn wait_for_calls(&self, n: usize) -> Vec<(Credentials, OutboundMessage)> {
        for _ in 0..200 {
            let calls = self.calls();
            if calls.len() >= n {
                return calls;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("expected {} send calls, got {}", n, self.calls().len());
    }
}

#[async_trait]
impl MessageSender for RecordingSender {
    async fn send(&self, credentials: &Credentials, message: &OutboundMessage) -> DeliveryOutcome {
        self.calls
            .lock()
            .unwrap()
            .push((credentials.clone(), message.clone()));
        self.outcome.clone()
    }
}
