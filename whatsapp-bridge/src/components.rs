//! Component factory: builds BridgeComponents from config. Isolates assembly logic from runner.

use anyhow::Result;
use message_queue::QueueStore;
use relay_core::MessageSender;
use std::sync::Arc;
use tracing::{info, instrument};
use whatsapp_client::WhatsAppClient;

use crate::config::BridgeConfig;

/// Shared state behind every route: the queue store and the outbound sender.
#[derive(Clone)]
pub struct BridgeComponents {
    pub queues: QueueStore,
    pub sender: Arc<dyn MessageSender>,
}

impl BridgeComponents {
    /// Empty queue store with the given sender (tests inject a mock sender here).
    pub fn with_sender(sender: Arc<dyn MessageSender>) -> Self {
        Self {
            queues: QueueStore::new(),
            sender,
        }
    }
}

/// Builds the Messages API client and an empty queue store.
#[instrument(skip(config))]
pub fn build_components(config: &BridgeConfig) -> Result<BridgeComponents> {
    let api = config.messages_api_config();
    info!(
        api_url = %api.api_url,
        timeout_secs = api.timeout.as_secs(),
        max_retries = api.max_retries,
        "Using Messages API client"
    );
    let client = WhatsAppClient::new(api)
        .map_err(|e| anyhow::anyhow!("Failed to initialize Messages API client: {}", e))?;
    Ok(BridgeComponents::with_sender(Arc::new(client)))
}
