//! Drains a recipient's queue into the platform's external-resource records.

use chrono::{DateTime, SecondsFormat, Utc};
use message_queue::QueueStore;
use relay_core::MessageRecord;
use serde::{Serialize, Serializer};
use tracing::{info, instrument};
use uuid::Uuid;

const NOTES_FIELD: &str = "notes";
const SUBJECT_FIELD: &str = "subject";
const SUBJECT: &str = "Customer request through WhatsApp";

/// One external resource as the platform's pull endpoint expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceRecord {
    pub external_id: Uuid,
    /// The sender's number, so all of one sender's messages land on one ticket.
    pub thread_id: String,
    pub message: String,
    pub html_message: String,
    #[serde(serialize_with = "iso8601_millis")]
    pub created_at: DateTime<Utc>,
    pub author: Author,
    pub allow_channelback: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    pub external_id: String,
    pub fields: Vec<AuthorField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorField {
    pub id: String,
    pub value: String,
}

impl ResourceRecord {
    /// Builds the record for one drained message. `external_id` is fresh on every call and
    /// `created_at` is the drain time, not the receipt time.
    pub fn from_message(record: &MessageRecord, drained_at: DateTime<Utc>) -> Self {
        let from = record.from();
        Self {
            external_id: Uuid::new_v4(),
            thread_id: from.to_string(),
            message: record.content().to_string(),
            html_message: record.content().to_string(),
            created_at: drained_at,
            author: Author {
                external_id: from.to_string(),
                fields: vec![
                    AuthorField {
                        id: NOTES_FIELD.to_string(),
                        value: format!("Sent from WhatsApp number {}", from),
                    },
                    AuthorField {
                        id: SUBJECT_FIELD.to_string(),
                        value: SUBJECT.to_string(),
                    },
                ],
            },
            allow_channelback: true,
        }
    }
}

/// UTC with millisecond precision and a `Z` suffix: `2024-05-01T12:00:00.000Z`.
fn iso8601_millis<S: Serializer>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[derive(Debug, Clone)]
pub struct OutboundPoller {
    queues: QueueStore,
}

impl OutboundPoller {
    pub fn new(queues: QueueStore) -> Self {
        Self { queues }
    }

    /// Drains every pending message for `recipient_id` and returns them as resource records in
    /// receipt order. The queue is emptied before the platform has received anything, so a lost
    /// response loses the messages. Unregistered recipients yield an empty list.
    #[instrument(skip(self))]
    pub async fn poll(&self, recipient_id: &str) -> Vec<ResourceRecord> {
        let drained = self.queues.drain(recipient_id).await;
        let drained_at = Utc::now();
        let resources: Vec<ResourceRecord> = drained
            .iter()
            .map(|record| ResourceRecord::from_message(record, drained_at))
            .collect();
        info!(recipient = %recipient_id, count = resources.len(), "Pull drained queue");
        resources
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashSet;

    #[test]
    fn test_from_message_wires_sender_as_thread_and_author() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let record = ResourceRecord::from_message(&MessageRecord::new("+1555", "hello"), at);

        assert_eq!(record.thread_id, "+1555");
        assert_eq!(record.author.external_id, "+1555");
        assert_eq!(record.message, "hello");
        assert_eq!(record.html_message, "hello");
        assert_eq!(record.created_at, at);
        assert!(record.allow_channelback);
        assert_eq!(record.author.fields.len(), 2);
        assert_eq!(record.author.fields[0].id, "notes");
        assert_eq!(record.author.fields[0].value, "Sent from WhatsApp number +1555");
        assert_eq!(record.author.fields[1].id, "subject");
        assert_eq!(record.author.fields[1].value, "Customer request through WhatsApp");
    }

    #[test]
    fn test_serialized_shape() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let record = ResourceRecord::from_message(&MessageRecord::new("+1555", "hello"), at);

        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["created_at"], "2024-05-01T12:00:00.000Z");
        assert_eq!(json["thread_id"], "+1555");
        assert_eq!(json["allow_channelback"], true);
        assert_eq!(json["author"]["fields"][1]["id"], "subject");
        assert!(Uuid::parse_str(json["external_id"].as_str().unwrap()).is_ok());
    }

    #[test]
    fn test_external_ids_are_fresh() {
        let at = Utc::now();
        let message = MessageRecord::new("+1555", "hello");
        let a = ResourceRecord::from_message(&message, at);
        let b = ResourceRecord::from_message(&message, at);
        assert_ne!(a.external_id, b.external_id);
    }

    #[tokio::test]
    async fn test_poll_drains_in_order_then_empty() {
        let queues = QueueStore::new();
        queues.register("+1999").await;
        for text in ["one", "two", "three"] {
            queues.push("+1999", MessageRecord::new("+1555", text)).await;
        }
        let poller = OutboundPoller::new(queues.clone());

        let before = Utc::now();
        let resources = poller.poll("+1999").await;

        let messages: Vec<&str> = resources.iter().map(|r| r.message.as_str()).collect();
        assert_eq!(messages, vec!["one", "two", "three"]);
        assert!(resources.iter().all(|r| r.created_at >= before));
        let ids: HashSet<Uuid> = resources.iter().map(|r| r.external_id).collect();
        assert_eq!(ids.len(), 3);
        assert!(poller.poll("+1999").await.is_empty());
    }

    #[tokio::test]
    async fn test_poll_unregistered_is_empty_and_registers_nothing() {
        let queues = QueueStore::new();
        let poller = OutboundPoller::new(queues.clone());

        assert!(poller.poll("+1999").await.is_empty());
        assert!(!queues.is_registered("+1999").await);
    }
}
