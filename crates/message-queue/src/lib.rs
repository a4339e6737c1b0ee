//! # Message queue
//!
//! Process-local store of pending inbound WhatsApp messages, keyed by recipient (the business's
//! own WhatsApp number).
//!
//! ## QueueStore
//!
//! - A recipient has a queue once an admin registered it; inbound messages for unknown recipients
//!   are dropped.
//! - [`QueueStore::push`] appends; [`QueueStore::drain`] takes everything and leaves the queue empty.
//! - Nothing is persisted, nothing is evicted. Data is lost on restart and a queue that is never
//!   drained grows without bound.
//!
//! ## Example
//!
//! ```rust
//! use message_queue::{PushOutcome, QueueStore};
//! use relay_core::MessageRecord;
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = QueueStore::new();
//!     store.register("+1999").await;
//!
//!     let outcome = store.push("+1999", MessageRecord::new("+1555", "hello")).await;
//!     assert_eq!(outcome, PushOutcome::Queued { depth: 1 });
//!
//!     let drained = store.drain("+1999").await;
//!     assert_eq!(drained.len(), 1);
//!     assert!(store.drain("+1999").await.is_empty());
//! }
//! ```
//!
//! ## Thread Safety
//!
//! The recipient map sits behind an `RwLock`; each recipient's sequence has its own `Mutex`.
//! Append and drain-and-clear each run inside that mutex, so a message pushed concurrently with a
//! drain ends up either in the drained batch or in the queue, never lost.

mod store;

pub use store::{PushOutcome, QueueStore};
