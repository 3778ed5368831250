//! Broker queue inspection
//!
//! Queue identities, per-cycle count snapshots, the sampler that fills them
//! and the RabbitMQ-backed inspector.

pub mod amqp;
pub mod error;
pub mod kind;
pub mod sampler;
pub mod statistics;

pub use amqp::{AmqpInspector, DEFAULT_BROKER_URI};
pub use error::{QueueError, QueueResult};
pub use kind::QueueKind;
pub use sampler::{QueueInspector, QueueSampler};
pub use statistics::{QueueCount, QueueStatistics, UNAVAILABLE_SENTINEL};
