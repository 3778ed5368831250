//! Queue Sampler
//!
//! Reads the ready-message count of every known queue once per cycle.
//! A failing queue is logged and recorded as unavailable; the remaining
//! queues are still sampled.

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, error};

use super::error::{QueueError, QueueResult};
use super::kind::QueueKind;
use super::statistics::{QueueCount, QueueStatistics};

/// Source of per-queue message counts
#[async_trait]
pub trait QueueInspector: Send + Sync {
    /// Ready-message count for the named queue
    async fn message_count(&self, queue_name: &str) -> QueueResult<u32>;
}

/// Samples all known queues through a `QueueInspector`
#[derive(Clone)]
pub struct QueueSampler {
    inspector: Arc<dyn QueueInspector>,
}

impl QueueSampler {
    pub fn new(inspector: Arc<dyn QueueInspector>) -> Self {
        Self { inspector }
    }

    /// Count for a single queue; failures become `Unavailable`
    pub async fn sample(&self, kind: QueueKind) -> QueueCount {
        match self.inspector.message_count(kind.queue_name()).await {
            Ok(count) => {
                debug!("Queue {} has {} ready messages", kind, count);
                QueueCount::Observed(count)
            }
            Err(e) => {
                let e = match e {
                    QueueError::DeclareFailed { .. } => e,
                    other => QueueError::declare_failed(kind.queue_name(), other.to_string()),
                };
                error!("{}", e);
                QueueCount::Unavailable
            }
        }
    }

    /// Fresh counts for every queue, sampled in declaration order
    pub async fn sample_all(&self) -> QueueStatistics {
        let mut statistics = QueueStatistics::new();
        for kind in QueueKind::ALL {
            let count = self.sample(kind).await;
            statistics.set(kind, count);
        }
        statistics
    }
}
