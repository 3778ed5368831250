//! Queue Statistics Management
//!
//! Per-queue message counts for one sampling cycle. The mapping is total:
//! every `QueueKind` always has an entry, so lookups never fail.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::kind::QueueKind;

/// Value reported for a queue whose count could not be read
pub const UNAVAILABLE_SENTINEL: i64 = -1;

/// Outcome of inspecting a single queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueCount {
    /// Ready-message count reported by the broker
    Observed(u32),
    /// The broker call failed for this queue
    Unavailable,
}

impl QueueCount {
    /// Count as used in metric arithmetic; failures contribute -1
    pub fn as_i64(self) -> i64 {
        match self {
            QueueCount::Observed(count) => i64::from(count),
            QueueCount::Unavailable => UNAVAILABLE_SENTINEL,
        }
    }

    pub fn is_available(self) -> bool {
        matches!(self, QueueCount::Observed(_))
    }
}

impl Default for QueueCount {
    fn default() -> Self {
        QueueCount::Observed(0)
    }
}

impl fmt::Display for QueueCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i64())
    }
}

impl Serialize for QueueCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.as_i64())
    }
}

/// Message counts for every known queue
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueueStatistics {
    counts: [QueueCount; QueueKind::COUNT],
}

impl QueueStatistics {
    /// All queues at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a function evaluated once per kind, in declaration order
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(QueueKind) -> QueueCount,
    {
        let mut statistics = Self::new();
        for kind in QueueKind::ALL {
            statistics.counts[kind.index()] = f(kind);
        }
        statistics
    }

    pub fn get(&self, kind: QueueKind) -> QueueCount {
        self.counts[kind.index()]
    }

    /// Arithmetic value for a kind (-1 when unavailable)
    pub fn value(&self, kind: QueueKind) -> i64 {
        self.get(kind).as_i64()
    }

    pub fn set(&mut self, kind: QueueKind, count: QueueCount) {
        self.counts[kind.index()] = count;
    }

    /// Overwrite every entry with the contents of `fresh`
    pub fn replace_all(&mut self, fresh: QueueStatistics) {
        self.counts = fresh.counts;
    }

    /// Entries in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (QueueKind, QueueCount)> + '_ {
        QueueKind::ALL.iter().map(move |&kind| (kind, self.get(kind)))
    }

    /// Number of queues whose last inspection failed
    pub fn unavailable_count(&self) -> usize {
        self.counts.iter().filter(|count| !count.is_available()).count()
    }
}

impl Serialize for QueueStatistics {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(QueueKind::COUNT))?;
        for (kind, count) in self.iter() {
            map.serialize_entry(&kind, &count)?;
        }
        map.end()
    }
}
