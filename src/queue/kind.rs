//! Queue Identities
//!
//! The closed set of broker queues the simulation publishes events to.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// A known simulation event queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QueueKind {
    FoodCreated,
    FoodReduced,
    Birth,
    DeathAge,
    DeathStarvation,
    Reproduction,
}

impl QueueKind {
    /// All kinds in declaration order
    pub const ALL: [QueueKind; 6] = [
        QueueKind::FoodCreated,
        QueueKind::FoodReduced,
        QueueKind::Birth,
        QueueKind::DeathAge,
        QueueKind::DeathStarvation,
        QueueKind::Reproduction,
    ];

    /// Number of known queues
    pub const COUNT: usize = Self::ALL.len();

    /// Broker queue name
    pub fn queue_name(self) -> &'static str {
        match self {
            QueueKind::FoodCreated => "FOOD_CREATED",
            QueueKind::FoodReduced => "FOOD_REDUCED",
            QueueKind::Birth => "BIRTH",
            QueueKind::DeathAge => "DEATH_AGE",
            QueueKind::DeathStarvation => "DEATH_STARVATION",
            QueueKind::Reproduction => "REPRODUCTION",
        }
    }

    /// Position in declaration order
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for QueueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.queue_name())
    }
}

impl FromStr for QueueKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QueueKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.queue_name() == s)
            .ok_or_else(|| format!("Unknown queue name: {}", s))
    }
}

impl Serialize for QueueKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.queue_name())
    }
}
