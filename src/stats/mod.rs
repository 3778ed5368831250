//! Simulation metrics
//!
//! Derives population and food figures from the latest queue counts.
//! Failed queues contribute -1 to every formula they appear in.

use crate::queue::{QueueKind, QueueStatistics};

/// Food units produced per FOOD_CREATED event
pub const FOOD_PER_CREATION: i64 = 5;

/// Aggregate figures derived once per cycle
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulationMetrics {
    pub available_food: i64,
    pub current_population: i64,
    /// Baseline captured on the first update and frozen afterwards
    pub initial_population: i64,
    /// Ratio of current to initial population
    pub population_growth: f64,
    initial_population_captured: bool,
}

impl SimulationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute from a fresh snapshot.
    ///
    /// Growth is evaluated before the baseline is captured, so the first
    /// update leaves it at its previous value. It is also left untouched for
    /// as long as the baseline is zero.
    pub fn update(&mut self, statistics: &QueueStatistics) {
        let births = statistics.value(QueueKind::Birth);

        self.current_population = births + statistics.value(QueueKind::DeathAge)
            - statistics.value(QueueKind::DeathStarvation);

        if self.initial_population != 0 {
            self.population_growth =
                self.current_population as f64 / self.initial_population as f64;
        }

        if !self.initial_population_captured {
            self.initial_population = births - statistics.value(QueueKind::Reproduction) / 2;
            self.initial_population_captured = true;
        }

        self.available_food = statistics.value(QueueKind::FoodCreated) * FOOD_PER_CREATION
            - statistics.value(QueueKind::FoodReduced);
    }

    pub fn initial_population_captured(&self) -> bool {
        self.initial_population_captured
    }

    /// Growth as a whole percentage, truncated
    pub fn growth_percent(&self) -> i64 {
        (self.population_growth * 100.0).trunc() as i64
    }
}
