//! Poll loop
//!
//! One worker owns the sampler, the latest queue counts and the derived
//! metrics. Each cycle samples every queue, recomputes the metrics and
//! writes a report, strictly in that order. Cycles never overlap.

pub mod config;

use std::io::Write;
use std::time::Duration;

use log::{debug, error, info, warn};
use tokio_util::sync::CancellationToken;

use crate::display::{CompactFormat, ReportRenderer};
use crate::queue::{QueueSampler, QueueStatistics};
use crate::stats::SimulationMetrics;

pub use config::{MonitorConfig, DEFAULT_INTERVAL_SECS};

/// State carried from one cycle to the next
#[derive(Debug, Clone, Default)]
pub struct MonitorState {
    pub statistics: QueueStatistics,
    pub metrics: SimulationMetrics,
    pub cycles: u64,
}

impl MonitorState {
    /// All queue counts zero, no baseline captured
    pub fn new() -> Self {
        Self::default()
    }
}

/// Sample-compute-report loop writing reports to `out`
pub struct Monitor<W> {
    sampler: QueueSampler,
    renderer: ReportRenderer,
    interval: Duration,
    out: W,
}

impl<W: Write + Send> Monitor<W> {
    pub fn new(sampler: QueueSampler, renderer: ReportRenderer, interval: Duration, out: W) -> Self {
        Self {
            sampler,
            renderer,
            interval,
            out,
        }
    }

    /// One full sample, compute, report sequence
    pub async fn run_cycle(&mut self, state: &mut MonitorState) {
        let fresh = self.sampler.sample_all().await;
        let unavailable = fresh.unavailable_count();
        state.statistics.replace_all(fresh);

        state.metrics.update(&state.statistics);
        state.cycles += 1;

        if unavailable > 0 {
            warn!(
                "Cycle {}: {} of the queues could not be read, derived figures include -1 placeholders",
                state.cycles, unavailable
            );
        }
        debug!("Cycle {}: {}", state.cycles, state.metrics.to_compact_format());

        if let Err(e) = self.renderer.render(&mut self.out, &state.statistics, &state.metrics) {
            error!("Failed to write report: {}", e);
        }
    }

    /// Wait one interval, run a cycle, repeat until `cancel` fires.
    ///
    /// Cancellation is honoured while waiting; a cycle that has started
    /// always completes. Returns the final state.
    pub async fn run(mut self, mut state: MonitorState, cancel: CancellationToken) -> MonitorState {
        info!("Monitor started, sampling every {:?}", self.interval);

        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    info!("Monitor stopped after {} cycles", state.cycles);
                    break;
                }
                _ = tokio::time::sleep(self.interval) => {}
            }

            self.run_cycle(&mut state).await;
        }

        state
    }
}
