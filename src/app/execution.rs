//! Application execution: connect, then hand off to the monitor worker

use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::io;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::display::ReportRenderer;
use crate::monitor::{Monitor, MonitorConfig, MonitorState};
use crate::queue::{amqp, AmqpInspector, QueueInspector, QueueSampler};

/// Connect to the broker and run until interrupted (or for one cycle with `once`)
pub async fn run_monitor(config: MonitorConfig) -> Result<MonitorState> {
    let cancel = CancellationToken::new();

    let signal_token = cancel.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Interrupt received, stopping monitor");
                signal_token.cancel();
            }
            Err(e) => warn!("Unable to listen for interrupt signal: {}", e),
        }
    });

    run_monitor_until(config, cancel).await
}

/// Connect to the broker and run until `cancel` fires
///
/// A connection failure is returned as a `QueueError` inside the `anyhow`
/// error, and no cycle is run.
pub async fn run_monitor_until(config: MonitorConfig, cancel: CancellationToken) -> Result<MonitorState> {
    debug!("Connecting to broker at {}", amqp::redact_uri(&config.broker_uri));
    let inspector = AmqpInspector::connect(&config.broker_uri).await?;

    run_with_inspector(Arc::new(inspector), &config, io::stdout(), cancel).await
}

/// Run the poll loop over an already connected inspector
pub async fn run_with_inspector<W>(
    inspector: Arc<dyn QueueInspector>,
    config: &MonitorConfig,
    out: W,
    cancel: CancellationToken,
) -> Result<MonitorState>
where
    W: io::Write + Send + 'static,
{
    let sampler = QueueSampler::new(inspector);
    let renderer = ReportRenderer::new(config.output_format);
    let mut monitor = Monitor::new(sampler, renderer, config.interval, out);

    if config.once {
        let mut state = MonitorState::new();
        monitor.run_cycle(&mut state).await;
        return Ok(state);
    }

    let worker = tokio::spawn(monitor.run(MonitorState::new(), cancel));
    worker.await.context("Monitor worker terminated abnormally")
}
