//! Per-cycle console report

use std::io::{self, Write};

use chrono::{DateTime, Local};
use serde::Serialize;

use super::format::{CompactFormat, OutputFormat};
use crate::queue::QueueStatistics;
use crate::stats::SimulationMetrics;

impl CompactFormat for SimulationMetrics {
    fn to_compact_format(&self) -> String {
        format!(
            "Population: {} (initial {}, growth {}%) | Food: {}",
            self.current_population,
            self.initial_population,
            self.growth_percent(),
            self.available_food
        )
    }
}

/// JSON shape of one report
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    timestamp: String,
    queues: &'a QueueStatistics,
    metrics: JsonMetrics,
}

#[derive(Debug, Serialize)]
struct JsonMetrics {
    initial_population: i64,
    current_population: i64,
    population_growth: f64,
    population_growth_percent: i64,
    available_food: i64,
}

impl From<&SimulationMetrics> for JsonMetrics {
    fn from(metrics: &SimulationMetrics) -> Self {
        Self {
            initial_population: metrics.initial_population,
            current_population: metrics.current_population,
            population_growth: metrics.population_growth,
            population_growth_percent: metrics.growth_percent(),
            available_food: metrics.available_food,
        }
    }
}

/// Write the indented text block followed by a blank line
pub fn write_text_report<W: Write>(
    out: &mut W,
    statistics: &QueueStatistics,
    metrics: &SimulationMetrics,
) -> io::Result<()> {
    writeln!(out, "Queue Statistics:")?;
    for (kind, count) in statistics.iter() {
        writeln!(out, "    {}: {}", kind, count)?;
    }
    writeln!(out, "    Initial population: {}", metrics.initial_population)?;
    writeln!(out, "    Current population: {}", metrics.current_population)?;
    writeln!(out, "    Population growth : {}%", metrics.growth_percent())?;
    writeln!(out, "    Available food: {}", metrics.available_food)?;
    writeln!(out)
}

/// Write one JSON object on a single line
pub fn write_json_report<W: Write>(
    out: &mut W,
    statistics: &QueueStatistics,
    metrics: &SimulationMetrics,
    timestamp: DateTime<Local>,
) -> io::Result<()> {
    let report = JsonReport {
        timestamp: timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
        queues: statistics,
        metrics: JsonMetrics::from(metrics),
    };
    serde_json::to_writer(&mut *out, &report)?;
    writeln!(out)
}

/// Renders reports in the configured format
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportRenderer {
    format: OutputFormat,
}

impl ReportRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn render<W: Write>(
        &self,
        out: &mut W,
        statistics: &QueueStatistics,
        metrics: &SimulationMetrics,
    ) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => write_text_report(out, statistics, metrics),
            OutputFormat::Json => write_json_report(out, statistics, metrics, Local::now()),
        }?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue::{QueueCount, QueueKind};

    fn sample_state() -> (QueueStatistics, SimulationMetrics) {
        let mut statistics = QueueStatistics::new();
        statistics.set(QueueKind::Birth, QueueCount::Observed(10));
        statistics.set(QueueKind::DeathAge, QueueCount::Observed(2));
        statistics.set(QueueKind::DeathStarvation, QueueCount::Observed(1));
        statistics.set(QueueKind::Reproduction, QueueCount::Observed(4));
        statistics.set(QueueKind::FoodCreated, QueueCount::Observed(20));
        statistics.set(QueueKind::FoodReduced, QueueCount::Unavailable);

        let mut metrics = SimulationMetrics::new();
        metrics.update(&statistics);
        metrics.update(&statistics);
        (statistics, metrics)
    }

    #[test]
    fn test_text_report_layout() {
        let (statistics, metrics) = sample_state();
        let mut buffer = Vec::new();
        write_text_report(&mut buffer, &statistics, &metrics).unwrap();

        let expected = "Queue Statistics:\n\
                        \x20   FOOD_CREATED: 20\n\
                        \x20   FOOD_REDUCED: -1\n\
                        \x20   BIRTH: 10\n\
                        \x20   DEATH_AGE: 2\n\
                        \x20   DEATH_STARVATION: 1\n\
                        \x20   REPRODUCTION: 4\n\
                        \x20   Initial population: 8\n\
                        \x20   Current population: 11\n\
                        \x20   Population growth : 137%\n\
                        \x20   Available food: 101\n\
                        \n";
        assert_eq!(String::from_utf8(buffer).unwrap(), expected);
    }

    #[test]
    fn test_json_report_is_single_line() {
        let (statistics, metrics) = sample_state();
        let mut buffer = Vec::new();
        let timestamp = Local::now();
        write_json_report(&mut buffer, &statistics, &metrics, timestamp).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output.lines().count(), 1);

        let value: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
        assert_eq!(value["queues"]["FOOD_REDUCED"], -1);
        assert_eq!(value["queues"]["BIRTH"], 10);
        assert_eq!(value["metrics"]["population_growth_percent"], 137);
        assert_eq!(value["metrics"]["available_food"], 101);
        assert!(value["timestamp"].is_string());
    }

    #[test]
    fn test_renderer_uses_configured_format() {
        let (statistics, metrics) = sample_state();

        let mut text = Vec::new();
        ReportRenderer::new(OutputFormat::Text)
            .render(&mut text, &statistics, &metrics)
            .unwrap();
        assert!(String::from_utf8(text).unwrap().starts_with("Queue Statistics:\n"));

        let mut json = Vec::new();
        ReportRenderer::new(OutputFormat::Json)
            .render(&mut json, &statistics, &metrics)
            .unwrap();
        assert!(String::from_utf8(json).unwrap().starts_with('{'));
    }

    #[test]
    fn test_metrics_compact_format() {
        let (_, metrics) = sample_state();
        assert_eq!(
            metrics.to_compact_format(),
            "Population: 11 (initial 8, growth 137%) | Food: 101"
        );
    }
}
