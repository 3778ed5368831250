//! Application initialization and configuration

use anyhow::Result;
use log::{debug, LevelFilter};
use std::str::FromStr;
use std::time::Duration;

use crate::display::OutputFormat;
use crate::monitor::MonitorConfig;
use crate::{cli, config, logging};

pub fn load_configuration(args: &cli::Args) -> Result<config::ConfigManager> {
    let mut manager = if let Some(config_file) = &args.config_file {
        debug!("Loading configuration from explicit file: {}", config_file.display());
        config::ConfigManager::load_from_file(config_file.clone())?
    } else {
        config::ConfigManager::load()?
    };

    if let Some(path) = manager.config_file_path() {
        debug!("Using configuration file: {}", path.display());
    }

    if let Some(section_name) = &args.config_name {
        manager.select_section(section_name.clone());
    }

    Ok(manager)
}

pub fn configure_logging(args: &cli::Args, config: &config::ConfigManager) -> Result<logging::LogConfig> {
    let console_level = if args.debug {
        LevelFilter::Trace
    } else if args.verbose {
        LevelFilter::Debug
    } else if args.quiet {
        LevelFilter::Error
    } else {
        config.get_log_level("base", "console-level")?.unwrap_or(LevelFilter::Info)
    };

    let format = if args.log_format != "text" {
        logging::LogFormat::from_str(&args.log_format).map_err(|e| anyhow::anyhow!(e))?
    } else {
        match config.get_value("base", "log-format") {
            Some(format_str) => logging::LogFormat::from_str(format_str).map_err(|e| anyhow::anyhow!(e))?,
            None => logging::LogFormat::Text,
        }
    };

    let log_file_path = args.log_file.clone().or_else(|| config.get_path("base", "log-file"));

    let file_log_level = match &args.log_file_level {
        Some(level_str) => Some(logging::parse_log_level(level_str)?),
        None => config.get_log_level("base", "file-log-level")?,
    };

    let (destination, file_level) = match (log_file_path, file_log_level) {
        (Some(file_path), level) => {
            let level = level.unwrap_or(console_level);
            (logging::LogDestination::Both(file_path), Some(level))
        }
        (None, None) => (logging::LogDestination::Console, None),
        (None, Some(_)) => {
            return Err(anyhow::anyhow!("Log file level specified without log file"));
        }
    };

    Ok(logging::LogConfig {
        console_level,
        file_level,
        format,
        destination,
    })
}

/// Merge command line overrides onto the configured monitor settings
pub fn resolve_monitor_config(args: &cli::Args, config: &config::ConfigManager) -> Result<MonitorConfig> {
    let mut monitor = config.get_monitor_config()?;

    if let Some(uri) = &args.broker_uri {
        monitor.broker_uri = uri.clone();
    }
    if let Some(secs) = args.interval {
        monitor.interval = Duration::from_secs(secs);
    }
    if let Some(format) = &args.output_format {
        monitor.output_format = OutputFormat::from_str(format).map_err(|e| anyhow::anyhow!(e))?;
    }
    monitor.once = args.once || config.get_bool("monitor", "once")?.unwrap_or(false);

    monitor
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid monitor settings: {}", e))?;

    debug!("Resolved monitor configuration: {:?}", monitor);
    Ok(monitor)
}
