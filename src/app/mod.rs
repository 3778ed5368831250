//! Application orchestration module

pub mod execution;
pub mod initialization;

pub use execution::{run_monitor, run_monitor_until, run_with_inspector};
pub use initialization::{configure_logging, load_configuration, resolve_monitor_config};
