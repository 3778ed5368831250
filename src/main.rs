use anyhow::Result;
use log::error;
use std::process;

use simwatch::queue::QueueError;
use simwatch::{app, cli, logging};

fn main() {
    // Set up panic handler with better error reporting
    std::panic::set_hook(Box::new(|panic_info| {
        error!("Application panicked: {:?}", panic_info);
        eprintln!("Panic: {:?}", panic_info);
        process::exit(101);
    }));

    if let Err(e) = run() {
        match e.downcast_ref::<QueueError>() {
            // Startup connection failures are reported as a single line
            Some(queue_error) if queue_error.is_startup_failure() => eprintln!("{}", queue_error),
            _ => {
                error!("Application error: {:#}", e);
                eprintln!("Error: {:#}", e);
            }
        }

        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = cli::parse_args();

    cli::validate_args(&args)?;

    let config_manager = app::load_configuration(&args)?;

    let log_config = app::configure_logging(&args, &config_manager)?;
    logging::init_logger(log_config)?;

    let monitor_config = app::resolve_monitor_config(&args, &config_manager)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(app::run_monitor(monitor_config))?;

    Ok(())
}
