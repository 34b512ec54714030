use clap::Parser;
use dotenvy::dotenv;

use vitals_monitor::alerts::blink::{spawn_blink, BlinkOutcome};
use vitals_monitor::alerts::ConsoleReporter;
use vitals_monitor::cli::Cli;
use vitals_monitor::config::Config;
use vitals_monitor::error::AppError;
use vitals_monitor::logging::init_logging;
use vitals_monitor::vitals::VitalsMonitor;

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_logging();

    let cli = Cli::parse();

    let config = Config::from_env()
        .map(|config| cli.apply(config))
        .map_err(AppError::Config)
        .unwrap_or_else(|err| {
            tracing::error!("{}", err);
            std::process::exit(1);
        });

    tracing::debug!("Starting with config: {:?}", config);

    if let Err(err) = run(&cli, &config).await {
        tracing::error!("{}", err);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli, config: &Config) -> Result<(), AppError> {
    let monitor = VitalsMonitor::new(config.vitals_config()?)?;
    let evaluation = monitor.evaluate(&cli.readings());

    let mut reporter = ConsoleReporter::stdout();
    let raised = reporter.report(&evaluation);

    if raised > 0 && config.blink_enabled {
        let handle = spawn_blink(std::io::stdout(), config.blink);

        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Shutdown signal received. Stopping blink.");
                handle.cancel();
            }
            _ = tokio::time::sleep(config.blink.total_duration()) => {}
        }

        match handle.join().await {
            Ok((BlinkOutcome::Completed { cycles }, _)) => {
                tracing::debug!("Blink finished after {} cycles", cycles);
            }
            Ok((BlinkOutcome::Cancelled { cycles_completed }, _)) => {
                tracing::debug!("Blink stopped after {} cycles", cycles_completed);
            }
            Err(err) => return Err(AppError::Runtime(err.to_string())),
        }
        println!();
    }

    Ok(())
}
