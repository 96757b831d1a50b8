use std::process::ExitCode;

use poker_sim::{
    run_showdown_batch, run_single_batch, OutputFormat, SimulationConfig, Summary,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "poker_sim=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match SimulationConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    info!(
        batch_size = config.batch_size,
        mode = ?config.mode,
        seed = ?config.seed,
        "Starting poker simulation"
    );

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut summary = Summary::default();
    if config.mode.runs_single() {
        summary.single = Some(run_single_batch(config.batch_size, &mut rng));
    }
    if config.mode.runs_showdown() {
        summary.showdown = Some(run_showdown_batch(config.batch_size, &mut rng));
    }

    match config.output {
        OutputFormat::Text => print!("{summary}"),
        OutputFormat::Json => match summary.to_json() {
            Ok(json) => println!("{json}"),
            Err(err) => {
                error!(error = %err, "Failed to serialize summary");
                return ExitCode::FAILURE;
            }
        },
    }

    ExitCode::SUCCESS
}
