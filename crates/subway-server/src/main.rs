//! Subway CLI - Main entry point

use clap::Parser;
use std::process;
use subway_common::logging::{init_logging, LogConfig, LogLevel, LogOutput};
use tracing::{error, info};

use subway_server::cli::{self, Cli};
use subway_server::config::Config;
use subway_server::seed;
use subway_server::store::Store;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Verbose mode logs debug output; otherwise only warnings reach stderr
    let log_config = LogConfig::builder()
        .level(if cli.verbose { LogLevel::Debug } else { LogLevel::Warn })
        .output(LogOutput::Console)
        .log_file_prefix("subway")
        .build();

    // Environment variables take precedence
    let log_config = log_config.clone().merge_env().unwrap_or(log_config);

    // The CLI works without logging
    let _guard = init_logging(&log_config).ok().flatten();

    if let Err(e) = run(cli).await {
        error!(error = %e, "Command failed");
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load()?;
    let store = Store::new(config.limits);

    // The --seed flag (or SUBWAY_SEED_FILE through clap) wins over the config file setting
    if let Some(path) = cli.seed.or(config.seed.file) {
        let network = seed::load(&path).await?;
        let summary = seed::apply(&store, &network).await?;
        info!(
            path = %path.display(),
            stations = summary.stations,
            lines = summary.lines,
            "Seed network loaded"
        );
    }

    let output = cli::execute(&cli.command, &store).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
