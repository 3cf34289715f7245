use bet_analytix::cli::{Cli, Commands};
use bet_analytix::config::Config;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Could not load config from {}: {:#}", cli.config, e);
            eprintln!("Using default configuration");
            Config::from_toml(include_str!("../config.toml.example"))?
        }
    };

    // Initialize telemetry
    let _telemetry = bet_analytix::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Kelly(args) => {
            tracing::debug!("Computing Kelly stakes");
            args.execute()?;
        }
        Commands::Backtest(args) => {
            tracing::info!("Starting backtest");
            args.execute(&config)?;
        }
        Commands::Heatmap(args) => {
            tracing::info!("Building heatmap");
            args.execute(&config)?;
        }
        Commands::Config => {
            println!("# Effective configuration");
            print!("{}", config.to_toml()?);
        }
    }

    Ok(())
}
