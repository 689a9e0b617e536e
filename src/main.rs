use anyhow::Result;
use clap::Parser;
use rain_tomorrow::app;
use rain_tomorrow::cli::{Cli, Commands};
use rain_tomorrow::config::AppConfig;
use rain_tomorrow::ui::cli::drivers::InquireDriver;
use std::io;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::resolve(cli.config.as_deref(), cli.artifact.clone()) {
        Ok(config) => config,
        Err(err) => {
            app::report_failure(&err.into(), &mut io::stderr());
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.log_filter);

    match run(cli.subcommand(), &config) {
        Ok(code) => code,
        Err(err) => {
            app::report_failure(&err, &mut io::stderr());
            ExitCode::FAILURE
        }
    }
}

// RUST_LOG takes precedence over the configured filter
fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn run(command: Commands, config: &AppConfig) -> Result<ExitCode> {
    let mut stdout = io::stdout().lock();

    match command {
        Commands::Form => {
            info!(artifact = %config.artifact_path.display(), "starting forecast form");
            app::run_form(config, InquireDriver, &mut stdout)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Predict(args) => {
            let outcome = app::run_predict(config, &args, &mut stdout)?;
            Ok(if outcome.is_ok() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::ArtifactSchema => {
            app::write_artifact_schema(&mut stdout)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
