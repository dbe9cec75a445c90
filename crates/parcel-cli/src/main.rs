//! `parcel`: run property searches from the command line.

mod cli;
mod commands;
mod exit_codes;

use std::process::ExitCode;

use clap::Parser;

use cli::{Cli, Commands};
use exit_codes::{exit_code_for, EXIT_SUCCESS, EXIT_USAGE};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::from(EXIT_USAGE)
            } else {
                ExitCode::from(EXIT_SUCCESS)
            };
        }
    };

    let result = run(cli).await;
    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(exit_code_for(&err))
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = commands::load_config(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        config.observability.log_level = level;
    }
    parcel_observability::init_tracing_from_config(&config.observability);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Commands::Search(args) => {
            let cancel = async {
                if tokio::signal::ctrl_c().await.is_ok() {
                    tracing::warn!("interrupted, cancelling outstanding portal calls");
                } else {
                    std::future::pending::<()>().await;
                }
            };
            commands::run_search(config, &args, &mut out, cancel).await
        }
        Commands::Portals(args) => commands::run_portals(config, &args, &mut out),
    }
}
