//! Tenet CLI - Command-line interface for a stats.tenet.ua account

mod cli;
mod config;
mod error;
mod output;

use clap::Parser;
use cli::{Args, Command};
use config::Config;
use output::{OutputFormatter, StatusView};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` overrides the level chosen by `--verbose`
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<(), error::CliError> {
    let config = Config::from_args(args)?;
    let mut account = config.account()?;
    let formatter = OutputFormatter::new(config.quiet);

    tracing::debug!(username = account.username(), command = ?config.command, "running");

    match config.command {
        Command::Status => {
            account.update()?;
            println!("{}", formatter.format_status(&StatusView::from(&account)));
        }
        Command::ToggleBonus => {
            account.update()?;
            let outcome = account.toggle_bonus()?;
            println!(
                "{}",
                formatter.format_toggle(&StatusView::from(&account), outcome)
            );
        }
    }

    Ok(())
}
