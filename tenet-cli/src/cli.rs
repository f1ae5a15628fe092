//! CLI argument parsing using clap

use clap::{Parser, Subcommand};

/// Action to run against the account
#[derive(Debug, Clone, Copy, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Refresh and print account and bonus status
    Status,
    /// Flip the bonus-traffic switch and print the new bonus status
    ToggleBonus,
}

/// stats.tenet.ua account client
#[derive(Parser, Debug)]
#[command(name = "tenet", about = "Check a stats.tenet.ua account", version)]
pub struct Args {
    /// Portal login
    #[arg(short, long, env = "TENET_USERNAME")]
    pub username: Option<String>,

    /// MD5 hash of the password (prompted for the password if omitted)
    #[arg(long, env = "TENET_PASSWORD_HASH", hide_env_values = true)]
    pub password_hash: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only print the headline value
    #[arg(short, long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}
