//! Configuration resolution from CLI args

use crate::cli::{Args, Command};
use crate::error::CliError;
use tenet_client::Account;
use zeroize::Zeroizing;

/// Credential to authenticate with
pub enum Secret {
    /// Plaintext password, hashed by the client
    Password(Zeroizing<String>),
    /// Pre-computed MD5 hash
    Hash(Zeroizing<String>),
}

/// Resolved runtime configuration
pub struct Config {
    /// Portal login
    pub username: String,
    /// Password or its hash (zeroized on drop)
    pub secret: Secret,
    /// Action to run
    pub command: Command,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args, prompting for anything missing
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let username = match args.username {
            Some(name) if !name.is_empty() => name,
            _ => prompt_username()?,
        };

        let env_password = std::env::var("TENET_PASSWORD").ok().map(Zeroizing::new);
        let secret = resolve_secret(args.password_hash.map(Zeroizing::new), env_password, || {
            prompt_password(&username)
        })?;

        Ok(Config {
            username,
            secret,
            command: args.command,
            quiet: args.quiet,
        })
    }

    /// Create the portal account for this configuration
    pub fn account(&self) -> Result<Account, CliError> {
        let builder = Account::builder().username(self.username.as_str());
        let builder = match &self.secret {
            Secret::Password(password) => builder.password(password.as_str()),
            Secret::Hash(hash) => builder.password_hash(hash.as_str()),
        };
        Ok(builder.build()?)
    }
}

/// Pick the credential: explicit hash, then password from the environment, then prompt
fn resolve_secret(
    hash: Option<Zeroizing<String>>,
    env_password: Option<Zeroizing<String>>,
    prompt: impl FnOnce() -> Result<Zeroizing<String>, CliError>,
) -> Result<Secret, CliError> {
    if let Some(hash) = hash.filter(|h| !h.is_empty()) {
        return Ok(Secret::Hash(hash));
    }
    if let Some(password) = env_password.filter(|p| !p.is_empty()) {
        return Ok(Secret::Password(password));
    }
    prompt().map(Secret::Password)
}

/// Prompt user for their portal login
fn prompt_username() -> Result<String, CliError> {
    use std::io::Write;
    print!("Login: ");
    std::io::stdout().flush().ok();

    let mut input = String::new();
    std::io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::Config(format!("Failed to read login: {}", e)))?;

    let username = input.trim().to_string();
    if username.is_empty() {
        return Err(CliError::Config("Login is required.".to_string()));
    }
    Ok(username)
}

/// Prompt user for their password without echo
fn prompt_password(username: &str) -> Result<Zeroizing<String>, CliError> {
    let password = rpassword::prompt_password(format!("Password for {}: ", username))
        .map_err(|e| CliError::Config(format!("Failed to read password: {}", e)))?;
    if password.is_empty() {
        return Err(CliError::Config("Password is required.".to_string()));
    }
    Ok(Zeroizing::new(password))
}
