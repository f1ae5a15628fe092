//! Tenet Portal Client Library
//!
//! This library talks to the stats.tenet.ua subscriber portal: it fetches the
//! account and bonus-traffic status of a subscriber and can toggle the
//! bonus-traffic feature.
//!
//! # Features
//!
//! - Account state, balance, tariff plan and "Good Day" flag
//! - Bonus-traffic state and remaining quantity (in bytes)
//! - Bonus-traffic toggle that tolerates the server's exhausted-traffic refusal
//! - Secure TLS using rustls (no OpenSSL dependencies)
//! - Blocking synchronous API with a fixed 5 second timeout
//! - Well-typed errors using thiserror
//!
//! # Example
//!
//! ```no_run
//! use tenet_client::{Account, ToggleOutcome, format_size};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut account = Account::new("login", "secret")?;
//! account.update()?;
//!
//! println!("State: {:?}", account.state());
//! if let Some(rest) = account.bonus_remaining() {
//!     println!("Bonus left: {}", format_size(rest));
//! }
//!
//! match account.toggle_bonus()? {
//!     ToggleOutcome::Switched => println!("Bonus now {:?}", account.bonus_state()),
//!     ToggleOutcome::BonusExhausted => println!("No bonus traffic left"),
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod fields;
mod hasher;
mod parser;
mod size;
mod transport;

pub use client::{Account, AccountBuilder, DEFAULT_BASE_URL, ToggleOutcome};
pub use error::TenetError;
pub use fields::{
    AccountState, BonusState, decode_balance, decode_megabytes, decode_switch, decode_yes,
};
pub use hasher::password_to_hash;
pub use parser::{ResponseFields, UNKNOWN_ERROR, parse_response};
pub use rust_decimal::Decimal;
pub use size::format_size;
pub use transport::{Endpoint, REQUEST_TIMEOUT, USER_AGENT};
