//! Basic usage example for the Tenet client
//!
//! This example demonstrates how to:
//! - Create an account from a password or a pre-computed hash
//! - Refresh the account and bonus state
//! - Toggle bonus traffic
//!
//! Note: This example requires real portal credentials to run.

use tenet_client::{Account, ToggleOutcome, format_size};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let username = std::env::var("TENET_USERNAME").expect("TENET_USERNAME not set");
    let password = std::env::var("TENET_PASSWORD").expect("TENET_PASSWORD not set");

    let mut account = Account::new(&username, &password)?;

    println!("Refreshing account {}...", account.username());
    account.update()?;

    println!("Account id: {}", account.account_id().unwrap_or("-"));
    if let Some(state) = account.state() {
        println!("State:      {}", state);
    }
    if let Some(balance) = account.balance() {
        println!("Balance:    {}", balance);
    }
    println!("Tariff:     {}", account.tariff_plan().unwrap_or("-"));
    if let Some(bonus) = account.bonus_state() {
        println!("Bonus:      {}", bonus);
    }
    if let Some(rest) = account.bonus_remaining() {
        println!("Bonus left: {}", format_size(rest));
    }

    if std::env::args().any(|arg| arg == "--toggle") {
        match account.toggle_bonus()? {
            ToggleOutcome::Switched => {
                println!("✓ Bonus switched, now {:?}", account.bonus_state());
            }
            ToggleOutcome::BonusExhausted => {
                println!("ℹ Bonus traffic is exhausted, nothing to switch");
            }
        }
    }

    Ok(())
}
