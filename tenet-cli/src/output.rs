//! Output formatting for account status

use tenet_client::{Account, AccountState, BonusState, Decimal, ToggleOutcome, format_size};

/// Printable copy of an account's fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusView {
    pub account_id: Option<String>,
    pub state: Option<AccountState>,
    pub enabled: Option<bool>,
    pub balance: Option<Decimal>,
    pub tariff_plan: Option<String>,
    pub good_day_active: Option<bool>,
    pub bonus_state: Option<BonusState>,
    pub bonus_remaining: Option<u64>,
}

impl From<&Account> for StatusView {
    fn from(account: &Account) -> Self {
        Self {
            account_id: account.account_id().map(str::to_string),
            state: account.state(),
            enabled: account.enabled(),
            balance: account.balance(),
            tariff_plan: account.tariff_plan().map(str::to_string),
            good_day_active: account.good_day_active(),
            bonus_state: account.bonus_state(),
            bonus_remaining: account.bonus_remaining(),
        }
    }
}

/// Output formatter for account status
pub struct OutputFormatter {
    quiet: bool,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Render the full account status
    pub fn format_status(&self, view: &StatusView) -> String {
        if self.quiet {
            return or_dash(view.balance.map(|b| b.to_string()));
        }

        let mut lines = vec![
            format!("Account:    {}", or_dash(view.account_id.clone())),
            format!("State:      {}", or_dash(view.state.map(|s| s.to_string()))),
            format!("Enabled:    {}", or_dash(view.enabled.map(yes_no))),
            format!("Balance:    {}", or_dash(view.balance.map(|b| b.to_string()))),
            format!("Tariff:     {}", or_dash(view.tariff_plan.clone())),
            format!("Good Day:   {}", or_dash(view.good_day_active.map(yes_no))),
        ];
        lines.extend(self.bonus_lines(view));
        lines.join("\n")
    }

    /// Render the bonus status after a toggle
    pub fn format_toggle(&self, view: &StatusView, outcome: ToggleOutcome) -> String {
        if self.quiet {
            return or_dash(view.bonus_state.map(|s| s.to_string()));
        }

        let headline = match outcome {
            ToggleOutcome::Switched => "✓ Bonus switched".to_string(),
            ToggleOutcome::BonusExhausted => {
                "ℹ Bonus traffic is exhausted, switch left unchanged".to_string()
            }
        };

        let mut lines = vec![headline];
        lines.extend(self.bonus_lines(view));
        lines.join("\n")
    }

    fn bonus_lines(&self, view: &StatusView) -> [String; 2] {
        [
            format!("Bonus:      {}", or_dash(view.bonus_state.map(|s| s.to_string()))),
            format!("Bonus left: {}", or_dash(view.bonus_remaining.map(format_size))),
        ]
    }
}

fn yes_no(value: bool) -> String {
    let text = if value { "yes" } else { "no" };
    text.to_string()
}

fn or_dash(value: Option<String>) -> String {
    value.unwrap_or_else(|| "-".to_string())
}
