//! Decoding of the terse wire values into typed account fields

use crate::error::TenetError;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::fmt;
use std::str::FromStr;

const BYTES_PER_MEGABYTE: u64 = 1024 * 1024;

/// Administrative state of the account (`lsstate`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountState {
    /// Account in good standing (`n`)
    Normal,
    /// Account locked (`l`)
    Locked,
    /// Any other code
    Warning,
}

impl AccountState {
    /// Map a single-letter state code, case-insensitively
    ///
    /// Every code other than `n` and `l` is reported as [`AccountState::Warning`].
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "n" => AccountState::Normal,
            "l" => AccountState::Locked,
            _ => AccountState::Warning,
        }
    }

    /// Human-readable label
    pub fn as_str(self) -> &'static str {
        match self {
            AccountState::Normal => "Normal",
            AccountState::Locked => "Locked",
            AccountState::Warning => "Warning",
        }
    }
}

impl fmt::Display for AccountState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State of the bonus-traffic feature (`bonus`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BonusState {
    /// Bonus traffic is switched on
    Enabled,
    /// Bonus traffic is switched off
    Disabled,
    /// Bonus traffic is exhausted for the current period
    Ended,
}

/// Wire labels of [`BonusState`], compared case-insensitively
const BONUS_STATES: [(&str, BonusState); 3] = [
    ("ON", BonusState::Enabled),
    ("OFF", BonusState::Disabled),
    ("END", BonusState::Ended),
];

impl BonusState {
    /// Map a wire label, returning `None` for anything unrecognized
    pub fn from_wire(value: &str) -> Option<Self> {
        let value = value.trim();
        BONUS_STATES
            .iter()
            .find(|(label, _)| label.eq_ignore_ascii_case(value))
            .map(|(_, state)| *state)
    }

    /// Human-readable label
    pub fn as_str(self) -> &'static str {
        match self {
            BonusState::Enabled => "Enabled",
            BonusState::Disabled => "Disabled",
            BonusState::Ended => "Ended",
        }
    }
}

impl fmt::Display for BonusState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `true` iff the value is `ON`, ignoring case
pub fn decode_switch(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("ON")
}

/// `true` iff the value is `YES`, ignoring case
pub fn decode_yes(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("YES")
}

/// Parse a decimal that may use either `.` or `,` as separator
fn parse_localized(field: &'static str, value: &str) -> Result<Decimal, TenetError> {
    let normalized = value.trim().replace(',', ".");
    Decimal::from_str(&normalized).map_err(|_| TenetError::InvalidField {
        field,
        value: value.to_string(),
    })
}

/// Decode the balance into a two-digit fixed-point amount
///
/// Values with more precision are rounded half-to-even; values with less are
/// padded so the result always displays with two fractional digits.
///
/// ```
/// use tenet_client::decode_balance;
///
/// assert_eq!(decode_balance("1234,56").unwrap().to_string(), "1234.56");
/// assert_eq!(decode_balance("-7").unwrap().to_string(), "-7.00");
/// ```
pub fn decode_balance(value: &str) -> Result<Decimal, TenetError> {
    let mut amount = parse_localized("saldo", value)?.round_dp(2);
    amount.rescale(2);
    Ok(amount)
}

/// Decode remaining bonus traffic, given in megabytes, into bytes
///
/// Fractions of a byte are truncated. Negative quantities are rejected.
pub fn decode_megabytes(value: &str) -> Result<u64, TenetError> {
    let invalid = || TenetError::InvalidField {
        field: "rest",
        value: value.to_string(),
    };

    let megabytes = parse_localized("rest", value)?;
    megabytes
        .checked_mul(Decimal::from(BYTES_PER_MEGABYTE))
        .and_then(|bytes| bytes.trunc().to_u64())
        .ok_or_else(invalid)
}
