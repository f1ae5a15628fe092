//! Account façade over the Tenet portal API

use crate::error::TenetError;
use crate::fields::{
    AccountState, BonusState, decode_balance, decode_megabytes, decode_switch, decode_yes,
};
use crate::hasher::password_to_hash;
use crate::parser::{ResponseFields, UNKNOWN_ERROR, parse_response};
use crate::transport::{Endpoint, Transport};
use rust_decimal::Decimal;
use std::fmt;
use zeroize::Zeroizing;

/// Default portal host
pub const DEFAULT_BASE_URL: &str = "https://stats.tenet.ua";

/// Result of a bonus toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The switch was flipped and the bonus state re-read
    Switched,
    /// The server refused because bonus traffic is exhausted; nothing changed
    BonusExhausted,
}

/// Decoded account-state response
#[derive(Debug, Clone, PartialEq, Eq)]
struct AccountSnapshot {
    account_id: Option<String>,
    state: AccountState,
    enabled: bool,
    balance: Decimal,
    tariff_plan: Option<String>,
    good_day_active: bool,
}

impl AccountSnapshot {
    fn decode(fields: &ResponseFields) -> Result<Self, TenetError> {
        Ok(Self {
            account_id: fields.get("LS").map(str::to_string),
            state: AccountState::from_code(fields.require("lsstate")?),
            enabled: decode_switch(fields.require("usrstate")?),
            balance: decode_balance(fields.require("saldo")?)?,
            tariff_plan: fields.get("evpkt").map(str::to_string),
            good_day_active: decode_yes(fields.require("good_day")?),
        })
    }
}

/// Decoded bonus-check response
#[derive(Debug, Clone, PartialEq, Eq)]
struct BonusSnapshot {
    state: Option<BonusState>,
    remaining: u64,
}

impl BonusSnapshot {
    fn decode(fields: &ResponseFields) -> Result<Self, TenetError> {
        let raw_state = fields.require("bonus")?;
        let state = BonusState::from_wire(raw_state);
        if state.is_none() {
            tracing::warn!(bonus = raw_state, "unrecognized bonus state, keeping previous");
        }

        Ok(Self {
            state,
            remaining: decode_megabytes(fields.require("rest")?)?,
        })
    }
}

/// A subscriber account on stats.tenet.ua
///
/// Holds the credentials and the last-known account fields. Every field is
/// `None` until the first successful [`update`](Account::update).
///
/// # Example
///
/// ```no_run
/// use tenet_client::Account;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut account = Account::new("login", "secret")?;
/// account.update()?;
///
/// if let Some(balance) = account.balance() {
///     println!("Balance: {}", balance);
/// }
/// # Ok(())
/// # }
/// ```
pub struct Account {
    transport: Transport,
    username: String,
    password_hash: Zeroizing<String>,
    account_id: Option<String>,
    state: Option<AccountState>,
    enabled: Option<bool>,
    balance: Option<Decimal>,
    tariff_plan: Option<String>,
    good_day_active: Option<bool>,
    bonus_state: Option<BonusState>,
    bonus_remaining: Option<u64>,
}

impl Account {
    /// Create an account from a username and plaintext password
    ///
    /// # Errors
    ///
    /// Returns `TenetError::Validation` if either value is empty.
    pub fn new(username: &str, password: &str) -> Result<Self, TenetError> {
        Self::builder().username(username).password(password).build()
    }

    /// Create an account from a username and the MD5 hash of the password
    ///
    /// # Errors
    ///
    /// Returns `TenetError::Validation` if either value is empty.
    pub fn with_password_hash(username: &str, password_hash: &str) -> Result<Self, TenetError> {
        Self::builder()
            .username(username)
            .password_hash(password_hash)
            .build()
    }

    /// Create a builder for configuring an account
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tenet_client::Account;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let account = Account::builder()
    ///     .username("login")
    ///     .password_hash("5f4dcc3b5aa765d61d8327deb882cf99")
    ///     .base_url("http://localhost:1234")?
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn builder() -> AccountBuilder {
        AccountBuilder::new()
    }

    fn credentials(&self) -> [(&str, &str); 2] {
        [
            ("login", self.username.as_str()),
            ("md5pass", self.password_hash.as_str()),
        ]
    }

    fn fetch(&self, endpoint: Endpoint) -> Result<ResponseFields, TenetError> {
        let body = self.transport.post(endpoint, &self.credentials())?;
        parse_response(&body)
    }

    fn check_account(&mut self) -> Result<(), TenetError> {
        let fields = self.fetch(Endpoint::AccountState)?;
        let snapshot = AccountSnapshot::decode(&fields)?;
        tracing::debug!(?snapshot, "account state decoded");

        self.account_id = snapshot.account_id;
        self.state = Some(snapshot.state);
        self.enabled = Some(snapshot.enabled);
        self.balance = Some(snapshot.balance);
        self.tariff_plan = snapshot.tariff_plan;
        self.good_day_active = Some(snapshot.good_day_active);
        Ok(())
    }

    fn check_bonus(&mut self) -> Result<(), TenetError> {
        let fields = self.fetch(Endpoint::BonusCheck)?;
        let snapshot = BonusSnapshot::decode(&fields)?;
        tracing::debug!(?snapshot, "bonus state decoded");

        if let Some(state) = snapshot.state {
            self.bonus_state = Some(state);
        }
        self.bonus_remaining = Some(snapshot.remaining);
        Ok(())
    }

    /// Refresh all fields from the account-state and bonus-check endpoints
    ///
    /// The two requests run in order. If the first fails, the second is not
    /// attempted; if the second fails, fields written by the first are kept.
    ///
    /// # Errors
    ///
    /// * `TenetError::BadRequest` - Network error, timeout or HTTP error status
    /// * `TenetError::ServerError` - The API returned a non-OK result
    /// * `TenetError::Xml`, `MissingField`, `InvalidField` - Undecodable response
    pub fn update(&mut self) -> Result<(), TenetError> {
        self.check_account()?;
        self.check_bonus()
    }

    /// Flip the bonus-traffic switch and re-read the bonus state
    ///
    /// When bonus traffic is exhausted the server rejects the switch with its
    /// generic "Unknown error" result. That one failure is reported as
    /// [`ToggleOutcome::BonusExhausted`] and leaves every field untouched; any
    /// other failure is returned as an error.
    ///
    /// # Errors
    ///
    /// * `TenetError::BadRequest` - Network error, timeout or HTTP error status
    /// * `TenetError::ServerError` - Any rejection other than exhausted traffic,
    ///   or a failure of the follow-up bonus check
    pub fn toggle_bonus(&mut self) -> Result<ToggleOutcome, TenetError> {
        let body = self
            .transport
            .post(Endpoint::BonusSwitch, &self.credentials())?;
        let fields = ResponseFields::parse(&body)?;

        if !fields.is_ok() {
            let message = fields.error_message();
            if is_bonus_exhausted(&message) {
                tracing::info!(%message, "bonus switch refused, bonus traffic is exhausted");
                return Ok(ToggleOutcome::BonusExhausted);
            }
            return Err(TenetError::ServerError(message));
        }

        self.check_bonus()?;
        Ok(ToggleOutcome::Switched)
    }

    /// Login name used for authentication
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Base URL of the portal this account talks to
    pub fn base_url(&self) -> &reqwest::Url {
        self.transport.base_url()
    }

    /// Account identifier (`LS`)
    pub fn account_id(&self) -> Option<&str> {
        self.account_id.as_deref()
    }

    /// Administrative account state
    pub fn state(&self) -> Option<AccountState> {
        self.state
    }

    /// Whether the account is switched on
    pub fn enabled(&self) -> Option<bool> {
        self.enabled
    }

    /// Balance with two fractional digits
    pub fn balance(&self) -> Option<Decimal> {
        self.balance
    }

    /// Tariff plan name (`evpkt`)
    pub fn tariff_plan(&self) -> Option<&str> {
        self.tariff_plan.as_deref()
    }

    /// Whether the "Good Day" promotion is active
    pub fn good_day_active(&self) -> Option<bool> {
        self.good_day_active
    }

    /// State of the bonus-traffic feature
    pub fn bonus_state(&self) -> Option<BonusState> {
        self.bonus_state
    }

    /// Remaining bonus traffic in bytes
    pub fn bonus_remaining(&self) -> Option<u64> {
        self.bonus_remaining
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("base_url", &self.transport.base_url().as_str())
            .field("username", &self.username)
            .field("password_hash", &"<redacted>")
            .field("account_id", &self.account_id)
            .field("state", &self.state)
            .field("enabled", &self.enabled)
            .field("balance", &self.balance)
            .field("tariff_plan", &self.tariff_plan)
            .field("good_day_active", &self.good_day_active)
            .field("bonus_state", &self.bonus_state)
            .field("bonus_remaining", &self.bonus_remaining)
            .finish()
    }
}

/// The server's answer to disabling bonus traffic that has run out
fn is_bonus_exhausted(message: &str) -> bool {
    message.eq_ignore_ascii_case(UNKNOWN_ERROR)
}

/// Builder for configuring an [`Account`]
///
/// A username and either a password or its hash are required. When both a
/// password and a hash are set, the hash is used as-is.
#[derive(Default)]
pub struct AccountBuilder {
    username: Option<String>,
    password: Option<Zeroizing<String>>,
    password_hash: Option<Zeroizing<String>>,
    base_url: Option<reqwest::Url>,
}

impl AccountBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the portal login
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set the plaintext password; it is hashed at build time
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(Zeroizing::new(password.into()));
        self
    }

    /// Set a pre-computed MD5 hash of the password
    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = Some(Zeroizing::new(password_hash.into()));
        self
    }

    /// Set a custom base URL for the portal
    ///
    /// This is useful for testing with mock servers. Endpoint paths are
    /// appended below the URL's path, so `http://host/proxy` posts to
    /// `http://host/proxy/utl/...`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn base_url(mut self, url: impl reqwest::IntoUrl) -> Result<Self, TenetError> {
        let url = url
            .into_url()
            .map_err(|e| TenetError::InvalidUrl(e.to_string()))?;
        self.base_url = Some(url);
        Ok(self)
    }

    /// Build the account
    ///
    /// # Errors
    ///
    /// * `TenetError::Validation` - Username missing, or neither password nor hash given
    /// * `TenetError::InvalidUrl` - The base URL cannot carry endpoint paths
    /// * `TenetError::ClientInit` - The HTTP client cannot be initialized
    pub fn build(self) -> Result<Account, TenetError> {
        let username = self
            .username
            .filter(|name| !name.is_empty())
            .ok_or_else(usage_error)?;

        let password_hash = match (self.password_hash, self.password) {
            (Some(hash), _) if !hash.is_empty() => hash,
            (_, Some(password)) if !password.is_empty() => {
                Zeroizing::new(password_to_hash(&password))
            }
            _ => return Err(usage_error()),
        };

        let base_url = match self.base_url {
            Some(url) => url,
            None => reqwest::Url::parse(DEFAULT_BASE_URL)
                .map_err(|e| TenetError::ClientInit(e.to_string()))?,
        };

        Ok(Account {
            transport: Transport::new(base_url)?,
            username,
            password_hash,
            account_id: None,
            state: None,
            enabled: None,
            balance: None,
            tariff_plan: None,
            good_day_active: None,
            bonus_state: None,
            bonus_remaining: None,
        })
    }
}

fn usage_error() -> TenetError {
    TenetError::Validation(
        "a username and either a password or a password hash are required".to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Mock, ServerGuard};
    use proptest::prelude::*;

    const USERNAME: &str = "subscriber";
    const PASSWORD: &str = "password";
    const PASSWORD_HASH: &str = "5f4dcc3b5aa765d61d8327deb882cf99";

    const ACCOUNT_OK: &str = "<response><result>OK</result><LS>100200</LS>\
        <lsstate>N</lsstate><usrstate>ON</usrstate><saldo>1234,56</saldo>\
        <evpkt>Home 100</evpkt><good_day>yes</good_day></response>";
    const BONUS_ON: &str =
        "<response><result>OK</result><bonus>ON</bonus><rest>2</rest></response>";
    const BONUS_OFF: &str =
        "<response><result>OK</result><bonus>OFF</bonus><rest>1,5</rest></response>";

    fn account(server: &ServerGuard) -> Account {
        Account::builder()
            .username(USERNAME)
            .password(PASSWORD)
            .base_url(server.url())
            .unwrap()
            .build()
            .unwrap()
    }

    fn mock_endpoint(server: &mut ServerGuard, endpoint: Endpoint, body: &str) -> Mock {
        server
            .mock("POST", format!("/{}", endpoint.path()).as_str())
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("login".into(), USERNAME.into()),
                Matcher::UrlEncoded("md5pass".into(), PASSWORD_HASH.into()),
            ]))
            .with_status(200)
            .with_body(body)
            .expect(1)
            .create()
    }

    #[test]
    fn test_default_base_url() {
        let account = Account::new(USERNAME, PASSWORD).unwrap();
        assert_eq!(account.base_url().as_str(), "https://stats.tenet.ua/");
    }

    #[test]
    fn test_password_and_hash_build_the_same_credential() {
        let from_password = Account::new(USERNAME, PASSWORD).unwrap();
        let from_hash = Account::with_password_hash(USERNAME, PASSWORD_HASH).unwrap();
        assert_eq!(
            from_password.password_hash.as_str(),
            from_hash.password_hash.as_str()
        );
    }

    #[test]
    fn test_hash_wins_over_password() {
        let account = Account::builder()
            .username(USERNAME)
            .password("ignored")
            .password_hash(PASSWORD_HASH)
            .build()
            .unwrap();
        assert_eq!(account.password_hash.as_str(), PASSWORD_HASH);
    }

    #[test]
    fn test_missing_credentials_are_rejected() {
        let missing_secret = Account::builder().username(USERNAME).build();
        assert!(matches!(missing_secret, Err(TenetError::Validation(_))));

        let missing_username = Account::builder().password(PASSWORD).build();
        assert!(matches!(missing_username, Err(TenetError::Validation(_))));

        let empty_password = Account::new(USERNAME, "");
        assert!(matches!(empty_password, Err(TenetError::Validation(_))));

        let empty_username = Account::with_password_hash("", PASSWORD_HASH);
        assert!(matches!(empty_username, Err(TenetError::Validation(_))));
    }

    #[test]
    fn test_invalid_base_url() {
        let result = Account::builder().base_url("not a valid url");
        assert!(matches!(result, Err(TenetError::InvalidUrl(_))));
    }

    #[test]
    fn test_base_url_path_is_kept() {
        let account = Account::builder()
            .username(USERNAME)
            .password(PASSWORD)
            .base_url("http://portal.local/proxy")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(account.base_url().as_str(), "http://portal.local/proxy/");
    }

    #[test]
    fn test_id_and_tariff_are_passed_through() {
        let mut server = mockito::Server::new();
        let _account_mock = mock_endpoint(
            &mut server,
            Endpoint::AccountState,
            "<response><result>OK</result><LS> 100200 </LS><lsstate>n</lsstate>\
             <usrstate>on</usrstate><saldo>1</saldo><evpkt> Home 100 </evpkt>\
             <good_day>no</good_day></response>",
        );
        let _bonus_mock = mock_endpoint(&mut server, Endpoint::BonusCheck, BONUS_ON);

        let mut account = account(&server);
        account.update().unwrap();

        assert_eq!(account.account_id(), Some(" 100200 "));
        assert_eq!(account.tariff_plan(), Some(" Home 100 "));
    }

    #[test]
    fn test_toggle_failure_with_nested_detail_is_still_exhausted() {
        let mut server = mockito::Server::new();
        let _switch_mock = mock_endpoint(
            &mut server,
            Endpoint::BonusSwitch,
            "<response><result>FAIL</result><error_desc>Unknown error</error_desc>\
             <detail><code>17</code></detail></response>",
        );

        let mut account = account(&server);
        assert_eq!(
            account.toggle_bonus().unwrap(),
            ToggleOutcome::BonusExhausted
        );
    }

    #[test]
    fn test_debug_redacts_hash() {
        let account = Account::with_password_hash(USERNAME, PASSWORD_HASH).unwrap();
        let debug = format!("{:?}", account);
        assert!(debug.contains(USERNAME));
        assert!(!debug.contains(PASSWORD_HASH));
    }

    #[test]
    fn test_fields_unset_before_update() {
        let account = Account::new(USERNAME, PASSWORD).unwrap();
        assert_eq!(account.account_id(), None);
        assert_eq!(account.state(), None);
        assert_eq!(account.enabled(), None);
        assert_eq!(account.balance(), None);
        assert_eq!(account.tariff_plan(), None);
        assert_eq!(account.good_day_active(), None);
        assert_eq!(account.bonus_state(), None);
        assert_eq!(account.bonus_remaining(), None);
    }

    #[test]
    fn test_update_populates_fields() {
        let mut server = mockito::Server::new();
        let account_mock = mock_endpoint(&mut server, Endpoint::AccountState, ACCOUNT_OK);
        let bonus_mock = mock_endpoint(&mut server, Endpoint::BonusCheck, BONUS_ON);

        let mut account = account(&server);
        account.update().unwrap();

        assert_eq!(account.account_id(), Some("100200"));
        assert_eq!(account.state(), Some(AccountState::Normal));
        assert_eq!(account.enabled(), Some(true));
        assert_eq!(
            account.balance().map(|b| b.to_string()),
            Some("1234.56".to_string())
        );
        assert_eq!(account.tariff_plan(), Some("Home 100"));
        assert_eq!(account.good_day_active(), Some(true));
        assert_eq!(account.bonus_state(), Some(BonusState::Enabled));
        assert_eq!(account.bonus_remaining(), Some(2 * 1024 * 1024));

        account_mock.assert();
        bonus_mock.assert();
    }

    #[test]
    fn test_update_stops_after_account_failure() {
        let mut server = mockito::Server::new();
        let account_mock = mock_endpoint(
            &mut server,
            Endpoint::AccountState,
            "<response><result>FAIL</result><error_desc> Bad login </error_desc></response>",
        );
        let bonus_mock = server
            .mock("POST", format!("/{}", Endpoint::BonusCheck.path()).as_str())
            .expect(0)
            .create();

        let mut account = account(&server);
        match account.update() {
            Err(TenetError::ServerError(msg)) => assert_eq!(msg, "Bad login"),
            other => panic!("Expected ServerError, got {:?}", other),
        }
        assert_eq!(account.state(), None);

        account_mock.assert();
        bonus_mock.assert();
    }

    #[test]
    fn test_bonus_failure_keeps_account_fields() {
        let mut server = mockito::Server::new();
        let _account_mock = mock_endpoint(&mut server, Endpoint::AccountState, ACCOUNT_OK);
        let _bonus_mock = mock_endpoint(
            &mut server,
            Endpoint::BonusCheck,
            "<response><result>FAIL</result></response>",
        );

        let mut account = account(&server);
        match account.update() {
            Err(TenetError::ServerError(msg)) => assert_eq!(msg, "Unknown Error"),
            other => panic!("Expected ServerError, got {:?}", other),
        }
        assert_eq!(account.state(), Some(AccountState::Normal));
        assert_eq!(account.bonus_state(), None);
    }

    #[test]
    fn test_missing_required_field() {
        let mut server = mockito::Server::new();
        let _mock = mock_endpoint(
            &mut server,
            Endpoint::AccountState,
            "<response><result>OK</result><lsstate>n</lsstate></response>",
        );

        let mut account = account(&server);
        assert!(matches!(
            account.update(),
            Err(TenetError::MissingField("usrstate"))
        ));
        assert_eq!(account.state(), None);
    }

    #[test]
    fn test_unrecognized_bonus_state_keeps_previous() {
        let mut server = mockito::Server::new();
        let _account_mock = server
            .mock("POST", format!("/{}", Endpoint::AccountState.path()).as_str())
            .with_body(ACCOUNT_OK)
            .expect(2)
            .create();
        let first = mock_endpoint(&mut server, Endpoint::BonusCheck, BONUS_ON);

        let mut account = account(&server);
        account.update().unwrap();
        first.assert();
        first.remove();

        let _second = mock_endpoint(
            &mut server,
            Endpoint::BonusCheck,
            "<response><result>OK</result><bonus>MAYBE</bonus><rest>0</rest></response>",
        );
        account.update().unwrap();

        assert_eq!(account.bonus_state(), Some(BonusState::Enabled));
        assert_eq!(account.bonus_remaining(), Some(0));
    }

    #[test]
    fn test_toggle_refreshes_bonus_only() {
        let mut server = mockito::Server::new();
        let switch_mock = mock_endpoint(
            &mut server,
            Endpoint::BonusSwitch,
            "<response><result>OK</result></response>",
        );
        let bonus_mock = mock_endpoint(&mut server, Endpoint::BonusCheck, BONUS_OFF);
        let account_mock = server
            .mock("POST", format!("/{}", Endpoint::AccountState.path()).as_str())
            .expect(0)
            .create();

        let mut account = account(&server);
        let outcome = account.toggle_bonus().unwrap();

        assert_eq!(outcome, ToggleOutcome::Switched);
        assert_eq!(account.bonus_state(), Some(BonusState::Disabled));
        assert_eq!(account.bonus_remaining(), Some(1_572_864));
        assert_eq!(account.balance(), None);

        switch_mock.assert();
        bonus_mock.assert();
        account_mock.assert();
    }

    #[test]
    fn test_toggle_with_exhausted_bonus_is_a_no_op() {
        let mut server = mockito::Server::new();
        let _account_mock = mock_endpoint(&mut server, Endpoint::AccountState, ACCOUNT_OK);
        let bonus_mock = server
            .mock("POST", format!("/{}", Endpoint::BonusCheck.path()).as_str())
            .with_body("<response><result>OK</result><bonus>END</bonus><rest>0</rest></response>")
            .expect(1)
            .create();
        let switch_mock = mock_endpoint(
            &mut server,
            Endpoint::BonusSwitch,
            "<response><result>ERROR</result><error_desc>Unknown error</error_desc></response>",
        );

        let mut account = account(&server);
        account.update().unwrap();
        let outcome = account.toggle_bonus().unwrap();

        assert_eq!(outcome, ToggleOutcome::BonusExhausted);
        assert_eq!(account.bonus_state(), Some(BonusState::Ended));
        assert_eq!(account.bonus_remaining(), Some(0));

        switch_mock.assert();
        bonus_mock.assert();
    }

    #[test]
    fn test_toggle_without_description_is_exhausted() {
        let mut server = mockito::Server::new();
        let _switch_mock = mock_endpoint(
            &mut server,
            Endpoint::BonusSwitch,
            "<response><result>FAIL</result></response>",
        );

        let mut account = account(&server);
        assert_eq!(
            account.toggle_bonus().unwrap(),
            ToggleOutcome::BonusExhausted
        );
    }

    #[test]
    fn test_toggle_propagates_other_server_errors() {
        let mut server = mockito::Server::new();
        let _switch_mock = mock_endpoint(
            &mut server,
            Endpoint::BonusSwitch,
            "<response><result>FAIL</result><error_desc>Session expired</error_desc></response>",
        );

        let mut account = account(&server);
        match account.toggle_bonus() {
            Err(TenetError::ServerError(msg)) => assert_eq!(msg, "Session expired"),
            other => panic!("Expected ServerError, got {:?}", other),
        }
    }

    #[test]
    fn test_toggle_propagates_transport_errors() {
        let mut server = mockito::Server::new();
        let _switch_mock = server
            .mock("POST", format!("/{}", Endpoint::BonusSwitch.path()).as_str())
            .with_status(500)
            .create();

        let mut account = account(&server);
        let err = account.toggle_bonus().unwrap_err();
        assert_eq!(err.status().map(|s| s.as_u16()), Some(500));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10))]

        #[test]
        fn prop_update_decodes_state_codes(
            code in "[a-zA-Z]",
            saldo_units in 0u32..100_000,
            saldo_cents in 0u32..100,
            separator in prop::sample::select(vec![".", ","]),
        ) {
            let mut server = mockito::Server::new();
            let body = format!(
                "<response><result>OK</result><LS>1</LS><lsstate>{}</lsstate>\
                 <usrstate>off</usrstate><saldo>{}{}{:02}</saldo><evpkt>Plan</evpkt>\
                 <good_day>no</good_day></response>",
                code, saldo_units, separator, saldo_cents
            );
            let _account_mock = mock_endpoint(&mut server, Endpoint::AccountState, &body);
            let _bonus_mock = mock_endpoint(&mut server, Endpoint::BonusCheck, BONUS_ON);

            let mut account = account(&server);
            prop_assert!(account.update().is_ok());

            let expected_state = match code.to_ascii_lowercase().as_str() {
                "n" => AccountState::Normal,
                "l" => AccountState::Locked,
                _ => AccountState::Warning,
            };
            prop_assert_eq!(account.state(), Some(expected_state));
            prop_assert_eq!(account.enabled(), Some(false));
            prop_assert_eq!(account.good_day_active(), Some(false));
            prop_assert_eq!(
                account.balance().map(|b| b.to_string()),
                Some(format!("{}.{:02}", saldo_units, saldo_cents))
            );
        }
    }
}
