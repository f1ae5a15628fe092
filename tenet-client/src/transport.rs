//! Blocking HTTP transport for the portal endpoints

use crate::error::TenetError;
use std::time::Duration;

/// Value of the `User-Agent` header sent with every request
pub const USER_AGENT: &str = "TenetAPI/1.0";

/// Fixed per-request timeout
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Fixed API endpoints, relative to the portal's base URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Account id, state, balance and tariff
    AccountState,
    /// Bonus-traffic state and remaining quantity
    BonusCheck,
    /// Flip the bonus-traffic switch
    BonusSwitch,
}

impl Endpoint {
    /// Path of the endpoint on the portal host
    pub const fn path(self) -> &'static str {
        match self {
            Endpoint::AccountState => "utl/!gadgapi.ls_state_evpkt",
            Endpoint::BonusCheck => "utl/!gadgapi.ev_bonus_check",
            Endpoint::BonusSwitch => "utl/!gadgapi.ev_bonus_switch",
        }
    }
}

/// HTTP session owned by one account
#[derive(Debug)]
pub(crate) struct Transport {
    client: reqwest::blocking::Client,
    base_url: reqwest::Url,
}

impl Transport {
    /// Build the session with rustls, the fixed timeout and the client header
    ///
    /// The base URL is treated as a directory: a missing trailing `/` is
    /// added so endpoint paths extend it rather than replace its last segment.
    pub fn new(mut base_url: reqwest::Url) -> Result<Self, TenetError> {
        if base_url.cannot_be_a_base() {
            return Err(TenetError::InvalidUrl(format!(
                "{} cannot be used as a base URL",
                base_url
            )));
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = reqwest::blocking::Client::builder()
            .use_rustls_tls()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| TenetError::ClientInit(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &reqwest::Url {
        &self.base_url
    }

    fn url(&self, endpoint: Endpoint) -> Result<reqwest::Url, TenetError> {
        self.base_url
            .join(endpoint.path())
            .map_err(|e| TenetError::InvalidUrl(format!("cannot build endpoint URL: {}", e)))
    }

    /// POST a form to an endpoint and return the raw body
    ///
    /// The current Unix time is appended as `t` on every request.
    ///
    /// # Errors
    ///
    /// Returns `TenetError::BadRequest` on connection failure, timeout or a
    /// non-2xx status.
    pub fn post(&self, endpoint: Endpoint, form: &[(&str, &str)]) -> Result<Vec<u8>, TenetError> {
        let url = self.url(endpoint)?;
        let timestamp = chrono::Utc::now().timestamp().to_string();

        let mut payload: Vec<(&str, &str)> = form.to_vec();
        payload.push(("t", timestamp.as_str()));

        tracing::debug!(?endpoint, %url, "posting request");

        let response = self
            .client
            .post(url)
            .form(&payload)
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(TenetError::BadRequest)?;

        let body = response.bytes().map_err(TenetError::BadRequest)?;
        tracing::debug!(?endpoint, bytes = body.len(), "received response");

        Ok(body.to_vec())
    }
}
