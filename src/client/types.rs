// ABOUTME: Connection options for the SMS gateway client with defaults and validation
// ABOUTME: Immutable once a client is built; the retry policy is derived from them

use crate::client::error::{GatewayError, GatewayResult};
use crate::client::retry::{
    DEFAULT_MAX_RETRY_LIMIT, DEFAULT_RETRY_BACKOFF, RetryMode, RetryPolicy,
};
use crate::codec::REQUEST_SET_LEN;
use crate::datatypes::LoginRequest;
use std::fmt;
use std::time::Duration;

/// Default bound for opening the socket and for each response wait
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(3000);

/// Gateway address, credentials and timing for one client instance
///
/// # Example
///
/// ```rust
/// use smsgw::client::{ConnectionOptions, RetryMode};
/// use std::time::Duration;
///
/// let options = ConnectionOptions::new("sms.example.com", 8000, "account", "password")
///     .with_max_retry_limit(2)
///     .with_response_timeout(Duration::from_secs(5))
///     .with_retry_mode(RetryMode::Bounded);
///
/// assert!(options.validate().is_ok());
/// assert_eq!(options.address(), "sms.example.com:8000");
/// ```
#[derive(Clone)]
pub struct ConnectionOptions {
    pub host: String,
    pub port: u16,
    pub account: String,
    pub password: String,
    /// Connect attempt limit; `None` means [`DEFAULT_MAX_RETRY_LIMIT`]
    pub max_retry_limit: Option<u32>,
    /// Bound for a single TCP connect attempt
    pub connect_timeout: Duration,
    /// Bound for each login or send response
    pub response_timeout: Duration,
    /// Base delay between connect attempts
    pub retry_backoff: Duration,
    pub retry_mode: RetryMode,
}

impl ConnectionOptions {
    pub fn new(
        host: impl Into<String>,
        port: u16,
        account: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            account: account.into(),
            password: password.into(),
            max_retry_limit: None,
            connect_timeout: DEFAULT_TIMEOUT,
            response_timeout: DEFAULT_TIMEOUT,
            retry_backoff: DEFAULT_RETRY_BACKOFF,
            retry_mode: RetryMode::default(),
        }
    }

    pub fn with_max_retry_limit(mut self, limit: u32) -> Self {
        self.max_retry_limit = Some(limit);
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_response_timeout(mut self, timeout: Duration) -> Self {
        self.response_timeout = timeout;
        self
    }

    pub fn with_retry_backoff(mut self, backoff: Duration) -> Self {
        self.retry_backoff = backoff;
        self
    }

    pub fn with_retry_mode(mut self, mode: RetryMode) -> Self {
        self.retry_mode = mode;
        self
    }

    /// `host:port`
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_retry_limit.unwrap_or(DEFAULT_MAX_RETRY_LIMIT))
            .with_backoff(self.retry_backoff)
            .with_mode(self.retry_mode)
    }

    /// Check the options can produce a well-formed login frame
    pub fn validate(&self) -> GatewayResult<()> {
        if self.host.trim().is_empty() {
            return Err(GatewayError::InvalidOptions("host is empty".into()));
        }

        for (name, value) in [("account", &self.account), ("password", &self.password)] {
            if value.is_empty() {
                return Err(GatewayError::InvalidOptions(format!("{name} is empty")));
            }
            if !value.is_ascii() || value.contains('\0') {
                return Err(GatewayError::InvalidOptions(format!(
                    "{name} must be ASCII without NUL characters"
                )));
            }
        }

        let set_len = LoginRequest::new(self.account.as_str(), self.password.as_str())
            .set_field()
            .len();
        if set_len > REQUEST_SET_LEN {
            return Err(GatewayError::InvalidOptions(format!(
                "account and password take {set_len} bytes, the set field holds {REQUEST_SET_LEN}"
            )));
        }

        if self.connect_timeout.is_zero() || self.response_timeout.is_zero() {
            return Err(GatewayError::InvalidOptions("timeouts must be non-zero".into()));
        }

        Ok(())
    }
}

impl fmt::Debug for ConnectionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionOptions")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("account", &self.account)
            .field("password", &"<redacted>")
            .field("max_retry_limit", &self.max_retry_limit)
            .field("connect_timeout", &self.connect_timeout)
            .field("response_timeout", &self.response_timeout)
            .field("retry_backoff", &self.retry_backoff)
            .field("retry_mode", &self.retry_mode)
            .finish()
    }
}
