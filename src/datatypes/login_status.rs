// ABOUTME: Return codes the gateway sends in reply to a login request
// ABOUTME: Maps the raw retCode byte to typed values with descriptions for logging

use num_enum::TryFromPrimitive;
use std::fmt;

/// The retCode of a login response. Only `Success` opens the session.
#[derive(TryFromPrimitive)]
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoginStatus {
    /// Account and password accepted
    Success = 0,
    /// Wrong password
    PasswordError = 1,
    /// The account does not exist
    AccountNotFound = 2,
    /// Over the maximum allowed number of connections
    OverConnectionLimit = 3,
    /// The account is not in a usable state
    AccountStatusError = 4,
    /// The gateway failed to load the account data
    AccountDataError = 5,
    /// The gateway failed to load the password data
    PasswordDataError = 6,
    /// Gateway system error, try again later
    SystemError = 7,
}

impl LoginStatus {
    pub fn description(&self) -> &'static str {
        match self {
            LoginStatus::Success => "login accepted",
            LoginStatus::PasswordError => "password error",
            LoginStatus::AccountNotFound => "account does not exist",
            LoginStatus::OverConnectionLimit => "over the maximum allowed connections",
            LoginStatus::AccountStatusError => "account status not correct",
            LoginStatus::AccountDataError => "failed to get account data",
            LoginStatus::PasswordDataError => "failed to get password data",
            LoginStatus::SystemError => "system error, try again later",
        }
    }
}

impl fmt::Display for LoginStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.description(), *self as u8)
    }
}
