// ABOUTME: Validated local mobile number (09 followed by eight digits)
// ABOUTME: Send frames are only built from numbers that pass this check

use std::fmt;
use std::str::FromStr;

const PREFIX: &str = "09";
const LENGTH: usize = 10;

/// A mobile number of the form `09########`
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PhoneNumberError {
    #[error("phone number is empty")]
    Empty,
    #[error("phone number '{0}' does not match 09########")]
    InvalidFormat(String),
}

impl PhoneNumber {
    pub fn parse(value: &str) -> Result<Self, PhoneNumberError> {
        if value.is_empty() {
            return Err(PhoneNumberError::Empty);
        }

        let valid = value.len() == LENGTH
            && value.starts_with(PREFIX)
            && value.bytes().all(|b| b.is_ascii_digit());

        if !valid {
            return Err(PhoneNumberError::InvalidFormat(value.to_string()));
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for PhoneNumber {
    type Err = PhoneNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PhoneNumber(\"{}\")", self.0)
    }
}
