// ABOUTME: Error types for the SMS gateway client covering transport, framing and precondition failures
// ABOUTME: Gateway rejections are not errors; they surface as return values and log lines

use crate::codec::CodecError;
use crate::datatypes::PhoneNumberError;
use std::io;
use std::time::Duration;
use thiserror::Error;

/// Errors returned by SMS gateway client operations
#[derive(Debug, Error)]
pub enum GatewayError {
    /// I/O error on an established connection
    #[error("Connection error: {0}")]
    Connection(#[from] io::Error),

    /// Every connect attempt allowed by the retry policy failed
    #[error("Failed to connect to SMS gateway after {attempts} attempt(s): {source}")]
    ConnectFailed {
        attempts: u32,
        #[source]
        source: io::Error,
    },

    /// The gateway closed the connection
    #[error("Connection closed by SMS gateway")]
    ConnectionClosed,

    /// No response frame arrived in time
    #[error("No response from SMS gateway within {0:?}")]
    Timeout(Duration),

    /// Malformed response frame
    #[error("Frame error: {0}")]
    Codec(#[from] CodecError),

    #[error("Parameter `phone` is empty")]
    EmptyPhone,

    #[error("Parameter `phone` is invalid: {0}")]
    InvalidPhone(String),

    #[error("Parameter `message` is empty")]
    EmptyMessage,

    /// No socket has been opened, or it was released by `close`
    #[error("Client is not connected to an SMS gateway socket")]
    NoSocket,

    #[error("Socket connection has ended")]
    NotConnected,

    #[error("Client is not logged in")]
    NotLoggedIn,

    #[error("Client is already sending another message")]
    SendInProgress,

    #[error("Invalid connection options: {0}")]
    InvalidOptions(String),
}

/// Result type alias for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

impl GatewayError {
    /// True for errors raised by argument or state checks before any I/O
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            GatewayError::EmptyPhone
                | GatewayError::InvalidPhone(_)
                | GatewayError::EmptyMessage
                | GatewayError::NoSocket
                | GatewayError::NotConnected
                | GatewayError::NotLoggedIn
                | GatewayError::SendInProgress
                | GatewayError::InvalidOptions(_)
        )
    }

    /// True when the connection is unusable and must be re-established
    pub fn is_disconnect(&self) -> bool {
        matches!(
            self,
            GatewayError::Connection(_) | GatewayError::ConnectionClosed
        )
    }
}

impl From<PhoneNumberError> for GatewayError {
    fn from(err: PhoneNumberError) -> Self {
        match err {
            PhoneNumberError::Empty => GatewayError::EmptyPhone,
            PhoneNumberError::InvalidFormat(phone) => GatewayError::InvalidPhone(phone),
        }
    }
}
