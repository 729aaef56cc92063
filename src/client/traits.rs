// ABOUTME: Caller-facing interface of the SMS gateway client using native async trait methods
// ABOUTME: Callers depend on this trait; DefaultClient is the TCP implementation

use crate::client::error::GatewayResult;

/// A logged-in session with an SMS gateway
///
/// All methods take `&self`: an implementation is shared between tasks and
/// enforces the one-exchange-at-a-time rule internally.
pub trait SmsGateway {
    /// Whether the TCP connection is established
    fn is_connected(&self) -> bool;

    /// Whether the login handshake succeeded on the current connection
    fn is_logged(&self) -> bool;

    /// Connect (with retries) if needed, then log in if needed.
    ///
    /// A login rejected by the gateway is not an error: it is logged and
    /// `is_logged()` stays false. Failing to open the socket at all, or a
    /// malformed or missing login response, is an error.
    async fn try_connect(&self) -> GatewayResult<()>;

    /// Send `message` to `phone`.
    ///
    /// Returns `Ok(true)` when the gateway accepts the message and
    /// `Ok(false)` when it rejects it. Invalid arguments and wrong client
    /// state are reported as errors before any I/O.
    async fn send(&self, phone: &str, message: &str) -> GatewayResult<bool>;

    /// Release the connection and reset all state. Safe to call repeatedly.
    async fn close(&self);
}
