// ABOUTME: Factory functions for creating SMS gateway clients from explicit options
// ABOUTME: Callers receive the client by value or behind the SmsGateway trait; there is no global registry

use crate::client::default::DefaultClient;
use crate::client::error::GatewayResult;
use crate::client::traits::SmsGateway;
use crate::client::types::ConnectionOptions;

/// Factory for SMS gateway clients
pub struct ClientBuilder;

impl ClientBuilder {
    /// Create a disconnected client. Call `try_connect` before sending.
    pub fn client(options: ConnectionOptions) -> GatewayResult<DefaultClient> {
        DefaultClient::new(options)
    }

    /// Create a client, connect and log in.
    ///
    /// The returned client may still be logged out if the gateway rejected
    /// the credentials; check `is_logged()`.
    pub async fn connect(options: ConnectionOptions) -> GatewayResult<impl SmsGateway> {
        let client = DefaultClient::new(options)?;
        client.try_connect().await?;
        Ok(client)
    }

    /// Connect with default timeouts and retry settings
    pub async fn quick_connect(
        host: impl Into<String>,
        port: u16,
        account: impl Into<String>,
        password: impl Into<String>,
    ) -> GatewayResult<impl SmsGateway> {
        Self::connect(ConnectionOptions::new(host, port, account, password)).await
    }
}
