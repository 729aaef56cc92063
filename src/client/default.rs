// ABOUTME: Default SMS gateway client: connection supervision, login handshake and single-flight sending
// ABOUTME: State flags are atomics and the socket sits behind an async mutex held per exchange

use crate::client::error::{GatewayError, GatewayResult};
use crate::client::retry::RetryPolicy;
use crate::client::traits::SmsGateway;
use crate::client::types::ConnectionOptions;
use crate::codec::{Decodable, Encodable};
use crate::connection::Connection;
use crate::datatypes::{GatewayResponse, LoginRequest, PhoneNumber, SendRequest};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::net::TcpStream;
use tokio::sync::Mutex;
use tokio::time;
use tracing::{debug, error, info, warn};

/// Session flags. Invariant: `logged_in` implies `connected`; `sending` is
/// only set while one send exchange is in flight.
#[derive(Debug, Default)]
struct ClientState {
    connected: AtomicBool,
    logged_in: AtomicBool,
    sending: AtomicBool,
}

impl ClientState {
    fn reset(&self) {
        self.logged_in.store(false, Ordering::SeqCst);
        self.connected.store(false, Ordering::SeqCst);
        self.sending.store(false, Ordering::SeqCst);
    }
}

/// Holds the `sending` flag for the duration of one send. Dropping it clears
/// the flag, including when the send future is dropped mid-exchange.
struct SendingGuard<'a>(&'a AtomicBool);

impl<'a> SendingGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| SendingGuard(flag))
    }
}

impl Drop for SendingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// TCP client for the SMS gateway protocol
///
/// Session states progress as:
///
/// ```text
/// DISCONNECTED → CONNECTED → LOGGED_IN (⇄ SENDING) → DISCONNECTED
/// ```
///
/// `try_connect` drives the first two transitions, `send` the transient
/// sending state, and `close` (or the gateway dropping the socket) returns
/// to disconnected.
///
/// Wrap it in an `Arc` to share one connection between tasks; a second
/// concurrent `send` is rejected with [`GatewayError::SendInProgress`].
#[derive(Debug)]
pub struct DefaultClient {
    options: ConnectionOptions,
    retry: RetryPolicy,
    connection: Mutex<Option<Connection>>,
    state: ClientState,
}

impl DefaultClient {
    /// Create a disconnected client. Fails if the options are invalid.
    pub fn new(options: ConnectionOptions) -> GatewayResult<Self> {
        options.validate()?;
        let retry = options.retry_policy();

        Ok(DefaultClient {
            options,
            retry,
            connection: Mutex::new(None),
            state: ClientState::default(),
        })
    }

    pub fn options(&self) -> &ConnectionOptions {
        &self.options
    }

    /// One bounded TCP connect attempt
    async fn open_socket(&self) -> io::Result<TcpStream> {
        let address = self.options.address();
        match time::timeout(self.options.connect_timeout, TcpStream::connect(&address)).await {
            Ok(result) => result,
            Err(_) => Err(io::Error::new(
                io::ErrorKind::TimedOut,
                format!(
                    "connect to {address} timed out after {:?}",
                    self.options.connect_timeout
                ),
            )),
        }
    }

    /// Establish the TCP connection, retrying per the retry policy
    async fn connect(&self) -> GatewayResult<()> {
        let mut slot = self.connection.lock().await;
        self.reap_closed(&mut slot);
        if self.state.connected.load(Ordering::SeqCst) && slot.is_some() {
            return Ok(());
        }

        let mut attempt = 1;
        loop {
            info!(
                address = %self.options.address(),
                attempt,
                "Connecting to SMS gateway"
            );

            match self.open_socket().await {
                Ok(socket) => {
                    *slot = Some(Connection::new(socket));
                    self.state.connected.store(true, Ordering::SeqCst);
                    info!(address = %self.options.address(), "Connected to SMS gateway");
                    return Ok(());
                }
                Err(e) => {
                    error!(attempt, error = %e, "Connecting to SMS gateway failed");

                    if !self.retry.should_retry(attempt) {
                        self.state.reset();
                        return Err(GatewayError::ConnectFailed {
                            attempts: attempt,
                            source: e,
                        });
                    }

                    time::sleep(self.retry.backoff(attempt)).await;
                    attempt += 1;
                }
            }
        }
    }

    /// Perform the login handshake on the open connection
    async fn login(&self) -> GatewayResult<()> {
        let mut slot = self.connection.lock().await;
        if self.is_logged() {
            return Ok(());
        }
        if slot.is_none() {
            return Err(GatewayError::NoSocket);
        }

        let frame = LoginRequest::new(self.options.account.as_str(), self.options.password.as_str())
            .to_bytes();
        let response = self.exchange(&mut slot, &frame).await?;

        if response.is_success() {
            self.state.logged_in.store(true, Ordering::SeqCst);
            info!(account = %self.options.account, "Logged in to SMS gateway");
        } else {
            let status = response
                .login_status()
                .map_or_else(|| format!("unknown code {}", response.code), |s| s.to_string());
            error!(
                account = %self.options.account,
                %status,
                content = %response.content,
                "Login to SMS gateway rejected"
            );
        }

        Ok(())
    }

    /// Write one request frame and wait for its response.
    ///
    /// A broken or closed socket tears the session down before the error is
    /// returned. A timeout leaves the connection open.
    async fn exchange(
        &self,
        slot: &mut Option<Connection>,
        frame: &[u8],
    ) -> GatewayResult<GatewayResponse> {
        let connection = slot.as_mut().ok_or(GatewayError::NoSocket)?;

        let stale = connection.discard_buffered();
        if stale > 0 {
            warn!(bytes = stale, "Discarded unsolicited bytes from SMS gateway");
        }

        let result = if connection.is_peer_closed() {
            Err(GatewayError::ConnectionClosed)
        } else {
            match connection.write_frame(frame).await {
                Ok(()) => connection.read_response(self.options.response_timeout).await,
                Err(e) => Err(GatewayError::Connection(e)),
            }
        };

        let peer_gone =
            connection.is_peer_closed() || result.as_ref().is_err_and(GatewayError::is_disconnect);
        if peer_gone {
            warn!("SMS gateway connection lost");
            self.teardown(slot).await;
        }

        let bytes = result?;
        debug!(len = bytes.len(), "Received SMS gateway response");
        Ok(GatewayResponse::decode(&bytes)?)
    }

    /// Release an idle connection the gateway has already closed.
    /// Returns true if one was released.
    fn reap_closed(&self, slot: &mut Option<Connection>) -> bool {
        if slot.as_mut().is_some_and(|connection| !connection.check_alive()) {
            warn!("SMS gateway closed the idle connection");
            self.state.reset();
            *slot = None;
            return true;
        }
        false
    }

    /// Shared by `close` and by unexpected disconnects
    async fn teardown(&self, slot: &mut Option<Connection>) {
        self.state.reset();

        if let Some(mut connection) = slot.take() {
            info!("Closing SMS gateway connection");
            if let Err(e) = connection.shutdown().await {
                debug!(error = %e, "Socket shutdown failed");
            }
        }
    }
}

impl SmsGateway for DefaultClient {
    fn is_connected(&self) -> bool {
        if !self.state.connected.load(Ordering::SeqCst) {
            return false;
        }

        // A held lock means an exchange is watching the socket already.
        if let Ok(mut slot) = self.connection.try_lock() {
            self.reap_closed(&mut slot);
        }

        self.state.connected.load(Ordering::SeqCst)
    }

    fn is_logged(&self) -> bool {
        self.is_connected() && self.state.logged_in.load(Ordering::SeqCst)
    }

    async fn try_connect(&self) -> GatewayResult<()> {
        self.connect().await?;
        self.login().await
    }

    async fn send(&self, phone: &str, message: &str) -> GatewayResult<bool> {
        let phone = PhoneNumber::parse(phone)?;
        if message.is_empty() {
            return Err(GatewayError::EmptyMessage);
        }

        // A held lock means another exchange owns the socket, so it exists.
        let held = match self.connection.try_lock() {
            Ok(mut slot) => {
                if slot.is_none() || self.reap_closed(&mut slot) {
                    return Err(GatewayError::NoSocket);
                }
                Some(slot)
            }
            Err(_) => None,
        };

        if !self.is_connected() {
            return Err(GatewayError::NotConnected);
        }
        if !self.is_logged() {
            return Err(GatewayError::NotLoggedIn);
        }
        let _sending = SendingGuard::acquire(&self.state.sending).ok_or(GatewayError::SendInProgress)?;

        let mut slot = match held {
            Some(slot) => slot,
            None => self.connection.lock().await,
        };

        let request = SendRequest::new(phone.as_str(), message);
        if request.is_truncated() {
            warn!(%phone, "Message longer than one frame, sending truncated text");
        }

        let response = self.exchange(&mut slot, &request.to_bytes()).await?;

        if response.is_success() {
            info!(%phone, message_id = %response.content, "Sent SMS");
        } else {
            let status = response
                .send_status()
                .map_or_else(|| format!("unknown code {}", response.code), |s| s.to_string());
            error!(%phone, %status, content = %response.content, "SMS gateway rejected message");
        }

        Ok(response.is_success())
    }

    async fn close(&self) {
        let mut slot = self.connection.lock().await;
        self.teardown(&mut slot).await;
    }
}
