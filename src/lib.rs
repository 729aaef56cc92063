pub mod client;
pub mod codec;
pub mod connection;
pub mod datatypes;


// Re-export codec entry points for direct access
pub use codec::{
    CodecError, Decodable, Encodable, REQUEST_LEN, RESPONSE_LEN, decode_response, encode_login,
    encode_send, swap_byte_pairs,
};

// Re-export the main client API for easy access
pub use client::{
    ClientBuilder, ConnectionOptions, DefaultClient, GatewayError, GatewayResult, RetryMode,
    RetryPolicy, SmsGateway, SmsNotifier,
};

/// Client for a fixed-frame binary SMS gateway.
///
/// The gateway speaks a lock-step protocol over one TCP connection: a
/// 266-byte login frame authenticates the account, 266-byte send frames
/// submit messages (up to 80 UCS-2 units each), and every request is
/// answered by one 244-byte response frame carrying a status code.
///
/// # Examples
///
/// ## Sending a message
///
/// ```rust,no_run
/// use smsgw::{ConnectionOptions, DefaultClient, SmsGateway};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = DefaultClient::new(ConnectionOptions::new(
///         "sms.example.com",
///         8000,
///         "account",
///         "password",
///     ))?;
///
///     // Connect (with retries) and perform the login handshake
///     client.try_connect().await?;
///
///     // `false` means the gateway rejected the message; the reason is logged
///     let accepted = client.send("0912345678", "Hello!").await?;
///     println!("accepted: {accepted}");
///
///     client.close().await;
///     Ok(())
/// }
/// ```
///
/// ## Working with frames directly
///
/// ```rust
/// use smsgw::{decode_response, encode_send, Encodable, REQUEST_LEN};
/// use smsgw::datatypes::GatewayResponse;
///
/// let frame = encode_send("0912345678", "hello");
/// assert_eq!(frame.len(), REQUEST_LEN);
///
/// let reply = GatewayResponse::new(0, "MSG123").to_bytes();
/// let response = decode_response(&reply).unwrap();
/// assert!(response.is_success());
/// assert_eq!(response.content, "MSG123");
/// ```
pub type Result<T> = GatewayResult<T>;
