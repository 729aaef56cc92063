// ABOUTME: SMS gateway client module: options, retry policy, session trait and default TCP implementation
// ABOUTME: Exports every client component callers need

//! SMS gateway client
//!
//! * **Explicit construction** - a client is built from a [`ConnectionOptions`] value
//! * **Trait-based interface** - callers depend on [`SmsGateway`]
//! * **Bounded waits** - connect and every response wait have a timeout (3 s by default)
//! * **Retry policy** - connect attempts are limited and backed off
//! * **Single-flight sends** - one outstanding request per connection
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use smsgw::client::{ConnectionOptions, DefaultClient, SmsGateway};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let options = ConnectionOptions::new("sms.example.com", 8000, "account", "password")
//!     .with_max_retry_limit(2);
//! let client = DefaultClient::new(options)?;
//!
//! client.try_connect().await?;
//! if client.is_logged() {
//!     let accepted = client.send("0912345678", "Your code is 123456").await?;
//!     println!("accepted: {accepted}");
//! }
//!
//! client.close().await;
//! # Ok(())
//! # }
//! ```
//!
//! ## Sharing a connection
//!
//! ```rust,no_run
//! use smsgw::client::{ConnectionOptions, DefaultClient, SmsNotifier};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Arc::new(DefaultClient::new(ConnectionOptions::new(
//!     "sms.example.com", 8000, "account", "password",
//! ))?);
//! let notifier = SmsNotifier::new(client);
//!
//! if !notifier.notify("0912345678", "Your code is 123456").await? {
//!     eprintln!("gateway rejected the notification");
//! }
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod default;
pub mod error;
pub mod notifier;
pub mod retry;
pub mod traits;
pub mod types;

pub use builder::ClientBuilder;
pub use default::DefaultClient;
pub use error::{GatewayError, GatewayResult};
pub use notifier::SmsNotifier;
pub use retry::{DEFAULT_MAX_RETRY_LIMIT, RetryMode, RetryPolicy};
pub use traits::SmsGateway;
pub use types::{ConnectionOptions, DEFAULT_TIMEOUT};
