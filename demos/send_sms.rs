// ABOUTME: Command-line demo that sends one SMS through the gateway client
// ABOUTME: Shows ConnectionOptions, try_connect and send with tracing output

use argh::FromArgs;
use smsgw::client::{ConnectionOptions, DefaultClient, RetryMode, SmsGateway};
use std::error::Error;
use std::time::Duration;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Send a single SMS message through the gateway
#[derive(FromArgs)]
struct CliArgs {
    /// whether or not to enable debug logging
    #[argh(switch, short = 'd')]
    debugging: bool,

    /// the gateway account
    #[argh(option, short = 'a')]
    account: String,

    /// the gateway password
    #[argh(option)]
    password: String,

    /// the hostname or IP address of the gateway (default: localhost)
    #[argh(option)]
    host: Option<String>,

    /// the port to use when connecting to the gateway (default: 8000)
    #[argh(option, short = 'p')]
    port: Option<u16>,

    /// how many connect attempts to make (default: 3)
    #[argh(option, short = 'r')]
    retries: Option<u32>,

    /// count retries the way older deployments did
    #[argh(switch)]
    legacy_retry: bool,

    /// response timeout in milliseconds (default: 3000)
    #[argh(option)]
    timeout_ms: Option<u64>,

    /// the recipient mobile number, e.g. 0912345678
    #[argh(option, short = 't')]
    to: String,

    /// the message to send
    #[argh(option, short = 'm')]
    message: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli_args: CliArgs = argh::from_env();

    let level = if cli_args.debugging {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let host = cli_args.host.unwrap_or_else(|| "localhost".to_owned());
    let port = cli_args.port.unwrap_or(8000);

    let mut options = ConnectionOptions::new(host, port, cli_args.account, cli_args.password);
    if let Some(retries) = cli_args.retries {
        options = options.with_max_retry_limit(retries);
    }
    if cli_args.legacy_retry {
        options = options.with_retry_mode(RetryMode::Legacy);
    }
    if let Some(timeout_ms) = cli_args.timeout_ms {
        options = options.with_response_timeout(Duration::from_millis(timeout_ms));
    }

    let client = DefaultClient::new(options)?;
    client.try_connect().await?;

    if !client.is_logged() {
        client.close().await;
        return Err("gateway rejected the login".into());
    }

    let result = client.send(&cli_args.to, &cli_args.message).await;
    client.close().await;

    match result {
        Ok(true) => {
            println!("Message accepted by the gateway");
            Ok(())
        }
        Ok(false) => Err("gateway rejected the message".into()),
        Err(e) => Err(e.into()),
    }
}
