// ABOUTME: SMS notification on top of an SmsGateway session
// ABOUTME: Connects on demand and logs failures with the phone number before returning them

use crate::client::error::GatewayResult;
use crate::client::traits::SmsGateway;
use std::sync::Arc;
use tracing::{error, info};

/// Sends notifications through a shared gateway session.
///
/// [`notify`](SmsNotifier::notify) folds connecting and logging in into the
/// send and records every failure in the log, so callers only decide what
/// to do with the outcome.
pub struct SmsNotifier<G> {
    gateway: Arc<G>,
}

impl<G: SmsGateway> SmsNotifier<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &Arc<G> {
        &self.gateway
    }

    /// Connect and log in if needed, then send.
    ///
    /// `Ok(false)` means the gateway rejected the message. Connect failures,
    /// invalid arguments and session errors are logged and returned.
    pub async fn notify(&self, phone: &str, message: &str) -> GatewayResult<bool> {
        info!(phone, "Request to send SMS");

        let result = match self.gateway.try_connect().await {
            Ok(()) => self.gateway.send(phone, message).await,
            Err(e) => Err(e),
        };

        match &result {
            Ok(sent) => info!(phone, sent, "Send SMS finished"),
            Err(e) => error!(phone, error = %e, "Send SMS failed"),
        }

        result
    }
}

impl<G> Clone for SmsNotifier<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
        }
    }
}
