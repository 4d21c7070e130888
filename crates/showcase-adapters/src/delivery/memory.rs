//! Scripted in-memory transport for tests and offline replays.

use std::{
    sync::{Arc, Mutex, PoisonError},
    time::Duration,
};

use async_trait::async_trait;
use showcase_core::application::ports::{DeliveryError, DeliveryRequest, DeliveryTransport};
use tracing::debug;

/// Accepts every delivery except the configured call numbers.
///
/// Calls are numbered from 1 across the transport's lifetime, so
/// `failing_on(&[2])` rejects the auto-reply stage of the first submission.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTransport {
    fail_on: Vec<usize>,
    latency: Duration,
    sent: Arc<Mutex<Vec<DeliveryRequest>>>,
}

impl ScriptedTransport {
    pub fn accepting() -> Self {
        Self::default()
    }

    pub fn failing_on(calls: &[usize]) -> Self {
        Self {
            fail_on: calls.to_vec(),
            ..Self::default()
        }
    }

    /// Resolve each call only after `latency` of runtime time.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Every request received, including rejected ones.
    pub fn sent(&self) -> Vec<DeliveryRequest> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.sent.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

#[async_trait]
impl DeliveryTransport for ScriptedTransport {
    async fn deliver(&self, request: DeliveryRequest) -> Result<(), DeliveryError> {
        let call = {
            let mut sent = self.sent.lock().unwrap_or_else(PoisonError::into_inner);
            sent.push(request);
            sent.len()
        };

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        if self.fail_on.contains(&call) {
            debug!(call, "Scripted rejection");
            return Err(DeliveryError::Rejected {
                status: 400,
                body: format!("scripted failure on call {call}"),
            });
        }
        debug!(call, "Scripted acceptance");
        Ok(())
    }
}
