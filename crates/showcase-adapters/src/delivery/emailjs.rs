//! HTTP transport for an EmailJS-compatible send endpoint.
//!
//! Each stage is one `POST {api_base}/api/v1.0/email/send`:
//!
//! ```json
//! {
//!   "service_id": "service_x",
//!   "template_id": "template_y",
//!   "user_id": "<public key>",
//!   "template_params": { "from_name": "..", "from_email": "..", "message": ".." }
//! }
//! ```
//!
//! Any 2xx status resolves; everything else rejects.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use showcase_core::{
    application::ports::{DeliveryError, DeliveryRequest, DeliveryTransport},
    domain::ContactPayload,
};
use tracing::{debug, instrument, warn};

pub const DEFAULT_API_BASE: &str = "https://api.emailjs.com";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailJsConfig {
    pub api_base: String,
    pub timeout_secs: u64,
}

impl Default for EmailJsConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Serialize)]
struct SendBody<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactPayload,
}

#[derive(Debug, Clone)]
pub struct EmailJsTransport {
    http: Client,
    endpoint: String,
}

impl EmailJsTransport {
    pub fn new(config: &EmailJsConfig) -> Result<Self, DeliveryError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;
        Ok(Self {
            http,
            endpoint: format!("{}/api/v1.0/email/send", config.api_base.trim_end_matches('/')),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl DeliveryTransport for EmailJsTransport {
    #[instrument(skip_all, fields(template = %request.template_id))]
    async fn deliver(&self, request: DeliveryRequest) -> Result<(), DeliveryError> {
        let body = SendBody {
            service_id: &request.service_id,
            template_id: &request.template_id,
            user_id: &request.public_key,
            template_params: &request.payload,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            debug!(%status, "Delivery accepted");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        warn!(%status, %body, "Delivery rejected");
        Err(DeliveryError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
