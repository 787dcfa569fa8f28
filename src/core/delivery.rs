//! Outbound email delivery for the contact form
//!
//! The form controller never talks to the network itself. It hands an
//! [`EmailPayload`] to an [`EmailDelivery`] implementation and maps any
//! failure to a single "send failed" state.

use std::future::Future;

use serde::Serialize;
use thiserror::Error;

use super::config::EmailJsConfig;
use super::contact::EmailPayload;

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("contact delivery is not configured")]
    NotConfigured,
    #[error("failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("delivery rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// External service that turns a payload into an email
pub trait EmailDelivery {
    fn send(&self, payload: &EmailPayload) -> impl Future<Output = Result<(), DeliveryError>>;
}

/// Body of an EmailJS `email/send` call
#[derive(Debug, Serialize)]
struct EmailJsRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a EmailPayload,
}

/// EmailJS REST client
#[derive(Clone, Debug)]
pub struct EmailJsClient {
    config: EmailJsConfig,
}

impl EmailJsClient {
    pub fn new(config: EmailJsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EmailJsConfig {
        &self.config
    }

    /// JSON body for `payload`. Fails when credentials are missing.
    pub fn request_body(&self, payload: &EmailPayload) -> Result<String, DeliveryError> {
        self.config
            .validate()
            .map_err(|_| DeliveryError::NotConfigured)?;

        let request = EmailJsRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: payload,
        };
        Ok(serde_json::to_string(&request)?)
    }
}

impl EmailDelivery for EmailJsClient {
    async fn send(&self, payload: &EmailPayload) -> Result<(), DeliveryError> {
        use gloo_net::http::Request;

        let body = self.request_body(payload)?;

        let response = Request::post(&self.config.endpoint)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| DeliveryError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(DeliveryError::Rejected { status, body })
        }
    }
}
