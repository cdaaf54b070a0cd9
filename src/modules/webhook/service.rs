use super::events::{EventBus, JobStatus, UnrecognizedStatus};
use super::message::{MessageType, SnsMessage};
use crate::infrastructure::http::fetcher::{FetchError, HttpFetcher};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    #[error(transparent)]
    UnrecognizedStatus(#[from] UnrecognizedStatus),

    #[error("Subscription confirmation failed: {0}")]
    Confirmation(#[from] FetchError),

    #[error("Notification body is not JSON: {0}")]
    MalformedMessage(#[from] serde_json::Error),

    #[error("Failed to publish conversion event: {0}")]
    Publish(anyhow::Error),
}

/// What a verified envelope amounted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Confirmed,
    Ignored,
    Published(&'static str),
}

#[derive(Clone)]
pub struct WebhookService {
    fetcher: Arc<dyn HttpFetcher>,
    events: Arc<dyn EventBus>,
}

impl WebhookService {
    pub fn new(fetcher: Arc<dyn HttpFetcher>, events: Arc<dyn EventBus>) -> Self {
        Self { fetcher, events }
    }

    /// Handles a verified envelope. Failures are logged and never surface to SNS.
    pub async fn handle(&self, message: SnsMessage) {
        let message_id = message.message_id.clone();

        match self.process(message).await {
            Ok(outcome) => info!(%message_id, ?outcome, "SNS message handled"),
            Err(e @ WebhookError::UnrecognizedStatus(_)) => error!(%message_id, "{}", e),
            Err(e) => warn!(%message_id, "{}", e),
        }
    }

    pub async fn process(&self, message: SnsMessage) -> Result<Outcome, WebhookError> {
        if message.message_type == MessageType::UnsubscribeConfirmation {
            info!(topic_arn = %message.topic_arn, "Unsubscribed from topic, not resubscribing");
            return Ok(Outcome::Ignored);
        }

        if let Some(url) = message.subscribe_url.as_deref() {
            self.fetcher.fetch(url).await?;
            info!(topic_arn = %message.topic_arn, "✅ SNS subscription confirmed");
            return Ok(Outcome::Confirmed);
        }

        let payload: Value = serde_json::from_str(&message.message)?;

        let Some(detail) = payload.get("detail") else {
            warn!(message_id = %message.message_id, "Notification has no detail, skipping");
            return Ok(Outcome::Ignored);
        };
        let Some(status) = detail.get("status").and_then(Value::as_str) else {
            warn!(message_id = %message.message_id, "Notification detail has no status, skipping");
            return Ok(Outcome::Ignored);
        };

        let job_id = detail.get("jobId").and_then(Value::as_str).unwrap_or_default();
        info!(%job_id, %status, "MediaConvert job status received");

        let job_status = status.parse::<JobStatus>()?;
        let event = job_status.into_event(payload);
        let name = event.name();

        self.events.publish(event).await.map_err(WebhookError::Publish)?;

        Ok(Outcome::Published(name))
    }
}
