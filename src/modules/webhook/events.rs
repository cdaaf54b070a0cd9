use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::str::FromStr;
use tokio::sync::broadcast;
use tracing::debug;

/// `detail.status` values MediaConvert emits in job state change events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    Progressing,
    InputInformation,
    Complete,
    StatusUpdate,
    NewWarning,
    QueueHop,
    Error,
}

#[derive(Debug, thiserror::Error)]
#[error("Unrecognized MediaConvert job status: {0}")]
pub struct UnrecognizedStatus(pub String);

impl FromStr for JobStatus {
    type Err = UnrecognizedStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PROGRESSING" => Ok(JobStatus::Progressing),
            "INPUT_INFORMATION" => Ok(JobStatus::InputInformation),
            "COMPLETE" => Ok(JobStatus::Complete),
            "STATUS_UPDATE" => Ok(JobStatus::StatusUpdate),
            "NEW_WARNING" => Ok(JobStatus::NewWarning),
            "QUEUE_HOP" => Ok(JobStatus::QueueHop),
            "ERROR" => Ok(JobStatus::Error),
            other => Err(UnrecognizedStatus(other.to_string())),
        }
    }
}

impl JobStatus {
    pub fn into_event(self, payload: Value) -> ConversionEvent {
        match self {
            JobStatus::Progressing => ConversionEvent::Progressing(payload),
            JobStatus::InputInformation => ConversionEvent::InputInformation(payload),
            JobStatus::Complete => ConversionEvent::Completed(payload),
            JobStatus::StatusUpdate => ConversionEvent::StatusUpdate(payload),
            JobStatus::NewWarning => ConversionEvent::NewWarning(payload),
            JobStatus::QueueHop => ConversionEvent::QueueHop(payload),
            JobStatus::Error => ConversionEvent::Error(payload),
        }
    }
}

/// A job state change, carrying the full decoded event MediaConvert sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", content = "payload", rename_all = "snake_case")]
pub enum ConversionEvent {
    Progressing(Value),
    InputInformation(Value),
    Completed(Value),
    StatusUpdate(Value),
    NewWarning(Value),
    QueueHop(Value),
    Error(Value),
}

impl ConversionEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ConversionEvent::Progressing(_) => "progressing",
            ConversionEvent::InputInformation(_) => "input_information",
            ConversionEvent::Completed(_) => "completed",
            ConversionEvent::StatusUpdate(_) => "status_update",
            ConversionEvent::NewWarning(_) => "new_warning",
            ConversionEvent::QueueHop(_) => "queue_hop",
            ConversionEvent::Error(_) => "error",
        }
    }

    pub fn payload(&self) -> &Value {
        match self {
            ConversionEvent::Progressing(payload)
            | ConversionEvent::InputInformation(payload)
            | ConversionEvent::Completed(payload)
            | ConversionEvent::StatusUpdate(payload)
            | ConversionEvent::NewWarning(payload)
            | ConversionEvent::QueueHop(payload)
            | ConversionEvent::Error(payload) => payload,
        }
    }
}

/// Destination for conversion events. Delivery is at-least-once.
#[async_trait]
pub trait EventBus: Send + Sync {
    async fn publish(&self, event: ConversionEvent) -> anyhow::Result<()>;
}

/// In-process bus for consumers living in the same binary.
#[derive(Clone)]
pub struct BroadcastEventBus {
    sender: broadcast::Sender<ConversionEvent>,
}

impl BroadcastEventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ConversionEvent> {
        self.sender.subscribe()
    }
}

#[async_trait]
impl EventBus for BroadcastEventBus {
    async fn publish(&self, event: ConversionEvent) -> anyhow::Result<()> {
        let name = event.name();
        // A send error only means nobody is subscribed right now.
        if self.sender.send(event).is_err() {
            debug!("No subscribers for conversion event '{}'", name);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn every_known_status_maps_to_its_own_event() {
        let cases = [
            ("PROGRESSING", "progressing"),
            ("INPUT_INFORMATION", "input_information"),
            ("COMPLETE", "completed"),
            ("STATUS_UPDATE", "status_update"),
            ("NEW_WARNING", "new_warning"),
            ("QUEUE_HOP", "queue_hop"),
            ("ERROR", "error"),
        ];

        for (status, event) in cases {
            let payload = json!({ "detail": { "status": status } });
            let mapped = status.parse::<JobStatus>().unwrap().into_event(payload.clone());

            assert_eq!(mapped.name(), event);
            assert_eq!(mapped.payload(), &payload);
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        let err = "SUBMITTED".parse::<JobStatus>().unwrap_err();

        assert_eq!(err.0, "SUBMITTED");
    }

    #[test]
    fn events_serialize_with_name_and_payload() {
        let event = ConversionEvent::Completed(json!({ "detail": { "jobId": "abc" } }));

        let value = serde_json::to_value(&event).unwrap();

        assert_eq!(value["event"], "completed");
        assert_eq!(value["payload"]["detail"]["jobId"], "abc");
    }

    #[tokio::test]
    async fn broadcast_bus_delivers_to_subscribers_and_tolerates_none() {
        let bus = BroadcastEventBus::new(8);
        bus.publish(ConversionEvent::QueueHop(json!({}))).await.unwrap();

        let mut receiver = bus.subscribe();
        bus.publish(ConversionEvent::Error(json!({ "detail": {} }))).await.unwrap();

        assert_eq!(receiver.recv().await.unwrap().name(), "error");
    }
}
