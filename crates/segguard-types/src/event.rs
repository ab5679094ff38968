use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Where a zero-trust event originated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    /// Observed and reported by an agent on a compromised host.
    Network,
    /// Produced by the control server itself.
    Island,
}

/// One immutable entry in a finding's event log.
///
/// Events are append-only: once recorded they are never mutated or removed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Event {
    pub title: String,
    pub message: String,
    pub event_type: EventType,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

impl Event {
    /// Build an event stamped with the current wall-clock time.
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        event_type: EventType,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            event_type,
            timestamp: OffsetDateTime::now_utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_type_uses_lowercase_wire_names() {
        assert_eq!(
            serde_json::to_value(EventType::Network).unwrap(),
            serde_json::json!("network")
        );
        assert_eq!(
            serde_json::to_value(EventType::Island).unwrap(),
            serde_json::json!("island")
        );
    }

    #[test]
    fn event_keeps_title_and_message_verbatim() {
        let event = Event::new("Segmentation event", "it happened", EventType::Network);
        assert_eq!(event.title, "Segmentation event");
        assert_eq!(event.message, "it happened");
        assert_eq!(event.event_type, EventType::Network);
    }
}
