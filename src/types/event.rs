use crate::types::{EventId, EventSource, Host, ObjectType, Severity, Timestamp};
use serde::{Deserialize, Serialize};

/// A fully decoded Zabbix event.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Event {
    pub event_id: EventId,
    /// Whether the event has been acknowledged.
    pub acknowledged: bool,
    /// Time the event was raised at (`clock` + `ns`).
    pub timestamp: Timestamp,
    /// Raw `object` value, see [`Event::object_type`].
    pub object_type: i64,
    /// ID of the related object.
    pub object_id: i64,
    /// Raw `source` value, see [`Event::source`].
    pub source: i64,
    /// State of the related object.
    pub value: i64,
    pub value_changed: bool,
    /// Hosts associated with the event, in API order.
    pub hosts: Vec<Host>,
    /// Resolved event name.
    pub name: String,
    /// Operational data with expanded macros.
    pub op_data: String,
    /// Raw `severity` value, see [`Event::severity`].
    pub severity: i64,
    /// ID of the recovery event, "0" when none.
    pub r_event_id: EventId,
}

impl Event {
    pub fn source(&self) -> EventSource {
        EventSource::from(self.source)
    }

    pub fn object_type(&self) -> ObjectType {
        ObjectType::from(self.object_type)
    }

    pub fn severity(&self) -> Severity {
        Severity::from(self.severity)
    }

    /// A trigger or service event in the PROBLEM state.
    pub fn is_problem(&self) -> bool {
        matches!(self.source(), EventSource::Trigger | EventSource::Service) && self.value == 1
    }

    /// Whether a recovery event has been recorded for this event.
    pub fn is_resolved(&self) -> bool {
        !self.r_event_id.is_empty() && self.r_event_id != "0"
    }
}
