use derive_more::Display;
use num_enum::{FromPrimitive, IntoPrimitive};
use serde::{Deserialize, Serialize};

pub use event::Event;
pub use host::Host;

pub mod event;
pub mod host;

/// Zabbix event identifier, kept verbatim as sent by the API.
pub type EventId = String;

/// Zabbix host identifier, kept verbatim as sent by the API.
pub type HostId = String;

/// Point in time an event was raised at.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Type of the event source (`source` field).
#[derive(
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Debug,
    Display,
    IntoPrimitive,
    FromPrimitive,
    Serialize,
    Deserialize,
)]
#[repr(i64)]
pub enum EventSource {
    #[display("trigger")]
    Trigger = 0,
    #[display("discovery")]
    Discovery = 1,
    #[display("autoregistration")]
    AutoRegistration = 2,
    #[display("internal")]
    Internal = 3,
    #[display("service")]
    Service = 4,
    #[display("{_0}")]
    #[num_enum(catch_all)]
    Other(i64),
}

/// Type of the object related to the event (`object` field).
#[derive(
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Debug,
    Display,
    IntoPrimitive,
    FromPrimitive,
    Serialize,
    Deserialize,
)]
#[repr(i64)]
pub enum ObjectType {
    #[display("trigger")]
    Trigger = 0,
    #[display("discovered host")]
    DiscoveredHost = 1,
    #[display("discovered service")]
    DiscoveredService = 2,
    #[display("auto-registered host")]
    AutoRegisteredHost = 3,
    #[display("item")]
    Item = 4,
    #[display("LLD rule")]
    LldRule = 5,
    #[display("service")]
    Service = 6,
    #[display("{_0}")]
    #[num_enum(catch_all)]
    Other(i64),
}

/// Event severity (`severity` field).
#[derive(
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Debug,
    Display,
    IntoPrimitive,
    FromPrimitive,
    Serialize,
    Deserialize,
)]
#[repr(i64)]
pub enum Severity {
    #[display("Not classified")]
    NotClassified = 0,
    #[display("Information")]
    Information = 1,
    #[display("Warning")]
    Warning = 2,
    #[display("Average")]
    Average = 3,
    #[display("High")]
    High = 4,
    #[display("Disaster")]
    Disaster = 5,
    #[display("{_0}")]
    #[num_enum(catch_all)]
    Other(i64),
}

/// Origin of a host (`flags` field of the host object).
#[derive(
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Debug,
    Display,
    IntoPrimitive,
    FromPrimitive,
    Serialize,
    Deserialize,
)]
#[repr(i64)]
pub enum HostFlags {
    #[display("plain")]
    Plain = 0,
    #[display("discovered")]
    Discovered = 4,
    #[display("{_0}")]
    #[num_enum(catch_all)]
    Other(i64),
}
