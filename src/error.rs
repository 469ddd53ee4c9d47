use crate::decoder::wire::clock_in_range;
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to parse event field '{field}' ({source})")]
    FieldFormat {
        field: &'static str,
        source: ParseIntError,
    },

    #[error("Failed to decode host {index} of the event ({source})")]
    Host { index: usize, source: HostError },

    #[error("Event timestamp (clock {clock}, ns {ns}) is not representable")]
    TimestampOutOfRange { clock: i64, ns: i64 },

    #[error("Encountered {} invalid event fields", .0.len())]
    Multiple(Vec<Error>),

    #[error("Failed to decode event {index} with eventid '{event_id}' ({source})")]
    Event {
        index: usize,
        event_id: String,
        source: Box<Error>,
    },

    #[error("Encountered a malformed Zabbix JSON payload ({0})")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn field_format(field: &'static str, source: ParseIntError) -> Self {
        Error::FieldFormat { field, source }
    }

    /// Name of the wire field that failed to decode, when the error is tied to one.
    ///
    /// Host errors report the host field, batch errors report the field of the
    /// wrapped event error. An unrepresentable timestamp blames `clock` when the
    /// seconds alone overflow, `ns` otherwise.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Error::FieldFormat { field, .. } => Some(field),
            Error::Host { source, .. } => Some(source.field()),
            Error::TimestampOutOfRange { clock, .. } => {
                if clock_in_range(*clock) {
                    Some("ns")
                } else {
                    Some("clock")
                }
            }
            Error::Event { source, .. } => source.field(),
            Error::Multiple(_) | Error::Json(_) => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum HostError {
    #[error("Failed to parse host field '{field}' ({source})")]
    FieldFormat {
        field: &'static str,
        source: ParseIntError,
    },
}

impl HostError {
    pub fn field(&self) -> &'static str {
        match self {
            HostError::FieldFormat { field, .. } => field,
        }
    }
}
