use crate::{
    config::ErrorMode,
    error::{Error, HostError},
    types::{Host, Timestamp},
};
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Zabbix API Event object as it appears on the wire.
///
/// Every member is transmitted as a string. Missing members decode as empty text.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct WireEvent {
    pub eventid: String,
    pub acknowledged: String,
    pub clock: String,
    pub ns: String,
    pub object: String,
    pub objectid: String,
    pub source: String,
    pub value: String,
    pub value_changed: String,
    pub hosts: Vec<WireHost>,
    pub name: String,
    pub opdata: String,
    pub severity: String,
    pub r_eventid: String,
}

/// Zabbix API Host object, as nested in an event.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct WireHost {
    pub hostid: String,
    pub host: String,
    pub name: String,
    pub flags: String,
}

impl WireHost {
    pub fn decode(self) -> Result<Host, HostError> {
        let flags = self
            .flags
            .parse::<i64>()
            .map_err(|source| HostError::FieldFormat {
                field: "flags",
                source,
            })?;
        Ok(Host {
            host_id: self.hostid,
            hostname: self.host,
            display_name: self.name,
            flags,
        })
    }
}

/// Zabbix booleans are "1" or anything else.
pub(crate) fn flag(text: &str) -> bool {
    text == "1"
}

pub(crate) fn int(field: &'static str, text: &str) -> Result<i64, Error> {
    text.parse::<i64>().map_err(|e| Error::field_format(field, e))
}

/// Epoch + `clock` seconds + `ns` nanoseconds, `ns` may be of any sign and magnitude.
pub(crate) fn timestamp(clock: i64, ns: i64) -> Result<Timestamp, Error> {
    TimeDelta::try_seconds(clock)
        .and_then(|secs| secs.checked_add(&TimeDelta::nanoseconds(ns)))
        .and_then(|offset| DateTime::<Utc>::UNIX_EPOCH.checked_add_signed(offset))
        .ok_or(Error::TimestampOutOfRange { clock, ns })
}

/// Whether epoch + `clock` seconds is representable on its own.
pub(crate) fn clock_in_range(clock: i64) -> bool {
    TimeDelta::try_seconds(clock)
        .and_then(|secs| DateTime::<Utc>::UNIX_EPOCH.checked_add_signed(secs))
        .is_some()
}

/// Routes field results according to the [`ErrorMode`].
///
/// In collect-all mode a failed field yields a default value and the error is
/// held back until [`FieldErrors::finish`], which guarantees the placeholder
/// never reaches the caller.
#[derive(Debug)]
pub(crate) struct FieldErrors {
    mode: ErrorMode,
    errors: Vec<Error>,
}

impl FieldErrors {
    pub fn new(mode: ErrorMode) -> Self {
        Self {
            mode,
            errors: Vec::new(),
        }
    }

    pub fn check<T: Default>(&mut self, res: Result<T, Error>) -> Result<T, Error> {
        match (res, self.mode) {
            (Ok(v), _) => Ok(v),
            (Err(e), ErrorMode::FailFast) => Err(e),
            (Err(e), ErrorMode::CollectAll) => {
                self.errors.push(e);
                Ok(T::default())
            }
        }
    }

    pub fn finish(mut self) -> Result<(), Error> {
        match self.errors.len() {
            0 => Ok(()),
            1 => Err(self.errors.remove(0)),
            _ => Err(Error::Multiple(self.errors)),
        }
    }
}
