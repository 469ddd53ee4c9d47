use self::wire::{flag, int, timestamp, FieldErrors};
use crate::{
    config::Config,
    error::Error,
    types::Event,
};
use tracing::{debug, trace, warn};

pub use self::wire::{WireEvent, WireHost};

pub mod wire;

const NANOS_PER_SEC: i64 = 1_000_000_000;

/// Converts string-typed Zabbix API Event objects into [`Event`]s.
///
/// Decoding is pure: the decoder holds only its configuration and can be
/// shared freely between threads.
#[derive(Clone, Debug, Default)]
pub struct Decoder {
    cfg: Config,
}

impl Decoder {
    pub fn new(cfg: &Config) -> Self {
        Self { cfg: cfg.clone() }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Decode a single event.
    ///
    /// Either every field converts and a complete [`Event`] is returned, or the
    /// decode fails as a whole. Which failures are reported depends on
    /// [`Config::error_mode`].
    pub fn decode(&self, wire: WireEvent) -> Result<Event, Error> {
        trace!(eventid = %wire.eventid, "Decoding event");
        let res = self.decode_fields(wire);
        if let Err(e) = &res {
            debug!(error = %e, "Failed to decode event");
        }
        res
    }

    fn decode_fields(&self, wire: WireEvent) -> Result<Event, Error> {
        let mut fields = FieldErrors::new(self.cfg.error_mode);

        let clock = fields.check(int("clock", &wire.clock))?;
        let ns = fields.check(int("ns", &wire.ns))?;
        if !(0..NANOS_PER_SEC).contains(&ns) {
            warn!(eventid = %wire.eventid, ns, "Event nanoseconds outside of [0, 1s)");
        }
        let timestamp = fields.check(timestamp(clock, ns))?;

        let object_type = fields.check(int("object", &wire.object))?;
        let object_id = fields.check(int("objectid", &wire.objectid))?;
        let source = fields.check(int("source", &wire.source))?;
        let value = fields.check(int("value", &wire.value))?;
        let mut hosts = Vec::with_capacity(wire.hosts.len());
        for (index, h) in wire.hosts.into_iter().enumerate() {
            let host = h.decode().map(Some).map_err(|source| Error::Host { index, source });
            hosts.extend(fields.check(host)?);
        }
        let severity = fields.check(int("severity", &wire.severity))?;

        fields.finish()?;

        Ok(Event {
            event_id: wire.eventid,
            acknowledged: flag(&wire.acknowledged),
            timestamp,
            object_type,
            object_id,
            source,
            value,
            value_changed: flag(&wire.value_changed),
            hosts,
            name: wire.name,
            op_data: wire.opdata,
            severity,
            r_event_id: wire.r_eventid,
        })
    }

    /// Decode an `event.get` result list, preserving order.
    ///
    /// The first event that fails aborts the whole list.
    pub fn decode_all(&self, wire: Vec<WireEvent>) -> Result<Vec<Event>, Error> {
        let count = wire.len();
        let events = wire
            .into_iter()
            .enumerate()
            .map(|(index, ev)| {
                let event_id = ev.eventid.clone();
                self.decode(ev).map_err(|e| Error::Event {
                    index,
                    event_id,
                    source: Box::new(e),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        debug!(count, "Decoded event list");
        Ok(events)
    }

    /// Parse a single JSON Event object and decode it.
    pub fn decode_json(&self, json: &str) -> Result<Event, Error> {
        let wire: WireEvent = serde_json::from_str(json)?;
        self.decode(wire)
    }

    /// Parse a JSON array of Event objects and decode them.
    pub fn decode_json_list(&self, json: &str) -> Result<Vec<Event>, Error> {
        let wire: Vec<WireEvent> = serde_json::from_str(json)?;
        self.decode_all(wire)
    }
}

/// Decode a single event, stopping at the first invalid field.
pub fn decode(wire: WireEvent) -> Result<Event, Error> {
    Decoder::default().decode(wire)
}

impl TryFrom<WireEvent> for Event {
    type Error = Error;

    fn try_from(wire: WireEvent) -> Result<Self, Self::Error> {
        decode(wire)
    }
}
