use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use test_log::test;
use zabbix_event::*;

const EVENTS: &str = "test_resources/fixtures/events.json";
const BAD_SEVERITY: &str = "test_resources/fixtures/bad_severity.json";

fn fixture(path: &str) -> String {
    std::fs::read_to_string(path).unwrap()
}

#[test]
fn event_list() {
    let decoder = Decoder::new(&Config::default());
    let events = decoder.decode_json_list(&fixture(EVENTS)).unwrap();
    assert_eq!(events.len(), 3);

    check_problem_event(events.first());
    check_recovery_event(events.get(1));
    check_internal_event(events.get(2));
}

#[test]
fn event_list_via_wire_shape() {
    let wire: Vec<WireEvent> = serde_json::from_str(&fixture(EVENTS)).unwrap();
    assert_eq!(wire[0].hosts.len(), 2);
    assert_eq!(wire[2].value_changed, "");

    let events = wire
        .into_iter()
        .map(Event::try_from)
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    check_problem_event(events.first());
}

#[test]
fn bad_severity_aborts_list() {
    let decoder = Decoder::new(&Config::default());
    let err = decoder.decode_json_list(&fixture(BAD_SEVERITY)).unwrap_err();
    match &err {
        Error::Event {
            index,
            event_id,
            source,
        } => {
            assert_eq!(*index, 1);
            assert_eq!(event_id, "9700");
            assert!(matches!(
                **source,
                Error::FieldFormat {
                    field: "severity",
                    ..
                }
            ));
        }
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(err.field(), Some("severity"));
    assert_eq!(
        err.to_string(),
        "Failed to decode event 1 with eventid '9700' \
         (Failed to parse event field 'severity' (invalid digit found in string))"
    );
}

#[test]
fn non_numeric_clock() {
    let json = r#"{"eventid": "1", "clock": "abc", "ns": "0", "object": "0",
        "objectid": "1", "source": "0", "value": "0", "severity": "0"}"#;
    let err = Decoder::default().decode_json(json).unwrap_err();
    assert!(matches!(err, Error::FieldFormat { field: "clock", .. }));
}

#[test]
fn missing_numeric_member() {
    let json = r#"{"eventid": "1", "clock": "1", "ns": "0", "object": "0",
        "objectid": "1", "source": "0", "value": "0"}"#;
    let err = Decoder::default().decode_json(json).unwrap_err();
    assert_eq!(err.field(), Some("severity"));
}

#[test]
fn structural_errors() {
    let decoder = Decoder::default();
    assert!(matches!(
        decoder.decode_json("{\"clock\": 1617900000}"),
        Err(Error::Json(_))
    ));
    assert!(matches!(decoder.decode_json_list("{}"), Err(Error::Json(_))));
    assert!(matches!(decoder.decode_json("[1, "), Err(Error::Json(_))));
}

#[test]
fn collect_all_from_yaml_config() {
    let cfg: Config = serde_yaml::from_str("error-mode: collect-all").unwrap();
    let decoder = Decoder::new(&cfg);
    let json = r#"{"eventid": "1", "clock": "x", "ns": "y", "object": "0",
        "objectid": "1", "source": "0", "value": "0", "severity": "high",
        "hosts": [{"hostid": "10084", "host": "a", "name": "a", "flags": "?"}]}"#;
    match decoder.decode_json(json) {
        Err(Error::Multiple(errs)) => {
            let fields: Vec<_> = errs.iter().filter_map(Error::field).collect();
            assert_eq!(fields, vec!["clock", "ns", "flags", "severity"]);
            assert!(matches!(errs[2], Error::Host { index: 0, .. }));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn collect_all_reports_each_bad_host() {
    let decoder = Decoder::new(&Config::collect_all());
    let json = r#"{"eventid": "1", "clock": "1", "ns": "0", "object": "0",
        "objectid": "1", "source": "0", "value": "0", "severity": "0",
        "hosts": [{"flags": "a"}, {"flags": "b"}]}"#;
    match decoder.decode_json(json) {
        Err(Error::Multiple(errs)) => {
            assert_eq!(errs.len(), 2);
            assert!(matches!(errs[0], Error::Host { index: 0, .. }));
            assert!(matches!(errs[1], Error::Host { index: 1, .. }));
            assert_eq!(errs[1].field(), Some("flags"));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn decoded_event_serializes() {
    let events = Decoder::default().decode_json_list(&fixture(EVENTS)).unwrap();
    let json = serde_json::to_string(&events).unwrap();
    let back: Vec<Event> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, events);
}

fn check_problem_event(ev: Option<&Event>) {
    assert_eq!(
        ev,
        Some(&Event {
            event_id: "9695".to_owned(),
            acknowledged: true,
            timestamp: Utc.timestamp_opt(1347970410, 413316245).unwrap(),
            object_type: 0,
            object_id: 13926,
            source: 0,
            value: 1,
            value_changed: true,
            hosts: vec![
                Host {
                    host_id: "10084".to_owned(),
                    hostname: "db-01".to_owned(),
                    display_name: "Database 01".to_owned(),
                    flags: 0,
                },
                Host {
                    host_id: "10105".to_owned(),
                    hostname: "db-replica-7".to_owned(),
                    display_name: "Replica 7".to_owned(),
                    flags: 4,
                },
            ],
            name: "MySQL is down".to_owned(),
            op_data: "Uptime: 0".to_owned(),
            severity: 5,
            r_event_id: "9699".to_owned(),
        })
    );
    let ev = ev.unwrap();
    assert_eq!(ev.source(), EventSource::Trigger);
    assert_eq!(ev.object_type(), ObjectType::Trigger);
    assert_eq!(ev.severity(), Severity::Disaster);
    assert_eq!(ev.hosts[1].origin(), HostFlags::Discovered);
    assert!(ev.is_problem());
    assert!(ev.is_resolved());
}

fn check_recovery_event(ev: Option<&Event>) {
    let ev = ev.unwrap();
    assert_eq!(ev.event_id, "9699");
    assert!(!ev.acknowledged);
    assert_eq!(ev.timestamp, Utc.timestamp_opt(1347970680, 0).unwrap());
    assert_eq!(ev.severity(), Severity::NotClassified);
    assert!(ev.hosts.is_empty());
    assert!(!ev.is_problem());
    assert!(!ev.is_resolved());
}

fn check_internal_event(ev: Option<&Event>) {
    let ev = ev.unwrap();
    assert_eq!(ev.event_id, "10011");
    assert_eq!(ev.source(), EventSource::Internal);
    assert_eq!(ev.object_type(), ObjectType::Item);
    assert_eq!(ev.timestamp, Utc.timestamp_opt(1617900000, 999_999_999).unwrap());
    assert!(!ev.value_changed);
    assert!(ev.hosts.is_empty());
    assert!(!ev.is_problem());
}
