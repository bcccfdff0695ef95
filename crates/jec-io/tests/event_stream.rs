//! Integration tests: write and read event streams through files.

use jec_core::{DeepCsv, Event, Jet, Met};
use jec_io::{EventReader, EventWriter, FormatError, read_events, write_events};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

fn tmp_path(name: &str) -> PathBuf {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
    let mut p = std::env::temp_dir();
    p.push(format!("jec_io_{}_{}_{}", std::process::id(), nanos, name));
    p
}

fn jet(pt: f32, flavour: i8, good: bool) -> Jet {
    Jet {
        pt_raw: pt,
        eta_raw: -2.4,
        phi_raw: std::f32::consts::PI,
        mass_raw: 7.5,
        jec_factor: 1.07,
        area: 0.5,
        is_good: good,
        b_tag_cmva: 0.33,
        b_tag_deep_csv: DeepCsv::from_array([0.2, 0.5, 0.1, 0.2]),
        pileup_discr: -0.3,
        flavour_hadron: flavour,
        flavour_parton: -flavour,
        has_gen_match: good,
    }
}

fn sample_events() -> Vec<Event> {
    vec![
        Event::new(vec![jet(120.0, 5, true), jet(45.0, 4, false)], Met { pt_raw: 42.0, phi_raw: -0.5 }),
        Event::new(vec![], Met { pt_raw: 3.0, phi_raw: 1.0 }),
        Event::new(vec![jet(18.5, 0, true)], Met { pt_raw: 0.0, phi_raw: 0.0 }),
    ]
}

#[test]
fn file_round_trip() {
    let path = tmp_path("round_trip.jecr");
    let events = sample_events();

    let n = write_events(&path, &events).expect("write failed");
    assert_eq!(n, 3);

    let back = read_events(&path).expect("read failed");
    assert_eq!(back, events);
    assert_eq!(back[0].jets[1].flavour_parton, -4);
    assert!(back[1].jets.is_empty());

    std::fs::remove_file(&path).ok();
}

#[test]
fn streaming_reader_yields_events_in_order() {
    let mut w = EventWriter::new(Vec::new()).unwrap();
    for ev in sample_events() {
        w.write_event(&ev).unwrap();
    }
    assert_eq!(w.n_events(), 3);
    let (bytes, _) = w.finish().unwrap();

    let pts: Vec<usize> =
        EventReader::new(bytes.as_slice()).unwrap().map(|ev| ev.unwrap().jets.len()).collect();
    assert_eq!(pts, vec![2, 0, 1]);
}

#[test]
fn truncated_file_fails_loudly() {
    let path = tmp_path("truncated.jecr");
    write_events(&path, &sample_events()).unwrap();
    let mut bytes = std::fs::read(&path).unwrap();
    bytes.truncate(bytes.len() - 1);
    std::fs::write(&path, &bytes).unwrap();

    match read_events(&path) {
        Err(FormatError::Truncated { need: 60, have: 59, .. }) => {}
        other => panic!("expected Truncated, got {other:?}"),
    }
    std::fs::remove_file(&path).ok();
}

#[test]
fn corrupt_bool_inside_stream_is_reported() {
    let ev = Event::new(vec![jet(30.0, 5, true)], Met::default());
    let mut w = EventWriter::new(Vec::new()).unwrap();
    w.write_event(&ev).unwrap();
    let (mut bytes, _) = w.finish().unwrap();
    // header (6) + count (4) + is_good offset (24)
    bytes[6 + 4 + 24] = 7;

    let err = EventReader::new(bytes.as_slice()).unwrap().next().unwrap().unwrap_err();
    assert!(matches!(err, FormatError::InvalidBool { field: "is_good", value: 7, .. }));
}

#[test]
fn missing_file_is_io_error() {
    let err = read_events(tmp_path("does_not_exist.jecr")).unwrap_err();
    assert!(matches!(err, FormatError::Io(_)));
}

#[test]
fn oversized_event_leaves_no_file_behind() {
    let path = tmp_path("oversized.jecr");
    let big = Event::new(vec![jet(10.0, 0, true); 10_001], Met::default());
    let events = vec![sample_events().remove(0), big];

    match write_events(&path, &events) {
        Err(FormatError::Oversized { count: 10_001, max: 10_000 }) => {}
        other => panic!("expected Oversized, got {other:?}"),
    }
    assert!(!path.exists(), "partial stream left at {}", path.display());
}
