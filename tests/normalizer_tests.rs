mod common;
use common::{day, dt, row};
use rpoolboard::core::normalizer::{Normalizer, parse_load};
use rpoolboard::input::sheet::read_rows_from;
use rpoolboard::utils::time::parse_day_first;

#[test]
fn test_parse_day_first_formats() {
    let expected = dt("03/04/2025 09:15");

    for s in [
        "03/04/2025 09:15",
        "03/04/2025 09:15:00",
        "03-04-2025 09:15",
        "03.04.2025 09:15:00",
        "03/04/25 09:15",
        "2025-04-03 09:15:00",
        "2025-04-03T09:15",
        " 03/04/2025 09:15:00.000 ",
    ] {
        assert_eq!(parse_day_first(s, day()), Some(expected), "format {:?}", s);
    }
}

#[test]
fn test_parse_day_first_is_day_first() {
    // 03/04 is the 3rd of April, never March 4th
    let parsed = parse_day_first("03/04/2025 00:00", day()).unwrap();
    assert_eq!(parsed.format("%Y-%m-%d").to_string(), "2025-04-03");

    // day 13 cannot be a month
    assert!(parse_day_first("13/01/2025 08:00", day()).is_some());
    assert!(parse_day_first("01/13/2025 08:00", day()).is_none());
}

#[test]
fn test_parse_day_first_date_and_time_only() {
    assert_eq!(
        parse_day_first("05/06/2025", day()),
        Some(dt("05/06/2025 00:00"))
    );
    assert_eq!(parse_day_first("14:30", day()), Some(dt("01/06/2025 14:30")));
}

#[test]
fn test_parse_day_first_garbage_is_absent() {
    for s in ["", "   ", "yesterday", "NaT", "32/01/2025 10:00", "25:00"] {
        assert_eq!(parse_day_first(s, day()), None, "input {:?}", s);
    }
}

#[test]
fn test_parse_load_defaults() {
    assert_eq!(parse_load("42"), 42.0);
    assert_eq!(parse_load(" 7.5 "), 7.5);
    assert_eq!(parse_load("-3"), 0.0);
    assert_eq!(parse_load("abc"), 0.0);
    assert_eq!(parse_load(""), 0.0);
    assert_eq!(parse_load("NaN"), 0.0);
    assert_eq!(parse_load("inf"), 0.0);
}

#[test]
fn test_rows_missing_identity_are_dropped() {
    let rows = vec![
        row(&[("Name", "Bob"), ("Pool Name", "North"), ("Tab", "A1"), ("Load", "5")]),
        row(&[("Pool Name", "North"), ("Tab", "A1"), ("Load", "5")]),
        row(&[("Name", "Carol"), ("Tab", "A1"), ("Load", "5")]),
        row(&[("Name", "Dan"), ("Pool Name", "North"), ("Tab", "  "), ("Load", "5")]),
    ];

    let report = Normalizer::new(day()).normalize(&rows);

    assert_eq!(report.records.len(), 1);
    assert_eq!(report.dropped, 3);
    assert_eq!(report.records[0].name, "Bob");
    assert_eq!(report.records[0].pool_id(), "North - A1");
}

#[test]
fn test_bad_cells_default_without_dropping() {
    let rows = vec![row(&[
        ("Name", "Bob"),
        ("Pool Name", "North"),
        ("Tab", "A1"),
        ("Load", "lots"),
        ("Start Time", "soon"),
        ("End Time", "01/06/2025 10:00"),
        ("Pool Up", "not a date"),
    ])];

    let report = Normalizer::new(day()).normalize(&rows);
    let rec = &report.records[0];

    assert_eq!(report.dropped, 0);
    assert_eq!(rec.load, 0.0);
    assert_eq!(rec.start_time, None);
    assert_eq!(rec.end_time, Some(dt("01/06/2025 10:00")));
    assert_eq!(rec.pool_up_time, None);
    // end without start: duration unknown
    assert_eq!(rec.duration_seconds(), None);
    assert!(!rec.is_lead());
    assert!(!rec.is_active());
}

#[test]
fn test_headers_are_case_insensitive() {
    let rows = vec![row(&[
        (" name ", "Bob"),
        ("POOL NAME", "North"),
        ("tab", "A1"),
        ("load", "12"),
        ("pool up", "01/06/2025 09:00"),
    ])];

    let report = Normalizer::new(day()).normalize(&rows);
    assert_eq!(report.records.len(), 1);
    assert!(report.records[0].is_lead());
    assert_eq!(report.records[0].load, 12.0);
}

#[test]
fn test_read_rows_from_csv() {
    let data = "\
Name,Pool Name,Tab,Load,Start Time,End Time,Pool Up,Notes
Alice,North,A1,100,,,01/06/2025 09:00:00,opened late
Bob,North,A1,48,01/06/2025 09:05:00,01/06/2025 09:20:00,
Carol,North,A1
";
    let rows = read_rows_from(data.as_bytes()).expect("read csv");
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].get("Pool Up"), Some("01/06/2025 09:00:00"));
    assert_eq!(rows[0].get("Notes"), Some("opened late"));
    assert_eq!(rows[1].get("Load"), Some("48"));
    // short row: missing cells read as absent
    assert_eq!(rows[2].get("Load"), None);
}

#[test]
fn test_read_rows_requires_identity_columns() {
    let data = "Name,Tab,Load\nBob,A1,3\n";
    let err = read_rows_from(data.as_bytes()).unwrap_err();
    assert!(err.to_string().contains("Pool Name"));
}

#[test]
fn test_read_rows_tolerates_missing_optional_columns() {
    let data = "Name,Pool Name,Tab\nBob,North,A1\n";
    let rows = read_rows_from(data.as_bytes()).expect("read csv");
    let report = Normalizer::new(day()).normalize(&rows);
    assert_eq!(report.records.len(), 1);
    assert_eq!(report.records[0].load, 0.0);
}

#[test]
fn test_read_rows_from_keeps_rows_around_non_utf8_cell() {
    let mut data = b"Name,Pool Name,Tab,Load\nBob,North,A1,5\nAnn,North,A1,3\n".to_vec();
    // Latin-1 "José"
    data.extend_from_slice(b"Jos\xe9,North,A1,4\n");

    let rows = read_rows_from(data.as_slice()).expect("non-utf8 cell is not fatal");
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].get("Name"), Some("Bob"));
    assert_eq!(rows[2].get("Name"), Some("Jos\u{fffd}"));

    let report = Normalizer::new(day()).normalize(&rows);
    assert_eq!(report.records.len(), 3);
    assert_eq!(report.dropped, 0);
}
