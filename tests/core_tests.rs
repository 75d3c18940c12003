use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rtimesheet::core::aggregate::{Aggregation, scan_entries};
use rtimesheet::core::fields::{FieldLookup, FieldSet};
use rtimesheet::core::normalize::normalize_name;
use rtimesheet::core::planner::{plan_from_header, plan_from_range};
use rtimesheet::core::roster::read_roster;
use rtimesheet::errors::AppError;
use rtimesheet::models::{CellValue, ColumnPlan, DateKey, DateRange, RawEntry, Sheet, Stamp};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn at(y: i32, m: u32, day: u32, h: u32, min: u32) -> NaiveDateTime {
    d(y, m, day).and_hms_opt(h, min, 0).unwrap()
}

fn entry(name: &str, login: Option<NaiveDateTime>, logout: Option<NaiveDateTime>, hours: Option<f64>) -> RawEntry {
    RawEntry {
        row: 0,
        name: Some(name.to_string()),
        login: login.map(Stamp::at),
        logout: logout.map(Stamp::at),
        hours,
    }
}

fn sheet(rows: &[&[&str]]) -> Sheet {
    let mut s = Sheet::new("Sheet1");
    for (r, row) in rows.iter().enumerate() {
        for (c, v) in row.iter().enumerate() {
            s.set_text(r as u32, c as u32, *v);
        }
    }
    s
}

#[test]
fn test_normalize_name() {
    assert_eq!(normalize_name("  An   Nguyen "), "an nguyen");
    assert_eq!(normalize_name("Trần\tThị\u{a0}Bình"), "trần thị bình");
    assert_eq!(normalize_name(""), "");
}

#[test]
fn test_field_lookup_priority_and_fallback() {
    let header = [
        CellValue::Text("STT".into()),
        CellValue::Text("Name".into()),
        CellValue::Text(" Họ tên ".into()),
    ];
    let refs: Vec<&CellValue> = header.iter().collect();

    // "Họ tên" comes before "Name" in the priority list
    let r = FieldLookup::name().resolve(&refs);
    assert_eq!(r.col, 2);
    assert_eq!(r.label.as_deref(), Some("Họ tên"));

    let r = FieldLookup::login().resolve(&refs);
    assert_eq!((r.col, r.label), (2, None));

    // matching is case sensitive
    let header = [CellValue::Text("login".into())];
    let refs: Vec<&CellValue> = header.iter().collect();
    assert_eq!(FieldLookup::login().resolve(&refs).label, None);
}

#[test]
fn test_merge_is_last_write_wins_per_field() {
    let agg = Aggregation::build(&[
        entry("An", Some(at(2025, 10, 1, 8, 0)), Some(at(2025, 10, 1, 12, 0)), Some(4.0)),
        entry("An", Some(at(2025, 10, 1, 13, 0)), None, None),
        entry("An", None, None, Some(9.5)),
    ]);

    let days = agg.records_for("An").unwrap();
    let rec = &days[&d(2025, 10, 1)];
    assert_eq!(rec.login, Some(at(2025, 10, 1, 13, 0)));
    assert_eq!(rec.logout, Some(at(2025, 10, 1, 12, 0)));
    assert_eq!(rec.hours, Some(4.0));

    // hours without any timestamp cannot be filed
    assert_eq!(agg.undated_fields, 1);
}

#[test]
fn test_fields_are_filed_under_their_own_dates() {
    let agg = Aggregation::build(&[entry(
        "An",
        Some(at(2025, 10, 1, 22, 0)),
        Some(at(2025, 10, 2, 6, 0)),
        Some(8.0),
    )]);

    let days = agg.records_for("An").unwrap();
    assert_eq!(days[&d(2025, 10, 1)].login, Some(at(2025, 10, 1, 22, 0)));
    assert_eq!(days[&d(2025, 10, 1)].logout, None);
    assert_eq!(days[&d(2025, 10, 1)].hours, Some(8.0));
    assert_eq!(days[&d(2025, 10, 2)].logout, Some(at(2025, 10, 2, 6, 0)));
    assert_eq!(days[&d(2025, 10, 2)].login, None);

    // the session view keeps the pair together under the login date
    let sessions = agg.sessions_for("An").unwrap();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[&d(2025, 10, 1)][0].logout, Some(at(2025, 10, 2, 6, 0)));
}

#[test]
fn test_hours_fall_back_to_logout_date() {
    let agg = Aggregation::build(&[entry("An", None, Some(at(2025, 10, 3, 17, 0)), Some(7.0))]);
    assert_eq!(agg.records_for("An").unwrap()[&d(2025, 10, 3)].hours, Some(7.0));
}

#[test]
fn test_name_resolution_order() {
    let agg = Aggregation::build(&[
        entry("An Nguyen", None, None, None),
        entry("an  nguyen", None, None, None),
        entry(" Binh", None, None, None),
    ]);

    assert_eq!(agg.employees().len(), 3);
    assert_eq!(agg.resolve_name("an  nguyen"), Some("an  nguyen"));
    assert_eq!(agg.resolve_name("AN NGUYEN"), Some("An Nguyen"));
    assert_eq!(agg.resolve_name("Binh"), Some(" Binh"));
    assert_eq!(agg.resolve_name("Chi"), None);
}

#[test]
fn test_entries_without_name_are_skipped() {
    let mut nameless = entry("", Some(at(2025, 10, 1, 8, 0)), None, None);
    let agg = Aggregation::build(&[nameless.clone()]);
    assert_eq!((agg.entries, agg.skipped_no_name), (1, 1));

    nameless.name = None;
    let agg = Aggregation::build(&[nameless]);
    assert_eq!(agg.skipped_no_name, 1);
    assert!(agg.employees().is_empty());
}

#[test]
fn test_scan_resolves_columns_once() {
    let source = sheet(&[
        &["Họ tên", "Login", "Logout", "Hours"],
        &["An", "10/1/2025 08:00", "10/1/2025 17:00", "8"],
        &[],
        &["Binh", "bad", "", "x"],
    ]);

    let scan = scan_entries(&source, &FieldSet::default());
    assert_eq!(scan.entries.len(), 2);
    assert_eq!(scan.unparseable_fields, 2);

    let first = &scan.entries[0];
    assert_eq!(first.row, 1);
    assert_eq!(first.hours, Some(8.0));
    assert_eq!(
        first.login.map(|s| s.time),
        NaiveTime::from_hms_opt(8, 0, 0)
    );
    assert_eq!(scan.entries[1].row, 3);
}

#[test]
fn test_roster_skips_blank_names() {
    let reference = sheet(&[
        &["STT", "Họ và tên"],
        &["1", "An"],
        &["2", " "],
        &["", ""],
        &["4", "Chi"],
    ]);

    let roster = read_roster(&reference, &FieldLookup::name());
    assert_eq!(roster.name_col, 1);
    let rows: Vec<(u32, &str)> = roster.entries.iter().map(|e| (e.row, e.name.as_str())).collect();
    assert_eq!(rows, vec![(1, "An"), (4, "Chi")]);
}

#[test]
fn test_header_plan_keeps_duplicates_in_order() {
    let reference = sheet(&[&["STT", "Họ tên", "1/10", "", "2/10", "", "1/10", "", "Ca/Kíp"]]);

    let plan = plan_from_header(&reference, '/');
    let cols = plan.columns();
    assert_eq!(cols.len(), 4);
    assert_eq!((cols[0].login_col, cols[0].logout_col), (2, 3));
    assert_eq!((cols[2].login_col, cols[2].logout_col), (6, 7));
    assert_eq!(cols[0].key, cols[2].key);
    assert_eq!(cols[3].key, None);
    assert!(cols.iter().all(|c| c.hours_col.is_none()));
    assert!(!plan.is_range_driven());
}

#[test]
fn test_range_plan_allocates_three_columns_per_date() {
    let reference = sheet(&[&["STT", "Họ tên", "1/10", "", "Ghi chú"]]);
    let range = DateRange::new(d(2025, 9, 30), d(2025, 10, 2)).unwrap();

    let plan = plan_from_range(&reference, &range, '/').unwrap();
    let ColumnPlan::RangeDriven { copied, dates, columns } = &plan else {
        panic!("expected a range plan");
    };

    // the old 1/10 pair is not copied
    assert_eq!(copied, &vec![0, 1, 4]);
    assert_eq!(dates, &vec![d(2025, 9, 30), d(2025, 10, 1), d(2025, 10, 2)]);
    assert_eq!(plan.width(), 9);
    assert_eq!(
        (columns[0].login_col, columns[0].logout_col, columns[0].hours_col),
        (3, 4, Some(5))
    );
    assert_eq!(columns[2].hours_col, Some(11));
    assert_eq!(columns[1].key, Some(DateKey::from_date(d(2025, 10, 1))));
    assert_eq!(columns[1].label, "1/10/2025");
}

#[test]
fn test_range_plan_rejects_reversed_dates() {
    let reference = sheet(&[&["STT", "Họ tên"]]);
    let reversed = DateRange {
        start: d(2025, 10, 2),
        end: d(2025, 10, 1),
    };
    assert!(matches!(
        plan_from_range(&reference, &reversed, '/'),
        Err(AppError::InvalidRange(_))
    ));
    assert!(DateRange::new(d(2025, 10, 2), d(2025, 10, 1)).is_err());
}

#[test]
fn test_missing_reference_is_rejected_before_reading() {
    use rtimesheet::config::Config;
    use rtimesheet::core::{ConversionRequest, ConvertLogic, NullSink};

    let request = ConversionRequest {
        source: Some(&b"not a spreadsheet"[..]),
        reference: Some(&[][..]),
        range: None,
    };
    let result = ConvertLogic::convert(&request, &Config::default(), &mut NullSink);
    assert!(matches!(result, Err(AppError::MissingInput(m)) if m.contains("reference")));
}

#[test]
fn test_range_plan_copies_slash_labels_that_are_not_dates() {
    let reference = sheet(&[&["STT", "Họ tên", "Chức vụ/Vị trí", "Ghi chú", "1/10", ""]]);
    let range = DateRange::new(d(2025, 10, 1), d(2025, 10, 1)).unwrap();

    let plan = plan_from_range(&reference, &range, '/').unwrap();
    let ColumnPlan::RangeDriven { copied, columns, .. } = &plan else {
        panic!("expected a range plan");
    };

    assert_eq!(copied, &vec![0, 1, 2, 3]);
    assert_eq!(columns[0].login_col, 4);
}

#[test]
fn test_console_sink_records_the_failure_line() {
    use rtimesheet::core::{ConsoleSink, ProgressSink};

    let mut sink = ConsoleSink::default();
    sink.emit("Reading source file...");
    sink.fail("Error: boom");
    assert_eq!(sink.messages, vec!["Reading source file...", "Error: boom"]);
}
