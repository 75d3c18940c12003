mod common;

use common::{T, roster_reference, rts, source_header, temp_home, temp_path, xlsx};
use predicates::prelude::*;
use predicates::str::contains;
use rtimesheet::import::read_first_sheet;
use rtimesheet::models::CellValue;
use std::fs;

fn write_inputs(name: &str) -> (std::path::PathBuf, std::path::PathBuf) {
    let source = temp_path(&format!("{name}_source"), "xlsx");
    let reference = temp_path(&format!("{name}_reference"), "xlsx");

    fs::write(
        &source,
        xlsx(&[
            source_header(),
            vec![
                T::S("An"),
                T::S("10/1/2025 08:00"),
                T::S("10/1/2025 17:00"),
                T::N(8.0),
            ],
        ]),
    )
    .expect("write source");
    fs::write(&reference, roster_reference(&["An", "Binh"])).expect("write reference");

    (source, reference)
}

#[test]
fn test_convert_writes_output_file() {
    let home = temp_home("convert");
    let (source, reference) = write_inputs("convert");
    let out = temp_path("convert_out", "xlsx");

    rts()
        .env("HOME", &home)
        .args([
            "convert",
            "--source",
            source.to_str().unwrap(),
            "--reference",
            reference.to_str().unwrap(),
            "--range",
            "2025-10-01",
            "--out",
            out.to_str().unwrap(),
            "--force",
        ])
        .assert()
        .success()
        .stdout(contains("Found 1 entries in the source file"))
        .stdout(contains("Found 2 employees in the reference file"))
        .stdout(contains("Conversion completed successfully!"));

    let sheet = read_first_sheet(&fs::read(&out).expect("output exists")).expect("readable");
    assert_eq!(sheet.get(0, 2), &CellValue::Text("1/10/2025 Login".into()));
    assert_eq!(sheet.get(1, 2), &CellValue::Text("08:00".into()));
    assert_eq!(sheet.get(1, 4), &CellValue::Number(8.0));
    assert!(sheet.get(2, 2).is_empty());
}

#[test]
fn test_convert_writes_json_report() {
    let home = temp_home("report");
    let (source, reference) = write_inputs("report");
    let out = temp_path("report_out", "xlsx");
    let report = temp_path("report_log", "json");

    rts()
        .env("HOME", &home)
        .args([
            "convert",
            "-s",
            source.to_str().unwrap(),
            "-r",
            reference.to_str().unwrap(),
            "--range",
            "2025-10-01:2025-10-02",
            "-o",
            out.to_str().unwrap(),
            "--report",
            report.to_str().unwrap(),
            "-f",
        ])
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report).expect("report exists")).unwrap();
    assert_eq!(json["file_name"], "Employee_Time_2025-10-01_2025-10-02.xlsx");
    assert_eq!(json["summary"]["matched"], 1);
    assert_eq!(json["summary"]["unmatched_roster"], 1);
    assert_eq!(json["log"][0], "Reading source file...");
}

#[test]
fn test_reversed_range_fails_before_reading_files() {
    let home = temp_home("reversed");

    rts()
        .env("HOME", &home)
        .args([
            "convert",
            "-s",
            "/nonexistent/source.xlsx",
            "-r",
            "/nonexistent/reference.xlsx",
            "--range",
            "2025-10-05:2025-10-01",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date range"));
}

#[test]
fn test_missing_source_is_reported() {
    let home = temp_home("missing");
    let (_, reference) = write_inputs("missing");

    rts()
        .env("HOME", &home)
        .args([
            "convert",
            "-s",
            "/nonexistent/source.xlsx",
            "-r",
            reference.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(contains("source file not found"));
}

#[test]
fn test_inspect_reports_reference_layout() {
    let home = temp_home("inspect");
    let reference = temp_path("inspect_reference", "xlsx");
    fs::write(
        &reference,
        xlsx(&[
            vec![T::S("STT"), T::S("Họ tên"), T::S("1/10"), T::E, T::S("2/10"), T::E],
            vec![T::N(1.0), T::S("An")],
            vec![T::N(2.0), T::S("Binh")],
        ]),
    )
    .expect("write reference");

    rts()
        .env("HOME", &home)
        .args(["inspect", reference.to_str().unwrap()])
        .assert()
        .success()
        .stdout(contains("A1:E3"))
        .stdout(contains("Date columns"))
        .stdout(contains("Roster employees"))
        .stdout(contains("\"Họ tên\""));
}

#[test]
fn test_init_and_print_config() {
    let home = temp_home("init");
    let conf = home.join("custom.conf");

    rts()
        .env("HOME", &home)
        .args(["--config", conf.to_str().unwrap(), "init"])
        .assert()
        .success()
        .stdout(contains("Config file created"));
    assert!(conf.exists());

    rts()
        .env("HOME", &home)
        .args(["--config", conf.to_str().unwrap(), "config", "--print"])
        .assert()
        .success()
        .stdout(contains("range_output_pattern"))
        .stdout(contains("Employee_Time_{start}_{end}.xlsx"));

    rts()
        .env("HOME", &home)
        .args(["--config", conf.to_str().unwrap(), "init"])
        .assert()
        .success()
        .stdout(contains("already present"));
}

#[test]
fn test_missing_custom_config_fails() {
    let home = temp_home("noconf");

    rts()
        .env("HOME", &home)
        .args(["--config", "/nonexistent/rtimesheet.conf", "config"])
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}

#[test]
fn test_failed_conversion_reports_the_error_once() {
    let home = temp_home("corrupt");
    let (_, reference) = write_inputs("corrupt");
    let source = temp_path("corrupt_source", "xlsx");
    fs::write(&source, b"PK\x03\x04 truncated package").expect("write source");
    let out = temp_path("corrupt_out", "xlsx");

    rts()
        .env("HOME", &home)
        .args([
            "convert",
            "-s",
            source.to_str().unwrap(),
            "-r",
            reference.to_str().unwrap(),
            "-o",
            out.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stdout(contains("Reading source file..."))
        .stdout(contains("Error:").not())
        .stderr(contains("Unreadable spreadsheet").count(1));

    assert!(!out.exists());
}

#[test]
fn test_existing_output_needs_force_without_a_terminal() {
    let home = temp_home("noforce");
    let (source, reference) = write_inputs("noforce");
    let out = temp_path("noforce_out", "xlsx");
    fs::write(&out, b"previous run").expect("write output");

    rts()
        .env("HOME", &home)
        .args([
            "convert",
            "-s",
            source.to_str().unwrap(),
            "-r",
            reference.to_str().unwrap(),
            "-o",
            out.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(contains("--force"));

    assert_eq!(fs::read(&out).unwrap(), b"previous run");
}
