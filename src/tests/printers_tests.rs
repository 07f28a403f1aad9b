// src/tests/printers_tests.rs

//! tests for `printer/printers.rs`

#![allow(non_snake_case)]

use crate::aggregate::{MapHostDateEntries, MapHostEntries, MapTypeEntries};
use crate::common::{CollectedWarnings, FPath, Host, WarningSink};
use crate::data::logentry::LogEntry;
use crate::printer::printers::{
    render_entry,
    write_complete_logs,
    write_daily_logs,
    write_system_logs,
    SUBDIR_COMPLETE,
    SUBDIR_DAILY,
};
use crate::readers::helpers::path_to_fpath;
use crate::readers::inventory::SystemLogType;
use crate::readers::logentryreader::LogEntryReader;
use crate::tests::common::{dt_utc, new_entryp, DATE_FOLDER_A, HOST_A, SOURCE_A};

use std::fs;

use ::tempfile::tempdir;

const DATA_TWO_RECORDS: &str = "08/15 10:00:01 UTC [input] whoami\nDOMAIN\\user\n08/15 10:00:05 UTC [output] \nadministrator\n";

#[test]
fn test_render_entry_header_only() {
    let entryp = new_entryp(dt_utc(2023, 8, 15, 10, 0, 1), "whoami", Some(DATE_FOLDER_A));
    assert_eq!(render_entry(&entryp), "08/15 10:00:01 UTC [output] whoami\n");
}

#[test]
fn test_render_entry_continuation_lines_verbatim() {
    let mut entry = LogEntry::new(
        dt_utc(2023, 8, 15, 10, 0, 5),
        String::from("output"),
        String::from(""),
        FPath::from(SOURCE_A),
        Some(String::from(HOST_A)),
        Some(String::from(DATE_FOLDER_A)),
    );
    entry.push_line("  indented");
    entry.push_line("");
    entry.push_line("last ");
    assert_eq!(render_entry(&entry), "08/15 10:00:05 UTC [output] \n  indented\n\nlast \n");
}

/// an empty body cannot occur through `LogEntry::new`; render defensively
#[test]
fn test_render_entry_empty_body_marker() {
    let mut entry = LogEntry::new(
        dt_utc(2023, 8, 15, 10, 0, 5),
        String::from("output"),
        String::from("x"),
        FPath::from(SOURCE_A),
        None,
        None,
    );
    entry.body.clear();
    assert_eq!(render_entry(&entry), "08/15 10:00:05 UTC [output] (empty)\n");
}

/// parse-then-render reproduces the original record text exactly
#[test]
fn test_render_entry_roundtrip() {
    let mut warnings = CollectedWarnings::new();
    let mut reader = LogEntryReader::new(
        FPath::from(SOURCE_A),
        Some(String::from(HOST_A)),
        Some(String::from(DATE_FOLDER_A)),
        &mut warnings,
    );
    let entries = reader.process_text(DATA_TWO_RECORDS, &mut warnings);
    assert_eq!(entries.len(), 2);
    let mut rendered = String::new();
    for entryp in entries.iter() {
        rendered.push_str(&render_entry(entryp));
    }
    assert_eq!(rendered, DATA_TWO_RECORDS);
}

#[test]
fn test_write_complete_logs() {
    let out = tempdir().unwrap();
    let out_fpath: FPath = path_to_fpath(out.path());
    let mut warnings = CollectedWarnings::new();
    let mut map = MapHostEntries::new();
    map.insert(
        Host::from(HOST_A),
        vec![
            new_entryp(dt_utc(2023, 8, 15, 10, 0, 1), "a", Some(DATE_FOLDER_A)),
            new_entryp(dt_utc(2023, 8, 15, 10, 0, 5), "b", Some(DATE_FOLDER_A)),
        ],
    );
    map.insert(Host::from("10.0.0.9"), vec![]);
    let count = write_complete_logs(&map, &out_fpath, &mut warnings);
    // the empty group is not written
    assert_eq!(count, 1);
    assert_eq!(warnings.count(), 0, "warnings {:?}", warnings.messages);
    let written = fs::read_to_string(
        out.path()
            .join(SUBDIR_COMPLETE)
            .join("10.0.0.5-Complete.log"),
    )
    .unwrap();
    assert_eq!(
        written,
        "08/15 10:00:01 UTC [output] a\n08/15 10:00:05 UTC [output] b\n",
    );
    assert!(!out
        .path()
        .join(SUBDIR_COMPLETE)
        .join("10.0.0.9-Complete.log")
        .exists());
}

#[test]
fn test_write_daily_logs() {
    let out = tempdir().unwrap();
    let out_fpath: FPath = path_to_fpath(out.path());
    let mut warnings = CollectedWarnings::new();
    let mut map = MapHostDateEntries::new();
    map.insert(
        (Host::from(HOST_A), String::from("230815")),
        vec![new_entryp(dt_utc(2023, 8, 15, 10, 0, 1), "a", Some("230815"))],
    );
    map.insert(
        (Host::from(HOST_A), String::from("230816")),
        vec![new_entryp(dt_utc(2023, 8, 16, 9, 0, 0), "b", Some("230816"))],
    );
    let count = write_daily_logs(&map, &out_fpath, &mut warnings);
    assert_eq!(count, 2);
    let daily = out.path().join(SUBDIR_DAILY);
    assert_eq!(
        fs::read_to_string(daily.join("10.0.0.5-230815.log")).unwrap(),
        "08/15 10:00:01 UTC [output] a\n",
    );
    assert_eq!(
        fs::read_to_string(daily.join("10.0.0.5-230816.log")).unwrap(),
        "08/16 09:00:00 UTC [output] b\n",
    );
}

#[test]
fn test_write_system_logs() {
    let out = tempdir().unwrap();
    let out_fpath: FPath = path_to_fpath(out.path());
    let mut warnings = CollectedWarnings::new();
    let mut map = MapTypeEntries::new();
    map.insert(
        SystemLogType::Events,
        vec![new_entryp(dt_utc(2023, 8, 15, 12, 0, 0), "event", Some(DATE_FOLDER_A))],
    );
    let count = write_system_logs(&map, &out_fpath, &mut warnings);
    assert_eq!(count, 1);
    assert_eq!(
        fs::read_to_string(
            out.path()
                .join(SUBDIR_COMPLETE)
                .join("events-Complete.log"),
        )
        .unwrap(),
        "08/15 12:00:00 UTC [output] event\n",
    );
}

/// one unwritable group is skipped with a warning; the other group is
/// still written and counted
#[test]
fn test_write_complete_logs_one_group_fails() {
    let out = tempdir().unwrap();
    let out_fpath: FPath = path_to_fpath(out.path());
    let mut warnings = CollectedWarnings::new();
    // occupy one group's output path with a directory so `File::create`
    // fails for that group only
    fs::create_dir_all(
        out.path()
            .join(SUBDIR_COMPLETE)
            .join("10.0.0.5-Complete.log"),
    )
    .unwrap();
    let mut map = MapHostEntries::new();
    map.insert(
        Host::from(HOST_A),
        vec![new_entryp(dt_utc(2023, 8, 15, 10, 0, 1), "a", Some(DATE_FOLDER_A))],
    );
    map.insert(
        Host::from("10.0.0.6"),
        vec![new_entryp(dt_utc(2023, 8, 15, 10, 0, 2), "b", Some(DATE_FOLDER_A))],
    );
    let count = write_complete_logs(&map, &out_fpath, &mut warnings);
    assert_eq!(count, 1);
    assert_eq!(warnings.count(), 1);
    assert!(
        warnings.messages[0].contains(HOST_A),
        "warning does not name the group: {:?}",
        warnings.messages[0],
    );
    assert_eq!(
        fs::read_to_string(
            out.path()
                .join(SUBDIR_COMPLETE)
                .join("10.0.0.6-Complete.log"),
        )
        .unwrap(),
        "08/15 10:00:02 UTC [output] b\n",
    );
}
