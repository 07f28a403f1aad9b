// src/tests/logentry_tests.rs

//! tests for `logentry.rs`

#![allow(non_snake_case)]

use crate::common::FPath;
use crate::data::logentry::{LogEntry, LogEntryP};
use crate::tests::common::{dt_utc, DATE_FOLDER_A, HOST_A, SOURCE_A};

fn new_logentry() -> LogEntry {
    LogEntry::new(
        dt_utc(2023, 8, 15, 10, 0, 1),
        String::from("input"),
        String::from("whoami"),
        FPath::from(SOURCE_A),
        Some(String::from(HOST_A)),
        Some(String::from(DATE_FOLDER_A)),
    )
}

#[test]
fn test_logentry_new_body0() {
    let entry = new_logentry();
    assert_eq!(entry.body().len(), 1);
    assert_eq!(entry.body()[0], "whoami");
    assert_eq!(entry.count_lines(), 1);
}

#[test]
fn test_logentry_accessors() {
    let entry = new_logentry();
    assert_eq!(*entry.dt(), dt_utc(2023, 8, 15, 10, 0, 1));
    assert_eq!(entry.kind(), "input");
    assert_eq!(entry.source(), SOURCE_A);
    assert_eq!(entry.host().as_deref(), Some(HOST_A));
    assert_eq!(entry.date_folder().as_deref(), Some(DATE_FOLDER_A));
}

#[test]
fn test_logentry_push_line_verbatim() {
    let mut entry = new_logentry();
    entry.push_line("  indented, kept verbatim\t");
    entry.push_line("");
    assert_eq!(entry.count_lines(), 3);
    assert_eq!(entry.body()[1], "  indented, kept verbatim\t");
    assert_eq!(entry.body()[2], "");
}

#[test]
fn test_logentry_empty_body0_is_still_a_line() {
    let entry = LogEntry::new(
        dt_utc(2023, 8, 15, 10, 0, 5),
        String::from("output"),
        String::from(""),
        FPath::from(SOURCE_A),
        None,
        None,
    );
    assert_eq!(entry.count_lines(), 1);
    assert_eq!(entry.body()[0], "");
    assert!(entry.host().is_none());
    assert!(entry.date_folder().is_none());
}

#[test]
fn test_logentryp_shares_one_entry() {
    let entryp: LogEntryP = LogEntryP::new(new_logentry());
    let entryp2: LogEntryP = entryp.clone();
    assert!(LogEntryP::ptr_eq(&entryp, &entryp2));
    assert_eq!(*entryp.dt(), *entryp2.dt());
}
