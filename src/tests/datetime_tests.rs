// src/tests/datetime_tests.rs

//! tests for `datetime.rs`

#![allow(non_snake_case)]

use crate::common::{CollectedWarnings, FPath, WarningSink};
use crate::data::datetime::{
    date_folder_is_valid,
    date_folder_now,
    datetime_from_header_parts,
    year_from_date_folder,
    Datelike,
    Utc,
};
use crate::tests::common::dt_utc;

use ::test_case::test_case;

#[test_case("230815", true)]
#[test_case("000101", true)]
#[test_case("23081", false; "five digits")]
#[test_case("2308150", false; "seven digits")]
#[test_case("23o815", false; "non digit")]
#[test_case("23-815", false; "dash")]
#[test_case("", false; "empty")]
fn test_date_folder_is_valid(
    token: &str,
    expect: bool,
) {
    assert_eq!(date_folder_is_valid(token), expect);
}

#[test_case("230815", 2023)]
#[test_case("000101", 2000)]
#[test_case("991231", 2099)]
fn test_year_from_date_folder_valid(
    token: &str,
    expect: i32,
) {
    let mut warnings = CollectedWarnings::new();
    let source = FPath::from("beacon_1234.log");
    let year = year_from_date_folder(Some(token), &source, &mut warnings);
    assert_eq!(year, expect);
    assert_eq!(warnings.count(), 0, "unexpected warnings {:?}", warnings.messages);
}

#[test_case(Some("2308"); "too short")]
#[test_case(Some("23081500"); "too long")]
#[test_case(Some("23o815"); "non digit")]
#[test_case(None; "absent")]
fn test_year_from_date_folder_invalid_falls_back(token: Option<&str>) {
    let mut warnings = CollectedWarnings::new();
    let source = FPath::from("beacon_1234.log");
    let year = year_from_date_folder(token, &source, &mut warnings);
    assert_eq!(year, Utc::now().year());
    assert_eq!(warnings.count(), 1);
    assert!(
        warnings.messages[0].contains("beacon_1234.log"),
        "warning does not name the source: {:?}",
        warnings.messages[0],
    );
}

#[test]
fn test_datetime_from_header_parts_valid() {
    let dt = datetime_from_header_parts(2023, 8, 15, 10, 0, 1).unwrap();
    assert_eq!(dt, dt_utc(2023, 8, 15, 10, 0, 1));
}

#[test]
fn test_datetime_from_header_parts_leap_day() {
    assert!(datetime_from_header_parts(2024, 2, 29, 0, 0, 0).is_some());
    assert!(datetime_from_header_parts(2023, 2, 29, 0, 0, 0).is_none());
}

#[test_case(13, 1, 0, 0, 0; "month 13")]
#[test_case(0, 1, 0, 0, 0; "month 0")]
#[test_case(9, 31, 0, 0, 0; "day 31 in 30 day month")]
#[test_case(1, 40, 0, 0, 0; "day 40")]
#[test_case(1, 1, 25, 0, 0; "hour 25")]
#[test_case(1, 1, 0, 60, 0; "minute 60")]
#[test_case(1, 1, 0, 0, 60; "second 60")]
fn test_datetime_from_header_parts_invalid(
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) {
    assert!(datetime_from_header_parts(2023, month, day, hour, minute, second).is_none());
}

#[test]
fn test_date_folder_now_is_valid() {
    let token = date_folder_now();
    assert!(date_folder_is_valid(&token), "token {:?}", token);
}
