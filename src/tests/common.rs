// src/tests/common.rs

//! Helpers shared among the test modules.

#![allow(non_snake_case)]

use crate::common::{DateFolderOpt, FPath, HostOpt};
use crate::data::datetime::{DateTimeU, TimeZone, Utc};
use crate::data::logentry::{LogEntry, LogEntryP};

pub const HOST_A: &str = "10.0.0.5";
pub const SOURCE_A: &str = "230815/10.0.0.5/beacon_1234.log";
pub const DATE_FOLDER_A: &str = "230815";

/// shorthand for an `unwrap`ped UTC instant
pub fn dt_utc(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> DateTimeU {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, second)
        .unwrap()
}

/// create an interesting finalized `LogEntry` for host [`HOST_A`]
///
/// `body0` doubles as the distinguishing label in ordering assertions
pub fn new_entryp(
    dt: DateTimeU,
    body0: &str,
    date_folder: Option<&str>,
) -> LogEntryP {
    let host: HostOpt = Some(String::from(HOST_A));
    let date_folder: DateFolderOpt = date_folder.map(String::from);
    let entry = LogEntry::new(
        dt,
        String::from("output"),
        String::from(body0),
        FPath::from(SOURCE_A),
        host,
        date_folder,
    );

    LogEntryP::new(entry)
}
