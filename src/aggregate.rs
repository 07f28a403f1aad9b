// src/aggregate.rs

//! Group [`LogEntry`]s and give each group a total, deterministic order.
//!
//! Entries of one group commonly share a timestamp; header timestamps have
//! second resolution and many sources emit several records per second. All
//! sorting here is _stable_ ascending by timestamp, so entries with equal
//! timestamps keep their relative input order, the encounter order of the
//! merged source files. Re-running over the same input reproduces the same
//! output byte-for-byte.
//!
//! Groups are [`BTreeMap`]-keyed so iteration order, and thus output file
//! creation order, is deterministic as well.
//!
//! Aggregation never mutates an entry; only the containing collections are
//! reordered or re-keyed. Entries are shared into the composite view via
//! [`LogEntryP`] clones.
//!
//! [`LogEntry`]: crate::data::logentry::LogEntry
//! [`LogEntryP`]: crate::data::logentry::LogEntryP
//! [`BTreeMap`]: std::collections::BTreeMap

use crate::common::{DateFolder, Host};
use crate::data::logentry::LogEntries;
use crate::readers::inventory::SystemLogType;

use std::collections::BTreeMap;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// grouped views
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// all-time view: every entry of one host, across all date folders
pub type MapHostEntries = BTreeMap<Host, LogEntries>;
/// per-day view: every entry of one host within one date folder
pub type MapHostDateEntries = BTreeMap<(Host, DateFolder), LogEntries>;
/// system-log view: every entry of one category
pub type MapTypeEntries = BTreeMap<SystemLogType, LogEntries>;

/// Stable ascending sort by timestamp.
///
/// `Vec::sort_by_key` is a stable sort; equal-timestamp entries keep their
/// relative order.
fn sort_entries(entries: &mut LogEntries) {
    entries.sort_by_key(|entry| *entry.dt());
}

/// Sort every per-host sequence ascending by timestamp, in place.
///
/// The sequences hold the merged entries of all of one host's source files
/// in encounter order; after this the all-time view is in its final order.
pub fn sort_entries_per_host(map_host_entries: &mut MapHostEntries) {
    defn!("({} hosts)", map_host_entries.len());
    for entries in map_host_entries.values_mut() {
        sort_entries(entries);
    }
    defx!();
}

/// Derive the per-day view: re-key the per-host entries by
/// `(host, date folder)` and sort each group ascending by timestamp.
///
/// Entries with no date-folder token cannot be dated and are excluded.
/// The per-host input is unchanged; entries are shared, not copied.
pub fn group_by_host_and_date(map_host_entries: &MapHostEntries) -> MapHostDateEntries {
    defn!("({} hosts)", map_host_entries.len());
    let mut map_host_date_entries = MapHostDateEntries::new();
    for (host, entries) in map_host_entries.iter() {
        for entryp in entries.iter() {
            let date_folder: &DateFolder = match entryp.date_folder() {
                Some(date_folder) => date_folder,
                None => continue,
            };
            map_host_date_entries
                .entry((host.clone(), date_folder.clone()))
                .or_default()
                .push(entryp.clone());
        }
    }
    for entries in map_host_date_entries.values_mut() {
        sort_entries(entries);
    }
    defx!("return {} (host, date folder) groups", map_host_date_entries.len());

    map_host_date_entries
}

/// Sort every per-category sequence ascending by timestamp, in place.
///
/// The system-log counterpart of [`sort_entries_per_host`].
///
/// [`sort_entries_per_host`]: self::sort_entries_per_host
pub fn sort_entries_per_type(map_type_entries: &mut MapTypeEntries) {
    defn!("({} categories)", map_type_entries.len());
    for entries in map_type_entries.values_mut() {
        sort_entries(entries);
    }
    defx!();
}
