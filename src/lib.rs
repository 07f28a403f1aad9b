// src/lib.rs

//! _lwlib_ reassembles fragmented multi-line UTC logs into chronologically
//! ordered per-host views.
//!
//! The library is consumed by driver program [_lw_].
//!
//! Overview of processing:
//! 1. [`scan_inventory`] walks a logs root and classifies the `*.log` files
//!    found there into per-host beacon logs and category-labeled system logs.
//! 2. A [`LogEntryReader`] parses each file's text into [`LogEntry`]
//!    instances, re-associating continuation lines with the header line that
//!    began them and resolving the year omitted from header timestamps.
//! 3. The [`aggregate`] functions group and stably sort the entries per host,
//!    per (host, date folder), and per system-log category.
//! 4. The [`printer`] functions reconstruct each entry's original text and
//!    write one combined log file per group.
//!
//! [_lw_]: https://github.com/logweave/logweave
//! [`scan_inventory`]: crate::readers::inventory::scan_inventory
//! [`LogEntryReader`]: crate::readers::logentryreader::LogEntryReader
//! [`LogEntry`]: crate::data::logentry::LogEntry
//! [`aggregate`]: crate::aggregate
//! [`printer`]: crate::printer

pub mod aggregate;
pub mod common;
pub mod data;
pub mod debug;
pub mod printer;
pub mod readers;
#[cfg(test)]
pub mod tests;
