// src/data/mod.rs

//! The `data` module is the data containers processed by the readers,
//! aggregation functions, and printers.
//!
//! ## Definitions of data
//!
//! ### LogEntry
//!
//! A [`LogEntry`] is one log record. It begins with a "header line" that:
//!
//! * has a `MM/DD HH:MM:SS` UTC timestamp (no year).
//! * has a bracketed "kind" label, e.g. `[input]`.
//! * carries the first fragment of record text after the label.
//!
//! and continues over zero or more "continuation lines"; any line that does
//! not match the header pattern belongs to the record opened by the most
//! recent header line.
//!
//! The year omitted from the header timestamp is resolved from the 6-digit
//! `YYMMDD` date folder the source file resides under; see
//! [`year_from_date_folder`].
//!
//! A `LogEntry` is found by a [`LogEntryReader`].
//!
//! [`LogEntry`]: crate::data::logentry::LogEntry
//! [`year_from_date_folder`]: crate::data::datetime::year_from_date_folder
//! [`LogEntryReader`]: crate::readers::logentryreader::LogEntryReader

pub mod datetime;
pub mod logentry;
