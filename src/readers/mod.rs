// src/readers/mod.rs

//! "Readers" for _lwlib_.
//!
//! ## Overview of readers
//!
//! The [`scan_inventory`] function walks a logs root directory and builds a
//! [`LogInventory`]: which `*.log` files exist, which host and date folder
//! each beacon log belongs to, and which category each system log belongs
//! to.
//!
//! A [`LogEntryReader`] parses one file's text into [`LogEntry`] instances.
//! One `LogEntryReader` is created per source file because the year
//! resolution and diagnostics context are per-file.
//!
//! _The "Readers" are not rust "Readers"; "_Reader_" structs do not
//! implement the trait [`Read`]. These are "readers" in an informal sense._
//!
//! [`scan_inventory`]: crate::readers::inventory::scan_inventory
//! [`LogInventory`]: crate::readers::inventory::LogInventory
//! [`LogEntryReader`]: crate::readers::logentryreader::LogEntryReader
//! [`LogEntry`]: crate::data::logentry::LogEntry
//! [`Read`]: std::io::Read

pub mod helpers;
pub mod inventory;
pub mod logentryreader;
