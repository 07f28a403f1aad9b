// src/data/logentry.rs

//! Implements a [`LogEntry`] struct.
//!
//! [`LogEntry`]: crate::data::logentry::LogEntry

use crate::common::{Count, DateFolderOpt, FPath, HostOpt};
use crate::data::datetime::DateTimeU;

use std::fmt;
use std::sync::Arc;

use ::more_asserts::debug_assert_ge;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// --------
// LogEntry

/// The body lines of a [`LogEntry`].
///
/// Element `0` is the remainder of the header line after the bracketed kind
/// label (possibly an empty string). Following elements are continuation
/// lines, stored verbatim.
pub type BodyLines = Vec<String>;

/// A `LogEntry` is one log record spanning one or more lines of a source
/// file.
///
/// The record's "header line" carries a `MM/DD HH:MM:SS` UTC timestamp
/// (no year), a bracketed kind label, and the first fragment of record text.
/// Any following lines that are not themselves header lines are the record's
/// continuation lines.
///
/// The `dt` field is resolved once, when the header line is matched, from
/// the header components and the year of the source file's date folder. It
/// is never recomputed.
pub struct LogEntry {
    /// parsed UTC instant of the header line
    dt: DateTimeU,
    /// kind label from the header line's bracketed field, e.g. `"input"`.
    /// Never contains `']'`.
    pub(crate) kind: String,
    /// record text; grows only while this `LogEntry` is the open entry of a
    /// [`LogEntryReader`]
    ///
    /// [`LogEntryReader`]: crate::readers::logentryreader::LogEntryReader
    pub(crate) body: BodyLines,
    /// path of the originating file, for diagnostics
    pub(crate) source: FPath,
    /// host address the record belongs to; `None` for system logs
    pub(crate) host: HostOpt,
    /// `YYMMDD` token of the date folder the originating file resides under
    pub(crate) date_folder: DateFolderOpt,
}

impl fmt::Debug for LogEntry {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        f.debug_struct("LogEntry")
            .field("dt", &self.dt)
            .field("kind", &self.kind)
            .field("body.len", &self.body.len())
            .field("source", &self.source)
            .field("host", &self.host)
            .field("date_folder", &self.date_folder)
            .finish()
    }
}

impl LogEntry {
    /// Most records are a header line plus no or few continuation lines.
    const BODY_WITH_CAPACITY: usize = 2;

    /// Create a `LogEntry` from a matched header line.
    ///
    /// `body0` is the remainder of the header line, becoming `body[0]`.
    pub fn new(
        dt: DateTimeU,
        kind: String,
        body0: String,
        source: FPath,
        host: HostOpt,
        date_folder: DateFolderOpt,
    ) -> LogEntry {
        let mut body = BodyLines::with_capacity(LogEntry::BODY_WITH_CAPACITY);
        body.push(body0);

        LogEntry {
            dt,
            kind,
            body,
            source,
            host,
            date_folder,
        }
    }

    /// Return a reference to `self.dt`.
    pub fn dt(self: &LogEntry) -> &DateTimeU {
        &self.dt
    }

    pub fn kind(self: &LogEntry) -> &str {
        self.kind.as_str()
    }

    pub fn body(self: &LogEntry) -> &BodyLines {
        &self.body
    }

    pub fn source(self: &LogEntry) -> &FPath {
        &self.source
    }

    pub fn host(self: &LogEntry) -> &HostOpt {
        &self.host
    }

    pub fn date_folder(self: &LogEntry) -> &DateFolderOpt {
        &self.date_folder
    }

    /// Append one continuation line, verbatim, to `self.body`.
    ///
    /// Only called while this `LogEntry` is the open entry of a reader;
    /// finalized entries are behind an [`Arc`] and can no longer reach this.
    ///
    /// [`Arc`]: std::sync::Arc
    pub fn push_line(
        &mut self,
        line: &str,
    ) {
        self.body.push(String::from(line));
        defñ!("LogEntry.push_line(), body.len() is now {}", self.body.len());
    }

    /// Count of lines this record spans in the source file.
    pub fn count_lines(self: &LogEntry) -> Count {
        debug_assert_ge!(self.body.len(), 1, "LogEntry has an empty body");

        self.body.len() as Count
    }
}

/// Thread-safe [Atomic Reference Counting pointer] to a [`LogEntry`].
///
/// A finalized `LogEntry` is shared between the all-time per-host view and
/// the per-(host, date folder) view; neither view mutates it.
///
/// [Atomic Reference Counting pointer]: std::sync::Arc
pub type LogEntryP = Arc<LogEntry>;

/// Sequence of finalized [`LogEntry`] in source-encounter order (one file)
/// or in aggregated order (one view group).
pub type LogEntries = Vec<LogEntryP>;
