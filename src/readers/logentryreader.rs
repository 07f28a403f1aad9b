// src/readers/logentryreader.rs

//! Implements a [`LogEntryReader`],
//! the driver of deriving [`LogEntry`]s from the text of one log file.
//!
//! [`LogEntryReader`]: self::LogEntryReader
//! [`LogEntry`]: crate::data::logentry::LogEntry

use crate::common::{Count, DateFolderOpt, FPath, HostOpt, WarningSink};
use crate::data::datetime::{
    datetime_from_header_parts,
    year_from_date_folder,
    Year,
};
use crate::data::logentry::{LogEntries, LogEntry, LogEntryP};
use crate::readers::helpers::str_excerpt;

use ::lazy_static::lazy_static;
use ::regex::{Captures, Regex};
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// header line matching
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Header line pattern:
/// a 2-digit month and day, a 2-digit hour, minute, and second, the literal
/// marker `UTC`, a bracketed kind label (no `]` within), then the remainder
/// of the line as free text. Every capture group must be present for a line
/// to be a header line.
///
/// The pattern constrains digit count, not value range; `13/40 25:00:00`
/// matches and is rejected later by [`datetime_from_header_parts`].
///
/// [`datetime_from_header_parts`]: crate::data::datetime::datetime_from_header_parts
pub const LOGENTRY_HEADER_PATTERN: &str = r"^(?P<month>\d{2})/(?P<day>\d{2})\s+(?P<hour>\d{2}):(?P<minute>\d{2}):(?P<second>\d{2})\s+UTC\s+\[(?P<kind>[^\]]+)\]\s+(?P<rest>.*)$";

lazy_static! {
    /// compiled [`LOGENTRY_HEADER_PATTERN`], shared by all `LogEntryReader`s
    ///
    /// [`LOGENTRY_HEADER_PATTERN`]: self::LOGENTRY_HEADER_PATTERN
    pub static ref LOGENTRY_HEADER_REGEX: Regex =
        Regex::new(LOGENTRY_HEADER_PATTERN).unwrap();
}

/// byte length limit of the line excerpt within a malformed-timestamp warning
const EXCERPT_SZ_MALFORMED: usize = 80;
/// byte length limit of the line excerpt within an orphaned-line warning
const EXCERPT_SZ_ORPHANED: usize = 50;

/// Named capture group of `caps` as `u32`.
///
/// The groups this is called for match `\d{2}` so the parse cannot fail;
/// `0` is returned regardless for a missing group, and rejected downstream
/// where `0` is out of range.
fn capture_group_u32(
    caps: &Captures,
    name: &str,
) -> u32 {
    caps.name(name)
        .map_or(0, |m| m.as_str().parse::<u32>().unwrap_or(0))
}

/// Named capture group of `caps` as `&str`.
fn capture_group_str<'c>(
    caps: &'c Captures,
    name: &str,
) -> &'c str {
    caps.name(name)
        .map_or("", |m| m.as_str())
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// LogEntryReader
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A `LogEntryReader` derives [`LogEntry`]s from the text of one log file.
///
/// Line classification is a two-state machine: either no entry is open, or
/// one entry is open and accumulating continuation lines. A header-line
/// match emits the open entry and opens a new one; any other line is
/// appended to the open entry, or, with no open entry, discarded
/// (silently when blank, with an orphaned-line warning otherwise).
///
/// One `LogEntryReader` is created per source file; the year resolved from
/// the file's date folder and the diagnostics context are per-file.
///
/// [`LogEntry`]: crate::data::logentry::LogEntry
pub struct LogEntryReader {
    /// path of the file being parsed, for diagnostics and `LogEntry.source`
    source: FPath,
    /// host the file belongs to; `None` for system logs
    host: HostOpt,
    /// `YYMMDD` token of the file's date folder, carried onto every entry
    date_folder: DateFolderOpt,
    /// year for header-line timestamps, resolved once from `date_folder`
    year: Year,
    /// count of `LogEntry` emitted
    count_entries: Count,
    /// count of non-blank lines discarded with no entry open
    count_lines_orphaned: Count,
    /// count of header lines dropped for out-of-range timestamp components
    count_timestamps_malformed: Count,
}

impl LogEntryReader {
    /// Create a new `LogEntryReader` for one source file.
    ///
    /// Resolves the year from `date_folder` up front; an invalid or absent
    /// token warns once per file, not once per entry.
    pub fn new(
        source: FPath,
        host: HostOpt,
        date_folder: DateFolderOpt,
        warnings: &mut dyn WarningSink,
    ) -> LogEntryReader {
        defñ!("({:?}, {:?}, {:?})", source, host, date_folder);
        let year: Year = year_from_date_folder(date_folder.as_deref(), &source, warnings);

        LogEntryReader {
            source,
            host,
            date_folder,
            year,
            count_entries: 0,
            count_lines_orphaned: 0,
            count_timestamps_malformed: 0,
        }
    }

    /// Derive all [`LogEntry`]s from `text`, in source-line order.
    ///
    /// Temporal ordering is not this function's concern; see
    /// [`sort_entries_per_host`].
    ///
    /// An empty `text` returns an empty sequence, no warning.
    /// A blob ending mid-record still emits that final entry with whatever
    /// continuation lines were accumulated.
    ///
    /// [`LogEntry`]: crate::data::logentry::LogEntry
    /// [`sort_entries_per_host`]: crate::aggregate::sort_entries_per_host
    pub fn process_text(
        &mut self,
        text: &str,
        warnings: &mut dyn WarningSink,
    ) -> LogEntries {
        defn!("(text.len() {})", text.len());
        let mut entries = LogEntries::new();
        if text.is_empty() {
            defx!("empty text; return 0 entries");
            return entries;
        }
        // the two-state machine: `None` is "no entry open",
        // `Some` is "entry open, accumulating body"
        let mut entry_cur: Option<LogEntry> = None;
        for line in text.lines() {
            match LOGENTRY_HEADER_REGEX.captures(line) {
                Some(caps) => {
                    if let Some(entry) = entry_cur.take() {
                        defo!("emit entry, {} body lines", entry.body().len());
                        entries.push(LogEntryP::new(entry));
                    }
                    entry_cur = self.entry_from_header(&caps, line, warnings);
                }
                None => match entry_cur {
                    Some(ref mut entry) => entry.push_line(line),
                    None => {
                        if !line.trim().is_empty() {
                            self.count_lines_orphaned += 1;
                            warnings.warn(format!(
                                "orphaned line in {:?}: {}",
                                self.source,
                                str_excerpt(line, EXCERPT_SZ_ORPHANED),
                            ));
                        }
                    }
                },
            }
        }
        if let Some(entry) = entry_cur.take() {
            defo!("emit final entry, {} body lines", entry.body().len());
            entries.push(LogEntryP::new(entry));
        }
        self.count_entries += entries.len() as Count;
        defx!("return {} entries", entries.len());

        entries
    }

    /// Open a new [`LogEntry`] from a matched header line.
    ///
    /// Returns `None` when the header components do not form a real UTC
    /// instant; the header line is dropped with a warning and the machine
    /// resets to "no entry open", so following continuation lines are
    /// orphans until the next valid header.
    ///
    /// [`LogEntry`]: crate::data::logentry::LogEntry
    fn entry_from_header(
        &mut self,
        caps: &Captures,
        line: &str,
        warnings: &mut dyn WarningSink,
    ) -> Option<LogEntry> {
        let month: u32 = capture_group_u32(caps, "month");
        let day: u32 = capture_group_u32(caps, "day");
        let hour: u32 = capture_group_u32(caps, "hour");
        let minute: u32 = capture_group_u32(caps, "minute");
        let second: u32 = capture_group_u32(caps, "second");
        match datetime_from_header_parts(self.year, month, day, hour, minute, second) {
            Some(dt) => Some(LogEntry::new(
                dt,
                String::from(capture_group_str(caps, "kind")),
                String::from(capture_group_str(caps, "rest")),
                self.source.clone(),
                self.host.clone(),
                self.date_folder.clone(),
            )),
            None => {
                self.count_timestamps_malformed += 1;
                warnings.warn(format!(
                    "skipping malformed timestamp in {:?}: {}",
                    self.source,
                    str_excerpt(line, EXCERPT_SZ_MALFORMED),
                ));

                None
            }
        }
    }

    pub fn source(self: &LogEntryReader) -> &FPath {
        &self.source
    }

    pub fn host(self: &LogEntryReader) -> &HostOpt {
        &self.host
    }

    pub fn date_folder(self: &LogEntryReader) -> &DateFolderOpt {
        &self.date_folder
    }

    /// Year resolved for this file's header-line timestamps.
    pub fn year(self: &LogEntryReader) -> Year {
        self.year
    }

    /// Count of `LogEntry` emitted so far.
    pub fn count_entries(self: &LogEntryReader) -> Count {
        self.count_entries
    }

    /// Count of orphaned lines discarded so far.
    pub fn count_lines_orphaned(self: &LogEntryReader) -> Count {
        self.count_lines_orphaned
    }

    /// Count of header lines dropped for malformed timestamps so far.
    pub fn count_timestamps_malformed(self: &LogEntryReader) -> Count {
        self.count_timestamps_malformed
    }
}
