// src/common.rs
//
// common type aliases and the warning sink capability (avoids circular imports)

use crate::debug::printers::e_wrn;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// file-handling
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// `F`ake `Path` or `F`ile `Path`
pub type FPath = String;
pub type FPaths = Vec<FPath>;

/// a general-purpose counting type
pub type Count = u64;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// log store identifiers
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Host address a beacon log belongs to, e.g. `"10.0.0.5"`.
///
/// One combined all-time view and one combined per-day view is produced
/// per `Host`.
pub type Host = String;
pub type HostOpt = Option<Host>;

/// 6-digit `YYMMDD` date-folder token, e.g. `"230815"`.
///
/// Carried from the directory a log file resides under. Resolves the year
/// omitted from header-line timestamps and keys the per-day view.
pub type DateFolder = String;
pub type DateFolderOpt = Option<DateFolder>;

/// byte length of a valid [`DateFolder`] token
pub const DATE_FOLDER_SZ: usize = 6;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// warning sink
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Sink for the non-fatal diagnostics raised while parsing and writing
/// (orphaned lines, malformed timestamps, invalid date-folder tokens,
/// skipped output groups).
///
/// Passed explicitly to the functions that raise warnings so the caller
/// decides where warnings land. Tests capture them with
/// [`CollectedWarnings`]; the driver program forwards them to stderr with
/// [`StderrWarnings`].
pub trait WarningSink {
    fn warn(
        &mut self,
        message: String,
    );
    /// Count of warnings received so far.
    fn count(&self) -> Count;
}

/// A [`WarningSink`] that prints each warning to stderr as it arrives.
#[derive(Debug, Default)]
pub struct StderrWarnings {
    count: Count,
}

impl StderrWarnings {
    pub fn new() -> StderrWarnings {
        StderrWarnings { count: 0 }
    }
}

impl WarningSink for StderrWarnings {
    fn warn(
        &mut self,
        message: String,
    ) {
        self.count += 1;
        e_wrn!("{}", message);
    }

    fn count(&self) -> Count {
        self.count
    }
}

/// A [`WarningSink`] that holds warnings in memory.
///
/// Lets callers inspect what was raised without capturing stderr.
#[derive(Debug, Default)]
pub struct CollectedWarnings {
    pub messages: Vec<String>,
}

impl CollectedWarnings {
    pub fn new() -> CollectedWarnings {
        CollectedWarnings { messages: Vec::new() }
    }
}

impl WarningSink for CollectedWarnings {
    fn warn(
        &mut self,
        message: String,
    ) {
        self.messages.push(message);
    }

    fn count(&self) -> Count {
        self.messages.len() as Count
    }
}
