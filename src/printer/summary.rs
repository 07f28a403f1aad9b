// src/printer/summary.rs

//! Implements [`SummaryProcessed`], the accumulated statistics of one run,
//! printed for CLI option `--summary`.
//!
//! [`SummaryProcessed`]: self::SummaryProcessed

use crate::common::Count;

use std::io::Write;

use ::si_trace_print::defñ;
use ::termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// [`Color`] for printing summary values.
///
/// [`Color`]: https://docs.rs/termcolor/1.4.1/termcolor/enum.Color.html
const COLOR_VALUE: Color = Color::Cyan;

/// [`Color`] for printing a non-zero warning count.
///
/// [`Color`]: https://docs.rs/termcolor/1.4.1/termcolor/enum.Color.html
const COLOR_WARNING: Color = Color::Red;

/// Accumulated statistics about the files scanned, entries parsed, and
/// views written during one run.
///
/// For CLI option `--summary`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SummaryProcessed {
    /// count of beacon log files inventoried
    pub count_files_beacon: Count,
    /// count of system log files inventoried
    pub count_files_system: Count,
    /// count of log files skipped because they could not be read
    pub count_files_unreadable: Count,
    /// count of log files skipped because they were empty
    pub count_files_empty: Count,
    /// count of entries parsed from beacon logs
    pub count_entries_beacon: Count,
    /// count of entries parsed from system logs
    pub count_entries_system: Count,
    /// count of orphaned lines discarded
    pub count_lines_orphaned: Count,
    /// count of header lines dropped for malformed timestamps
    pub count_timestamps_malformed: Count,
    /// count of warnings raised
    pub count_warnings: Count,
    /// count of files written to the all-time view
    pub count_files_written_complete: Count,
    /// count of files written to the per-day view
    pub count_files_written_daily: Count,
    /// count of files written to the system-log view
    pub count_files_written_system: Count,
}

impl SummaryProcessed {
    pub fn new() -> SummaryProcessed {
        SummaryProcessed::default()
    }

    /// Total count of entries parsed.
    pub fn count_entries(&self) -> Count {
        self.count_entries_beacon + self.count_entries_system
    }

    /// Total count of files written across all views.
    pub fn count_files_written(&self) -> Count {
        self.count_files_written_complete
            + self.count_files_written_daily
            + self.count_files_written_system
    }

    /// Print this summary to stdout, colored per `color_choice`.
    ///
    /// Print failures here are ignored; the run is already complete and
    /// the written views are unaffected.
    pub fn print(
        &self,
        color_choice: ColorChoice,
    ) {
        defñ!();
        let mut stdout = StandardStream::stdout(color_choice);
        let _ = writeln!(stdout, "Summary:");
        print_field(&mut stdout, "files: beacon", self.count_files_beacon, COLOR_VALUE);
        print_field(&mut stdout, "files: system", self.count_files_system, COLOR_VALUE);
        print_field(&mut stdout, "files: unreadable", self.count_files_unreadable, COLOR_VALUE);
        print_field(&mut stdout, "files: empty", self.count_files_empty, COLOR_VALUE);
        print_field(&mut stdout, "entries: beacon", self.count_entries_beacon, COLOR_VALUE);
        print_field(&mut stdout, "entries: system", self.count_entries_system, COLOR_VALUE);
        print_field(&mut stdout, "lines orphaned", self.count_lines_orphaned, COLOR_VALUE);
        print_field(
            &mut stdout,
            "timestamps malformed",
            self.count_timestamps_malformed,
            COLOR_VALUE,
        );
        let color_warnings = match self.count_warnings {
            0 => COLOR_VALUE,
            _ => COLOR_WARNING,
        };
        print_field(&mut stdout, "warnings", self.count_warnings, color_warnings);
        print_field(
            &mut stdout,
            "files written: complete",
            self.count_files_written_complete,
            COLOR_VALUE,
        );
        print_field(
            &mut stdout,
            "files written: daily",
            self.count_files_written_daily,
            COLOR_VALUE,
        );
        print_field(
            &mut stdout,
            "files written: system",
            self.count_files_written_system,
            COLOR_VALUE,
        );
        let _ = stdout.reset();
        let _ = stdout.flush();
    }
}

/// Print one `label: value` summary line with a colored value.
fn print_field(
    stdout: &mut StandardStream,
    label: &str,
    value: Count,
    color: Color,
) {
    let _ = write!(stdout, "    {:<24}", label);
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(color)));
    let _ = writeln!(stdout, "{}", value);
    let _ = stdout.reset();
}
