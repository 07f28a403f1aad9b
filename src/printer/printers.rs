// src/printer/printers.rs

//! Render [`LogEntry`]s back to their canonical text and write grouped
//! views to combined log files.
//!
//! Rendering is byte-faithful: no body line is trimmed, escaped, or
//! re-encoded, so a written view reproduces the original record text
//! exactly (with the original's `MM/DD` date, since the header format
//! carries no year).
//!
//! [`LogEntry`]: crate::data::logentry::LogEntry

use crate::common::{Count, FPath, WarningSink};
use crate::aggregate::{MapHostDateEntries, MapHostEntries, MapTypeEntries};
use crate::data::logentry::{LogEntries, LogEntry};
use crate::readers::helpers::fpath_to_path;

use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// globals and constants
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// chrono strftime format of a rendered header-line timestamp.
/// The year is deliberately absent; the header format never carries one.
pub const ENTRY_DT_FORMAT: &str = "%m/%d %H:%M:%S";

/// Marker rendered in place of `body[0]` for an entry with an empty body.
/// An empty body cannot occur through [`LogEntry::new`]; handled anyway.
///
/// [`LogEntry::new`]: crate::data::logentry::LogEntry#method.new
pub const ENTRY_EMPTY_BODY_MARK: &str = "(empty)";

/// buffer size of one output file writer
const WRITER_BUFFER_SZ: usize = 65536;

/// subdirectory of the all-time views, per host and per system-log category
pub const SUBDIR_COMPLETE: &str = "complete";
/// subdirectory of the per-day views
pub const SUBDIR_DAILY: &str = "daily";

/// file name suffix of an all-time view
const FILENAME_SUFFIX_COMPLETE: &str = "-Complete.log";

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// rendering
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Reconstruct the canonical text of one [`LogEntry`]:
/// `MM/DD HH:MM:SS UTC [kind] <body[0]>`, each remaining body line verbatim
/// on its own line, and a trailing newline after the last line.
///
/// [`LogEntry`]: crate::data::logentry::LogEntry
pub fn render_entry(entry: &LogEntry) -> String {
    let dt_s = entry
        .dt()
        .format(ENTRY_DT_FORMAT);
    if entry.body().is_empty() {
        return format!("{} UTC [{}] {}\n", dt_s, entry.kind(), ENTRY_EMPTY_BODY_MARK);
    }
    let mut sz: usize = 32 + entry.kind().len();
    for line in entry.body().iter() {
        sz += line.len() + 1;
    }
    let mut text = String::with_capacity(sz);
    text.push_str(&format!("{} UTC [{}] {}", dt_s, entry.kind(), entry.body()[0]));
    for line in entry.body()[1..].iter() {
        text.push('\n');
        text.push_str(line);
    }
    text.push('\n');

    text
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// grouped view writers
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Render `entries` in their existing order and write them concatenated to
/// a new file at `path`.
fn write_entries(
    path: &Path,
    entries: &LogEntries,
) -> std::io::Result<()> {
    defñ!("({:?}, {} entries)", path, entries.len());
    let file = File::create(path)?;
    let mut writer = BufWriter::with_capacity(WRITER_BUFFER_SZ, file);
    for entryp in entries.iter() {
        writer.write_all(render_entry(entryp).as_bytes())?;
    }

    writer.flush()
}

/// Create the view subdirectory `subdir` below `out_dir`.
///
/// A failure here fails every group of the view; the caller warns and
/// returns a zero count.
fn create_view_dir(
    out_dir: &FPath,
    subdir: &str,
) -> std::io::Result<PathBuf> {
    let dir: PathBuf = fpath_to_path(out_dir).join(subdir);
    create_dir_all(&dir)?;

    Ok(dir)
}

/// Write the all-time view: one `complete/<host>-Complete.log` per host
/// with entries.
///
/// A write failure skips that host's file, warning with the host and
/// underlying cause; remaining hosts proceed. Returns the count of files
/// written.
pub fn write_complete_logs(
    map_host_entries: &MapHostEntries,
    out_dir: &FPath,
    warnings: &mut dyn WarningSink,
) -> Count {
    defn!("({} hosts, {:?})", map_host_entries.len(), out_dir);
    let dir: PathBuf = match create_view_dir(out_dir, SUBDIR_COMPLETE) {
        Ok(dir) => dir,
        Err(err) => {
            warnings.warn(format!("cannot create {:?}/{}: {}", out_dir, SUBDIR_COMPLETE, err));
            defx!("return 0");
            return 0;
        }
    };
    let mut count: Count = 0;
    for (host, entries) in map_host_entries.iter() {
        if entries.is_empty() {
            continue;
        }
        let path: PathBuf = dir.join(format!("{}{}", host, FILENAME_SUFFIX_COMPLETE));
        match write_entries(&path, entries) {
            Ok(()) => {
                println!("    {} ({} entries) -> {}", host, entries.len(), path.display());
                count += 1;
            }
            Err(err) => {
                warnings.warn(format!("cannot write view for host {}: {:?}: {}", host, path, err));
            }
        }
    }
    defx!("return {}", count);

    count
}

/// Write the per-day view: one `daily/<host>-<YYMMDD>.log` per
/// (host, date folder) group with entries.
///
/// Error handling and count as [`write_complete_logs`].
///
/// [`write_complete_logs`]: self::write_complete_logs
pub fn write_daily_logs(
    map_host_date_entries: &MapHostDateEntries,
    out_dir: &FPath,
    warnings: &mut dyn WarningSink,
) -> Count {
    defn!("({} groups, {:?})", map_host_date_entries.len(), out_dir);
    let dir: PathBuf = match create_view_dir(out_dir, SUBDIR_DAILY) {
        Ok(dir) => dir,
        Err(err) => {
            warnings.warn(format!("cannot create {:?}/{}: {}", out_dir, SUBDIR_DAILY, err));
            defx!("return 0");
            return 0;
        }
    };
    let mut count: Count = 0;
    for ((host, date_folder), entries) in map_host_date_entries.iter() {
        if entries.is_empty() {
            continue;
        }
        let path: PathBuf = dir.join(format!("{}-{}.log", host, date_folder));
        match write_entries(&path, entries) {
            Ok(()) => {
                println!(
                    "    {} [{}] ({} entries) -> {}",
                    host,
                    date_folder,
                    entries.len(),
                    path.display(),
                );
                count += 1;
            }
            Err(err) => {
                warnings.warn(format!(
                    "cannot write view for host {} date folder {}: {:?}: {}",
                    host, date_folder, path, err,
                ));
            }
        }
    }
    defx!("return {}", count);

    count
}

/// Write the system-log view: one `complete/<category>-Complete.log` per
/// category with entries.
///
/// Error handling and count as [`write_complete_logs`].
///
/// [`write_complete_logs`]: self::write_complete_logs
pub fn write_system_logs(
    map_type_entries: &MapTypeEntries,
    out_dir: &FPath,
    warnings: &mut dyn WarningSink,
) -> Count {
    defn!("({} categories, {:?})", map_type_entries.len(), out_dir);
    let dir: PathBuf = match create_view_dir(out_dir, SUBDIR_COMPLETE) {
        Ok(dir) => dir,
        Err(err) => {
            warnings.warn(format!("cannot create {:?}/{}: {}", out_dir, SUBDIR_COMPLETE, err));
            defx!("return 0");
            return 0;
        }
    };
    let mut count: Count = 0;
    for (type_, entries) in map_type_entries.iter() {
        if entries.is_empty() {
            continue;
        }
        let path: PathBuf = dir.join(format!("{}{}", type_, FILENAME_SUFFIX_COMPLETE));
        match write_entries(&path, entries) {
            Ok(()) => {
                println!("    {} ({} entries) -> {}", type_, entries.len(), path.display());
                count += 1;
            }
            Err(err) => {
                warnings.warn(format!(
                    "cannot write view for system logs {}: {:?}: {}",
                    type_, path, err,
                ));
            }
        }
    }
    defx!("return {}", count);

    count
}
