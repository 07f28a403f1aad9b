// src/bin/lw.rs

//! Driver program _lw_ drives the [_lwlib_].
//!
//! Processes user-passed command-line arguments.
//! Scans the passed logs root directory for beacon logs and system logs
//! ([`scan_inventory`]), parses every found file into [`LogEntry`]s
//! ([`LogEntryReader`]), aggregates the entries into the all-time per-host
//! view, the per-(host, date folder) view, and the per-category system-log
//! view ([`aggregate`]), then writes one combined log file per group below
//! the output directory ([`printer::printers`]).
//!
//! If passed CLI option `--summary`, prints a [`SummaryProcessed`] at exit.
//!
//! All non-fatal problems (unreadable files, malformed records, skipped
//! output groups) are warnings on stderr; only an inaccessible logs root or
//! a logs root with no log files at all fails the run.
//!
//! [_lwlib_]: lwlib
//! [`scan_inventory`]: lwlib::readers::inventory::scan_inventory
//! [`LogEntry`]: lwlib::data::logentry::LogEntry
//! [`LogEntryReader`]: lwlib::readers::logentryreader::LogEntryReader
//! [`aggregate`]: lwlib::aggregate
//! [`printer::printers`]: lwlib::printer::printers
//! [`SummaryProcessed`]: lwlib::printer::summary::SummaryProcessed

#![allow(non_camel_case_types)]

use std::process::ExitCode;

use ::anyhow::{bail, Context};
use ::clap::{Parser, ValueEnum};
use ::const_format::concatcp;
use ::termcolor::ColorChoice;

use ::lwlib::aggregate::{
    group_by_host_and_date,
    sort_entries_per_host,
    sort_entries_per_type,
    MapHostEntries,
    MapTypeEntries,
};
use ::lwlib::common::{Count, StderrWarnings, WarningSink};
use ::lwlib::data::datetime::date_folder_now;
use ::lwlib::debug::printers::e_err;
use ::lwlib::printer::printers::{
    write_complete_logs,
    write_daily_logs,
    write_system_logs,
};
use ::lwlib::printer::summary::SummaryProcessed;
use ::lwlib::readers::helpers::fpath_to_path;
use ::lwlib::readers::inventory::{
    date_folder_of_path,
    scan_inventory,
    LogInventory,
};
use ::lwlib::readers::logentryreader::LogEntryReader;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// command-line parsing
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

const CLI_HELP_AFTER: &str = r#"
The LOGS_ROOT directory tree holds 6-digit YYMMDD date folders. Beacon logs
reside below a date folder and a host address folder, e.g.

    230815/10.0.0.5/beacon_1234.log

System logs are the fixed set of category-named files (download.log,
weblog_80.log, weblog_443.log, events.log) anywhere in the tree.

Written below the output directory:

    complete/<host>-Complete.log      all entries of one host
    daily/<host>-<YYMMDD>.log         entries of one host, one day
    complete/<category>-Complete.log  combined system logs per category
"#;

/// CLI option `--color` choices, mapped to [`termcolor::ColorChoice`].
///
/// [`termcolor::ColorChoice`]: https://docs.rs/termcolor/1.4.1/termcolor/enum.ColorChoice.html
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
enum CLI_Color_Choice {
    Always,
    Auto,
    Never,
}

impl CLI_Color_Choice {
    const fn to_color_choice(self) -> ColorChoice {
        match self {
            CLI_Color_Choice::Always => ColorChoice::Always,
            CLI_Color_Choice::Auto => ColorChoice::Auto,
            CLI_Color_Choice::Never => ColorChoice::Never,
        }
    }
}

/// clap command-line arguments build-time definitions.
//
// Note:
// * the `about` is taken from `Cargo.toml:[package]:description`.
#[derive(Parser, Debug)]
#[clap(
    about = env!("CARGO_PKG_DESCRIPTION"),
    name = "lw",
    // write expanded information for the `--version` output
    version = concatcp!(
        "(logweave)\n",
        "Version: ",
        env!("CARGO_PKG_VERSION_MAJOR"), ".",
        env!("CARGO_PKG_VERSION_MINOR"), ".",
        env!("CARGO_PKG_VERSION_PATCH"), "\n",
        "MSRV: ", env!("CARGO_PKG_RUST_VERSION"), "\n",
        "License: ", env!("CARGO_PKG_LICENSE"), "\n",
        "Repository: ", env!("CARGO_PKG_REPOSITORY"), "\n",
    ),
    after_help = CLI_HELP_AFTER,
    verbatim_doc_comment,
)]
struct CLI_Args {
    /// Path of the logs root directory.
    /// The tree below is recursed. Symlinks will be followed.
    #[clap(required = true, verbatim_doc_comment)]
    logs_root: String,

    /// Directory the view trees `complete/` and `daily/` are written below.
    #[clap(
        short = 'o',
        long = "out",
        default_value_t = String::from("."),
    )]
    out_dir: String,

    /// Print a summary of files scanned, entries parsed, warnings raised,
    /// and files written.
    #[clap(short = 's', long = "summary", verbatim_doc_comment)]
    summary: bool,

    /// Color choice for printed output.
    #[clap(
        short = 'c',
        long = "color",
        value_enum,
        default_value_t = CLI_Color_Choice::Auto,
    )]
    color: CLI_Color_Choice,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// processing
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Scan, parse, aggregate, write. Returns the accumulated
/// [`SummaryProcessed`].
///
/// [`SummaryProcessed`]: lwlib::printer::summary::SummaryProcessed
fn run(args: &CLI_Args) -> anyhow::Result<SummaryProcessed> {
    let mut warnings = StderrWarnings::new();
    let mut summary = SummaryProcessed::new();

    std::fs::metadata(fpath_to_path(&args.logs_root))
        .with_context(|| format!("cannot access logs root {:?}", args.logs_root))?;

    println!("Scanning {} ...", args.logs_root);
    let inventory: LogInventory = scan_inventory(&args.logs_root, &mut warnings);
    if inventory.is_empty() {
        bail!("no log files found under {:?}", args.logs_root);
    }
    println!(
        "Found {} date folders, {} hosts, {} beacon logs, {} system logs",
        inventory.count_date_folders(),
        inventory.count_hosts(),
        inventory.count_files_beacon(),
        inventory.count_files_system(),
    );
    summary.count_files_beacon = inventory.count_files_beacon();
    summary.count_files_system = inventory.count_files_system();

    // parse beacon logs, accumulating entries per host across all files
    let mut map_host_entries = MapHostEntries::new();
    for (host, files) in inventory.beacon_logs.iter() {
        for file in files.iter() {
            let text = match std::fs::read_to_string(fpath_to_path(&file.path)) {
                Ok(text) => text,
                Err(err) => {
                    warnings.warn(format!("cannot read {:?}: {}", file.path, err));
                    summary.count_files_unreadable += 1;
                    continue;
                }
            };
            if text.is_empty() {
                warnings.warn(format!("empty file {:?}", file.path));
                summary.count_files_empty += 1;
                continue;
            }
            let mut reader = LogEntryReader::new(
                file.path.clone(),
                Some(host.clone()),
                Some(file.date_folder.clone()),
                &mut warnings,
            );
            let entries = reader.process_text(&text, &mut warnings);
            summary.count_entries_beacon += entries.len() as Count;
            summary.count_lines_orphaned += reader.count_lines_orphaned();
            summary.count_timestamps_malformed += reader.count_timestamps_malformed();
            map_host_entries
                .entry(host.clone())
                .or_default()
                .extend(entries);
        }
    }
    println!(
        "Parsed {} entries from {} hosts",
        summary.count_entries_beacon,
        inventory.count_hosts(),
    );

    // parse system logs, accumulating entries per category.
    // A system log's date folder comes from its path when it resides below
    // one, else the current UTC day.
    let mut map_type_entries = MapTypeEntries::new();
    for (type_, paths) in inventory.system_logs.iter() {
        for path in paths.iter() {
            let text = match std::fs::read_to_string(fpath_to_path(path)) {
                Ok(text) => text,
                Err(_err) => {
                    summary.count_files_unreadable += 1;
                    continue;
                }
            };
            if text.is_empty() {
                summary.count_files_empty += 1;
                continue;
            }
            let date_folder = date_folder_of_path(fpath_to_path(path))
                .unwrap_or_else(date_folder_now);
            let mut reader = LogEntryReader::new(
                path.clone(),
                None,
                Some(date_folder),
                &mut warnings,
            );
            let entries = reader.process_text(&text, &mut warnings);
            summary.count_entries_system += entries.len() as Count;
            summary.count_lines_orphaned += reader.count_lines_orphaned();
            summary.count_timestamps_malformed += reader.count_timestamps_malformed();
            map_type_entries
                .entry(*type_)
                .or_default()
                .extend(entries);
        }
    }
    if summary.count_entries_system > 0 {
        println!("Parsed {} entries from system logs", summary.count_entries_system);
    }

    // aggregate
    sort_entries_per_host(&mut map_host_entries);
    let map_host_date_entries = group_by_host_and_date(&map_host_entries);
    sort_entries_per_type(&mut map_type_entries);

    // write
    println!("Writing views below {}", args.out_dir);
    summary.count_files_written_complete =
        write_complete_logs(&map_host_entries, &args.out_dir, &mut warnings);
    summary.count_files_written_daily =
        write_daily_logs(&map_host_date_entries, &args.out_dir, &mut warnings);
    summary.count_files_written_system =
        write_system_logs(&map_type_entries, &args.out_dir, &mut warnings);
    println!("Wrote {} files", summary.count_files_written());
    summary.count_warnings = warnings.count();

    Ok(summary)
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// main
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub fn main() -> ExitCode {
    let args = CLI_Args::parse();
    match run(&args) {
        Ok(summary) => {
            if args.summary {
                summary.print(args.color.to_color_choice());
            }

            ExitCode::SUCCESS
        }
        Err(err) => {
            e_err!("{:?}", err);

            ExitCode::FAILURE
        }
    }
}
