// src/readers/inventory.rs

//! Implements [`scan_inventory`], the walk of a logs root directory that
//! finds and classifies the log files to process.
//!
//! A logs root holds 6-digit `YYMMDD` date folders. Beacon logs reside
//! below a date folder and a host address folder, e.g.
//! `230815/10.0.0.5/beacon_1234.log`. System logs are the fixed set of
//! category-named files (`download.log`, `weblog_80.log`, `weblog_443.log`,
//! `events.log`) and reside anywhere in the tree.
//!
//! [`scan_inventory`]: self::scan_inventory

use crate::common::{Count, DateFolder, DateFolderOpt, FPath, FPaths, Host, HostOpt, WarningSink};
use crate::data::datetime::date_folder_is_valid;
#[allow(unused_imports)]
use crate::debug::printers::{de_err, de_wrn};
use crate::readers::helpers::path_to_fpath;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::Path;

use ::lazy_static::lazy_static;
use ::regex::Regex;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};
use ::walkdir::WalkDir;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// log file classification
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// file extension of processable files
const LOG_EXTENSION: &str = "log";

/// file name marker of a beacon log
const BEACON_FILENAME_MARK: &str = "beacon_";

/// The category of a system log, from its fixed file name.
///
/// System logs have no host; each category is aggregated into one combined
/// view across all date folders.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub enum SystemLogType {
    Download,
    Weblog80,
    Weblog443,
    Events,
}

impl SystemLogType {
    /// Classify a file name, e.g. `"download.log"` ⇒ `Some(Download)`.
    pub fn from_filename(filename: &str) -> Option<SystemLogType> {
        match filename {
            "download.log" => Some(SystemLogType::Download),
            "weblog_80.log" => Some(SystemLogType::Weblog80),
            "weblog_443.log" => Some(SystemLogType::Weblog443),
            "events.log" => Some(SystemLogType::Events),
            _ => None,
        }
    }

    /// Category label; used as the output file name stem.
    pub const fn as_str(&self) -> &'static str {
        match self {
            SystemLogType::Download => "download",
            SystemLogType::Weblog80 => "weblog_80",
            SystemLogType::Weblog443 => "weblog_443",
            SystemLogType::Events => "events",
        }
    }
}

impl fmt::Display for SystemLogType {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

lazy_static! {
    /// a path component that is a host address (dotted quad)
    static ref HOST_COMPONENT_REGEX: Regex =
        Regex::new(r"^\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}$").unwrap();
}

/// First path component of `path` that is a host address.
pub fn host_of_path(path: &Path) -> HostOpt {
    for component in path.components() {
        let component_s = component
            .as_os_str()
            .to_string_lossy();
        if HOST_COMPONENT_REGEX.is_match(&component_s) {
            return Some(Host::from(component_s));
        }
    }

    None
}

/// First path component of `path` that is a valid 6-digit date-folder token.
pub fn date_folder_of_path(path: &Path) -> DateFolderOpt {
    for component in path.components() {
        let component_s = component
            .as_os_str()
            .to_string_lossy();
        if date_folder_is_valid(&component_s) {
            return Some(DateFolder::from(component_s));
        }
    }

    None
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// LogInventory
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// One beacon log file found below a date folder and host folder.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BeaconLogFile {
    pub path: FPath,
    /// `YYMMDD` token of the date folder the file resides under
    pub date_folder: DateFolder,
}

pub type BeaconLogFiles = Vec<BeaconLogFile>;
/// beacon log files per host, in deterministic host order
pub type MapHostLogFiles = BTreeMap<Host, BeaconLogFiles>;
/// system log files per category, in deterministic category order
pub type MapTypeLogFiles = BTreeMap<SystemLogType, FPaths>;

/// The classified `*.log` files below one logs root.
#[derive(Debug, Default)]
pub struct LogInventory {
    pub beacon_logs: MapHostLogFiles,
    pub system_logs: MapTypeLogFiles,
}

impl LogInventory {
    pub fn new() -> LogInventory {
        LogInventory {
            beacon_logs: MapHostLogFiles::new(),
            system_logs: MapTypeLogFiles::new(),
        }
    }

    /// No log files at all?
    pub fn is_empty(&self) -> bool {
        self.beacon_logs.is_empty() && self.system_logs.is_empty()
    }

    pub fn count_hosts(&self) -> Count {
        self.beacon_logs.len() as Count
    }

    /// Count of distinct date folders among the beacon logs.
    pub fn count_date_folders(&self) -> Count {
        let mut date_folders: BTreeSet<&DateFolder> = BTreeSet::new();
        for files in self.beacon_logs.values() {
            for file in files.iter() {
                date_folders.insert(&file.date_folder);
            }
        }

        date_folders.len() as Count
    }

    pub fn count_files_beacon(&self) -> Count {
        self.beacon_logs
            .values()
            .map(|files| files.len() as Count)
            .sum()
    }

    pub fn count_files_system(&self) -> Count {
        self.system_logs
            .values()
            .map(|paths| paths.len() as Count)
            .sum()
    }
}

/// Walk the tree below `root` and classify every `*.log` file found.
///
/// Symlinks are followed. Beacon logs lacking a host or date-folder path
/// component cannot be grouped and are skipped. Files with other extensions,
/// and `*.log` files that are neither beacon logs nor one of the fixed
/// system log names, are ignored. Unreadable directories raise a warning
/// and the walk continues.
pub fn scan_inventory(
    root: &FPath,
    warnings: &mut dyn WarningSink,
) -> LogInventory {
    defn!("({:?})", root);
    let mut inventory = LogInventory::new();
    // `sort_by_file_name` makes the walk order, and thus per-host file
    // order, deterministic across runs
    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warnings.warn(format!("cannot scan below {:?}: {}", root, err));
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let path: &Path = entry.path();
        match path.extension() {
            Some(ext) if ext == LOG_EXTENSION => {}
            _ => continue,
        }
        let filename = entry
            .file_name()
            .to_string_lossy();
        if filename.contains(BEACON_FILENAME_MARK) {
            let host = match host_of_path(path) {
                Some(host) => host,
                None => {
                    de_wrn!("no host component in {:?}; skipped", path);
                    continue;
                }
            };
            let date_folder = match date_folder_of_path(path) {
                Some(date_folder) => date_folder,
                None => {
                    de_wrn!("no date folder component in {:?}; skipped", path);
                    continue;
                }
            };
            inventory
                .beacon_logs
                .entry(host)
                .or_default()
                .push(BeaconLogFile {
                    path: path_to_fpath(path),
                    date_folder,
                });
        } else if let Some(type_) = SystemLogType::from_filename(&filename) {
            inventory
                .system_logs
                .entry(type_)
                .or_default()
                .push(path_to_fpath(path));
        }
    }
    defx!(
        "return inventory; {} beacon files, {} system files",
        inventory.count_files_beacon(),
        inventory.count_files_system(),
    );

    inventory
}
