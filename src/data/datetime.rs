// src/data/datetime.rs

//! Datetime typing and helpers: resolve the year omitted from header-line
//! timestamps, and build checked UTC instants from header components.
//!
//! The most relevant functions are:
//! - [`year_from_date_folder`] which resolves a [`Year`] from a [`DateFolder`]
//!   token
//! - [`datetime_from_header_parts`] which builds a [`DateTimeU`] from the
//!   numeric components of a header line
//!
//! [`year_from_date_folder`]: self::year_from_date_folder
//! [`datetime_from_header_parts`]: self::datetime_from_header_parts
//! [`Year`]: self::Year
//! [`DateFolder`]: crate::common::DateFolder
//! [`DateTimeU`]: self::DateTimeU

use crate::common::{DateFolder, FPath, WarningSink, DATE_FOLDER_SZ};

#[doc(hidden)]
pub use ::chrono::{
    DateTime,
    Datelike, // adds method `.year()` onto `DateTime`
    Duration,
    LocalResult,
    TimeZone,
    Timelike,
    Utc,
};
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// DateTime typing
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A _Year_ in a date
pub type Year = i32;

/// A chrono [`DateTime`] in `U`TC, as used in _lwlib_.
///
/// Header-line timestamps carry an explicit `UTC` marker so no other offset
/// occurs.
///
/// [`DateTime`]: https://docs.rs/chrono/0.4.40/chrono/struct.DateTime.html
pub type DateTimeU = DateTime<Utc>;
pub type DateTimeUOpt = Option<DateTimeU>;

/// chrono strftime format of a [`DateFolder`] token
///
/// [`DateFolder`]: crate::common::DateFolder
pub const DATE_FOLDER_FORMAT: &str = "%y%m%d";

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// year and datetime resolution
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Is `date_folder` a valid `YYMMDD` token? Must be exactly
/// [`DATE_FOLDER_SZ`] ASCII digits.
///
/// [`DATE_FOLDER_SZ`]: crate::common::DATE_FOLDER_SZ
pub fn date_folder_is_valid(date_folder: &str) -> bool {
    date_folder.len() == DATE_FOLDER_SZ
        && date_folder
            .bytes()
            .all(|b| b.is_ascii_digit())
}

/// Resolve the [`Year`] for header-line timestamps of one source file.
///
/// A valid token resolves to `2000 + YY`. An absent or invalid token raises
/// a warning naming `source` and the token, and the current UTC year is used
/// instead.
pub fn year_from_date_folder(
    date_folder: Option<&str>,
    source: &FPath,
    warnings: &mut dyn WarningSink,
) -> Year {
    defn!("({:?}, {:?})", date_folder, source);
    let year: Year = match date_folder {
        Some(token) if date_folder_is_valid(token) => {
            // `token` is ASCII digits so the parse cannot fail
            let yy: Year = token[..2]
                .parse::<Year>()
                .unwrap_or(0);
            2000 + yy
        }
        _ => {
            warnings.warn(format!(
                "invalid date folder {:?} for {:?}; using current year",
                date_folder.unwrap_or(""),
                source,
            ));
            Utc::now().year()
        }
    };
    defx!("return {}", year);

    year
}

/// Build a UTC instant from the numeric components of a header line.
///
/// Returns `None` for any out-of-range component (e.g. month `13`, day `31`
/// in a 30-day month, hour `25`).
pub fn datetime_from_header_parts(
    year: Year,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> DateTimeUOpt {
    match Utc.with_ymd_and_hms(year, month, day, hour, minute, second) {
        LocalResult::Single(dt) => Some(dt),
        _ => None,
    }
}

/// The current UTC day as a [`DateFolder`] token.
///
/// Fallback date folder for system logs found outside any date folder.
///
/// [`DateFolder`]: crate::common::DateFolder
pub fn date_folder_now() -> DateFolder {
    Utc::now()
        .format(DATE_FOLDER_FORMAT)
        .to_string()
}
