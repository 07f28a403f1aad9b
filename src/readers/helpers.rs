// src/readers/helpers.rs

//! Miscellaneous helper functions for _Readers_.

use crate::common::FPath;

/// Helper function for a slightly annoying set of calls.
pub fn path_to_fpath(path: &std::path::Path) -> FPath {
    // `PathBuf` to `String` https://stackoverflow.com/q/37388107/471376
    (*(path.to_string_lossy())).to_string()
}

/// Helper function for completeness.
pub fn fpath_to_path(path: &FPath) -> &std::path::Path {
    std::path::Path::new(path)
}

/// Truncate `s` to at most `max` bytes for a warning message, backing up to
/// a char boundary. UTF-8 safe counterpart of `s[..max]`.
pub fn str_excerpt(
    s: &str,
    max: usize,
) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut at: usize = max;
    while at > 0 && !s.is_char_boundary(at) {
        at -= 1;
    }

    &s[..at]
}
