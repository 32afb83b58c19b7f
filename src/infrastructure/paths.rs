//! Path utilities for user-supplied file locations.
//!
//! Config values such as `jobs_file` or `theme_file` are typed by hand and
//! often start with `~`. This module resolves them against `$HOME`.

use std::path::PathBuf;

/// Expands a leading `~` to the home directory.
///
/// Paths without a tilde, and every path when `$HOME` is unset, are returned
/// unchanged.
///
/// # Examples
///
/// ```
/// use favoris::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("/absolute/path"), PathBuf::from("/absolute/path"));
/// assert_eq!(expand_tilde("relative.json"), PathBuf::from("relative.json"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    expand_tilde_with(path, std::env::var_os("HOME").map(PathBuf::from))
}

fn expand_tilde_with(path: &str, home: Option<PathBuf>) -> PathBuf {
    let Some(home) = home else {
        return PathBuf::from(path);
    };

    if path == "~" {
        home
    } else if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest)
    } else {
        PathBuf::from(path)
    }
}
