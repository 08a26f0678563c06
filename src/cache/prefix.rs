//! Prefix Helpers
//!
//! Turns filesystem-like paths into cache key prefixes.

use crate::error::{CacheError, Result};

/// Normalizes a directory path into a key prefix covering the directory
/// and everything below it.
///
/// Trailing slashes are stripped and exactly one `/` is appended, so
/// `/var/www/site` matches `/var/www/site/index.php` but never
/// `/var/www/site2/index.php`.
///
/// An empty path is rejected rather than widened to `/`.
///
/// ```
/// use prefix_cache::cache::directory_prefix;
///
/// assert_eq!(directory_prefix("/var/www/site").unwrap(), "/var/www/site/");
/// assert_eq!(directory_prefix("/var/www/site//").unwrap(), "/var/www/site/");
/// assert_eq!(directory_prefix("/").unwrap(), "/");
/// ```
pub fn directory_prefix(path: &str) -> Result<String> {
    if path.is_empty() {
        return Err(CacheError::InvalidRequest(
            "Directory path cannot be empty".to_string(),
        ));
    }

    Ok(format!("{}/", path.trim_end_matches('/')))
}
