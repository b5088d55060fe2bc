//! Stripping of `-<digits>` de-duplication suffixes.

use regex::Regex;
use std::sync::LazyLock;

/// Matches a filename ending in `-<digits>` directly before the final
/// extension, e.g. `clip-4.mp4`. The extension may not contain further
/// dots or slashes, so `clip-4.tar.gz` is not a match. The greedy stem
/// pins the match to the digit run nearest the extension.
static DEDUP_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*)-\d+(\.[^./]+)$").expect("invalid regex"));

/// Removes a single trailing `-<digits>` run from the stem of `name`.
///
/// Only the run touching the extension goes: `clip-12-3.mp4` →
/// `clip-12.mp4`. Names without such a run come back unchanged.
pub fn strip_dedup_suffix(name: &str) -> String {
    match DEDUP_SUFFIX.captures(name) {
        Some(caps) => format!("{}{}", &caps[1], &caps[2]),
        None => name.to_string(),
    }
}
