//! Canonical names for video files and the references that point at them.
//!
//! References copied between editors drift away from the files they name:
//! backslash separators, URL percent-escapes, HTML entities, non-breaking
//! spaces, and `-<digits>` suffixes left behind by a de-duplicating
//! export. This module folds all of that back into one spelling so a
//! document and the files on disk can agree.

mod decode;
mod suffix;

pub use decode::{decode_entities, decode_percent};
pub use suffix::strip_dedup_suffix;

use regex::Regex;
use std::sync::LazyLock;

/// Any run of whitespace, non-breaking space included.
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\u{00A0}]+").expect("invalid regex"));

/// Canonicalizes a path fragment as found in a `src` attribute.
///
/// The pipeline, in order:
/// 1. HTML character references decoded (`&nbsp;` → non-breaking space)
/// 2. Percent-escapes decoded (`%20` → space)
/// 3. Every `\` becomes `/`
/// 4. Whitespace runs collapse to a single space
/// 5. The final `/`-separated segment loses one `-<digits>` suffix
///    before its extension
/// 6. Remaining spaces become underscores
///
/// Segments keep their order; only the last one is treated as a filename
/// for suffix stripping. Decoding is best-effort and the function cannot
/// fail.
///
/// # Examples
///
/// - `canonicalize_path("video%20clip.mp4")` → `"video_clip.mp4"`
/// - `canonicalize_path(r"folder\sub folder\clip-2.mp4")` → `"folder/sub_folder/clip.mp4"`
pub fn canonicalize_path(raw: &str) -> String {
    let decoded = decode_percent(&decode_entities(raw));
    let unified = decoded.replace('\\', "/");
    let collapsed = WHITESPACE_RUN.replace_all(&unified, " ");

    let mut segments: Vec<String> = collapsed.split('/').map(str::to_string).collect();
    if let Some(filename) = segments.last_mut() {
        *filename = strip_dedup_suffix(filename);
    }
    segments.join("/").replace(' ', "_")
}

/// Canonicalizes a bare filename, e.g. the base name of a file on disk.
///
/// Same rules as [`canonicalize_path`] minus separator handling: a disk
/// base name contains no `/`, and a literal `\` in it is part of the name
/// rather than a path separator, so the whole string is one filename
/// segment.
pub fn canonicalize_filename(name: &str) -> String {
    let decoded = decode_percent(&decode_entities(name));
    let collapsed = WHITESPACE_RUN.replace_all(&decoded, " ");
    strip_dedup_suffix(&collapsed).replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_encoded_space() {
        assert_eq!(canonicalize_path("video%20clip.mp4"), "video_clip.mp4");
    }

    #[test]
    fn entity_encoded_space() {
        assert_eq!(canonicalize_path("video&nbsp;clip.mp4"), "video_clip.mp4");
    }

    #[test]
    fn backslashes_and_path_segments() {
        assert_eq!(
            canonicalize_path(r"folder\sub folder\clip-2.mp4"),
            "folder/sub_folder/clip.mp4"
        );
    }

    #[test]
    fn suffix_stripped_on_filename_only() {
        assert_eq!(canonicalize_path("VELR-1/clip-3.mp4"), "VELR-1/clip.mp4");
    }

    #[test]
    fn whitespace_runs_collapse_before_underscores() {
        assert_eq!(canonicalize_path("a \u{00A0}\t b.mp4"), "a_b.mp4");
        assert_eq!(canonicalize_filename("a  b  c.mp4"), "a_b_c.mp4");
    }

    #[test]
    fn pure_filename_has_no_path_handling() {
        assert_eq!(canonicalize_path("clip 1-4.mp4"), "clip_1.mp4");
    }

    #[test]
    fn no_backslash_survives() {
        let out = canonicalize_path(r"a\b\c d-1.mp4");
        assert!(!out.contains('\\'));
        assert_eq!(out, "a/b/c_d.mp4");
    }

    #[test]
    fn canonical_output_is_a_fixed_point() {
        for raw in [
            "video%20clip.mp4",
            "video&nbsp;clip.mp4",
            r"folder\sub folder\clip-2.mp4",
            "clip 1-4.mp4",
            "movie-12.mp4",
            "already_clean.mp4",
        ] {
            let once = canonicalize_path(raw);
            assert_eq!(canonicalize_path(&once), once, "not a fixed point: {raw}");
        }
    }

    #[test]
    fn filename_variant_keeps_backslash_literal() {
        assert_eq!(canonicalize_filename(r"a\b-1.mp4"), r"a\b.mp4");
    }

    #[test]
    fn filename_variant_matches_disk_expectations() {
        assert_eq!(canonicalize_filename("weird name-5.mp4"), "weird_name.mp4");
        assert_eq!(canonicalize_filename("already_clean.mp4"), "already_clean.mp4");
    }
}
