//! Rewrites `<video src=...>` references inside a document.
//!
//! Scanning is regex-based and deliberately narrow: only the quoted
//! `src` attribute of an opening `<video>` tag is touched, everything
//! else in the document is reproduced byte-for-byte.

use anyhow::{Context, Result};
use regex::{Captures, Regex};
use std::path::Path;
use std::sync::LazyLock;

use crate::canonical;

/// Matches the quoted `src` value inside an opening `<video>` tag.
/// Tag name and attributes are case-insensitive, the tag may span lines,
/// and other attributes may precede `src`. The regex crate has no
/// backreferences, so single- and double-quoted values are alternated
/// explicitly; `[^>]*?` keeps the match inside one tag.
static VIDEO_SRC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)(<video\b[^>]*?\ssrc=)(?:"([^"]*)"|'([^']*)')"#).expect("invalid regex")
});

/// One rewritten `src` attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SrcChange {
    pub original: String,
    pub replacement: String,
}

/// Canonicalizes every `<video>` `src` value in `document`.
///
/// Returns the rewritten text and the values that actually changed, in
/// document order. Already-canonical values and everything outside the
/// matched attributes are untouched, including the quoting style.
pub fn rewrite_video_sources(document: &str) -> (String, Vec<SrcChange>) {
    let mut changes = Vec::new();
    let rewritten = VIDEO_SRC.replace_all(document, |caps: &Captures| {
        let prefix = &caps[1];
        let (quote, raw) = match caps.get(2) {
            Some(m) => ('"', m.as_str()),
            None => ('\'', caps.get(3).map_or("", |m| m.as_str())),
        };
        let fixed = canonical::canonicalize_path(raw);
        if fixed != raw {
            changes.push(SrcChange {
                original: raw.to_string(),
                replacement: fixed.clone(),
            });
        }
        format!("{prefix}{quote}{fixed}{quote}")
    });
    (rewritten.into_owned(), changes)
}

/// Rewrites the document at `path`, writing the result to `output` or
/// back in place. I/O failures here are fatal for the run.
///
/// The file is written even when nothing changed; the returned change
/// list is what drives reporting.
pub fn rewrite_document_file(path: &Path, output: Option<&Path>) -> Result<Vec<SrcChange>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read document: {}", path.display()))?;
    let (rewritten, changes) = rewrite_video_sources(&text);
    tracing::debug!(
        "document {}: {} src value(s) rewritten",
        path.display(),
        changes.len()
    );

    let target = output.unwrap_or(path);
    std::fs::write(target, rewritten.as_bytes())
        .with_context(|| format!("write document: {}", target.display()))?;
    Ok(changes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_double_quoted_src() {
        let doc = r#"<p>x</p><video controls src="a/clip 1-4.mp4"></video>"#;
        let (out, changes) = rewrite_video_sources(doc);
        assert_eq!(out, r#"<p>x</p><video controls src="a/clip_1.mp4"></video>"#);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].original, "a/clip 1-4.mp4");
        assert_eq!(changes[0].replacement, "a/clip_1.mp4");
    }

    #[test]
    fn rewrites_single_quoted_src_keeping_the_quote() {
        let doc = "<video src='b\\clip%202.mp4'></video>";
        let (out, changes) = rewrite_video_sources(doc);
        assert_eq!(out, "<video src='b/clip_2.mp4'></video>");
        assert_eq!(changes.len(), 1);
    }

    #[test]
    fn tag_may_span_lines_and_mix_case() {
        let doc = "<VIDEO width=\"640\"\n  controls\n  SRC=\"clip&nbsp;a-2.mp4\">\n</VIDEO>";
        let (out, changes) = rewrite_video_sources(doc);
        assert!(out.contains("SRC=\"clip_a.mp4\""));
        assert_eq!(changes.len(), 1);
    }

    #[test]
    fn document_without_video_tags_is_unchanged() {
        let doc = "<html><img src=\"photo 1-2.png\"></html>";
        let (out, changes) = rewrite_video_sources(doc);
        assert_eq!(out, doc);
        assert!(changes.is_empty());
    }

    #[test]
    fn canonical_values_are_not_reported() {
        let doc = r#"<video src="a/clip.mp4"></video>"#;
        let (out, changes) = rewrite_video_sources(doc);
        assert_eq!(out, doc);
        assert!(changes.is_empty());
    }

    #[test]
    fn changes_are_in_document_order() {
        let doc = concat!(
            r#"<video src="z 1.mp4"></video>"#,
            r#"<video src="a 2-1.mp4"></video>"#,
        );
        let (_, changes) = rewrite_video_sources(doc);
        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0].replacement, "z_1.mp4");
        assert_eq!(changes[1].replacement, "a_2.mp4");
    }

    #[test]
    fn rerun_on_own_output_reports_nothing() {
        let doc = r#"<video src="a\b c-3.mp4"></video><video src='d 4.mp4'></video>"#;
        let (once, changes) = rewrite_video_sources(doc);
        assert_eq!(changes.len(), 2);
        let (twice, rerun) = rewrite_video_sources(&once);
        assert_eq!(twice, once);
        assert!(rerun.is_empty());
    }
}
