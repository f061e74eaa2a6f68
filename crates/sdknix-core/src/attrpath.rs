//! Derivation of a package's hierarchical attribute path.

use crate::sanitize::sanitize;

/// Resolve a raw semicolon-delimited package path into its attribute-path
/// segments.
///
/// Each segment is sanitized independently, then version-suffix segments
/// (first character a digit, or exactly `latest`) are merged into their
/// predecessor by hyphen concatenation. This collapses version-qualified
/// sub-paths (`build-tools;30.0.3` → `build-tools-30-0-3`) into a single
/// segment while leaving multi-level category paths
/// (`extras;google;usb_driver`) nested.
///
/// A version-suffix segment at position zero has nothing to merge into and
/// starts the path as its own segment.
pub fn resolve(raw_path: &str) -> Vec<String> {
    raw_path
        .split(';')
        .map(sanitize)
        .fold(Vec::new(), |mut segments, segment| {
            match segments.last_mut() {
                Some(prev) if is_version_suffix(&segment) => {
                    *prev = format!("{prev}-{segment}");
                }
                _ => segments.push(segment),
            }
            segments
        })
}

fn is_version_suffix(segment: &str) -> bool {
    segment == "latest"
        || segment
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_digit())
}
