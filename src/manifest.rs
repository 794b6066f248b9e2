//! The `test-result` manifest written by the test suite.
//!
//! Each line is `<source>.rtl/<ok|fail>/<screenshot>`: the test source file,
//! whether the rendered output matched, and the screenshot's file name inside
//! the results directory. Only the third segment is used for the upload; the
//! whole manifest is sent as the report.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Extract the artifact file name from one manifest line.
pub fn artifact_name(line: &str) -> Option<&str> {
    line.trim_end_matches(['\r', '\n']).split('/').nth(2)
}

/// Parse manifest text into artifact names, preserving order.
///
/// A line with fewer than three segments is an error.
pub fn parse_manifest(content: &str) -> Result<Vec<String>> {
    content
        .split_inclusive('\n')
        .enumerate()
        .map(|(idx, line)| {
            artifact_name(line).map(str::to_string).with_context(|| {
                format!(
                    "manifest line {}: expected at least three '/'-separated segments, got {:?}",
                    idx + 1,
                    line.trim_end_matches(['\r', '\n'])
                )
            })
        })
        .collect()
}

/// Read and parse the manifest file.
///
/// The test suite writes file names with `OsStr::to_str`, so a manifest that is
/// not UTF-8 was not produced by it and is rejected.
pub fn read_manifest(path: &Path) -> Result<Vec<String>> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let content = String::from_utf8(bytes)
        .with_context(|| format!("{} is not valid UTF-8", path.display()))?;
    parse_manifest(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_third_segment_is_the_name() {
        assert_eq!(artifact_name("circle.rtl/ok/circle.png"), Some("circle.png"));
        assert_eq!(artifact_name("square.rtl/fail/square-fail.png"), Some("square-fail.png"));
        assert_eq!(artifact_name("a/b/c/d"), Some("c"));
    }

    #[test]
    fn test_windows_line_endings_are_stripped() {
        assert_eq!(artifact_name("path/to/a.png\r\n"), Some("a.png"));
        assert_eq!(artifact_name("path/to/a.png\n"), Some("a.png"));
    }

    #[test]
    fn test_short_line_has_no_name() {
        assert_eq!(artifact_name("a.png"), None);
        assert_eq!(artifact_name("dir/a.png"), None);
        assert_eq!(artifact_name(""), None);
    }

    #[test]
    fn test_parse_preserves_order() {
        let names = parse_manifest("b.rtl/fail/b.png\r\na.rtl/ok/a.png\r\nc.rtl/ok/c.png").unwrap();
        assert_eq!(names, ["b.png", "a.png", "c.png"]);
    }

    #[test]
    fn test_suite_manifest_with_pass_and_fail() {
        let names = parse_manifest("circle.rtl/ok/circle.png\nsquare.rtl/fail/square.png\n").unwrap();
        assert_eq!(names, ["circle.png", "square.png"]);
    }

    #[test]
    fn test_empty_manifest() {
        assert!(parse_manifest("").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let err = parse_manifest("a.rtl/ok/a.png\nbroken\n").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("line 2"), "{msg}");
        assert!(msg.contains("broken"), "{msg}");
    }

    #[test]
    fn test_blank_line_is_malformed() {
        assert!(parse_manifest("a.rtl/ok/a.png\n\nb.rtl/fail/b.png\n").is_err());
    }

    #[test]
    fn test_read_non_utf8_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test-result");
        fs::write(&path, b"circle.rtl/ok/circ\xffle.png\n").unwrap();
        let err = read_manifest(&path).unwrap_err();
        assert!(err.to_string().contains("not valid UTF-8"), "{err:#}");
    }

    #[test]
    fn test_read_missing_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_manifest(&dir.path().join("test-result")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
