use crate::scanner::SuspiciousPatternScanner;

use googletest::prelude::*;

#[test]
fn given_sql_marker_when_scanned_then_pattern_is_reported() {
    let scanner = SuspiciousPatternScanner::default();

    let matched = scanner.scan("/api/v1/tests?q=1 UNION SELECT password FROM users");

    assert_eq!(matched, Some("union select"));
}

#[test]
fn given_script_tag_when_scanned_then_pattern_is_reported() {
    let scanner = SuspiciousPatternScanner::default();

    let matched = scanner.scan(r#"{"title": "<SCRIPT>alert(1)</script>"}"#);

    assert_eq!(matched, Some("<script"));
}

#[test]
fn given_path_traversal_when_scanned_then_pattern_is_reported() {
    let scanner = SuspiciousPatternScanner::default();

    assert_eq!(scanner.scan("/api/v1/files/../../etc/passwd"), Some("../"));
    assert_eq!(scanner.scan("/api/v1/files/etc/passwd"), Some("etc/passwd"));
}

#[test]
fn given_eval_call_when_scanned_then_pattern_is_reported() {
    let scanner = SuspiciousPatternScanner::default();

    let matched = scanner.scan(r#"{"formula": "eval(window.location)"}"#);

    assert_eq!(matched, Some("eval("));
}

#[test]
fn given_ordinary_request_when_scanned_then_nothing_matches() {
    let scanner = SuspiciousPatternScanner::default();

    let matched = scanner.scan("/api/v1/tests?page=2&sort=created_at");

    assert_eq!(matched, None);
}
