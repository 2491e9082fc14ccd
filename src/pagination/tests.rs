//! Tests for Link-header parsing

use super::*;
use reqwest::header::{HeaderMap, HeaderValue};

fn headers_with_link(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert("link", HeaderValue::from_str(value).unwrap());
    headers
}

#[test]
fn test_next_link_single_relation() {
    let headers = headers_with_link(r#"<https://api.github.com/repos/o/r/commits?page=2>; rel="next""#);
    assert_eq!(
        next_link(&headers).as_deref(),
        Some("https://api.github.com/repos/o/r/commits?page=2")
    );
}

#[test]
fn test_next_link_among_multiple_relations() {
    let headers = headers_with_link(
        r#"<https://api.github.com/repos/o/r/issues?page=1>; rel="prev", <https://api.github.com/repos/o/r/issues?page=3>; rel="next", <https://api.github.com/repos/o/r/issues?page=9>; rel="last""#,
    );
    assert_eq!(
        next_link(&headers).as_deref(),
        Some("https://api.github.com/repos/o/r/issues?page=3")
    );
}

#[test]
fn test_next_link_absent_on_last_page() {
    let headers = headers_with_link(
        r#"<https://api.github.com/repos/o/r/issues?page=8>; rel="prev", <https://api.github.com/repos/o/r/issues?page=1>; rel="first""#,
    );
    assert_eq!(next_link(&headers), None);
}

#[test]
fn test_next_link_no_header() {
    assert_eq!(next_link(&HeaderMap::new()), None);
}

#[test]
fn test_single_quoted_rel() {
    let headers = headers_with_link(r"<https://example.com/p2>; rel='next'");
    assert_eq!(next_link(&headers).as_deref(), Some("https://example.com/p2"));
}

#[test]
fn test_malformed_entries_are_skipped() {
    let headers = headers_with_link(
        r#"garbage, <https://example.com/p2>; rel="next""#,
    );
    assert_eq!(next_link(&headers).as_deref(), Some("https://example.com/p2"));

    let headers = headers_with_link(r#"<https://example.com/p2>"#);
    assert_eq!(next_link(&headers), None);
}
