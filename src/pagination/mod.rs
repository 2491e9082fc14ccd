//! Link-header pagination
//!
//! GitHub conveys pagination through the RFC 5988 `Link` response
//! header:
//!
//! ```text
//! Link: <https://api.github.com/...?page=2>; rel="next", <...>; rel="last"
//! ```
//!
//! Extraction walks the `rel="next"` chain until the header carries no
//! next relation.

use reqwest::header::HeaderMap;

/// The URL of the next page, if the response declares one.
pub fn next_link(headers: &HeaderMap) -> Option<String> {
    let link_header = headers.get("link")?.to_str().ok()?;
    link_with_rel(link_header, "next")
}

/// Extract the URL carrying the given rel from a Link header value.
///
/// Each comma-separated entry looks like `<url>; rel="next"`; parameters
/// other than `rel` are ignored.
fn link_with_rel(header: &str, target_rel: &str) -> Option<String> {
    header.split(',').find_map(|entry| {
        let mut segments = entry.split(';');

        let url = segments
            .next()?
            .trim()
            .strip_prefix('<')?
            .strip_suffix('>')?;

        let matches_rel = segments.any(|param| {
            param
                .trim()
                .strip_prefix("rel=")
                .map(|value| value.trim_matches('"').trim_matches('\'') == target_rel)
                .unwrap_or(false)
        });

        matches_rel.then(|| url.to_string())
    })
}

#[cfg(test)]
mod tests;
