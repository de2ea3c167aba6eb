//! Path predicates and the canonical path transform.

use axum::http::{header, HeaderMap};

/// Header browsers send to describe the fetch destination.
pub const SEC_FETCH_DEST: &str = "sec-fetch-dest";

/// Returns true when the request is a full page navigation.
///
/// Either `Sec-Fetch-Dest: document`, or an `Accept` header mentioning
/// `text/html`. Missing or non-UTF-8 values count as empty.
pub fn is_document_request(headers: &HeaderMap) -> bool {
    let dest = header_str(headers, SEC_FETCH_DEST);
    let accept = header_str(headers, header::ACCEPT.as_str());
    dest == "document" || accept.contains("text/html")
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> &'a str {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

/// Returns true when the path ends like a file name (`/logo.png`,
/// `/site.webmanifest`): a dot followed by one or more ASCII alphanumerics.
///
/// This is a heuristic. `/v1.2` also counts as a file.
pub fn has_file_extension(path: &str) -> bool {
    let stem = path.trim_end_matches(|c: char| c.is_ascii_alphanumeric());
    stem.len() < path.len() && stem.ends_with('.')
}

/// Compute the canonical form of a request path.
///
/// Applied in order: collapse runs of `/`, strip trailing `/`, strip a
/// trailing run of `.` and whitespace, and fall back to `/` when nothing
/// is left.
pub fn canonical_path(path: &str) -> String {
    let mut collapsed = String::with_capacity(path.len());
    let mut prev_slash = false;
    for ch in path.chars() {
        if ch == '/' {
            if !prev_slash {
                collapsed.push(ch);
            }
            prev_slash = true;
        } else {
            prev_slash = false;
            collapsed.push(ch);
        }
    }

    let trimmed = collapsed
        .trim_end_matches('/')
        .trim_end_matches(|c: char| c == '.' || is_js_whitespace(c));

    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

// Unicode White_Space plus the BOM, which browsers also treat as blank.
fn is_js_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}
