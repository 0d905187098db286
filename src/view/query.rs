//! Shareable state string.
//!
//! Serializes the filter/sort state into URL-style query parameters so a
//! view can be bookmarked, shared, and restored via `--state`:
//!
//! `q=pixel&brand=Google&sort=repairability_score:desc&score=7&noscore=1`
//!
//! Parameters at their default value are omitted entirely; an empty
//! string therefore denotes the default view. Unknown parameters are
//! ignored on parse so newer share strings degrade gracefully. Selection
//! is intentionally excluded from persistence.

use super::state::{FilterState, SortDirection, SortKey, SortState, ViewState};
use crate::error::{FixgradeError, Result};
use std::fmt::Write as _;

/// Serialize state into a query string, omitting defaults.
#[must_use]
pub fn to_query(filter: &FilterState, sort: &SortState) -> String {
    let mut query = String::new();

    if !filter.search.is_empty() {
        push_pair(&mut query, "q", &filter.search);
    }
    if let Some(brand) = &filter.brand {
        push_pair(&mut query, "brand", brand);
    }
    if *sort != SortState::default() {
        push_pair(
            &mut query,
            "sort",
            &format!("{}:{}", sort.key.as_str(), sort.direction.as_str()),
        );
    }
    if let Some(score) = filter.score {
        push_pair(&mut query, "score", &score.to_string());
    }
    if filter.include_unscored {
        push_pair(&mut query, "noscore", "1");
    }

    query
}

/// Parse a query string back into state. The inverse of [`to_query`]:
/// absent parameters yield defaults, so `from_query(to_query(s)) == s`.
pub fn from_query(query: &str) -> Result<ViewState> {
    let mut state = ViewState::default();

    for pair in query.trim_start_matches('?').split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let value = decode_component(value);
        match key {
            "q" => state.filter.search = value,
            "brand" => {
                if !value.is_empty() {
                    state.filter.brand = Some(value);
                }
            }
            "sort" => state.sort = parse_sort(&value)?,
            "score" => {
                let score: u8 = value
                    .parse()
                    .map_err(|_| FixgradeError::state(format!("invalid score filter: {value:?}")))?;
                if score > 10 {
                    return Err(FixgradeError::state(format!(
                        "score filter out of range: {score}"
                    )));
                }
                state.filter.score = Some(score);
            }
            "noscore" => state.filter.include_unscored = value == "1",
            // Unknown parameters are ignored
            _ => {}
        }
    }

    Ok(state)
}

fn parse_sort(value: &str) -> Result<SortState> {
    let (key, direction) = value
        .split_once(':')
        .ok_or_else(|| FixgradeError::state(format!("invalid sort: {value:?}")))?;
    let key = SortKey::parse(key)
        .ok_or_else(|| FixgradeError::state(format!("unknown sort key: {key:?}")))?;
    let direction = SortDirection::parse(direction)
        .ok_or_else(|| FixgradeError::state(format!("unknown sort direction: {direction:?}")))?;
    Ok(SortState { key, direction })
}

fn push_pair(query: &mut String, key: &str, value: &str) {
    if !query.is_empty() {
        query.push('&');
    }
    query.push_str(key);
    query.push('=');
    query.push_str(&encode_component(value));
}

// Minimal percent codec for the five known parameters; values are short
// human-entered strings, so only the delimiter set needs escaping.

fn encode_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b':' => {
                out.push(char::from(byte));
            }
            _ => {
                let _ = write!(out, "%{byte:02X}");
            }
        }
    }
    out
}

fn decode_component(s: &str) -> String {
    let mut out = Vec::with_capacity(s.len());
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                if let Some(byte) = s
                    .get(i + 1..i + 3)
                    .and_then(|hex| u8::from_str_radix(hex, 16).ok())
                {
                    out.push(byte);
                    i += 3;
                } else {
                    out.push(b'%');
                    i += 1;
                }
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            byte => {
                out.push(byte);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}
