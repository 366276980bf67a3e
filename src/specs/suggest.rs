// src/specs/suggest.rs
//! Autocomplete for groups and teachers: `{base}/{teacher|groups}/suggest/?query=…`.
//!
//! The body is `{"suggestions": [{"value": "РИ-280001", "data": 123}, …]}`;
//! `data` is the id the lessons endpoint wants. Passed through untouched.

use crate::core::net::Http;
use crate::model::{Role, SuggestionItem, Suggestions};
use crate::Result;

pub fn fetch(http: &Http, role: Role, query: &str) -> Result<Vec<SuggestionItem>> {
    let path = format!("{}/suggest/", role.api_segment());
    let body: Suggestions = http.get_json(&path, &[("query", query)])?;
    logd!("{} suggestions for {:?}: {}", role, query, body.suggestions.len());
    Ok(body.suggestions)
}

/// Decode a saved response body.
pub fn parse(json: &str) -> Result<Vec<SuggestionItem>> {
    let body: Suggestions = serde_json::from_str(json)?;
    Ok(body.suggestions)
}
