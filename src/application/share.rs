//! Shareable result links.

use std::fmt;

use crate::domain::snapshot::SnapshotToken;
use crate::ports::DATA_PARAM;

/// Outbound link carrying a snapshot token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink(String);

impl ShareLink {
    /// `base` without its query and fragment, plus `?data=<token>`.
    pub fn build(base: &str, token: &SnapshotToken) -> Self {
        let (origin_and_path, _) = split_query(base);
        Self(format!("{}?{}={}", origin_and_path, DATA_PARAM, token))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ShareLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Removes every occurrence of `key` from the query of `href`.
///
/// Other parameters and the fragment are kept; an emptied query loses its `?`.
pub fn strip_query_param(href: &str, key: &str) -> String {
    let (without_fragment, fragment) = match href.split_once('#') {
        Some((head, frag)) => (head, Some(frag)),
        None => (href, None),
    };
    let (origin_and_path, query) = split_query(without_fragment);

    let kept: Vec<&str> = query
        .unwrap_or("")
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter(|pair| pair.split('=').next() != Some(key))
        .collect();

    let mut out = origin_and_path.to_string();
    if !kept.is_empty() {
        out.push('?');
        out.push_str(&kept.join("&"));
    }
    if let Some(frag) = fragment {
        out.push('#');
        out.push_str(frag);
    }
    out
}

fn split_query(href: &str) -> (&str, Option<&str>) {
    let without_fragment = href.split('#').next().unwrap_or(href);
    match without_fragment.split_once('?') {
        Some((head, query)) => (head, Some(query)),
        None => (without_fragment, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_appends_data_param() {
        let link = ShareLink::build("http://localhost:5173/", &SnapshotToken::from("abc"));
        assert_eq!(link.as_str(), "http://localhost:5173/?data=abc");
    }

    #[test]
    fn build_drops_existing_query_and_fragment() {
        let link = ShareLink::build(
            "https://skills.example.com/sorter?data=old&x=1#top",
            &SnapshotToken::from("new"),
        );
        assert_eq!(link.to_string(), "https://skills.example.com/sorter?data=new");
    }

    #[test]
    fn strip_removes_only_the_key() {
        assert_eq!(
            strip_query_param("http://h/p?lang=en&data=abc&x=1", "data"),
            "http://h/p?lang=en&x=1"
        );
    }

    #[test]
    fn strip_drops_empty_query_and_keeps_fragment() {
        assert_eq!(strip_query_param("http://h/p?data=abc#r", "data"), "http://h/p#r");
        assert_eq!(strip_query_param("http://h/p", "data"), "http://h/p");
    }

    #[test]
    fn strip_does_not_match_prefixes() {
        assert_eq!(
            strip_query_param("http://h/?database=1&data", "data"),
            "http://h/?database=1"
        );
    }
}
