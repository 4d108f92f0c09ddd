use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

use super::normalize_path;

/// A parsed URL location: normalized path, query pairs and hash fragment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub path: String,
    pub query: Vec<(String, String)>,
    pub hash: Option<String>,
}

impl Location {
    /// Location of a bare path with no query or hash
    pub fn from_path(path: &str) -> Self {
        Self {
            path: normalize_path(path).into_owned(),
            query: Vec::new(),
            hash: None,
        }
    }

    /// First value for a query key
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for Location {
    /// Renders the location back to a URL string with the query re-encoded
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;

        for (i, (key, value)) in self.query.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(
                f,
                "{}{}={}",
                sep,
                urlencoding::encode(key),
                urlencoding::encode(value)
            )?;
        }

        if let Some(hash) = &self.hash {
            write!(f, "#{}", hash)?;
        }

        Ok(())
    }
}

/// Splits a raw URL into a [`Location`]
///
/// The path is normalized, query keys and values are percent-decoded with
/// `+` read as a space, and the fragment is kept verbatim.
///
/// # Examples
///
/// ```
/// use tally_router::path::parse_location;
///
/// let loc = parse_location("/s/abc/tok/?tab=members#top");
/// assert_eq!(loc.path, "/s/abc/tok");
/// assert_eq!(loc.query_value("tab"), Some("members"));
/// assert_eq!(loc.hash.as_deref(), Some("top"));
/// ```
pub fn parse_location(url: &str) -> Location {
    let (rest, hash) = match url.split_once('#') {
        Some((rest, hash)) => (rest, Some(hash.to_string())),
        None => (url, None),
    };

    let (path, query) = match rest.split_once('?') {
        Some((path, query)) => (path, parse_query(query)),
        None => (rest, Vec::new()),
    };

    Location {
        path: normalize_path(path).into_owned(),
        query,
        hash,
    }
}

fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_query_part(key), decode_query_part(value))
        })
        .collect()
}

fn decode_query_part(part: &str) -> String {
    let spaced = part.replace('+', " ");
    let decoded = urlencoding::decode(&spaced).map(Cow::into_owned);
    decoded.unwrap_or(spaced)
}
