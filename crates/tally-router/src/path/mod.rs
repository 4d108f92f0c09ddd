/// Path utilities for validation, normalization and location parsing
///
/// All functions are **pure**: given same input, always produce same output with no side effects.
use std::borrow::Cow;

pub mod location;
pub use location::{parse_location, Location};

/// Validates if a path is in canonical form
///
/// # Rules
///
/// - Must start with `/`
/// - Must not contain `//` or `\`
/// - Must not end with `/` (except root `/`)
/// - Must not be empty
///
/// # Examples
///
/// ```
/// use tally_router::path::is_valid_path;
///
/// assert!(is_valid_path("/"));
/// assert!(is_valid_path("/s/abc123/tok1"));
///
/// assert!(!is_valid_path(""));
/// assert!(!is_valid_path("s/abc123")); // Missing leading /
/// assert!(!is_valid_path("/s/abc123/")); // Trailing /
/// assert!(!is_valid_path("/s//abc123")); // Double //
/// assert!(!is_valid_path("/s\\abc123")); // Backslash
/// ```
pub fn is_valid_path(path: &str) -> bool {
    if path.is_empty() || !path.starts_with('/') {
        return false;
    }

    if path.contains("//") || path.contains('\\') {
        return false;
    }

    path == "/" || !path.ends_with('/')
}

/// Normalize a path to canonical form
///
/// Returns `Cow::Borrowed` when input is already valid (zero allocations).
/// Returns `Cow::Owned` when normalization needed (single allocation).
///
/// # Handles User Mistakes
///
/// - Trailing slashes: `/s/a/b/` → `/s/a/b`
/// - Double slashes: `/s//a` → `/s/a`
/// - Backslashes: `\s\a` → `/s/a`
/// - Empty input: `` → `/`
///
/// # Examples
///
/// ```
/// use tally_router::path::normalize_path;
/// use std::borrow::Cow;
///
/// let path = normalize_path("/s/abc/tok");
/// assert!(matches!(path, Cow::Borrowed("/s/abc/tok")));
///
/// assert_eq!(normalize_path("/s/abc/tok/"), "/s/abc/tok");
/// assert_eq!(normalize_path("\\s\\abc"), "/s/abc");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if is_valid_path(path) {
        return Cow::Borrowed(path);
    }

    let normalized = path
        .replace('\\', "/")
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if normalized.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", normalized))
    }
}

/// Splits a path into percent-decoded segments
///
/// Splitting happens before decoding, so an encoded `%2F` stays inside its
/// segment. Segments that do not decode to UTF-8 are returned raw.
///
/// # Examples
///
/// ```
/// use tally_router::path::decoded_segments;
///
/// let segments = decoded_segments("/s/a%20b/x%2Fy");
/// assert_eq!(segments, vec!["s", "a b", "x/y"]);
/// ```
pub fn decoded_segments(path: &str) -> Vec<Cow<'_, str>> {
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(|segment| urlencoding::decode(segment).unwrap_or(Cow::Borrowed(segment)))
        .collect()
}

/// Percent-encodes a value for use as a single path segment
pub fn encode_segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// Normalizes a deployment base path: `""`, `/` → `/`; `app/` → `/app`
pub fn normalize_base(base: &str) -> String {
    normalize_path(base.trim()).into_owned()
}

/// Prefixes an application path with the deployment base
///
/// # Examples
///
/// ```
/// use tally_router::path::join_base;
///
/// assert_eq!(join_base("/", "/s/a/b"), "/s/a/b");
/// assert_eq!(join_base("/app", "/s/a/b"), "/app/s/a/b");
/// assert_eq!(join_base("/app", "/"), "/app");
/// assert_eq!(join_base("/app", "s/a/b"), "/app/s/a/b");
/// assert_eq!(join_base("/app", "?tab=log"), "/app/?tab=log");
/// ```
pub fn join_base(base: &str, path: &str) -> String {
    let path: Cow<'_, str> = if path.starts_with('/') {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(format!("/{}", path))
    };

    match (base, path.as_ref()) {
        ("/", _) => path.into_owned(),
        (_, "/") => base.to_string(),
        _ => format!("{}{}", base, path),
    }
}

/// Removes the deployment base from a full URL path
///
/// Returns `None` when the path lives outside the base.
///
/// # Examples
///
/// ```
/// use tally_router::path::strip_base;
///
/// assert_eq!(strip_base("/app", "/app/s/a/b"), Some("/s/a/b"));
/// assert_eq!(strip_base("/app", "/app"), Some("/"));
/// assert_eq!(strip_base("/app", "/application"), None);
/// assert_eq!(strip_base("/", "/s/a/b"), Some("/s/a/b"));
/// ```
pub fn strip_base<'a>(base: &str, path: &'a str) -> Option<&'a str> {
    if base == "/" {
        return Some(path);
    }

    match path.strip_prefix(base)? {
        "" => Some("/"),
        rest if rest.starts_with('/') || rest.starts_with('?') || rest.starts_with('#') => {
            Some(rest)
        }
        _ => None,
    }
}
