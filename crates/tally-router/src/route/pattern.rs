/// Pattern parsing for route declarations
///
/// Pure functional parsing of `/s/:id/:token` style patterns into typed segments.
/// All functions are **pure**: same input → same output, no side effects.
use std::collections::HashSet;

use crate::RouteError;

/// One segment of a route pattern
///
/// # Examples
///
/// ```
/// use tally_router::route::pattern::{classify_segment, PatternSegment};
///
/// assert_eq!(classify_segment("expense"), PatternSegment::Static("expense".to_string()));
/// assert_eq!(classify_segment(":expId"), PatternSegment::Param("expId".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSegment {
    /// Literal text that must match exactly
    Static(String),
    /// Named placeholder that binds any non-empty segment
    Param(String),
}

impl PatternSegment {
    /// Parameter name, if this segment is a placeholder
    pub fn param_name(&self) -> Option<&str> {
        match self {
            PatternSegment::Param(name) => Some(name),
            PatternSegment::Static(_) => None,
        }
    }
}

/// Classifies a raw pattern segment (pure function)
///
/// A leading `:` marks a placeholder, anything else is literal text.
pub fn classify_segment(segment: &str) -> PatternSegment {
    match segment.strip_prefix(':') {
        Some(name) => PatternSegment::Param(name.to_string()),
        None => PatternSegment::Static(segment.to_string()),
    }
}

/// Parses a full pattern into segments
///
/// # Rules
///
/// - Must start with `/`
/// - `/` alone is the root pattern and has no segments
/// - Empty segments (`//`, trailing `/`) are ignored
/// - Placeholders need a name, and names are unique within the pattern
///
/// # Examples
///
/// ```
/// use tally_router::route::pattern::{parse_pattern, PatternSegment};
///
/// let segments = parse_pattern("/s/:id/:token").unwrap();
/// assert_eq!(segments.len(), 3);
/// assert_eq!(segments[1], PatternSegment::Param("id".to_string()));
///
/// assert!(parse_pattern("/s/:id/:id").is_err());
/// assert!(parse_pattern("s/:id").is_err());
/// ```
pub fn parse_pattern(pattern: &str) -> Result<Vec<PatternSegment>, RouteError> {
    if !pattern.starts_with('/') {
        return Err(RouteError::invalid_pattern(pattern, "must start with `/`"));
    }

    let segments: Vec<PatternSegment> = pattern
        .split('/')
        .filter(|s| !s.is_empty())
        .map(classify_segment)
        .collect();

    let mut seen = HashSet::new();
    for name in segments.iter().filter_map(PatternSegment::param_name) {
        if name.is_empty() {
            return Err(RouteError::invalid_pattern(
                pattern,
                "placeholder is missing a name",
            ));
        }
        if !seen.insert(name) {
            return Err(RouteError::invalid_pattern(
                pattern,
                format!("placeholder `{}` appears more than once", name),
            ));
        }
    }

    Ok(segments)
}

/// Renders segments back to their canonical pattern string
pub fn render_pattern(segments: &[PatternSegment]) -> String {
    if segments.is_empty() {
        return "/".to_string();
    }

    segments
        .iter()
        .map(|segment| match segment {
            PatternSegment::Static(text) => format!("/{}", text),
            PatternSegment::Param(name) => format!("/:{}", name),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_static() {
        assert_eq!(
            classify_segment("edit"),
            PatternSegment::Static("edit".to_string())
        );
    }

    #[test]
    fn test_classify_param() {
        assert_eq!(
            classify_segment(":token"),
            PatternSegment::Param("token".to_string())
        );
    }

    #[test]
    fn test_parse_root() {
        assert_eq!(parse_pattern("/").unwrap(), Vec::new());
    }

    #[test]
    fn test_parse_expense_pattern() {
        let segments = parse_pattern("/s/:id/:token/expense/:expId/edit").unwrap();
        let names: Vec<&str> = segments.iter().filter_map(|s| s.param_name()).collect();
        assert_eq!(names, vec!["id", "token", "expId"]);
        assert_eq!(segments[3], PatternSegment::Static("expense".to_string()));
    }

    #[test]
    fn test_parse_ignores_empty_segments() {
        let segments = parse_pattern("/s//:id/").unwrap();
        assert_eq!(render_pattern(&segments), "/s/:id");
    }

    #[test]
    fn test_parse_rejects_relative() {
        let err = parse_pattern("s/:id").unwrap_err();
        assert!(matches!(err, RouteError::InvalidPattern { .. }));
    }

    #[test]
    fn test_parse_rejects_duplicate_names() {
        let err = parse_pattern("/a/:id/b/:id").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid route pattern `/a/:id/b/:id`: placeholder `id` appears more than once"
        );
    }

    #[test]
    fn test_parse_rejects_unnamed_placeholder() {
        assert!(parse_pattern("/a/:").is_err());
    }

    #[test]
    fn test_render_round_trip() {
        for pattern in ["/", "/s/:id/:token", "/s/:id/:token/edit"] {
            assert_eq!(render_pattern(&parse_pattern(pattern).unwrap()), pattern);
        }
    }
}
