/// Route module
///
/// Pure components for declaring route patterns:
/// - Pure functions (same input → same output)
/// - Pattern matching for control flow

pub mod pattern;

// Re-export commonly used types
pub use pattern::{classify_segment, parse_pattern, render_pattern, PatternSegment};
