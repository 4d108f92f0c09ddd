//! Errors reported by the route table and navigator
//!
//! Both kinds are deterministic: retrying the same call gives the same answer.

use thiserror::Error;

/// Top-level routing error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// No registered pattern matches the requested path
    #[error("no route matches path `{path}`")]
    NotFound { path: String },

    /// Reverse generation or registration was asked for something the table cannot provide
    #[error(transparent)]
    InvalidRoute(#[from] InvalidRoute),

    /// A route pattern could not be parsed
    #[error("invalid route pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

/// Programming errors around named routes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidRoute {
    #[error("unknown route name `{name}`")]
    UnknownName { name: String },

    #[error("route `{name}` requires parameter `{param}`")]
    MissingParam { name: String, param: String },

    #[error("route name `{name}` is already registered")]
    DuplicateName { name: String },
}

impl RouteError {
    pub(crate) fn not_found(path: impl Into<String>) -> Self {
        RouteError::NotFound { path: path.into() }
    }

    pub(crate) fn invalid_pattern(pattern: &str, reason: impl Into<String>) -> Self {
        RouteError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }

    /// True when the error means the path simply has no page
    pub fn is_not_found(&self) -> bool {
        matches!(self, RouteError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = RouteError::not_found("/nope");
        assert_eq!(err.to_string(), "no route matches path `/nope`");
        assert!(err.is_not_found());

        let err: RouteError = InvalidRoute::MissingParam {
            name: "session".into(),
            param: "token".into(),
        }
        .into();
        assert_eq!(err.to_string(), "route `session` requires parameter `token`");
        assert!(!err.is_not_found());
    }
}
