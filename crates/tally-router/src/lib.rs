//! # Tally Router
//!
//! Client-side routing for the Tally expense-splitting app:
//! - Ordered route table (`/s/:id/:token`), first declared match wins
//! - Named routes with URL generation
//! - History-backed navigator with a single current-state cell
//!
//! ## Path Normalization
//!
//! Incoming paths are cleaned up before matching:
//! - Trailing slashes: `/s/a/b/` → `/s/a/b`
//! - Double slashes: `/s//a` → `/s/a`
//! - Backslashes: `\s\a` → `/s/a`
//! - `?query` and `#hash` suffixes are ignored by the matcher
//!
//! ## Example
//!
//! ```
//! use tally_router::{app_router, Page};
//!
//! let router = app_router().unwrap();
//!
//! let route_match = router.resolve("/s/abc123/tok1").unwrap();
//! assert_eq!(route_match.page, Page::Session);
//! assert_eq!(route_match.params.get("id"), Some(&"abc123".to_string()));
//!
//! let url = router
//!     .generate_params("session", &[("id", "abc123"), ("token", "tok1")])
//!     .unwrap();
//! assert_eq!(url, "/s/abc123/tok1");
//! ```

use std::collections::HashMap;

use serde::Serialize;

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
mod error;
pub mod history;
pub mod navigator;
mod page;
pub mod path;
pub mod route;
mod table;

pub use config::{Config, RoutingConfig};
pub use error::{InvalidRoute, RouteError};
pub use history::{History, MemoryHistory};
pub use navigator::{NavigationState, Navigator};
pub use page::Page;
pub use path::{normalize_path, parse_location, Location};
pub use route::{parse_pattern, PatternSegment};
pub use table::{app_router, app_routes, build_app_router};

/// Parameter name → bound value
pub type Params = HashMap<String, String>;

// ============================================================================
// Core Types
// ============================================================================

/// A binding from a URL pattern to a page, with an optional name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Canonical pattern like "/s/:id/:token"
    pattern: String,
    /// Parsed pattern segments
    segments: Vec<PatternSegment>,
    /// Page rendered when this route matches
    page: Page,
    /// Optional name for URL generation
    name: Option<String>,
}

/// Result of resolving a path against the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMatch {
    pub page: Page,
    pub name: Option<String>,
    pub pattern: String,
    pub params: Params,
}

// ============================================================================
// Route Implementation
// ============================================================================

impl Route {
    /// Creates a route from a pattern string
    ///
    /// # Examples
    ///
    /// ```
    /// use tally_router::{Page, Route};
    ///
    /// let route = Route::new("/s/:id/:token", Page::Session).unwrap();
    /// assert_eq!(route.param_names(), vec!["id", "token"]);
    ///
    /// assert!(Route::new("/s/:id/:id", Page::Session).is_err());
    /// ```
    pub fn new(pattern: &str, page: Page) -> Result<Self, RouteError> {
        let segments = route::parse_pattern(pattern)?;

        Ok(Route {
            pattern: route::render_pattern(&segments),
            segments,
            page,
            name: None,
        })
    }

    /// Sets a name for this route (for URL generation)
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Canonical pattern, as rendered from the parsed segments
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn segments(&self) -> &[PatternSegment] {
        &self.segments
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Placeholder names in declaration order
    pub fn param_names(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(PatternSegment::param_name)
            .collect()
    }

    /// Matches this route against a path (case-sensitive)
    pub fn matches(&self, path: &str) -> Option<Params> {
        self.matches_with_options(path, false)
    }

    /// Matches this route against a normalized path
    ///
    /// Segment counts must be equal. Literal segments compare exactly (or
    /// ignoring ASCII case), placeholders bind any non-empty decoded segment.
    pub fn matches_with_options(&self, path: &str, case_insensitive: bool) -> Option<Params> {
        let path_segments = path::decoded_segments(path);

        if path_segments.len() != self.segments.len() {
            return None;
        }

        self.segments
            .iter()
            .zip(path_segments.iter())
            .try_fold(Params::new(), |mut params, (pattern_seg, path_seg)| {
                match pattern_seg {
                    PatternSegment::Param(name) => {
                        if path_seg.is_empty() {
                            return None;
                        }
                        params.insert(name.clone(), path_seg.to_string());
                    }
                    PatternSegment::Static(text) => {
                        let matches = if case_insensitive {
                            text.eq_ignore_ascii_case(path_seg)
                        } else {
                            text == path_seg
                        };
                        if !matches {
                            return None;
                        }
                    }
                }
                Some(params)
            })
    }

    /// Generates a URL for this route by substituting parameters
    ///
    /// Values are percent-encoded so the URL resolves back to the same values.
    ///
    /// # Examples
    ///
    /// ```
    /// use tally_router::{Page, Params, Route};
    ///
    /// let route = Route::new("/s/:id/:token/edit", Page::MemberEdit).unwrap();
    ///
    /// let mut params = Params::new();
    /// params.insert("id".to_string(), "abc".to_string());
    /// params.insert("token".to_string(), "t 1".to_string());
    ///
    /// assert_eq!(route.generate_url(&params).unwrap(), "/s/abc/t%201/edit");
    /// ```
    pub fn generate_url(&self, params: &Params) -> Result<String, InvalidRoute> {
        let segments = self
            .segments
            .iter()
            .map(|segment| match segment {
                PatternSegment::Static(text) => Ok(text.clone()),
                PatternSegment::Param(param) => params
                    .get(param)
                    .filter(|value| !value.is_empty())
                    .map(|value| path::encode_segment(value).into_owned())
                    .ok_or_else(|| InvalidRoute::MissingParam {
                        name: self.name.clone().unwrap_or_else(|| self.pattern.clone()),
                        param: param.clone(),
                    }),
            })
            .collect::<Result<Vec<String>, InvalidRoute>>()?;

        if segments.is_empty() {
            Ok("/".to_string())
        } else {
            Ok(format!("/{}", segments.join("/")))
        }
    }
}

// ============================================================================
// Router
// ============================================================================

/// Ordered route table
///
/// Routes are kept in declaration order and never re-sorted; names are
/// indexed for O(1) reverse lookup.
#[derive(Debug, Clone, Default)]
pub struct Router {
    routes: Vec<Route>,
    named_routes: HashMap<String, usize>,
    case_insensitive: bool,
}

impl Router {
    /// Creates an empty, case-sensitive router
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures case sensitivity for literal segments (functional builder)
    pub fn with_case_sensitivity(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    /// Adds a route to the router (functional builder)
    ///
    /// # Examples
    ///
    /// ```
    /// use tally_router::{Page, Route, Router};
    ///
    /// let router = Router::new()
    ///     .with_route(Route::new("/", Page::SessionCreate).unwrap())
    ///     .unwrap();
    /// assert_eq!(router.routes().len(), 1);
    /// ```
    pub fn with_route(mut self, route: Route) -> Result<Self, RouteError> {
        self.add_route(route)?;
        Ok(self)
    }

    /// Adds multiple routes at once, in iteration order
    pub fn with_routes<I>(mut self, routes: I) -> Result<Self, RouteError>
    where
        I: IntoIterator<Item = Route>,
    {
        for route in routes {
            self.add_route(route)?;
        }
        Ok(self)
    }

    /// Appends a route after every route already declared
    pub fn add_route(&mut self, route: Route) -> Result<(), RouteError> {
        if let Some(name) = &route.name {
            if self.named_routes.contains_key(name) {
                return Err(InvalidRoute::DuplicateName { name: name.clone() }.into());
            }
            self.named_routes.insert(name.clone(), self.routes.len());
        }

        self.routes.push(route);
        Ok(())
    }

    /// Whether literal segments ignore ASCII case
    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Routes in declaration order
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Gets a route by its name
    pub fn route_by_name(&self, name: &str) -> Option<&Route> {
        self.named_routes.get(name).map(|&idx| &self.routes[idx])
    }

    /// Resolves a URL to a page and its parameters
    ///
    /// The first route in declaration order that matches wins. Query and hash
    /// suffixes are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use tally_router::{app_router, Page};
    ///
    /// let router = app_router().unwrap();
    /// let m = router.resolve("/s/abc123/tok1/expense/99/edit").unwrap();
    /// assert_eq!(m.page, Page::ExpenseEdit);
    /// assert_eq!(m.params["expId"], "99");
    ///
    /// assert!(router.resolve("/unknown/path").is_err());
    /// ```
    pub fn resolve(&self, url: &str) -> Result<RouteMatch, RouteError> {
        self.resolve_location(&path::parse_location(url))
    }

    /// Resolves an already parsed location
    pub fn resolve_location(&self, location: &Location) -> Result<RouteMatch, RouteError> {
        let path = normalize_path(&location.path);

        let found = self.routes.iter().find_map(|route| {
            route
                .matches_with_options(&path, self.case_insensitive)
                .map(|params| RouteMatch {
                    page: route.page,
                    name: route.name.clone(),
                    pattern: route.pattern.clone(),
                    params,
                })
        });

        match found {
            Some(route_match) => {
                tracing::debug!(path = %path, page = %route_match.page, "resolved route");
                Ok(route_match)
            }
            None => {
                tracing::debug!(path = %path, "no route matched");
                Err(RouteError::not_found(path))
            }
        }
    }

    /// Generates a URL from a named route and parameters
    ///
    /// Extra parameters that the pattern does not name are ignored.
    pub fn generate(&self, name: &str, params: &Params) -> Result<String, RouteError> {
        let route = self
            .route_by_name(name)
            .ok_or_else(|| InvalidRoute::UnknownName {
                name: name.to_string(),
            })?;

        Ok(route.generate_url(params)?)
    }

    /// Convenience wrapper around [`Router::generate`] taking parameter tuples
    pub fn generate_params(&self, name: &str, params: &[(&str, &str)]) -> Result<String, RouteError> {
        let param_map: Params = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        self.generate(name, &param_map)
    }
}
