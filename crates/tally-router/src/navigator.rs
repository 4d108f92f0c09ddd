//! History-backed navigation
//!
//! The navigator is the only writer of the current [`NavigationState`].
//! Every transition builds a complete new state and swaps it in at once;
//! observers read snapshots through `watch` receivers.

use serde::Serialize;
use tokio::sync::watch;

use crate::path::parse_location;
use crate::{History, Location, Page, Params, RouteError, RouteMatch, Router};

/// The resolved route for the current URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    pub location: Location,
    pub page: Page,
    pub name: Option<String>,
    pub pattern: String,
    pub params: Params,
}

impl NavigationState {
    fn new(location: Location, route_match: RouteMatch) -> Self {
        Self {
            location,
            page: route_match.page,
            name: route_match.name,
            pattern: route_match.pattern,
            params: route_match.params,
        }
    }

    /// Bound value of a path parameter
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Route table mounted on a history
///
/// # Examples
///
/// ```
/// use tally_router::{app_router, MemoryHistory, Navigator, Page};
///
/// let mut nav = Navigator::new(app_router().unwrap(), MemoryHistory::default()).unwrap();
/// assert_eq!(nav.current().page, Page::SessionCreate);
///
/// nav.navigate("/s/abc123/tok1/edit").unwrap();
/// assert_eq!(nav.current().page, Page::MemberEdit);
/// assert_eq!(nav.current().param("token"), Some("tok1"));
/// ```
pub struct Navigator<'r, H: History> {
    router: &'r Router,
    history: H,
    state: watch::Sender<NavigationState>,
}

impl<'r, H: History> Navigator<'r, H> {
    /// Mounts the router and resolves the history's current location
    ///
    /// A `NotFound` here is returned to the host, which decides on a fallback.
    pub fn new(router: &'r Router, history: H) -> Result<Self, RouteError> {
        let initial = resolve_state(router, &history.location())?;
        tracing::debug!(page = %initial.page, path = %initial.location.path, "navigator mounted");

        let (state, _) = watch::channel(initial);
        Ok(Self {
            router,
            history,
            state,
        })
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    /// Snapshot of the current state
    pub fn current(&self) -> NavigationState {
        self.state.borrow().clone()
    }

    /// Receiver that observes every state change
    pub fn subscribe(&self) -> watch::Receiver<NavigationState> {
        self.state.subscribe()
    }

    /// Pushes a new history entry and switches to its route
    ///
    /// On `NotFound` neither the history nor the current state change.
    pub fn navigate(&mut self, url: &str) -> Result<(), RouteError> {
        let next = self.resolve_target(url)?;
        self.history.push(&next.location.to_string());
        self.commit(next);
        Ok(())
    }

    /// Like [`Navigator::navigate`] but overwrites the current history entry
    pub fn replace(&mut self, url: &str) -> Result<(), RouteError> {
        let next = self.resolve_target(url)?;
        self.history.replace(&next.location.to_string());
        self.commit(next);
        Ok(())
    }

    /// Generates the URL of a named route, then navigates to it
    pub fn navigate_named(&mut self, name: &str, params: &Params) -> Result<(), RouteError> {
        let url = self.router.generate(name, params)?;
        self.navigate(&url)
    }

    /// Generates the URL of a named route, then replaces the current entry
    pub fn replace_named(&mut self, name: &str, params: &Params) -> Result<(), RouteError> {
        let url = self.router.generate(name, params)?;
        self.replace(&url)
    }

    /// Steps back one history entry; `Ok(false)` at the first entry
    pub fn back(&mut self) -> Result<bool, RouteError> {
        if !self.history.back() {
            return Ok(false);
        }
        match resolve_state(self.router, &self.history.location()) {
            Ok(next) => {
                self.commit(next);
                Ok(true)
            }
            Err(err) => {
                self.history.forward();
                Err(err)
            }
        }
    }

    /// Steps forward one history entry; `Ok(false)` at the last entry
    pub fn forward(&mut self) -> Result<bool, RouteError> {
        if !self.history.forward() {
            return Ok(false);
        }
        match resolve_state(self.router, &self.history.location()) {
            Ok(next) => {
                self.commit(next);
                Ok(true)
            }
            Err(err) => {
                self.history.back();
                Err(err)
            }
        }
    }

    fn resolve_target(&self, url: &str) -> Result<NavigationState, RouteError> {
        resolve_state(self.router, url).map_err(|err| {
            tracing::warn!(url, error = %err, "navigation rejected");
            err
        })
    }

    fn commit(&mut self, next: NavigationState) {
        tracing::debug!(to = %next.location.path, page = %next.page, "navigated");
        self.state.send_replace(next);
    }
}

fn resolve_state(router: &Router, url: &str) -> Result<NavigationState, RouteError> {
    let location = parse_location(url);
    let route_match = router.resolve_location(&location)?;
    Ok(NavigationState::new(location, route_match))
}
