//! History backends for the navigator
//!
//! A history stores full URLs (deployment base included) and hands the
//! navigator app-relative locations with the base stripped.

use crate::path::{join_base, normalize_base, strip_base};

/// Browser-style session history
///
/// Implementations in a browser shell wrap `pushState` / `replaceState`;
/// [`MemoryHistory`] keeps entries in a vector.
pub trait History {
    /// Deployment base path, normalized (`/` for the root)
    fn base(&self) -> &str;

    /// Current app-relative location, including any query and hash
    fn location(&self) -> String;

    /// Adds an entry after the current one and moves to it
    fn push(&mut self, url: &str);

    /// Overwrites the current entry
    fn replace(&mut self, url: &str);

    /// Moves one entry back; false when already at the first entry
    fn back(&mut self) -> bool;

    /// Moves one entry forward; false when already at the last entry
    fn forward(&mut self) -> bool;
}

/// In-memory history with a cursor
///
/// Pushing discards every entry ahead of the cursor, the same way a browser
/// drops forward history after a new navigation.
///
/// # Examples
///
/// ```
/// use tally_router::{History, MemoryHistory};
///
/// let mut history = MemoryHistory::new("/app");
/// history.push("/s/abc/tok");
/// assert_eq!(history.location(), "/s/abc/tok");
/// assert_eq!(history.entries(), ["/app", "/app/s/abc/tok"]);
///
/// assert!(history.back());
/// assert_eq!(history.location(), "/");
/// ```
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    base: String,
    entries: Vec<String>,
    index: usize,
}

impl MemoryHistory {
    /// Starts at the application root under `base`
    pub fn new(base: &str) -> Self {
        Self::with_url(base, "/")
    }

    /// Starts at an app-relative url under `base`
    pub fn with_url(base: &str, url: &str) -> Self {
        let base = normalize_base(base);
        let entry = join_base(&base, url);
        Self {
            base,
            entries: vec![entry],
            index: 0,
        }
    }

    /// Full stored URLs, oldest first
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Cursor position within [`MemoryHistory::entries`]
    pub fn index(&self) -> usize {
        self.index
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl History for MemoryHistory {
    fn base(&self) -> &str {
        &self.base
    }

    fn location(&self) -> String {
        let entry = &self.entries[self.index];
        strip_base(&self.base, entry)
            .map(str::to_string)
            .unwrap_or_else(|| entry.clone())
    }

    fn push(&mut self, url: &str) {
        self.entries.truncate(self.index + 1);
        self.entries.push(join_base(&self.base, url));
        self.index += 1;
    }

    fn replace(&mut self, url: &str) {
        self.entries[self.index] = join_base(&self.base, url);
    }

    fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    fn forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.index += 1;
        true
    }
}
