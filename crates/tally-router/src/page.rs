use std::fmt;

use serde::Serialize;

/// Pages the router can select
///
/// The set is closed: rendering layers match on the variant instead of
/// looking components up by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    /// Start a new expense-splitting session
    SessionCreate,
    /// View a session's balances and expenses
    Session,
    /// Edit the members of a session
    MemberEdit,
    /// Edit a single expense
    ExpenseEdit,
}

impl Page {
    pub const ALL: [Page; 4] = [
        Page::SessionCreate,
        Page::Session,
        Page::MemberEdit,
        Page::ExpenseEdit,
    ];

    /// Stable identifier used in logs and CLI output
    pub fn as_str(&self) -> &'static str {
        match self {
            Page::SessionCreate => "session-create",
            Page::Session => "session",
            Page::MemberEdit => "member-edit",
            Page::ExpenseEdit => "expense-edit",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
