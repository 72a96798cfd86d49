//! Overflow policy: what happens to a roll past the last square.

use serde::{Deserialize, Serialize};

/// Rule for rolls that would carry a player beyond the last square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OverflowPolicy {
    /// Oversized rolls count as the last square (and win).
    #[default]
    Classic,
    /// Squares near the end are built so every roll lands within the
    /// final 6 squares; overflow never occurs.
    Rollback,
    /// Oversized rolls are discarded; the player stays put.
    Ignore,
}

impl OverflowPolicy {
    /// Parse a policy from its name or alias, case-insensitively.
    ///
    /// Recognized: `classic`/`c`, `rollback`/`r`/`rb`, `ignore`/`i`.
    /// Anything else is `None`; the board defaults to Classic and warns.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "classic" | "c" => Some(OverflowPolicy::Classic),
            "rollback" | "r" | "rb" => Some(OverflowPolicy::Rollback),
            "ignore" | "i" => Some(OverflowPolicy::Ignore),
            _ => None,
        }
    }
}

impl std::fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverflowPolicy::Classic => write!(f, "classic"),
            OverflowPolicy::Rollback => write!(f, "rollback"),
            OverflowPolicy::Ignore => write!(f, "ignore"),
        }
    }
}
