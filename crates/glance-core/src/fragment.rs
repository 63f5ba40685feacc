//! Markup fragments.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A rendered markup string for a single view.
///
/// Fragments are produced by route handlers and handed to the view
/// surface wholesale; there is no diffing or partial update.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fragment(String);

impl Fragment {
    /// Create a fragment from any string-like value.
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    /// View the markup as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the fragment, returning the markup string.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Whether the fragment contains any markup at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Fragment {
    fn from(markup: String) -> Self {
        Self(markup)
    }
}

impl From<&str> for Fragment {
    fn from(markup: &str) -> Self {
        Self(markup.to_string())
    }
}
