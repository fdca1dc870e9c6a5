use std::fmt;

use serde::{Deserialize, Serialize};

/// A single announcement card surfaced in the reader UI.
///
/// `version` identifies the campaign a card belongs to; re-emissions of the
/// same card keep the same version, which is what dismissal and impression
/// tracking key on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub content: String,
    pub action_text: String,
    pub action_url: String,
    pub version: i32,
}

/// A user-selectable reader tag (category).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderTag {
    pub slug: String,
    pub display_name: String,
}

impl ReaderTag {
    pub fn new(slug: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            display_name: display_name.into(),
        }
    }
}

/// UI surface attached to card tracking events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardOrigin {
    Reader,
}

impl fmt::Display for CardOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardOrigin::Reader => write!(f, "reader"),
        }
    }
}
