use newscard_core::NewsItem;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("invalid news deck: {0}")]
    Decode(#[from] serde_json::Error),
}

/// An ordered collection of news cards, served front-first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewsDeck {
    items: Vec<NewsItem>,
}

impl NewsDeck {
    pub fn new(items: Vec<NewsItem>) -> Self {
        Self { items }
    }

    /// Decodes a deck from a JSON array of news items.
    pub fn from_json(raw: &str) -> Result<Self, FeedError> {
        let items: Vec<NewsItem> = serde_json::from_str(raw)?;
        Ok(Self { items })
    }

    pub fn items(&self) -> &[NewsItem] {
        &self.items
    }

    pub(crate) fn into_items(self) -> Vec<NewsItem> {
        self.items
    }
}
