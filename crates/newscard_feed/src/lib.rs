//! Newscard feed: channel-backed news source serving an in-memory deck.
mod deck;
mod feed;

pub use deck::{FeedError, NewsDeck};
pub use feed::{FeedEvent, FeedEvents, FeedHandle};
