use crate::{CardOrigin, NewsItem};

/// Source of news items feeding the reader.
///
/// Emissions travel out-of-band (the owner pumps them into the view-model);
/// this seam carries only the requests going the other way.
pub trait NewsSource: Send + Sync {
    /// Requests a refresh. Unforced pulls may be answered from whatever the
    /// source already holds; forced pulls always re-emit.
    fn pull(&self, forced: bool);

    /// Permanently removes `item` from the source.
    fn dismiss(&self, item: &NewsItem);
}

/// Sink for card interaction events bound for analytics.
pub trait NewsCardTracker: Send + Sync {
    fn track_news_card_dismissed(&self, origin: CardOrigin, item: &NewsItem);
    fn track_news_card_shown(&self, origin: CardOrigin, item: &NewsItem);
    fn track_news_card_extended_info_requested(&self, origin: CardOrigin, item: &NewsItem);
}

/// Decides whether shown events are worth reporting.
pub trait TrackingPolicy: Send + Sync {
    /// Whether a shown event for `item` should be reported to the tracker.
    fn should_track_news_card_shown(&self, item: &NewsItem) -> bool;

    /// Records that a shown event for `item` was reported.
    fn item_tracked(&self, item: &NewsItem);
}
