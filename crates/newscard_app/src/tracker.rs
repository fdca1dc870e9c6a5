use newscard_core::{CardOrigin, NewsCardTracker, NewsItem};
use reader_logging::reader_info;

/// Tracker that reports card events to the application log.
///
/// Stands in for the real analytics transport, which lives outside this
/// workspace.
pub struct LogTracker;

impl NewsCardTracker for LogTracker {
    fn track_news_card_dismissed(&self, origin: CardOrigin, item: &NewsItem) {
        reader_info!(
            "track: card dismissed origin={} version={}",
            origin,
            item.version
        );
    }

    fn track_news_card_shown(&self, origin: CardOrigin, item: &NewsItem) {
        reader_info!(
            "track: card shown origin={} version={}",
            origin,
            item.version
        );
    }

    fn track_news_card_extended_info_requested(&self, origin: CardOrigin, item: &NewsItem) {
        reader_info!(
            "track: extended info requested origin={} version={}",
            origin,
            item.version
        );
    }
}
