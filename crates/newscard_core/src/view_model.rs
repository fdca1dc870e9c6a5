use std::sync::Arc;

use reader_logging::reader_debug;

use crate::gate::{NewsCardGate, ObserverId};
use crate::{CardOrigin, NewsCardTracker, NewsItem, NewsSource, ReaderTag, TrackingPolicy};

/// View-model for the reader's news-card slot.
///
/// Mediates between the news source, the user's tag selection and UI
/// observers, and relays card interaction events to the tracker. All methods
/// are synchronous; observers run inside the call that produced an emission.
pub struct NewsCardViewModel {
    source: Arc<dyn NewsSource>,
    tracker: Arc<dyn NewsCardTracker>,
    policy: Arc<dyn TrackingPolicy>,
    gate: NewsCardGate,
}

impl NewsCardViewModel {
    pub fn new(
        source: Arc<dyn NewsSource>,
        tracker: Arc<dyn NewsCardTracker>,
        policy: Arc<dyn TrackingPolicy>,
    ) -> Self {
        Self {
            source,
            tracker,
            policy,
            gate: NewsCardGate::new(),
        }
    }

    /// Begins observing on `tag` and requests an unforced refresh from the
    /// source.
    pub fn start(&mut self, tag: ReaderTag) {
        self.gate.start(tag);
        self.source.pull(false);
    }

    /// The user selected a different tag.
    pub fn on_tag_changed(&mut self, tag: ReaderTag) {
        self.gate.on_tag_changed(tag);
    }

    /// Entry point for upstream news emissions.
    pub fn on_news_update(&mut self, item: Option<NewsItem>) {
        self.gate.on_news_update(item);
    }

    /// Registers a UI observer on the gated news stream.
    pub fn observe_news(&mut self, observer: impl FnMut(Option<&NewsItem>) + 'static) -> ObserverId {
        self.gate.observe(observer)
    }

    /// Unregisters a UI observer. Returns false when the handle is unknown.
    pub fn remove_news_observer(&mut self, id: ObserverId) -> bool {
        self.gate.remove_observer(id)
    }

    /// The user dismissed the card: drop it at the source and report the
    /// event unconditionally.
    pub fn on_news_card_dismissed(&self, item: &NewsItem) {
        reader_debug!("News card dismissed, version={}", item.version);
        self.source.dismiss(item);
        self.tracker.track_news_card_dismissed(CardOrigin::Reader, item);
    }

    /// The card became visible. Reported only when the policy allows it.
    pub fn on_news_card_shown(&self, item: &NewsItem) {
        if self.policy.should_track_news_card_shown(item) {
            self.tracker.track_news_card_shown(CardOrigin::Reader, item);
            self.policy.item_tracked(item);
        }
    }

    /// The user expanded the card's extended info.
    pub fn on_news_card_extended_info_requested(&self, item: &NewsItem) {
        self.tracker
            .track_news_card_extended_info_requested(CardOrigin::Reader, item);
    }
}
