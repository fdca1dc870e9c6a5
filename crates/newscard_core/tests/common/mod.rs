#![allow(dead_code)]

use std::sync::{Arc, Mutex, Once};

use newscard_core::{
    CardOrigin, NewsCardTracker, NewsCardViewModel, NewsItem, NewsSource, ReaderTag,
    TrackingPolicy,
};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(reader_logging::initialize_for_tests);
}

pub fn item(version: i32) -> NewsItem {
    NewsItem {
        title: format!("News {version}"),
        content: "Something new arrived in the reader.".to_string(),
        action_text: "Learn more".to_string(),
        action_url: "https://example.com/news".to_string(),
        version,
    }
}

pub fn tag(slug: &str) -> ReaderTag {
    ReaderTag::new(slug, slug.to_uppercase())
}

/// Registers a recording observer and returns the shared emission log.
pub fn observe_into(view_model: &mut NewsCardViewModel) -> Arc<Mutex<Vec<Option<NewsItem>>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    view_model.observe_news(move |card| sink.lock().unwrap().push(card.cloned()));
    seen
}

pub fn emissions(seen: &Arc<Mutex<Vec<Option<NewsItem>>>>) -> Vec<Option<NewsItem>> {
    seen.lock().unwrap().clone()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceCall {
    Pull { forced: bool },
    Dismiss { version: i32 },
}

#[derive(Default)]
pub struct RecordingSource {
    calls: Mutex<Vec<SourceCall>>,
}

impl RecordingSource {
    pub fn calls(&self) -> Vec<SourceCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl NewsSource for RecordingSource {
    fn pull(&self, forced: bool) {
        self.calls.lock().unwrap().push(SourceCall::Pull { forced });
    }

    fn dismiss(&self, item: &NewsItem) {
        self.calls.lock().unwrap().push(SourceCall::Dismiss {
            version: item.version,
        });
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerCall {
    Dismissed { origin: CardOrigin, version: i32 },
    Shown { origin: CardOrigin, version: i32 },
    ExtendedInfo { origin: CardOrigin, version: i32 },
}

#[derive(Default)]
pub struct RecordingTracker {
    calls: Mutex<Vec<TrackerCall>>,
}

impl RecordingTracker {
    pub fn calls(&self) -> Vec<TrackerCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl NewsCardTracker for RecordingTracker {
    fn track_news_card_dismissed(&self, origin: CardOrigin, item: &NewsItem) {
        self.calls.lock().unwrap().push(TrackerCall::Dismissed {
            origin,
            version: item.version,
        });
    }

    fn track_news_card_shown(&self, origin: CardOrigin, item: &NewsItem) {
        self.calls.lock().unwrap().push(TrackerCall::Shown {
            origin,
            version: item.version,
        });
    }

    fn track_news_card_extended_info_requested(&self, origin: CardOrigin, item: &NewsItem) {
        self.calls.lock().unwrap().push(TrackerCall::ExtendedInfo {
            origin,
            version: item.version,
        });
    }
}

/// Policy answering a fixed verdict while recording `item_tracked` calls.
pub struct StaticPolicy {
    allow: bool,
    tracked: Mutex<Vec<i32>>,
}

impl StaticPolicy {
    pub fn new(allow: bool) -> Self {
        Self {
            allow,
            tracked: Mutex::new(Vec::new()),
        }
    }

    pub fn tracked(&self) -> Vec<i32> {
        self.tracked.lock().unwrap().clone()
    }
}

impl TrackingPolicy for StaticPolicy {
    fn should_track_news_card_shown(&self, _item: &NewsItem) -> bool {
        self.allow
    }

    fn item_tracked(&self, item: &NewsItem) {
        self.tracked.lock().unwrap().push(item.version);
    }
}

/// A fully wired view-model plus handles to its recording collaborators.
pub struct Harness {
    pub view_model: NewsCardViewModel,
    pub source: Arc<RecordingSource>,
    pub tracker: Arc<RecordingTracker>,
    pub policy: Arc<StaticPolicy>,
}

pub fn harness(allow_shown_tracking: bool) -> Harness {
    init_logging();
    let source = Arc::new(RecordingSource::default());
    let tracker = Arc::new(RecordingTracker::default());
    let policy = Arc::new(StaticPolicy::new(allow_shown_tracking));
    let view_model =
        NewsCardViewModel::new(source.clone(), tracker.clone(), policy.clone());
    Harness {
        view_model,
        source,
        tracker,
        policy,
    }
}
