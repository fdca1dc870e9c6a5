use std::collections::HashSet;
use std::sync::Mutex;

use crate::{NewsItem, TrackingPolicy};

/// Reports each card version at most once per process.
///
/// A card keeps its version across re-emissions, so repeated shown events for
/// the same version are reported only the first time the card becomes
/// visible.
#[derive(Debug, Default)]
pub struct VersionTrackingPolicy {
    tracked: Mutex<HashSet<i32>>,
}

impl VersionTrackingPolicy {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TrackingPolicy for VersionTrackingPolicy {
    fn should_track_news_card_shown(&self, item: &NewsItem) -> bool {
        !self
            .tracked
            .lock()
            .expect("lock tracked versions")
            .contains(&item.version)
    }

    fn item_tracked(&self, item: &NewsItem) {
        self.tracked
            .lock()
            .expect("lock tracked versions")
            .insert(item.version);
    }
}
