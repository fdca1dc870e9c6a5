use reader_logging::{reader_debug, reader_warn};

use crate::scope::{TagScope, TagShift};
use crate::{NewsItem, ReaderTag};

/// Handle identifying a registered news observer.
pub type ObserverId = u64;

type ObserverFn = Box<dyn FnMut(Option<&NewsItem>)>;

/// Tag-scoped notification gate between the news-item source and UI observers.
///
/// Observers are dispatched synchronously, in registration order, inside the
/// call that produced the emission. An upstream value is forwarded only while
/// the currently selected tag matches the tag the session started on. Leaving
/// the active tag pushes a synthetic empty value so the UI clears whatever
/// card it last showed; returning to it pushes nothing until a fresh matching
/// upstream value arrives.
pub struct NewsCardGate {
    scope: TagScope,
    observers: Vec<(ObserverId, ObserverFn)>,
    next_observer: ObserverId,
}

impl NewsCardGate {
    pub fn new() -> Self {
        Self {
            scope: TagScope::new(),
            observers: Vec::new(),
            next_observer: 1,
        }
    }

    /// Registers an observer; returns a handle usable with [`Self::remove_observer`].
    pub fn observe(&mut self, observer: impl FnMut(Option<&NewsItem>) + 'static) -> ObserverId {
        let id = self.next_observer;
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Unregisters an observer. Returns false when the handle is unknown.
    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    /// Anchors the observation session on `tag`. A repeated call re-anchors
    /// the session as if it had just begun.
    pub fn start(&mut self, tag: ReaderTag) {
        self.scope.start(tag);
    }

    /// Applies a user tag change, forcing an empty emission downstream when
    /// the selection moves away from the active tag.
    pub fn on_tag_changed(&mut self, tag: ReaderTag) {
        match self.scope.on_tag_changed(tag) {
            TagShift::LeftActive => self.dispatch(None),
            TagShift::OnActive => {}
            TagShift::NotStarted => {
                reader_warn!("Tag change before start(); ignoring");
            }
        }
    }

    /// Feeds one upstream emission through the gate. Values arriving while
    /// the selection is off the active tag are swallowed.
    pub fn on_news_update(&mut self, item: Option<NewsItem>) {
        if self.scope.matches_active() {
            self.dispatch(item.as_ref());
        } else {
            reader_debug!("Suppressing news update outside the active tag");
        }
    }

    /// Whether the currently selected tag is the session's active tag.
    pub fn matches_active(&self) -> bool {
        self.scope.matches_active()
    }

    fn dispatch(&mut self, item: Option<&NewsItem>) {
        for (_, observer) in &mut self.observers {
            observer(item);
        }
    }
}

impl Default for NewsCardGate {
    fn default() -> Self {
        Self::new()
    }
}
