use std::sync::{Arc, Mutex};
use std::time::Duration;

use newscard_core::{NewsCardViewModel, NewsItem, ReaderTag, VersionTrackingPolicy};
use newscard_feed::{FeedEvent, FeedEvents, FeedHandle, NewsDeck};
use reader_logging::reader_info;

use crate::logging::{self, LogDestination};
use crate::tracker::LogTracker;

const DECK_JSON: &str = r#"[
    {
        "title": "Drag and drop media",
        "content": "You can now reorder gallery images by dragging them.",
        "action_text": "Try it",
        "action_url": "https://example.com/drag-and-drop",
        "version": 14
    },
    {
        "title": "Follow topics you love",
        "content": "Tag subscriptions now surface fresh posts faster.",
        "action_text": "Browse tags",
        "action_url": "https://example.com/topics",
        "version": 15
    }
]"#;

/// Scripted walkthrough of the news-card session: start on a tag, show a
/// card, wander off the tag and back, dismiss, and pick up the next card.
pub fn run() -> anyhow::Result<()> {
    logging::initialize(LogDestination::Terminal);

    let deck = NewsDeck::from_json(DECK_JSON)?;
    let (feed, events) = FeedHandle::new(deck);

    let mut view_model = NewsCardViewModel::new(
        Arc::new(feed.clone()),
        Arc::new(LogTracker),
        Arc::new(VersionTrackingPolicy::new()),
    );

    view_model.observe_news(|card| match card {
        Some(item) => println!("[card] {}: {}", item.title, item.content),
        None => println!("[card] (cleared)"),
    });

    // Keep the presented card around so interaction events can reference it.
    let current = Arc::new(Mutex::new(None::<NewsItem>));
    {
        let slot = current.clone();
        view_model.observe_news(move |card| {
            *slot.lock().expect("lock current card") = card.cloned();
        });
    }

    let following = ReaderTag::new("following", "Following");
    let discover = ReaderTag::new("discover", "Discover");

    reader_info!("Starting news-card session on tag '{}'", following.slug);
    view_model.start(following.clone());
    pump(&mut view_model, &events);

    if let Some(item) = presented(&current) {
        view_model.on_news_card_shown(&item);
        // A second shown event for the same version is filtered by the policy.
        view_model.on_news_card_shown(&item);
        view_model.on_news_card_extended_info_requested(&item);
    }

    reader_info!("Switching to tag '{}' and back", discover.slug);
    view_model.on_tag_changed(discover);
    view_model.on_tag_changed(following);
    feed.pull(true);
    pump(&mut view_model, &events);

    if let Some(item) = presented(&current) {
        view_model.on_news_card_dismissed(&item);
    }
    pump(&mut view_model, &events);

    feed.pull(false);
    pump(&mut view_model, &events);

    reader_info!("Session finished");
    Ok(())
}

fn presented(current: &Arc<Mutex<Option<NewsItem>>>) -> Option<NewsItem> {
    current.lock().expect("lock current card").clone()
}

/// Forwards feed emissions into the view-model until the feed goes quiet.
fn pump(view_model: &mut NewsCardViewModel, events: &FeedEvents) {
    while let Some(FeedEvent::Updated(card)) = events.recv_timeout(Duration::from_millis(200)) {
        view_model.on_news_update(card);
    }
}
