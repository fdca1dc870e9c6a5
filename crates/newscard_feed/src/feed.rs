use std::collections::HashSet;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use newscard_core::{NewsItem, NewsSource};
use reader_logging::{reader_debug, reader_info};

use crate::NewsDeck;

enum FeedCommand {
    Pull { forced: bool },
    Dismiss { version: i32 },
}

/// Event emitted by the feed worker towards the UI pump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEvent {
    /// The news item the reader should currently present, if any.
    Updated(Option<NewsItem>),
}

/// Command side of the news feed; cheap to clone and safe to share.
#[derive(Clone)]
pub struct FeedHandle {
    cmd_tx: mpsc::Sender<FeedCommand>,
}

/// Receiving side of the news feed.
pub struct FeedEvents {
    event_rx: mpsc::Receiver<FeedEvent>,
}

impl FeedEvents {
    pub fn try_recv(&self) -> Option<FeedEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<FeedEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

impl FeedHandle {
    /// Spawns the feed worker over `deck` and returns the command handle
    /// together with the event stream.
    pub fn new(deck: NewsDeck) -> (Self, FeedEvents) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || worker_loop(deck.into_items(), cmd_rx, event_tx));

        (Self { cmd_tx }, FeedEvents { event_rx })
    }

    pub fn pull(&self, forced: bool) {
        let _ = self.cmd_tx.send(FeedCommand::Pull { forced });
    }

    pub fn dismiss(&self, item: &NewsItem) {
        let _ = self.cmd_tx.send(FeedCommand::Dismiss {
            version: item.version,
        });
    }
}

impl NewsSource for FeedHandle {
    fn pull(&self, forced: bool) {
        FeedHandle::pull(self, forced);
    }

    fn dismiss(&self, item: &NewsItem) {
        FeedHandle::dismiss(self, item);
    }
}

struct FeedWorker {
    deck: Vec<NewsItem>,
    dismissed: HashSet<i32>,
    // Last emission, if any. The inner Option mirrors the emitted value.
    last: Option<Option<NewsItem>>,
    event_tx: mpsc::Sender<FeedEvent>,
}

fn worker_loop(
    deck: Vec<NewsItem>,
    cmd_rx: mpsc::Receiver<FeedCommand>,
    event_tx: mpsc::Sender<FeedEvent>,
) {
    let mut worker = FeedWorker {
        deck,
        dismissed: HashSet::new(),
        last: None,
        event_tx,
    };
    while let Ok(command) = cmd_rx.recv() {
        match command {
            FeedCommand::Pull { forced } => worker.pull(forced),
            FeedCommand::Dismiss { version } => worker.dismiss(version),
        }
    }
}

impl FeedWorker {
    fn current(&self) -> Option<NewsItem> {
        self.deck
            .iter()
            .find(|item| !self.dismissed.contains(&item.version))
            .cloned()
    }

    fn pull(&mut self, forced: bool) {
        let current = self.current();
        if !forced && self.last.as_ref() == Some(&current) {
            reader_debug!("Unforced pull with unchanged card; not re-emitting");
            return;
        }
        self.emit(current);
    }

    fn dismiss(&mut self, version: i32) {
        self.dismissed.insert(version);
        reader_info!("Dismissed news card version={version}");
        // Clear the UI only when the dismissed card is the one being served.
        if matches!(self.last.as_ref(), Some(Some(item)) if item.version == version) {
            self.emit(None);
        }
    }

    fn emit(&mut self, item: Option<NewsItem>) {
        self.last = Some(item.clone());
        let _ = self.event_tx.send(FeedEvent::Updated(item));
    }
}
