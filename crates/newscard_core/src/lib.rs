//! Newscard core: tag-scoped gating and view-model for the reader news card.
mod collaborators;
mod gate;
mod model;
mod policy;
mod scope;
mod view_model;

pub use collaborators::{NewsCardTracker, NewsSource, TrackingPolicy};
pub use gate::{NewsCardGate, ObserverId};
pub use model::{CardOrigin, NewsItem, ReaderTag};
pub use policy::VersionTrackingPolicy;
pub use scope::{TagScope, TagShift};
pub use view_model::NewsCardViewModel;
