use crate::ReaderTag;

/// Where the user's tag selection stands after a tag-change event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagShift {
    /// No observation session has been started yet.
    NotStarted,
    /// The selection now differs from the tag the session was started on.
    LeftActive,
    /// The selection matches the tag the session was started on.
    OnActive,
}

/// Tag selection state for one observation session.
///
/// The active tag is anchored when the session starts; the current tag
/// follows the user's selection afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TagScope {
    #[default]
    NoSession,
    Active {
        active: ReaderTag,
        current: ReaderTag,
    },
}

impl TagScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Anchors the session on `tag`. Calling this again mid-session
    /// re-anchors both the active and the current tag.
    pub fn start(&mut self, tag: ReaderTag) {
        *self = TagScope::Active {
            active: tag.clone(),
            current: tag,
        };
    }

    /// Records a tag selection change and reports where the selection now
    /// stands relative to the active tag.
    pub fn on_tag_changed(&mut self, tag: ReaderTag) -> TagShift {
        match self {
            TagScope::NoSession => TagShift::NotStarted,
            TagScope::Active { active, current } => {
                *current = tag;
                if current == active {
                    TagShift::OnActive
                } else {
                    TagShift::LeftActive
                }
            }
        }
    }

    /// Whether the currently selected tag is the one observation started on.
    pub fn matches_active(&self) -> bool {
        match self {
            TagScope::NoSession => false,
            TagScope::Active { active, current } => active == current,
        }
    }
}
