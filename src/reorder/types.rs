use super::geometry::Placement;
use super::transfer::PayloadError;

/// What a handler did with an event.
///
/// Informational only: handlers never fail, they skip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DragOutcome {
    /// A session started for the element at `index`.
    Started { index: usize },

    /// A drag-over reached a valid target. `placement` is `None` when the target was the dragged
    /// element itself and nothing moved.
    Hovered { placement: Option<Placement> },

    /// The gesture ended; `had_session` tells whether a session was active.
    Ended { had_session: bool },

    /// The element at `index` was dropped. `placement` is `None` when it was dropped onto itself.
    Dropped {
        index: usize,
        placement: Option<Placement>,
    },

    /// The event was skipped and no state changed.
    Ignored(IgnoreReason),
}

impl DragOutcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored(_))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The event carries no transfer channel.
    MissingTransfer,

    /// The event target is not an element.
    TargetNotElement,

    /// Drag-over with no session in progress.
    NoActiveSession,

    /// The host can't measure the target.
    MissingBoundingBox,

    /// Drag-start for an index outside the collection.
    UnknownSource { index: usize },

    /// The drop payload could not be resolved to an element.
    Payload(PayloadError),
}
