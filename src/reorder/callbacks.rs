use super::event::DragEvent;

/// A lifecycle hook: receives the event and the element currently tracked as dragged.
pub type DragCallback<H> = Box<dyn FnMut(&DragEvent<H>, Option<&H>)>;

fn noop<H>() -> DragCallback<H> {
    Box::new(|_event, _dragged| {})
}

/// Optional lifecycle hooks for [`super::DragReorderController`].
///
/// Every hook defaults to a no-op; set the ones you need with the builder methods.
pub struct ReorderCallbacks<H> {
    pub(super) on_start: DragCallback<H>,
    pub(super) on_over: DragCallback<H>,
    pub(super) on_end: DragCallback<H>,
    pub(super) on_drop: DragCallback<H>,
}

impl<H> Default for ReorderCallbacks<H> {
    fn default() -> Self {
        Self {
            on_start: noop(),
            on_over: noop(),
            on_end: noop(),
            on_drop: noop(),
        }
    }
}

impl<H> std::fmt::Debug for ReorderCallbacks<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReorderCallbacks").finish_non_exhaustive()
    }
}

impl<H> ReorderCallbacks<H> {
    /// Called once per gesture, after the element is marked as dragged.
    #[must_use]
    pub fn on_start(mut self, f: impl FnMut(&DragEvent<H>, Option<&H>) + 'static) -> Self {
        self.on_start = Box::new(f);
        self
    }

    /// Called for every drag-over that reaches a valid target, including the dragged element itself.
    #[must_use]
    pub fn on_over(mut self, f: impl FnMut(&DragEvent<H>, Option<&H>) + 'static) -> Self {
        self.on_over = Box::new(f);
        self
    }

    /// Called when the gesture ends. The marker has already been removed by then.
    #[must_use]
    pub fn on_end(mut self, f: impl FnMut(&DragEvent<H>, Option<&H>) + 'static) -> Self {
        self.on_end = Box::new(f);
        self
    }

    #[must_use]
    pub fn on_drop(mut self, f: impl FnMut(&DragEvent<H>, Option<&H>) + 'static) -> Self {
        self.on_drop = Box::new(f);
        self
    }
}
