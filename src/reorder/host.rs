use egui::Rect;

use super::event::DragEventKind;

/// The visual tree the controller rearranges.
///
/// Handles are identity-preserving references to elements. The controller never inspects them
/// beyond equality; everything else goes through this trait.
pub trait HostTree {
    type Handle: Clone + PartialEq + std::fmt::Debug;

    /// Bounding box of `element` in pointer coordinates, or `None` if the host can't measure it.
    fn bounding_box(&self, element: &Self::Handle) -> Option<Rect>;

    /// Move `element` so it sits immediately before `reference`. Returns the inserted handle.
    fn insert_before(&mut self, element: &Self::Handle, reference: &Self::Handle) -> Self::Handle;

    /// Move `element` so it sits immediately after `reference`. Returns the inserted handle.
    fn insert_after(&mut self, element: &Self::Handle, reference: &Self::Handle) -> Self::Handle;

    fn add_marker(&mut self, element: &Self::Handle, marker: &str);

    fn remove_marker(&mut self, element: &Self::Handle, marker: &str);
}

/// One listener record: which lifecycle event, on behalf of which original index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Listener {
    pub index: usize,
    pub kind: DragEventKind,
}

/// Where the controller subscribes to each element's drag lifecycle events.
pub trait ListenerRegistry {
    type Handle;

    /// Subscribe `listener` on `element`.
    ///
    /// Returns `false` if `element` can't receive drag events (it isn't an element); the
    /// controller then skips it.
    fn listen(&mut self, element: &Self::Handle, listener: Listener) -> bool;

    fn unlisten(&mut self, element: &Self::Handle, kind: DragEventKind);
}
