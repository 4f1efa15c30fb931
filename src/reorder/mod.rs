use std::collections::VecDeque;

mod callbacks;
mod debug;
mod event;
mod geometry;
mod host;
mod options;
mod session;
mod transfer;
mod types;


pub use callbacks::{DragCallback, ReorderCallbacks};
pub use event::{DataTransfer, DragEvent, DragEventKind, DropEffect, EventTarget};
pub use geometry::{Placement, is_in_first_half};
pub use host::{HostTree, Listener, ListenerRegistry};
pub use options::ReorderOptions;
pub use transfer::{PayloadError, TRANSFER_FORMAT, read_source_index, write_source_index};
pub use types::{DragOutcome, IgnoreReason};

use session::DragSession;

/// Reorder a fixed collection of elements by dragging one onto another.
///
/// The controller owns one piece of state: the element currently being dragged. The host
/// delivers drag lifecycle events (see [`Self::dispatch`]) and supplies the tree primitives
/// through [`HostTree`].
///
/// Gesture:
/// - drag-start: the source's original index goes into the transfer channel, the element is
///   marked, `on_start` fires.
/// - drag-over: the dragged element is moved before/after the target depending on which half of
///   the target the pointer is in, `on_over` fires.
/// - drop: the element named by the transferred index is moved next to the drop target,
///   `on_drop` fires.
/// - drag-end: the marker is removed, `on_end` fires, the session is cleared.
///
/// The constructed collection is a read-only lookup table from original index to handle; it is
/// never reordered, whatever happens to the tree.
#[derive(Debug)]
pub struct DragReorderController<H> {
    pub options: ReorderOptions,

    elements: Box<[H]>,
    callbacks: ReorderCallbacks<H>,
    session: DragSession<H>,

    debug_log: VecDeque<String>,
    debug_seq: u64,
}

impl<H: Clone + PartialEq + std::fmt::Debug> DragReorderController<H> {
    /// Capture `elements` and subscribe to their drag lifecycle events in `registry`.
    pub fn new<R: ListenerRegistry<Handle = H>>(
        elements: impl IntoIterator<Item = H>,
        callbacks: ReorderCallbacks<H>,
        registry: &mut R,
    ) -> Self {
        Self::new_with_options(elements, callbacks, ReorderOptions::default(), registry)
    }

    pub fn new_with_options<R: ListenerRegistry<Handle = H>>(
        elements: impl IntoIterator<Item = H>,
        callbacks: ReorderCallbacks<H>,
        options: ReorderOptions,
        registry: &mut R,
    ) -> Self {
        let elements: Box<[H]> = elements.into_iter().collect();

        let mut attached = 0;
        for (index, element) in elements.iter().enumerate() {
            let accepted = DragEventKind::ALL
                .into_iter()
                .all(|kind| registry.listen(element, Listener { index, kind }));
            if accepted {
                attached += 1;
            } else {
                log::trace!("skipping non-element at index {index}: {element:?}");
            }
        }
        log::debug!("attached reorder listeners to {attached}/{} elements", elements.len());

        Self {
            options,
            elements,
            callbacks,
            session: DragSession::default(),
            debug_log: VecDeque::new(),
            debug_seq: 0,
        }
    }

    /// Remove every listener this controller registered.
    pub fn detach<R: ListenerRegistry<Handle = H>>(self, registry: &mut R) {
        for element in &self.elements {
            for kind in DragEventKind::ALL {
                registry.unlisten(element, kind);
            }
        }
        log::debug!("detached reorder listeners from {} elements", self.elements.len());
    }

    /// The collection as captured at construction, in original order.
    pub fn elements(&self) -> &[H] {
        &self.elements
    }

    /// Original index of `element`.
    pub fn index_of(&self, element: &H) -> Option<usize> {
        self.elements.iter().position(|e| e == element)
    }

    /// The element currently being dragged, if a session is active.
    pub fn dragged(&self) -> Option<&H> {
        self.session.dragged()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.dragged().is_some()
    }

    /// Route an event delivered to `listener` to the matching handler.
    pub fn dispatch<T: HostTree<Handle = H>>(
        &mut self,
        listener: Listener,
        event: &mut DragEvent<H>,
        tree: &mut T,
    ) -> DragOutcome {
        match listener.kind {
            DragEventKind::DragStart => self.handle_drag_start(event, listener.index, tree),
            DragEventKind::DragOver => self.handle_drag_over(event, tree),
            DragEventKind::DragEnd => self.handle_drag_end(event, tree),
            DragEventKind::Drop => self.handle_drop(event, tree),
        }
    }

    pub fn handle_drag_start<T: HostTree<Handle = H>>(
        &mut self,
        event: &mut DragEvent<H>,
        source_index: usize,
        tree: &mut T,
    ) -> DragOutcome {
        let Some(transfer) = event.data_transfer.as_mut() else {
            return self.ignored("drag_start", IgnoreReason::MissingTransfer);
        };
        if matches!(event.target, EventTarget::Other) {
            return self.ignored("drag_start", IgnoreReason::TargetNotElement);
        }
        let Some(source) = self.elements.get(source_index).cloned() else {
            return self.ignored(
                "drag_start",
                IgnoreReason::UnknownSource {
                    index: source_index,
                },
            );
        };

        write_source_index(transfer, &self.options.transfer_format, source_index);
        transfer.drop_effect = DropEffect::Move;

        let (line, stale) = self.session.start(source.clone(), source_index);
        if let Some(stale) = stale {
            tree.remove_marker(&stale, &self.options.marker);
        }
        tree.add_marker(&source, &self.options.marker);
        log::debug!("{line}");
        self.debug_log_event(line);

        (self.callbacks.on_start)(&*event, Some(&source));

        DragOutcome::Started {
            index: source_index,
        }
    }

    pub fn handle_drag_over<T: HostTree<Handle = H>>(
        &mut self,
        event: &mut DragEvent<H>,
        tree: &mut T,
    ) -> DragOutcome {
        event.prevent_default();

        let Some(transfer) = event.data_transfer.as_mut() else {
            return self.ignored("drag_over", IgnoreReason::MissingTransfer);
        };
        let Some(dragged) = self.session.dragged().cloned() else {
            return self.ignored("drag_over", IgnoreReason::NoActiveSession);
        };
        let EventTarget::Element(over) = &event.target else {
            return self.ignored("drag_over", IgnoreReason::TargetNotElement);
        };

        let placement = if *over == dragged {
            None
        } else {
            let Some(rect) = tree.bounding_box(over) else {
                return self.ignored("drag_over", IgnoreReason::MissingBoundingBox);
            };
            Some(Placement::from_pointer(rect, event.pointer))
        };

        transfer.drop_effect = DropEffect::Move;

        if let Some(placement) = placement {
            let moved = match placement {
                Placement::Before => tree.insert_before(&dragged, over),
                Placement::After => tree.insert_after(&dragged, over),
            };
            log::trace!("drag_over moved {moved:?} {placement:?} {over:?}");
            self.session.relocated(moved);
        }

        let dragged = self.session.dragged().cloned();
        (self.callbacks.on_over)(&*event, dragged.as_ref());

        DragOutcome::Hovered { placement }
    }

    pub fn handle_drag_end<T: HostTree<Handle = H>>(
        &mut self,
        event: &mut DragEvent<H>,
        tree: &mut T,
    ) -> DragOutcome {
        event.prevent_default();

        let dragged = self.session.dragged().cloned();
        if let Some(dragged) = &dragged {
            tree.remove_marker(dragged, &self.options.marker);
        }

        // The hook still sees the handle, even though the marker is already gone.
        (self.callbacks.on_end)(&*event, dragged.as_ref());

        let had_session = match self.session.end() {
            Some(line) => {
                log::debug!("{line}");
                self.debug_log_event(line);
                true
            }
            None => false,
        };

        DragOutcome::Ended { had_session }
    }

    pub fn handle_drop<T: HostTree<Handle = H>>(
        &mut self,
        event: &mut DragEvent<H>,
        tree: &mut T,
    ) -> DragOutcome {
        event.prevent_default();

        let Some(transfer) = event.data_transfer.as_ref() else {
            return self.ignored("drop", IgnoreReason::MissingTransfer);
        };
        let index = match read_source_index(
            transfer,
            &self.options.transfer_format,
            self.elements.len(),
        ) {
            Ok(index) => index,
            Err(err) => {
                // A missing payload is a drop from some other source; only corrupt ones warn.
                if err != PayloadError::Missing {
                    log::warn!("drop ignored: {err}");
                }
                return self.ignored("drop", IgnoreReason::Payload(err));
            }
        };
        let EventTarget::Element(over) = &event.target else {
            return self.ignored("drop", IgnoreReason::TargetNotElement);
        };
        let Some(rect) = tree.bounding_box(over) else {
            return self.ignored("drop", IgnoreReason::MissingBoundingBox);
        };

        // Resolved by original index, not by the live session reference.
        let element = self.elements[index].clone();
        let placement = (element != *over).then(|| Placement::from_pointer(rect, event.pointer));
        match placement {
            Some(Placement::Before) => {
                tree.insert_before(&element, over);
            }
            Some(Placement::After) => {
                tree.insert_after(&element, over);
            }
            None => {}
        }

        let line = format!("drop index={index} placement={placement:?} target={over:?}");
        log::debug!("{line}");
        self.debug_log_event(line);

        let dragged = self.session.dragged().cloned();
        (self.callbacks.on_drop)(&*event, dragged.as_ref());

        DragOutcome::Dropped { index, placement }
    }

    fn ignored(&mut self, handler: &'static str, reason: IgnoreReason) -> DragOutcome {
        log::trace!("{handler} ignored: {reason:?}");
        self.debug_log_event(format!("{handler} ignored reason={reason:?}"));
        DragOutcome::Ignored(reason)
    }
}
