use std::hash::Hash;

use egui::{CursorIcon, DragAndDrop, Id, Pos2, Response, Sense, Ui};

use crate::VecTree;
use crate::reorder::{
    DataTransfer, DragEvent, DragEventKind, DragOutcome, DragReorderController, EventTarget,
    ReorderCallbacks, ReorderOptions, TRANSFER_FORMAT,
};

/// A vertical list of rows the user can reorder by dragging one row onto another.
///
/// The list never touches your items: rows are identified by their original index, and
/// [`Self::order`] tells you where each one currently sits.
///
/// ```no_run
/// # fn demo(ui: &mut egui::Ui, list: &mut egui_reorder::ReorderList, names: &[&str]) {
/// list.ui(ui, |ui, index| {
///     ui.label(names[index]);
/// });
/// # }
/// ```
#[derive(Debug)]
pub struct ReorderList {
    id: Id,
    controller: DragReorderController<Id>,
    tree: VecTree<Id>,
}

impl ReorderList {
    pub fn new(id_salt: impl Hash, len: usize) -> Self {
        Self::new_with_callbacks(id_salt, len, ReorderCallbacks::default())
    }

    pub fn new_with_callbacks(
        id_salt: impl Hash,
        len: usize,
        callbacks: ReorderCallbacks<Id>,
    ) -> Self {
        let id = Id::new(id_salt);
        let handles: Vec<Id> = (0..len).map(|index| id.with(index)).collect();
        let mut tree = VecTree::new(handles.iter().copied());

        // Each list gets its own format, so a drop coming from another list is ignored.
        let options = ReorderOptions {
            transfer_format: format!("{TRANSFER_FORMAT};list={:016x}", id.value()),
            ..Default::default()
        };
        let controller =
            DragReorderController::new_with_options(handles, callbacks, options, &mut tree);

        Self {
            id,
            controller,
            tree,
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn len(&self) -> usize {
        self.controller.elements().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The handle of the row at original `index`.
    pub fn handle(&self, index: usize) -> Option<Id> {
        self.controller.elements().get(index).copied()
    }

    /// Original indices in their current visual order.
    pub fn order(&self) -> Vec<usize> {
        self.tree
            .order()
            .iter()
            .filter_map(|handle| self.controller.index_of(handle))
            .collect()
    }

    /// `items` (in original order) rearranged into the current visual order.
    pub fn ordered<'a, T>(&'a self, items: &'a [T]) -> impl Iterator<Item = &'a T> + 'a {
        self.order().into_iter().filter_map(move |index| items.get(index))
    }

    pub fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }

    /// Original index of the row being dragged.
    pub fn dragged_index(&self) -> Option<usize> {
        self.controller
            .dragged()
            .and_then(|handle| self.controller.index_of(handle))
    }

    /// The host tree as laid out by the last [`Self::ui`] call.
    pub fn tree(&self) -> &VecTree<Id> {
        &self.tree
    }

    pub fn options_mut(&mut self) -> &mut ReorderOptions {
        &mut self.controller.options
    }

    pub fn debug_log_text(&self) -> String {
        self.controller.debug_log_text()
    }

    /// Show the rows in their current order; `add_item` draws the row for an original index.
    pub fn ui(&mut self, ui: &mut Ui, mut add_item: impl FnMut(&mut Ui, usize)) -> Response {
        let ctx = ui.ctx().clone();
        let order: Vec<Id> = self.tree.order().to_vec();
        let mut started: Option<(Id, Pos2)> = None;

        let response = ui
            .vertical(|ui| {
                for handle in order {
                    let Some(index) = self.controller.index_of(&handle) else {
                        continue;
                    };
                    let rect = ui.scope(|ui| add_item(ui, index)).response.rect;
                    self.tree.set_rect(handle, rect);

                    let row = ui.interact(rect, handle, Sense::drag());
                    if row.drag_started() {
                        started = Some((handle, row.interact_pointer_pos().unwrap_or(rect.center())));
                    }

                    if self.tree.has_marker(&handle, &self.controller.options.marker) {
                        let fill = ui.visuals().selection.bg_fill.gamma_multiply(0.35);
                        ui.painter().rect_filled(rect, 2.0, fill);
                        ctx.set_cursor_icon(CursorIcon::Grabbing);
                    } else if row.hovered() {
                        ctx.set_cursor_icon(CursorIcon::Grab);
                    }
                }
            })
            .response;

        if let Some((handle, pointer)) = started {
            self.start_drag(&ctx, handle, pointer);
        }
        self.pump_pointer(&ctx);

        response
    }

    fn start_drag(&mut self, ctx: &egui::Context, handle: Id, pointer: Pos2) {
        let Some(listener) = self.tree.listener(&handle, DragEventKind::DragStart) else {
            return;
        };
        let mut event = DragEvent::new(
            EventTarget::Element(handle),
            pointer,
            Some(DataTransfer::default()),
        );
        let outcome = self.controller.dispatch(listener, &mut event, &mut self.tree);
        if let (DragOutcome::Started { .. }, Some(transfer)) = (outcome, event.data_transfer) {
            DragAndDrop::set_payload(ctx, transfer);
        }
    }

    /// Turn this frame's pointer state into drag-over, or drop followed by drag-end.
    fn pump_pointer(&mut self, ctx: &egui::Context) {
        let pointer = ctx.pointer_latest_pos();
        let Some(transfer) = DragAndDrop::payload::<DataTransfer>(ctx) else {
            // Payload cleared under us (escape, or another widget): treat it as a cancel.
            if self.controller.is_dragging() {
                self.end_drag(ctx, pointer.unwrap_or_default(), &DataTransfer::default());
            }
            return;
        };
        let released = ctx.input(|i| i.pointer.any_released());
        let target = pointer.and_then(|pointer| self.tree.element_at(pointer).copied());

        // Drags owned by another list only matter to us if they end over one of our rows.
        let listening = released || self.controller.is_dragging();
        if let (true, Some(pointer), Some(target)) = (listening, pointer, target) {
            let kind = if released {
                DragEventKind::Drop
            } else {
                DragEventKind::DragOver
            };
            if let Some(listener) = self.tree.listener(&target, kind) {
                let mut event = DragEvent::new(
                    EventTarget::Element(target),
                    pointer,
                    Some((*transfer).clone()),
                );
                let _outcome = self.controller.dispatch(listener, &mut event, &mut self.tree);
                if !released && self.controller.is_dragging() {
                    if let Some(transfer) = event.data_transfer {
                        DragAndDrop::set_payload(ctx, transfer);
                    }
                }
            }
        }

        if released && self.controller.is_dragging() {
            self.end_drag(ctx, pointer.unwrap_or_default(), &transfer);
        } else if self.controller.is_dragging() {
            ctx.request_repaint();
        }
    }

    fn end_drag(&mut self, ctx: &egui::Context, pointer: Pos2, transfer: &DataTransfer) {
        let Some(dragged) = self.controller.dragged().copied() else {
            return;
        };
        if let Some(listener) = self.tree.listener(&dragged, DragEventKind::DragEnd) {
            let mut event = DragEvent::new(
                EventTarget::Element(dragged),
                pointer,
                Some(transfer.clone()),
            );
            let _outcome = self.controller.dispatch(listener, &mut event, &mut self.tree);
        }
        DragAndDrop::clear_payload(ctx);
    }
}
