use std::hash::Hash;

use ahash::{AHashMap, AHashSet};
use egui::{Pos2, Rect, Vec2};

use crate::reorder::{DragEventKind, HostTree, Listener, ListenerRegistry};

/// A minimal in-memory host: an ordered list of handles with per-handle geometry, markers and
/// listener records.
///
/// This is what [`crate::ReorderList`] drives under the hood, and it doubles as a headless host
/// for tests and for UIs that keep their own list model.
#[derive(Clone, Debug)]
pub struct VecTree<H> {
    order: Vec<H>,
    rects: AHashMap<H, Rect>,
    markers: AHashSet<(H, String)>,
    listeners: AHashMap<H, Vec<Listener>>,
    relocations: usize,
}

impl<H: Clone + Eq + Hash + std::fmt::Debug> VecTree<H> {
    pub fn new(order: impl IntoIterator<Item = H>) -> Self {
        Self {
            order: order.into_iter().collect(),
            rects: AHashMap::default(),
            markers: AHashSet::default(),
            listeners: AHashMap::default(),
            relocations: 0,
        }
    }

    /// Current visual order.
    pub fn order(&self) -> &[H] {
        &self.order
    }

    pub fn position(&self, element: &H) -> Option<usize> {
        self.order.iter().position(|e| e == element)
    }

    pub fn set_rect(&mut self, element: H, rect: Rect) {
        self.rects.insert(element, rect);
    }

    /// Lay the current order out as a column of equally sized rows, starting at `origin`.
    pub fn stack_rows(&mut self, origin: Pos2, row_size: Vec2) {
        for (row, element) in self.order.iter().enumerate() {
            let min = origin + Vec2::new(0.0, row as f32 * row_size.y);
            self.rects
                .insert(element.clone(), Rect::from_min_size(min, row_size));
        }
    }

    /// Topmost element whose rect contains `pointer`.
    pub fn element_at(&self, pointer: Pos2) -> Option<&H> {
        self.order
            .iter()
            .rev()
            .find(|element| self.rects.get(*element).is_some_and(|r| r.contains(pointer)))
    }

    pub fn has_marker(&self, element: &H, marker: &str) -> bool {
        self.markers.contains(&(element.clone(), marker.to_owned()))
    }

    /// The listener of `kind` registered on `element`, if any.
    pub fn listener(&self, element: &H, kind: DragEventKind) -> Option<Listener> {
        self.listeners
            .get(element)?
            .iter()
            .find(|listener| listener.kind == kind)
            .copied()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.values().map(Vec::len).sum()
    }

    /// How many times a relocation primitive actually moved something.
    pub fn relocation_count(&self) -> usize {
        self.relocations
    }

    fn relocate(&mut self, element: &H, reference: &H, after: bool) -> H {
        if element == reference {
            return element.clone();
        }
        if self.position(reference).is_none() {
            log::warn!("insert relative to {reference:?}, which is not in the tree");
            return element.clone();
        }

        if let Some(from) = self.position(element) {
            self.order.remove(from);
        }
        // The reference shifted if the element sat before it.
        let Some(at) = self.position(reference) else {
            return element.clone();
        };
        let at = if after { at + 1 } else { at };
        self.order.insert(at, element.clone());
        self.relocations += 1;
        element.clone()
    }
}

impl<H: Clone + Eq + Hash + std::fmt::Debug> HostTree for VecTree<H> {
    type Handle = H;

    fn bounding_box(&self, element: &H) -> Option<Rect> {
        self.rects.get(element).copied()
    }

    fn insert_before(&mut self, element: &H, reference: &H) -> H {
        self.relocate(element, reference, false)
    }

    fn insert_after(&mut self, element: &H, reference: &H) -> H {
        self.relocate(element, reference, true)
    }

    fn add_marker(&mut self, element: &H, marker: &str) {
        self.markers.insert((element.clone(), marker.to_owned()));
    }

    fn remove_marker(&mut self, element: &H, marker: &str) {
        self.markers.remove(&(element.clone(), marker.to_owned()));
    }
}

impl<H: Clone + Eq + Hash + std::fmt::Debug> ListenerRegistry for VecTree<H> {
    type Handle = H;

    fn listen(&mut self, element: &H, listener: Listener) -> bool {
        if self.position(element).is_none() {
            return false;
        }
        let listeners = self.listeners.entry(element.clone()).or_default();
        listeners.retain(|l| l.kind != listener.kind);
        listeners.push(listener);
        true
    }

    fn unlisten(&mut self, element: &H, kind: DragEventKind) {
        if let Some(listeners) = self.listeners.get_mut(element) {
            listeners.retain(|l| l.kind != kind);
            if listeners.is_empty() {
                self.listeners.remove(element);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    #[test]
    fn insert_after_moves_forward() {
        let mut tree = VecTree::new(['a', 'b', 'c']);
        assert_eq!(tree.insert_after(&'a', &'c'), 'a');
        assert_eq!(tree.order(), &['b', 'c', 'a']);
    }

    #[test]
    fn insert_before_moves_backward() {
        let mut tree = VecTree::new(['a', 'b', 'c']);
        tree.insert_before(&'c', &'a');
        assert_eq!(tree.order(), &['c', 'a', 'b']);
    }

    #[test]
    fn insert_before_next_sibling_is_a_no_op_move() {
        let mut tree = VecTree::new(['a', 'b', 'c']);
        tree.insert_before(&'a', &'b');
        assert_eq!(tree.order(), &['a', 'b', 'c']);
        assert_eq!(tree.relocation_count(), 1);
    }

    #[test]
    fn self_relative_insert_is_ignored() {
        let mut tree = VecTree::new(['a', 'b']);
        tree.insert_after(&'a', &'a');
        assert_eq!(tree.order(), &['a', 'b']);
        assert_eq!(tree.relocation_count(), 0);
    }

    #[test]
    fn unknown_reference_never_detaches() {
        let mut tree = VecTree::new(['a', 'b']);
        tree.insert_after(&'a', &'z');
        assert_eq!(tree.order(), &['a', 'b']);
    }

    #[test]
    fn stacked_rows_hit_test() {
        let mut tree = VecTree::new(['a', 'b', 'c']);
        tree.stack_rows(pos2(0.0, 100.0), vec2(50.0, 20.0));
        assert_eq!(tree.element_at(pos2(10.0, 105.0)), Some(&'a'));
        assert_eq!(tree.element_at(pos2(10.0, 130.0)), Some(&'b'));
        assert_eq!(tree.element_at(pos2(10.0, 500.0)), None);
        assert_eq!(
            tree.bounding_box(&'c'),
            Some(Rect::from_min_size(pos2(0.0, 140.0), vec2(50.0, 20.0)))
        );
    }

    #[test]
    fn markers_are_per_name() {
        let mut tree = VecTree::new(['a']);
        tree.add_marker(&'a', "dragged");
        assert!(tree.has_marker(&'a', "dragged"));
        assert!(!tree.has_marker(&'a', "selected"));
        tree.remove_marker(&'a', "dragged");
        assert!(!tree.has_marker(&'a', "dragged"));
    }

    #[test]
    fn registry_refuses_handles_outside_the_tree() {
        let mut tree = VecTree::new(['a']);
        let listener = Listener {
            index: 0,
            kind: DragEventKind::Drop,
        };
        assert!(tree.listen(&'a', listener));
        assert!(!tree.listen(&'q', listener));
        assert_eq!(tree.listener(&'a', DragEventKind::Drop), Some(listener));

        tree.unlisten(&'a', DragEventKind::Drop);
        assert_eq!(tree.listener_count(), 0);
    }
}
