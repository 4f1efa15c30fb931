use std::collections::BTreeMap;

use egui::Pos2;

/// The visual affordance shown to the user while dragging.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum DropEffect {
    #[default]
    None,
    Copy,
    Link,
    Move,
}

/// Event-scoped payload channel, carried from drag-start to the eventual drop.
///
/// Payloads are strings keyed by a format identifier, so unrelated drag sources sharing the same
/// host can coexist.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataTransfer {
    data: BTreeMap<String, String>,
    pub drop_effect: DropEffect,
}

impl DataTransfer {
    pub fn set_data(&mut self, format: impl Into<String>, data: impl Into<String>) {
        self.data.insert(format.into(), data.into());
    }

    pub fn get_data(&self, format: &str) -> Option<&str> {
        self.data.get(format).map(String::as_str)
    }

    pub fn clear_data(&mut self, format: &str) {
        self.data.remove(format);
    }

    /// Formats currently holding a payload, in sorted order.
    pub fn formats(&self) -> impl Iterator<Item = &str> + '_ {
        self.data.keys().map(String::as_str)
    }
}

/// What an event was delivered to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventTarget<H> {
    Element(H),

    /// Something that isn't an element: a text node, the root, a foreign surface.
    Other,
}

/// The four drag lifecycle events a controller listens to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DragEventKind {
    DragStart,
    DragOver,
    DragEnd,
    Drop,
}

impl DragEventKind {
    pub const ALL: [Self; 4] = [Self::DragStart, Self::DragOver, Self::DragEnd, Self::Drop];
}

/// A drag lifecycle event as delivered by the host.
#[derive(Clone, Debug)]
pub struct DragEvent<H> {
    pub target: EventTarget<H>,
    pub pointer: Pos2,
    pub data_transfer: Option<DataTransfer>,
    default_prevented: bool,
}

impl<H> DragEvent<H> {
    pub fn new(target: EventTarget<H>, pointer: Pos2, data_transfer: Option<DataTransfer>) -> Self {
        Self {
            target,
            pointer,
            data_transfer,
            default_prevented: false,
        }
    }

    /// An event over `element` carrying an empty transfer channel.
    pub fn over(element: H, pointer: Pos2) -> Self {
        Self::new(
            EventTarget::Element(element),
            pointer,
            Some(DataTransfer::default()),
        )
    }

    pub fn with_transfer(mut self, data_transfer: Option<DataTransfer>) -> Self {
        self.data_transfer = data_transfer;
        self
    }

    pub fn target_element(&self) -> Option<&H> {
        match &self.target {
            EventTarget::Element(element) => Some(element),
            EventTarget::Other => None,
        }
    }

    /// Suppress the host's default handling. Drag-over must do this for a drop to happen at all.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transfer_keeps_formats_apart() {
        let mut transfer = DataTransfer::default();
        transfer.set_data("text/plain", "hello");
        transfer.set_data("application/x-egui-reorder", "1");
        assert_eq!(
            transfer.formats().collect::<Vec<_>>(),
            ["application/x-egui-reorder", "text/plain"]
        );

        transfer.clear_data("text/plain");
        assert!(transfer.get_data("text/plain").is_none());
        assert_eq!(transfer.get_data("application/x-egui-reorder"), Some("1"));
        assert_eq!(transfer.formats().count(), 1);
    }

    #[test]
    fn target_element_is_none_for_other_targets() {
        let event = DragEvent::over('a', Pos2::ZERO);
        assert_eq!(event.target_element(), Some(&'a'));
        assert!(!event.default_prevented());

        let event: DragEvent<char> = DragEvent::new(EventTarget::Other, Pos2::ZERO, None);
        assert!(event.target_element().is_none());
    }
}
