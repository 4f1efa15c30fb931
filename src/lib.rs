//! Drag-to-reorder for egui and other retained UI trees.
//!
//! The core is [`DragReorderController`]: hand it a fixed collection of element handles and
//! deliver drag lifecycle events to it; it moves the dragged element before or after whatever
//! it is dragged over, depending on which half of the target the pointer is in.
//!
//! - [`reorder`]: the host-agnostic controller plus the [`HostTree`] / [`ListenerRegistry`]
//!   contracts a host implements.
//! - [`VecTree`]: a ready-made in-memory host.
//! - [`ReorderList`]: an egui widget built on the two.
#![forbid(unsafe_code)]

pub mod reorder;
pub mod reorder_list;
pub mod vec_tree;

pub use reorder::{
    DataTransfer, DragEvent, DragEventKind, DragOutcome, DragReorderController, DropEffect,
    EventTarget, HostTree, IgnoreReason, Listener, ListenerRegistry, PayloadError, Placement,
    ReorderCallbacks, ReorderOptions, TRANSFER_FORMAT, is_in_first_half,
};
pub use reorder_list::ReorderList;
pub use vec_tree::VecTree;
