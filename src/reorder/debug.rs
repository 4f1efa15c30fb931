use itertools::Itertools as _;

use super::DragReorderController;

impl<H> DragReorderController<H> {
    pub(super) fn debug_log_event(&mut self, message: impl Into<String>) {
        if !self.options.debug_event_log {
            return;
        }
        let cap = self.options.debug_log_capacity();
        while self.debug_log.len() >= cap {
            self.debug_log.pop_front();
        }
        self.debug_seq = self.debug_seq.wrapping_add(1);
        self.debug_log
            .push_back(format!("[event {}] {}", self.debug_seq, message.into()));
    }

    /// The recorded debug log, one line per event, oldest first.
    ///
    /// Empty unless [`super::ReorderOptions::debug_event_log`] is set.
    pub fn debug_log_text(&self) -> String {
        self.debug_log.iter().join("\n")
    }

    pub fn debug_log_clear(&mut self) {
        self.debug_log.clear();
    }
}
