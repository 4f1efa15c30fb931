/// The single drag session a controller tracks.
#[derive(Debug)]
pub(super) struct DragSession<H> {
    next_id: u64,
    active: Option<ActiveSession<H>>,
}

#[derive(Debug)]
struct ActiveSession<H> {
    id: u64,
    dragged: H,
    source_index: usize,
    relocations: u32,
}

impl<H> Default for DragSession<H> {
    fn default() -> Self {
        Self {
            next_id: 1,
            active: None,
        }
    }
}

impl<H: std::fmt::Debug> DragSession<H> {
    pub(super) fn dragged(&self) -> Option<&H> {
        self.active.as_ref().map(|active| &active.dragged)
    }

    /// Starts a new session, replacing any session that never saw its drag-end.
    ///
    /// Returns the log line and the handle the replaced session was dragging.
    pub(super) fn start(&mut self, dragged: H, source_index: usize) -> (String, Option<H>) {
        let id = self.next_id.max(1);
        self.next_id = id.saturating_add(1);
        let (line, stale) = match self.active.take() {
            Some(stale) => (
                format!(
                    "session START id={id} index={source_index} dragged={dragged:?} (replaced stale id={})",
                    stale.id
                ),
                Some(stale.dragged),
            ),
            None => (
                format!("session START id={id} index={source_index} dragged={dragged:?}"),
                None,
            ),
        };
        self.active = Some(ActiveSession {
            id,
            dragged,
            source_index,
            relocations: 0,
        });
        (line, stale)
    }

    /// Re-captures the dragged handle after the host moved it.
    pub(super) fn relocated(&mut self, dragged: H) {
        if let Some(active) = &mut self.active {
            active.dragged = dragged;
            active.relocations = active.relocations.saturating_add(1);
        }
    }

    pub(super) fn end(&mut self) -> Option<String> {
        let ended = self.active.take()?;
        Some(format!(
            "session END id={} index={} relocations={}",
            ended.id, ended.source_index, ended.relocations
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_per_session() {
        let mut session = DragSession::default();
        let (first, stale) = session.start('a', 0);
        assert!(stale.is_none());
        assert!(first.contains("id=1"), "{first}");
        assert!(session.end().is_some());

        let (second, _) = session.start('b', 1);
        assert!(second.contains("id=2"), "{second}");
        assert_eq!(session.dragged(), Some(&'b'));
    }

    #[test]
    fn end_without_start_is_quiet() {
        let mut session: DragSession<char> = DragSession::default();
        assert!(session.end().is_none());
        assert!(session.dragged().is_none());
    }

    #[test]
    fn restart_replaces_stale_session() {
        let mut session = DragSession::default();
        let _ = session.start('a', 0);
        let (line, stale) = session.start('c', 2);
        assert!(line.contains("replaced stale id=1"), "{line}");
        assert_eq!(stale, Some('a'));
        assert_eq!(session.dragged(), Some(&'c'));
    }

    #[test]
    fn relocation_without_session_is_ignored() {
        let mut session = DragSession::default();
        session.relocated('a');
        assert!(session.dragged().is_none());

        let _ = session.start('a', 0);
        session.relocated('a');
        session.relocated('a');
        let line = session.end().unwrap_or_default();
        assert!(line.contains("relocations=2"), "{line}");
    }
}
