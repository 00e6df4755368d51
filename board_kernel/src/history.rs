/// Assignment Board: History Log
///
/// Linear undo/redo log of snapshots.
///
/// Rules:
///   - `position` is `None` only while the log is empty
///   - `record` is the only way to add entries, and the only way `len`
///     can shrink (it discards the redo branch first)
///   - `undo` at the oldest entry and `redo` at the newest are no-ops

use crate::domain::Snapshot;

#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    entries: Vec<Snapshot>,
    position: Option<usize>,
}

/// Whether undo/redo affordances should be enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryAvailability {
    pub can_undo: bool,
    pub can_redo: bool,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard entries after the current position, append `snapshot` and
    /// move to it.
    pub fn record(&mut self, snapshot: Snapshot) {
        let keep = self.position.map_or(0, |p| p + 1);
        self.entries.truncate(keep);
        self.entries.push(snapshot);
        self.position = Some(self.entries.len() - 1);
    }

    /// Step back one entry and return it. `None` at the oldest entry.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        match self.position {
            Some(p) if p > 0 => {
                self.position = Some(p - 1);
                self.entries.get(p - 1)
            }
            _ => None,
        }
    }

    /// Step forward one entry and return it. `None` at the newest entry.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        match self.position {
            Some(p) if p + 1 < self.entries.len() => {
                self.position = Some(p + 1);
                self.entries.get(p + 1)
            }
            _ => None,
        }
    }

    pub fn can_undo(&self) -> bool {
        matches!(self.position, Some(p) if p > 0)
    }

    pub fn can_redo(&self) -> bool {
        matches!(self.position, Some(p) if p + 1 < self.entries.len())
    }

    pub fn availability(&self) -> HistoryAvailability {
        HistoryAvailability {
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
        }
    }

    pub fn position(&self) -> Option<usize> {
        self.position
    }

    pub fn current(&self) -> Option<&Snapshot> {
        self.position.and_then(|p| self.entries.get(p))
    }

    pub fn entries(&self) -> &[Snapshot] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Source;
    use crate::state::{create_initial_snapshot, default_seed};
    use crate::transitions::apply_move;

    /// Four distinct snapshots: seed, then persons 1..=3 assigned to p3.
    fn chain() -> Vec<Snapshot> {
        let mut out = vec![create_initial_snapshot(&default_seed()).unwrap()];
        for id in ["1", "2", "3"] {
            let prev = out.last().unwrap();
            let (next, _) = apply_move(prev, id, "p3", &Source::Pool).unwrap();
            out.push(next);
        }
        out
    }

    #[test]
    fn test_empty_log() {
        let mut log = HistoryLog::new();
        assert_eq!(log.position(), None);
        assert!(log.is_empty());
        assert!(log.undo().is_none());
        assert!(log.redo().is_none());
        assert!(log.current().is_none());
        assert_eq!(
            log.availability(),
            HistoryAvailability {
                can_undo: false,
                can_redo: false
            }
        );
    }

    #[test]
    fn test_record_advances_position() {
        let snaps = chain();
        let mut log = HistoryLog::new();
        for (i, s) in snaps.iter().enumerate() {
            log.record(s.clone());
            assert_eq!(log.position(), Some(i));
            assert_eq!(log.len(), i + 1);
            assert_eq!(log.current(), Some(s));
        }
    }

    #[test]
    fn test_undo_redo_walk() {
        let snaps = chain();
        let mut log = HistoryLog::new();
        log.record(snaps[0].clone());
        log.record(snaps[1].clone());

        assert_eq!(log.undo(), Some(&snaps[0]));
        assert_eq!(log.position(), Some(0));
        assert!(!log.can_undo());
        assert!(log.can_redo());

        assert_eq!(log.redo(), Some(&snaps[1]));
        assert_eq!(log.position(), Some(1));
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_boundaries_are_idempotent() {
        let snaps = chain();
        let mut log = HistoryLog::new();
        log.record(snaps[0].clone());
        log.record(snaps[1].clone());

        assert!(log.redo().is_none());
        assert_eq!(log.position(), Some(1));
        assert_eq!(log.len(), 2);

        log.undo();
        assert!(log.undo().is_none());
        assert_eq!(log.position(), Some(0));
        assert_eq!(log.entries(), &snaps[..2]);
    }

    #[test]
    fn test_record_truncates_redo_branch() {
        let snaps = chain();
        let mut log = HistoryLog::new();
        log.record(snaps[0].clone());
        log.record(snaps[1].clone());
        log.record(snaps[2].clone());
        log.undo();
        assert_eq!(log.position(), Some(1));

        log.record(snaps[3].clone());
        assert_eq!(log.entries(), &[snaps[0].clone(), snaps[1].clone(), snaps[3].clone()]);
        assert_eq!(log.position(), Some(2));
        assert!(!log.entries().contains(&snaps[2]));
        assert!(!log.can_redo());
    }

    #[test]
    fn test_three_records_two_undos_one_record() {
        let snaps = chain();
        let mut log = HistoryLog::new();
        log.record(snaps[1].clone());
        log.record(snaps[2].clone());
        log.record(snaps[3].clone());
        log.undo();
        log.undo();
        log.record(snaps[0].clone());
        assert_eq!(log.len(), 2);
        assert_eq!(log.position(), Some(1));
        assert_eq!(log.entries()[0], snaps[1]);
    }
}
