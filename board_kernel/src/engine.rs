/// Assignment Board: Engine
///
/// Top-level orchestrator for one session. Delegates mutation to
/// transitions, validates via invariants, records in the history log and
/// swaps the entity store.
///
/// Undo/redo bypass the transfer engine and read straight from the log.

use log::{debug, info, warn};

use crate::commands::{Command, Source};
use crate::domain::{Person, Snapshot, TransferResult};
use crate::error::{SeedError, TransferError};
use crate::filter::filter_persons;
use crate::history::{HistoryAvailability, HistoryLog};
use crate::invariants::validate_invariants;
use crate::state::{create_initial_snapshot, SeedData};
use crate::store::EntityStore;
use crate::transitions::apply_command as transition_apply;

/// Board behaviour knobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Record the seed as history entry 0, making the first mutation
    /// undoable. When false the log starts empty.
    pub record_seed: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self { record_seed: true }
    }
}

/// Session-owned board: entity store plus history log.
#[derive(Debug, Clone)]
pub struct Board {
    seed: Snapshot,
    store: EntityStore,
    history: HistoryLog,
    config: BoardConfig,
}

impl Board {
    /// Create a board over an already-built seed snapshot.
    pub fn new(seed: Snapshot, config: BoardConfig) -> Self {
        validate_invariants(&seed);

        let mut history = HistoryLog::new();
        if config.record_seed {
            history.record(seed.clone());
        }
        info!(
            "event=board_init module=engine status=ok persons={} projects={} record_seed={}",
            seed.person_count(),
            seed.project_count(),
            config.record_seed
        );

        Self {
            store: EntityStore::new(seed.clone()),
            seed,
            history,
            config,
        }
    }

    /// Build the seed snapshot and the board in one step.
    pub fn from_seed(seed: &SeedData, config: BoardConfig) -> Result<Self, SeedError> {
        let snapshot = create_initial_snapshot(seed)?;
        Ok(Self::new(snapshot, config))
    }

    /// Apply a single command:
    ///   1. Delegate to transitions
    ///   2. On a state change, validate invariants on the new snapshot
    ///   3. Record it in history and make it current
    ///
    /// Rejections and `Unchanged` results leave store and history as is.
    pub fn apply(&mut self, command: &Command) -> Result<TransferResult, TransferError> {
        let (next, result) = match transition_apply(self.store.current(), command) {
            Ok(applied) => applied,
            Err(err) => {
                if err.is_silent() {
                    debug!(
                        "event=apply module=engine status=ignored command={} person={} reason={}",
                        command.name(),
                        command.person_id(),
                        err
                    );
                } else {
                    warn!(
                        "event=apply module=engine status=rejected command={} person={} reason={}",
                        command.name(),
                        command.person_id(),
                        err
                    );
                }
                return Err(err);
            }
        };

        if result.outcome.changes_state() {
            validate_invariants(&next);
            self.history.record(next.clone());
            self.store.replace(next);
        }

        info!(
            "event=apply module=engine status=ok command={} person={} outcome={:?} history_len={}",
            command.name(),
            command.person_id(),
            result.outcome,
            self.history.len()
        );
        Ok(result)
    }

    /// Drop `person_id` onto `target_project_id`.
    pub fn move_person(
        &mut self,
        person_id: &str,
        target_project_id: &str,
        source: Source,
    ) -> Result<TransferResult, TransferError> {
        self.apply(&Command::Move {
            person_id: person_id.to_string(),
            target_project_id: target_project_id.to_string(),
            source,
        })
    }

    /// Send `person_id` back to the pool.
    pub fn remove_from_project(&mut self, person_id: &str) -> Result<TransferResult, TransferError> {
        self.apply(&Command::remove(person_id))
    }

    /// Step back one history entry. Returns the new current snapshot, or
    /// `None` when there is nothing to undo.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        let snapshot = self.history.undo()?.clone();
        self.store.replace(snapshot);
        debug!(
            "event=undo module=engine status=ok position={:?}",
            self.history.position()
        );
        Some(self.store.current())
    }

    /// Step forward one history entry. `None` when at the newest entry.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        let snapshot = self.history.redo()?.clone();
        self.store.replace(snapshot);
        debug!(
            "event=redo module=engine status=ok position={:?}",
            self.history.position()
        );
        Some(self.store.current())
    }

    pub fn availability(&self) -> HistoryAvailability {
        self.history.availability()
    }

    /// Filter the current pool. Read-only.
    pub fn filter_pool(&self, query: &str) -> Vec<&Person> {
        filter_persons(self.store.current().pool(), query)
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> &Snapshot {
        self.store.current()
    }

    /// Snapshot the board was seeded with.
    pub fn seed(&self) -> &Snapshot {
        &self.seed
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Number of mutations between the seed and the current snapshot along
    /// the active history branch.
    pub fn applied_len(&self) -> usize {
        match self.history.position() {
            None => 0,
            Some(p) if self.config.record_seed => p,
            Some(p) => p + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Outcome;
    use crate::state::default_seed;

    fn board(record_seed: bool) -> Board {
        Board::from_seed(&default_seed(), BoardConfig { record_seed }).unwrap()
    }

    #[test]
    fn test_seed_recorded_by_default() {
        let b = board(true);
        assert_eq!(b.history().len(), 1);
        assert_eq!(b.history().position(), Some(0));
        assert_eq!(b.applied_len(), 0);
        assert!(!b.availability().can_undo);
    }

    #[test]
    fn test_first_move_undoable_with_recorded_seed() {
        let mut b = board(true);
        b.move_person("1", "p1", Source::Pool).unwrap();
        assert!(b.availability().can_undo);
        let back = b.undo().unwrap().clone();
        assert_eq!(&back, b.seed());
        assert!(b.availability().can_redo);
    }

    #[test]
    fn test_first_move_not_undoable_without_recorded_seed() {
        let mut b = board(false);
        assert!(b.history().is_empty());
        b.move_person("1", "p1", Source::Pool).unwrap();
        assert_eq!(b.history().position(), Some(0));
        assert_eq!(b.applied_len(), 1);
        assert!(b.undo().is_none());
        assert_eq!(b.snapshot().project("p1").unwrap().members.len(), 1);
    }

    #[test]
    fn test_rejection_leaves_board_untouched() {
        let mut b = board(true);
        b.move_person("1", "p2", Source::Pool).unwrap();
        b.move_person("2", "p2", Source::Pool).unwrap();
        let before = b.snapshot().clone();
        let len = b.history().len();

        let err = b.move_person("3", "p2", Source::Pool).unwrap_err();
        assert!(matches!(err, TransferError::CapacityExceeded { .. }));
        assert_eq!(b.snapshot(), &before);
        assert_eq!(b.history().len(), len);

        assert!(b.remove_from_project("3").is_err());
        assert_eq!(b.history().len(), len);
    }

    #[test]
    fn test_unchanged_is_not_recorded() {
        let mut b = board(true);
        b.move_person("1", "p1", Source::Pool).unwrap();
        let len = b.history().len();
        let result = b
            .move_person("1", "p1", Source::Project("p1".to_string()))
            .unwrap();
        assert_eq!(result.outcome, Outcome::Unchanged);
        assert_eq!(b.history().len(), len);
    }

    #[test]
    fn test_filter_pool_reads_current_snapshot() {
        let mut b = board(true);
        assert_eq!(b.filter_pool("developer").len(), 2);
        b.move_person("1", "p1", Source::Pool).unwrap();
        let hits: Vec<&str> = b.filter_pool("developer").iter().map(|p| p.id.as_str()).collect();
        assert_eq!(hits, vec!["4"]);
    }
}
