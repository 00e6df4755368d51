//! Session: the context object that owns one board for its lifetime.
//!
//! A session holds the board (entity store + history log), the seed it
//! started from and a journal of the commands along the active history
//! branch. Nothing is persisted; the session ends with the process.
//!
//! Apply order:
//!   1. board.apply(command): kernel validates and records
//!   2. journal updated, only if the board state changed
//!   3. reply + notice returned for the presentation layer

use log::info;
use serde::Serialize;

use board_kernel::hashing::canonical_hash;
use board_kernel::{
    Board, BoardConfig, Command, HistoryAvailability, Outcome, Person, SeedData, SeedError,
    Snapshot, Source, TransferError, TransferResult,
};

use crate::config::{ConfigError, SessionConfig};
use crate::drift::{compare_snapshots, DriftReport};
use crate::replay::{self, ReplayError};

/// Severity of a user-visible notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Short message for the presentation layer to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    /// Notice for a transfer result. Silent rejections and `Unchanged`
    /// produce none.
    pub fn for_result(result: &Result<TransferResult, TransferError>) -> Option<Self> {
        match result {
            Ok(r) => {
                let message = match r.outcome {
                    Outcome::Assigned => "Employee assigned successfully",
                    Outcome::Transferred => "Employee transferred successfully",
                    Outcome::Removed => "Employee removed from project",
                    Outcome::Unchanged => return None,
                };
                Some(Notice {
                    level: NoticeLevel::Success,
                    message: message.to_string(),
                })
            }
            Err(err) => err.user_message().map(|message| Notice {
                level: NoticeLevel::Error,
                message: message.to_string(),
            }),
        }
    }
}

/// Everything the presentation layer needs after a mutation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub result: Result<TransferResult, TransferError>,
    pub notice: Option<Notice>,
    pub availability: HistoryAvailability,
}

/// An isolated board session.
pub struct Session {
    session_id: String,
    seed_data: SeedData,
    board: Board,
    journal: Vec<Command>,
}

impl Session {
    pub fn new(session_id: &str, seed_data: SeedData, config: BoardConfig) -> Result<Self, SeedError> {
        let board = Board::from_seed(&seed_data, config)?;
        info!(
            "event=session_open module=session status=ok session={} persons={} projects={}",
            session_id,
            board.snapshot().person_count(),
            board.snapshot().project_count()
        );
        Ok(Self {
            session_id: session_id.to_string(),
            seed_data,
            board,
            journal: Vec::new(),
        })
    }

    /// Build a session from a validated configuration.
    pub fn from_config(config: &SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(
            &config.session_id,
            config.seed_data(),
            config.board_config(),
        )?)
    }

    /// Apply one command through the kernel.
    pub fn apply(&mut self, command: &Command) -> Reply {
        let result = self.board.apply(command);

        if let Ok(r) = &result {
            if r.outcome.changes_state() {
                let applied = self.board.applied_len();
                self.journal.truncate(applied.saturating_sub(1));
                self.journal.push(command.clone());
            }
        }

        let notice = Notice::for_result(&result);
        if let Some(n) = &notice {
            info!(
                "event=notice module=session status={:?} session={} message={:?}",
                n.level, self.session_id, n.message
            );
        }

        Reply {
            result,
            notice,
            availability: self.board.availability(),
        }
    }

    pub fn move_person(&mut self, person_id: &str, target_project_id: &str, source: Source) -> Reply {
        self.apply(&Command::Move {
            person_id: person_id.to_string(),
            target_project_id: target_project_id.to_string(),
            source,
        })
    }

    pub fn remove_from_project(&mut self, person_id: &str) -> Reply {
        self.apply(&Command::remove(person_id))
    }

    /// Step back. Returns what changed, or `None` at the oldest entry.
    pub fn undo(&mut self) -> Option<DriftReport> {
        let before = self.board.snapshot().clone();
        let after = self.board.undo()?;
        let report = compare_snapshots(&before, after);
        info!(
            "event=undo module=session status=ok session={} {}",
            self.session_id,
            report.summary()
        );
        Some(report)
    }

    /// Step forward. Returns what changed, or `None` at the newest entry.
    pub fn redo(&mut self) -> Option<DriftReport> {
        let before = self.board.snapshot().clone();
        let after = self.board.redo()?;
        let report = compare_snapshots(&before, after);
        info!(
            "event=redo module=session status=ok session={} {}",
            self.session_id,
            report.summary()
        );
        Some(report)
    }

    pub fn availability(&self) -> HistoryAvailability {
        self.board.availability()
    }

    pub fn filter_pool(&self, query: &str) -> Vec<&Person> {
        self.board.filter_pool(query)
    }

    /// Rebuild seed + active journal and compare with the live snapshot.
    /// Returns the shared canonical hash.
    pub fn verify_replay(&self) -> Result<String, ReplayError> {
        let active = &self.journal[..self.board.applied_len().min(self.journal.len())];
        let replayed = replay::rebuild_hash(&self.seed_data, active)?;
        let live = self.current_hash();
        if replayed != live {
            return Err(ReplayError::Mismatch {
                expected: live,
                actual: replayed,
            });
        }
        Ok(live)
    }

    pub fn snapshot(&self) -> &Snapshot {
        self.board.snapshot()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Commands on the active branch, oldest first, up to the current
    /// position.
    pub fn active_journal(&self) -> &[Command] {
        &self.journal[..self.board.applied_len().min(self.journal.len())]
    }

    pub fn current_hash(&self) -> String {
        canonical_hash(self.board.snapshot())
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }
}
