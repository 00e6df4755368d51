#![forbid(unsafe_code)]

//! Assignment board kernel.
//!
//! A fixed pool of persons, a fixed set of capacity-bounded projects, and
//! the transfer protocol that moves persons between them. Every accepted
//! mutation yields a fresh immutable snapshot recorded in a linear
//! undo/redo log.

/// Version stamped into canonical snapshot serialization.
pub const BOARD_FORMAT_VERSION: u32 = 1;

pub mod commands;
pub mod domain;
pub mod engine;
pub mod error;
pub mod filter;
pub mod hashing;
pub mod history;
pub mod ids;
pub mod invariants;
pub mod state;
pub mod store;
pub mod transitions;

pub use commands::{Command, Source, SourceKind};
pub use domain::{Outcome, Person, Project, ProjectStatus, Snapshot, TransferResult};
pub use engine::{Board, BoardConfig};
pub use error::{EntityKind, InvariantViolation, SeedError, TransferError};
pub use history::{HistoryAvailability, HistoryLog};
pub use state::{create_initial_snapshot, default_seed, SeedData};
