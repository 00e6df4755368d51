//! Replay orchestrator: rebuild board state from a command journal.
//!
//! Delegates all domain logic to the kernel transfer engine.
//! Commands the kernel rejects are skipped, exactly as a live board
//! would leave its state untouched for them.

use log::debug;
use thiserror::Error;

use board_kernel::hashing::canonical_hash;
use board_kernel::transitions::apply_command;
use board_kernel::{create_initial_snapshot, Command, SeedData, SeedError, Snapshot};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error("replay seed rejected: {0}")]
    Seed(#[from] SeedError),
    #[error("replay diverged: expected {expected}, got {actual}")]
    Mismatch { expected: String, actual: String },
}

/// Rebuild the snapshot reached by applying `commands` to `seed`.
///
/// Returns `(final_snapshot, canonical_hash)`.
pub fn rebuild_snapshot(
    seed: &SeedData,
    commands: &[Command],
) -> Result<(Snapshot, String), ReplayError> {
    let mut state = create_initial_snapshot(seed)?;

    for (index, command) in commands.iter().enumerate() {
        match apply_command(&state, command) {
            Ok((next, _)) => state = next,
            Err(err) => debug!(
                "event=replay module=replay status=skipped index={} command={} reason={}",
                index,
                command.name(),
                err
            ),
        }
    }

    let hash = canonical_hash(&state);
    Ok((state, hash))
}

/// Rebuild and return only the canonical hash.
pub fn rebuild_hash(seed: &SeedData, commands: &[Command]) -> Result<String, ReplayError> {
    rebuild_snapshot(seed, commands).map(|(_, hash)| hash)
}

/// Replay twice and require identical hashes.
pub fn verify_determinism(seed: &SeedData, commands: &[Command]) -> Result<String, ReplayError> {
    let first = rebuild_hash(seed, commands)?;
    let second = rebuild_hash(seed, commands)?;
    if first != second {
        return Err(ReplayError::Mismatch {
            expected: first,
            actual: second,
        });
    }
    Ok(first)
}
