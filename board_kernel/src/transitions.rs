/// Assignment Board: Transfer Engine
///
/// ALL membership-mutation logic lives here.
/// The input snapshot is never mutated. Each accepted transfer returns a
/// new snapshot in which only the touched person and project records are
/// fresh copies; every other record is shared with the input.

use log::debug;

use crate::commands::{Command, Source};
use crate::domain::{Outcome, Snapshot, TransferResult};
use crate::error::{EntityKind, TransferError};

// ---------------------------------------------------------------------------
// Public dispatcher
// ---------------------------------------------------------------------------

/// Apply `command` to `state` and return `(new_state, result)`.
///
/// For `Outcome::Unchanged` the returned snapshot equals `state`.
pub fn apply_command(
    state: &Snapshot,
    command: &Command,
) -> Result<(Snapshot, TransferResult), TransferError> {
    match command {
        Command::Move {
            person_id,
            target_project_id,
            source,
        } => apply_move(state, person_id, target_project_id, source),
        Command::Remove { person_id } => apply_remove(state, person_id),
    }
}

/// Move a person from the pool or a source project into `target_project_id`.
///
/// Order of checks:
///   1. person resolves within the declared source
///   2. target project resolves
///   3. person already in target -> `Unchanged`
///   4. capacity
pub fn apply_move(
    state: &Snapshot,
    person_id: &str,
    target_project_id: &str,
    source: &Source,
) -> Result<(Snapshot, TransferResult), TransferError> {
    let from_project = match source {
        Source::Pool => {
            let in_pool = state
                .person(person_id)
                .map_or(false, |p| p.project_id.is_none());
            if !in_pool {
                return Err(not_found(EntityKind::Person, person_id));
            }
            None
        }
        Source::Project(source_id) => {
            let source_project = state
                .project(source_id)
                .ok_or(TransferError::InvalidSource)?;
            if !source_project.has_member(person_id) {
                return Err(not_found(EntityKind::Person, person_id));
            }
            Some(source_id.clone())
        }
    };

    let target = state
        .project(target_project_id)
        .ok_or_else(|| not_found(EntityKind::Project, target_project_id))?;

    if target.has_member(person_id) {
        debug!(
            "event=transfer module=transitions status=unchanged person={} project={}",
            person_id, target_project_id
        );
        return Ok((
            state.clone(),
            TransferResult {
                outcome: Outcome::Unchanged,
                person_id: person_id.to_string(),
                from_project,
                to_project: Some(target_project_id.to_string()),
            },
        ));
    }

    if target.is_full() {
        return Err(TransferError::CapacityExceeded {
            project_id: target.id.clone(),
            capacity: target.capacity,
        });
    }

    let mut next = state.clone();

    if let Some(source_id) = &from_project {
        if let Some(project) = next.project_mut(source_id) {
            project.members.retain(|m| m != person_id);
        }
    }
    if let Some(project) = next.project_mut(target_project_id) {
        project.members.push(person_id.to_string());
    }
    if let Some(person) = next.person_mut(person_id) {
        person.project_id = Some(target_project_id.to_string());
    }

    let outcome = if from_project.is_some() {
        Outcome::Transferred
    } else {
        Outcome::Assigned
    };
    debug!(
        "event=transfer module=transitions status={:?} person={} from={:?} to={}",
        outcome, person_id, from_project, target_project_id
    );

    Ok((
        next,
        TransferResult {
            outcome,
            person_id: person_id.to_string(),
            from_project,
            to_project: Some(target_project_id.to_string()),
        },
    ))
}

/// Take a person out of whichever project holds them, back to the pool.
pub fn apply_remove(
    state: &Snapshot,
    person_id: &str,
) -> Result<(Snapshot, TransferResult), TransferError> {
    let project_id = state
        .project_of(person_id)
        .map(|p| p.id.clone())
        .ok_or_else(|| not_found(EntityKind::Person, person_id))?;

    let mut next = state.clone();
    if let Some(project) = next.project_mut(&project_id) {
        project.members.retain(|m| m != person_id);
    }
    if let Some(person) = next.person_mut(person_id) {
        person.project_id = None;
    }

    debug!(
        "event=transfer module=transitions status=Removed person={} from={}",
        person_id, project_id
    );

    Ok((
        next,
        TransferResult {
            outcome: Outcome::Removed,
            person_id: person_id.to_string(),
            from_project: Some(project_id),
            to_project: None,
        },
    ))
}

fn not_found(kind: EntityKind, id: &str) -> TransferError {
    TransferError::NotFound {
        kind,
        id: id.to_string(),
    }
}
