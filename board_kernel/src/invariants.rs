/// Assignment Board: Invariant Checks
///
/// `validate_invariants` is hard-fail: the board runs it after every
/// accepted transfer, so a failure is a kernel bug.
/// `try_validate_invariants` reports the first failure instead.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::Snapshot;
use crate::error::InvariantViolation;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Run every check. Panics on the first failure.
pub fn validate_invariants(state: &Snapshot) {
    if let Err(violation) = try_validate_invariants(state) {
        panic!("Invariant violation: {}", violation);
    }
}

/// Non-panicking variant of `validate_invariants`.
pub fn try_validate_invariants(state: &Snapshot) -> Result<(), InvariantViolation> {
    check_unique_ids(state)?;
    check_positive_capacity(state)?;
    check_capacity(state)?;
    check_member_refs(state)?;
    check_single_membership(state)?;
    check_project_refs(state)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Individual checks (private)
// ---------------------------------------------------------------------------

/// Person ids and project ids are each unique.
fn check_unique_ids(state: &Snapshot) -> Result<(), InvariantViolation> {
    let mut seen = BTreeSet::new();
    for p in state.persons() {
        if !seen.insert(p.id.as_str()) {
            return Err(InvariantViolation::new(
                "duplicate_person_id",
                format!("Person id {:?} appears more than once", p.id),
            ));
        }
    }
    let mut seen = BTreeSet::new();
    for p in state.projects() {
        if !seen.insert(p.id.as_str()) {
            return Err(InvariantViolation::new(
                "duplicate_project_id",
                format!("Project id {:?} appears more than once", p.id),
            ));
        }
    }
    Ok(())
}

fn check_positive_capacity(state: &Snapshot) -> Result<(), InvariantViolation> {
    for p in state.projects() {
        if p.capacity == 0 {
            return Err(InvariantViolation::new(
                "zero_capacity",
                format!("Project {:?} has zero capacity", p.id),
            ));
        }
    }
    Ok(())
}

/// len(members) <= capacity.
fn check_capacity(state: &Snapshot) -> Result<(), InvariantViolation> {
    for p in state.projects() {
        if p.members.len() > p.capacity {
            return Err(InvariantViolation::new(
                "capacity",
                format!(
                    "Project {:?} holds {} members over capacity {}",
                    p.id,
                    p.members.len(),
                    p.capacity
                ),
            ));
        }
    }
    Ok(())
}

/// Every member id resolves to a person.
fn check_member_refs(state: &Snapshot) -> Result<(), InvariantViolation> {
    let ids: BTreeSet<&str> = state.persons().map(|p| p.id.as_str()).collect();
    for p in state.projects() {
        for m in &p.members {
            if !ids.contains(m.as_str()) {
                return Err(InvariantViolation::new(
                    "member_refs",
                    format!("Project {:?} lists unknown person {:?}", p.id, m),
                ));
            }
        }
    }
    Ok(())
}

/// A person id appears at most once across all member lists.
fn check_single_membership(state: &Snapshot) -> Result<(), InvariantViolation> {
    let mut owner: BTreeMap<&str, &str> = BTreeMap::new();
    for p in state.projects() {
        for m in &p.members {
            if let Some(first) = owner.insert(m.as_str(), p.id.as_str()) {
                return Err(InvariantViolation::new(
                    "single_membership",
                    format!(
                        "Person {:?} is a member of both {:?} and {:?}",
                        m, first, p.id
                    ),
                ));
            }
        }
    }
    Ok(())
}

/// A person's project reference matches the member lists; this is what
/// keeps pool and project membership disjoint.
fn check_project_refs(state: &Snapshot) -> Result<(), InvariantViolation> {
    for person in state.persons() {
        let holder = state.project_of(&person.id).map(|p| p.id.as_str());
        if holder != person.project_id.as_deref() {
            return Err(InvariantViolation::new(
                "project_refs",
                format!(
                    "Person {:?} references {:?} but is a member of {:?}",
                    person.id, person.project_id, holder
                ),
            ));
        }
    }
    Ok(())
}
