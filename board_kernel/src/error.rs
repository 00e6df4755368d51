/// Assignment Board: Error Taxonomy
///
/// Every error here is recoverable. A rejected operation leaves the board
/// exactly as it was.

use thiserror::Error;

/// Which kind of entity a lookup failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Person,
    Project,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Person => f.write_str("person"),
            EntityKind::Project => f.write_str("project"),
        }
    }
}

/// Rejection of a move or remove request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferError {
    /// A referenced id does not resolve against the declared source.
    #[error("{kind} {id:?} not found")]
    NotFound { kind: EntityKind, id: String },

    /// Target project already holds `capacity` members.
    #[error("project {project_id:?} has reached its capacity of {capacity}")]
    CapacityExceeded { project_id: String, capacity: usize },

    /// Source declared as a project without a project id.
    #[error("source project missing for project-sourced move")]
    InvalidSource,
}

impl TransferError {
    /// Stale references are swallowed as no-ops; only capacity is surfaced.
    pub fn is_silent(&self) -> bool {
        !matches!(self, TransferError::CapacityExceeded { .. })
    }

    /// Message for the presentation layer, `None` for silent rejections.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            TransferError::CapacityExceeded { .. } => Some("Project has reached maximum team size"),
            TransferError::NotFound { .. } | TransferError::InvalidSource => None,
        }
    }
}

/// Rejection of a seed dataset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    #[error("invalid {kind} id {id:?}: must match [a-zA-Z0-9_-]+")]
    InvalidId { kind: &'static str, id: String },

    #[error("duplicate {kind} id {id:?}")]
    DuplicateId { kind: &'static str, id: String },

    #[error("project {project_id:?} has zero capacity")]
    ZeroCapacity { project_id: String },

    #[error("project {project_id:?} lists unknown member {person_id:?}")]
    UnknownMember { project_id: String, person_id: String },

    #[error("person {person_id:?} listed in both {first:?} and {second:?}")]
    MultipleProjects {
        person_id: String,
        first: String,
        second: String,
    },

    #[error("project {project_id:?} seeded with {members} members over capacity {capacity}")]
    OverCapacity {
        project_id: String,
        members: usize,
        capacity: usize,
    },
}

/// A snapshot that breaks a structural invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[INVARIANT:{tag}] {detail}")]
pub struct InvariantViolation {
    pub tag: &'static str,
    pub detail: String,
}

impl InvariantViolation {
    pub(crate) fn new(tag: &'static str, detail: impl Into<String>) -> Self {
        Self {
            tag,
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_capacity_is_surfaced() {
        let cap = TransferError::CapacityExceeded {
            project_id: "p1".to_string(),
            capacity: 1,
        };
        assert!(!cap.is_silent());
        assert_eq!(
            cap.user_message(),
            Some("Project has reached maximum team size")
        );

        let missing = TransferError::NotFound {
            kind: EntityKind::Person,
            id: "9".to_string(),
        };
        assert!(missing.is_silent());
        assert_eq!(missing.user_message(), None);
        assert!(TransferError::InvalidSource.is_silent());
    }

    #[test]
    fn test_display_messages() {
        let err = TransferError::NotFound {
            kind: EntityKind::Project,
            id: "p9".to_string(),
        };
        assert_eq!(err.to_string(), "project \"p9\" not found");

        let v = InvariantViolation::new("capacity", "p1 over");
        assert_eq!(v.to_string(), "[INVARIANT:capacity] p1 over");
    }
}
