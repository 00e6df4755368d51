/// Assignment Board: Command Definitions
///
/// Commands are pure data. They carry intent only and contain no
/// transfer logic.

use serde::{Deserialize, Serialize};

use crate::domain::{PersonId, ProjectId};
use crate::error::TransferError;

/// Where a dragged person is declared to come from, as the presentation
/// layer reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Pool,
    Project,
}

/// Resolved source of a move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Pool,
    Project(ProjectId),
}

impl Source {
    /// Combine a source kind and an optional project id.
    ///
    /// A project-sourced move without a project id is `InvalidSource`.
    pub fn from_parts(kind: SourceKind, project_id: Option<&str>) -> Result<Self, TransferError> {
        match (kind, project_id) {
            (SourceKind::Pool, _) => Ok(Source::Pool),
            (SourceKind::Project, Some(id)) if !id.is_empty() => {
                Ok(Source::Project(id.to_string()))
            }
            (SourceKind::Project, _) => Err(TransferError::InvalidSource),
        }
    }

    pub fn kind(&self) -> SourceKind {
        match self {
            Source::Pool => SourceKind::Pool,
            Source::Project(_) => SourceKind::Project,
        }
    }
}

/// A single mutation request against the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    Move {
        person_id: PersonId,
        target_project_id: ProjectId,
        source: Source,
    },
    Remove {
        person_id: PersonId,
    },
}

impl Command {
    pub fn assign(person_id: &str, target_project_id: &str) -> Self {
        Command::Move {
            person_id: person_id.to_string(),
            target_project_id: target_project_id.to_string(),
            source: Source::Pool,
        }
    }

    pub fn transfer(person_id: &str, source_project_id: &str, target_project_id: &str) -> Self {
        Command::Move {
            person_id: person_id.to_string(),
            target_project_id: target_project_id.to_string(),
            source: Source::Project(source_project_id.to_string()),
        }
    }

    pub fn remove(person_id: &str) -> Self {
        Command::Remove {
            person_id: person_id.to_string(),
        }
    }

    pub fn person_id(&self) -> &str {
        match self {
            Command::Move { person_id, .. } | Command::Remove { person_id } => person_id,
        }
    }

    /// Stable name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Move { .. } => "move",
            Command::Remove { .. } => "remove",
        }
    }
}
