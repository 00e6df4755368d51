/// Assignment Board: Core Domain Types
///
/// Pure data. No transfer logic.
/// Records are held behind `Arc` so untouched records are shared between
/// snapshots; every edit goes through `Arc::make_mut`, which copies a
/// record that an older snapshot still holds.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

pub type PersonId = String;
pub type ProjectId = String;

// ── Core Domain Types ──────────────────────────────────────────────

/// A member of the personnel pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub role_title: String,
    pub avatar: String,
    pub skills: BTreeSet<String>,
    /// `None` means the person sits in the unassigned pool.
    pub project_id: Option<ProjectId>,
}

/// Display-only lifecycle status. Does not affect transfer rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Active,
    Completed,
    OnHold,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Completed => "completed",
            ProjectStatus::OnHold => "on-hold",
        }
    }
}

/// A project with a bounded, ordered member list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub capacity: usize,
    pub members: Vec<PersonId>,
}

impl Project {
    pub fn is_full(&self) -> bool {
        self.members.len() >= self.capacity
    }

    pub fn has_member(&self, person_id: &str) -> bool {
        self.members.iter().any(|m| m == person_id)
    }

    pub fn free_slots(&self) -> usize {
        self.capacity.saturating_sub(self.members.len())
    }
}

// ── Snapshot ───────────────────────────────────────────────────────

/// One moment of global board state. Value-equal by content.
///
/// Only built through the seed builder and the transfer engine, so it is
/// serializable but never deserialized directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    persons: Vec<Arc<Person>>,
    projects: Vec<Arc<Project>>,
}

impl Snapshot {
    /// Wrap already-validated records. Seed construction lives in `state`.
    pub(crate) fn from_parts(persons: Vec<Person>, projects: Vec<Project>) -> Self {
        Self {
            persons: persons.into_iter().map(Arc::new).collect(),
            projects: projects.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn persons(&self) -> impl Iterator<Item = &Person> {
        self.persons.iter().map(|p| p.as_ref())
    }

    pub fn projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().map(|p| p.as_ref())
    }

    pub fn person(&self, person_id: &str) -> Option<&Person> {
        self.persons().find(|p| p.id == person_id)
    }

    pub fn project(&self, project_id: &str) -> Option<&Project> {
        self.projects().find(|p| p.id == project_id)
    }

    /// Persons without a project, in seeded order.
    pub fn pool(&self) -> Vec<&Person> {
        self.persons().filter(|p| p.project_id.is_none()).collect()
    }

    /// Resolved members of a project, in membership order.
    pub fn members_of(&self, project_id: &str) -> Vec<&Person> {
        match self.project(project_id) {
            Some(project) => project
                .members
                .iter()
                .filter_map(|id| self.person(id))
                .collect(),
            None => Vec::new(),
        }
    }

    /// The project whose member list holds `person_id`, if any.
    pub fn project_of(&self, person_id: &str) -> Option<&Project> {
        self.projects().find(|p| p.has_member(person_id))
    }

    pub fn person_count(&self) -> usize {
        self.persons.len()
    }

    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    /// True when both snapshots hold the very same record allocation for
    /// `person_id`. Used to check copy-on-write behaviour.
    pub fn shares_person_with(&self, other: &Snapshot, person_id: &str) -> bool {
        match (self.person_arc(person_id), other.person_arc(person_id)) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Same as `shares_person_with`, for project records.
    pub fn shares_project_with(&self, other: &Snapshot, project_id: &str) -> bool {
        match (self.project_arc(project_id), other.project_arc(project_id)) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    fn person_arc(&self, person_id: &str) -> Option<&Arc<Person>> {
        self.persons.iter().find(|p| p.id == person_id)
    }

    fn project_arc(&self, project_id: &str) -> Option<&Arc<Project>> {
        self.projects.iter().find(|p| p.id == project_id)
    }

    // -- copy-on-write accessors used by the transfer engine --

    pub(crate) fn person_mut(&mut self, person_id: &str) -> Option<&mut Person> {
        self.persons
            .iter_mut()
            .find(|p| p.id == person_id)
            .map(Arc::make_mut)
    }

    pub(crate) fn project_mut(&mut self, project_id: &str) -> Option<&mut Project> {
        self.projects
            .iter_mut()
            .find(|p| p.id == project_id)
            .map(Arc::make_mut)
    }
}

// ── Transfer outcome ───────────────────────────────────────────────

/// Caller-visible classification of a successful transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Pool -> project.
    Assigned,
    /// Project -> another project.
    Transferred,
    /// Project -> pool.
    Removed,
    /// Dropped onto the project the person already belongs to.
    Unchanged,
}

impl Outcome {
    /// Whether this outcome produced a new snapshot worth recording.
    pub fn changes_state(&self) -> bool {
        !matches!(self, Outcome::Unchanged)
    }
}

/// Structured, immutable outcome of a successful transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferResult {
    pub outcome: Outcome,
    pub person_id: PersonId,
    pub from_project: Option<ProjectId>,
    pub to_project: Option<ProjectId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(capacity: usize, members: &[&str]) -> Project {
        Project {
            id: "p".to_string(),
            name: "P".to_string(),
            description: String::new(),
            status: ProjectStatus::Active,
            capacity,
            members: members.iter().map(|m| m.to_string()).collect(),
        }
    }

    #[test]
    fn test_project_capacity_helpers() {
        let p = project(2, &["a"]);
        assert!(!p.is_full());
        assert_eq!(p.free_slots(), 1);
        assert!(p.has_member("a"));
        assert!(!p.has_member("b"));

        let full = project(1, &["a"]);
        assert!(full.is_full());
        assert_eq!(full.free_slots(), 0);
    }

    #[test]
    fn test_status_serializes_kebab_case() {
        let json = serde_json::to_string(&ProjectStatus::OnHold).unwrap();
        assert_eq!(json, "\"on-hold\"");
        assert_eq!(ProjectStatus::OnHold.as_str(), "on-hold");
    }

    #[test]
    fn test_members_of_follows_membership_order() {
        use crate::commands::Source;
        use crate::state::{create_initial_snapshot, default_seed};
        use crate::transitions::apply_move;

        let s0 = create_initial_snapshot(&default_seed()).unwrap();
        let (s1, _) = apply_move(&s0, "3", "p1", &Source::Pool).unwrap();
        let (s2, _) = apply_move(&s1, "1", "p1", &Source::Pool).unwrap();
        let names: Vec<&str> = s2.members_of("p1").iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Mike Johnson", "John Doe"]);
        assert!(s2.members_of("p2").is_empty());
        assert!(s2.members_of("p9").is_empty());
    }

    #[test]
    fn test_snapshot_serializes_records_inline() {
        use crate::state::{create_initial_snapshot, default_seed};

        let snap = create_initial_snapshot(&default_seed()).unwrap();
        let json = serde_json::to_value(&snap).unwrap();
        let persons = json["persons"].as_array().unwrap();
        assert_eq!(persons.len(), 4);
        assert_eq!(persons[0]["id"], "1");
        assert_eq!(persons[0]["project_id"], serde_json::Value::Null);
        assert_eq!(json["projects"][1]["status"], "on-hold");
        assert_eq!(json["projects"][0]["capacity"], 3);
    }

    #[test]
    fn test_outcome_changes_state() {
        assert!(Outcome::Assigned.changes_state());
        assert!(Outcome::Removed.changes_state());
        assert!(!Outcome::Unchanged.changes_state());
    }
}
