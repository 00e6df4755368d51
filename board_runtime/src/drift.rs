//! Drift detection: structured comparison of two board snapshots.
//!
//! Used to describe what an undo or redo actually changed.

use std::collections::BTreeMap;

use board_kernel::Snapshot;

/// A person whose placement differs between two snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub person_id: String,
    pub from: Option<String>,
    pub to: Option<String>,
}

/// Structured drift report between snapshot `a` and snapshot `b`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriftReport {
    /// pool -> project
    pub assigned: Vec<Placement>,
    /// project -> pool
    pub unassigned: Vec<Placement>,
    /// project -> other project
    pub transferred: Vec<Placement>,
    /// Member count change per project, only non-zero entries.
    pub member_deltas: BTreeMap<String, i64>,
    pub pool_size_a: usize,
    pub pool_size_b: usize,
}

impl DriftReport {
    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty() && self.unassigned.is_empty() && self.transferred.is_empty()
    }

    pub fn pool_size_delta(&self) -> i64 {
        self.pool_size_b as i64 - self.pool_size_a as i64
    }

    /// One-line key=value summary for log lines.
    pub fn summary(&self) -> String {
        format!(
            "assigned={} unassigned={} transferred={} pool_delta={}",
            self.assigned.len(),
            self.unassigned.len(),
            self.transferred.len(),
            self.pool_size_delta()
        )
    }
}

/// Compare placements and member counts. Persons are matched by id;
/// a person missing from either side is ignored.
pub fn compare_snapshots(a: &Snapshot, b: &Snapshot) -> DriftReport {
    let mut report = DriftReport {
        pool_size_a: a.pool().len(),
        pool_size_b: b.pool().len(),
        ..Default::default()
    };

    for before in a.persons() {
        let Some(after) = b.person(&before.id) else {
            continue;
        };
        if before.project_id == after.project_id {
            continue;
        }
        let bucket = match (&before.project_id, &after.project_id) {
            (None, Some(_)) => &mut report.assigned,
            (Some(_), None) => &mut report.unassigned,
            _ => &mut report.transferred,
        };
        bucket.push(Placement {
            person_id: before.id.clone(),
            from: before.project_id.clone(),
            to: after.project_id.clone(),
        });
    }

    for project in b.projects() {
        let before = a.project(&project.id).map_or(0, |p| p.members.len());
        let delta = project.members.len() as i64 - before as i64;
        if delta != 0 {
            report.member_deltas.insert(project.id.clone(), delta);
        }
    }

    report
}
