/// Assignment Board: Seed Construction
///
/// The board is seeded once per session from a fixed dataset. Project
/// seeds own the membership; person project references are derived from
/// it so the two can never disagree.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::domain::{Person, Project, ProjectStatus, Snapshot};
use crate::error::SeedError;
use crate::ids::validate_id;

/// Seed record for a person. No project reference; that comes from
/// project membership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PersonSeed {
    pub id: String,
    pub name: String,
    pub role_title: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Seed record for a project, optionally with initial members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectSeed {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub status: ProjectStatus,
    pub capacity: usize,
    #[serde(default)]
    pub members: Vec<String>,
}

/// Complete seed dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedData {
    pub persons: Vec<PersonSeed>,
    pub projects: Vec<ProjectSeed>,
}

/// Build the initial snapshot from a seed, rejecting inconsistent data.
pub fn create_initial_snapshot(seed: &SeedData) -> Result<Snapshot, SeedError> {
    let mut person_ids: BTreeSet<&str> = BTreeSet::new();
    for p in &seed.persons {
        validate_id("person", &p.id)?;
        if !person_ids.insert(p.id.as_str()) {
            return Err(SeedError::DuplicateId {
                kind: "person",
                id: p.id.clone(),
            });
        }
    }

    // person id -> owning project id
    let mut owner: BTreeMap<&str, &str> = BTreeMap::new();
    let mut project_ids: BTreeSet<&str> = BTreeSet::new();
    for proj in &seed.projects {
        validate_id("project", &proj.id)?;
        if !project_ids.insert(proj.id.as_str()) {
            return Err(SeedError::DuplicateId {
                kind: "project",
                id: proj.id.clone(),
            });
        }
        if proj.capacity == 0 {
            return Err(SeedError::ZeroCapacity {
                project_id: proj.id.clone(),
            });
        }
        if proj.members.len() > proj.capacity {
            return Err(SeedError::OverCapacity {
                project_id: proj.id.clone(),
                members: proj.members.len(),
                capacity: proj.capacity,
            });
        }
        for member in &proj.members {
            if !person_ids.contains(member.as_str()) {
                return Err(SeedError::UnknownMember {
                    project_id: proj.id.clone(),
                    person_id: member.clone(),
                });
            }
            if let Some(first) = owner.insert(member.as_str(), proj.id.as_str()) {
                return Err(SeedError::MultipleProjects {
                    person_id: member.clone(),
                    first: first.to_string(),
                    second: proj.id.clone(),
                });
            }
        }
    }

    let persons = seed
        .persons
        .iter()
        .map(|p| Person {
            id: p.id.clone(),
            name: p.name.clone(),
            role_title: p.role_title.clone(),
            avatar: p.avatar.clone(),
            skills: p.skills.iter().cloned().collect(),
            project_id: owner.get(p.id.as_str()).map(|pid| pid.to_string()),
        })
        .collect();

    let projects = seed
        .projects
        .iter()
        .map(|p| Project {
            id: p.id.clone(),
            name: p.name.clone(),
            description: p.description.clone(),
            status: p.status,
            capacity: p.capacity,
            members: p.members.clone(),
        })
        .collect();

    Ok(Snapshot::from_parts(persons, projects))
}

/// The fixed demo dataset: four people in the pool, three empty projects.
pub fn default_seed() -> SeedData {
    let person = |id: &str, name: &str, role: &str, skills: [&str; 3]| PersonSeed {
        id: id.to_string(),
        name: name.to_string(),
        role_title: role.to_string(),
        avatar: format!("https://i.pravatar.cc/150?img={}", id),
        skills: skills.iter().map(|s| s.to_string()).collect(),
    };
    let project = |id: &str, name: &str, description: &str, capacity, status| ProjectSeed {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        status,
        capacity,
        members: Vec::new(),
    };

    SeedData {
        persons: vec![
            person("1", "John Doe", "Senior Developer", ["React", "TypeScript", "Node.js"]),
            person("2", "Jane Smith", "UI Designer", ["Figma", "UI/UX", "CSS"]),
            person("3", "Mike Johnson", "QA Engineer", ["Testing", "Automation", "Jest"]),
            person("4", "Sarah Wilson", "Backend Developer", ["Python", "Django", "PostgreSQL"]),
        ],
        projects: vec![
            project("p1", "Project 1", "E-commerce Platform", 3, ProjectStatus::Active),
            project("p2", "Project 2", "Mobile App Development", 2, ProjectStatus::OnHold),
            project("p3", "Project 3", "Data Analytics Dashboard", 4, ProjectStatus::Completed),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_seed() -> SeedData {
        SeedData {
            persons: vec![PersonSeed {
                id: "a".to_string(),
                name: "Ann".to_string(),
                role_title: "Dev".to_string(),
                avatar: String::new(),
                skills: vec!["Rust".to_string()],
            }],
            projects: vec![ProjectSeed {
                id: "p".to_string(),
                name: "P".to_string(),
                description: String::new(),
                status: ProjectStatus::Active,
                capacity: 1,
                members: Vec::new(),
            }],
        }
    }

    #[test]
    fn test_default_seed_builds() {
        let snap = create_initial_snapshot(&default_seed()).unwrap();
        assert_eq!(snap.person_count(), 4);
        assert_eq!(snap.project_count(), 3);
        assert_eq!(snap.pool().len(), 4);
        assert_eq!(snap.project("p2").unwrap().capacity, 2);
        assert_eq!(snap.project("p3").unwrap().status, ProjectStatus::Completed);
    }

    #[test]
    fn test_seeded_members_set_project_reference() {
        let mut seed = tiny_seed();
        seed.projects[0].members.push("a".to_string());
        let snap = create_initial_snapshot(&seed).unwrap();
        assert_eq!(snap.person("a").unwrap().project_id.as_deref(), Some("p"));
        assert!(snap.pool().is_empty());
    }

    #[test]
    fn test_rejects_duplicate_person() {
        let mut seed = tiny_seed();
        seed.persons.push(seed.persons[0].clone());
        assert_eq!(
            create_initial_snapshot(&seed).unwrap_err(),
            SeedError::DuplicateId {
                kind: "person",
                id: "a".to_string()
            }
        );
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let mut seed = tiny_seed();
        seed.projects[0].capacity = 0;
        assert!(matches!(
            create_initial_snapshot(&seed),
            Err(SeedError::ZeroCapacity { .. })
        ));
    }

    #[test]
    fn test_rejects_over_capacity_and_unknown_member() {
        let mut seed = tiny_seed();
        seed.projects[0].members = vec!["a".to_string(), "b".to_string()];
        assert!(matches!(
            create_initial_snapshot(&seed),
            Err(SeedError::OverCapacity { .. })
        ));

        let mut seed = tiny_seed();
        seed.projects[0].members = vec!["ghost".to_string()];
        assert!(matches!(
            create_initial_snapshot(&seed),
            Err(SeedError::UnknownMember { .. })
        ));
    }

    #[test]
    fn test_rejects_person_in_two_projects() {
        let mut seed = tiny_seed();
        seed.projects[0].members.push("a".to_string());
        let mut second = seed.projects[0].clone();
        second.id = "q".to_string();
        seed.projects.push(second);
        assert_eq!(
            create_initial_snapshot(&seed).unwrap_err(),
            SeedError::MultipleProjects {
                person_id: "a".to_string(),
                first: "p".to_string(),
                second: "q".to_string()
            }
        );
    }

    #[test]
    fn test_seed_json_shape() {
        let json = r#"{
            "persons": [{"id": "a", "name": "Ann", "role_title": "Dev", "skills": ["Go"]}],
            "projects": [{"id": "p", "name": "P", "status": "on-hold", "capacity": 2}]
        }"#;
        let seed: SeedData = serde_json::from_str(json).unwrap();
        assert_eq!(seed.projects[0].status, ProjectStatus::OnHold);
        assert!(seed.projects[0].members.is_empty());
        assert!(create_initial_snapshot(&seed).is_ok());
    }
}
