/// Assignment Board: Canonical Hashing
///
/// Deterministic canonical serialization + SHA-256 hashing of a Snapshot.
///
/// Rules:
///   - Persons sorted by id (UTF-8 byte order), skills sorted
///   - Projects sorted by id, members kept in membership order
///   - UTF-8 JSON, no whitespace

use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::domain::Snapshot;
use crate::BOARD_FORMAT_VERSION;

/// Canonical serialization of a Snapshot to UTF-8 JSON bytes.
pub fn canonical_serialize(state: &Snapshot) -> Vec<u8> {
    build_canonical_value(state).to_string().into_bytes()
}

/// SHA-256 of canonical serialization. Lowercase hex string.
pub fn canonical_hash(state: &Snapshot) -> String {
    let digest = Sha256::digest(canonical_serialize(state));
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Field order: format_version, persons, projects.
fn build_canonical_value(state: &Snapshot) -> Value {
    let mut persons: Vec<_> = state.persons().collect();
    persons.sort_by(|a, b| a.id.cmp(&b.id));

    let persons_list: Vec<Value> = persons
        .into_iter()
        .map(|p| {
            let mut m = Map::new();
            m.insert("id".to_string(), Value::String(p.id.clone()));
            m.insert("name".to_string(), Value::String(p.name.clone()));
            m.insert("role_title".to_string(), Value::String(p.role_title.clone()));
            m.insert("avatar".to_string(), Value::String(p.avatar.clone()));
            // BTreeSet iterates sorted
            m.insert(
                "skills".to_string(),
                Value::Array(p.skills.iter().cloned().map(Value::String).collect()),
            );
            m.insert(
                "project_id".to_string(),
                p.project_id.clone().map_or(Value::Null, Value::String),
            );
            Value::Object(m)
        })
        .collect();

    let mut projects: Vec<_> = state.projects().collect();
    projects.sort_by(|a, b| a.id.cmp(&b.id));

    let projects_list: Vec<Value> = projects
        .into_iter()
        .map(|p| {
            let mut m = Map::new();
            m.insert("id".to_string(), Value::String(p.id.clone()));
            m.insert("name".to_string(), Value::String(p.name.clone()));
            m.insert("description".to_string(), Value::String(p.description.clone()));
            m.insert("status".to_string(), Value::String(p.status.as_str().to_string()));
            m.insert("capacity".to_string(), Value::Number((p.capacity as u64).into()));
            m.insert(
                "members".to_string(),
                Value::Array(p.members.iter().cloned().map(Value::String).collect()),
            );
            Value::Object(m)
        })
        .collect();

    let mut root = Map::new();
    root.insert(
        "format_version".to_string(),
        Value::Number(BOARD_FORMAT_VERSION.into()),
    );
    root.insert("persons".to_string(), Value::Array(persons_list));
    root.insert("projects".to_string(), Value::Array(projects_list));
    Value::Object(root)
}
