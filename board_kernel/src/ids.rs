/// Assignment Board: Identifier Rules
///
/// Person and project ids are ASCII `[a-zA-Z0-9_-]+`.

use crate::error::SeedError;

/// True if `id` is non-empty and every char is in `[a-zA-Z0-9_-]`.
pub fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '-')
}

/// Validate an entity id. `kind` names the entity in the error.
pub fn validate_id(kind: &'static str, id: &str) -> Result<(), SeedError> {
    if is_valid_id(id) {
        Ok(())
    } else {
        Err(SeedError::InvalidId {
            kind,
            id: id.to_string(),
        })
    }
}
