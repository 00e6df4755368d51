/// Assignment Board: Entity Store
///
/// Holds the live snapshot for the session. Replaced wholesale, never
/// edited in place.

use crate::domain::Snapshot;

#[derive(Debug, Clone)]
pub struct EntityStore {
    current: Snapshot,
}

impl EntityStore {
    pub fn new(seed: Snapshot) -> Self {
        Self { current: seed }
    }

    pub fn current(&self) -> &Snapshot {
        &self.current
    }

    pub fn replace(&mut self, snapshot: Snapshot) {
        self.current = snapshot;
    }
}
