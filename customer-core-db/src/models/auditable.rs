use chrono::{DateTime, Utc};

use super::identifiable::Identifiable;

/// Trait for entities whose prior state is kept as history snapshots
pub trait Auditable: Identifiable {
    /// The append-only record holding one prior state of the entity
    type Snapshot;

    /// Captures the current state of the entity as a snapshot taken at `taken_at`.
    fn snapshot(&self, taken_at: DateTime<Utc>) -> Result<Self::Snapshot, String>;
}
