use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};

pub mod datetime;

/// A domain record that may or may not have been assigned an identifier
/// by the server.
///
/// The `Default` implementation is the "new instance" constructor; it
/// produces a transient entity with no identifier.
pub trait Entity: Clone + Default + Send + Sync + 'static {
    /// The plural, lowercase name of the REST resource, e.g. `vacations`.
    const RESOURCE: &'static str;

    fn id(&self) -> Option<i64>;

    /// Whether the entity has been persisted server-side.
    fn is_persisted(&self) -> bool {
        self.id().is_some()
    }

    /// Populates the fields a transient entity receives before it is
    /// presented for editing.  `today` is the start of the current day.
    fn apply_defaults(&mut self, _today: DateTime<Utc>) {}
}

/// An entity that can be exchanged with the REST resource.
///
/// The wire form is what actually goes through `serde`; conversion
/// between the two is where date-like fields get rendered to and
/// parsed from their ISO-8601 representation.
pub trait RestEntity: Entity {
    type Wire: Serialize + DeserializeOwned + Send + Sync + 'static;

    fn to_wire(&self) -> Self::Wire;
    fn from_wire(wire: Self::Wire) -> Self;
}
