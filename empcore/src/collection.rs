use std::collections::HashSet;
use crate::entity::Entity;

/// Merges `candidates` into `collection`, skipping any that are absent,
/// lack an identifier, or share an identifier with an element already
/// in the collection (including a candidate accepted earlier in the
/// same call).
///
/// Accepted candidates are placed ahead of the existing elements, in
/// the order they were supplied.  When no candidate is present at all
/// the collection is handed back untouched, without reallocation.
pub fn add_to_collection_if_missing<E, I>(
    mut collection: Vec<E>,
    candidates: I,
) -> Vec<E>
where
    E: Entity,
    I: IntoIterator<Item = Option<E>>,
{
    let candidates = candidates.into_iter()
        .flatten()
        .collect::<Vec<_>>();
    if candidates.is_empty() {
        return collection;
    }

    let mut identifiers = collection.iter()
        .filter_map(Entity::id)
        .collect::<HashSet<_>>();
    let mut merged = candidates.into_iter()
        .filter(|candidate| match candidate.id() {
            Some(id) => identifiers.insert(id),
            None => false,
        })
        .collect::<Vec<_>>();
    if merged.is_empty() {
        return collection;
    }
    merged.append(&mut collection);
    merged
}
