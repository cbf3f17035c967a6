//! Birth-order sorting for children and sibling sets

use crate::person::{Person, PersonId};
use indexmap::{IndexMap, IndexSet};

/// Sort key: known birth orders ascending, unknown ones after all known.
fn birth_key(people: &IndexMap<PersonId, Person>, id: PersonId) -> (bool, u32) {
    match people.get(&id).and_then(Person::known_birth_order) {
        Some(order) => (false, order),
        None => (true, 0),
    }
}

/// Return `ids` ordered by birth order.
///
/// The sort is stable, so ties keep their prior relative order; since ids are
/// appended as they are linked, that prior order falls back to id order for
/// entries that were never reordered.
pub(crate) fn by_birth_order(
    people: &IndexMap<PersonId, Person>,
    ids: &IndexSet<PersonId>,
) -> IndexSet<PersonId> {
    let mut ordered: Vec<PersonId> = ids.iter().copied().collect();
    ordered.sort_by_key(|&id| birth_key(people, id));
    ordered.into_iter().collect()
}
