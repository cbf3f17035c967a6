//! Derived sibling closure
//!
//! Siblings are never stored independently of parentage: whenever a child
//! gains a parent, its sibling set is recomputed from the children of all its
//! parents. The computation is pure; [`PersonGraph`] applies the result.

use crate::graph::PersonGraph;
use crate::ordering::by_birth_order;
use crate::person::PersonId;
use indexmap::IndexSet;

/// Result of recomputing one child's sibling closure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiblingUpdate {
    /// Child whose closure was recomputed
    pub child: PersonId,
    /// Complete new sibling set for `child`, in birth order
    pub siblings: IndexSet<PersonId>,
    /// Parent set every sibling should share
    pub parents: IndexSet<PersonId>,
}

impl SiblingUpdate {
    /// Parents from this update that `sibling` does not have yet
    #[must_use]
    pub fn missing_parents(&self, graph: &PersonGraph, sibling: PersonId) -> Vec<PersonId> {
        let Some(person) = graph.person(sibling) else {
            return Vec::new();
        };
        self.parents
            .iter()
            .copied()
            .filter(|parent| !person.parents().contains(parent))
            .collect()
    }
}

/// Compute the sibling closure of `child` without mutating the graph.
///
/// The new set is the child's existing siblings plus every other child of each
/// of its parents. Ids that do not resolve to a person are dropped. Returns
/// `None` when `child` itself is unknown.
#[must_use]
pub fn sibling_closure(graph: &PersonGraph, child: PersonId) -> Option<SiblingUpdate> {
    let person = graph.person(child)?;

    let mut siblings: IndexSet<PersonId> = person.siblings().clone();
    for parent in person.parents() {
        if let Some(parent) = graph.person(*parent) {
            siblings.extend(parent.children().iter().copied());
        }
    }
    siblings.retain(|id| *id != child && graph.contains(*id));

    Some(SiblingUpdate {
        child,
        siblings: by_birth_order(graph.people_map(), &siblings),
        parents: person.parents().clone(),
    })
}
