//! Person graph
//!
//! Owns all people and their mirrored edges. Every mutation is an addition:
//! people are added once and edges are never removed. Structural invariants
//! maintained here:
//!
//! 1. parent/child, spouse and sibling edges are recorded on both sides
//! 2. a new parent-child edge re-stamps the child and all its descendants with
//!    `generation(parent) + 1`, moving forward only
//! 3. a new spouse or sibling edge copies the first-named side's generation
//!    onto the second
//! 4. siblings are derived from shared parentage (see [`crate::siblings`])
//! 5. children and siblings stay in birth order
//! 6. no two people share a member id

use crate::config::GraphConfig;
use crate::error::GraphError;
use crate::ordering::by_birth_order;
use crate::person::{NewPerson, Person, PersonId};
use crate::siblings::{sibling_closure, SiblingUpdate};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};

/// Kind of edge accepted by [`PersonGraph::add_relation`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelationKind {
    /// First argument is a parent of the second
    ParentChild,
    /// Mutual marriage edge
    Spouse,
    /// Explicit sibling edge; both sides end up sharing parents
    Sibling,
}

/// In-memory family graph
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonGraph {
    config: GraphConfig,
    people: IndexMap<PersonId, Person>,
    last_id: u64,
    root: Option<PersonId>,
}

impl PersonGraph {
    /// Create an empty graph with default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with custom configuration
    #[must_use]
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> GraphConfig {
        self.config
    }

    /// Number of people
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Whether the graph holds nobody
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Current root, if designated
    #[inline]
    #[must_use]
    pub fn root(&self) -> Option<PersonId> {
        self.root
    }

    /// Whether `id` resolves to a person
    #[inline]
    #[must_use]
    pub fn contains(&self, id: PersonId) -> bool {
        self.people.contains_key(&id)
    }

    /// Look up a person
    #[inline]
    #[must_use]
    pub fn person(&self, id: PersonId) -> Option<&Person> {
        self.people.get(&id)
    }

    /// All people in id order
    pub fn people(&self) -> impl Iterator<Item = &Person> + '_ {
        self.people.values()
    }

    /// All ids in id order
    pub fn ids(&self) -> impl Iterator<Item = PersonId> + '_ {
        self.people.keys().copied()
    }

    /// Find the person holding an external member id
    #[must_use]
    pub fn find_by_member_id(&self, member_id: &str) -> Option<&Person> {
        self.people
            .values()
            .find(|person| person.member_id.as_deref() == Some(member_id))
    }

    pub(crate) fn people_map(&self) -> &IndexMap<PersonId, Person> {
        &self.people
    }

    #[cfg(test)]
    pub(crate) fn people_map_mut(&mut self) -> &mut IndexMap<PersonId, Person> {
        &mut self.people
    }

    /// Add a person and return their new id
    ///
    /// With implicit root designation enabled, the first person ever added
    /// becomes the root at generation 0.
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicateMemberId`] if another person already
    /// holds `data.member_id`; the graph is left unchanged.
    pub fn add_person(&mut self, data: NewPerson) -> Result<PersonId, GraphError> {
        if let Some(member_id) = data.member_id.as_deref() {
            if self.find_by_member_id(member_id).is_some() {
                tracing::warn!("Rejected duplicate member id: {}", member_id);
                return Err(GraphError::DuplicateMemberId(member_id.to_string()));
            }
        }

        self.last_id += 1;
        let id = PersonId::new(self.last_id);
        let first = self.people.is_empty();
        tracing::debug!("Added person {} ({})", id, data.name);
        self.people.insert(id, Person::from_new(id, data));

        if first && self.config.implicit_root && self.root.is_none() {
            self.stamp_root(id);
        }

        Ok(id)
    }

    /// Make `id` the root: generation 0, descendants re-stamped forward
    ///
    /// # Errors
    /// Returns [`GraphError::PersonNotFound`] if `id` is unknown.
    pub fn designate_root(&mut self, id: PersonId) -> Result<(), GraphError> {
        if !self.contains(id) {
            return Err(GraphError::PersonNotFound(id));
        }
        self.stamp_root(id);
        Ok(())
    }

    fn stamp_root(&mut self, id: PersonId) {
        tracing::debug!("Designated root {}", id);
        self.root = Some(id);
        self.propagate_generation(id, 0);
    }

    /// Record an edge between two existing people
    ///
    /// Both ids are validated before anything is written. Re-adding an
    /// existing edge is a no-op.
    ///
    /// # Errors
    /// Returns [`GraphError::PersonNotFound`] for a dangling id and
    /// [`GraphError::SelfRelation`] when `a == b`.
    pub fn add_relation(
        &mut self,
        a: PersonId,
        b: PersonId,
        kind: RelationKind,
    ) -> Result<(), GraphError> {
        for id in [a, b] {
            if !self.contains(id) {
                tracing::warn!("Ignored {:?} relation with unknown person {}", kind, id);
                return Err(GraphError::PersonNotFound(id));
            }
        }
        if a == b {
            return Err(GraphError::SelfRelation(a));
        }

        match kind {
            RelationKind::ParentChild => self.link_parent_child(a, b),
            RelationKind::Spouse => self.link_spouse(a, b),
            RelationKind::Sibling => self.link_sibling(a, b),
        }
        Ok(())
    }

    fn generation_of(&self, id: PersonId) -> Option<i32> {
        self.people.get(&id).and_then(Person::generation)
    }

    fn set_generation(&mut self, id: PersonId, generation: i32) {
        if let Some(person) = self.people.get_mut(&id) {
            person.generation = Some(generation);
        }
    }

    fn link_parent_child(&mut self, parent: PersonId, child: PersonId) {
        let already = self
            .people
            .get(&parent)
            .is_some_and(|p| p.children.contains(&child));
        if already {
            return;
        }

        if let Some(p) = self.people.get_mut(&parent) {
            p.children.insert(child);
        }
        if let Some(c) = self.people.get_mut(&child) {
            c.parents.insert(parent);
        }
        self.resort_children(parent);
        tracing::debug!("Linked parent {} -> child {}", parent, child);

        if let Some(generation) = self.generation_of(parent) {
            self.propagate_generation(child, generation + 1);
        }

        if let Some(update) = sibling_closure(self, child) {
            self.apply_sibling_update(&update);
        }
    }

    fn link_spouse(&mut self, a: PersonId, b: PersonId) {
        if let Some(person) = self.people.get_mut(&a) {
            person.spouses.insert(b);
        }
        if let Some(person) = self.people.get_mut(&b) {
            person.spouses.insert(a);
        }
        self.copy_generation(a, b);
        tracing::debug!("Linked spouses {} <-> {}", a, b);
    }

    fn link_sibling(&mut self, a: PersonId, b: PersonId) {
        self.copy_generation(a, b);

        let mut group: IndexSet<PersonId> = IndexSet::from([a, b]);
        let mut parents: IndexSet<PersonId> = IndexSet::new();
        for id in [a, b] {
            if let Some(person) = self.people.get(&id) {
                group.extend(person.siblings.iter().copied());
                parents.extend(person.parents.iter().copied());
            }
        }
        group.retain(|id| self.people.contains_key(id));

        for &member in &group {
            let others: Vec<PersonId> = group.iter().copied().filter(|&o| o != member).collect();
            if let Some(person) = self.people.get_mut(&member) {
                person.siblings.extend(others);
            }
            self.resort_siblings(member);
        }
        tracing::debug!("Linked siblings {} <-> {} (group of {})", a, b, group.len());

        for &member in &group {
            for &parent in &parents {
                if parent != member {
                    self.link_parent_child(parent, member);
                }
            }
        }
    }

    /// Copy `a`'s generation onto `b`, or `b`'s onto `a` when `a` has none.
    fn copy_generation(&mut self, a: PersonId, b: PersonId) {
        match (self.generation_of(a), self.generation_of(b)) {
            (Some(generation), _) => self.set_generation(b, generation),
            (None, Some(generation)) => self.set_generation(a, generation),
            (None, None) => {}
        }
    }

    /// Stamp `start` with `generation` and every descendant with its depth
    /// below it. The visited set keeps cyclic input from looping.
    fn propagate_generation(&mut self, start: PersonId, generation: i32) {
        let mut visited = HashSet::new();
        let mut queue = VecDeque::from([(start, generation)]);

        while let Some((id, generation)) = queue.pop_front() {
            if !visited.insert(id) {
                continue;
            }
            let Some(person) = self.people.get_mut(&id) else {
                continue;
            };
            person.generation = Some(generation);
            for &child in &person.children {
                if !visited.contains(&child) {
                    queue.push_back((child, generation + 1));
                }
            }
        }
    }

    fn apply_sibling_update(&mut self, update: &SiblingUpdate) {
        if let Some(person) = self.people.get_mut(&update.child) {
            person.siblings = update.siblings.clone();
        }

        for &sibling in &update.siblings {
            if let Some(person) = self.people.get_mut(&sibling) {
                person.siblings.insert(update.child);
            }
            self.resort_siblings(sibling);

            for parent in update.missing_parents(self, sibling) {
                if parent != sibling {
                    self.link_parent_child(parent, sibling);
                }
            }
        }
    }

    fn resort_children(&mut self, id: PersonId) {
        if let Some(person) = self.people.get(&id) {
            let sorted = by_birth_order(&self.people, &person.children);
            if let Some(person) = self.people.get_mut(&id) {
                person.children = sorted;
            }
        }
    }

    fn resort_siblings(&mut self, id: PersonId) {
        if let Some(person) = self.people.get(&id) {
            let sorted = by_birth_order(&self.people, &person.siblings);
            if let Some(person) = self.people.get_mut(&id) {
                person.siblings = sorted;
            }
        }
    }
}
