//! Family file replay
//!
//! A family file is a script for the ingest contract, not a storage format:
//! people are added in order, then each relation is replayed by index.
//!
//! ```json
//! {
//!   "people": [{ "name": "Arthur", "gender": "male" }, { "name": "Ben", "gender": "male" }],
//!   "relations": [{ "from": 0, "to": 1, "kind": "parent-child" }]
//! }
//! ```

use kin_graph::{GraphConfig, NewPerson, PersonGraph, PersonId, RelationKind};
use serde::{Deserialize, Serialize};

/// Replay failure that makes the file unusable
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReplayError {
    /// A relation points past the end of the people list
    #[error("relation {relation} refers to person index {index}, but only {len} people are listed")]
    IndexOutOfRange {
        /// Position of the relation in the file
        relation: usize,
        /// Offending index
        index: usize,
        /// Number of people in the file
        len: usize,
    },
}

/// One relation line, endpoints given as indices into `people`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationEntry {
    /// First endpoint (the parent for `parent-child`)
    pub from: usize,
    /// Second endpoint
    pub to: usize,
    /// Edge kind
    pub kind: RelationKind,
}

/// Parsed family file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FamilyFile {
    /// People in insertion order
    pub people: Vec<NewPerson>,
    /// Relations replayed after every person is added
    pub relations: Vec<RelationEntry>,
}

/// Graph built from a family file
#[derive(Debug, Clone)]
pub struct Family {
    /// The replayed graph
    pub graph: PersonGraph,
    ids: Vec<Option<PersonId>>,
}

impl Family {
    /// Id assigned to the person at `index` in the file, if it was accepted
    #[must_use]
    pub fn person_at(&self, index: usize) -> Option<PersonId> {
        self.ids.get(index).copied().flatten()
    }
}

impl FamilyFile {
    /// Replay through `add_person` and `add_relation`
    ///
    /// Rejected people and relations are logged and skipped, the same way the
    /// graph itself treats them.
    ///
    /// # Errors
    /// Returns [`ReplayError::IndexOutOfRange`] if a relation names an index
    /// outside the people list.
    pub fn replay(&self, config: GraphConfig) -> Result<Family, ReplayError> {
        let mut graph = PersonGraph::with_config(config);
        let mut ids = Vec::with_capacity(self.people.len());

        for (index, data) in self.people.iter().enumerate() {
            match graph.add_person(data.clone()) {
                Ok(id) => ids.push(Some(id)),
                Err(err) => {
                    tracing::warn!("Skipping person #{}: {}", index, err);
                    ids.push(None);
                }
            }
        }

        for (relation, entry) in self.relations.iter().enumerate() {
            let lookup = |index: usize| {
                ids.get(index).copied().ok_or(ReplayError::IndexOutOfRange {
                    relation,
                    index,
                    len: ids.len(),
                })
            };
            let (Some(a), Some(b)) = (lookup(entry.from)?, lookup(entry.to)?) else {
                tracing::warn!("Skipping relation #{}: endpoint was rejected", relation);
                continue;
            };
            if let Err(err) = graph.add_relation(a, b, entry.kind) {
                tracing::warn!("Skipping relation #{}: {}", relation, err);
            }
        }

        tracing::debug!(
            "Replayed {} people and {} relations",
            graph.len(),
            self.relations.len()
        );

        Ok(Family { graph, ids })
    }
}
