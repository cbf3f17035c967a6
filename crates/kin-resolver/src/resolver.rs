//! Relationship resolver
//!
//! Finds the shortest kinship path between two people and translates it into
//! a [`RelationshipCode`], one token per step.

use crate::code::{AgeSuffix, KinToken, RelationshipCode};
use crate::search::{find_path, Step, StepKind};
use crate::seniority::{comparison_basis, determine_elder_younger, Seniority};
use kin_graph::{Gender, PersonGraph, PersonId};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Outcome of resolving one ordered pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    /// Relationship code, the key consumers look labels up by
    pub code: RelationshipCode,
    /// Plain English gloss of the code
    pub description: String,
    /// Signed generation difference, target relative to source
    pub generation_diff: i32,
}

impl Relationship {
    fn sentinel(code: RelationshipCode) -> Self {
        Self {
            description: code.description(),
            code,
            generation_diff: 0,
        }
    }
}

/// Read-only resolver over a graph snapshot
#[derive(Debug, Clone, Copy)]
pub struct RelationshipResolver<'g> {
    graph: &'g PersonGraph,
}

impl<'g> RelationshipResolver<'g> {
    /// Create a resolver borrowing `graph`
    #[inline]
    #[must_use]
    pub fn new(graph: &'g PersonGraph) -> Self {
        Self { graph }
    }

    /// Shortest tagged path between two people
    #[must_use]
    pub fn find_path(&self, source: PersonId, target: PersonId) -> Option<Vec<Step>> {
        find_path(self.graph, source, target)
    }

    /// Resolve how `target` is related to `source`
    ///
    /// Never fails: the same id twice yields `SELF` whether or not it is in
    /// the graph, other unknown ids yield `UNKNOWN`, disconnected people
    /// yield `UNRELATED`.
    #[must_use]
    pub fn resolve(&self, source: PersonId, target: PersonId) -> Relationship {
        if source == target {
            return Relationship::sentinel(RelationshipCode::SelfRef);
        }
        if !self.graph.contains(source) || !self.graph.contains(target) {
            tracing::debug!("Cannot resolve {} -> {}: unknown person", source, target);
            return Relationship::sentinel(RelationshipCode::Unknown);
        }

        let Some(path) = self.find_path(source, target) else {
            tracing::debug!("No path between {} and {}", source, target);
            return Relationship::sentinel(RelationshipCode::Unrelated);
        };

        let Some(tokens) = self.tokens(source, &path) else {
            tracing::debug!("Path {} -> {} has an unnameable step", source, target);
            return Relationship::sentinel(RelationshipCode::Unknown);
        };

        let mut code = RelationshipCode::path(tokens);
        if code.is_cousin() {
            if let RelationshipCode::Path { suffix, .. } = &mut code {
                *suffix = self.cousin_suffix(source, target);
            }
        }

        let generation_diff = path.iter().map(|step| step.kind.generation_delta()).sum();
        tracing::debug!("Resolved {} -> {}: {}", source, target, code);

        Relationship {
            description: code.description(),
            code,
            generation_diff,
        }
    }

    /// Resolve both directions independently
    ///
    /// The reverse code is always recomputed rather than derived from an
    /// inverse table, so multi-step codes stay consistent with the search.
    #[must_use]
    pub fn resolve_both(&self, a: PersonId, b: PersonId) -> (Relationship, Relationship) {
        (self.resolve(a, b), self.resolve(b, a))
    }

    fn tokens(&self, source: PersonId, path: &[Step]) -> Option<Vec<KinToken>> {
        (0..path.len())
            .map(|index| self.token(source, path, index))
            .collect()
    }

    fn token(&self, source: PersonId, path: &[Step], index: usize) -> Option<KinToken> {
        let step = path.get(index)?;
        let target = self.graph.person(step.to)?.gender;

        match step.kind {
            StepKind::Parent => match target {
                Gender::Male => Some(KinToken::Father),
                Gender::Female => Some(KinToken::Mother),
                Gender::Unknown => None,
            },
            StepKind::Child => match target {
                Gender::Male => Some(KinToken::Son),
                Gender::Female => Some(KinToken::Daughter),
                Gender::Unknown => None,
            },
            StepKind::Spouse => match (self.graph.person(step.from)?.gender, target) {
                (Gender::Male, _) => Some(KinToken::Wife),
                (Gender::Female, _) => Some(KinToken::Husband),
                (Gender::Unknown, Gender::Male) => Some(KinToken::Husband),
                (Gender::Unknown, Gender::Female) => Some(KinToken::Wife),
                (Gender::Unknown, Gender::Unknown) => None,
            },
            StepKind::Sibling => {
                let basis = comparison_basis(self.graph, source, path, index)?;
                let elder = determine_elder_younger(basis) == Seniority::Elder;
                match (target, elder) {
                    (Gender::Male, true) => Some(KinToken::ElderBrother),
                    (Gender::Male, false) => Some(KinToken::YoungerBrother),
                    (Gender::Female, true) => Some(KinToken::ElderSister),
                    (Gender::Female, false) => Some(KinToken::YoungerSister),
                    (Gender::Unknown, _) => None,
                }
            }
        }
    }

    fn cousin_suffix(&self, source: PersonId, target: PersonId) -> Option<AgeSuffix> {
        let source_age = self.graph.person(source)?.age?;
        let target_age = self.graph.person(target)?.age?;
        match target_age.partial_cmp(&source_age)? {
            Ordering::Greater => Some(AgeSuffix::Older),
            Ordering::Less => Some(AgeSuffix::Younger),
            Ordering::Equal => None,
        }
    }
}
