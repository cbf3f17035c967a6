//! Elder/younger decisions for sibling steps

use crate::search::{Step, StepKind};
use kin_graph::{Person, PersonGraph, PersonId};
use std::cmp::Ordering;

/// Relative seniority of a sibling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seniority {
    /// Sibling is older than the comparison basis
    Elder,
    /// Sibling is younger, or no evidence either way
    Younger,
}

/// The pair compared when naming a sibling step
#[derive(Debug, Clone, Copy)]
pub struct ComparisonBasis<'a> {
    /// Person the sibling is measured against
    pub from: &'a Person,
    /// The sibling
    pub to: &'a Person,
}

/// Pick the basis for the sibling step at `index` of `path`.
///
/// Right after a parent step the sibling is compared against the parent just
/// visited (so `FB+` means the father's elder brother); otherwise against the
/// query source.
#[must_use]
pub fn comparison_basis<'a>(
    graph: &'a PersonGraph,
    source: PersonId,
    path: &[Step],
    index: usize,
) -> Option<ComparisonBasis<'a>> {
    let step = path.get(index)?;
    let from = match index.checked_sub(1).and_then(|i| path.get(i)) {
        Some(previous) if previous.kind == StepKind::Parent => previous.to,
        _ => source,
    };
    Some(ComparisonBasis {
        from: graph.person(from)?,
        to: graph.person(step.to)?,
    })
}

/// Decide whether `basis.to` is elder or younger than `basis.from`.
///
/// Evidence in order: age (higher is elder), birth order (lower is elder,
/// 0 counts as missing), generation (lower is elder). Ties and missing data
/// fall through to the next rule; with nothing left the answer is younger.
#[must_use]
pub fn determine_elder_younger(basis: ComparisonBasis<'_>) -> Seniority {
    let ComparisonBasis { from, to } = basis;

    if let (Some(to_age), Some(from_age)) = (to.age, from.age) {
        match to_age.partial_cmp(&from_age) {
            Some(Ordering::Greater) => return Seniority::Elder,
            Some(Ordering::Less) => return Seniority::Younger,
            _ => {}
        }
    }

    if let (Some(to_order), Some(from_order)) = (to.known_birth_order(), from.known_birth_order()) {
        match to_order.cmp(&from_order) {
            Ordering::Less => return Seniority::Elder,
            Ordering::Greater => return Seniority::Younger,
            Ordering::Equal => {}
        }
    }

    if let (Some(to_gen), Some(from_gen)) = (to.generation(), from.generation()) {
        match to_gen.cmp(&from_gen) {
            Ordering::Less => return Seniority::Elder,
            Ordering::Greater => return Seniority::Younger,
            Ordering::Equal => {}
        }
    }

    Seniority::Younger
}

#[cfg(test)]
mod tests {
    use super::*;
    use kin_graph::{Gender, NewPerson};

    fn pair(from: NewPerson, to: NewPerson) -> (PersonGraph, PersonId, PersonId) {
        let mut graph = PersonGraph::new();
        let a = graph.add_person(from).unwrap();
        let b = graph.add_person(to).unwrap();
        (graph, a, b)
    }

    fn decide(graph: &PersonGraph, from: PersonId, to: PersonId) -> Seniority {
        determine_elder_younger(ComparisonBasis {
            from: graph.person(from).unwrap(),
            to: graph.person(to).unwrap(),
        })
    }

    #[test]
    fn age_decides_first() {
        let (graph, a, b) = pair(
            NewPerson::new("A", Gender::Male).with_age(30.0).with_birth_order(1),
            NewPerson::new("B", Gender::Male).with_age(40.0).with_birth_order(2),
        );
        assert_eq!(decide(&graph, a, b), Seniority::Elder);
        assert_eq!(decide(&graph, b, a), Seniority::Younger);
    }

    #[test]
    fn birth_order_used_when_age_missing() {
        let (graph, a, b) = pair(
            NewPerson::new("A", Gender::Male).with_age(30.0).with_birth_order(2),
            NewPerson::new("B", Gender::Male).with_birth_order(1),
        );
        assert_eq!(decide(&graph, a, b), Seniority::Elder);
    }

    #[test]
    fn equal_ages_fall_through_to_birth_order() {
        let (graph, a, b) = pair(
            NewPerson::new("A", Gender::Male).with_age(7.0).with_birth_order(1),
            NewPerson::new("B", Gender::Female).with_age(7.0).with_birth_order(2),
        );
        assert_eq!(decide(&graph, a, b), Seniority::Younger);
        assert_eq!(decide(&graph, b, a), Seniority::Elder);
    }

    #[test]
    fn generation_used_as_last_evidence() {
        // Only the root has a generation here, so there is no evidence.
        let (mut graph, a, b) = pair(
            NewPerson::new("A", Gender::Male),
            NewPerson::new("B", Gender::Female),
        );
        assert_eq!(decide(&graph, a, b), Seniority::Younger);

        let c = graph.add_person(NewPerson::new("C", Gender::Male)).unwrap();
        graph.add_relation(a, c, kin_graph::RelationKind::ParentChild).unwrap();
        assert_eq!(decide(&graph, c, a), Seniority::Elder);
        assert_eq!(decide(&graph, a, c), Seniority::Younger);
    }

    #[test]
    fn basis_after_parent_step_is_the_parent() {
        let source = PersonId::new(1);
        let parent = PersonId::new(2);
        let uncle = PersonId::new(3);
        let mut graph = PersonGraph::new();
        for name in ["C", "F", "U"] {
            graph.add_person(NewPerson::new(name, Gender::Male)).unwrap();
        }
        let path = [
            Step { kind: StepKind::Parent, from: source, to: parent },
            Step { kind: StepKind::Sibling, from: parent, to: uncle },
        ];

        let basis = comparison_basis(&graph, source, &path, 1).unwrap();
        assert_eq!(basis.from.id, parent);
        assert_eq!(basis.to.id, uncle);

        let path = [
            Step { kind: StepKind::Spouse, from: source, to: parent },
            Step { kind: StepKind::Sibling, from: parent, to: uncle },
        ];
        let basis = comparison_basis(&graph, source, &path, 1).unwrap();
        assert_eq!(basis.from.id, source);
    }
}
