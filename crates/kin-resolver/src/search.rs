//! Breadth-first path search over tagged kinship edges
//!
//! Traversal treats the graph as undirected and unweighted, but every edge
//! keeps its kind so the path can be translated into tokens afterwards.
//! Neighbours are expanded in [`EXPLORATION_ORDER`]; among several shortest
//! paths, the first one discovered in that order wins.

use indexmap::IndexSet;
use kin_graph::{Person, PersonGraph, PersonId};
use std::collections::{HashMap, HashSet, VecDeque};

/// Kind of edge followed by one path step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    /// Move to a parent
    Parent,
    /// Move to a child
    Child,
    /// Move to a spouse
    Spouse,
    /// Move to a sibling
    Sibling,
}

/// Neighbour expansion order; this is the tie-break policy between
/// equal-length paths.
pub const EXPLORATION_ORDER: [StepKind; 4] = [
    StepKind::Parent,
    StepKind::Child,
    StepKind::Spouse,
    StepKind::Sibling,
];

impl StepKind {
    /// Neighbours of `person` reachable by this kind of step
    #[must_use]
    pub fn neighbours(self, person: &Person) -> &IndexSet<PersonId> {
        match self {
            Self::Parent => person.parents(),
            Self::Child => person.children(),
            Self::Spouse => person.spouses(),
            Self::Sibling => person.siblings(),
        }
    }

    /// Generation change contributed by this step
    #[must_use]
    pub const fn generation_delta(self) -> i32 {
        match self {
            Self::Parent => -1,
            Self::Child => 1,
            Self::Spouse | Self::Sibling => 0,
        }
    }
}

/// One traversed edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Edge kind
    pub kind: StepKind,
    /// Departing person
    pub from: PersonId,
    /// Arriving person
    pub to: PersonId,
}

/// Shortest path from `source` to `target`.
///
/// Returns an empty path when both ids are equal and `None` when the target
/// is unreachable. Neighbour ids that do not resolve are skipped.
#[must_use]
pub fn find_path(graph: &PersonGraph, source: PersonId, target: PersonId) -> Option<Vec<Step>> {
    if source == target {
        return Some(Vec::new());
    }

    let mut visited = HashSet::from([source]);
    let mut came_from: HashMap<PersonId, Step> = HashMap::new();
    let mut queue = VecDeque::from([source]);

    while let Some(current) = queue.pop_front() {
        let Some(person) = graph.person(current) else {
            continue;
        };

        for kind in EXPLORATION_ORDER {
            for &next in kind.neighbours(person) {
                if !graph.contains(next) || !visited.insert(next) {
                    continue;
                }
                came_from.insert(
                    next,
                    Step {
                        kind,
                        from: current,
                        to: next,
                    },
                );
                if next == target {
                    return Some(rebuild(&came_from, source, target));
                }
                queue.push_back(next);
            }
        }
    }

    None
}

fn rebuild(came_from: &HashMap<PersonId, Step>, source: PersonId, target: PersonId) -> Vec<Step> {
    let mut path = Vec::new();
    let mut cursor = target;
    while cursor != source {
        let Some(step) = came_from.get(&cursor) else {
            break;
        };
        path.push(*step);
        cursor = step.from;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use kin_graph::{Gender, NewPerson, RelationKind};

    #[test]
    fn first_discovered_shortest_path_wins() {
        // `t` is two steps from `a` both as the first parent's spouse and as
        // the second parent's sibling; the first parent is expanded first.
        let mut graph = PersonGraph::new();
        let a = graph.add_person(NewPerson::new("A", Gender::Male)).unwrap();
        let p1 = graph.add_person(NewPerson::new("P1", Gender::Male)).unwrap();
        let p2 = graph.add_person(NewPerson::new("P2", Gender::Female)).unwrap();
        let t = graph.add_person(NewPerson::new("T", Gender::Female)).unwrap();
        graph.add_relation(p1, a, RelationKind::ParentChild).unwrap();
        graph.add_relation(p2, a, RelationKind::ParentChild).unwrap();
        graph.add_relation(p1, t, RelationKind::Spouse).unwrap();
        graph.add_relation(p2, t, RelationKind::Sibling).unwrap();

        let path = find_path(&graph, a, t).unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path[0].kind, StepKind::Parent);
        assert_eq!(path[0].to, p1);
        assert_eq!(path[1].kind, StepKind::Spouse);
    }

    #[test]
    fn steps_are_tagged_with_edge_kind() {
        let mut graph = PersonGraph::new();
        let grandma = graph.add_person(NewPerson::new("G", Gender::Female)).unwrap();
        let mother = graph.add_person(NewPerson::new("M", Gender::Female)).unwrap();
        let aunt = graph.add_person(NewPerson::new("A", Gender::Female)).unwrap();
        graph.add_relation(grandma, mother, RelationKind::ParentChild).unwrap();
        graph.add_relation(grandma, aunt, RelationKind::ParentChild).unwrap();

        let path = find_path(&graph, mother, aunt).unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path[0].kind, StepKind::Sibling);

        let path = find_path(&graph, mother, grandma).unwrap();
        assert_eq!(path[0].kind, StepKind::Parent);
    }

    #[test]
    fn same_person_has_empty_path() {
        let mut graph = PersonGraph::new();
        let a = graph.add_person(NewPerson::new("A", Gender::Male)).unwrap();
        assert_eq!(find_path(&graph, a, a), Some(Vec::new()));
    }

    #[test]
    fn unreachable_target_has_no_path() {
        let mut graph = PersonGraph::new();
        let a = graph.add_person(NewPerson::new("A", Gender::Male)).unwrap();
        let b = graph.add_person(NewPerson::new("B", Gender::Male)).unwrap();
        assert_eq!(find_path(&graph, a, b), None);
    }

    #[test]
    fn path_steps_chain_together() {
        let mut graph = PersonGraph::new();
        let a = graph.add_person(NewPerson::new("A", Gender::Male)).unwrap();
        let b = graph.add_person(NewPerson::new("B", Gender::Male)).unwrap();
        let c = graph.add_person(NewPerson::new("C", Gender::Female)).unwrap();
        graph.add_relation(a, b, RelationKind::ParentChild).unwrap();
        graph.add_relation(b, c, RelationKind::Spouse).unwrap();

        let path = find_path(&graph, a, c).unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path[0].from, a);
        assert_eq!(path[0].to, path[1].from);
        assert_eq!(path[1].to, c);
        assert_eq!(path[1].kind, StepKind::Spouse);
    }
}
