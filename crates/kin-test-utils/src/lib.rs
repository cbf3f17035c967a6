//! Testing utilities for the kinship workspace
//!
//! Shared family fixtures and a seeded random family generator.

#![allow(missing_docs)]

use kin_graph::{Gender, NewPerson, PersonGraph, PersonId, RelationKind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

fn add(graph: &mut PersonGraph, data: NewPerson) -> PersonId {
    graph.add_person(data).expect("fixture people carry no member ids")
}

fn relate(graph: &mut PersonGraph, a: PersonId, b: PersonId, kind: RelationKind) {
    graph.add_relation(a, b, kind).expect("fixture ids always exist");
}

/// Father, mother, an elder son and a younger daughter.
#[derive(Debug, Clone)]
pub struct DirectLine {
    pub graph: PersonGraph,
    pub father: PersonId,
    pub mother: PersonId,
    pub son: PersonId,
    pub daughter: PersonId,
}

pub fn direct_line() -> DirectLine {
    let mut graph = PersonGraph::new();
    let father = add(&mut graph, NewPerson::new("F1", Gender::Male));
    let mother = add(&mut graph, NewPerson::new("M1", Gender::Female));
    let son = add(&mut graph, NewPerson::new("C1", Gender::Male).with_birth_order(1));
    let daughter = add(&mut graph, NewPerson::new("C2", Gender::Female).with_birth_order(2));

    relate(&mut graph, father, mother, RelationKind::Spouse);
    for child in [son, daughter] {
        relate(&mut graph, father, child, RelationKind::ParentChild);
        relate(&mut graph, mother, child, RelationKind::ParentChild);
    }

    DirectLine {
        graph,
        father,
        mother,
        son,
        daughter,
    }
}

/// A father with an elder and a younger brother; the younger brother has a
/// daughter who is older than the father's son.
#[derive(Debug, Clone)]
pub struct PaternalUncles {
    pub graph: PersonGraph,
    pub father: PersonId,
    pub elder_uncle: PersonId,
    pub younger_uncle: PersonId,
    pub child: PersonId,
    pub cousin: PersonId,
}

pub fn paternal_uncles() -> PaternalUncles {
    let mut graph = PersonGraph::new();
    let father = add(&mut graph, NewPerson::new("F1", Gender::Male).with_age(40.0));
    let elder_uncle = add(&mut graph, NewPerson::new("U1", Gender::Male).with_age(45.0));
    let younger_uncle = add(&mut graph, NewPerson::new("U2", Gender::Male).with_age(35.0));
    let child = add(&mut graph, NewPerson::new("C1", Gender::Male).with_age(10.0));
    let cousin = add(&mut graph, NewPerson::new("X", Gender::Female).with_age(12.0));

    relate(&mut graph, father, elder_uncle, RelationKind::Sibling);
    relate(&mut graph, father, younger_uncle, RelationKind::Sibling);
    relate(&mut graph, father, child, RelationKind::ParentChild);
    relate(&mut graph, younger_uncle, cousin, RelationKind::ParentChild);

    PaternalUncles {
        graph,
        father,
        elder_uncle,
        younger_uncle,
        child,
        cousin,
    }
}

/// Two couples with no connection between them.
#[derive(Debug, Clone)]
pub struct Disconnected {
    pub graph: PersonGraph,
    pub left: PersonId,
    pub right: PersonId,
}

pub fn disconnected() -> Disconnected {
    let mut graph = PersonGraph::new();
    let left = add(&mut graph, NewPerson::new("L", Gender::Male));
    let left_spouse = add(&mut graph, NewPerson::new("L2", Gender::Female));
    let right = add(&mut graph, NewPerson::new("R", Gender::Female));
    let right_child = add(&mut graph, NewPerson::new("R2", Gender::Male));

    relate(&mut graph, left, left_spouse, RelationKind::Spouse);
    relate(&mut graph, right, right_child, RelationKind::ParentChild);

    Disconnected { graph, left, right }
}

/// A couple with three unmarried, childless children.
#[derive(Debug, Clone)]
pub struct ThreeChildren {
    pub graph: PersonGraph,
    pub father: PersonId,
    pub mother: PersonId,
    pub children: [PersonId; 3],
}

pub fn three_children() -> ThreeChildren {
    let mut graph = PersonGraph::new();
    let father = add(&mut graph, NewPerson::new("F", Gender::Male));
    let mother = add(&mut graph, NewPerson::new("M", Gender::Female));
    relate(&mut graph, father, mother, RelationKind::Spouse);

    let children = [1u32, 2, 3].map(|order| {
        let child = add(
            &mut graph,
            NewPerson::new(format!("C{order}"), Gender::Unknown).with_birth_order(order),
        );
        relate(&mut graph, father, child, RelationKind::ParentChild);
        relate(&mut graph, mother, child, RelationKind::ParentChild);
        child
    });

    ThreeChildren {
        graph,
        father,
        mother,
        children,
    }
}

/// A woman who marries her nephew's generation: `mother` and `uncle` are
/// children of `grandparent`, `husband` is the uncle's son. Marrying copies
/// the husband's generation onto the mother, and her existing `child` keeps
/// the same generation number as its mother.
#[derive(Debug, Clone)]
pub struct CrossGenerationMarriage {
    pub graph: PersonGraph,
    pub grandparent: PersonId,
    pub mother: PersonId,
    pub uncle: PersonId,
    pub husband: PersonId,
    pub child: PersonId,
}

pub fn cross_generation_marriage() -> CrossGenerationMarriage {
    let mut graph = PersonGraph::new();
    let grandparent = add(&mut graph, NewPerson::new("G", Gender::Male));
    let mother = add(&mut graph, NewPerson::new("P", Gender::Female));
    let uncle = add(&mut graph, NewPerson::new("U", Gender::Male));
    let husband = add(&mut graph, NewPerson::new("H", Gender::Male));
    let child = add(&mut graph, NewPerson::new("K", Gender::Female));

    relate(&mut graph, grandparent, mother, RelationKind::ParentChild);
    relate(&mut graph, grandparent, uncle, RelationKind::ParentChild);
    relate(&mut graph, uncle, husband, RelationKind::ParentChild);
    relate(&mut graph, mother, child, RelationKind::ParentChild);
    relate(&mut graph, husband, mother, RelationKind::Spouse);

    CrossGenerationMarriage {
        graph,
        grandparent,
        mother,
        uncle,
        husband,
        child,
    }
}

fn random_person(rng: &mut StdRng, index: usize) -> NewPerson {
    let gender = if rng.random_bool(0.5) {
        Gender::Male
    } else {
        Gender::Female
    };
    let mut data = NewPerson::new(format!("p{index}"), gender);
    if rng.random_bool(0.7) {
        data = data.with_age(f64::from(rng.random_range(1u32..90)));
    }
    if rng.random_bool(0.5) {
        data = data.with_birth_order(rng.random_range(0u32..5));
    }
    data
}

const MAX_SPOUSES: usize = 2;

fn spouses_of(graph: &PersonGraph, id: PersonId) -> Vec<PersonId> {
    graph
        .person(id)
        .map(|p| p.spouses().iter().copied().collect())
        .unwrap_or_default()
}

/// Everyone linked to `id` through a chain of marriages, `id` included.
fn spouse_cluster(graph: &PersonGraph, id: PersonId) -> HashSet<PersonId> {
    let mut cluster = HashSet::from([id]);
    let mut stack = vec![id];
    while let Some(next) = stack.pop() {
        for spouse in spouses_of(graph, next) {
            if cluster.insert(spouse) {
                stack.push(spouse);
            }
        }
    }
    cluster
}

/// Everyone `id` descends from.
pub fn ancestors(graph: &PersonGraph, id: PersonId) -> HashSet<PersonId> {
    let mut seen = HashSet::new();
    let mut stack = vec![id];
    while let Some(next) = stack.pop() {
        if let Some(person) = graph.person(next) {
            for &parent in person.parents() {
                if seen.insert(parent) {
                    stack.push(parent);
                }
            }
        }
    }
    seen
}

/// Sibling closure hands every child of a married cluster to each parent in
/// it, so a marriage is only safe while nobody in the joined cluster
/// descends from anybody else in it.
fn can_marry(graph: &PersonGraph, a: PersonId, b: PersonId) -> bool {
    if a == b || spouses_of(graph, a).contains(&b) || spouses_of(graph, b).len() >= MAX_SPOUSES {
        return false;
    }
    let mut cluster = spouse_cluster(graph, a);
    cluster.extend(spouse_cluster(graph, b));
    cluster
        .iter()
        .all(|&member| ancestors(graph, member).is_disjoint(&cluster))
}

/// Seeded random family of `size` people (at least one).
///
/// Grows from a root. Each step picks a blood relative, who then
/// - marries a newcomer (up to two spouses, so second marriages happen),
/// - marries another blood relative anywhere in the tree, possibly from a
///   different generation, or
/// - has a child with one of their spouses.
///
/// Every person gets a generation and the descent graph stays acyclic, but
/// generations are not always parent + 1 once blood relatives intermarry.
pub fn random_family(seed: u64, size: usize) -> PersonGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = PersonGraph::new();
    let root = add(&mut graph, random_person(&mut rng, 0));
    let mut blood = vec![root];

    while graph.len() < size.max(1) {
        let index = graph.len();
        let pick = blood[rng.random_range(0..blood.len())];
        let spouses = spouses_of(&graph, pick);
        let roll = rng.random_range(0..10u32);

        if roll < 3 && spouses.len() < MAX_SPOUSES {
            let newcomer = add(&mut graph, random_person(&mut rng, index));
            relate(&mut graph, pick, newcomer, RelationKind::Spouse);
            continue;
        }

        if roll == 3 && spouses.len() < MAX_SPOUSES {
            let other = blood[rng.random_range(0..blood.len())];
            if can_marry(&graph, pick, other) {
                relate(&mut graph, pick, other, RelationKind::Spouse);
            }
            continue;
        }

        let child = add(&mut graph, random_person(&mut rng, index));
        relate(&mut graph, pick, child, RelationKind::ParentChild);
        if !spouses.is_empty() {
            let partner = spouses[rng.random_range(0..spouses.len())];
            relate(&mut graph, partner, child, RelationKind::ParentChild);
        }
        blood.push(child);
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_family_is_reproducible() {
        let a = random_family(7, 30);
        let b = random_family(7, 30);
        assert_eq!(a.len(), 30);

        let gens_a: Vec<_> = a.people().map(|p| p.generation()).collect();
        let gens_b: Vec<_> = b.people().map(|p| p.generation()).collect();
        assert_eq!(gens_a, gens_b);
    }

    #[test]
    fn random_family_is_stamped_and_acyclic() {
        for seed in 0..10 {
            let graph = random_family(seed, 80);
            for person in graph.people() {
                assert!(person.generation().is_some(), "seed {seed}: {} unstamped", person.id);
                assert!(
                    !ancestors(&graph, person.id).contains(&person.id),
                    "seed {seed}: {} is their own ancestor",
                    person.id
                );
            }
        }
    }

    #[test]
    fn random_families_cover_remarriage_and_intermarriage() {
        let mut second_marriage = false;
        let mut spouse_with_parents = false;
        let mut generation_gap = false;

        for seed in 0..40 {
            let graph = random_family(seed, 100);
            for person in graph.people() {
                second_marriage |= person.spouses().len() > 1;
                for &spouse in person.spouses() {
                    let spouse = graph.person(spouse).unwrap();
                    spouse_with_parents |=
                        !person.parents().is_empty() && !spouse.parents().is_empty();
                    generation_gap |= spouse.generation() != person.generation();
                }
            }
        }

        assert!(second_marriage);
        assert!(spouse_with_parents);
        assert!(generation_gap);
    }

    #[test]
    fn cross_generation_marriage_leaves_child_level_with_mother() {
        let family = cross_generation_marriage();
        let generation = |id| family.graph.person(id).unwrap().generation();
        assert_eq!(generation(family.mother), Some(2));
        assert_eq!(generation(family.child), Some(2));
        assert_eq!(generation(family.husband), Some(2));
    }
}
