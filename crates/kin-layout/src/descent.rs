//! Descent view of a family graph
//!
//! Parent-to-child edges only, as a `petgraph` map keyed by person id. Used
//! to find the people the layout starts from.

use kin_graph::{PersonGraph, PersonId};
use petgraph::graphmap::DiGraphMap;
use petgraph::Direction;

/// Directed parent → child graph
#[derive(Debug, Clone)]
pub struct DescentGraph {
    inner: DiGraphMap<PersonId, ()>,
}

impl DescentGraph {
    /// Build from a family graph, dropping edges to ids that do not resolve
    #[must_use]
    pub fn from_graph(graph: &PersonGraph) -> Self {
        let mut inner = DiGraphMap::new();
        for person in graph.people() {
            inner.add_node(person.id);
        }
        for person in graph.people() {
            for &child in person.children() {
                if graph.contains(child) && child != person.id {
                    inner.add_edge(person.id, child, ());
                }
            }
        }
        Self { inner }
    }

    /// People without recorded parents
    #[must_use]
    pub fn entry_nodes(&self) -> Vec<PersonId> {
        self.inner
            .nodes()
            .filter(|n| {
                self.inner
                    .neighbors_directed(*n, Direction::Incoming)
                    .next()
                    .is_none()
            })
            .collect()
    }

    /// Number of parent-child edges
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }
}
