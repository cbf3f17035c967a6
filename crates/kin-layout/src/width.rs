//! Bottom-up subtree widths
//!
//! A person is laid out together with their first recorded spouse as one
//! couple. The subtree width of a couple is the larger of its own width and
//! the summed widths of its children plus the gaps between them.

use crate::config::LayoutConfig;
use kin_graph::{PersonGraph, PersonId};
use std::collections::{HashMap, HashSet};

/// First recorded spouse of `id` that resolves to a person
pub(crate) fn couple_partner(graph: &PersonGraph, id: PersonId) -> Option<PersonId> {
    graph
        .person(id)?
        .spouses()
        .iter()
        .copied()
        .find(|&spouse| spouse != id && graph.contains(spouse))
}

/// Children of the couple headed by `id`: the person's own children first,
/// then any extra children of the partner
pub(crate) fn couple_children(graph: &PersonGraph, id: PersonId) -> Vec<PersonId> {
    let Some(person) = graph.person(id) else {
        return Vec::new();
    };

    let mut children: Vec<PersonId> = person.children().iter().copied().collect();
    if let Some(partner) = couple_partner(graph, id).and_then(|p| graph.person(p)) {
        for &child in partner.children() {
            if !children.contains(&child) {
                children.push(child);
            }
        }
    }
    children.retain(|&child| child != id && graph.contains(child));
    children
}

/// Memoised subtree widths, local to one layout run
#[derive(Debug)]
pub struct SubtreeWidths<'a> {
    graph: &'a PersonGraph,
    config: &'a LayoutConfig,
    memo: HashMap<PersonId, f64>,
    in_progress: HashSet<PersonId>,
}

impl<'a> SubtreeWidths<'a> {
    /// Create an empty cache
    #[must_use]
    pub fn new(graph: &'a PersonGraph, config: &'a LayoutConfig) -> Self {
        Self {
            graph,
            config,
            memo: HashMap::new(),
            in_progress: HashSet::new(),
        }
    }

    /// Width of the couple headed by `id`, without descendants
    #[must_use]
    pub fn couple_width(&self, id: PersonId) -> f64 {
        self.config
            .couple_width(couple_partner(self.graph, id).is_some())
    }

    /// Width needed by the couple headed by `id` and all its descendants
    pub fn width(&mut self, id: PersonId) -> f64 {
        if let Some(&width) = self.memo.get(&id) {
            return width;
        }

        let couple = self.couple_width(id);
        // Cyclic descent: count the couple alone.
        if !self.in_progress.insert(id) {
            return couple;
        }

        let children = couple_children(self.graph, id);
        let width = if children.is_empty() {
            couple
        } else {
            let mut total = self.config.horizontal_gap * (children.len() - 1) as f64;
            for child in children {
                total += self.width(child);
            }
            couple.max(total)
        };

        self.in_progress.remove(&id);
        self.memo.insert(id, width);
        width
    }
}
