//! Layout engine
//!
//! Two passes over the graph:
//!
//! 1. **Widths** (bottom-up): every couple reserves the larger of its own
//!    width and the summed subtree widths of its children.
//! 2. **Placement** (top-down): root couples are laid left to right, each
//!    centred in its reserved span; children split the span below in birth
//!    order, always on a row below the couple. Anyone already placed is
//!    skipped when met again.
//!
//! A final pass shifts all x coordinates so the leftmost card edge sits at
//! the configured padding.

use crate::config::LayoutConfig;
use crate::descent::DescentGraph;
use crate::types::{Connection, ConnectionKind, Layout, Position};
use crate::width::{couple_children, couple_partner, SubtreeWidths};
use indexmap::IndexMap;
use kin_graph::{PersonGraph, PersonId};

/// Deterministic hierarchical layout
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    /// Create an engine with the given geometry
    #[inline]
    #[must_use]
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Active geometry
    #[inline]
    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Compute positions and connectors for every placeable person
    ///
    /// People without a generation, and their descendants reachable only
    /// through them, are left out. Pure function of the graph.
    #[must_use]
    pub fn layout(&self, graph: &PersonGraph) -> Layout {
        let Some(min_generation) = graph.people().filter_map(|p| p.generation()).min() else {
            return Layout::default();
        };

        let mut roots: Vec<(i32, PersonId)> = DescentGraph::from_graph(graph)
            .entry_nodes()
            .into_iter()
            .filter_map(|id| Some((graph.person(id)?.generation()?, id)))
            .collect();
        roots.sort_unstable();

        let mut placement = Placement {
            graph,
            config: &self.config,
            widths: SubtreeWidths::new(graph, &self.config),
            positions: IndexMap::new(),
            connections: Vec::new(),
            min_generation,
        };

        let mut cursor = 0.0;
        for (_, root) in roots {
            if placement.positions.contains_key(&root) {
                continue;
            }
            let span = placement.widths.width(root);
            placement.place(root, cursor, 0.0);
            cursor += span + self.config.horizontal_gap;
        }

        let Placement {
            mut positions,
            mut connections,
            ..
        } = placement;

        self.normalize(&mut positions);
        connections.extend(parent_child_connections(graph, &positions));

        tracing::debug!(
            "Laid out {} of {} people with {} connections",
            positions.len(),
            graph.len(),
            connections.len()
        );

        Layout {
            positions,
            connections,
        }
    }

    fn normalize(&self, positions: &mut IndexMap<PersonId, Position>) {
        let half = self.config.card_width / 2.0;
        let Some(left) = positions.values().map(|p| p.x - half).reduce(f64::min) else {
            return;
        };
        let shift = self.config.padding - left;
        for position in positions.values_mut() {
            position.x += shift;
        }
    }
}

/// Lay out `graph` with default geometry
#[must_use]
pub fn layout(graph: &PersonGraph) -> Layout {
    LayoutEngine::default().layout(graph)
}

struct Placement<'a> {
    graph: &'a PersonGraph,
    config: &'a LayoutConfig,
    widths: SubtreeWidths<'a>,
    positions: IndexMap<PersonId, Position>,
    connections: Vec<Connection>,
    min_generation: i32,
}

impl Placement<'_> {
    fn row_y(&self, generation: i32) -> f64 {
        f64::from(generation - self.min_generation) * self.config.row_height()
    }

    /// Place the couple headed by `id` in the span starting at `left`, on
    /// its generation row or at `min_y`, whichever is further down, then its
    /// children below.
    fn place(&mut self, id: PersonId, left: f64, min_y: f64) {
        if self.positions.contains_key(&id) {
            return;
        }
        let Some(generation) = self.graph.person(id).and_then(|p| p.generation()) else {
            return;
        };

        let span = self.widths.width(id);
        // A spouse copied across generations can leave a child on its
        // parent's row; descent always moves down.
        let y = self.row_y(generation).max(min_y);
        let card = self.config.card_width;

        let partner = couple_partner(self.graph, id).filter(|p| !self.positions.contains_key(p));
        let couple = self.config.couple_width(partner.is_some());
        let x = left + (span - couple) / 2.0 + card / 2.0;
        self.positions.insert(id, Position::new(x, y));

        let midpoint = match partner {
            Some(partner) => {
                let partner_x = x + card + self.config.spouse_gap;
                self.positions.insert(partner, Position::new(partner_x, y));
                self.connections.push(Connection {
                    from: id,
                    to: partner,
                    kind: ConnectionKind::Spouse,
                });
                (x + partner_x) / 2.0
            }
            None => x,
        };

        let children = couple_children(self.graph, id);
        if children.is_empty() {
            return;
        }

        let widths: Vec<f64> = children.iter().map(|&c| self.widths.width(c)).collect();
        let total: f64 =
            widths.iter().sum::<f64>() + self.config.horizontal_gap * (widths.len() - 1) as f64;

        // A lone child sits under the couple's midpoint.
        let mut cursor = if children.len() == 1 {
            midpoint - widths[0] / 2.0
        } else {
            left + (span - total) / 2.0
        };

        let child_min_y = y + self.config.row_height();
        for (child, width) in children.into_iter().zip(widths) {
            if !self.positions.contains_key(&child) {
                self.place(child, cursor, child_min_y);
            }
            cursor += width + self.config.horizontal_gap;
        }
    }
}

fn parent_child_connections(
    graph: &PersonGraph,
    positions: &IndexMap<PersonId, Position>,
) -> Vec<Connection> {
    let mut connections = Vec::new();
    for parent in graph.people() {
        if !positions.contains_key(&parent.id) {
            continue;
        }
        for &child in parent.children() {
            if positions.contains_key(&child) {
                connections.push(Connection {
                    from: parent.id,
                    to: child,
                    kind: ConnectionKind::ParentChild,
                });
            }
        }
    }
    connections
}

#[cfg(test)]
mod tests {
    use super::*;
    use kin_graph::{Gender, NewPerson, RelationKind};

    #[test]
    fn empty_graph_has_empty_layout() {
        assert!(layout(&PersonGraph::new()).is_empty());
    }

    #[test]
    fn couple_sits_side_by_side() {
        let mut graph = PersonGraph::new();
        let a = graph.add_person(NewPerson::new("A", Gender::Male)).unwrap();
        let b = graph.add_person(NewPerson::new("B", Gender::Female)).unwrap();
        graph.add_relation(a, b, RelationKind::Spouse).unwrap();

        let config = LayoutConfig::default();
        let result = LayoutEngine::new(config).layout(&graph);
        let pa = result.position(a).unwrap();
        let pb = result.position(b).unwrap();

        assert_eq!(pa.y, pb.y);
        assert_eq!(pb.x - pa.x, config.card_width + config.spouse_gap);
        assert_eq!(pa.x - config.card_width / 2.0, config.padding);
        assert_eq!(result.connections_of(ConnectionKind::Spouse).count(), 1);
    }

    #[test]
    fn single_child_is_centred_under_couple() {
        let mut graph = PersonGraph::new();
        let a = graph.add_person(NewPerson::new("A", Gender::Male)).unwrap();
        let b = graph.add_person(NewPerson::new("B", Gender::Female)).unwrap();
        let c = graph.add_person(NewPerson::new("C", Gender::Male)).unwrap();
        graph.add_relation(a, b, RelationKind::Spouse).unwrap();
        graph.add_relation(a, c, RelationKind::ParentChild).unwrap();
        graph.add_relation(b, c, RelationKind::ParentChild).unwrap();

        let result = layout(&graph);
        let midpoint = (result.position(a).unwrap().x + result.position(b).unwrap().x) / 2.0;
        let child = result.position(c).unwrap();

        assert_eq!(child.x, midpoint);
        assert_eq!(child.y, LayoutConfig::default().row_height());
        assert_eq!(result.connections_of(ConnectionKind::ParentChild).count(), 2);
    }

    #[test]
    fn people_without_generation_are_skipped() {
        let mut graph = PersonGraph::new();
        let root = graph.add_person(NewPerson::new("R", Gender::Male)).unwrap();
        let floating = graph.add_person(NewPerson::new("X", Gender::Female)).unwrap();

        let result = layout(&graph);
        assert!(result.position(root).is_some());
        assert!(result.position(floating).is_none());
    }

    #[test]
    fn disconnected_roots_are_laid_left_to_right() {
        let mut graph = PersonGraph::new();
        let a = graph.add_person(NewPerson::new("A", Gender::Male)).unwrap();
        let b = graph.add_person(NewPerson::new("B", Gender::Female)).unwrap();
        // Same generation as `a` through a sibling edge, but no parents.
        graph.add_relation(a, b, RelationKind::Sibling).unwrap();

        let config = LayoutConfig::default();
        let result = LayoutEngine::new(config).layout(&graph);
        let pa = result.position(a).unwrap();
        let pb = result.position(b).unwrap();
        assert_eq!(pb.x - pa.x, config.card_width + config.horizontal_gap);
    }

    fn assert_rows_clear(result: &Layout, card_width: f64) {
        let cards: Vec<_> = result.positions.iter().collect();
        for (i, (a, pa)) in cards.iter().enumerate() {
            for (b, pb) in &cards[i + 1..] {
                if pa.y == pb.y {
                    assert!((pa.x - pb.x).abs() >= card_width, "{a} and {b} overlap");
                }
            }
        }
    }

    #[test]
    fn child_stays_below_spouse_moved_across_generations() {
        let mut graph = PersonGraph::new();
        let g = graph.add_person(NewPerson::new("G", Gender::Male)).unwrap();
        let p = graph.add_person(NewPerson::new("P", Gender::Female)).unwrap();
        let u = graph.add_person(NewPerson::new("U", Gender::Male)).unwrap();
        let h = graph.add_person(NewPerson::new("H", Gender::Male)).unwrap();
        let k = graph.add_person(NewPerson::new("K", Gender::Female)).unwrap();
        graph.add_relation(g, p, RelationKind::ParentChild).unwrap();
        graph.add_relation(g, u, RelationKind::ParentChild).unwrap();
        graph.add_relation(u, h, RelationKind::ParentChild).unwrap();
        graph.add_relation(p, k, RelationKind::ParentChild).unwrap();
        // P takes H's generation; K keeps the one it already had.
        graph.add_relation(h, p, RelationKind::Spouse).unwrap();
        assert_eq!(
            graph.person(p).unwrap().generation(),
            graph.person(k).unwrap().generation()
        );

        let config = LayoutConfig::default();
        let result = LayoutEngine::new(config).layout(&graph);
        let pp = result.position(p).unwrap();
        let ph = result.position(h).unwrap();
        let pk = result.position(k).unwrap();

        assert_eq!(result.positions.len(), 5);
        assert_eq!(ph.y, pp.y);
        assert_eq!(pk.y, pp.y + config.row_height());
        assert_rows_clear(&result, config.card_width);
    }

    #[test]
    fn spouse_placed_in_earlier_group_is_not_moved() {
        let mut graph = PersonGraph::new();
        let g = graph.add_person(NewPerson::new("G", Gender::Male)).unwrap();
        let a = graph.add_person(NewPerson::new("A", Gender::Male)).unwrap();
        let b = graph.add_person(NewPerson::new("B", Gender::Female)).unwrap();
        let y = graph.add_person(NewPerson::new("Y", Gender::Female)).unwrap();
        let x = graph.add_person(NewPerson::new("X", Gender::Male)).unwrap();
        graph.add_relation(g, a, RelationKind::ParentChild).unwrap();
        graph.add_relation(g, b, RelationKind::ParentChild).unwrap();
        graph.add_relation(a, y, RelationKind::ParentChild).unwrap();
        graph.add_relation(b, x, RelationKind::ParentChild).unwrap();
        graph.add_relation(x, y, RelationKind::Spouse).unwrap();

        let config = LayoutConfig::default();
        let result = LayoutEngine::new(config).layout(&graph);
        let px = result.position(x).unwrap();
        let py = result.position(y).unwrap();
        let pb = result.position(b).unwrap();

        // X is pulled next to Y under A and left there when B's group is
        // laid out.
        assert_eq!(px.y, py.y);
        assert_eq!(px.x - py.x, config.card_width + config.spouse_gap);
        assert!(px.x < pb.x);

        let spouses: Vec<_> = result
            .connections_of(ConnectionKind::Spouse)
            .map(|c| (c.from, c.to))
            .collect();
        assert_eq!(spouses, vec![(y, x)]);
        assert_eq!(result.positions.len(), 5);
        assert_rows_clear(&result, config.card_width);
    }
}
