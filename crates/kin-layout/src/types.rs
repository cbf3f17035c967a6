//! Layout output types

use crate::config::LayoutConfig;
use indexmap::IndexMap;
use kin_graph::PersonId;
use serde::{Deserialize, Serialize};

/// Card centre
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal centre
    pub x: f64,
    /// Vertical centre
    pub y: f64,
}

impl Position {
    /// Create a position
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Kind of abstract connector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConnectionKind {
    /// Couple placed side by side
    Spouse,
    /// Parent to child
    ParentChild,
}

/// Abstract connector between two placed cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Connection {
    /// Left spouse, or parent
    pub from: PersonId,
    /// Right spouse, or child
    pub to: PersonId,
    /// Connector kind
    pub kind: ConnectionKind,
}

/// Rectangle enclosing every card
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    /// Leftmost card edge
    pub min_x: f64,
    /// Topmost card edge
    pub min_y: f64,
    /// Rightmost card edge
    pub max_x: f64,
    /// Bottom card edge
    pub max_y: f64,
}

impl Bounds {
    /// Horizontal extent
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Vertical extent
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Computed positions and connectors
///
/// `positions` only holds people that could be placed; a partial map is a
/// valid result for a malformed graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Card centre per person, in placement order
    pub positions: IndexMap<PersonId, Position>,
    /// Spouse connectors in placement order, then parent-child connectors
    pub connections: Vec<Connection>,
}

impl Layout {
    /// Position of one person
    #[inline]
    #[must_use]
    pub fn position(&self, id: PersonId) -> Option<Position> {
        self.positions.get(&id).copied()
    }

    /// Whether nobody was placed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Enclosing rectangle of all cards, `None` when empty
    #[must_use]
    pub fn bounds(&self, config: &LayoutConfig) -> Option<Bounds> {
        let half_w = config.card_width / 2.0;
        let half_h = config.card_height / 2.0;
        self.positions.values().fold(None, |acc, p| {
            let card = Bounds {
                min_x: p.x - half_w,
                min_y: p.y - half_h,
                max_x: p.x + half_w,
                max_y: p.y + half_h,
            };
            Some(match acc {
                None => card,
                Some(b) => Bounds {
                    min_x: b.min_x.min(card.min_x),
                    min_y: b.min_y.min(card.min_y),
                    max_x: b.max_x.max(card.max_x),
                    max_y: b.max_y.max(card.max_y),
                },
            })
        })
    }

    /// Connectors of one kind
    pub fn connections_of(&self, kind: ConnectionKind) -> impl Iterator<Item = &Connection> + '_ {
        self.connections.iter().filter(move |c| c.kind == kind)
    }
}
