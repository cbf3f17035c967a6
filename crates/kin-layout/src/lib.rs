//! Kinship Layout
//!
//! Deterministic 2-D placement of a family graph: one row per generation,
//! couples side by side, children centred under their parents.
//!
//! # Example
//!
//! ```rust
//! use kin_graph::{Gender, NewPerson, PersonGraph, RelationKind};
//! use kin_layout::{LayoutConfig, LayoutEngine};
//!
//! let mut graph = PersonGraph::new();
//! let father = graph.add_person(NewPerson::new("Arthur", Gender::Male)).unwrap();
//! let mother = graph.add_person(NewPerson::new("Beth", Gender::Female)).unwrap();
//! let son = graph.add_person(NewPerson::new("Carl", Gender::Male)).unwrap();
//! graph.add_relation(father, mother, RelationKind::Spouse).unwrap();
//! graph.add_relation(father, son, RelationKind::ParentChild).unwrap();
//!
//! let layout = LayoutEngine::new(LayoutConfig::default()).layout(&graph);
//! let f = layout.position(father).unwrap();
//! let m = layout.position(mother).unwrap();
//! let s = layout.position(son).unwrap();
//! assert_eq!(f.y, m.y);
//! assert!(s.y > f.y);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod descent;
pub mod engine;
pub mod types;
pub mod width;

// Re-exports
pub use config::LayoutConfig;
pub use descent::DescentGraph;
pub use engine::{layout, LayoutEngine};
pub use types::{Bounds, Connection, ConnectionKind, Layout, Position};
pub use width::SubtreeWidths;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
