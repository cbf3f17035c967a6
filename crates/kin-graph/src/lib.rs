//! Kinship Graph
//!
//! In-memory family graph with mirrored edges, generation numbering and
//! derived sibling closure.
//!
//! # Overview
//!
//! - **PersonGraph**: owns every person and all parent/child/spouse/sibling edges
//! - **Person**: identity, display fields and relational state
//! - **SiblingUpdate**: pure sibling-closure computation applied after each
//!   parent-child edge
//!
//! # Example
//!
//! ```rust
//! use kin_graph::{Gender, NewPerson, PersonGraph, RelationKind};
//!
//! let mut graph = PersonGraph::new();
//! let father = graph.add_person(NewPerson::new("Arthur", Gender::Male)).unwrap();
//! let son = graph.add_person(NewPerson::new("Ben", Gender::Male)).unwrap();
//! graph.add_relation(father, son, RelationKind::ParentChild).unwrap();
//!
//! assert_eq!(graph.person(father).unwrap().generation(), Some(0));
//! assert_eq!(graph.person(son).unwrap().generation(), Some(1));
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod graph;
mod ordering;
pub mod person;
pub mod siblings;

// Re-exports
pub use config::GraphConfig;
pub use error::GraphError;
pub use graph::{PersonGraph, RelationKind};
pub use person::{Gender, LifeStatus, NewPerson, Person, PersonId};
pub use siblings::{sibling_closure, SiblingUpdate};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for building family graphs
    pub use crate::{
        Gender, GraphConfig, GraphError, LifeStatus, NewPerson, Person, PersonGraph, PersonId,
        RelationKind,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
