//! Kinship Relationship Resolver
//!
//! Converts an ordered pair of people into a genealogical relationship code
//! (`F` = father, `FB+` = father's elder brother, `FB-D+` = father's younger
//! brother's daughter, older than the source).
//!
//! # Algorithm
//!
//! 1. Breadth-first search over parent, child, spouse and sibling edges, in
//!    that fixed order ([`EXPLORATION_ORDER`])
//! 2. One token per step, named from the arriving person's gender (spouse
//!    steps from the departing person's gender)
//! 3. Sibling steps compare seniority against the parent just visited, or
//!    the query source otherwise
//! 4. Cousin codes take a trailing `+`/`-` from the age comparison
//!
//! # Example
//!
//! ```rust
//! use kin_graph::{Gender, NewPerson, PersonGraph, RelationKind};
//! use kin_resolver::RelationshipResolver;
//!
//! let mut graph = PersonGraph::new();
//! let father = graph.add_person(NewPerson::new("Arthur", Gender::Male)).unwrap();
//! let son = graph.add_person(NewPerson::new("Ben", Gender::Male)).unwrap();
//! graph.add_relation(father, son, RelationKind::ParentChild).unwrap();
//!
//! let resolver = RelationshipResolver::new(&graph);
//! assert_eq!(resolver.resolve(son, father).code.to_string(), "F");
//! assert_eq!(resolver.resolve(father, son).code.to_string(), "S");
//! ```

#![warn(missing_docs)]

pub mod code;
pub mod error;
pub mod resolver;
pub mod search;
pub mod seniority;

// Re-exports
pub use code::{AgeSuffix, KinToken, RelationshipCode, COUSIN_CODES};
pub use error::CodeParseError;
pub use resolver::{Relationship, RelationshipResolver};
pub use search::{find_path, Step, StepKind, EXPLORATION_ORDER};
pub use seniority::{comparison_basis, determine_elder_younger, ComparisonBasis, Seniority};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
