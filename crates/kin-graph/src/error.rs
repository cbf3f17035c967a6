//! Error types for the family graph
//!
//! Every failing operation leaves the graph untouched, so callers that only
//! care about the happy path may discard the error with `.ok()`.

use crate::person::PersonId;

/// Rejected graph mutation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// Another person already holds this external member id
    #[error("member id already present: {0}")]
    DuplicateMemberId(String),

    /// Referenced person does not exist
    #[error("person not found: {0}")]
    PersonNotFound(PersonId),

    /// Both endpoints of a relation are the same person
    #[error("person cannot be related to themselves: {0}")]
    SelfRelation(PersonId),
}
