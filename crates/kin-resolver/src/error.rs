//! Error types for relationship codes

/// Failure to parse a relationship code string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodeParseError {
    /// Empty input
    #[error("empty relationship code")]
    Empty,

    /// Character outside the code alphabet
    #[error("unexpected character {found:?} at position {position}")]
    UnexpectedChar {
        /// Offending character
        found: char,
        /// Character index
        position: usize,
    },

    /// `B`/`Z` without a following `+` or `-`
    #[error("sibling token at position {position} lacks elder/younger marker")]
    MissingSeniority {
        /// Character index of the sibling token
        position: usize,
    },

    /// Age suffix on a code that is not a cousin code
    #[error("age suffix only applies to cousin codes: {0}")]
    MisplacedSuffix(String),
}
