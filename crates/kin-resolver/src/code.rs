//! Relationship codes
//!
//! A code is either a sentinel (`SELF`, `UNRELATED`, `UNKNOWN`) or a
//! concatenation of step tokens, optionally followed by an age suffix:
//!
//! ```text
//! code   := SELF | UNRELATED | UNKNOWN | token+ [suffix]
//! token  := F | M | S | D | H | W | B+ | B- | Z+ | Z-
//! suffix := + | -      (cousin codes only)
//! ```
//!
//! Codes are opaque lookup keys for label tables; [`RelationshipCode::description`]
//! only offers a plain English gloss.

use crate::error::CodeParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Base codes that take a trailing age suffix
pub const COUSIN_CODES: [&str; 8] = [
    "FB-D", "FB-S", "MZ-D", "MZ-S", "FB+S", "FB+D", "MZ+S", "MZ+D",
];

/// One step of a relationship path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KinToken {
    /// `F`
    Father,
    /// `M`
    Mother,
    /// `S`
    Son,
    /// `D`
    Daughter,
    /// `H`
    Husband,
    /// `W`
    Wife,
    /// `B+`
    ElderBrother,
    /// `B-`
    YoungerBrother,
    /// `Z+`
    ElderSister,
    /// `Z-`
    YoungerSister,
}

impl KinToken {
    /// Code text
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Father => "F",
            Self::Mother => "M",
            Self::Son => "S",
            Self::Daughter => "D",
            Self::Husband => "H",
            Self::Wife => "W",
            Self::ElderBrother => "B+",
            Self::YoungerBrother => "B-",
            Self::ElderSister => "Z+",
            Self::YoungerSister => "Z-",
        }
    }

    /// English gloss
    #[must_use]
    pub const fn gloss(self) -> &'static str {
        match self {
            Self::Father => "father",
            Self::Mother => "mother",
            Self::Son => "son",
            Self::Daughter => "daughter",
            Self::Husband => "husband",
            Self::Wife => "wife",
            Self::ElderBrother => "elder brother",
            Self::YoungerBrother => "younger brother",
            Self::ElderSister => "elder sister",
            Self::YoungerSister => "younger sister",
        }
    }
}

/// Age suffix for cousin codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgeSuffix {
    /// Target is older than the source (`+`)
    Older,
    /// Target is younger than the source (`-`)
    Younger,
}

impl AgeSuffix {
    /// Code text
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Older => "+",
            Self::Younger => "-",
        }
    }
}

/// A relationship code
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RelationshipCode {
    /// Source and target are the same person
    SelfRef,
    /// No path connects source and target
    Unrelated,
    /// A person is missing or a step could not be named
    Unknown,
    /// Tokens along the shortest path
    Path {
        /// One token per step
        tokens: Vec<KinToken>,
        /// Cousin age suffix
        suffix: Option<AgeSuffix>,
    },
}

impl RelationshipCode {
    /// Path code without suffix
    #[must_use]
    pub fn path(tokens: Vec<KinToken>) -> Self {
        Self::Path {
            tokens,
            suffix: None,
        }
    }

    /// Tokens of a path code; empty for sentinels
    #[must_use]
    pub fn tokens(&self) -> &[KinToken] {
        match self {
            Self::Path { tokens, .. } => tokens,
            _ => &[],
        }
    }

    /// Code text without the age suffix
    #[must_use]
    pub fn base(&self) -> String {
        match self {
            Self::Path { tokens, .. } => tokens.iter().map(|t| t.as_str()).collect(),
            other => other.to_string(),
        }
    }

    /// Whether the base code is one of [`COUSIN_CODES`]
    #[must_use]
    pub fn is_cousin(&self) -> bool {
        matches!(self, Self::Path { .. }) && COUSIN_CODES.contains(&self.base().as_str())
    }

    /// Plain English gloss, e.g. `father's elder brother`
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::SelfRef => "self".to_string(),
            Self::Unrelated => "unrelated".to_string(),
            Self::Unknown => "unknown".to_string(),
            Self::Path { tokens, suffix } => {
                let mut text = tokens
                    .iter()
                    .map(|t| t.gloss())
                    .collect::<Vec<_>>()
                    .join("'s ");
                match suffix {
                    Some(AgeSuffix::Older) => text.push_str(" (older)"),
                    Some(AgeSuffix::Younger) => text.push_str(" (younger)"),
                    None => {}
                }
                text
            }
        }
    }
}

impl fmt::Display for RelationshipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelfRef => f.write_str("SELF"),
            Self::Unrelated => f.write_str("UNRELATED"),
            Self::Unknown => f.write_str("UNKNOWN"),
            Self::Path { tokens, suffix } => {
                for token in tokens {
                    f.write_str(token.as_str())?;
                }
                if let Some(suffix) = suffix {
                    f.write_str(suffix.as_str())?;
                }
                Ok(())
            }
        }
    }
}

impl FromStr for RelationshipCode {
    type Err = CodeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => return Err(CodeParseError::Empty),
            "SELF" => return Ok(Self::SelfRef),
            "UNRELATED" => return Ok(Self::Unrelated),
            "UNKNOWN" => return Ok(Self::Unknown),
            _ => {}
        }

        let chars: Vec<char> = s.chars().collect();
        let mut tokens = Vec::new();
        let mut suffix = None;
        let mut pos = 0;

        while pos < chars.len() {
            let token = match chars[pos] {
                'F' => KinToken::Father,
                'M' => KinToken::Mother,
                'S' => KinToken::Son,
                'D' => KinToken::Daughter,
                'H' => KinToken::Husband,
                'W' => KinToken::Wife,
                c @ ('B' | 'Z') => {
                    let elder = match chars.get(pos + 1) {
                        Some('+') => true,
                        Some('-') => false,
                        _ => return Err(CodeParseError::MissingSeniority { position: pos }),
                    };
                    pos += 1;
                    match (c, elder) {
                        ('B', true) => KinToken::ElderBrother,
                        ('B', false) => KinToken::YoungerBrother,
                        (_, true) => KinToken::ElderSister,
                        (_, false) => KinToken::YoungerSister,
                    }
                }
                sign @ ('+' | '-') if pos + 1 == chars.len() && !tokens.is_empty() => {
                    suffix = Some(if sign == '+' {
                        AgeSuffix::Older
                    } else {
                        AgeSuffix::Younger
                    });
                    pos += 1;
                    continue;
                }
                other => {
                    return Err(CodeParseError::UnexpectedChar {
                        found: other,
                        position: pos,
                    })
                }
            };
            tokens.push(token);
            pos += 1;
        }

        let code = Self::Path { tokens, suffix };
        if suffix.is_some() && !code.is_cousin() {
            return Err(CodeParseError::MisplacedSuffix(s.to_string()));
        }
        Ok(code)
    }
}

impl TryFrom<String> for RelationshipCode {
    type Error = CodeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RelationshipCode> for String {
    fn from(code: RelationshipCode) -> Self {
        code.to_string()
    }
}
