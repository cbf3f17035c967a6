//! Graph configuration

use serde::{Deserialize, Serialize};

/// Behavioural switches for [`PersonGraph`](crate::PersonGraph)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GraphConfig {
    /// Designate the first person ever added as root (generation 0)
    pub implicit_root: bool,
}

impl GraphConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With implicit root designation on or off
    #[inline]
    #[must_use]
    pub fn with_implicit_root(mut self, enabled: bool) -> Self {
        self.implicit_root = enabled;
        self
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            implicit_root: true,
        }
    }
}
