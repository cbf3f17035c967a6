//! Layout configuration

use serde::{Deserialize, Serialize};

/// Card geometry and spacing, in abstract layout units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    /// Card width
    pub card_width: f64,
    /// Card height
    pub card_height: f64,
    /// Gap between neighbouring sibling subtrees
    pub horizontal_gap: f64,
    /// Gap between generation rows
    pub vertical_gap: f64,
    /// Gap between the two cards of a couple
    pub spouse_gap: f64,
    /// Distance from zero to the leftmost card edge
    pub padding: f64,
}

impl LayoutConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With card size
    #[inline]
    #[must_use]
    pub fn with_card_size(mut self, width: f64, height: f64) -> Self {
        self.card_width = width;
        self.card_height = height;
        self
    }

    /// With horizontal and vertical gaps
    #[inline]
    #[must_use]
    pub fn with_gaps(mut self, horizontal: f64, vertical: f64) -> Self {
        self.horizontal_gap = horizontal;
        self.vertical_gap = vertical;
        self
    }

    /// With spouse gap
    #[inline]
    #[must_use]
    pub fn with_spouse_gap(mut self, gap: f64) -> Self {
        self.spouse_gap = gap;
        self
    }

    /// With padding
    #[inline]
    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Width of a single card or of a couple
    #[inline]
    #[must_use]
    pub fn couple_width(&self, married: bool) -> f64 {
        if married {
            2.0 * self.card_width + self.spouse_gap
        } else {
            self.card_width
        }
    }

    /// Distance between two generation rows
    #[inline]
    #[must_use]
    pub fn row_height(&self) -> f64 {
        self.card_height + self.vertical_gap
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            card_width: 140.0,
            card_height: 80.0,
            horizontal_gap: 40.0,
            vertical_gap: 80.0,
            spouse_gap: 20.0,
            padding: 20.0,
        }
    }
}
