//! Polygonizer configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Options controlling how rings are validated and which polygons are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolygonizerConfig {
    /// Run the self-intersection test on every traced ring. Rings that fail
    /// are reported as invalid ring lines.
    ///
    /// Turning this off is only safe for correctly noded input; zero-area
    /// and too-short rings are rejected either way.
    pub check_rings_valid: bool,

    /// Keep only polygons that together form valid polygonal output: no two
    /// kept polygons share an edge, and polygons filling the holes of kept
    /// polygons are dropped.
    pub extract_only_polygonal: bool,
}

impl Default for PolygonizerConfig {
    fn default() -> Self {
        Self {
            check_rings_valid: true,
            extract_only_polygonal: false,
        }
    }
}

impl PolygonizerConfig {
    pub fn with_check_rings_valid(mut self, check: bool) -> Self {
        self.check_rings_valid = check;
        self
    }

    pub fn with_extract_only_polygonal(mut self, only_polygonal: bool) -> Self {
        self.extract_only_polygonal = only_polygonal;
        self
    }
}
