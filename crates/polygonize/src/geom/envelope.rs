//! Axis-aligned bounding boxes.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Coord;

/// An axis-aligned rectangle, defined by its minimum and maximum corners.
///
/// Used as a cheap pre-filter before exact containment and intersection tests.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Envelope {
    min: Coord,
    max: Coord,
}

impl Envelope {
    /// Creates an envelope spanning two corner points, in any order.
    pub fn new(a: Coord, b: Coord) -> Self {
        Self {
            min: Coord::new(a.x.min(b.x), a.y.min(b.y)),
            max: Coord::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Computes the envelope of a set of points.
    ///
    /// Returns `None` if `coords` is empty.
    pub fn from_coords(coords: &[Coord]) -> Option<Self> {
        let (first, rest) = coords.split_first()?;
        let mut env = Self::new(*first, *first);
        for c in rest {
            env.expand_to_include(*c);
        }
        Some(env)
    }

    /// Returns the minimum corner.
    #[inline]
    pub fn min(&self) -> Coord {
        self.min
    }

    /// Returns the maximum corner.
    #[inline]
    pub fn max(&self) -> Coord {
        self.max
    }

    /// Grows the envelope so that it covers `c`.
    pub fn expand_to_include(&mut self, c: Coord) {
        self.min.x = self.min.x.min(c.x);
        self.min.y = self.min.y.min(c.y);
        self.max.x = self.max.x.max(c.x);
        self.max.y = self.max.y.max(c.y);
    }

    /// Returns `true` if `c` lies inside or on the border of the envelope.
    #[inline]
    pub fn contains_coord(&self, c: Coord) -> bool {
        c.x >= self.min.x && c.x <= self.max.x && c.y >= self.min.y && c.y <= self.max.y
    }

    /// Returns `true` if `other` lies entirely inside or on the border of `self`.
    #[inline]
    pub fn contains(&self, other: &Envelope) -> bool {
        self.contains_coord(other.min) && self.contains_coord(other.max)
    }

    /// Returns `true` if the two envelopes share at least one point.
    #[inline]
    pub fn intersects(&self, other: &Envelope) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }
}
