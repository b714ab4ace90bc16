//! Polygon output type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Coord, Envelope, LinearRing};
use crate::predicates::{Location, locate_in_ring};

/// A polygon made of one exterior shell and zero or more holes.
///
/// Polygons built by the polygonizer have a counter-clockwise exterior and
/// clockwise interiors, and every hole lies inside the exterior.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polygon {
    exterior: LinearRing,
    interiors: Vec<LinearRing>,
}

impl Polygon {
    /// Creates a polygon from a shell and its holes.
    pub fn new(exterior: LinearRing, interiors: Vec<LinearRing>) -> Self {
        Self {
            exterior,
            interiors,
        }
    }

    /// Returns the shell ring.
    #[inline]
    pub fn exterior(&self) -> &LinearRing {
        &self.exterior
    }

    /// Returns the hole rings.
    #[inline]
    pub fn interiors(&self) -> &[LinearRing] {
        &self.interiors
    }

    /// Returns the number of holes.
    #[inline]
    pub fn num_interiors(&self) -> usize {
        self.interiors.len()
    }

    /// Iterates over the shell followed by every hole.
    pub fn rings(&self) -> impl Iterator<Item = &LinearRing> {
        std::iter::once(&self.exterior).chain(self.interiors.iter())
    }

    /// Area enclosed by the shell minus the area of the holes.
    pub fn area(&self) -> f64 {
        let holes: f64 = self.interiors.iter().map(|h| h.signed_area().abs()).sum();
        self.exterior.signed_area().abs() - holes
    }

    /// Bounding box of the shell.
    pub fn envelope(&self) -> Option<Envelope> {
        self.exterior.envelope()
    }

    /// Locates a point relative to the polygon area.
    ///
    /// Points on the shell or on any hole boundary are [`Location::Boundary`];
    /// points inside a hole are [`Location::Exterior`].
    pub fn locate(&self, p: Coord) -> Location {
        match locate_in_ring(p, self.exterior.coords()) {
            Location::Interior => {}
            other => return other,
        }
        for hole in &self.interiors {
            match locate_in_ring(p, hole.coords()) {
                Location::Interior => return Location::Exterior,
                Location::Boundary => return Location::Boundary,
                Location::Exterior => {}
            }
        }
        Location::Interior
    }
}

impl From<LinearRing> for Polygon {
    fn from(exterior: LinearRing) -> Self {
        Self::new(exterior, Vec::new())
    }
}
