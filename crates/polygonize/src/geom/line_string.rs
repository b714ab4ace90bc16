//! Open and closed coordinate chains.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Coord, Envelope};
use crate::predicates::signed_area;

/// An ordered chain of coordinates.
///
/// This is the input unit of the polygonizer and the shape in which dangles,
/// cut edges and invalid rings are reported back.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineString {
    coords: Vec<Coord>,
}

impl LineString {
    /// Creates a line string from a list of coordinates.
    ///
    /// No validation happens here; the polygonizer rejects chains that do not
    /// have two distinct points when they are added.
    pub fn new(coords: Vec<Coord>) -> Self {
        Self { coords }
    }

    /// Returns the coordinates of the chain.
    #[inline]
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// Consumes the chain and returns its coordinates.
    #[inline]
    pub fn into_coords(self) -> Vec<Coord> {
        self.coords
    }

    /// Returns the number of coordinates.
    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Returns the first coordinate, if any.
    #[inline]
    pub fn first(&self) -> Option<Coord> {
        self.coords.first().copied()
    }

    /// Returns the last coordinate, if any.
    #[inline]
    pub fn last(&self) -> Option<Coord> {
        self.coords.last().copied()
    }

    /// Returns `true` if the chain has at least two points and ends where it starts.
    pub fn is_closed(&self) -> bool {
        self.coords.len() >= 2 && self.coords.first() == self.coords.last()
    }

    /// Returns a copy with consecutive repeated coordinates collapsed.
    pub fn without_repeated_points(&self) -> Self {
        let mut coords = self.coords.clone();
        coords.dedup();
        Self { coords }
    }
}

impl From<Vec<Coord>> for LineString {
    fn from(coords: Vec<Coord>) -> Self {
        Self::new(coords)
    }
}

impl From<Vec<[f64; 2]>> for LineString {
    fn from(coords: Vec<[f64; 2]>) -> Self {
        coords.into_iter().map(|[x, y]| Coord::new(x, y)).collect()
    }
}

impl From<&[[f64; 2]]> for LineString {
    fn from(coords: &[[f64; 2]]) -> Self {
        coords.iter().map(|&[x, y]| Coord::new(x, y)).collect()
    }
}

impl FromIterator<Coord> for LineString {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<LinearRing> for LineString {
    fn from(ring: LinearRing) -> Self {
        Self::new(ring.coords)
    }
}

/// A closed chain: the first coordinate is repeated at the end.
///
/// Rings produced by the polygonizer are always closed. Shells wind
/// counter-clockwise and holes clockwise.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinearRing {
    coords: Vec<Coord>,
}

impl LinearRing {
    /// Creates a ring from closed coordinates.
    ///
    /// # Panics (debug builds only)
    /// Panics if the coordinates are not closed.
    pub fn new(coords: Vec<Coord>) -> Self {
        debug_assert!(
            coords.len() >= 2 && coords.first() == coords.last(),
            "LinearRing must repeat its first coordinate at the end"
        );
        Self { coords }
    }

    /// Returns the coordinates, including the closing repeat.
    #[inline]
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// Returns the number of coordinates, including the closing repeat.
    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Signed area of the ring. Positive for counter-clockwise winding.
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.coords)
    }

    /// Returns `true` if the ring winds counter-clockwise.
    pub fn is_ccw(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Computes the bounding box of the ring.
    pub fn envelope(&self) -> Option<Envelope> {
        Envelope::from_coords(&self.coords)
    }
}
