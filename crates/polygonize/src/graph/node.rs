//! Graph vertices.

use crate::geom::Coord;

use super::DirEdgeId;

/// A vertex of the planar graph.
///
/// Stores the directed edges that leave the node, sorted counter-clockwise
/// by the angle of their first segment.
#[derive(Debug, Clone)]
pub struct Node {
    coord: Coord,

    /// Outgoing directed edges in counter-clockwise angular order.
    out_edges: Vec<DirEdgeId>,

    /// Set once the last incident edge has been pruned.
    removed: bool,
}

impl Node {
    pub(crate) fn new(coord: Coord) -> Self {
        Self {
            coord,
            out_edges: Vec::new(),
            removed: false,
        }
    }

    /// Returns the coordinate of the node.
    #[inline]
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Returns the outgoing directed edges in counter-clockwise order.
    #[inline]
    pub fn out_edges(&self) -> &[DirEdgeId] {
        &self.out_edges
    }

    /// Returns the number of live outgoing directed edges.
    ///
    /// A self-loop contributes two.
    #[inline]
    pub fn degree(&self) -> usize {
        self.out_edges.len()
    }

    /// Returns `true` if every incident edge has been pruned.
    #[inline]
    pub fn is_removed(&self) -> bool {
        self.removed
    }

    #[inline]
    pub(crate) fn insert_out_edge(&mut self, at: usize, de: DirEdgeId) {
        self.out_edges.insert(at, de);
    }

    pub(crate) fn remove_out_edge(&mut self, de: DirEdgeId) {
        self.out_edges.retain(|&d| d != de);
        if self.out_edges.is_empty() {
            self.removed = true;
        }
    }
}
