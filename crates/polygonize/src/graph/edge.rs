//! Undirected edges and their two directed halves.

use nalgebra::Vector2;

use crate::geom::{Coord, LineString};

use super::{DirEdgeId, EdgeId, NodeId};

/// An input chain stored in the graph.
///
/// The chain runs from the origin of `dir_edges[0]` to the origin of
/// `dir_edges[1]`. Its coordinates are never modified after insertion.
#[derive(Debug, Clone)]
pub struct Edge {
    coords: Vec<Coord>,

    /// `[forward, backward]`
    dir_edges: [DirEdgeId; 2],

    removed: bool,
}

impl Edge {
    pub(crate) fn new(coords: Vec<Coord>, dir_edges: [DirEdgeId; 2]) -> Self {
        Self {
            coords,
            dir_edges,
            removed: false,
        }
    }

    /// Returns the coordinate chain in input direction.
    #[inline]
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// Returns the directed edge that follows the input direction.
    #[inline]
    pub fn forward(&self) -> DirEdgeId {
        self.dir_edges[0]
    }

    /// Returns the directed edge that runs against the input direction.
    #[inline]
    pub fn backward(&self) -> DirEdgeId {
        self.dir_edges[1]
    }

    /// Returns both directed edges, forward first.
    #[inline]
    pub fn dir_edges(&self) -> [DirEdgeId; 2] {
        self.dir_edges
    }

    /// Returns `true` if the chain starts and ends at the same node.
    pub fn is_self_loop(&self) -> bool {
        self.coords.first() == self.coords.last()
    }

    #[inline]
    pub fn is_removed(&self) -> bool {
        self.removed
    }

    pub(crate) fn mark_removed(&mut self) {
        self.removed = true;
    }

    /// Copies the chain out as a line string in input direction.
    pub fn to_line_string(&self) -> LineString {
        LineString::new(self.coords.clone())
    }
}

/// One traversal direction of an [`Edge`].
///
/// Besides the static topology (`origin`, `dest`, `sym`), a directed edge
/// carries the mutable state used while pruning and tracing: the `next`
/// link around its face, the face-cycle label and the visited flag.
#[derive(Debug, Clone)]
pub struct DirectedEdge {
    edge: EdgeId,
    origin: NodeId,
    dest: NodeId,
    sym: DirEdgeId,

    /// `true` if this direction follows the input chain.
    forward: bool,

    /// Direction of the first segment leaving `origin`.
    direction: Vector2<f64>,

    /// Second point of the chain seen from `origin`; tie-break for ordering.
    direction_pt: Coord,

    next: Option<DirEdgeId>,
    label: Option<usize>,
    visited: bool,
    removed: bool,
}

impl DirectedEdge {
    pub(crate) fn new(
        edge: EdgeId,
        origin: NodeId,
        dest: NodeId,
        sym: DirEdgeId,
        forward: bool,
        origin_pt: Coord,
        direction_pt: Coord,
    ) -> Self {
        Self {
            edge,
            origin,
            dest,
            sym,
            forward,
            direction: direction_pt - origin_pt,
            direction_pt,
            next: None,
            label: None,
            visited: false,
            removed: false,
        }
    }

    /// Returns the owning edge.
    #[inline]
    pub fn edge(&self) -> EdgeId {
        self.edge
    }

    /// Returns the node this directed edge leaves from.
    #[inline]
    pub fn origin(&self) -> NodeId {
        self.origin
    }

    /// Returns the node this directed edge arrives at.
    #[inline]
    pub fn dest(&self) -> NodeId {
        self.dest
    }

    /// Returns the directed edge running the opposite way along the same edge.
    #[inline]
    pub fn sym(&self) -> DirEdgeId {
        self.sym
    }

    #[inline]
    pub fn is_forward(&self) -> bool {
        self.forward
    }

    /// Returns the direction of the first segment leaving the origin.
    #[inline]
    pub fn direction(&self) -> Vector2<f64> {
        self.direction
    }

    /// Returns the chain point that defines [`direction`](Self::direction).
    #[inline]
    pub fn direction_pt(&self) -> Coord {
        self.direction_pt
    }

    /// Returns the next directed edge around the face on the left, once computed.
    #[inline]
    pub fn next(&self) -> Option<DirEdgeId> {
        self.next
    }

    /// Returns the face-cycle label assigned by the last tracing pass.
    #[inline]
    pub fn label(&self) -> Option<usize> {
        self.label
    }

    #[inline]
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    #[inline]
    pub fn is_removed(&self) -> bool {
        self.removed
    }

    #[inline]
    pub(crate) fn set_next(&mut self, next: Option<DirEdgeId>) {
        self.next = next;
    }

    #[inline]
    pub(crate) fn set_label(&mut self, label: Option<usize>) {
        self.label = label;
    }

    #[inline]
    pub(crate) fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }

    pub(crate) fn mark_removed(&mut self) {
        self.removed = true;
        self.next = None;
        self.label = None;
    }
}
