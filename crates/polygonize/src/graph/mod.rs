//! Planar graph of noded linework.
//!
//! Every input chain becomes one [`Edge`] between two [`Node`]s, and every
//! edge owns two [`DirectedEdge`]s, one per traversal direction. Directed
//! edges leaving a node are kept in counter-clockwise angular order, which is
//! what makes face tracing deterministic.
//!
//! # Storage
//!
//! Nodes, edges and directed edges live in flat arenas inside
//! [`PlanarGraph`] and refer to each other through the index types
//! [`NodeId`], [`EdgeId`] and [`DirEdgeId`]. Pruning marks entries as removed
//! instead of compacting the arenas, so ids stay valid for the lifetime of
//! the graph.
//!
//! # Architecture
//!
//! - [`PlanarGraph`]: owns the arenas, builds nodes and edges from chains
//! - [`Node`]: a coordinate plus its angularly ordered outgoing edges
//! - [`Edge`]: the coordinate chain and its pair of directed edges
//! - [`DirectedEdge`]: one direction of an edge, with the `sym`/`next` links
//!   and the per-pass labels used by pruning and tracing

use std::fmt;

mod edge;
mod node;
mod planar_graph;

pub use edge::{DirectedEdge, Edge};
pub use node::Node;
pub use planar_graph::PlanarGraph;

macro_rules! arena_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub usize);

        impl $name {
            #[inline]
            pub fn index(self) -> usize {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

arena_id!(
    /// Index of a [`Node`] in its graph.
    NodeId
);
arena_id!(
    /// Index of an [`Edge`] in its graph.
    EdgeId
);
arena_id!(
    /// Index of a [`DirectedEdge`] in its graph.
    DirEdgeId
);
