//! Polygon extraction from noded 2D linework.
//!
//! Builds a planar graph from line chains that meet only at their endpoints,
//! prunes dangles and cut edges, traces the faces of the graph and assembles
//! them into polygons with holes.

mod config;
mod error;
pub mod geom;
pub mod graph;
mod polygonizer;
pub mod predicates;

pub use config::PolygonizerConfig;
pub use error::PolygonizeError;
pub use geom::{Coord, Envelope, LineString, LinearRing, Polygon};
pub use graph::PlanarGraph;
pub use polygonizer::edge_ring::{ClassifiedRing, EdgeRing, InvalidReason};
pub use polygonizer::{PolygonizeResult, Polygonizer, polygonize};
pub use predicates::{Location, Orientation};
