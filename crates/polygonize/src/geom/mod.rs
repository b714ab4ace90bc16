//! Minimal 2D geometry model consumed and produced by the polygonizer.

mod envelope;
mod line_string;
mod polygon;

pub use envelope::Envelope;
pub use line_string::{LineString, LinearRing};
pub use polygon::Polygon;

/// A 2D coordinate. Equality is exact.
pub type Coord = nalgebra::Point2<f64>;
