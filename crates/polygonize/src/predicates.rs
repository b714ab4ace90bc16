//! Exact-as-possible 2D predicates used by graph construction and ring checks.
//!
//! Everything here works on raw `f64` coordinates with no tolerance: the
//! polygonizer expects noded input, so coincidence means bit-for-bit equality.

use std::cmp::Ordering;

use nalgebra::Vector2;

use crate::geom::Coord;

/// Which side of a directed line a point lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Point is to the left of the line (counter-clockwise turn).
    CounterClockwise,
    /// Point is to the right of the line (clockwise turn).
    Clockwise,
    /// Point lies on the line.
    Collinear,
}

/// Location of a point relative to a closed ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// Strictly inside the ring
    Interior,
    /// On one of the ring's segments
    Boundary,
    /// Strictly outside the ring
    Exterior,
}

/// Classifies `r` against the directed line `p -> q`.
#[inline]
pub fn orientation(p: Coord, q: Coord, r: Coord) -> Orientation {
    let det = (q - p).perp(&(r - p));
    if det > 0.0 {
        Orientation::CounterClockwise
    } else if det < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Returns the quadrant (0..4, counter-clockwise from +x) a direction falls in.
///
/// The positive x axis belongs to quadrant 0 and the positive y axis to
/// quadrant 1, so every non-zero vector maps to exactly one quadrant.
#[inline]
pub fn quadrant(d: Vector2<f64>) -> u8 {
    if d.x > 0.0 && d.y >= 0.0 {
        0
    } else if d.x <= 0.0 && d.y > 0.0 {
        1
    } else if d.x < 0.0 && d.y <= 0.0 {
        2
    } else {
        3
    }
}

/// Orders two directions leaving the same point by counter-clockwise angle
/// from the positive x axis.
///
/// Uses quadrants plus the sign of the cross product, so no trigonometry is
/// involved and equal angles compare `Equal` exactly.
pub fn compare_angle(a: Vector2<f64>, b: Vector2<f64>) -> Ordering {
    let qa = quadrant(a);
    let qb = quadrant(b);
    if qa != qb {
        return qa.cmp(&qb);
    }
    let det = a.perp(&b);
    if det > 0.0 {
        Ordering::Less
    } else if det < 0.0 {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Lexicographic (x, then y) comparison of two coordinates.
#[inline]
pub fn compare_coords(a: &Coord, b: &Coord) -> Ordering {
    a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y))
}

/// Computes the signed area of a closed coordinate ring (shoelace formula).
///
/// - Positive: counter-clockwise
/// - Negative: clockwise
/// - Zero: degenerate
///
/// The ring must repeat its first coordinate at the end.
pub fn signed_area(ring: &[Coord]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }
    // Shift to the first vertex to keep the products small.
    let origin = ring[0];
    let mut sum = 0.0;
    for w in ring.windows(2) {
        let a = w[0] - origin;
        let b = w[1] - origin;
        sum += a.perp(&b);
    }
    sum / 2.0
}

/// Returns `true` if `p` lies on the closed segment `a -> b`.
pub fn on_segment(p: Coord, a: Coord, b: Coord) -> bool {
    if orientation(a, b, p) != Orientation::Collinear {
        return false;
    }
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// Returns `true` if the closed segments `a0 -> a1` and `b0 -> b1` share at
/// least one point.
pub fn segments_intersect(a0: Coord, a1: Coord, b0: Coord, b1: Coord) -> bool {
    let o1 = orientation(a0, a1, b0);
    let o2 = orientation(a0, a1, b1);
    let o3 = orientation(b0, b1, a0);
    let o4 = orientation(b0, b1, a1);

    let straddles = |x: Orientation, y: Orientation| {
        matches!(
            (x, y),
            (Orientation::CounterClockwise, Orientation::Clockwise)
                | (Orientation::Clockwise, Orientation::CounterClockwise)
        )
    };

    if straddles(o1, o2) && straddles(o3, o4) {
        return true;
    }

    (o1 == Orientation::Collinear && on_segment(b0, a0, a1))
        || (o2 == Orientation::Collinear && on_segment(b1, a0, a1))
        || (o3 == Orientation::Collinear && on_segment(a0, b0, b1))
        || (o4 == Orientation::Collinear && on_segment(a1, b0, b1))
}

/// Locates `p` relative to a closed ring using the crossing-number rule.
///
/// Points on a segment report [`Location::Boundary`]. The ring must repeat its
/// first coordinate at the end; its orientation does not matter.
pub fn locate_in_ring(p: Coord, ring: &[Coord]) -> Location {
    let mut crossings = 0usize;

    for w in ring.windows(2) {
        let (a, b) = (w[0], w[1]);

        if on_segment(p, a, b) {
            return Location::Boundary;
        }

        // Half-open rule on y so a vertex shared by two segments counts once.
        if (a.y > p.y) != (b.y > p.y) {
            let o = orientation(a, b, p);
            let upward = b.y > a.y;
            if (upward && o == Orientation::CounterClockwise)
                || (!upward && o == Orientation::Clockwise)
            {
                crossings += 1;
            }
        }
    }

    if crossings % 2 == 1 {
        Location::Interior
    } else {
        Location::Exterior
    }
}
