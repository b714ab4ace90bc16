//! Traced rings and their classification into shells, holes and invalid rings.

use crate::geom::{Coord, Envelope, LineString, LinearRing};
use crate::graph::{DirEdgeId, PlanarGraph};
use crate::predicates::{Location, locate_in_ring, on_segment, segments_intersect, signed_area};

use super::trace::ring_coords;

/// Why a traced ring cannot be used as a polygon ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// Fewer than three distinct vertices.
    TooFewPoints,
    /// Two segments of the ring touch or cross away from their shared vertex.
    SelfIntersection,
    /// The ring encloses no area.
    ZeroArea,
}

/// A closed cycle of directed edges bounding one face of the graph.
///
/// The directed edges are referenced by id; the graph keeps owning them.
#[derive(Debug, Clone)]
pub struct EdgeRing {
    dir_edges: Vec<DirEdgeId>,
    coords: Vec<Coord>,
    envelope: Envelope,
    signed_area: f64,
}

/// A traced ring tagged with its role.
#[derive(Debug, Clone)]
pub enum ClassifiedRing {
    /// Counter-clockwise: bounds a face on its inside.
    Shell(EdgeRing),
    /// Clockwise: the outline of a component seen from the face around it.
    Hole(EdgeRing),
    /// Excluded from polygon assembly.
    Invalid { ring: EdgeRing, reason: InvalidReason },
}

impl EdgeRing {
    /// Builds the ring traced by `dir_edges`, which must form a closed walk.
    pub fn from_dir_edges(graph: &PlanarGraph, dir_edges: Vec<DirEdgeId>) -> Self {
        debug_assert!(!dir_edges.is_empty(), "ring needs at least one directed edge");
        let coords = ring_coords(graph, &dir_edges);
        let envelope = Envelope::from_coords(&coords)
            .expect("a non-empty directed edge list yields coordinates");
        let signed_area = signed_area(&coords);
        Self {
            dir_edges,
            coords,
            envelope,
            signed_area,
        }
    }

    /// Returns the directed edges in tracing order.
    #[inline]
    pub fn dir_edges(&self) -> &[DirEdgeId] {
        &self.dir_edges
    }

    /// Returns the closed coordinate ring.
    #[inline]
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    #[inline]
    pub fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    /// Signed area: positive for counter-clockwise rings.
    #[inline]
    pub fn signed_area(&self) -> f64 {
        self.signed_area
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area.abs()
    }

    /// Returns `true` if no two segments meet except consecutive ones at
    /// their shared vertex.
    pub fn is_simple(&self) -> bool {
        let pts = &self.coords;
        let n = pts.len() - 1;
        if n < 3 {
            return false;
        }

        for i in 0..n {
            let (a0, a1) = (pts[i], pts[i + 1]);

            // Consecutive segments may only share their common vertex.
            let (b1, b2) = (pts[(i + 1) % n], pts[(i + 2) % n]);
            if on_segment(b2, a0, a1) || on_segment(a0, b1, b2) {
                return false;
            }

            let seg_env = Envelope::new(a0, a1);
            for j in (i + 2)..n {
                if i == 0 && j == n - 1 {
                    continue;
                }
                let (c0, c1) = (pts[j], pts[j + 1]);
                if !seg_env.intersects(&Envelope::new(c0, c1)) {
                    continue;
                }
                if segments_intersect(a0, a1, c0, c1) {
                    return false;
                }
            }
        }
        true
    }

    /// Tags the ring as shell, hole or invalid.
    ///
    /// With `check_simple` off, the self-intersection test is skipped; rings
    /// that are too short or flat are still rejected.
    pub fn classify(self, check_simple: bool) -> ClassifiedRing {
        let reason = if self.coords.len() < 4 {
            Some(InvalidReason::TooFewPoints)
        } else if check_simple && !self.is_simple() {
            Some(InvalidReason::SelfIntersection)
        } else if self.signed_area == 0.0 {
            Some(InvalidReason::ZeroArea)
        } else {
            None
        };

        match reason {
            Some(reason) => ClassifiedRing::Invalid { ring: self, reason },
            None if self.signed_area > 0.0 => ClassifiedRing::Shell(self),
            None => ClassifiedRing::Hole(self),
        }
    }

    /// Returns a vertex of `self` that is not a vertex of `other`.
    pub fn point_not_in(&self, other: &EdgeRing) -> Option<Coord> {
        self.coords[..self.coords.len() - 1]
            .iter()
            .find(|c| !other.coords.contains(c))
            .copied()
    }

    /// Returns `true` if `inner` lies inside this ring.
    ///
    /// Rings of a noded graph meet at most at shared nodes, so one vertex of
    /// `inner` that is not on this ring decides containment. A ring with the
    /// same envelope is never contained.
    pub fn encloses(&self, inner: &EdgeRing) -> bool {
        if !self.envelope.contains(&inner.envelope) || self.envelope == inner.envelope {
            return false;
        }
        match inner.point_not_in(self) {
            Some(p) => locate_in_ring(p, &self.coords) == Location::Interior,
            None => false,
        }
    }

    /// Copies the ring out as a closed line string.
    pub fn to_line_string(&self) -> LineString {
        LineString::new(self.coords.clone())
    }

    /// Converts the ring into an output ring, keeping its winding.
    pub fn into_linear_ring(self) -> LinearRing {
        LinearRing::new(self.coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EdgeId;

    fn line(points: &[[f64; 2]]) -> Vec<Coord> {
        points.iter().map(|&[x, y]| Coord::new(x, y)).collect()
    }

    fn loop_ring(points: &[[f64; 2]], forward: bool) -> EdgeRing {
        let mut graph = PlanarGraph::new();
        let e = graph.add_line(line(points));
        let de = if forward {
            graph.edge(e).forward()
        } else {
            graph.edge(e).backward()
        };
        EdgeRing::from_dir_edges(&graph, vec![de])
    }

    fn square(x0: f64, y0: f64, size: f64) -> Vec<[f64; 2]> {
        vec![
            [x0, y0],
            [x0 + size, y0],
            [x0 + size, y0 + size],
            [x0, y0 + size],
            [x0, y0],
        ]
    }

    #[test]
    fn counter_clockwise_ring_is_shell() {
        let ring = loop_ring(&square(0.0, 0.0, 2.0), true);
        assert_eq!(ring.signed_area(), 4.0);
        assert!(matches!(ring.classify(true), ClassifiedRing::Shell(_)));
    }

    #[test]
    fn clockwise_ring_is_hole() {
        let ring = loop_ring(&square(0.0, 0.0, 2.0), false);
        assert_eq!(ring.area(), 4.0);
        assert!(matches!(ring.classify(true), ClassifiedRing::Hole(_)));
    }

    #[test]
    fn figure_eight_is_self_intersecting() {
        let ring = loop_ring(
            &[[0.0, 0.0], [2.0, 2.0], [2.0, 0.0], [0.0, 2.0], [0.0, 0.0]],
            true,
        );
        assert!(!ring.is_simple());
        assert!(matches!(
            ring.classify(true),
            ClassifiedRing::Invalid {
                reason: InvalidReason::SelfIntersection,
                ..
            }
        ));
    }

    #[test]
    fn figure_eight_passes_when_check_disabled() {
        // Lobes of 1 and -1 cancel, so only the area test can reject it.
        let ring = loop_ring(
            &[[0.0, 0.0], [2.0, 2.0], [2.0, 0.0], [0.0, 2.0], [0.0, 0.0]],
            true,
        );
        assert!(matches!(
            ring.classify(false),
            ClassifiedRing::Invalid {
                reason: InvalidReason::ZeroArea,
                ..
            }
        ));
    }

    #[test]
    fn two_point_loop_is_too_short() {
        let ring = loop_ring(&[[0.0, 0.0], [1.0, 0.0], [0.0, 0.0]], true);
        assert!(matches!(
            ring.classify(true),
            ClassifiedRing::Invalid {
                reason: InvalidReason::TooFewPoints,
                ..
            }
        ));
    }

    #[test]
    fn backtracking_spike_is_not_simple() {
        let ring = loop_ring(
            &[[0.0, 0.0], [2.0, 0.0], [3.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]],
            true,
        );
        assert!(!ring.is_simple());
    }

    #[test]
    fn triangle_is_simple() {
        let ring = loop_ring(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [0.0, 0.0]], true);
        assert!(ring.is_simple());
    }

    #[test]
    fn enclosing_ring_contains_inner_ring() {
        let outer = loop_ring(&square(0.0, 0.0, 10.0), true);
        let inner = loop_ring(&square(2.0, 2.0, 2.0), false);
        let beside = loop_ring(&square(20.0, 0.0, 2.0), false);

        assert!(outer.encloses(&inner));
        assert!(!inner.encloses(&outer));
        assert!(!outer.encloses(&beside));
    }

    #[test]
    fn ring_never_encloses_its_own_reverse() {
        let shell = loop_ring(&square(0.0, 0.0, 3.0), true);
        let hole = loop_ring(&square(0.0, 0.0, 3.0), false);
        assert!(!shell.encloses(&hole));
    }

    #[test]
    fn multi_edge_ring_coordinates() {
        let mut graph = PlanarGraph::new();
        graph.add_line(line(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]));
        graph.add_line(line(&[[1.0, 1.0], [0.0, 1.0], [0.0, 0.0]]));
        let ring = EdgeRing::from_dir_edges(
            &graph,
            vec![graph.edge(EdgeId(0)).forward(), graph.edge(EdgeId(1)).forward()],
        );
        assert_eq!(
            ring.coords(),
            line(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]]).as_slice()
        );
        assert_eq!(ring.dir_edges().len(), 2);
    }
}
