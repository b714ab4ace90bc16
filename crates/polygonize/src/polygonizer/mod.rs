//! Polygon assembly from noded linework.
//!
//! This module turns a set of line chains that touch only at their endpoints
//! into polygons, and reports the linework that could not be used:
//!
//! - **dangles**: chains with a free end
//! - **cut edges**: chains connected at both ends that bound no face
//! - **invalid ring lines**: traced rings that are self-intersecting, flat or
//!   too short
//! - **orphan holes**: hole rings whose enclosing shell was rejected
//!
//! # Example
//!
//! ```ignore
//! use polygonize::{LineString, Polygonizer};
//!
//! let mut polygonizer = Polygonizer::new();
//! polygonizer.add_line(vec![[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0], [0.0, 0.0]])?;
//! polygonizer.add_line(vec![[0.0, 0.0], [-3.0, -3.0]])?;
//!
//! assert_eq!(polygonizer.polygons().len(), 1);
//! assert_eq!(polygonizer.dangles().len(), 1);
//! ```
//!
//! # Pipeline
//!
//! The first query runs, once:
//!
//! 1. [`prune`]: dangles, then cut edges, repeated until nothing changes
//! 2. [`trace`]: `next` links and face cycles, split at repeated nodes
//! 3. [`edge_ring`]: shell / hole / invalid classification
//! 4. [`holes`]: innermost-shell assignment for every hole
//! 5. shell selection: shells filling a hole of a kept shell are dropped, or
//!    with `extract_only_polygonal` [`polygonal`] picks the shells

pub mod edge_ring;
pub mod holes;
pub mod polygonal;
pub mod prune;
pub mod trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::PolygonizerConfig;
use crate::error::PolygonizeError;
use crate::geom::{LineString, Polygon};
use crate::graph::PlanarGraph;

use edge_ring::{ClassifiedRing, EdgeRing};

/// Everything a polygonizer run produces.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolygonizeResult {
    polygons: Vec<Polygon>,
    dangles: Vec<LineString>,
    cut_edges: Vec<LineString>,
    invalid_ring_lines: Vec<LineString>,
    orphan_holes: Vec<LineString>,
}

impl PolygonizeResult {
    /// Polygons in shell discovery order.
    #[inline]
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Dangling chains, in removal order.
    #[inline]
    pub fn dangles(&self) -> &[LineString] {
        &self.dangles
    }

    /// Bridge chains that bound no face.
    #[inline]
    pub fn cut_edges(&self) -> &[LineString] {
        &self.cut_edges
    }

    /// Closed rings rejected as self-intersecting, flat or too short.
    #[inline]
    pub fn invalid_ring_lines(&self) -> &[LineString] {
        &self.invalid_ring_lines
    }

    /// Hole rings that lie inside a rejected ring and so have no shell.
    #[inline]
    pub fn orphan_holes(&self) -> &[LineString] {
        &self.orphan_holes
    }

    /// Consumes the result and returns the polygons.
    pub fn into_polygons(self) -> Vec<Polygon> {
        self.polygons
    }
}

#[derive(Debug)]
enum State {
    Building(PlanarGraph),
    Computed(PolygonizeResult),
}

/// Builds polygons from noded line chains.
///
/// Lines are added first; the first call to any query method runs the whole
/// pipeline once and every later query reuses the memoised result. Adding
/// lines after that is rejected with [`PolygonizeError::AlreadyComputed`].
///
/// The input must be noded: chains may only meet at their endpoints. Chains
/// crossing in their interiors are not split and typically end up in
/// [`invalid_ring_lines`](Self::invalid_ring_lines).
#[derive(Debug)]
pub struct Polygonizer {
    config: PolygonizerConfig,
    state: State,
}

impl Default for Polygonizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Polygonizer {
    /// Creates a polygonizer with the default configuration.
    pub fn new() -> Self {
        Self::with_config(PolygonizerConfig::default())
    }

    pub fn with_config(config: PolygonizerConfig) -> Self {
        Self {
            config,
            state: State::Building(PlanarGraph::new()),
        }
    }

    #[inline]
    pub fn config(&self) -> &PolygonizerConfig {
        &self.config
    }

    /// Returns `true` once a query has run the pipeline.
    #[inline]
    pub fn is_computed(&self) -> bool {
        matches!(self.state, State::Computed(_))
    }

    /// Adds one chain to the graph.
    ///
    /// Consecutive repeated points are collapsed first. Fails if fewer than two
    /// distinct points remain (three for a closed chain), if a coordinate is
    /// not finite, or if the result has already been computed.
    pub fn add_line(&mut self, line: impl Into<LineString>) -> Result<(), PolygonizeError> {
        let State::Building(graph) = &mut self.state else {
            return Err(PolygonizeError::AlreadyComputed);
        };

        let line = line.into();
        if let Some(c) = line.coords().iter().find(|c| !c.x.is_finite() || !c.y.is_finite()) {
            return Err(PolygonizeError::NonFiniteCoordinate { x: c.x, y: c.y });
        }

        let line = line.without_repeated_points();
        if line.len() < 2 {
            return Err(PolygonizeError::DegenerateInput { points: line.len() });
        }
        // A closed chain needs three distinct points to enclose anything.
        if line.is_closed() && line.len() < 4 {
            return Err(PolygonizeError::DegenerateInput {
                points: line.len() - 1,
            });
        }

        graph.add_line(line.into_coords());
        Ok(())
    }

    /// Adds several chains, stopping at the first one that is rejected.
    ///
    /// Chains before the rejected one stay in the graph.
    pub fn add_lines<I, L>(&mut self, lines: I) -> Result<(), PolygonizeError>
    where
        I: IntoIterator<Item = L>,
        L: Into<LineString>,
    {
        for line in lines {
            self.add_line(line)?;
        }
        Ok(())
    }

    /// Returns the full result, computing it on first use.
    pub fn result(&mut self) -> &PolygonizeResult {
        if let State::Building(graph) = &mut self.state {
            let graph = std::mem::take(graph);
            self.state = State::Computed(polygonize_graph(graph, &self.config));
        }
        match &self.state {
            State::Computed(result) => result,
            State::Building(_) => unreachable!("pipeline result stored above"),
        }
    }

    /// Computes (if needed) and returns the owned result.
    pub fn into_result(mut self) -> PolygonizeResult {
        self.result();
        match self.state {
            State::Computed(result) => result,
            State::Building(_) => unreachable!("pipeline result stored above"),
        }
    }

    /// Polygons, in shell discovery order.
    pub fn polygons(&mut self) -> &[Polygon] {
        self.result().polygons()
    }

    /// Chains removed because one end is free.
    pub fn dangles(&mut self) -> &[LineString] {
        self.result().dangles()
    }

    /// Chains removed because they bound no face.
    pub fn cut_edges(&mut self) -> &[LineString] {
        self.result().cut_edges()
    }

    /// Rings excluded from polygon assembly.
    pub fn invalid_ring_lines(&mut self) -> &[LineString] {
        self.result().invalid_ring_lines()
    }

    /// Holes left without a shell because their shell was rejected.
    pub fn orphan_holes(&mut self) -> &[LineString] {
        self.result().orphan_holes()
    }
}

/// Polygonizes a set of chains with the default configuration.
pub fn polygonize<I, L>(lines: I) -> Result<PolygonizeResult, PolygonizeError>
where
    I: IntoIterator<Item = L>,
    L: Into<LineString>,
{
    let mut polygonizer = Polygonizer::new();
    polygonizer.add_lines(lines)?;
    Ok(polygonizer.into_result())
}

/// Runs the full pipeline over a built graph.
fn polygonize_graph(mut graph: PlanarGraph, config: &PolygonizerConfig) -> PolygonizeResult {
    let mut result = PolygonizeResult::default();
    if graph.is_empty() {
        return result;
    }
    log::debug!(
        "polygonizing {} edges over {} nodes",
        graph.edge_count(),
        graph.node_count()
    );

    loop {
        result.dangles.extend(prune::delete_dangles(&mut graph));
        let cut = prune::delete_cut_edges(&mut graph);
        if cut.is_empty() {
            break;
        }
        result.cut_edges.extend(cut);
    }

    trace::compute_next_edges(&mut graph);
    let cycles = trace::label_face_cycles(&mut graph);

    let mut shells = Vec::new();
    let mut holes = Vec::new();
    let mut invalid = Vec::new();
    for cycle in &cycles {
        for ring in trace::split_at_repeated_nodes(&graph, cycle) {
            match EdgeRing::from_dir_edges(&graph, ring).classify(config.check_rings_valid) {
                ClassifiedRing::Shell(ring) => shells.push(ring),
                ClassifiedRing::Hole(ring) => holes.push(ring),
                ClassifiedRing::Invalid { ring, reason } => {
                    log::trace!("rejected ring of {} points: {:?}", ring.coords().len(), reason);
                    invalid.push(ring);
                }
            }
        }
    }
    log::debug!(
        "traced {} shells, {} holes, {} invalid rings",
        shells.len(),
        holes.len(),
        invalid.len()
    );

    let hole_shell = holes::assign_holes(&holes, &shells);

    let keep = if config.extract_only_polygonal {
        polygonal::select_disjoint_shells(&graph, &shells, &holes, &hole_shell)
    } else {
        holes::drop_hole_fillers(&graph, &shells, &holes, &hole_shell)
    };

    let mut shell_holes: Vec<Vec<EdgeRing>> = vec![Vec::new(); shells.len()];
    for (hole, shell) in holes.into_iter().zip(hole_shell) {
        match shell {
            Some(s) => shell_holes[s].push(hole),
            None if invalid.iter().any(|r| r.encloses(&hole)) => {
                log::warn!(
                    "hole ring with {} points has no valid enclosing shell",
                    hole.coords().len()
                );
                result.orphan_holes.push(hole.to_line_string());
            }
            // Outline of a component facing the unbounded face.
            None => {}
        }
    }

    result.polygons = shells
        .into_iter()
        .zip(shell_holes)
        .zip(keep)
        .filter(|(_, keep)| *keep)
        .map(|((shell, holes), _)| {
            Polygon::new(
                shell.into_linear_ring(),
                holes.into_iter().map(EdgeRing::into_linear_ring).collect(),
            )
        })
        .collect();
    result.invalid_ring_lines = invalid.iter().map(EdgeRing::to_line_string).collect();

    log::debug!(
        "polygonize produced {} polygons, {} dangles, {} cut edges, {} invalid rings",
        result.polygons.len(),
        result.dangles.len(),
        result.cut_edges.len(),
        result.invalid_ring_lines.len()
    );
    result
}
