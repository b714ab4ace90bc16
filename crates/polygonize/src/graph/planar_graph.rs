//! Planar graph container and construction.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::geom::Coord;
use crate::predicates::{compare_angle, compare_coords};

use super::{DirEdgeId, DirectedEdge, Edge, EdgeId, Node, NodeId};

/// Hash key for exact coordinate matching. `-0.0` and `0.0` map to the same key.
type CoordKey = (u64, u64);

fn coord_key(c: Coord) -> CoordKey {
    let fold = |v: f64| if v == 0.0 { 0.0f64 } else { v };
    (fold(c.x).to_bits(), fold(c.y).to_bits())
}

/// A planar graph built from noded line chains.
///
/// The graph exclusively owns all nodes, edges and directed edges of one
/// polygonization run.
///
/// # Construction
///
/// Chains are added one at a time with [`add_line`](Self::add_line). Chain
/// endpoints that are exactly equal resolve to the same node, and each chain
/// becomes a single edge no matter how many interior points it has:
///
/// ```ignore
/// let mut graph = PlanarGraph::new();
/// graph.add_line(vec![Coord::new(0.0, 0.0), Coord::new(1.0, 0.0)]);
/// graph.add_line(vec![Coord::new(1.0, 0.0), Coord::new(1.0, 1.0)]);
/// assert_eq!(graph.node_count(), 3);
/// ```
///
/// # Removal
///
/// Pruning removes edges through [`remove_edge`](Self::remove_edge). Removed
/// entries stay in the arenas, flagged, so every id handed out remains valid.
#[derive(Debug, Clone, Default)]
pub struct PlanarGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    dir_edges: Vec<DirectedEdge>,
    node_index: HashMap<CoordKey, NodeId>,
}

impl PlanarGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a chain as one edge and returns its id.
    ///
    /// The chain must have at least two points and no consecutive repeated
    /// points; the polygonizer normalises input before calling this.
    pub fn add_line(&mut self, coords: Vec<Coord>) -> EdgeId {
        debug_assert!(coords.len() >= 2, "edge needs at least 2 coordinates");
        debug_assert!(
            coords.windows(2).all(|w| w[0] != w[1]),
            "edge must not repeat consecutive coordinates"
        );

        let n = coords.len();
        let start = coords[0];
        let end = coords[n - 1];

        let from = self.get_or_create_node(start);
        let to = self.get_or_create_node(end);

        let edge_id = EdgeId(self.edges.len());
        let forward = DirEdgeId(self.dir_edges.len());
        let backward = DirEdgeId(forward.0 + 1);

        self.dir_edges.push(DirectedEdge::new(
            edge_id, from, to, backward, true, start, coords[1],
        ));
        self.dir_edges.push(DirectedEdge::new(
            edge_id,
            to,
            from,
            forward,
            false,
            end,
            coords[n - 2],
        ));
        self.edges.push(Edge::new(coords, [forward, backward]));

        self.insert_out_edge(from, forward);
        self.insert_out_edge(to, backward);

        edge_id
    }

    fn get_or_create_node(&mut self, coord: Coord) -> NodeId {
        let key = coord_key(coord);
        if let Some(&id) = self.node_index.get(&key) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(coord));
        self.node_index.insert(key, id);
        id
    }

    /// Inserts `de` into the outgoing list of `node` at its angular position.
    fn insert_out_edge(&mut self, node: NodeId, de: DirEdgeId) {
        let pos = self.nodes[node.0]
            .out_edges()
            .partition_point(|&other| self.compare_out_edges(other, de) == Ordering::Less);
        self.nodes[node.0].insert_out_edge(pos, de);
    }

    /// Total order on directed edges leaving the same node.
    ///
    /// Counter-clockwise angle from the positive x axis, then the direction
    /// point lexicographically, then id.
    pub fn compare_out_edges(&self, a: DirEdgeId, b: DirEdgeId) -> Ordering {
        let da = &self.dir_edges[a.0];
        let db = &self.dir_edges[b.0];
        compare_angle(da.direction(), db.direction())
            .then_with(|| compare_coords(&da.direction_pt(), &db.direction_pt()))
            .then_with(|| a.cmp(&b))
    }

    /// Removes an edge and both of its directed edges.
    ///
    /// Nodes left without incident edges are flagged removed. Removing an edge
    /// twice is a no-op.
    pub fn remove_edge(&mut self, edge: EdgeId) {
        if self.edges[edge.0].is_removed() {
            return;
        }
        for de in self.edges[edge.0].dir_edges() {
            let origin = self.dir_edges[de.0].origin();
            self.dir_edges[de.0].mark_removed();
            self.nodes[origin.0].remove_out_edge(de);
        }
        self.edges[edge.0].mark_removed();
    }

    /// Looks up the node at exactly `coord`, if one exists.
    pub fn find_node(&self, coord: Coord) -> Option<NodeId> {
        self.node_index
            .get(&coord_key(coord))
            .copied()
            .filter(|id| !self.nodes[id.0].is_removed())
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    #[inline]
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.0]
    }

    #[inline]
    pub fn dir_edge(&self, id: DirEdgeId) -> &DirectedEdge {
        &self.dir_edges[id.0]
    }

    #[inline]
    pub(crate) fn dir_edge_mut(&mut self, id: DirEdgeId) -> &mut DirectedEdge {
        &mut self.dir_edges[id.0]
    }

    /// Number of live outgoing directed edges at `node`.
    #[inline]
    pub fn degree(&self, node: NodeId) -> usize {
        self.nodes[node.0].degree()
    }

    /// Iterates over the nodes that still have incident edges.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| !n.is_removed())
            .map(|(i, n)| (NodeId(i), n))
    }

    /// Iterates over the edges that have not been pruned.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, e)| !e.is_removed())
            .map(|(i, e)| (EdgeId(i), e))
    }

    /// Iterates over the ids of directed edges that have not been pruned.
    pub fn dir_edge_ids(&self) -> impl Iterator<Item = DirEdgeId> + '_ {
        self.dir_edges
            .iter()
            .enumerate()
            .filter(|(_, d)| !d.is_removed())
            .map(|(i, _)| DirEdgeId(i))
    }

    /// Number of live nodes.
    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }

    /// Number of live edges.
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Returns `true` if no live edges remain.
    pub fn is_empty(&self) -> bool {
        self.edges().next().is_none()
    }

    /// Appends the coordinates of `de`, in its direction, to `out`, leaving
    /// off the final coordinate (the origin of the following directed edge).
    pub fn append_coords(&self, de: DirEdgeId, out: &mut Vec<Coord>) {
        let d = &self.dir_edges[de.0];
        let coords = self.edges[d.edge().0].coords();
        if d.is_forward() {
            out.extend_from_slice(&coords[..coords.len() - 1]);
        } else {
            out.extend(coords[1..].iter().rev());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(points: &[[f64; 2]]) -> Vec<Coord> {
        points.iter().map(|&[x, y]| Coord::new(x, y)).collect()
    }

    #[test]
    fn empty_graph() {
        let graph = PlanarGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn shared_endpoints_reuse_nodes() {
        let mut graph = PlanarGraph::new();
        graph.add_line(line(&[[0.0, 0.0], [1.0, 0.0]]));
        graph.add_line(line(&[[1.0, 0.0], [1.0, 1.0]]));
        graph.add_line(line(&[[1.0, 1.0], [0.5, 2.0], [0.0, 0.0]]));

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);

        let corner = graph.find_node(Coord::new(1.0, 0.0)).unwrap();
        assert_eq!(graph.degree(corner), 2);
        // Interior chain points do not become nodes.
        assert!(graph.find_node(Coord::new(0.5, 2.0)).is_none());
    }

    #[test]
    fn negative_zero_matches_zero() {
        let mut graph = PlanarGraph::new();
        graph.add_line(line(&[[0.0, 0.0], [1.0, 0.0]]));
        graph.add_line(line(&[[-0.0, -0.0], [0.0, 1.0]]));
        assert_eq!(graph.node_count(), 3);
    }

    #[test]
    fn sym_links_are_involutive() {
        let mut graph = PlanarGraph::new();
        let e = graph.add_line(line(&[[0.0, 0.0], [2.0, 0.0], [2.0, 3.0]]));
        let [fwd, bwd] = graph.edge(e).dir_edges();

        assert_eq!(graph.dir_edge(fwd).sym(), bwd);
        assert_eq!(graph.dir_edge(bwd).sym(), fwd);
        assert_eq!(graph.dir_edge(graph.dir_edge(fwd).sym()).sym(), fwd);

        assert_eq!(graph.dir_edge(fwd).origin(), graph.dir_edge(bwd).dest());
        assert_eq!(graph.dir_edge(fwd).direction_pt(), Coord::new(2.0, 0.0));
        assert_eq!(graph.dir_edge(bwd).direction_pt(), Coord::new(2.0, 0.0));
    }

    #[test]
    fn out_edges_sorted_counter_clockwise() {
        let mut graph = PlanarGraph::new();
        // Star around the origin, inserted out of angular order.
        let south = graph.add_line(line(&[[0.0, 0.0], [0.0, -1.0]]));
        let east = graph.add_line(line(&[[0.0, 0.0], [1.0, 0.0]]));
        let west = graph.add_line(line(&[[-1.0, 0.0], [0.0, 0.0]]));
        let north = graph.add_line(line(&[[0.0, 0.0], [0.0, 1.0]]));

        let center = graph.find_node(Coord::new(0.0, 0.0)).unwrap();
        let expected = vec![
            graph.edge(east).forward(),
            graph.edge(north).forward(),
            graph.edge(west).backward(),
            graph.edge(south).forward(),
        ];
        assert_eq!(graph.node(center).out_edges(), expected.as_slice());
    }

    #[test]
    fn collinear_directions_break_ties_on_direction_point() {
        let mut graph = PlanarGraph::new();
        let far = graph.add_line(line(&[[0.0, 0.0], [2.0, 0.0], [2.0, 1.0]]));
        let near = graph.add_line(line(&[[0.0, 0.0], [1.0, 0.0], [1.0, -1.0]]));

        let origin = graph.find_node(Coord::new(0.0, 0.0)).unwrap();
        assert_eq!(
            graph.node(origin).out_edges(),
            &[graph.edge(near).forward(), graph.edge(far).forward()]
        );
    }

    #[test]
    fn self_loop_has_two_out_edges_at_one_node() {
        let mut graph = PlanarGraph::new();
        let e = graph.add_line(line(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]));

        assert!(graph.edge(e).is_self_loop());
        assert_eq!(graph.node_count(), 1);
        let node = graph.find_node(Coord::new(0.0, 0.0)).unwrap();
        assert_eq!(graph.degree(node), 2);
    }

    #[test]
    fn remove_edge_updates_incidence() {
        let mut graph = PlanarGraph::new();
        let a = graph.add_line(line(&[[0.0, 0.0], [1.0, 0.0]]));
        graph.add_line(line(&[[1.0, 0.0], [2.0, 0.0]]));

        graph.remove_edge(a);
        graph.remove_edge(a);

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.node_count(), 2);
        assert!(graph.find_node(Coord::new(0.0, 0.0)).is_none());
        let mid = graph.find_node(Coord::new(1.0, 0.0)).unwrap();
        assert_eq!(graph.degree(mid), 1);
        assert_eq!(graph.dir_edge_ids().count(), 2);
    }

    #[test]
    fn append_coords_follows_direction() {
        let mut graph = PlanarGraph::new();
        let e = graph.add_line(line(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]));
        let [fwd, bwd] = graph.edge(e).dir_edges();

        let mut out = Vec::new();
        graph.append_coords(fwd, &mut out);
        assert_eq!(out, line(&[[0.0, 0.0], [1.0, 0.0]]));

        out.clear();
        graph.append_coords(bwd, &mut out);
        assert_eq!(out, line(&[[1.0, 1.0], [1.0, 0.0]]));
    }
}
