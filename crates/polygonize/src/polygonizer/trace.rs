//! Face tracing over the planar graph.
//!
//! The `next` rule: a directed edge `e` arriving at node `n` continues with
//! the outgoing edge at `n` that comes immediately clockwise from `e.sym`.
//! Following `next` therefore keeps the face on the left, so bounded faces
//! are traced counter-clockwise and the outside of each connected component
//! is traced clockwise.

use std::collections::HashMap;

use crate::geom::Coord;
use crate::graph::{DirEdgeId, NodeId, PlanarGraph};

/// Sets the `next` link of every live directed edge.
///
/// For each node with outgoing edges `o[0..k]` in counter-clockwise order,
/// the edge arriving along `o[i]` (that is, `o[i].sym`) continues with
/// `o[i - 1]`, wrapping around. A node of degree one sends an edge straight
/// back along its sym.
pub fn compute_next_edges(graph: &mut PlanarGraph) {
    let assignments: Vec<(DirEdgeId, DirEdgeId)> = graph
        .nodes()
        .flat_map(|(_, node)| {
            let out = node.out_edges();
            let k = out.len();
            (0..k).map(move |i| (out[i], out[(i + k - 1) % k]))
        })
        .map(|(outgoing, next)| (graph.dir_edge(outgoing).sym(), next))
        .collect();

    for (incoming, next) in assignments {
        graph.dir_edge_mut(incoming).set_next(Some(next));
    }
}

/// Walks every face cycle once and labels its directed edges.
///
/// Clears previous labels and visited flags first. Returns the cycles in
/// discovery order; the label of each directed edge is the index of its
/// cycle in the returned list. Requires [`compute_next_edges`] to have run on
/// the current graph.
pub fn label_face_cycles(graph: &mut PlanarGraph) -> Vec<Vec<DirEdgeId>> {
    let ids: Vec<DirEdgeId> = graph.dir_edge_ids().collect();
    for &de in &ids {
        let d = graph.dir_edge_mut(de);
        d.set_label(None);
        d.set_visited(false);
    }

    let mut cycles = Vec::new();
    for &start in &ids {
        if graph.dir_edge(start).is_visited() {
            continue;
        }

        let label = cycles.len();
        let mut cycle = Vec::new();
        let mut current = start;
        loop {
            let d = graph.dir_edge_mut(current);
            d.set_visited(true);
            d.set_label(Some(label));
            cycle.push(current);

            match graph.dir_edge(current).next() {
                Some(next) if next != start => current = next,
                _ => break,
            }
            if cycle.len() > ids.len() {
                debug_assert!(false, "next links do not form a permutation");
                break;
            }
        }
        cycles.push(cycle);
    }

    log::trace!("labelled {} face cycles over {} directed edges", cycles.len(), ids.len());
    cycles
}

/// Splits a face cycle that passes through a node more than once into rings
/// that each visit their nodes exactly once.
///
/// Walks the cycle keeping the open path on a stack; when the path comes
/// back to a node already on it, the loop closed there is cut off as its own
/// ring. Every directed edge of `cycle` ends up in exactly one output ring.
pub fn split_at_repeated_nodes(graph: &PlanarGraph, cycle: &[DirEdgeId]) -> Vec<Vec<DirEdgeId>> {
    let mut rings = Vec::new();
    let mut path: Vec<DirEdgeId> = Vec::with_capacity(cycle.len());
    let mut on_path: HashMap<NodeId, usize> = HashMap::new();

    for &de in cycle {
        let origin = graph.dir_edge(de).origin();
        if let Some(&at) = on_path.get(&origin) {
            let ring: Vec<DirEdgeId> = path.drain(at..).collect();
            for d in &ring {
                on_path.remove(&graph.dir_edge(*d).origin());
            }
            rings.push(ring);
        }
        on_path.insert(origin, path.len());
        path.push(de);
    }

    if !path.is_empty() {
        rings.push(path);
    }
    rings
}

/// Collects the closed coordinate ring traced by a sequence of directed edges.
pub fn ring_coords(graph: &PlanarGraph, ring: &[DirEdgeId]) -> Vec<Coord> {
    let mut coords = Vec::new();
    for &de in ring {
        graph.append_coords(de, &mut coords);
    }
    if let Some(&first) = coords.first() {
        coords.push(first);
    }
    coords
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicates::signed_area;

    fn line(points: &[[f64; 2]]) -> Vec<Coord> {
        points.iter().map(|&[x, y]| Coord::new(x, y)).collect()
    }

    fn square_graph() -> PlanarGraph {
        let mut graph = PlanarGraph::new();
        graph.add_line(line(&[[0.0, 0.0], [1.0, 0.0]]));
        graph.add_line(line(&[[1.0, 0.0], [1.0, 1.0]]));
        graph.add_line(line(&[[1.0, 1.0], [0.0, 1.0]]));
        graph.add_line(line(&[[0.0, 1.0], [0.0, 0.0]]));
        graph
    }

    #[test]
    fn next_links_follow_face_on_left() {
        let mut graph = square_graph();
        compute_next_edges(&mut graph);

        let bottom = graph.edge(crate::graph::EdgeId(0)).forward();
        let right = graph.edge(crate::graph::EdgeId(1)).forward();
        assert_eq!(graph.dir_edge(bottom).next(), Some(right));
    }

    #[test]
    fn square_has_inner_and_outer_cycle() {
        let mut graph = square_graph();
        compute_next_edges(&mut graph);
        let cycles = label_face_cycles(&mut graph);

        assert_eq!(cycles.len(), 2);
        let areas: Vec<f64> = cycles
            .iter()
            .map(|c| signed_area(&ring_coords(&graph, c)))
            .collect();
        assert!(areas.contains(&1.0));
        assert!(areas.contains(&-1.0));

        for (label, cycle) in cycles.iter().enumerate() {
            for &de in cycle {
                assert_eq!(graph.dir_edge(de).label(), Some(label));
                assert!(graph.dir_edge(de).is_visited());
            }
        }
    }

    #[test]
    fn self_loop_traces_itself() {
        let mut graph = PlanarGraph::new();
        let e = graph.add_line(line(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]]));
        compute_next_edges(&mut graph);

        let [fwd, bwd] = graph.edge(e).dir_edges();
        assert_eq!(graph.dir_edge(fwd).next(), Some(fwd));
        assert_eq!(graph.dir_edge(bwd).next(), Some(bwd));

        let coords = ring_coords(&graph, &[fwd]);
        assert_eq!(coords.len(), 5);
        assert_eq!(coords.first(), coords.last());
        assert_eq!(signed_area(&coords), 1.0);
    }

    #[test]
    fn dangling_edge_turns_back() {
        let mut graph = PlanarGraph::new();
        let e = graph.add_line(line(&[[0.0, 0.0], [1.0, 0.0]]));
        compute_next_edges(&mut graph);

        let [fwd, bwd] = graph.edge(e).dir_edges();
        assert_eq!(graph.dir_edge(fwd).next(), Some(bwd));
        assert_eq!(graph.dir_edge(bwd).next(), Some(fwd));
    }

    #[test]
    fn bowtie_outer_cycle_splits_at_shared_node() {
        let mut graph = PlanarGraph::new();
        // Two triangles touching at the origin.
        graph.add_line(line(&[[0.0, 0.0], [1.0, 1.0], [1.0, -1.0], [0.0, 0.0]]));
        graph.add_line(line(&[[0.0, 0.0], [-1.0, 1.0], [-1.0, -1.0], [0.0, 0.0]]));
        compute_next_edges(&mut graph);
        let cycles = label_face_cycles(&mut graph);

        let outer = cycles
            .iter()
            .find(|c| c.len() == 2)
            .expect("outer face visits both loops");
        let rings = split_at_repeated_nodes(&graph, outer);
        assert_eq!(rings.len(), 2);
        for ring in &rings {
            assert_eq!(ring.len(), 1);
            assert!(signed_area(&ring_coords(&graph, ring)) < 0.0);
        }
    }

    #[test]
    fn simple_cycle_is_not_split() {
        let mut graph = square_graph();
        compute_next_edges(&mut graph);
        let cycles = label_face_cycles(&mut graph);
        for cycle in &cycles {
            let rings = split_at_repeated_nodes(&graph, cycle);
            assert_eq!(rings.len(), 1);
            assert_eq!(rings[0].len(), 4);
        }
    }
}
