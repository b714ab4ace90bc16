//! Removal of edges that cannot bound a polygon.

use crate::geom::LineString;
use crate::graph::{EdgeId, NodeId, PlanarGraph};

use super::trace::{compute_next_edges, label_face_cycles};

/// Removes every dangling edge and returns their chains in removal order.
///
/// A node of degree one ends a spur. Removing its edge can leave the node at
/// the other end with degree one as well, so nodes are processed from a
/// worklist until none of degree one remain. A self-loop gives its node
/// degree two and is never a dangle on its own.
pub fn delete_dangles(graph: &mut PlanarGraph) -> Vec<LineString> {
    let mut stack: Vec<NodeId> = graph
        .nodes()
        .filter(|(_, n)| n.degree() == 1)
        .map(|(id, _)| id)
        .collect();

    let mut dangles = Vec::new();
    while let Some(node) = stack.pop() {
        if graph.node(node).is_removed() || graph.degree(node) != 1 {
            continue;
        }

        let de = graph.node(node).out_edges()[0];
        let far = graph.dir_edge(de).dest();
        let edge = graph.dir_edge(de).edge();

        dangles.push(graph.edge(edge).to_line_string());
        graph.remove_edge(edge);

        if graph.degree(far) == 1 {
            stack.push(far);
        }
    }

    if !dangles.is_empty() {
        log::debug!("removed {} dangles", dangles.len());
    }
    dangles
}

/// Removes every cut edge and returns their chains in edge order.
///
/// An edge whose two directed edges end up in the same face cycle separates
/// nothing: the face wraps around it on both sides. Such bridges cannot be
/// part of a polygon boundary. Should run after [`delete_dangles`]; a dangle
/// also satisfies the same-cycle test and would be reported here otherwise.
pub fn delete_cut_edges(graph: &mut PlanarGraph) -> Vec<LineString> {
    compute_next_edges(graph);
    label_face_cycles(graph);

    let cut: Vec<EdgeId> = graph
        .edges()
        .filter(|(_, e)| {
            let label = graph.dir_edge(e.forward()).label();
            label.is_some() && label == graph.dir_edge(e.backward()).label()
        })
        .map(|(id, _)| id)
        .collect();

    let mut cut_edges = Vec::with_capacity(cut.len());
    for edge in cut {
        cut_edges.push(graph.edge(edge).to_line_string());
        graph.remove_edge(edge);
    }

    if !cut_edges.is_empty() {
        log::debug!("removed {} cut edges", cut_edges.len());
    }
    cut_edges
}
