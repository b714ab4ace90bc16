//! Hole-to-shell assignment.

use std::collections::HashMap;

use crate::graph::{DirEdgeId, PlanarGraph};

use super::edge_ring::EdgeRing;

/// Finds the innermost shell that encloses `hole`.
///
/// Every shell whose envelope contains the hole's and whose interior holds a
/// hole vertex is a candidate; nested candidates are resolved by taking the
/// one with the smallest area. Returns the index into `shells`.
pub fn find_containing_shell(hole: &EdgeRing, shells: &[EdgeRing]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, shell) in shells.iter().enumerate() {
        if !shell.encloses(hole) {
            continue;
        }
        match best {
            Some((_, area)) if area <= shell.area() => {}
            _ => best = Some((i, shell.area())),
        }
    }
    best.map(|(i, _)| i)
}

/// Assigns every hole to its innermost enclosing shell.
///
/// Returns, per hole, the index of its shell, or `None` if no shell encloses it.
pub fn assign_holes(holes: &[EdgeRing], shells: &[EdgeRing]) -> Vec<Option<usize>> {
    holes
        .iter()
        .map(|hole| {
            let shell = find_containing_shell(hole, shells);
            log::trace!(
                "hole with area {} assigned to shell {:?}",
                hole.area(),
                shell
            );
            shell
        })
        .collect()
}

/// Returns the shell tracing the same edges as `hole` in the opposite
/// direction, if there is one.
///
/// `owner` maps every shell directed edge to its shell index.
fn filling_shell(
    graph: &PlanarGraph,
    hole: &EdgeRing,
    shells: &[EdgeRing],
    owner: &HashMap<DirEdgeId, usize>,
) -> Option<usize> {
    let shell_of = |de: DirEdgeId| owner.get(&graph.dir_edge(de).sym()).copied();
    let first = *hole.dir_edges().first()?;
    let s = shell_of(first)?;
    let exact = shells[s].dir_edges().len() == hole.dir_edges().len()
        && hole.dir_edges().iter().all(|&de| shell_of(de) == Some(s));
    exact.then_some(s)
}

/// Decides which shells become polygons.
///
/// A shell that fills a hole of a kept shell is dropped: the face is already
/// represented as that hole. Shells are decided from the largest area down,
/// so the shell a hole belongs to is always decided before the shell filling
/// it. Returns one flag per shell.
pub fn drop_hole_fillers(
    graph: &PlanarGraph,
    shells: &[EdgeRing],
    holes: &[EdgeRing],
    hole_shell: &[Option<usize>],
) -> Vec<bool> {
    let mut owner: HashMap<DirEdgeId, usize> = HashMap::new();
    for (i, shell) in shells.iter().enumerate() {
        owner.extend(shell.dir_edges().iter().map(|&de| (de, i)));
    }

    let mut fills: Vec<Option<usize>> = vec![None; shells.len()];
    for (j, hole) in holes.iter().enumerate() {
        if let Some(s) = filling_shell(graph, hole, shells, &owner) {
            fills[s] = Some(j);
        }
    }

    let mut order: Vec<usize> = (0..shells.len()).collect();
    order.sort_by(|&a, &b| shells[b].area().total_cmp(&shells[a].area()));

    let mut keep = vec![true; shells.len()];
    for s in order {
        if let Some(parent) = fills[s].and_then(|j| hole_shell[j]) {
            if keep[parent] {
                log::trace!("shell {} fills a hole of shell {}, dropped", s, parent);
                keep[s] = false;
            }
        }
    }
    keep
}
