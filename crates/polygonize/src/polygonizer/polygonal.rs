//! Selection of shells that form valid polygonal output.
//!
//! Neighbouring faces of a planar subdivision share edges, and a face that
//! fills the hole of another touches it along the hole ring. Keeping both
//! would give overlapping or edge-sharing polygons. Selection starts from
//! shells on the outside of each component and alternates inclusion across
//! shared edges.

use std::collections::HashMap;

use crate::graph::{DirEdgeId, PlanarGraph};

use super::edge_ring::EdgeRing;

#[derive(Debug, Clone, Copy)]
enum RingRef {
    Shell(usize),
    Hole(usize),
}

/// Decides which shells to keep.
///
/// `hole_shell[j]` is the assigned shell of `holes[j]`. Returns one flag per
/// shell.
pub fn select_disjoint_shells(
    graph: &PlanarGraph,
    shells: &[EdgeRing],
    holes: &[EdgeRing],
    hole_shell: &[Option<usize>],
) -> Vec<bool> {
    let mut owner: HashMap<DirEdgeId, RingRef> = HashMap::new();
    for (i, shell) in shells.iter().enumerate() {
        owner.extend(shell.dir_edges().iter().map(|&de| (de, RingRef::Shell(i))));
    }
    for (j, hole) in holes.iter().enumerate() {
        owner.extend(hole.dir_edges().iter().map(|&de| (de, RingRef::Hole(j))));
    }

    let across = |de: DirEdgeId| owner.get(&graph.dir_edge(de).sym()).copied();

    // The shell on the other side of `de`, looking through holes to their shell.
    let adjacent_shell = |de: DirEdgeId| match across(de) {
        Some(RingRef::Shell(i)) => Some(i),
        Some(RingRef::Hole(j)) => hole_shell[j],
        None => None,
    };

    // A hole on the other side of `de` that lies in no shell.
    let outer_hole = |de: DirEdgeId| match across(de) {
        Some(RingRef::Hole(j)) if hole_shell[j].is_none() => Some(j),
        _ => None,
    };

    let mut included: Vec<Option<bool>> = vec![None; shells.len()];
    let mut seen_outer = vec![false; holes.len()];

    for (i, shell) in shells.iter().enumerate() {
        if let Some(j) = shell.dir_edges().iter().find_map(|&de| outer_hole(de)) {
            if !seen_outer[j] {
                included[i] = Some(true);
                seen_outer[j] = true;
            }
        }
    }

    loop {
        let mut progressed = false;
        let mut pending = None;

        for i in 0..shells.len() {
            if included[i].is_some() {
                continue;
            }
            let neighbour = shells[i]
                .dir_edges()
                .iter()
                .filter_map(|&de| adjacent_shell(de))
                .find_map(|s| included[s]);
            match neighbour {
                Some(inc) => {
                    included[i] = Some(!inc);
                    progressed = true;
                }
                None => pending = pending.or(Some(i)),
            }
        }

        match pending {
            None => break,
            // Nothing decided this round: seed the first undecided shell.
            Some(i) if !progressed => included[i] = Some(true),
            Some(_) => {}
        }
    }

    included.into_iter().map(|inc| inc.unwrap_or(true)).collect()
}
