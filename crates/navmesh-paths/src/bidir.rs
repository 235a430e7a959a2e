//! Bidirectional heuristic search over the cell-adjacency graph.

use std::collections::BinaryHeap;

use navmesh_core::{CellId, Mesh, Point};

use crate::error::{Endpoint, PathError};
use crate::finder::{FrontierRef, Node, PathFinder, Route};
use crate::reconstruct;

/// One direction of the search: its node storage (taken out of the finder
/// for the duration of the query), its frontier, and the point it is
/// heading for.
struct DirState {
    nodes: Vec<Node>,
    open: BinaryHeap<FrontierRef>,
    goal: Point,
}

/// What one direction did with its turn.
enum Step {
    /// Frontier drained; nothing expanded.
    Idle,
    /// One cell expanded without meeting the other direction.
    Advanced,
    /// Relaxation touched a cell the other direction has already visited.
    Met(CellId),
}

enum Outcome {
    Met(CellId),
    Exhausted,
    OverBudget(usize),
}

impl PathFinder {
    /// Compute a path from `source` to `destination` through `mesh`.
    ///
    /// Resolves each endpoint to its containing cell, then runs two
    /// interleaved best-first searches, one rooted at each endpoint and
    /// guided by Euclidean distance to the opposite endpoint. Transit
    /// points are produced by clamping the predecessor's transit point into
    /// each neighbor cell, so the reconstructed path never leaves the cells
    /// it traverses. The two searches alternate strictly, forward first,
    /// one expansion each per round; a direction whose frontier has drained
    /// is skipped while the other continues.
    ///
    /// On success the returned [`Route`] starts exactly at `source` and
    /// ends exactly at `destination`. All failures are typed
    /// ([`PathError`]) and carry the cells inspected up to that point.
    pub fn find_path(
        &mut self,
        mesh: &Mesh,
        source: Point,
        destination: Point,
    ) -> Result<Route, PathError> {
        let (source_cell, destination_cell) = match (mesh.locate(source), mesh.locate(destination))
        {
            (Some(s), Some(d)) => (s, d),
            (None, d) => {
                return Err(PathError::PointOutsideMesh {
                    which: Endpoint::Source,
                    point: source,
                    explored: d.into_iter().collect(),
                });
            }
            (Some(s), None) => {
                return Err(PathError::PointOutsideMesh {
                    which: Endpoint::Destination,
                    point: destination,
                    explored: vec![s],
                });
            }
        };

        // Both endpoints share a cell: no boundary is crossed.
        if source_cell == destination_cell {
            return Ok(Route {
                points: vec![source, destination],
                explored: vec![source_cell],
            });
        }

        self.prepare(mesh.len());
        let generation = self.generation;
        let mut seq: u64 = 0;
        let mut explored: Vec<CellId> = Vec::new();
        let mut expansions: usize = 0;

        let mut forward = DirState {
            nodes: std::mem::take(&mut self.fwd),
            open: BinaryHeap::new(),
            goal: destination,
        };
        let mut backward = DirState {
            nodes: std::mem::take(&mut self.bwd),
            open: BinaryHeap::new(),
            goal: source,
        };
        seed(&mut forward, source_cell, source, generation, &mut seq, &mut explored);
        seed(
            &mut backward,
            destination_cell,
            destination,
            generation,
            &mut seq,
            &mut explored,
        );

        let outcome = 'search: loop {
            if forward.open.is_empty() && backward.open.is_empty() {
                break Outcome::Exhausted;
            }
            for turn in 0..2 {
                let (own, other) = if turn == 0 {
                    (&mut forward, &backward)
                } else {
                    (&mut backward, &forward)
                };
                if let Some(limit) = self.expansion_limit {
                    if expansions >= limit {
                        break 'search Outcome::OverBudget(limit);
                    }
                }
                match expand(own, other, mesh, generation, &mut seq, &mut explored) {
                    Step::Idle => {}
                    Step::Advanced => expansions += 1,
                    Step::Met(cell) => {
                        expansions += 1;
                        break 'search Outcome::Met(cell);
                    }
                }
            }
        };

        let result = match outcome {
            Outcome::Met(meeting) => {
                log::debug!("frontiers met at cell {meeting} after {expansions} expansions");
                let points = reconstruct::splice(
                    &forward.nodes,
                    &backward.nodes,
                    meeting,
                    source,
                    destination,
                );
                Ok(Route { points, explored })
            }
            Outcome::Exhausted => {
                log::debug!("frontiers exhausted after {expansions} expansions with no meeting cell");
                Err(PathError::NoPath { explored })
            }
            Outcome::OverBudget(limit) => Err(PathError::ExpansionLimitExceeded { limit, explored }),
        };

        self.fwd = forward.nodes;
        self.bwd = backward.nodes;
        result
    }
}

/// Install a direction's origin: cost zero, the query endpoint itself as the
/// transit point, and a frontier entry priced at the straight-line estimate.
fn seed(
    dir: &mut DirState,
    origin: CellId,
    start: Point,
    generation: u32,
    seq: &mut u64,
    explored: &mut Vec<CellId>,
) {
    let node = &mut dir.nodes[origin.index()];
    node.g = 0.0;
    node.parent = usize::MAX;
    node.detail = start;
    node.generation = generation;
    node.open = true;
    *seq += 1;
    let f = start.distance(dir.goal);
    dir.open.push(FrontierRef {
        id: origin,
        f,
        seq: *seq,
    });
    explored.push(origin);
}

/// Give one direction a turn: pop its best frontier entry and relax every
/// neighbor of that cell.
fn expand(
    own: &mut DirState,
    other: &DirState,
    mesh: &Mesh,
    generation: u32,
    seq: &mut u64,
    explored: &mut Vec<CellId>,
) -> Step {
    // Pop until a live entry surfaces. Entries left behind by a better path
    // or by a previous query are skipped.
    let current = loop {
        let Some(entry) = own.open.pop() else {
            return Step::Idle;
        };
        let node = &own.nodes[entry.id.index()];
        if node.generation == generation && node.open {
            break entry.id;
        }
    };
    let ci = current.index();
    own.nodes[ci].open = false;
    let current_g = own.nodes[ci].g;
    let current_detail = own.nodes[ci].detail;

    for &neighbor in mesh.neighbors(current) {
        let ni = neighbor.index();
        // Constrain the transit point to the neighbor's bounds.
        let candidate = mesh.cell(neighbor).clamp(current_detail);
        let tentative = current_g + current_detail.distance(candidate);

        let node = &mut own.nodes[ni];
        if node.generation == generation {
            if tentative >= node.g {
                continue;
            }
        } else {
            node.generation = generation;
            if other.nodes[ni].generation != generation {
                explored.push(neighbor);
            }
        }
        node.g = tentative;
        node.parent = ci;
        node.detail = candidate;
        node.open = true;
        *seq += 1;
        let f = tentative + candidate.distance(own.goal);
        own.open.push(FrontierRef {
            id: neighbor,
            f,
            seq: *seq,
        });

        // The other direction already reached this cell: the searches met.
        if other.nodes[ni].generation == generation {
            return Step::Met(neighbor);
        }
    }
    Step::Advanced
}
