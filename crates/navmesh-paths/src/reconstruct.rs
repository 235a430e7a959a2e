//! Splicing the two predecessor chains into a point-level path.

use navmesh_core::{CellId, Point};

use crate::finder::Node;

/// Walk both predecessor chains out from the meeting cell and join them into
/// one ordered point sequence from `source` to `destination`.
///
/// The forward chain contributes source-side transit points up to and
/// including the meeting cell; the backward chain contributes the rest,
/// starting at the meeting cell's backward predecessor so the meeting cell's
/// point appears exactly once.
pub(crate) fn splice(
    forward: &[Node],
    backward: &[Node],
    meeting: CellId,
    source: Point,
    destination: Point,
) -> Vec<Point> {
    let mut points = Vec::new();

    // Meeting cell back to the source cell, then reversed.
    let mut idx = meeting.index();
    while idx != usize::MAX {
        points.push(forward[idx].detail);
        idx = forward[idx].parent;
    }
    points.reverse();

    // Backward predecessor of the meeting cell onward to the destination
    // cell, already in travel order.
    let mut idx = backward[meeting.index()].parent;
    while idx != usize::MAX {
        points.push(backward[idx].detail);
        idx = backward[idx].parent;
    }

    // Exact endpoint fidelity, whatever transit points the endpoint cells
    // recorded internally.
    if points.first() != Some(&source) {
        points.insert(0, source);
    }
    if points.last() != Some(&destination) {
        points.push(destination);
    }
    points
}
