//! [`PathFinder`]: the query coordinator, plus its internal search records.

use navmesh_core::{CellId, Point};

/// A successful query: the point-level path plus every cell the search
/// touched.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Ordered points from the source to the destination, inclusive. Every
    /// interior point lies on the boundary of the cell it transits.
    pub points: Vec<Point>,
    /// Cells that received a transit point, in first-visit order across both
    /// directions. Diagnostic only; handy for rendering the search
    /// footprint.
    pub explored: Vec<CellId>,
}

impl Route {
    /// Total length of the path polyline.
    pub fn cost(&self) -> f64 {
        self.points.windows(2).map(|w| w[0].distance(w[1])).sum()
    }
}

// ---------------------------------------------------------------------------
// Internal per-direction search records
// ---------------------------------------------------------------------------

/// Per-cell record for one search direction.
#[derive(Clone)]
pub(crate) struct Node {
    /// Best known cost from this direction's origin.
    pub(crate) g: f64,
    /// Arena index of the predecessor cell, `usize::MAX` at the origin.
    pub(crate) parent: usize,
    /// Transit point recorded for this cell.
    pub(crate) detail: Point,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0.0,
            parent: usize::MAX,
            detail: Point::ZERO,
            generation: 0,
            open: false,
        }
    }
}

/// Frontier entry ordered by estimated total cost `f`.
///
/// `seq` is a per-query monotone push counter: among equal priorities the
/// earlier push pops first, so exploration order is deterministic.
#[derive(Clone, Copy)]
pub(crate) struct FrontierRef {
    pub(crate) id: CellId,
    pub(crate) f: f64,
    pub(crate) seq: u64,
}

impl PartialEq for FrontierRef {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl Eq for FrontierRef {}

impl Ord for FrontierRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest f first. Costs
        // are finite on finite meshes, hence the Equal fallback.
        other
            .f
            .partial_cmp(&self.f)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// Central coordinator for path queries over a box mesh.
///
/// Owns the two per-direction node arrays and reuses them across queries.
/// A per-query generation stamp lazily invalidates old entries, so no state
/// from one query is observable in the next and repeated queries allocate
/// only their output after warm-up.
pub struct PathFinder {
    pub(crate) fwd: Vec<Node>,
    pub(crate) bwd: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) expansion_limit: Option<usize>,
}

impl Default for PathFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl PathFinder {
    /// Create a finder with no expansion limit.
    ///
    /// Node storage grows to the largest mesh queried and is reused
    /// afterwards.
    pub fn new() -> Self {
        Self {
            fwd: Vec::new(),
            bwd: Vec::new(),
            generation: 0,
            expansion_limit: None,
        }
    }

    /// Create a finder that abandons any query after `limit` node
    /// expansions, both directions combined.
    ///
    /// A bounded mesh terminates on its own; the limit is a guard for
    /// callers that cannot vouch for the meshes they are handed.
    pub fn with_expansion_limit(limit: usize) -> Self {
        Self {
            expansion_limit: Some(limit),
            ..Self::new()
        }
    }

    /// Grow node storage to cover `len` cells and invalidate prior entries.
    ///
    /// If the mesh fits within existing capacity only the generation is
    /// bumped; no reallocation happens.
    pub(crate) fn prepare(&mut self, len: usize) {
        if self.fwd.len() < len {
            self.fwd.clear();
            self.fwd.resize(len, Node::default());
            self.bwd.clear();
            self.bwd.resize(len, Node::default());
            self.generation = 0;
        }
        self.generation = self.generation.wrapping_add(1);
    }
}
