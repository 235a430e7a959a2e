//! Typed query failures.

use std::fmt;

use navmesh_core::{CellId, Point};

/// Which endpoint of a query failed to resolve to a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Endpoint {
    Source,
    Destination,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Source => f.write_str("source"),
            Endpoint::Destination => f.write_str("destination"),
        }
    }
}

/// Why a query produced no path.
///
/// Every variant carries the cells inspected before the failure was
/// determined, so a failed query still supports the same diagnostics and
/// rendering as a successful [`Route`](crate::Route). None of these are
/// retried: the mesh and the query points are deterministic inputs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PathError {
    /// The named endpoint lies outside every cell of the mesh. Surfaced
    /// immediately, before any search state is touched.
    #[error("{which} point {point} lies outside every cell of the mesh")]
    PointOutsideMesh {
        which: Endpoint,
        point: Point,
        explored: Vec<CellId>,
    },

    /// Both frontiers drained without meeting: the endpoints sit in regions
    /// the adjacency relation does not connect. A legitimate negative
    /// result, not a defect.
    #[error("no adjacency chain connects the source and destination cells")]
    NoPath { explored: Vec<CellId> },

    /// The expansion budget ran out before the searches met. Only possible
    /// on finders built with
    /// [`with_expansion_limit`](crate::PathFinder::with_expansion_limit).
    #[error("search expansion limit of {limit} exceeded")]
    ExpansionLimitExceeded { limit: usize, explored: Vec<CellId> },
}

impl PathError {
    /// The cells inspected before the failure was determined.
    pub fn explored(&self) -> &[CellId] {
        match self {
            Self::PointOutsideMesh { explored, .. }
            | Self::NoPath { explored }
            | Self::ExpansionLimitExceeded { explored, .. } => explored,
        }
    }
}
