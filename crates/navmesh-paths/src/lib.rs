//! Bidirectional heuristic pathfinding over box navigation meshes.
//!
//! The engine answers one question: given a [`Mesh`](navmesh_core::Mesh) of
//! axis-aligned cells with explicit adjacency, what is a short point-level
//! path between two points inside it? [`PathFinder::find_path`]:
//!
//! 1. resolves each endpoint to its containing cell
//!    ([`Mesh::locate`](navmesh_core::Mesh::locate)),
//! 2. runs two interleaved best-first searches over the adjacency graph, one
//!    rooted at each endpoint and guided by Euclidean distance to the
//!    opposite endpoint, with transit points produced by clamping each
//!    predecessor's transit point into the neighbor cell,
//! 3. splices the two predecessor chains at the meeting cell into a
//!    [`Route`] that starts and ends exactly on the query points.
//!
//! [`PathFinder`] owns the per-direction search state and reuses it, so
//! repeated queries allocate only their output after warm-up. Failures are
//! typed ([`PathError`]) and carry the explored cell set for diagnostics;
//! [`PathError::NoPath`] is an expected outcome on meshes with disconnected
//! regions, not a defect.

mod bidir;
mod error;
mod finder;
mod reconstruct;

pub use error::{Endpoint, PathError};
pub use finder::{PathFinder, Route};
