//! **navmesh-core**: box navigation-mesh primitives.
//!
//! This crate provides the foundational value types consumed by the
//! *navmesh* pathfinding engine: `f64` geometry primitives ([`Point`],
//! [`Cell`]) and the immutable [`Mesh`] arena pairing a cell collection with
//! its explicit adjacency relation. Meshes are validated on construction
//! ([`Mesh::new`]) and located against ([`Mesh::locate`]); they are never
//! mutated afterwards.

pub mod geom;
pub mod mesh;

pub use geom::{Cell, Point};
pub use mesh::{CellId, Mesh, MeshError};
