//! The [`Mesh`] arena: cells plus their explicit adjacency relation.

use std::fmt;

use crate::geom::{Cell, Point};

/// Arena handle of a cell within a [`Mesh`].
///
/// Stable for the lifetime of the mesh that produced it. All search-side
/// bookkeeping is keyed by `CellId` rather than by cell value or reference.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellId(usize);

impl CellId {
    /// The arena index behind this handle.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Structural defects detected when building a [`Mesh`].
///
/// All variants are caller/data errors; a mesh that constructs successfully
/// cannot fail validation later.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeshError {
    /// A cell's bounds are inverted or enclose zero area.
    #[error("cell {index} has inverted or zero-area bounds")]
    DegenerateCell { index: usize },

    /// The adjacency table does not have one entry per cell.
    #[error("adjacency table has {entries} entries for {cells} cells")]
    AdjacencySize { cells: usize, entries: usize },

    /// An adjacency list references an index outside the cell arena.
    #[error("cell {cell} lists neighbor {neighbor}, which is not in the mesh")]
    UnknownNeighbor { cell: usize, neighbor: usize },
}

/// An immutable collection of cells plus, for each cell, the cells directly
/// reachable from it.
///
/// Cells are expected to be pairwise non-overlapping (a mesh-construction
/// contract upstream of this crate, not re-verified here); adjacency is
/// explicit and need not be symmetric in representation. A constructed mesh
/// is never mutated and is safe to share across concurrent queries.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Mesh {
    cells: Vec<Cell>,
    adjacency: Vec<Vec<CellId>>,
}

impl Mesh {
    /// Build a mesh from a cell arena and per-cell neighbor lists.
    ///
    /// `adjacency[i]` holds the arena indices reachable from cell `i`.
    /// Fails fast on degenerate cell bounds or dangling neighbor indices, so
    /// a search never has to defend against them.
    pub fn new(cells: Vec<Cell>, adjacency: Vec<Vec<usize>>) -> Result<Self, MeshError> {
        for (index, cell) in cells.iter().enumerate() {
            if cell.is_degenerate() {
                return Err(MeshError::DegenerateCell { index });
            }
        }
        if adjacency.len() != cells.len() {
            return Err(MeshError::AdjacencySize {
                cells: cells.len(),
                entries: adjacency.len(),
            });
        }
        let adjacency = adjacency
            .into_iter()
            .enumerate()
            .map(|(cell, neighbors)| {
                neighbors
                    .into_iter()
                    .map(|neighbor| {
                        if neighbor < cells.len() {
                            Ok(CellId(neighbor))
                        } else {
                            Err(MeshError::UnknownNeighbor { cell, neighbor })
                        }
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { cells, adjacency })
    }

    /// Number of cells in the mesh.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the mesh has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cell behind a handle.
    #[inline]
    pub fn cell(&self, id: CellId) -> Cell {
        self.cells[id.0]
    }

    /// Cells directly reachable from `id`.
    #[inline]
    pub fn neighbors(&self, id: CellId) -> &[CellId] {
        &self.adjacency[id.0]
    }

    /// Iterate over every cell with its handle.
    pub fn iter(&self) -> impl Iterator<Item = (CellId, Cell)> + '_ {
        self.cells.iter().enumerate().map(|(i, &c)| (CellId(i), c))
    }

    /// Find the cell containing `p`.
    ///
    /// Cells partition the traversable region, so at most one contains any
    /// given point. `None` means `p` lies outside the mesh; whether to
    /// recover (snap to the nearest cell, reject the query) is the caller's
    /// decision.
    pub fn locate(&self, p: Point) -> Option<CellId> {
        self.cells.iter().position(|c| c.contains(p)).map(CellId)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Mesh {
    /// Deserializes through [`Mesh::new`] so structural validation cannot be
    /// bypassed by crafted input.
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            cells: Vec<Cell>,
            adjacency: Vec<Vec<usize>>,
        }
        let raw = Raw::deserialize(deserializer)?;
        Mesh::new(raw.cells, raw.adjacency).map_err(serde::de::Error::custom)
    }
}
