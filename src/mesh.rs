//! 1-D finite-volume mesh
//!
//! The spatial domain is divided into `n` uniform control volumes (cells).
//! Fields live at the cell centres; fluxes live at the cell edges. The two
//! grids interleave: `edge[i] < centre[i] < edge[i+1]`, with `n + 1` edges
//! bracketing `n` centres.
//!
//! The mesh is immutable once constructed. It is built once per simulation
//! configuration and consulted by [`Operators`](crate::operators::Operators)
//! and the models for geometric consistency.
//!
//! # Example
//!
//! ```rust
//! use echem_rs::mesh::Mesh;
//!
//! let mesh = Mesh::new(10).unwrap();
//! assert_eq!(mesh.cells(), 10);
//! assert_eq!(mesh.edges().len(), 11);
//! assert!((mesh.cell_width() - 0.1).abs() < 1e-15);
//! ```

use crate::error::MeshError;
use nalgebra::DVector;

/// Uniform 1-D finite-volume grid over `[0, length]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    centres: DVector<f64>,
    edges: DVector<f64>,
    length: f64,
}

impl Mesh {
    /// Create a mesh with `cells` control volumes over the normalised
    /// domain `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidMesh`] when `cells == 0`.
    pub fn new(cells: usize) -> Result<Self, MeshError> {
        Self::with_length(cells, 1.0)
    }

    /// Create a mesh with `cells` control volumes over `[0, length]`.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidMesh`] when `cells == 0` and
    /// [`MeshError::InvalidLength`] when `length` is not finite and
    /// positive.
    pub fn with_length(cells: usize, length: f64) -> Result<Self, MeshError> {
        if cells < 1 {
            return Err(MeshError::InvalidMesh { cells });
        }
        if !length.is_finite() || length <= 0.0 {
            return Err(MeshError::InvalidLength { length });
        }

        // Edges are computed as fractions of the full length so that the
        // first and last edges are exactly 0 and `length`.
        let n = cells;
        let edges = DVector::from_fn(n + 1, |i, _| length * (i as f64) / (n as f64));
        let centres = DVector::from_fn(n, |i, _| 0.5 * (edges[i] + edges[i + 1]));

        Ok(Self {
            centres,
            edges,
            length,
        })
    }

    /// Number of cells (centres).
    pub fn cells(&self) -> usize {
        self.centres.len()
    }

    /// Cell centre positions, strictly increasing, length `n`.
    pub fn centres(&self) -> &DVector<f64> {
        &self.centres
    }

    /// Cell edge positions, strictly increasing, length `n + 1`,
    /// including both domain boundaries.
    pub fn edges(&self) -> &DVector<f64> {
        &self.edges
    }

    /// Uniform cell width `length / n`.
    pub fn cell_width(&self) -> f64 {
        self.length / (self.cells() as f64)
    }

    /// Domain length.
    pub fn length(&self) -> f64 {
        self.length
    }
}

// =================================================================================================
// Tests
// =================================================================================================
