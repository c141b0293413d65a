//! Discrete spatial operators
//!
//! The finite-volume discretisation splits into two linear maps plus an
//! explicit boundary-injection step:
//!
//! - [`Operators::grad`]: first-order differences of a centre field,
//!   producing the flux at the *interior* edges only. Boundary edges are
//!   deliberately not produced here: boundary fluxes come from boundary
//!   conditions, not from differencing.
//! - [`Operators::with_boundary_fluxes`]: concatenates the Neumann
//!   boundary values onto the interior flux to form the full edge field.
//! - [`Operators::div`]: differences of the full edge flux, producing one
//!   divergence value per centre.
//!
//! This split decouples the interior discretisation from physics-specific
//! boundary conditions, so every model variant reuses the same operators.
//!
//! # Consistency
//!
//! For any constant field `c` and zero boundary fluxes,
//! `div(with_boundary_fluxes(0, grad(c), 0))` is the zero vector: a uniform
//! field under zero-flux boundaries has no spurious divergence.

use crate::error::OperatorError;
use crate::mesh::Mesh;
use nalgebra::DVector;

/// Discrete gradient/divergence pair for a uniform 1-D mesh.
///
/// Stateless beyond the cell count and spacing captured from the owning
/// mesh at construction time, so it is cheap to clone and safe to share
/// across sequential runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operators {
    cells: usize,
    dx: f64,
}

impl Operators {
    /// Build the operator pair from a mesh.
    pub fn new(mesh: &Mesh) -> Self {
        Self {
            cells: mesh.cells(),
            dx: mesh.cell_width(),
        }
    }

    /// Number of cells this operator pair was built for.
    pub fn cells(&self) -> usize {
        self.cells
    }

    /// Gradient of a centre field, evaluated at the interior edges.
    ///
    /// `field` has length `n`; the result has length `n - 1`:
    /// `(field[i+1] - field[i]) / dx`.
    ///
    /// # Errors
    ///
    /// [`OperatorError::DimensionMismatch`] when `field.len() != n`.
    pub fn grad(&self, field: &DVector<f64>) -> Result<DVector<f64>, OperatorError> {
        if field.len() != self.cells {
            return Err(OperatorError::DimensionMismatch {
                operator: "grad",
                expected: self.cells,
                got: field.len(),
            });
        }

        Ok(DVector::from_fn(self.cells - 1, |i, _| {
            (field[i + 1] - field[i]) / self.dx
        }))
    }

    /// Divergence of a full edge flux field, evaluated at the centres.
    ///
    /// `flux` has length `n + 1` (boundary fluxes included); the result has
    /// length `n`: `(flux[i+1] - flux[i]) / dx`.
    ///
    /// # Errors
    ///
    /// [`OperatorError::DimensionMismatch`] when `flux.len() != n + 1`.
    pub fn div(&self, flux: &DVector<f64>) -> Result<DVector<f64>, OperatorError> {
        if flux.len() != self.cells + 1 {
            return Err(OperatorError::DimensionMismatch {
                operator: "div",
                expected: self.cells + 1,
                got: flux.len(),
            });
        }

        Ok(DVector::from_fn(self.cells, |i, _| {
            (flux[i + 1] - flux[i]) / self.dx
        }))
    }

    /// Concatenate boundary fluxes onto an interior flux field.
    ///
    /// Ordering is left boundary, interior values in centre order, right
    /// boundary, giving the `n + 1` edge field that [`Operators::div`]
    /// expects.
    ///
    /// # Errors
    ///
    /// [`OperatorError::DimensionMismatch`] when the interior flux does not
    /// have length `n - 1`.
    pub fn with_boundary_fluxes(
        &self,
        left: f64,
        interior: &DVector<f64>,
        right: f64,
    ) -> Result<DVector<f64>, OperatorError> {
        if interior.len() != self.cells - 1 {
            return Err(OperatorError::DimensionMismatch {
                operator: "with_boundary_fluxes",
                expected: self.cells - 1,
                got: interior.len(),
            });
        }

        let mut flux = DVector::zeros(self.cells + 1);
        flux[0] = left;
        for i in 0..interior.len() {
            flux[i + 1] = interior[i];
        }
        flux[self.cells] = right;
        Ok(flux)
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn operators(cells: usize) -> Operators {
        Operators::new(&Mesh::new(cells).unwrap())
    }

    #[test]
    fn test_grad_of_linear_field_is_constant() {
        // f(x) = 2x sampled at the centres has exact gradient 2 everywhere.
        let mesh = Mesh::new(10).unwrap();
        let ops = Operators::new(&mesh);
        let field = mesh.centres().map(|x| 2.0 * x);

        let grad = ops.grad(&field).unwrap();
        assert_eq!(grad.len(), 9);
        for g in grad.iter() {
            assert!((g - 2.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_grad_of_constant_field_is_zero() {
        let ops = operators(10);
        let field = DVector::from_element(10, 3.5);

        let grad = ops.grad(&field).unwrap();
        for g in grad.iter() {
            assert_eq!(*g, 0.0);
        }
    }

    #[test]
    fn test_div_of_constant_flux_is_zero() {
        let ops = operators(10);
        let flux = DVector::from_element(11, 1.0);

        let div = ops.div(&flux).unwrap();
        assert_eq!(div.len(), 10);
        for d in div.iter() {
            assert_eq!(*d, 0.0);
        }
    }

    #[test]
    fn test_div_of_linear_flux_is_constant() {
        // N(x) = x at the edges has exact divergence 1 in every cell.
        let mesh = Mesh::new(8).unwrap();
        let ops = Operators::new(&mesh);
        let flux = mesh.edges().clone_owned();

        let div = ops.div(&flux).unwrap();
        for d in div.iter() {
            assert!((d - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_consistency_uniform_field_zero_flux() {
        // div(concat(0, grad(c), 0)) == 0 for constant c.
        for n in [1, 2, 10, 33] {
            let ops = operators(n);
            let c = DVector::from_element(n, 4.2);

            let interior = ops.grad(&c).unwrap();
            let full = ops.with_boundary_fluxes(0.0, &interior, 0.0).unwrap();
            let div = ops.div(&full).unwrap();

            for d in div.iter() {
                assert_eq!(*d, 0.0, "spurious divergence on {}-cell mesh", n);
            }
        }
    }

    #[test]
    fn test_boundary_injection_ordering() {
        let ops = operators(3);
        let interior = DVector::from_vec(vec![1.0, 2.0]);

        let flux = ops.with_boundary_fluxes(-5.0, &interior, 7.0).unwrap();
        assert_eq!(flux.as_slice(), &[-5.0, 1.0, 2.0, 7.0]);
    }

    #[test]
    fn test_single_cell_flux_assembly() {
        // With one cell there are no interior edges; the edge field is just
        // the two boundary fluxes.
        let ops = operators(1);
        let interior = DVector::zeros(0);

        let flux = ops.with_boundary_fluxes(0.5, &interior, -0.5).unwrap();
        assert_eq!(flux.as_slice(), &[0.5, -0.5]);
    }

    #[test]
    fn test_grad_rejects_wrong_length() {
        let ops = operators(10);
        let field = DVector::zeros(7);

        let err = ops.grad(&field).unwrap_err();
        assert_eq!(
            err,
            OperatorError::DimensionMismatch {
                operator: "grad",
                expected: 10,
                got: 7,
            }
        );
    }

    #[test]
    fn test_div_rejects_wrong_length() {
        let ops = operators(10);
        let flux = DVector::zeros(10);

        let err = ops.div(&flux).unwrap_err();
        assert_eq!(
            err,
            OperatorError::DimensionMismatch {
                operator: "div",
                expected: 11,
                got: 10,
            }
        );
    }

    #[test]
    fn test_flux_assembly_rejects_wrong_interior_length() {
        let ops = operators(10);
        let interior = DVector::zeros(10);

        assert!(ops.with_boundary_fluxes(0.0, &interior, 0.0).is_err());
    }
}
