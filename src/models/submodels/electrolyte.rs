//! Electrolyte transport equations
//!
//! Stefan-Maxwell diffusion of cations in a binary electrolyte, discretised
//! with the finite-volume operator pair. The submodel owns its boundary
//! strategy: zero-flux Neumann conditions in production, or the analytic
//! overrides of a verification run.
//!
//! # Discretisation
//!
//! The conservation law `dc/dt = -div(N) + s*j` with `N = -grad(c)` is
//! assembled in three steps: interior flux by differencing, boundary fluxes
//! injected explicitly, divergence of the full edge field. See
//! [`crate::operators`] for why the boundary values never come from
//! differencing.

use crate::error::ModelError;
use crate::mesh::Mesh;
use crate::models::BoundaryStrategy;
use crate::operators::Operators;
use crate::parameters::Parameters;
use crate::variables::{Field, Variables};
use nalgebra::DVector;
use std::rc::Rc;

/// Conservation of cations in the electrolyte.
pub struct StefanMaxwellDiffusion {
    c0: f64,
    s: f64,
    cells: usize,
    operators: Operators,
    boundary: Rc<BoundaryStrategy>,
}

impl StefanMaxwellDiffusion {
    /// Assemble the submodel from the simulation-wide parameters, mesh and
    /// boundary strategy.
    pub fn new(params: &Parameters, mesh: &Mesh, boundary: Rc<BoundaryStrategy>) -> Self {
        Self {
            c0: params.c0,
            s: params.s,
            cells: mesh.cells(),
            operators: Operators::new(mesh),
            boundary,
        }
    }

    /// Initial concentration over the cell centres.
    ///
    /// Production: uniform `c0`. Override: the bundle's initial array,
    /// verbatim.
    pub fn initial_conditions(&self) -> Result<DVector<f64>, ModelError> {
        match self.boundary.as_ref() {
            BoundaryStrategy::Production => Ok(DVector::from_element(self.cells, self.c0)),
            BoundaryStrategy::Override(tests) => tests.initial(Field::Concentration),
        }
    }

    /// Time derivative of the concentration: `dcdt = -div(N) + s*j`.
    ///
    /// The flux field `N` is `-grad(c)` in the interior with the Neumann
    /// boundary values concatenated on, ordered left / interior / right.
    pub fn cation_conservation(&self, vars: &Variables) -> Result<DVector<f64>, ModelError> {
        let ((flux_bc_left, flux_bc_right), j) = match self.boundary.as_ref() {
            BoundaryStrategy::Production => (self.flux_bcs(), vars.j().clone()),
            BoundaryStrategy::Override(tests) => (
                tests.boundary_fluxes(vars.t(), Field::Concentration)?,
                tests.source(vars.t(), Field::Concentration, self.cells)?,
            ),
        };

        let n_internal = -self.operators.grad(vars.c())?;
        let n = self
            .operators
            .with_boundary_fluxes(flux_bc_left, &n_internal, flux_bc_right)?;

        Ok(-self.operators.div(&n)? + self.s * j)
    }

    /// Built-in flux boundary conditions: no flux of cations through
    /// either end of the domain.
    fn flux_bcs(&self) -> (f64, f64) {
        (0.0, 0.0)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
