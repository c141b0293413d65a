//! Reaction-diffusion model
//!
//! Conservation of cations in the electrolyte with a homogeneous
//! interfacial reaction: the simplest full model, tracking a single
//! concentration field.
//!
//! # Example
//!
//! ```rust
//! use echem_rs::mesh::Mesh;
//! use echem_rs::models::{Model, ReactionDiffusionModel};
//! use echem_rs::parameters::Parameters;
//! use echem_rs::variables::Variables;
//!
//! let model = ReactionDiffusionModel::new(Parameters::default(), Mesh::new(10).unwrap());
//! let y0 = model.initial_conditions().unwrap();
//!
//! let mut vars = Variables::new(&model);
//! vars.update(0.0, &y0).unwrap();
//! let dydt = model.pdes_rhs(&vars).unwrap();
//! assert_eq!(dydt.len(), y0.len());
//! ```

use crate::error::ModelError;
use crate::mesh::Mesh;
use crate::models::submodels::{HomogeneousReaction, StefanMaxwellDiffusion};
use crate::models::{BoundaryStrategy, Model, TestOverrides};
use crate::parameters::Parameters;
use crate::variables::{Field, StateLayout, Variables};
use nalgebra::DVector;
use std::rc::Rc;

/// Cation diffusion driven by a homogeneous interfacial reaction.
///
/// State layout: `[concentration; n]`.
pub struct ReactionDiffusionModel {
    mesh: Mesh,
    electrolyte: StefanMaxwellDiffusion,
    interface: HomogeneousReaction,
}

impl ReactionDiffusionModel {
    /// Production model: built-in zero-flux boundaries and the homogeneous
    /// reaction as the source.
    pub fn new(params: Parameters, mesh: Mesh) -> Self {
        Self::build(params, mesh, BoundaryStrategy::Production)
    }

    /// Verification model: initial conditions, boundary conditions and
    /// source terms all come from the override bundle.
    pub fn with_overrides(params: Parameters, mesh: Mesh, overrides: TestOverrides) -> Self {
        Self::build(params, mesh, BoundaryStrategy::Override(overrides))
    }

    fn build(params: Parameters, mesh: Mesh, strategy: BoundaryStrategy) -> Self {
        let boundary = Rc::new(strategy);
        let electrolyte = StefanMaxwellDiffusion::new(&params, &mesh, boundary);
        let interface = HomogeneousReaction::new(&params, mesh.length());

        Self {
            mesh,
            electrolyte,
            interface,
        }
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }
}

impl Model for ReactionDiffusionModel {
    fn layout(&self) -> StateLayout {
        StateLayout::new(vec![(Field::Concentration, self.mesh.cells())])
    }

    fn initial_conditions(&self) -> Result<DVector<f64>, ModelError> {
        self.electrolyte.initial_conditions()
    }

    fn pdes_rhs(&self, vars: &Variables) -> Result<DVector<f64>, ModelError> {
        self.electrolyte.cation_conservation(vars)
    }

    fn interfacial_current(
        &self,
        t: f64,
        _c: &DVector<f64>,
        _e: Option<&DVector<f64>>,
    ) -> DVector<f64> {
        self.interface.current_density(t, self.mesh.cells())
    }

    fn name(&self) -> &str {
        "Reaction Diffusion"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
