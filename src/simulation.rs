//! Simulation orchestration
//!
//! Wires a model, a method registry and a solver together: the initial
//! state comes from the model, every RHS evaluation routes through a
//! [`Variables`] snapshot, and the result is the solver's trajectory.
//! Deliberately thin: plotting and export belong to the calling
//! application.
//!
//! # Example
//!
//! ```rust
//! use echem_rs::mesh::Mesh;
//! use echem_rs::models::ReactionDiffusionModel;
//! use echem_rs::parameters::Parameters;
//! use echem_rs::simulation::Simulation;
//! use echem_rs::solver::TimeSpan;
//!
//! let model = ReactionDiffusionModel::new(Parameters::default(), Mesh::new(10).unwrap());
//! let simulation = Simulation::new(model);
//!
//! let trajectory = simulation.run(TimeSpan::new(0.0, 1.0, 100), "rk4").unwrap();
//! assert_eq!(trajectory.len(), 101);
//! ```

use crate::error::SolverError;
use crate::models::Model;
use crate::solver::{MethodRegistry, Solver, TimeSpan, Trajectory};
use crate::variables::Variables;

/// One configured simulation: a model plus the solver machinery to drive
/// it.
pub struct Simulation<M: Model> {
    model: M,
    registry: MethodRegistry,
}

impl<M: Model> Simulation<M> {
    /// Configure a simulation with the standard method registry.
    pub fn new(model: M) -> Self {
        Self::with_registry(model, MethodRegistry::standard())
    }

    /// Configure a simulation with an explicit registry.
    pub fn with_registry(model: M, registry: MethodRegistry) -> Self {
        Self { model, registry }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn registry(&self) -> &MethodRegistry {
        &self.registry
    }

    /// Integrate the model's equations over `span` with the named method.
    ///
    /// Each RHS evaluation unpacks the solver's flat state into a
    /// [`Variables`] snapshot before handing it to the model, so the model
    /// only ever sees named fields.
    pub fn run(&self, span: TimeSpan, method: &str) -> Result<Trajectory, SolverError> {
        let y0 = self.model.initial_conditions()?;
        let mut vars = Variables::new(&self.model);

        let solver = Solver::new(&self.registry);
        solver.integrate(
            |t, y| {
                vars.update(t, y)?;
                Ok(self.model.pdes_rhs(&vars)?)
            },
            &y0,
            span,
            method,
        )
    }
}

// =================================================================================================
// Tests
// =================================================================================================
