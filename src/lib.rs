//! echem-rs: Electrochemical Transport Simulation Framework
//!
//! A one-dimensional finite-volume framework for simulating transport in
//! battery electrolytes: cation conservation, charge conservation and the
//! interfacial reactions that couple them.
//!
//! # Architecture
//!
//! echem-rs is built on two core principles:
//!
//! 1. **Separation of Physics and Numerics**
//!    - Models define equations (what to solve)
//!    - The solver provides time-stepping methods (how to solve)
//!
//! 2. **Explicitness**
//!    - State layouts are declared by the model and enforced on every
//!      unpack
//!    - Boundary conditions and sources are fixed at construction, not
//!      looked up at runtime
//!    - Integration methods live in an immutable registry, not a global
//!
//! # Quick Start
//!
//! ```rust
//! use echem_rs::prelude::*;
//!
//! // 1. Discretise the domain and configure a model
//! let mesh = Mesh::new(40).unwrap();
//! let model = ReactionDiffusionModel::new(Parameters::default(), mesh);
//!
//! // 2. Run the simulation
//! let simulation = Simulation::new(model);
//! let trajectory = simulation.run(TimeSpan::new(0.0, 1.0, 1000), "rk4").unwrap();
//!
//! // 3. Access results
//! println!("snapshots: {}", trajectory.len());
//! println!("final time: {:?}", trajectory.final_time());
//! ```
//!
//! # Modules
//!
//! - [`mesh`]: Uniform finite-volume discretisation of the unit interval
//! - [`operators`]: Gradient and divergence on mesh data
//! - [`variables`]: Named views over the solver's flat state
//! - [`parameters`]: Dimensionless physical parameters
//! - [`models`]: Governing equations and their submodels
//! - [`solver`]: Explicit time-stepping over a method registry
//! - [`simulation`]: Orchestration from model to trajectory

// Core modules
pub mod error;
pub mod mesh;
pub mod models;
pub mod operators;
pub mod parameters;
pub mod simulation;
pub mod solver;
pub mod variables;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use echem_rs::prelude::*;
    //! ```
    pub use crate::error::SolverError;
    pub use crate::mesh::Mesh;
    pub use crate::models::{ElectrolyteCurrentModel, Model, ReactionDiffusionModel};
    pub use crate::parameters::Parameters;
    pub use crate::simulation::Simulation;
    pub use crate::solver::{MethodRegistry, Solver, TimeSpan, Trajectory};
    pub use crate::variables::{Field, StateLayout, Variables};
}
