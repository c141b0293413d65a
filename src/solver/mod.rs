//! Time-integration driver
//!
//! The solver couples a right-hand-side function, an initial state and a
//! time span into a trajectory of states. It is split the same way as the
//! models:
//!
//! - [`MethodRegistry`]: the immutable registry of known integration
//!   methods (and spatial discretisations, for future extension), built
//!   once at startup and passed by reference into the solver. There is no
//!   ambient global lookup.
//! - [`Solver`]: the driver. It validates the requested method against the
//!   registry, then hands off to the concrete stepping scheme in
//!   [`methods`].
//! - [`Trajectory`]: the output, monotonically increasing times paired
//!   with states, starting with the initial condition exactly as supplied.
//!
//! Integration failures (NaN/Inf in the state) surface as
//! [`SolverError::IntegrationFailure`] with the step and time of first
//! detection; the solver never retries on its own, the caller decides
//! whether to rerun with a different method or resolution.
//!
//! # Example
//!
//! ```rust
//! use echem_rs::solver::{MethodRegistry, Solver, TimeSpan};
//! use nalgebra::DVector;
//!
//! let registry = MethodRegistry::standard();
//! let solver = Solver::new(&registry);
//!
//! // dy/dt = -y
//! let trajectory = solver
//!     .integrate(
//!         |_t, y| Ok(-y.clone()),
//!         &DVector::from_element(3, 1.0),
//!         TimeSpan::new(0.0, 1.0, 100),
//!         "rk4",
//!     )
//!     .unwrap();
//!
//! assert_eq!(trajectory.len(), 101);
//! ```

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod methods;

use crate::error::SolverError;
use nalgebra::DVector;

// =================================================================================================
// Integration methods and registry
// =================================================================================================

/// Known explicit time-stepping schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrationMethod {
    /// First-order forward Euler: 1 RHS evaluation per step.
    ForwardEuler,
    /// Classical fourth-order Runge-Kutta: 4 RHS evaluations per step.
    RungeKutta4,
}

impl IntegrationMethod {
    /// Registry identifier of the method.
    pub fn name(&self) -> &'static str {
        match self {
            IntegrationMethod::ForwardEuler => "forward euler",
            IntegrationMethod::RungeKutta4 => "rk4",
        }
    }
}

/// Immutable registry of known integrators and spatial discretisations.
///
/// Constructed once at process start and passed by reference into
/// [`Solver`], so method lookup is explicit rather than ambient.
#[derive(Debug, Clone)]
pub struct MethodRegistry {
    integrators: Vec<IntegrationMethod>,
    spatial_discretisations: Vec<&'static str>,
}

impl MethodRegistry {
    /// The standard registry: both explicit integrators, finite volumes in
    /// space.
    pub fn standard() -> Self {
        Self {
            integrators: vec![IntegrationMethod::ForwardEuler, IntegrationMethod::RungeKutta4],
            spatial_discretisations: vec!["finite volumes"],
        }
    }

    /// Resolve an integrator by name.
    ///
    /// # Errors
    ///
    /// [`SolverError::UnknownMethod`] listing the known identifiers.
    pub fn integrator(&self, name: &str) -> Result<IntegrationMethod, SolverError> {
        self.integrators
            .iter()
            .copied()
            .find(|m| m.name() == name)
            .ok_or_else(|| SolverError::UnknownMethod {
                method: name.to_string(),
                known: self.known_integrators(),
            })
    }

    /// Names of all registered integrators.
    pub fn known_integrators(&self) -> Vec<&'static str> {
        self.integrators.iter().map(|m| m.name()).collect()
    }

    /// Names of all registered spatial discretisations.
    pub fn known_spatial_discretisations(&self) -> &[&'static str] {
        &self.spatial_discretisations
    }
}

// =================================================================================================
// Time span
// =================================================================================================

/// Integration window `[start, end]` divided into `steps` uniform steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSpan {
    pub start: f64,
    pub end: f64,
    pub steps: usize,
}

impl TimeSpan {
    pub fn new(start: f64, end: f64, steps: usize) -> Self {
        Self { start, end, steps }
    }

    /// Step size `(end - start) / steps`.
    pub fn dt(&self) -> f64 {
        (self.end - self.start) / (self.steps as f64)
    }

    /// Check that the span is forward in time and non-degenerate.
    pub fn validate(&self) -> Result<(), SolverError> {
        if self.steps == 0 || !(self.end > self.start) {
            return Err(SolverError::InvalidTimeSpan {
                start: self.start,
                end: self.end,
                steps: self.steps,
            });
        }
        Ok(())
    }
}

// =================================================================================================
// Trajectory
// =================================================================================================

/// Sequence of `(t, y)` pairs produced by an integration run.
///
/// Times are strictly increasing; the first entry is the initial condition
/// at `span.start`, stored exactly as supplied (no resampling).
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    times: Vec<f64>,
    states: Vec<DVector<f64>>,
}

impl Trajectory {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            times: Vec::with_capacity(capacity),
            states: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, t: f64, y: DVector<f64>) {
        self.times.push(t);
        self.states.push(y);
    }

    /// Number of stored snapshots (steps + 1 for a completed run).
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn states(&self) -> &[DVector<f64>] {
        &self.states
    }

    pub fn final_time(&self) -> Option<f64> {
        self.times.last().copied()
    }

    pub fn final_state(&self) -> Option<&DVector<f64>> {
        self.states.last()
    }

    /// Iterate over `(t, y)` pairs in time order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &DVector<f64>)> {
        self.times.iter().copied().zip(self.states.iter())
    }
}

// =================================================================================================
// Solver
// =================================================================================================

/// Time-integration driver over a method registry.
///
/// Stateless apart from the registry reference; each [`Solver::integrate`]
/// call is a pure function from (RHS, initial state, span, method) to a
/// trajectory.
#[derive(Debug, Clone, Copy)]
pub struct Solver<'r> {
    registry: &'r MethodRegistry,
}

impl<'r> Solver<'r> {
    pub fn new(registry: &'r MethodRegistry) -> Self {
        Self { registry }
    }

    /// Advance `dy/dt = rhs(t, y)` from `y0` over `span` with the named
    /// method.
    ///
    /// The method is resolved against the registry before any RHS
    /// evaluation, so an unknown name performs no partial computation.
    ///
    /// # Errors
    ///
    /// - [`SolverError::UnknownMethod`] for a name not in the registry.
    /// - [`SolverError::InvalidTimeSpan`] for a degenerate span.
    /// - [`SolverError::IntegrationFailure`] when the state goes non-finite.
    /// - Any error returned by `rhs` itself, unchanged.
    pub fn integrate<F>(
        &self,
        rhs: F,
        y0: &DVector<f64>,
        span: TimeSpan,
        method: &str,
    ) -> Result<Trajectory, SolverError>
    where
        F: FnMut(f64, &DVector<f64>) -> Result<DVector<f64>, SolverError>,
    {
        let method = self.registry.integrator(method)?;
        span.validate()?;

        match method {
            IntegrationMethod::ForwardEuler => methods::euler::integrate(rhs, y0, &span),
            IntegrationMethod::RungeKutta4 => methods::rk4::integrate(rhs, y0, &span),
        }
    }
}

// =================================================================================================
// Helper Functions
// =================================================================================================

/// Check a freshly accepted state for NaN/Inf.
///
/// NaN arises from undefined operations (0/0, sqrt of a negative
/// concentration), Inf from overflow; both indicate the stepping has left
/// the stability region.
pub(crate) fn check_finite(y: &DVector<f64>, step: usize, t: f64) -> Result<(), SolverError> {
    for (i, value) in y.iter().enumerate() {
        if value.is_nan() {
            return Err(SolverError::IntegrationFailure {
                step,
                t,
                reason: format!(
                    "NaN in state component {}; numerical instability, \
                     try more time steps",
                    i
                ),
            });
        }
        if value.is_infinite() {
            return Err(SolverError::IntegrationFailure {
                step,
                t,
                reason: format!(
                    "infinite value in state component {}; numerical overflow, \
                     try more time steps",
                    i
                ),
            });
        }
    }
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
