//! Physical models
//!
//! A model turns governing equations into a right-hand-side function of the
//! flat state vector. The model provides the physics (spatial
//! discretisation, boundary conditions, interfacial terms); the solver
//! provides the numerics (time integration). The same model instance is
//! evaluated repeatedly and holds no time-stepping state of its own; all
//! time state lives in the externally supplied [`Variables`].
//!
//! # Available Models
//!
//! - [`ReactionDiffusionModel`]: conservation of cations in the
//!   electrolyte, diffusion plus a homogeneous interfacial reaction.
//! - [`ElectrolyteCurrentModel`]: adds charge conservation with MacInnes
//!   current and Butler-Volmer interfacial kinetics.
//!
//! Both are thin compositions over the submodels in [`submodels`], so the
//! delicate discretisation code exists exactly once.
//!
//! # Production vs. override boundaries
//!
//! Each model is constructed with a [`BoundaryStrategy`] chosen once: the
//! built-in physics ([`BoundaryStrategy::Production`]) or a
//! [`TestOverrides`] bundle supplying analytic initial conditions, boundary
//! conditions and source terms. The override path exists so that the same
//! discretisation code is exercised by production runs and by
//! method-of-manufactured-solutions convergence tests.

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod electrolyte_current;
pub mod reaction_diffusion;
pub mod submodels;

pub use electrolyte_current::ElectrolyteCurrentModel;
pub use reaction_diffusion::ReactionDiffusionModel;

use crate::error::ModelError;
use crate::variables::{Field, StateLayout, Variables};
use nalgebra::DVector;
use std::collections::HashMap;

// =================================================================================================
// Model Trait
// =================================================================================================

/// Capability set every model variant implements.
///
/// A model is configured once per simulation and then evaluated through
/// pure function calls; it is immutable for the duration of a run.
pub trait Model {
    /// Fixed slicing plan of the flat state vector.
    fn layout(&self) -> StateLayout;

    /// Initial state, same length as [`StateLayout::total`].
    ///
    /// Production mode returns the physically motivated initial fields;
    /// override mode returns the bundle's initial arrays verbatim.
    fn initial_conditions(&self) -> Result<DVector<f64>, ModelError>;

    /// Time derivative of the state, same length as the state itself.
    fn pdes_rhs(&self, vars: &Variables) -> Result<DVector<f64>, ModelError>;

    /// Interfacial current density at the cell centres, derived from the
    /// freshly unpacked fields. Called by [`Variables::update`].
    fn interfacial_current(
        &self,
        t: f64,
        c: &DVector<f64>,
        e: Option<&DVector<f64>>,
    ) -> DVector<f64>;

    /// Name of the model, for display and diagnostics.
    fn name(&self) -> &str;
}

// =================================================================================================
// Boundary strategy and test overrides
// =================================================================================================

/// Time-dependent boundary-condition rule: `t` to a per-field pair of
/// (left, right) boundary fluxes.
pub type BoundaryFn = Box<dyn Fn(f64) -> HashMap<Field, (f64, f64)>>;

/// Time-dependent source rule: `t` to a per-field source array over the
/// cell centres.
pub type SourceFn = Box<dyn Fn(f64) -> HashMap<Field, DVector<f64>>>;

/// Where a model takes its boundary conditions and source terms from.
///
/// Selected once at construction; there is no runtime re-detection.
pub enum BoundaryStrategy {
    /// Built-in physics: zero-flux Neumann boundaries, interfacial terms
    /// from the model's own kinetics.
    Production,
    /// Analytic overrides for verification runs.
    Override(TestOverrides),
}

/// Analytic initial conditions, boundary conditions and source terms for
/// verification against manufactured solutions.
pub struct TestOverrides {
    inits: HashMap<Field, DVector<f64>>,
    bcs: BoundaryFn,
    sources: SourceFn,
}

impl TestOverrides {
    pub fn new(inits: HashMap<Field, DVector<f64>>, bcs: BoundaryFn, sources: SourceFn) -> Self {
        Self {
            inits,
            bcs,
            sources,
        }
    }

    /// Initial array for `field`.
    ///
    /// # Errors
    ///
    /// [`ModelError::MissingInitialCondition`] when the bundle has no entry
    /// for `field`.
    pub fn initial(&self, field: Field) -> Result<DVector<f64>, ModelError> {
        self.inits
            .get(&field)
            .cloned()
            .ok_or(ModelError::MissingInitialCondition { field })
    }

    /// `(left, right)` boundary fluxes for `field` at time `t`.
    ///
    /// # Errors
    ///
    /// [`ModelError::MissingBoundaryCondition`] when the rule returns no
    /// entry for `field`.
    pub fn boundary_fluxes(&self, t: f64, field: Field) -> Result<(f64, f64), ModelError> {
        (self.bcs)(t)
            .get(&field)
            .copied()
            .ok_or(ModelError::MissingBoundaryCondition { field })
    }

    /// Source array for `field` at time `t`, checked against the expected
    /// number of cell centres.
    ///
    /// # Errors
    ///
    /// [`ModelError::MissingSource`] when the rule returns no entry for
    /// `field`, [`ModelError::SourceShape`] when the entry has the wrong
    /// length.
    pub fn source(
        &self,
        t: f64,
        field: Field,
        expected: usize,
    ) -> Result<DVector<f64>, ModelError> {
        let source = (self.sources)(t)
            .remove(&field)
            .ok_or(ModelError::MissingSource { field })?;
        if source.len() != expected {
            return Err(ModelError::SourceShape {
                field,
                expected,
                got: source.len(),
            });
        }
        Ok(source)
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn overrides_with_concentration_only(cells: usize) -> TestOverrides {
        let mut inits = HashMap::new();
        inits.insert(Field::Concentration, DVector::zeros(cells));

        TestOverrides::new(
            inits,
            Box::new(|_t| {
                let mut bcs = HashMap::new();
                bcs.insert(Field::Concentration, (0.0, 0.0));
                bcs
            }),
            Box::new(move |_t| {
                let mut sources = HashMap::new();
                sources.insert(Field::Concentration, DVector::from_element(cells, 1.0));
                sources
            }),
        )
    }

    #[test]
    fn test_override_lookups() {
        let overrides = overrides_with_concentration_only(5);

        assert_eq!(overrides.initial(Field::Concentration).unwrap().len(), 5);
        assert_eq!(
            overrides.boundary_fluxes(0.3, Field::Concentration).unwrap(),
            (0.0, 0.0)
        );
        assert_eq!(
            overrides.source(0.3, Field::Concentration, 5).unwrap()[0],
            1.0
        );
    }

    #[test]
    fn test_missing_keys_are_reported_by_field() {
        let overrides = overrides_with_concentration_only(5);

        assert!(matches!(
            overrides.initial(Field::Potential),
            Err(ModelError::MissingInitialCondition {
                field: Field::Potential
            })
        ));
        assert!(matches!(
            overrides.boundary_fluxes(1.0, Field::Potential),
            Err(ModelError::MissingBoundaryCondition {
                field: Field::Potential
            })
        ));
        assert!(matches!(
            overrides.source(1.0, Field::Potential, 5),
            Err(ModelError::MissingSource {
                field: Field::Potential
            })
        ));
    }

    #[test]
    fn test_wrong_length_source_is_rejected() {
        // The bundle produces 5-element sources; asking for 10 cells must
        // surface as a shape error carrying both lengths.
        let overrides = overrides_with_concentration_only(5);

        assert!(matches!(
            overrides.source(0.0, Field::Concentration, 10),
            Err(ModelError::SourceShape {
                field: Field::Concentration,
                expected: 10,
                got: 5,
            })
        ));
    }
}
