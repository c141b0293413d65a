//! Electrolyte current model
//!
//! Couples cation conservation with charge conservation: the state carries
//! both the concentration and the potential difference, and the interfacial
//! current density follows Butler-Volmer kinetics instead of a prescribed
//! homogeneous reaction.
//!
//! # Governing equations
//!
//! ```text
//! dc/dt = -div(N) + s * j            N = -grad(c)
//! de/dt = (div(i) - j) / gamma_dl    i = kappa_over_c * grad(c) + kappa * grad(e)
//! ```
//!
//! `i` is the MacInnes electrolyte current density, assembled like any
//! other flux: interior values by differencing, boundary values injected
//! explicitly. In production the current enters the domain at the right
//! boundary (`i = icell(t)`) and no current crosses the left boundary.

use crate::error::ModelError;
use crate::mesh::Mesh;
use crate::models::submodels::{ButlerVolmer, StefanMaxwellDiffusion};
use crate::models::{BoundaryStrategy, Model, TestOverrides};
use crate::operators::Operators;
use crate::parameters::Parameters;
use crate::variables::{Field, StateLayout, Variables};
use nalgebra::DVector;
use std::rc::Rc;

/// Coupled concentration/potential model with Butler-Volmer kinetics.
///
/// State layout: `[concentration; n][potential; n]`.
pub struct ElectrolyteCurrentModel {
    mesh: Mesh,
    params: Parameters,
    operators: Operators,
    electrolyte: StefanMaxwellDiffusion,
    interface: ButlerVolmer,
    boundary: Rc<BoundaryStrategy>,
}

impl ElectrolyteCurrentModel {
    /// Production model: built-in boundaries and Butler-Volmer kinetics.
    pub fn new(params: Parameters, mesh: Mesh) -> Self {
        Self::build(params, mesh, BoundaryStrategy::Production)
    }

    /// Verification model driven entirely by the override bundle.
    pub fn with_overrides(params: Parameters, mesh: Mesh, overrides: TestOverrides) -> Self {
        Self::build(params, mesh, BoundaryStrategy::Override(overrides))
    }

    fn build(params: Parameters, mesh: Mesh, strategy: BoundaryStrategy) -> Self {
        let boundary = Rc::new(strategy);
        let operators = Operators::new(&mesh);
        let electrolyte = StefanMaxwellDiffusion::new(&params, &mesh, Rc::clone(&boundary));
        let interface = ButlerVolmer::new(&params);

        Self {
            mesh,
            params,
            operators,
            electrolyte,
            interface,
            boundary,
        }
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Time derivative of the potential: `dedt = (div(i) - j) / gamma_dl`.
    fn charge_conservation(&self, vars: &Variables) -> Result<DVector<f64>, ModelError> {
        let e = vars.e().ok_or(ModelError::MissingField {
            field: Field::Potential,
        })?;

        let ((current_bc_left, current_bc_right), j) = match self.boundary.as_ref() {
            BoundaryStrategy::Production => {
                ((0.0, self.params.icell(vars.t())), vars.j().clone())
            }
            BoundaryStrategy::Override(tests) => (
                tests.boundary_fluxes(vars.t(), Field::Potential)?,
                tests.source(vars.t(), Field::Potential, self.mesh.cells())?,
            ),
        };

        // MacInnes current density in the interior
        let i_inner = self.operators.grad(vars.c())? * self.params.kappa_over_c
            + self.operators.grad(e)? * self.params.kappa;
        let i = self
            .operators
            .with_boundary_fluxes(current_bc_left, &i_inner, current_bc_right)?;

        Ok((self.operators.div(&i)? - j) / self.params.gamma_dl)
    }
}

impl Model for ElectrolyteCurrentModel {
    fn layout(&self) -> StateLayout {
        StateLayout::new(vec![
            (Field::Concentration, self.mesh.cells()),
            (Field::Potential, self.mesh.cells()),
        ])
    }

    fn initial_conditions(&self) -> Result<DVector<f64>, ModelError> {
        let c = self.electrolyte.initial_conditions()?;
        let e = match self.boundary.as_ref() {
            // The cell starts at rest: no potential difference.
            BoundaryStrategy::Production => DVector::zeros(self.mesh.cells()),
            BoundaryStrategy::Override(tests) => tests.initial(Field::Potential)?,
        };

        let mut y0 = DVector::zeros(c.len() + e.len());
        y0.rows_mut(0, c.len()).copy_from(&c);
        y0.rows_mut(c.len(), e.len()).copy_from(&e);
        Ok(y0)
    }

    fn pdes_rhs(&self, vars: &Variables) -> Result<DVector<f64>, ModelError> {
        let dcdt = self.electrolyte.cation_conservation(vars)?;
        let dedt = self.charge_conservation(vars)?;

        let mut dydt = DVector::zeros(dcdt.len() + dedt.len());
        dydt.rows_mut(0, dcdt.len()).copy_from(&dcdt);
        dydt.rows_mut(dcdt.len(), dedt.len()).copy_from(&dedt);
        Ok(dydt)
    }

    fn interfacial_current(
        &self,
        _t: f64,
        c: &DVector<f64>,
        e: Option<&DVector<f64>>,
    ) -> DVector<f64> {
        match e {
            Some(e) => self.interface.current_density(c, e),
            // A snapshot without a potential cannot drive the kinetics;
            // pdes_rhs rejects such a snapshot with a typed error.
            None => DVector::zeros(c.len()),
        }
    }

    fn name(&self) -> &str {
        "Electrolyte Current"
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn rest_state(cells: usize, c0: f64) -> DVector<f64> {
        let mut y = DVector::zeros(2 * cells);
        y.rows_mut(0, cells)
            .copy_from(&DVector::from_element(cells, c0));
        y
    }

    #[test]
    fn test_layout_declares_both_fields() {
        let model = ElectrolyteCurrentModel::new(Parameters::default(), Mesh::new(10).unwrap());

        let layout = model.layout();
        assert_eq!(layout.total(), 20);
        assert_eq!(layout.slice_of(Field::Concentration), Some((0, 10)));
        assert_eq!(layout.slice_of(Field::Potential), Some((10, 10)));
    }

    #[test]
    fn test_initial_conditions_start_at_rest() {
        let params = Parameters {
            c0: 1.5,
            ..Parameters::default()
        };
        let model = ElectrolyteCurrentModel::new(params, Mesh::new(4).unwrap());

        let y0 = model.initial_conditions().unwrap();
        assert_eq!(y0.len(), 8);
        for i in 0..4 {
            assert_eq!(y0[i], 1.5);
            assert_eq!(y0[4 + i], 0.0);
        }
    }

    #[test]
    fn test_rest_state_is_stationary_without_current() {
        // Uniform concentration, zero potential, zero applied current:
        // both equations must return zero.
        let model = ElectrolyteCurrentModel::new(Parameters::default(), Mesh::new(10).unwrap());

        let mut vars = Variables::new(&model);
        vars.update(0.0, &rest_state(10, 1.0)).unwrap();

        let dydt = model.pdes_rhs(&vars).unwrap();
        for value in dydt.iter() {
            assert_eq!(*value, 0.0);
        }
    }

    #[test]
    fn test_applied_current_drives_the_potential() {
        // With an applied current at the right boundary the divergence of i
        // is nonzero in the last cell, so the potential starts moving.
        let params = Parameters {
            current: 1.0,
            ..Parameters::default()
        };
        let model = ElectrolyteCurrentModel::new(params, Mesh::new(10).unwrap());

        let mut vars = Variables::new(&model);
        vars.update(0.0, &rest_state(10, 1.0)).unwrap();

        let dydt = model.pdes_rhs(&vars).unwrap();
        let dedt_last = dydt[19];
        assert!(dedt_last > 0.0, "potential should respond to the current");
    }

    #[test]
    fn test_snapshot_without_potential_is_rejected() {
        // A snapshot unpacked for a concentration-only model has no
        // potential field; the coupled equations must refuse it with a
        // typed error rather than panic.
        use crate::models::ReactionDiffusionModel;

        let single_field =
            ReactionDiffusionModel::new(Parameters::default(), Mesh::new(10).unwrap());
        let mut vars = Variables::new(&single_field);
        vars.update(0.0, &DVector::from_element(10, 1.0)).unwrap();

        let coupled = ElectrolyteCurrentModel::new(Parameters::default(), Mesh::new(10).unwrap());
        assert!(matches!(
            coupled.pdes_rhs(&vars),
            Err(ModelError::MissingField {
                field: Field::Potential
            })
        ));
    }

    #[test]
    fn test_override_mode_requires_potential_keys() {
        let mut inits = HashMap::new();
        inits.insert(Field::Concentration, DVector::zeros(4));
        inits.insert(Field::Potential, DVector::zeros(4));

        // Bundle covers the concentration equation only.
        let overrides = TestOverrides::new(
            inits,
            Box::new(|_| {
                let mut bcs = HashMap::new();
                bcs.insert(Field::Concentration, (0.0, 0.0));
                bcs
            }),
            Box::new(|_| {
                let mut sources = HashMap::new();
                sources.insert(Field::Concentration, DVector::zeros(4));
                sources
            }),
        );

        let model = ElectrolyteCurrentModel::with_overrides(
            Parameters::default(),
            Mesh::new(4).unwrap(),
            overrides,
        );

        let mut vars = Variables::new(&model);
        vars.update(0.0, &DVector::zeros(8)).unwrap();

        assert!(matches!(
            model.pdes_rhs(&vars),
            Err(ModelError::MissingBoundaryCondition {
                field: Field::Potential
            })
        ));
    }
}
