//! Interfacial reaction kinetics
//!
//! The conservation equations in [`super::electrolyte`] consume an
//! interfacial current density `j` over the cell centres. These submodels
//! produce it: a homogeneous reaction spreading the applied current
//! uniformly over the domain, and Butler-Volmer kinetics driven by the
//! local concentration and potential.

use crate::parameters::Parameters;
use nalgebra::DVector;

/// Uniform interfacial reaction: the applied cell current is distributed
/// evenly over the whole domain.
///
/// Used by the reaction-diffusion model, where the electrode kinetics are
/// not resolved. The total reaction current over the domain equals the
/// applied current demand: `sum(j) * cell_width == icell(t)`.
#[derive(Debug, Clone, Copy)]
pub struct HomogeneousReaction {
    params: Parameters,
    length: f64,
}

impl HomogeneousReaction {
    pub fn new(params: &Parameters, length: f64) -> Self {
        Self {
            params: *params,
            length,
        }
    }

    /// Interfacial current density at time `t`, one value per centre.
    pub fn current_density(&self, t: f64, cells: usize) -> DVector<f64> {
        DVector::from_element(cells, self.params.icell(t) / self.length)
    }
}

/// Butler-Volmer interfacial kinetics.
///
/// Symmetric charge-transfer form: `j = 2 * j0(c) * sinh(e / 2)` with the
/// exchange current density `j0(c) = exchange_current * sqrt(c)`.
#[derive(Debug, Clone, Copy)]
pub struct ButlerVolmer {
    exchange_current: f64,
}

impl ButlerVolmer {
    pub fn new(params: &Parameters) -> Self {
        Self {
            exchange_current: params.exchange_current,
        }
    }

    /// Interfacial current density from the local concentration and
    /// potential, elementwise over the centres.
    pub fn current_density(&self, c: &DVector<f64>, e: &DVector<f64>) -> DVector<f64> {
        c.zip_map(e, |c_i, e_i| {
            2.0 * self.exchange_current * c_i.sqrt() * (e_i / 2.0).sinh()
        })
    }
}

// =================================================================================================
// Tests
// =================================================================================================
