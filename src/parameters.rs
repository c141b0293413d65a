//! Physical parameters
//!
//! A plain value struct supplying the named scalars the models consume at
//! construction time. Everything is already non-dimensionalised; loading
//! from tabular parameter files is a concern of the calling application,
//! not of the simulation core.

/// Dimensionless physical parameters shared by the model variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    /// Initial electrolyte concentration.
    pub c0: f64,
    /// Stoichiometric coefficient on the interfacial source term.
    pub s: f64,
    /// Applied cell current density.
    pub current: f64,
    /// Electrolyte conductivity (MacInnes potential-gradient term).
    pub kappa: f64,
    /// Concentration-gradient contribution to the MacInnes current.
    pub kappa_over_c: f64,
    /// Double-layer capacitance scaling for the charge conservation
    /// equation.
    pub gamma_dl: f64,
    /// Exchange-current scale of the Butler-Volmer kinetics.
    pub exchange_current: f64,
}

impl Parameters {
    /// Applied current demand at time `t`.
    ///
    /// Constant-current operation for now; time-dependent current profiles
    /// plug in here.
    pub fn icell(&self, _t: f64) -> f64 {
        self.current
    }
}

impl Default for Parameters {
    /// Unit-scale defaults with no applied current: a cell at rest.
    fn default() -> Self {
        Self {
            c0: 1.0,
            s: 1.0,
            current: 0.0,
            kappa: 1.0,
            kappa_over_c: 1.0,
            gamma_dl: 1.0,
            exchange_current: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_describe_a_cell_at_rest() {
        let params = Parameters::default();
        assert_eq!(params.current, 0.0);
        assert_eq!(params.c0, 1.0);
    }

    #[test]
    fn test_constant_current_demand() {
        let params = Parameters {
            current: 0.25,
            ..Parameters::default()
        };
        assert_eq!(params.icell(0.0), 0.25);
        assert_eq!(params.icell(100.0), 0.25);
    }
}
