//! Helper functions for integration tests

use echem_rs::models::TestOverrides;
use echem_rs::variables::Field;
use nalgebra::DVector;
use std::collections::HashMap;

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

/// Largest absolute entry of a vector.
pub fn max_abs(v: &DVector<f64>) -> f64 {
    v.iter().fold(0.0_f64, |acc, x| acc.max(x.abs()))
}

/// Override bundle driving the concentration equation alone: an analytic
/// initial array, fixed boundary fluxes and a time-independent source.
pub fn overrides_for_concentration(
    init: DVector<f64>,
    flux_left: f64,
    flux_right: f64,
    source: DVector<f64>,
) -> TestOverrides {
    let mut inits = HashMap::new();
    inits.insert(Field::Concentration, init);

    TestOverrides::new(
        inits,
        Box::new(move |_t| {
            let mut bcs = HashMap::new();
            bcs.insert(Field::Concentration, (flux_left, flux_right));
            bcs
        }),
        Box::new(move |_t| {
            let mut sources = HashMap::new();
            sources.insert(Field::Concentration, source.clone());
            sources
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_error() {
        assert!((relative_error(1.0, 1.0) - 0.0).abs() < 1e-10);
        assert!((relative_error(1.1, 1.0) - 0.1).abs() < 1e-10);
        assert!((relative_error(0.9, 1.0) - 0.1).abs() < 1e-10);
    }

    #[test]
    fn test_max_abs() {
        let v = DVector::from_vec(vec![0.5, -2.0, 1.0]);
        assert_eq!(max_abs(&v), 2.0);
    }
}
