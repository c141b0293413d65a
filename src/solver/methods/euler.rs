//! Forward Euler method
//!
//! The simplest explicit scheme for `dy/dt = f(t, y)`:
//!
//! ```text
//! y_{n+1} = y_n + dt * f(t_n, y_n)
//! ```
//!
//! First-order accurate (global error O(dt)), one RHS evaluation per step,
//! conditionally stable. Useful for prototyping and as the baseline in
//! convergence studies; production runs prefer [`rk4`](super::rk4).

use crate::error::SolverError;
use crate::solver::{check_finite, TimeSpan, Trajectory};
use nalgebra::DVector;

pub(crate) fn integrate<F>(
    mut rhs: F,
    y0: &DVector<f64>,
    span: &TimeSpan,
) -> Result<Trajectory, SolverError>
where
    F: FnMut(f64, &DVector<f64>) -> Result<DVector<f64>, SolverError>,
{
    let dt = span.dt();

    let mut trajectory = Trajectory::with_capacity(span.steps + 1);
    trajectory.push(span.start, y0.clone());

    let mut y = y0.clone();
    for step in 0..span.steps {
        let t = span.start + dt * (step as f64);

        let k = rhs(t, &y)?;
        y += k * dt;

        // Times are computed directly from the step index rather than
        // accumulated, so rounding error stays O(eps) instead of
        // O(steps * eps) and the final time lands on span.end.
        let t_next = span.start + dt * ((step + 1) as f64);
        check_finite(&y, step + 1, t_next)?;
        trajectory.push(t_next, y.clone());
    }

    Ok(trajectory)
}

// =================================================================================================
// Tests
// =================================================================================================
