//! Classical fourth-order Runge-Kutta method
//!
//! ```text
//! k1 = f(t_n,          y_n)
//! k2 = f(t_n + dt/2,   y_n + dt/2 * k1)
//! k3 = f(t_n + dt/2,   y_n + dt/2 * k2)
//! k4 = f(t_n + dt,     y_n + dt   * k3)
//! y_{n+1} = y_n + dt/6 * (k1 + 2*k2 + 2*k3 + k4)
//! ```
//!
//! Fourth-order accurate (global error O(dt^4)) at four RHS evaluations
//! per step. The workhorse method for non-stiff to moderately stiff runs.

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
    let half = 0.5 * dt;

    let mut trajectory = Trajectory::with_capacity(span.steps + 1);
    trajectory.push(span.start, y0.clone());

    let mut y = y0.clone();
    for step in 0..span.steps {
        let t = span.start + dt * (step as f64);

        let k1 = rhs(t, &y)?;
        let k2 = rhs(t + half, &(&y + &k1 * half))?;
        let k3 = rhs(t + half, &(&y + &k2 * half))?;
        let k4 = rhs(t + dt, &(&y + &k3 * dt))?;

        y += (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (dt / 6.0);

        let t_next = span.start + dt * ((step + 1) as f64);
        check_finite(&y, step + 1, t_next)?;
        trajectory.push(t_next, y.clone());
    }

    Ok(trajectory)
}

// =================================================================================================
// Tests
// =================================================================================================
