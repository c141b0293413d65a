//! Concrete time-stepping schemes
//!
//! Each scheme is a free function from (RHS, initial state, span) to a
//! [`Trajectory`](crate::solver::Trajectory); method selection and
//! validation happen in [`Solver`](crate::solver::Solver) before control
//! reaches this module.
//!
//! Both schemes are explicit and therefore conditionally stable: a stiff
//! discretised diffusion operator needs `dt` of order `dx^2` to stay inside
//! the stability region. Divergence is caught per step by the NaN/Inf scan
//! and surfaced as an integration failure.

pub(crate) mod euler;
pub(crate) mod rk4;
