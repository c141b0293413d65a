//! Error types for the simulation core
//!
//! Each layer of the crate owns one error enum: mesh construction,
//! operator application, model evaluation, state unpacking, and time
//! integration. All variants carry the offending shapes, field names or
//! method diagnostics so that the caller can decide remediation without
//! re-deriving the context.
//!
//! Nothing here is recovered silently: errors are raised at the point of
//! detection and surfaced to the orchestration layer, which may choose to
//! retry with a different configuration.

use crate::variables::Field;
use thiserror::Error;

/// Errors raised while building a [`Mesh`](crate::mesh::Mesh).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// The mesh needs at least one cell.
    #[error("invalid mesh: need at least 1 cell, got {cells}")]
    InvalidMesh { cells: usize },

    /// The domain length must be a finite, positive number.
    #[error("invalid mesh: domain length must be finite and positive, got {length}")]
    InvalidLength { length: f64 },
}

/// Errors raised by the discrete spatial operators.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OperatorError {
    /// A field was passed whose length disagrees with the mesh geometry.
    #[error("dimension mismatch in {operator}: expected a field of length {expected}, got {got}")]
    DimensionMismatch {
        operator: &'static str,
        expected: usize,
        got: usize,
    },
}

/// Errors raised while evaluating a model's equations.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Override mode was requested but the bundle has no boundary
    /// condition for this field at the evaluation time.
    #[error("test overrides supply no boundary condition for field {field}")]
    MissingBoundaryCondition { field: Field },

    /// Override mode was requested but the bundle has no source term for
    /// this field at the evaluation time.
    #[error("test overrides supply no source term for field {field}")]
    MissingSource { field: Field },

    /// Override mode was requested but the bundle has no initial
    /// condition for this field.
    #[error("test overrides supply no initial condition for field {field}")]
    MissingInitialCondition { field: Field },

    /// An override source array does not cover the cell centres.
    #[error("source term for field {field} has length {got}, expected {expected}")]
    SourceShape {
        field: Field,
        expected: usize,
        got: usize,
    },

    /// The state snapshot does not carry a field this model's equations
    /// need.
    #[error("state snapshot carries no {field} field")]
    MissingField { field: Field },

    #[error(transparent)]
    Operator(#[from] OperatorError),
}

/// Errors raised while unpacking a flat state vector into named fields.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VariablesError {
    /// The state vector length does not match the model-declared layout.
    #[error("state vector of length {got} does not match layout [{layout}] (expected {expected})")]
    LayoutMismatch {
        expected: usize,
        got: usize,
        layout: String,
    },
}

/// Errors raised by the time-integration driver.
#[derive(Debug, Error)]
pub enum SolverError {
    /// The requested integration method is not in the registry.
    #[error("unknown integration method {method:?}; known methods: {known:?}")]
    UnknownMethod {
        method: String,
        known: Vec<&'static str>,
    },

    /// The time span is empty or degenerate.
    #[error("invalid time span: start {start}, end {end}, steps {steps}")]
    InvalidTimeSpan { start: f64, end: f64, steps: usize },

    /// The stepping diverged or produced non-finite values. The reason
    /// string wraps the engine's diagnostic.
    #[error("integration failed at step {step} (t = {t:.6e}): {reason}")]
    IntegrationFailure { step: usize, t: f64, reason: String },

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Variables(#[from] VariablesError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_error_display() {
        let err = MeshError::InvalidMesh { cells: 0 };
        assert_eq!(err.to_string(), "invalid mesh: need at least 1 cell, got 0");
    }

    #[test]
    fn test_dimension_mismatch_carries_shapes() {
        let err = OperatorError::DimensionMismatch {
            operator: "grad",
            expected: 10,
            got: 7,
        };
        let msg = err.to_string();
        assert!(msg.contains("grad"));
        assert!(msg.contains("10"));
        assert!(msg.contains("7"));
    }

    #[test]
    fn test_missing_override_keys_name_the_field() {
        let bc = ModelError::MissingBoundaryCondition {
            field: Field::Concentration,
        };
        assert!(bc.to_string().contains("concentration"));

        let src = ModelError::MissingSource {
            field: Field::Potential,
        };
        assert!(src.to_string().contains("potential"));
    }

    #[test]
    fn test_unknown_method_lists_alternatives() {
        let err = SolverError::UnknownMethod {
            method: "bdf".to_string(),
            known: vec!["forward euler", "rk4"],
        };
        let msg = err.to_string();
        assert!(msg.contains("bdf"));
        assert!(msg.contains("forward euler"));
    }

    #[test]
    fn test_operator_error_converts_to_model_error() {
        let op = OperatorError::DimensionMismatch {
            operator: "div",
            expected: 11,
            got: 3,
        };
        let model: ModelError = op.into();
        assert!(model.to_string().contains("div"));
    }
}
