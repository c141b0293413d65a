//! Named views over the flat state vector
//!
//! The time integrator works on a single flat `DVector<f64>`. Models, on
//! the other hand, speak in named physical quantities: concentration,
//! potential, interfacial current density. [`Variables`] bridges the two:
//! [`Variables::update`] deterministically re-slices the flat vector into
//! named fields according to the fixed [`StateLayout`] declared by the
//! active model.
//!
//! A `Variables` instance holds exactly one snapshot at a time; trajectory
//! retention is the solver's responsibility. After each `update` the
//! interfacial current density `j` is recomputed from the freshly unpacked
//! fields through [`Model::interfacial_current`], so `pdes_rhs` always sees
//! a consistent snapshot.

use crate::error::VariablesError;
use crate::models::Model;
use nalgebra::DVector;
use std::fmt;

// =================================================================================================
// Field identifiers
// =================================================================================================

/// Type-safe identifiers for the physical fields a model can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Electrolyte concentration, one value per cell centre.
    Concentration,
    /// Electrolyte potential, one value per cell centre.
    Potential,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Concentration => write!(f, "concentration"),
            Field::Potential => write!(f, "potential"),
        }
    }
}

// =================================================================================================
// State layout
// =================================================================================================

/// Ordered slicing plan for the flat state vector.
///
/// Declared once by the model; `Variables` applies it on every update.
#[derive(Debug, Clone, PartialEq)]
pub struct StateLayout {
    fields: Vec<(Field, usize)>,
}

impl StateLayout {
    pub fn new(fields: Vec<(Field, usize)>) -> Self {
        Self { fields }
    }

    /// Total length of a state vector matching this layout.
    pub fn total(&self) -> usize {
        self.fields.iter().map(|(_, len)| len).sum()
    }

    /// `(offset, len)` of a field within the flat vector, if declared.
    pub fn slice_of(&self, field: Field) -> Option<(usize, usize)> {
        let mut offset = 0;
        for (f, len) in &self.fields {
            if *f == field {
                return Some((offset, *len));
            }
            offset += len;
        }
        None
    }

    pub fn contains(&self, field: Field) -> bool {
        self.slice_of(field).is_some()
    }

    /// Human-readable summary, used in error messages.
    pub fn describe(&self) -> String {
        self.fields
            .iter()
            .map(|(f, len)| format!("{}: {}", f, len))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

// =================================================================================================
// Variables
// =================================================================================================

/// One time-indexed snapshot of the simulation state, keyed by `t`.
pub struct Variables<'m> {
    model: &'m dyn Model,
    layout: StateLayout,
    t: f64,
    c: DVector<f64>,
    e: Option<DVector<f64>>,
    j: DVector<f64>,
}

impl<'m> Variables<'m> {
    /// Allocate a snapshot matching the model's declared layout.
    ///
    /// All fields start at zero; call [`Variables::update`] before reading.
    pub fn new(model: &'m dyn Model) -> Self {
        let layout = model.layout();
        let cells = layout
            .slice_of(Field::Concentration)
            .map(|(_, len)| len)
            .unwrap_or(0);
        let e = layout
            .slice_of(Field::Potential)
            .map(|(_, len)| DVector::zeros(len));

        Self {
            model,
            layout,
            t: 0.0,
            c: DVector::zeros(cells),
            e,
            j: DVector::zeros(cells),
        }
    }

    /// Unpack the flat state vector `y` at time `t` into the named fields,
    /// then recompute the interfacial current density.
    ///
    /// # Errors
    ///
    /// [`VariablesError::LayoutMismatch`] when `y.len()` disagrees with the
    /// layout total; the snapshot is left untouched in that case.
    pub fn update(&mut self, t: f64, y: &DVector<f64>) -> Result<(), VariablesError> {
        if y.len() != self.layout.total() {
            return Err(VariablesError::LayoutMismatch {
                expected: self.layout.total(),
                got: y.len(),
                layout: self.layout.describe(),
            });
        }

        if let Some((offset, len)) = self.layout.slice_of(Field::Concentration) {
            self.c = y.rows(offset, len).clone_owned();
        }
        if let Some((offset, len)) = self.layout.slice_of(Field::Potential) {
            self.e = Some(y.rows(offset, len).clone_owned());
        }

        self.t = t;
        self.j = self.model.interfacial_current(t, &self.c, self.e.as_ref());
        Ok(())
    }

    /// Simulation time of this snapshot.
    pub fn t(&self) -> f64 {
        self.t
    }

    /// Concentration at the cell centres.
    pub fn c(&self) -> &DVector<f64> {
        &self.c
    }

    /// Potential at the cell centres, when the layout declares one.
    pub fn e(&self) -> Option<&DVector<f64>> {
        self.e.as_ref()
    }

    /// Interfacial current density at the cell centres.
    pub fn j(&self) -> &DVector<f64> {
        &self.j
    }

    pub fn layout(&self) -> &StateLayout {
        &self.layout
    }
}

// =================================================================================================
// Tests
// =================================================================================================
