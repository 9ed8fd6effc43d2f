// ─────────────────────────────────────────────────────────────────────
// Kuramoto Index Kernel — Admission Filter
// ─────────────────────────────────────────────────────────────────────
//! Declarative predicate a data layer checks before handing a series to
//! a metric. A chain passes only when every condition holds.

use serde::{Deserialize, Serialize};

use crate::time_series::TimeSeriesShape;

/// Shape attribute a condition inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterField {
    /// Number of axes.
    NrDimensions,
    /// Length of the unit axis (axis 2).
    UnitCount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterOp {
    Eq,
    Ge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCondition {
    pub field: FilterField,
    pub op: FilterOp,
    pub value: usize,
}

impl FilterCondition {
    fn holds(&self, dims: &[usize]) -> bool {
        let actual = match self.field {
            FilterField::NrDimensions => Some(dims.len()),
            FilterField::UnitCount => dims.get(2).copied(),
        };
        match (actual, self.op) {
            (Some(a), FilterOp::Eq) => a == self.value,
            (Some(a), FilterOp::Ge) => a >= self.value,
            (None, _) => false,
        }
    }
}

/// Conjunction of shape conditions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptFilter {
    pub conditions: Vec<FilterCondition>,
}

impl AcceptFilter {
    /// `ndim == 4 AND units >= 2`.
    pub fn kuramoto() -> Self {
        Self {
            conditions: vec![
                FilterCondition {
                    field: FilterField::NrDimensions,
                    op: FilterOp::Eq,
                    value: 4,
                },
                FilterCondition {
                    field: FilterField::UnitCount,
                    op: FilterOp::Ge,
                    value: 2,
                },
            ],
        }
    }

    /// Check a raw shape, e.g. one declared by an external store.
    pub fn accepts_dims(&self, dims: &[usize]) -> bool {
        self.conditions.iter().all(|c| c.holds(dims))
    }

    pub fn accepts(&self, shape: &TimeSeriesShape) -> bool {
        self.accepts_dims(&shape.as_array())
    }
}
