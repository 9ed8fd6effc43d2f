// ─────────────────────────────────────────────────────────────────────
// Kuramoto Index Kernel — Typed Time Series
// ─────────────────────────────────────────────────────────────────────
//! Owned 4-axis signal container with named axes:
//!
//!   (time, state_variable, unit, mode)
//!
//! The axis order is fixed by the type; only lengths vary.

use ndarray::{Array4, ArrayView4};
use serde::{Deserialize, Serialize};

use kuramoto_types::{KuramotoError, KuramotoResult};

/// Number of axes of every time series.
pub const N_AXES: usize = 4;

const DEFAULT_LABEL: &str = "Time Series";

/// Axis lengths of a [`TimeSeries`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSeriesShape {
    pub time: usize,
    pub state_variables: usize,
    pub units: usize,
    pub modes: usize,
}

impl TimeSeriesShape {
    pub fn new(time: usize, state_variables: usize, units: usize, modes: usize) -> Self {
        Self {
            time,
            state_variables,
            units,
            modes,
        }
    }

    /// Lengths in axis order.
    pub fn as_array(&self) -> [usize; N_AXES] {
        [self.time, self.state_variables, self.units, self.modes]
    }

    /// Parse a dynamic shape; anything but four axes is rejected.
    pub fn from_dims(dims: &[usize]) -> KuramotoResult<Self> {
        match *dims {
            [time, state_variables, units, modes] => {
                Ok(Self::new(time, state_variables, units, modes))
            }
            _ => Err(KuramotoError::Validation(format!(
                "time series must have {N_AXES} axes (time, state_variable, unit, mode), got {}",
                dims.len()
            ))),
        }
    }

    pub fn len(&self) -> usize {
        self.time * self.state_variables * self.units * self.modes
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A real-valued oscillatory signal sampled over time.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    data: Array4<f64>,
    label: Option<String>,
}

impl TimeSeries {
    pub fn new(data: Array4<f64>) -> Self {
        Self { data, label: None }
    }

    /// Build from a row-major buffer laid out as (time, state_variable, unit, mode).
    pub fn from_flat(data: Vec<f64>, dims: &[usize]) -> KuramotoResult<Self> {
        let shape = TimeSeriesShape::from_dims(dims)?;
        if data.len() != shape.len() {
            return Err(KuramotoError::Validation(format!(
                "buffer holds {} samples but shape {:?} needs {}",
                data.len(),
                shape.as_array(),
                shape.len()
            )));
        }
        let [t, sv, n, m] = shape.as_array();
        let data = Array4::from_shape_vec((t, sv, n, m), data)
            .map_err(|e| KuramotoError::Validation(format!("invalid shape: {e}")))?;
        Ok(Self::new(data))
    }

    /// Copy a borrowed view into an owned series.
    pub fn from_view(view: ArrayView4<'_, f64>) -> Self {
        Self::new(view.to_owned())
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(DEFAULT_LABEL)
    }

    pub fn shape(&self) -> TimeSeriesShape {
        let (t, sv, n, m) = self.data.dim();
        TimeSeriesShape::new(t, sv, n, m)
    }

    pub fn data(&self) -> ArrayView4<'_, f64> {
        self.data.view()
    }

    pub fn into_inner(self) -> Array4<f64> {
        self.data
    }
}

impl From<Array4<f64>> for TimeSeries {
    fn from(data: Array4<f64>) -> Self {
        Self::new(data)
    }
}
