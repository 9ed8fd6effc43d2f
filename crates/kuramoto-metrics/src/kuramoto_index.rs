// ─────────────────────────────────────────────────────────────────────
// Kuramoto Index Kernel — Kuramoto Synchronization Index
// ─────────────────────────────────────────────────────────────────────
//! Time-averaged Kuramoto order parameter of a population of oscillators.
//!
//! Each unit's phase comes from two state-variable channels read as the
//! real and imaginary parts of a complex sample:
//!
//!   θ_n(t) = arg( x[t, sv_re, n, mode] + i · x[t, sv_im, n, mode] )
//!
//! and the order parameter is the mean field
//!
//!   r(t) · e^{iψ(t)} = (1/N) Σ_n e^{iθ_n(t)}
//!
//! r = 0 means no coherence, r = 1 perfect alignment. The index is the
//! unweighted mean of r(t) over the whole observation window.

use std::f64::consts::PI;
use std::fmt;
use std::sync::Arc;

use ndarray::{ArrayView4, Axis};
use num_complex::Complex64;

use kuramoto_types::{
    mean_coherence, KuramotoConfig, KuramotoError, KuramotoResult, OrderParameter,
    RESULT_SIZE_BYTES,
};

use crate::observer::{EvaluationObserver, NoopObserver};
use crate::time_series::{TimeSeries, TimeSeriesShape};

/// Minimum number of state variables needed to form a complex sample.
pub const MIN_STATE_VARIABLES: usize = 2;

/// Minimum number of units for synchronization to be meaningful.
pub const MIN_UNITS: usize = 2;

/// A metric that reduces a time series to a fixed-size result.
pub trait TimeSeriesMetric {
    fn evaluate(&self, time_series: &TimeSeries) -> KuramotoResult<f64>;

    /// Shape of the main result.
    fn result_shape(&self) -> [usize; 1];

    /// Storage size in bytes of the main result.
    fn result_size(&self) -> f64;

    /// Storage size in bytes including any auxiliary output.
    fn extended_result_size(&self) -> f64;
}

/// Phase angle of `z`, folded into (-π, π].
#[inline]
fn phase(z: Complex64) -> f64 {
    let theta = z.arg();
    if theta == -PI {
        PI
    } else {
        theta
    }
}

/// Kuramoto synchronization index evaluator.
///
/// Stateless between calls; safe to share across threads.
#[derive(Clone)]
pub struct KuramotoIndex {
    config: KuramotoConfig,
    observer: Arc<dyn EvaluationObserver>,
}

impl fmt::Debug for KuramotoIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KuramotoIndex")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for KuramotoIndex {
    fn default() -> Self {
        Self::default_params()
    }
}

impl KuramotoIndex {
    pub fn new(config: KuramotoConfig) -> KuramotoResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            observer: Arc::new(NoopObserver),
        })
    }

    /// State variables 0/1, mode 0, non-finite samples rejected.
    pub fn default_params() -> Self {
        Self {
            config: KuramotoConfig::default(),
            observer: Arc::new(NoopObserver),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn EvaluationObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn config(&self) -> &KuramotoConfig {
        &self.config
    }

    /// Check the dimensionality preconditions against the configuration.
    fn check_shape(&self, shape: &TimeSeriesShape) -> KuramotoResult<()> {
        if shape.state_variables < MIN_STATE_VARIABLES {
            return Err(KuramotoError::Validation(format!(
                "the number of state variables should be at least {MIN_STATE_VARIABLES}, got {}",
                shape.state_variables
            )));
        }
        let needed = self.config.required_state_variables();
        if shape.state_variables < needed {
            return Err(KuramotoError::Validation(format!(
                "state variables ({}, {}) need at least {needed} state variables, got {}",
                self.config.real_state_variable,
                self.config.imag_state_variable,
                shape.state_variables
            )));
        }
        if shape.units < MIN_UNITS {
            return Err(KuramotoError::Validation(format!(
                "the number of units should be at least {MIN_UNITS}, got {}",
                shape.units
            )));
        }
        if self.config.mode >= shape.modes {
            return Err(KuramotoError::Validation(format!(
                "mode {} out of range for {} modes",
                self.config.mode, shape.modes
            )));
        }
        if shape.time == 0 {
            return Err(KuramotoError::Validation(
                "time series has no time steps".to_string(),
            ));
        }
        Ok(())
    }

    /// Order parameter at every time step of an already validated array.
    fn trajectory(&self, data: ArrayView4<'_, f64>) -> KuramotoResult<Vec<OrderParameter>> {
        let re_sv = self.config.real_state_variable;
        let im_sv = self.config.imag_state_variable;
        let mode = self.config.mode;
        let (_, _, units, _) = data.dim();
        let n = units as f64;

        let mut out = Vec::with_capacity(data.len_of(Axis(0)));
        for (t, step) in data.axis_iter(Axis(0)).enumerate() {
            let mut field = Complex64::new(0.0, 0.0);
            for unit in 0..units {
                let z = Complex64::new(step[[re_sv, unit, mode]], step[[im_sv, unit, mode]]);
                if self.config.reject_non_finite && !z.is_finite() {
                    return Err(KuramotoError::Numerical(format!(
                        "non-finite sample {z} at time step {t}, unit {unit}"
                    )));
                }
                field += Complex64::from_polar(1.0, phase(z));
            }
            let (r, psi) = (field / n).to_polar();
            out.push(OrderParameter::new(r, if psi == -PI { PI } else { psi }));
        }
        Ok(out)
    }

    fn run(&self, time_series: &TimeSeries) -> KuramotoResult<Vec<OrderParameter>> {
        let shape = time_series.shape();
        self.observer.on_evaluate(time_series.label(), &shape);
        self.check_shape(&shape)
            .and_then(|()| self.trajectory(time_series.data()))
            .inspect_err(|e| self.observer.on_rejected(e))
    }

    /// Instantaneous order parameter r(t)·e^{iψ(t)} for every time step.
    pub fn order_parameter_trajectory(
        &self,
        time_series: &TimeSeries,
    ) -> KuramotoResult<Vec<OrderParameter>> {
        self.run(time_series)
    }
}

impl TimeSeriesMetric for KuramotoIndex {
    fn evaluate(&self, time_series: &TimeSeries) -> KuramotoResult<f64> {
        let trajectory = self.run(time_series)?;
        let index = mean_coherence(&trajectory);
        self.observer.on_result(index);
        Ok(index)
    }

    fn result_shape(&self) -> [usize; 1] {
        [1]
    }

    fn result_size(&self) -> f64 {
        RESULT_SIZE_BYTES
    }

    fn extended_result_size(&self) -> f64 {
        RESULT_SIZE_BYTES
    }
}
