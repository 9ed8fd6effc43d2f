// ─────────────────────────────────────────────────────────────────────
// Kuramoto Index Kernel — PyO3 FFI Bindings
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
// Note: #[deny(unsafe_code)] not applied — PyO3 proc macros generate
// unsafe blocks internally. All hand-written code in this crate is safe.
//! Python-callable wrappers around the Kuramoto index evaluator.
//!
//! Arrays cross the boundary as a flat row-major buffer plus a shape, so
//! a NumPy caller passes `arr.ravel().tolist()` (or any sequence of
//! floats) together with `arr.shape`.
//!
//! # FFI Safety
//!
//! - The GIL is released while the index is computed.
//! - Kernel errors → `ValueError` with the kernel's message.
//! - All config validated before storage (`KuramotoConfig::validate()`).
//!
//! Usage from Python:
//! ```python
//! from kuramoto_kernel import RustKuramotoIndex
//!
//! kid = RustKuramotoIndex()
//! r = kid.evaluate(ts.ravel().tolist(), ts.shape)
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use kuramoto_metrics::{AcceptFilter, KuramotoIndex, LogObserver, TimeSeries, TimeSeriesMetric};
use kuramoto_types::{KuramotoConfig, KuramotoError};

fn to_py_err(e: KuramotoError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

// ─── PyKuramotoConfig ───────────────────────────────────────────────

/// Python-visible evaluator configuration.
#[pyclass(name = "KuramotoConfig")]
#[derive(Clone)]
struct PyKuramotoConfig {
    inner: KuramotoConfig,
}

#[pymethods]
impl PyKuramotoConfig {
    #[new]
    #[pyo3(signature = (
        real_state_variable = 0,
        imag_state_variable = 1,
        mode = 0,
        reject_non_finite = true,
    ))]
    fn new(
        real_state_variable: usize,
        imag_state_variable: usize,
        mode: usize,
        reject_non_finite: bool,
    ) -> PyResult<Self> {
        let config = KuramotoConfig {
            real_state_variable,
            imag_state_variable,
            mode,
            reject_non_finite,
        };
        config.validate().map_err(to_py_err)?;
        Ok(Self { inner: config })
    }

    /// Construct from JSON string.
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        let config = KuramotoConfig::from_json(json).map_err(to_py_err)?;
        config.validate().map_err(to_py_err)?;
        Ok(Self { inner: config })
    }

    #[getter]
    fn real_state_variable(&self) -> usize {
        self.inner.real_state_variable
    }

    #[getter]
    fn imag_state_variable(&self) -> usize {
        self.inner.imag_state_variable
    }

    #[getter]
    fn mode(&self) -> usize {
        self.inner.mode
    }

    #[getter]
    fn reject_non_finite(&self) -> bool {
        self.inner.reject_non_finite
    }

    fn __repr__(&self) -> String {
        format!(
            "KuramotoConfig(state_variables=({}, {}), mode={}, reject_non_finite={})",
            self.inner.real_state_variable,
            self.inner.imag_state_variable,
            self.inner.mode,
            if self.inner.reject_non_finite { "True" } else { "False" },
        )
    }
}

// ─── RustKuramotoIndex ──────────────────────────────────────────────

/// Kuramoto synchronization index exposed to Python.
///
/// Drop-in replacement for the `KuramotoIndex` analyzer's `evaluate`.
#[pyclass(name = "RustKuramotoIndex")]
struct PyKuramotoIndex {
    inner: KuramotoIndex,
}

#[pymethods]
impl PyKuramotoIndex {
    #[new]
    #[pyo3(signature = (config = None, log_events = false))]
    fn new(config: Option<PyKuramotoConfig>, log_events: bool) -> PyResult<Self> {
        let config = config.map(|c| c.inner).unwrap_or_default();
        let mut inner = KuramotoIndex::new(config).map_err(to_py_err)?;
        if log_events {
            inner = inner.with_observer(std::sync::Arc::new(LogObserver));
        }
        Ok(Self { inner })
    }

    /// Kuramoto index of a (time, state_variable, unit, mode) array.
    ///
    /// Args:
    ///     data: Flat row-major samples.
    ///     shape: Four axis lengths.
    ///     label: Optional series name used in diagnostics.
    #[pyo3(signature = (data, shape, label = None))]
    fn evaluate(
        &self,
        py: Python<'_>,
        data: Vec<f64>,
        shape: Vec<usize>,
        label: Option<String>,
    ) -> PyResult<f64> {
        let ts = build_series(data, &shape, label)?;
        py.allow_threads(|| self.inner.evaluate(&ts))
            .map_err(to_py_err)
    }

    /// Per-step order parameter. Returns dict with `r` and `psi` lists.
    fn order_parameter(
        &self,
        py: Python<'_>,
        data: Vec<f64>,
        shape: Vec<usize>,
    ) -> PyResult<PyObject> {
        let ts = build_series(data, &shape, None)?;
        let trajectory = py
            .allow_threads(|| self.inner.order_parameter_trajectory(&ts))
            .map_err(to_py_err)?;
        let dict = PyDict::new(py);
        dict.set_item("r", trajectory.iter().map(|op| op.r).collect::<Vec<_>>())?;
        dict.set_item("psi", trajectory.iter().map(|op| op.psi).collect::<Vec<_>>())?;
        Ok(dict.into())
    }

    /// Whether a declared shape passes the admission filter.
    #[staticmethod]
    fn accepts(shape: Vec<usize>) -> bool {
        AcceptFilter::kuramoto().accepts_dims(&shape)
    }

    fn result_shape(&self) -> (usize,) {
        let [n] = self.inner.result_shape();
        (n,)
    }

    fn result_size(&self) -> f64 {
        self.inner.result_size()
    }

    fn extended_result_size(&self) -> f64 {
        self.inner.extended_result_size()
    }

    fn __repr__(&self) -> String {
        let cfg = self.inner.config();
        format!(
            "RustKuramotoIndex(state_variables=({}, {}), mode={})",
            cfg.real_state_variable, cfg.imag_state_variable, cfg.mode
        )
    }
}

fn build_series(data: Vec<f64>, shape: &[usize], label: Option<String>) -> PyResult<TimeSeries> {
    let ts = TimeSeries::from_flat(data, shape).map_err(to_py_err)?;
    Ok(match label {
        Some(label) => ts.with_label(label),
        None => ts,
    })
}

// ─── Module ─────────────────────────────────────────────────────────

#[pymodule]
fn kuramoto_kernel(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyKuramotoConfig>()?;
    m.add_class::<PyKuramotoIndex>()?;
    Ok(())
}
