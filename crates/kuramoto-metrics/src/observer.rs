// ─────────────────────────────────────────────────────────────────────
// Kuramoto Index Kernel — Evaluation Observers
// ─────────────────────────────────────────────────────────────────────
//! Diagnostic side channel for metric evaluation. Observers see what the
//! evaluator does but never influence the result.

use kuramoto_types::KuramotoError;

use crate::time_series::TimeSeriesShape;

/// Receives evaluation events. Every hook defaults to a no-op.
pub trait EvaluationObserver: Send + Sync {
    /// Called on entry, before validation.
    fn on_evaluate(&self, _label: &str, _shape: &TimeSeriesShape) {}

    /// Called when the input is rejected.
    fn on_rejected(&self, _error: &KuramotoError) {}

    /// Called with the final scalar.
    fn on_result(&self, _value: f64) {}
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl EvaluationObserver for NoopObserver {}

/// Forwards events to the `log` facade under the `kuramoto` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl EvaluationObserver for LogObserver {
    fn on_evaluate(&self, label: &str, shape: &TimeSeriesShape) {
        log::info!(
            target: "kuramoto",
            "KuramotoIndex.time_series '{label}': shape {:?}",
            shape.as_array()
        );
    }

    fn on_rejected(&self, error: &KuramotoError) {
        log::error!(target: "kuramoto", "{error}");
    }

    fn on_result(&self, value: f64) {
        log::debug!(target: "kuramoto", "Kuramoto index = {value:.6}");
    }
}
