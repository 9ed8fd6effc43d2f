// ─────────────────────────────────────────────────────────────────────
// Kuramoto Index Kernel — Result Types
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

/// Storage size in bytes of one double-precision result.
pub const RESULT_SIZE_BYTES: f64 = 8.0;

/// Clamp a value to [lo, hi], mapping NaN to lo and Inf to nearest bound.
#[inline]
pub fn clamp_score(value: f64, lo: f64, hi: f64) -> f64 {
    if value.is_nan() {
        log::warn!("clamp_score: NaN detected, clamping to {lo:.4}");
        return lo;
    }
    if value.is_infinite() {
        let boundary = if value > 0.0 { hi } else { lo };
        log::warn!("clamp_score: Inf detected, clamping to {boundary:.4}");
        return boundary;
    }
    value.clamp(lo, hi)
}

/// Instantaneous Kuramoto order parameter `r · e^{iψ}` at one time step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderParameter {
    /// Phase coherence r ∈ [0, 1]: 0 = scattered, 1 = aligned.
    pub r: f64,
    /// Mean phase ψ ∈ (-π, π].
    pub psi: f64,
}

impl OrderParameter {
    pub fn new(r: f64, psi: f64) -> Self {
        Self {
            r: clamp_score(r, 0.0, 1.0),
            psi,
        }
    }
}

/// Time-average of `r(t)` over a trajectory; 0.0 when empty.
pub fn mean_coherence(trajectory: &[OrderParameter]) -> f64 {
    if trajectory.is_empty() {
        return 0.0;
    }
    let sum: f64 = trajectory.iter().map(|op| op.r).sum();
    clamp_score(sum / trajectory.len() as f64, 0.0, 1.0)
}
