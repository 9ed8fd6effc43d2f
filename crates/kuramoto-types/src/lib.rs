// ─────────────────────────────────────────────────────────────────────
// Kuramoto Index Kernel — Types
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Configuration, error hierarchy, and result types shared by the
//! Kuramoto synchronization-index kernel.

pub mod config;
pub mod error;
pub mod score;

pub use config::KuramotoConfig;
pub use error::{KuramotoError, KuramotoResult};
pub use score::{clamp_score, mean_coherence, OrderParameter, RESULT_SIZE_BYTES};
