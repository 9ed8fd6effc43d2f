// ─────────────────────────────────────────────────────────────────────
// Kuramoto Index Kernel — Synchronization Metrics
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Kuramoto synchronization index over 4-axis oscillator time series.
//!
//! - `TimeSeries`: owned (time, state_variable, unit, mode) signal
//! - `AcceptFilter`: admission predicate a data layer applies first
//! - `KuramotoIndex`: phase extraction → mean field → time average
//! - `EvaluationObserver`: optional diagnostic side channel
//!
//! # Invariants
//!
//! 1. The result of a successful evaluation lies in [0, 1].
//! 2. Evaluation is pure: the input is only borrowed and no state
//!    survives between calls, so repeated calls are bit-identical.
//! 3. Precondition failures are reported before any computation; there
//!    is no partial result and no fallback value.

pub mod filter;
pub mod kuramoto_index;
pub mod observer;
pub mod time_series;

pub use filter::{AcceptFilter, FilterCondition, FilterField, FilterOp};
pub use kuramoto_index::{KuramotoIndex, TimeSeriesMetric, MIN_STATE_VARIABLES, MIN_UNITS};
pub use observer::{EvaluationObserver, LogObserver, NoopObserver};
pub use time_series::{TimeSeries, TimeSeriesShape};
