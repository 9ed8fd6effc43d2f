// ─────────────────────────────────────────────────────────────────────
// Kuramoto Index Kernel — Evaluator Configuration
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use crate::error::{KuramotoError, KuramotoResult};

/// Selects which channels of a `(time, state_variable, unit, mode)` array
/// form the phase of each unit.
///
/// The defaults reproduce the classic analyzer: state variable 0 is the
/// real part, state variable 1 the imaginary part, mode 0 only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KuramotoConfig {
    /// State-variable index used as the real component.
    /// Default: 0.
    pub real_state_variable: usize,

    /// State-variable index used as the imaginary component.
    /// Default: 1.
    pub imag_state_variable: usize,

    /// Mode index read for every unit. Other modes are ignored.
    /// Default: 0.
    pub mode: usize,

    /// Reject NaN/Inf samples in the phase channels instead of clamping.
    /// Default: true.
    pub reject_non_finite: bool,
}

impl Default for KuramotoConfig {
    fn default() -> Self {
        Self {
            real_state_variable: 0,
            imag_state_variable: 1,
            mode: 0,
            reject_non_finite: true,
        }
    }
}

impl KuramotoConfig {
    /// Validate configuration parameters.
    ///
    /// Range checks against a concrete array happen at evaluation time.
    pub fn validate(&self) -> KuramotoResult<()> {
        if self.real_state_variable == self.imag_state_variable {
            return Err(KuramotoError::Config(format!(
                "real and imaginary state variables must differ, both are {}",
                self.real_state_variable
            )));
        }
        Ok(())
    }

    /// Minimum length of the state-variable axis this config can read.
    pub fn required_state_variables(&self) -> usize {
        self.real_state_variable.max(self.imag_state_variable) + 1
    }

    /// Load from JSON string.
    pub fn from_json(json: &str) -> KuramotoResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| KuramotoError::Config(format!("JSON parse error: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let cfg = KuramotoConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.required_state_variables(), 2);
    }

    #[test]
    fn test_identical_channels_rejected() {
        let cfg = KuramotoConfig {
            real_state_variable: 1,
            imag_state_variable: 1,
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(KuramotoError::Config(_))));
    }

    #[test]
    fn test_required_state_variables_uses_max_index() {
        let cfg = KuramotoConfig {
            real_state_variable: 3,
            imag_state_variable: 1,
            ..Default::default()
        };
        assert_eq!(cfg.required_state_variables(), 4);
    }

    #[test]
    fn test_from_json_partial() {
        let cfg = KuramotoConfig::from_json(r#"{"mode": 2}"#).unwrap();
        assert_eq!(cfg.mode, 2);
        assert_eq!(cfg.real_state_variable, 0);
        assert_eq!(cfg.imag_state_variable, 1);
        assert!(cfg.reject_non_finite);
    }

    #[test]
    fn test_from_json_roundtrip() {
        let cfg = KuramotoConfig {
            real_state_variable: 2,
            imag_state_variable: 0,
            mode: 1,
            reject_non_finite: false,
        };
        let json = serde_json::to_string(&cfg).unwrap();
        assert_eq!(KuramotoConfig::from_json(&json).unwrap(), cfg);
    }

    #[test]
    fn test_from_json_malformed() {
        let err = KuramotoConfig::from_json("{mode: }").unwrap_err();
        assert!(err.to_string().starts_with("config error: JSON parse error"));
    }
}
