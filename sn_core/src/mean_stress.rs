//! # Mean-Stress Correction
//!
//! Reduction factors applied to the Basquin alternating stress when a curve
//! carries a non-zero mean stress. The factor is a plain multiplier on the
//! base amplitude, which approximates the Goodman / Gerber / Soderberg
//! diagram boundaries rather than solving them exactly.
//!
//! | Model     | Factor                      | Reference strength |
//! |-----------|-----------------------------|--------------------|
//! | None      | 1                           | -                  |
//! | Goodman   | 1 - Sm/Su                   | Su                 |
//! | Gerber    | 1 - (Sm/Su)²                | Su                 |
//! | Soderberg | 1 - Sm/Sy                   | Sy                 |
//!
//! A blank (zero) reference strength disables the correction instead of
//! failing, and the factor never drops below zero.
//!
//! ## Example
//!
//! ```rust
//! use sn_core::mean_stress::{correction_factor, MeanStressModel};
//!
//! let k = correction_factor(MeanStressModel::Goodman, 200.0, 600.0, 350.0);
//! assert!((k - 2.0 / 3.0).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{FatigueError, FatigueResult};

/// Mean-stress correction model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeanStressModel {
    /// No correction
    #[default]
    None,
    /// Goodman line (linear in Sm/Su)
    Goodman,
    /// Gerber parabola (quadratic in Sm/Su)
    Gerber,
    /// Soderberg line (linear in Sm/Sy)
    Soderberg,
}

impl MeanStressModel {
    /// All models for UI selection
    pub const ALL: [MeanStressModel; 4] = [
        MeanStressModel::None,
        MeanStressModel::Goodman,
        MeanStressModel::Gerber,
        MeanStressModel::Soderberg,
    ];

    /// Wire tag used in the exported context (`"none"`, `"goodman"`, ...)
    pub fn code(&self) -> &'static str {
        match self {
            MeanStressModel::None => "none",
            MeanStressModel::Goodman => "goodman",
            MeanStressModel::Gerber => "gerber",
            MeanStressModel::Soderberg => "soderberg",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> FatigueResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "" | "none" | "off" => Ok(MeanStressModel::None),
            "goodman" | "modified-goodman" => Ok(MeanStressModel::Goodman),
            "gerber" => Ok(MeanStressModel::Gerber),
            "soderberg" => Ok(MeanStressModel::Soderberg),
            _ => Err(FatigueError::invalid_input(
                "model",
                s,
                "Expected one of none, goodman, gerber, soderberg",
            )),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            MeanStressModel::None => "None",
            MeanStressModel::Goodman => "Goodman",
            MeanStressModel::Gerber => "Gerber",
            MeanStressModel::Soderberg => "Soderberg",
        }
    }
}

impl std::fmt::Display for MeanStressModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Goodman factor `max(0, 1 - sm/su)`, or 1 without a usable `su`
pub fn goodman_factor(sm_mpa: f64, su_mpa: f64) -> f64 {
    if !has_reference(su_mpa) {
        return 1.0;
    }
    clamp_unit(1.0 - sm_mpa / su_mpa)
}

/// Gerber factor `max(0, 1 - (sm/su)²)`, or 1 without a usable `su`
pub fn gerber_factor(sm_mpa: f64, su_mpa: f64) -> f64 {
    if !has_reference(su_mpa) {
        return 1.0;
    }
    let r = sm_mpa / su_mpa;
    clamp_unit(1.0 - r * r)
}

/// Soderberg factor `max(0, 1 - sm/sy)`, or 1 without a usable `sy`
pub fn soderberg_factor(sm_mpa: f64, sy_mpa: f64) -> f64 {
    if !has_reference(sy_mpa) {
        return 1.0;
    }
    clamp_unit(1.0 - sm_mpa / sy_mpa)
}

/// Dimensionless reduction factor in [0, 1] for the given model.
///
/// # Arguments
///
/// * `model` - Correction model
/// * `sm_mpa` - Mean stress (signed)
/// * `su_mpa` - Ultimate strength (Goodman, Gerber)
/// * `sy_mpa` - Yield strength (Soderberg)
pub fn correction_factor(model: MeanStressModel, sm_mpa: f64, su_mpa: f64, sy_mpa: f64) -> f64 {
    match model {
        MeanStressModel::None => 1.0,
        MeanStressModel::Goodman => goodman_factor(sm_mpa, su_mpa),
        MeanStressModel::Gerber => gerber_factor(sm_mpa, su_mpa),
        MeanStressModel::Soderberg => soderberg_factor(sm_mpa, sy_mpa),
    }
}

/// A blank field arrives as 0; treat it (and NaN) as "no data to correct with".
fn has_reference(strength_mpa: f64) -> bool {
    strength_mpa != 0.0 && strength_mpa.is_finite()
}

// Compressive mean stress would push the linear models above 1.
fn clamp_unit(factor: f64) -> f64 {
    if factor.is_nan() {
        return 1.0;
    }
    factor.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_model_is_identity() {
        assert_eq!(correction_factor(MeanStressModel::None, 500.0, 600.0, 350.0), 1.0);
    }

    #[test]
    fn test_goodman() {
        let k = correction_factor(MeanStressModel::Goodman, 200.0, 600.0, 350.0);
        assert!((k - 0.6667).abs() < 1e-4);
    }

    #[test]
    fn test_gerber_is_less_conservative_than_goodman() {
        let goodman = goodman_factor(200.0, 600.0);
        let gerber = gerber_factor(200.0, 600.0);
        // 1 - (1/3)^2 = 0.8889
        assert!((gerber - 0.8889).abs() < 1e-4);
        assert!(gerber > goodman);
    }

    #[test]
    fn test_soderberg_uses_yield() {
        let k = correction_factor(MeanStressModel::Soderberg, 175.0, 600.0, 350.0);
        assert!((k - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_zero_reference_disables_correction() {
        assert_eq!(goodman_factor(200.0, 0.0), 1.0);
        assert_eq!(gerber_factor(200.0, 0.0), 1.0);
        assert_eq!(soderberg_factor(200.0, 0.0), 1.0);
        assert_eq!(goodman_factor(200.0, f64::NAN), 1.0);
    }

    #[test]
    fn test_factor_clamped_at_zero() {
        // Mean stress beyond the reference strength
        assert_eq!(goodman_factor(900.0, 600.0), 0.0);
        assert_eq!(gerber_factor(-900.0, 600.0), 0.0);
        assert_eq!(soderberg_factor(400.0, 350.0), 0.0);
    }

    #[test]
    fn test_factor_always_in_unit_interval() {
        let stresses = [-1e4, -600.0, -1.0, 0.0, 1.0, 349.0, 600.0, 1e4];
        let strengths = [-500.0, 0.0, 1.0, 350.0, 600.0, 1e5];
        for model in MeanStressModel::ALL {
            for &sm in &stresses {
                for &su in &strengths {
                    for &sy in &strengths {
                        let k = correction_factor(model, sm, su, sy);
                        assert!((0.0..=1.0).contains(&k), "{model} sm={sm} su={su} sy={sy} -> {k}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_zero_mean_stress_means_no_reduction() {
        for model in MeanStressModel::ALL {
            assert_eq!(correction_factor(model, 0.0, 600.0, 350.0), 1.0);
        }
    }

    #[test]
    fn test_from_str_flexible() {
        assert_eq!(
            MeanStressModel::from_str_flexible("Goodman").unwrap(),
            MeanStressModel::Goodman
        );
        assert_eq!(MeanStressModel::from_str_flexible("").unwrap(), MeanStressModel::None);
        assert!(MeanStressModel::from_str_flexible("walker").is_err());
    }

    #[test]
    fn test_serialization_uses_lowercase_tags() {
        let json = serde_json::to_string(&MeanStressModel::Soderberg).unwrap();
        assert_eq!(json, "\"soderberg\"");
    }
}
