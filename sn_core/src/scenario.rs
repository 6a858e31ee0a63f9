//! # Scenario Calculator
//!
//! Single-point evaluation at a chosen target life Nf.
//!
//! ## Procedure
//!
//! 1. Base amplitude `Sa0 = Sf' · Nf^(-b)`
//! 2. Mean-stress factor (same models as the curves)
//! 3. Surface-finish and size factors as a flat multiplier
//! 4. `Smax = Sm + Sa`, `Smin = Sm - Sa`, `R = Smin / Smax`
//!
//! The finish and size factors are **illustrative only**. They give the
//! right trend (rougher and larger parts are weaker) but are not a
//! standards-compliant endurance-limit (Marin) correction.
//!
//! ## Example
//!
//! ```rust
//! use sn_core::mean_stress::MeanStressModel;
//! use sn_core::scenario::{calculate, ScenarioInput, SurfaceFinish};
//!
//! let input = ScenarioInput {
//!     sf_mpa: 1000.0,
//!     b: 0.1,
//!     target_life: 1e6,
//!     diameter_mm: 5.0,
//!     finish: SurfaceFinish::Polished,
//!     model: MeanStressModel::None,
//!     sm_mpa: 0.0,
//!     su_mpa: 600.0,
//!     sy_mpa: 350.0,
//! };
//! let result = calculate(&input);
//! assert!((result.stress_amplitude_base - 251.19).abs() < 0.01);
//! assert_eq!(result.stress_ratio, -1.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::curve::basquin_sa;
use crate::errors::{FatigueError, FatigueResult};
use crate::mean_stress::{correction_factor, MeanStressModel};

/// Surface finish category for the illustrative surface factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceFinish {
    Polished,
    Ground,
    #[default]
    Machined,
    HotRolled,
    AsForged,
}

impl SurfaceFinish {
    /// All finishes for UI selection
    pub const ALL: [SurfaceFinish; 5] = [
        SurfaceFinish::Polished,
        SurfaceFinish::Ground,
        SurfaceFinish::Machined,
        SurfaceFinish::HotRolled,
        SurfaceFinish::AsForged,
    ];

    /// Illustrative surface factor
    pub fn factor(&self) -> f64 {
        match self {
            SurfaceFinish::Polished => 1.0,
            SurfaceFinish::Ground => 0.9,
            SurfaceFinish::Machined => 0.8,
            SurfaceFinish::HotRolled => 0.7,
            SurfaceFinish::AsForged => 0.55,
        }
    }

    /// Serialized name
    pub fn code(&self) -> &'static str {
        match self {
            SurfaceFinish::Polished => "polished",
            SurfaceFinish::Ground => "ground",
            SurfaceFinish::Machined => "machined",
            SurfaceFinish::HotRolled => "hot_rolled",
            SurfaceFinish::AsForged => "as_forged",
        }
    }

    /// Parse a finish name; accepts the serialized name with `-`, `_` or
    /// spaces, plus `cold-drawn`.
    pub fn from_str_flexible(s: &str) -> FatigueResult<Self> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c == '-' || c == ' ' { '_' } else { c })
            .collect();
        match normalized.as_str() {
            "polished" => Ok(SurfaceFinish::Polished),
            "ground" => Ok(SurfaceFinish::Ground),
            "" | "machined" | "cold_drawn" => Ok(SurfaceFinish::Machined),
            "hot_rolled" => Ok(SurfaceFinish::HotRolled),
            "as_forged" | "forged" => Ok(SurfaceFinish::AsForged),
            _ => Err(FatigueError::invalid_input(
                "finish",
                s,
                "Expected one of polished, ground, machined, hot_rolled, as_forged",
            )),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SurfaceFinish::Polished => "Polished",
            SurfaceFinish::Ground => "Ground",
            SurfaceFinish::Machined => "Machined / cold-drawn",
            SurfaceFinish::HotRolled => "Hot-rolled",
            SurfaceFinish::AsForged => "As-forged",
        }
    }
}

impl std::fmt::Display for SurfaceFinish {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Illustrative size factor for a round section of diameter `d_mm`.
///
/// 1.0 up to 8 mm, then `1.24 d^-0.107` to 51 mm and `1.51 d^-0.157`
/// beyond, kept within [0.6, 1.0]. Non-positive or non-finite diameters
/// get 1.0.
pub fn size_factor(d_mm: f64) -> f64 {
    if !d_mm.is_finite() || d_mm <= 8.0 {
        return 1.0;
    }
    let k = if d_mm <= 51.0 {
        1.24 * d_mm.powf(-0.107)
    } else {
        1.51 * d_mm.powf(-0.157)
    };
    k.clamp(0.6, 1.0)
}

/// Scenario inputs (snapshot of the form values used).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInput {
    /// Fatigue strength coefficient Sf' (MPa)
    #[serde(rename = "Sf")]
    pub sf_mpa: f64,

    /// Basquin exponent b
    pub b: f64,

    /// Target life Nf (cycles)
    #[serde(rename = "Nf")]
    pub target_life: f64,

    /// Section diameter (mm)
    pub diameter_mm: f64,

    /// Surface finish category
    pub finish: SurfaceFinish,

    /// Mean-stress correction model
    pub model: MeanStressModel,

    /// Mean stress Sm (MPa)
    #[serde(rename = "sm")]
    pub sm_mpa: f64,

    /// Ultimate strength Su (MPa)
    #[serde(rename = "Su")]
    pub su_mpa: f64,

    /// Yield strength Sy (MPa)
    #[serde(rename = "Sy")]
    pub sy_mpa: f64,
}

/// Scenario results.
///
/// ## JSON Example
///
/// ```json
/// {
///   "stress_amplitude_base": 316.23,
///   "mean_stress_factor": 0.6667,
///   "stress_amplitude_corrected": 210.82,
///   "surface_factor": 0.8,
///   "size_factor": 0.9692,
///   "stress_amplitude_adjusted": 163.46,
///   "max_stress": 363.46,
///   "min_stress": 36.54,
///   "stress_ratio": 0.1005,
///   "inputs": { "Sf": 1000.0, "b": 0.1, "Nf": 100000.0, "...": "..." }
/// }
/// ```
///
/// `stress_ratio` is NaN (JSON `null`) when `max_stress` is exactly zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// Basquin amplitude at Nf before any correction (MPa)
    pub stress_amplitude_base: f64,

    /// Mean-stress reduction factor
    pub mean_stress_factor: f64,

    /// Amplitude after the mean-stress factor, before finish/size (MPa)
    pub stress_amplitude_corrected: f64,

    /// Illustrative surface factor
    pub surface_factor: f64,

    /// Illustrative size factor
    pub size_factor: f64,

    /// Final amplitude Sa (MPa)
    pub stress_amplitude_adjusted: f64,

    /// Smax = Sm + Sa (MPa)
    pub max_stress: f64,

    /// Smin = Sm - Sa (MPa)
    pub min_stress: f64,

    /// R = Smin / Smax
    #[serde(deserialize_with = "nullable_f64")]
    pub stress_ratio: f64,

    /// Inputs the result was computed from
    pub inputs: ScenarioInput,
}

impl ScenarioResult {
    /// Fully reversed loading (R = -1)
    pub fn is_fully_reversed(&self) -> bool {
        (self.stress_ratio + 1.0).abs() < 1e-9
    }
}

// serde_json writes NaN as null; read it back the same way.
fn nullable_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

/// Evaluate the scenario. Never fails.
pub fn calculate(input: &ScenarioInput) -> ScenarioResult {
    let stress_amplitude_base = basquin_sa(input.sf_mpa, input.b, input.target_life);
    let mean_stress_factor =
        correction_factor(input.model, input.sm_mpa, input.su_mpa, input.sy_mpa);
    let stress_amplitude_corrected = stress_amplitude_base * mean_stress_factor;

    let surface_factor = input.finish.factor();
    let size_factor = size_factor(input.diameter_mm);
    let sa = stress_amplitude_corrected * surface_factor * size_factor;

    let max_stress = input.sm_mpa + sa;
    let min_stress = input.sm_mpa - sa;
    let stress_ratio = if max_stress == 0.0 {
        f64::NAN
    } else {
        min_stress / max_stress
    };

    log::debug!(
        "scenario Nf={} Sa0={:.3} k_ms={:.4} k_a={} k_b={:.4} Sa={:.3} R={:.4}",
        input.target_life,
        stress_amplitude_base,
        mean_stress_factor,
        surface_factor,
        size_factor,
        sa,
        stress_ratio
    );

    ScenarioResult {
        stress_amplitude_base,
        mean_stress_factor,
        stress_amplitude_corrected,
        surface_factor,
        size_factor,
        stress_amplitude_adjusted: sa,
        max_stress,
        min_stress,
        stress_ratio,
        inputs: *input,
    }
}
