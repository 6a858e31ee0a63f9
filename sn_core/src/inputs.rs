//! # Form Inputs
//!
//! Raw text from the input fields, turned into typed values with an explicit
//! default policy. Missing, unparsable or non-finite text never fails: it
//! falls back to the field's default. Range clamps are applied afterwards.
//!
//! | Field            | Default | Clamp          |
//! |------------------|---------|----------------|
//! | Sf' (MPa)        | 1000    | ≥ 1            |
//! | b                | 0.1     | ≥ 0.0001       |
//! | N min            | 1e3     | ≥ 1            |
//! | N max            | 1e6     | ≥ N min + 1    |
//! | Sm (MPa)         | 0       |                |
//! | Su (MPa)         | 600     |                |
//! | Sy (MPa)         | 350     |                |
//! | Target life Nf   | 1e6     | ≥ 1            |
//! | Diameter (mm)    | 10      |                |
//!
//! ## Example
//!
//! ```rust
//! use sn_core::inputs::CurveForm;
//!
//! let form = CurveForm {
//!     n_min: "5000".to_string(),
//!     n_max: "".to_string(),
//!     ..CurveForm::default()
//! };
//! let curve = form.to_curve();
//! assert_eq!(curve.n_min, 5000.0);
//! assert_eq!(curve.n_max, 1e6);
//! ```

use serde::{Deserialize, Serialize};

use crate::curve::SnCurve;
use crate::errors::{FatigueError, FatigueResult};
use crate::mean_stress::MeanStressModel;
use crate::scenario::{ScenarioInput, SurfaceFinish};

/// Smallest accepted Basquin exponent
pub const MIN_EXPONENT: f64 = 0.0001;

/// Numeric form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormField {
    FatigueStrengthCoefficient,
    BasquinExponent,
    MinCycles,
    MaxCycles,
    MeanStress,
    UltimateStrength,
    YieldStrength,
    TargetLife,
    DiameterMm,
}

impl FormField {
    pub const ALL: [FormField; 9] = [
        FormField::FatigueStrengthCoefficient,
        FormField::BasquinExponent,
        FormField::MinCycles,
        FormField::MaxCycles,
        FormField::MeanStress,
        FormField::UltimateStrength,
        FormField::YieldStrength,
        FormField::TargetLife,
        FormField::DiameterMm,
    ];

    /// Value used when the field is blank or not a number
    pub fn default_value(&self) -> f64 {
        match self {
            FormField::FatigueStrengthCoefficient => 1000.0,
            FormField::BasquinExponent => 0.1,
            FormField::MinCycles => 1e3,
            FormField::MaxCycles => 1e6,
            FormField::MeanStress => 0.0,
            FormField::UltimateStrength => 600.0,
            FormField::YieldStrength => 350.0,
            FormField::TargetLife => 1e6,
            FormField::DiameterMm => 10.0,
        }
    }

    /// Short key used in error messages and JSON
    pub fn key(&self) -> &'static str {
        match self {
            FormField::FatigueStrengthCoefficient => "Sf",
            FormField::BasquinExponent => "b",
            FormField::MinCycles => "Nmin",
            FormField::MaxCycles => "Nmax",
            FormField::MeanStress => "sm",
            FormField::UltimateStrength => "Su",
            FormField::YieldStrength => "Sy",
            FormField::TargetLife => "Nf",
            FormField::DiameterMm => "d_mm",
        }
    }

    /// Field label as shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            FormField::FatigueStrengthCoefficient => "Sf' (MPa):",
            FormField::BasquinExponent => "b:",
            FormField::MinCycles => "N min:",
            FormField::MaxCycles => "N max:",
            FormField::MeanStress => "Sm (MPa):",
            FormField::UltimateStrength => "Su (MPa):",
            FormField::YieldStrength => "Sy (MPa):",
            FormField::TargetLife => "Nf (cycles):",
            FormField::DiameterMm => "d (mm):",
        }
    }

    /// Lenient parse: blank, garbage, NaN and infinities become the default.
    pub fn parse(&self, raw: &str) -> f64 {
        match raw.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => self.default_value(),
        }
    }

    /// Strict parse for programmatic callers; blank still means default.
    pub fn parse_strict(&self, raw: &str) -> FatigueResult<f64> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(self.default_value());
        }
        let value: f64 = trimmed
            .parse()
            .map_err(|_| FatigueError::invalid_input(self.key(), raw, "Not a number"))?;
        if !value.is_finite() {
            return Err(FatigueError::invalid_input(
                self.key(),
                raw,
                "Value must be finite",
            ));
        }
        Ok(value)
    }
}

/// Text contents of the "Add Curve" form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveForm {
    pub sf: String,
    pub b: String,
    pub n_min: String,
    pub n_max: String,
    pub model: MeanStressModel,
    pub sm: String,
    pub su: String,
    pub sy: String,
}

impl Default for CurveForm {
    fn default() -> Self {
        CurveForm {
            sf: "1000".to_string(),
            b: "0.1".to_string(),
            n_min: "1000".to_string(),
            n_max: "1000000".to_string(),
            model: MeanStressModel::None,
            sm: "0".to_string(),
            su: "600".to_string(),
            sy: "350".to_string(),
        }
    }
}

impl CurveForm {
    /// Fields this form holds
    pub const FIELDS: [FormField; 7] = [
        FormField::FatigueStrengthCoefficient,
        FormField::BasquinExponent,
        FormField::MinCycles,
        FormField::MaxCycles,
        FormField::MeanStress,
        FormField::UltimateStrength,
        FormField::YieldStrength,
    ];

    /// Raw text of a field, `None` for fields this form does not hold
    pub fn get(&self, field: FormField) -> Option<&str> {
        let value = match field {
            FormField::FatigueStrengthCoefficient => &self.sf,
            FormField::BasquinExponent => &self.b,
            FormField::MinCycles => &self.n_min,
            FormField::MaxCycles => &self.n_max,
            FormField::MeanStress => &self.sm,
            FormField::UltimateStrength => &self.su,
            FormField::YieldStrength => &self.sy,
            FormField::TargetLife | FormField::DiameterMm => return None,
        };
        Some(value)
    }

    /// Replace the raw text of a field. Returns `false` if the form does
    /// not hold it.
    pub fn set(&mut self, field: FormField, value: String) -> bool {
        let slot = match field {
            FormField::FatigueStrengthCoefficient => &mut self.sf,
            FormField::BasquinExponent => &mut self.b,
            FormField::MinCycles => &mut self.n_min,
            FormField::MaxCycles => &mut self.n_max,
            FormField::MeanStress => &mut self.sm,
            FormField::UltimateStrength => &mut self.su,
            FormField::YieldStrength => &mut self.sy,
            FormField::TargetLife | FormField::DiameterMm => return false,
        };
        *slot = value;
        true
    }

    /// Build a curve, enforcing `n_min >= 1` and `n_max > n_min`.
    pub fn to_curve(&self) -> SnCurve {
        let sf_mpa = FormField::FatigueStrengthCoefficient.parse(&self.sf).max(1.0);
        let b = FormField::BasquinExponent.parse(&self.b).max(MIN_EXPONENT);
        let n_min = FormField::MinCycles.parse(&self.n_min).max(1.0);
        let n_max = FormField::MaxCycles.parse(&self.n_max).max(n_min + 1.0);

        SnCurve {
            sf_mpa,
            b,
            n_min,
            n_max,
            model: self.model,
            sm_mpa: FormField::MeanStress.parse(&self.sm),
            su_mpa: FormField::UltimateStrength.parse(&self.su),
            sy_mpa: FormField::YieldStrength.parse(&self.sy),
        }
    }
}

/// Text contents of the scenario form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioForm {
    pub target_life: String,
    pub diameter_mm: String,
    pub finish: SurfaceFinish,
    pub model: MeanStressModel,
}

impl Default for ScenarioForm {
    fn default() -> Self {
        ScenarioForm {
            target_life: "1000000".to_string(),
            diameter_mm: "10".to_string(),
            finish: SurfaceFinish::Machined,
            model: MeanStressModel::None,
        }
    }
}

impl ScenarioForm {
    pub const FIELDS: [FormField; 2] = [FormField::TargetLife, FormField::DiameterMm];

    pub fn get(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::TargetLife => Some(&self.target_life),
            FormField::DiameterMm => Some(&self.diameter_mm),
            _ => None,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) -> bool {
        match field {
            FormField::TargetLife => self.target_life = value,
            FormField::DiameterMm => self.diameter_mm = value,
            _ => return false,
        }
        true
    }

    /// Combine with the live curve form.
    ///
    /// Basquin and strength values come from whatever the curve form holds
    /// right now, whether or not that curve was ever added to the plot.
    pub fn to_input(&self, curve_form: &CurveForm) -> ScenarioInput {
        let live = curve_form.to_curve();
        ScenarioInput {
            sf_mpa: live.sf_mpa,
            b: live.b,
            target_life: FormField::TargetLife.parse(&self.target_life).max(1.0),
            diameter_mm: FormField::DiameterMm.parse(&self.diameter_mm),
            finish: self.finish,
            model: self.model,
            sm_mpa: live.sm_mpa,
            su_mpa: live.su_mpa,
            sy_mpa: live.sy_mpa,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_matches_form_defaults() {
        let curve = CurveForm::default().to_curve();
        assert_eq!(curve.sf_mpa, FormField::FatigueStrengthCoefficient.default_value());
        assert_eq!(curve.b, FormField::BasquinExponent.default_value());
        assert_eq!(curve.n_min, FormField::MinCycles.default_value());
        assert_eq!(curve.n_max, FormField::MaxCycles.default_value());
        assert_eq!(curve.su_mpa, 600.0);
        assert_eq!(curve.sy_mpa, 350.0);
    }

    #[test]
    fn test_blank_and_garbage_fall_back() {
        assert_eq!(FormField::MinCycles.parse(""), 1e3);
        assert_eq!(FormField::MinCycles.parse("   "), 1e3);
        assert_eq!(FormField::MinCycles.parse("abc"), 1e3);
        assert_eq!(FormField::MinCycles.parse("NaN"), 1e3);
        assert_eq!(FormField::MinCycles.parse("inf"), 1e3);
        assert_eq!(FormField::MinCycles.parse(" 2e4 "), 2e4);
    }

    #[test]
    fn test_strict_parse() {
        assert_eq!(FormField::BasquinExponent.parse_strict("").unwrap(), 0.1);
        assert_eq!(FormField::BasquinExponent.parse_strict("0.12").unwrap(), 0.12);
        let err = FormField::BasquinExponent.parse_strict("x").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_equal_cycle_bounds_are_separated() {
        let form = CurveForm {
            n_min: "5000".to_string(),
            n_max: "5000".to_string(),
            ..CurveForm::default()
        };
        let curve = form.to_curve();
        assert_eq!(curve.n_min, 5000.0);
        assert_eq!(curve.n_max, 5001.0);
    }

    #[test]
    fn test_inverted_cycle_bounds_are_separated() {
        let form = CurveForm {
            n_min: "1e6".to_string(),
            n_max: "1e3".to_string(),
            ..CurveForm::default()
        };
        let curve = form.to_curve();
        assert!(curve.n_max > curve.n_min);
        assert_eq!(curve.n_max, 1e6 + 1.0);
    }

    #[test]
    fn test_clamps() {
        let form = CurveForm {
            sf: "-50".to_string(),
            b: "0".to_string(),
            n_min: "0".to_string(),
            ..CurveForm::default()
        };
        let curve = form.to_curve();
        assert_eq!(curve.sf_mpa, 1.0);
        assert_eq!(curve.b, MIN_EXPONENT);
        assert_eq!(curve.n_min, 1.0);
    }

    #[test]
    fn test_field_access_routes_to_owning_form() {
        let mut curve_form = CurveForm::default();
        let mut scenario_form = ScenarioForm::default();

        for field in FormField::ALL {
            let value = format!("{}", field.default_value() * 2.0);
            let curve_owned = curve_form.set(field, value.clone());
            let scenario_owned = scenario_form.set(field, value.clone());
            // Every field belongs to exactly one form
            assert!(curve_owned ^ scenario_owned, "{:?}", field);

            let stored = curve_form.get(field).or(scenario_form.get(field));
            assert_eq!(stored, Some(value.as_str()));
        }
        assert_eq!(CurveForm::FIELDS.len() + ScenarioForm::FIELDS.len(), FormField::ALL.len());
    }

    #[test]
    fn test_scenario_reads_live_curve_form() {
        let curve_form = CurveForm {
            sf: "900".to_string(),
            sm: "120".to_string(),
            ..CurveForm::default()
        };
        let scenario = ScenarioForm {
            target_life: "".to_string(),
            ..ScenarioForm::default()
        };
        let input = scenario.to_input(&curve_form);
        assert_eq!(input.sf_mpa, 900.0);
        assert_eq!(input.sm_mpa, 120.0);
        assert_eq!(input.target_life, 1e6);
        assert_eq!(input.diameter_mm, 10.0);
    }
}
