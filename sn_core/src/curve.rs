//! # S-N Curve
//!
//! Basquin stress-life relation `Sa = Sf' · N^(-b)` with an optional
//! mean-stress reduction.
//!
//! ## Example
//!
//! ```rust
//! use sn_core::curve::SnCurve;
//! use sn_core::mean_stress::MeanStressModel;
//!
//! let curve = SnCurve {
//!     sf_mpa: 1000.0,
//!     b: 0.1,
//!     n_min: 1e3,
//!     n_max: 1e6,
//!     model: MeanStressModel::None,
//!     sm_mpa: 0.0,
//!     su_mpa: 600.0,
//!     sy_mpa: 350.0,
//! };
//!
//! let points: Vec<_> = curve.samples().collect();
//! assert_eq!(points.len(), 301);
//! ```

use serde::{Deserialize, Serialize};

use crate::mean_stress::{correction_factor, MeanStressModel};

/// Number of log-spaced intervals each curve is swept with.
/// A sweep yields `SAMPLE_STEPS + 1` points, both endpoints included.
pub const SAMPLE_STEPS: usize = 300;

/// Base Basquin alternating stress at `n_cycles`.
///
/// Cycle counts are always ≥ 1 when they come from an [`SnCurve`]; callers
/// passing zero or negative counts get whatever `powf` returns.
pub fn basquin_sa(sf_mpa: f64, b: f64, n_cycles: f64) -> f64 {
    sf_mpa * n_cycles.powf(-b)
}

/// One S-N curve instance.
///
/// ## JSON Example
///
/// ```json
/// {
///   "Sf": 1000.0,
///   "b": 0.1,
///   "Nmin": 1000.0,
///   "Nmax": 1000000.0,
///   "model": "goodman",
///   "sm": 100.0,
///   "Su": 600.0,
///   "Sy": 350.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnCurve {
    /// Fatigue strength coefficient Sf' (MPa)
    #[serde(rename = "Sf")]
    pub sf_mpa: f64,

    /// Basquin exponent b (positive, applied as N^-b)
    pub b: f64,

    /// Lower end of the cycle range
    #[serde(rename = "Nmin")]
    pub n_min: f64,

    /// Upper end of the cycle range
    #[serde(rename = "Nmax")]
    pub n_max: f64,

    /// Mean-stress correction model
    pub model: MeanStressModel,

    /// Mean stress Sm (MPa, signed)
    #[serde(rename = "sm")]
    pub sm_mpa: f64,

    /// Ultimate tensile strength Su (MPa)
    #[serde(rename = "Su")]
    pub su_mpa: f64,

    /// Yield strength Sy (MPa)
    #[serde(rename = "Sy")]
    pub sy_mpa: f64,
}

impl SnCurve {
    /// Uncorrected Basquin amplitude at `n_cycles`
    pub fn base_sa(&self, n_cycles: f64) -> f64 {
        basquin_sa(self.sf_mpa, self.b, n_cycles)
    }

    /// Mean-stress reduction factor for this curve
    pub fn correction_factor(&self) -> f64 {
        correction_factor(self.model, self.sm_mpa, self.su_mpa, self.sy_mpa)
    }

    /// Corrected amplitude: base amplitude times the reduction factor
    pub fn corrected_sa(&self, n_cycles: f64) -> f64 {
        self.base_sa(n_cycles) * self.correction_factor()
    }

    /// Corrected amplitudes at `n_min` and `n_max`
    pub fn endpoint_stresses(&self) -> (f64, f64) {
        (self.corrected_sa(self.n_min), self.corrected_sa(self.n_max))
    }

    /// Log-spaced sweep over the cycle range.
    ///
    /// The spacing is logarithmic regardless of the active axis scale.
    pub fn samples(&self) -> CurveSamples {
        CurveSamples {
            curve: *self,
            step: 0,
            steps: SAMPLE_STEPS,
        }
    }

    /// One-line summary as shown in the curve list
    pub fn summary(&self, index: usize) -> String {
        format!(
            "#{}: Sf'={} MPa, b={}, N=[{},{}], model={}, sm={}",
            index + 1,
            self.sf_mpa,
            self.b,
            self.n_min,
            self.n_max,
            self.model.code(),
            self.sm_mpa
        )
    }
}

/// A single sampled point on a curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Cycle count N
    pub n_cycles: f64,
    /// Corrected alternating stress (MPa)
    pub sa_mpa: f64,
}

/// Finite, one-shot iterator over `SAMPLE_STEPS + 1` curve points.
#[derive(Debug, Clone)]
pub struct CurveSamples {
    curve: SnCurve,
    step: usize,
    steps: usize,
}

impl Iterator for CurveSamples {
    type Item = CurvePoint;

    fn next(&mut self) -> Option<CurvePoint> {
        if self.step > self.steps {
            return None;
        }
        let t = self.step as f64 / self.steps as f64;
        self.step += 1;

        let c = &self.curve;
        let n_cycles = c.n_min * (c.n_max / c.n_min).powf(t);
        Some(CurvePoint {
            n_cycles,
            sa_mpa: c.corrected_sa(n_cycles),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.steps + 1).saturating_sub(self.step);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CurveSamples {}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_curve() -> SnCurve {
        SnCurve {
            sf_mpa: 1000.0,
            b: 0.1,
            n_min: 1e3,
            n_max: 1e6,
            model: MeanStressModel::None,
            sm_mpa: 0.0,
            su_mpa: 600.0,
            sy_mpa: 350.0,
        }
    }

    #[test]
    fn test_basquin_reference_values() {
        // 1000 * (1e5)^-0.1 = 1000 * 10^-0.5
        assert!((basquin_sa(1000.0, 0.1, 1e5) - 316.23).abs() < 0.01);
        // 1000 * (1e6)^-0.1 = 1000 * 10^-0.6
        assert!((basquin_sa(1000.0, 0.1, 1e6) - 251.19).abs() < 0.01);
    }

    #[test]
    fn test_basquin_at_one_cycle_is_coefficient() {
        assert_eq!(basquin_sa(850.0, 0.09, 1.0), 850.0);
    }

    #[test]
    fn test_basquin_strictly_decreasing() {
        for &b in &[0.0001, 0.05, 0.1, 0.3, 1.0] {
            let mut n = 1.0;
            let mut prev = basquin_sa(1000.0, b, n);
            while n < 1e9 {
                n *= 3.7;
                let sa = basquin_sa(1000.0, b, n);
                assert!(sa < prev, "b={b} N={n}");
                prev = sa;
            }
        }
    }

    #[test]
    fn test_corrected_sa_goodman() {
        let mut curve = test_curve();
        curve.model = MeanStressModel::Goodman;
        curve.sm_mpa = 200.0;
        // 251.19 * (1 - 200/600)
        let sa = curve.corrected_sa(1e6);
        assert!((sa - 167.46).abs() < 0.01);
    }

    #[test]
    fn test_samples_cover_range_log_spaced() {
        let curve = test_curve();
        let points: Vec<_> = curve.samples().collect();

        assert_eq!(points.len(), SAMPLE_STEPS + 1);
        assert!((points[0].n_cycles - 1e3).abs() < 1e-9);
        assert!((points[SAMPLE_STEPS].n_cycles - 1e6).abs() < 1e-3);

        // Midpoint of a log sweep is the geometric mean
        let mid = points[SAMPLE_STEPS / 2].n_cycles;
        assert!((mid - (1e3_f64 * 1e6).sqrt()).abs() < 1e-3);

        // Constant ratio between consecutive samples
        let r0 = points[1].n_cycles / points[0].n_cycles;
        let r1 = points[200].n_cycles / points[199].n_cycles;
        assert!((r0 - r1).abs() < 1e-9);
    }

    #[test]
    fn test_samples_are_regenerated() {
        let curve = test_curve();
        let first: Vec<_> = curve.samples().collect();
        let second: Vec<_> = curve.samples().collect();
        assert_eq!(first, second);
        assert_eq!(curve.samples().len(), SAMPLE_STEPS + 1);
    }

    #[test]
    fn test_endpoint_stresses() {
        let curve = test_curve();
        let (hi, lo) = curve.endpoint_stresses();
        // 1000 * 1e3^-0.1 = 501.19, 1000 * 1e6^-0.1 = 251.19
        assert!((hi - 501.19).abs() < 0.01);
        assert!((lo - 251.19).abs() < 0.01);
    }

    #[test]
    fn test_summary() {
        let curve = test_curve();
        assert_eq!(
            curve.summary(0),
            "#1: Sf'=1000 MPa, b=0.1, N=[1000,1000000], model=none, sm=0"
        );
    }

    #[test]
    fn test_serialization_field_names() {
        let curve = test_curve();
        let json = serde_json::to_value(curve).unwrap();
        assert_eq!(json["Sf"], 1000.0);
        assert_eq!(json["Nmax"], 1e6);
        assert_eq!(json["model"], "none");
    }
}
