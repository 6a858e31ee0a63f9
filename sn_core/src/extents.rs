//! # Axis Extents
//!
//! Data bounds for the plot, recomputed from the whole curve collection on
//! every render.
//!
//! The y range is estimated from the two endpoint stresses of each curve
//! only, not from the full sampled sweep, then padded by a factor of two on
//! either side. Interior extrema of a curve are not looked at.

use serde::{Deserialize, Serialize};

use crate::curve::SnCurve;

/// Fallback cycle range when no curves exist
pub const DEFAULT_X_RANGE: (f64, f64) = (1e3, 1e8);

/// Fallback stress range (MPa) when no curves exist
pub const DEFAULT_Y_RANGE: (f64, f64) = (10.0, 2000.0);

/// Plot data bounds. All four values are strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisExtents {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for AxisExtents {
    fn default() -> Self {
        AxisExtents {
            x_min: DEFAULT_X_RANGE.0,
            x_max: DEFAULT_X_RANGE.1,
            y_min: DEFAULT_Y_RANGE.0,
            y_max: DEFAULT_Y_RANGE.1,
        }
    }
}

/// Compute extents covering every curve.
pub fn compute_extents(curves: &[SnCurve]) -> AxisExtents {
    if curves.is_empty() {
        return AxisExtents::default();
    }

    let x_min = curves.iter().map(|c| c.n_min).fold(f64::INFINITY, f64::min);
    let x_max = curves.iter().map(|c| c.n_max).fold(f64::NEG_INFINITY, f64::max);

    let (lo, hi) = curves
        .iter()
        .flat_map(|c| {
            let (first, last) = c.endpoint_stresses();
            [first, last]
        })
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), s| (lo.min(s), hi.max(s)));

    let y_min = (lo * 0.5).max(1.0);
    // A fully corrected-away collection (all factors 0) would leave y_max at 0
    let y_max = if hi * 2.0 > y_min { hi * 2.0 } else { y_min * 10.0 };

    AxisExtents {
        x_min,
        x_max,
        y_min,
        y_max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mean_stress::MeanStressModel;

    fn curve(sf: f64, n_min: f64, n_max: f64) -> SnCurve {
        SnCurve {
            sf_mpa: sf,
            b: 0.1,
            n_min,
            n_max,
            model: MeanStressModel::None,
            sm_mpa: 0.0,
            su_mpa: 600.0,
            sy_mpa: 350.0,
        }
    }

    #[test]
    fn test_empty_uses_fallback() {
        let ext = compute_extents(&[]);
        assert_eq!(
            ext,
            AxisExtents {
                x_min: 1e3,
                x_max: 1e8,
                y_min: 10.0,
                y_max: 2000.0
            }
        );
    }

    #[test]
    fn test_single_curve() {
        let ext = compute_extents(&[curve(1000.0, 1e3, 1e6)]);
        assert_eq!(ext.x_min, 1e3);
        assert_eq!(ext.x_max, 1e6);
        // endpoints 501.19 and 251.19
        assert!((ext.y_min - 125.59).abs() < 0.01);
        assert!((ext.y_max - 1002.37).abs() < 0.01);
    }

    #[test]
    fn test_union_of_curves() {
        let ext = compute_extents(&[curve(1000.0, 1e4, 1e6), curve(400.0, 1e2, 1e5)]);
        assert_eq!(ext.x_min, 1e2);
        assert_eq!(ext.x_max, 1e6);
        // lowest endpoint: 1000 * 1e6^-0.1 = 251.19 vs 400 * 1e5^-0.1 = 126.49
        assert!((ext.y_min - 63.25).abs() < 0.01);
        // highest endpoint: 400 * 1e2^-0.1 = 252.38 vs 1000 * 1e4^-0.1 = 398.11
        assert!((ext.y_max - 796.21).abs() < 0.01);
    }

    #[test]
    fn test_y_min_floor_is_one() {
        let ext = compute_extents(&[curve(1.5, 1e3, 1e8)]);
        assert_eq!(ext.y_min, 1.0);
        assert!(ext.y_max > ext.y_min);
    }

    #[test]
    fn test_fully_corrected_curve_keeps_positive_range() {
        let mut c = curve(1000.0, 1e3, 1e6);
        c.model = MeanStressModel::Goodman;
        c.sm_mpa = 700.0;
        let ext = compute_extents(&[c]);
        assert_eq!(ext.y_min, 1.0);
        assert_eq!(ext.y_max, 10.0);
    }

    #[test]
    fn test_uses_endpoints_only() {
        // Monotonic here, but the extents are built from the endpoints alone
        let c = curve(1000.0, 1e3, 1e6);
        let (first, last) = c.endpoint_stresses();
        let ext = compute_extents(&[c]);
        assert_eq!(ext.y_min, (last.min(first) * 0.5).max(1.0));
        assert_eq!(ext.y_max, last.max(first) * 2.0);
    }
}
