//! # Coordinate Mapping
//!
//! Converts (cycles, stress) data values into pixel coordinates inside a
//! padded plot area, under linear or base-10 logarithmic scaling.
//!
//! ## Coordinate Systems
//!
//! - Screen: origin top-left, y grows downward, units are pixels
//! - Data: x is cycle count N, y is stress amplitude (MPa), y grows upward
//!
//! The y mapping is inverted so larger stresses sit higher on screen.
//!
//! ## Example
//!
//! ```rust
//! use sn_core::mapping::{AxisScale, PlotArea};
//!
//! let area = PlotArea::new(800.0, 600.0);
//!
//! // Left edge of the plot sits at the left padding
//! let x = area.map_x(1e3, 1e3, 1e8, AxisScale::Log10);
//! assert_eq!(x, 70.0);
//!
//! // Bottom of the stress range sits on the x axis
//! let y = area.map_y(10.0, 10.0, 2000.0, AxisScale::Log10);
//! assert_eq!(y, 550.0);
//! ```
//!
//! In log mode `min`, `max` and the value must be strictly positive; the
//! extents computation guarantees this for the plot's own data.

use serde::{Deserialize, Serialize};

/// Axis scaling mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AxisScale {
    /// Linear mapping
    Linear,
    /// log10 mapping
    #[default]
    Log10,
}

impl AxisScale {
    /// Scale from a "log axis" toggle
    pub fn from_log_flag(log: bool) -> Self {
        if log {
            AxisScale::Log10
        } else {
            AxisScale::Linear
        }
    }

    pub fn is_log(&self) -> bool {
        matches!(self, AxisScale::Log10)
    }

    /// Position of `value` within `[min, max]` as a 0..1 fraction
    pub fn fraction(&self, value: f64, min: f64, max: f64) -> f64 {
        match self {
            AxisScale::Linear => (value - min) / (max - min),
            AxisScale::Log10 => {
                let (lv, lmin, lmax) = (value.log10(), min.log10(), max.log10());
                (lv - lmin) / (lmax - lmin)
            }
        }
    }

    /// Inverse of [`AxisScale::fraction`]
    pub fn value_at(&self, fraction: f64, min: f64, max: f64) -> f64 {
        match self {
            AxisScale::Linear => min + fraction * (max - min),
            AxisScale::Log10 => {
                let (lmin, lmax) = (min.log10(), max.log10());
                10f64.powf(lmin + fraction * (lmax - lmin))
            }
        }
    }
}

/// Pixel margins around the plot region
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for Padding {
    /// Room for tick labels on the left and the x-axis title at the bottom
    fn default() -> Self {
        Padding {
            left: 70.0,
            right: 20.0,
            top: 20.0,
            bottom: 50.0,
        }
    }
}

/// Canvas size plus padding; all mapping goes through this.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
    pub padding: Padding,
}

impl PlotArea {
    /// Plot area with the default padding
    pub fn new(width: f64, height: f64) -> Self {
        PlotArea {
            width,
            height,
            padding: Padding::default(),
        }
    }

    /// Horizontal pixel span available for data
    pub fn plot_width(&self) -> f64 {
        self.width - self.padding.left - self.padding.right
    }

    /// Vertical pixel span available for data
    pub fn plot_height(&self) -> f64 {
        self.height - self.padding.top - self.padding.bottom
    }

    /// Pixel y of the x axis (bottom of the plot region)
    pub fn bottom(&self) -> f64 {
        self.height - self.padding.bottom
    }

    /// Pixel x of the y axis (left of the plot region)
    pub fn left(&self) -> f64 {
        self.padding.left
    }

    /// Map a cycle count to pixel x
    pub fn map_x(&self, n_cycles: f64, x_min: f64, x_max: f64, scale: AxisScale) -> f64 {
        self.left() + scale.fraction(n_cycles, x_min, x_max) * self.plot_width()
    }

    /// Map a stress to pixel y (inverted)
    pub fn map_y(&self, stress: f64, y_min: f64, y_max: f64, scale: AxisScale) -> f64 {
        self.bottom() - scale.fraction(stress, y_min, y_max) * self.plot_height()
    }

    /// Pixel x back to a cycle count
    pub fn unmap_x(&self, px: f64, x_min: f64, x_max: f64, scale: AxisScale) -> f64 {
        let fraction = (px - self.left()) / self.plot_width();
        scale.value_at(fraction, x_min, x_max)
    }

    /// Pixel y back to a stress
    pub fn unmap_y(&self, py: f64, y_min: f64, y_max: f64, scale: AxisScale) -> f64 {
        let fraction = (self.bottom() - py) / self.plot_height();
        scale.value_at(fraction, y_min, y_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> PlotArea {
        PlotArea::new(800.0, 600.0)
    }

    #[test]
    fn test_plot_spans() {
        let a = area();
        assert_eq!(a.plot_width(), 710.0);
        assert_eq!(a.plot_height(), 530.0);
    }

    #[test]
    fn test_linear_x() {
        let a = area();
        assert_eq!(a.map_x(0.0, 0.0, 100.0, AxisScale::Linear), 70.0);
        assert_eq!(a.map_x(100.0, 0.0, 100.0, AxisScale::Linear), 780.0);
        assert_eq!(a.map_x(50.0, 0.0, 100.0, AxisScale::Linear), 425.0);
    }

    #[test]
    fn test_log_x_decades_evenly_spaced() {
        let a = area();
        let x3 = a.map_x(1e3, 1e3, 1e8, AxisScale::Log10);
        let x4 = a.map_x(1e4, 1e3, 1e8, AxisScale::Log10);
        let x5 = a.map_x(1e5, 1e3, 1e8, AxisScale::Log10);
        assert!(((x4 - x3) - (x5 - x4)).abs() < 1e-9);
        assert!(((x4 - x3) - 142.0).abs() < 1e-9);
    }

    #[test]
    fn test_y_is_inverted() {
        let a = area();
        let low = a.map_y(10.0, 10.0, 2000.0, AxisScale::Linear);
        let high = a.map_y(2000.0, 10.0, 2000.0, AxisScale::Linear);
        assert_eq!(low, 550.0);
        assert_eq!(high, 20.0);
        assert!(high < low);
    }

    #[test]
    fn test_round_trip_linear() {
        let a = area();
        for &v in &[10.0, 37.5, 999.0, 2000.0] {
            let py = a.map_y(v, 10.0, 2000.0, AxisScale::Linear);
            let back = a.unmap_y(py, 10.0, 2000.0, AxisScale::Linear);
            assert!((back - v).abs() < 1e-9 * v.max(1.0));
        }
    }

    #[test]
    fn test_round_trip_log() {
        let a = area();
        for &v in &[1e3, 2.5e4, 7.7e6, 1e8] {
            let px = a.map_x(v, 1e3, 1e8, AxisScale::Log10);
            let back = a.unmap_x(px, 1e3, 1e8, AxisScale::Log10);
            assert!(((back - v) / v).abs() < 1e-9);
        }
        for &v in &[10.0, 55.0, 1234.0] {
            let py = a.map_y(v, 10.0, 2000.0, AxisScale::Log10);
            let back = a.unmap_y(py, 10.0, 2000.0, AxisScale::Log10);
            assert!(((back - v) / v).abs() < 1e-9);
        }
    }

    #[test]
    fn test_from_log_flag() {
        assert_eq!(AxisScale::from_log_flag(true), AxisScale::Log10);
        assert_eq!(AxisScale::from_log_flag(false), AxisScale::Linear);
    }
}
