//! # Plot Settings
//!
//! Display settings shared by the GUI canvas, the CLI, and the exported
//! chat context. Serializes with the `logx` / `logy` keys the chat endpoint
//! expects.

use serde::{Deserialize, Serialize};

use crate::mapping::AxisScale;

/// Plot axis identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Cycle count axis
    X,
    /// Stress amplitude axis
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// Axis scaling toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotSettings {
    /// Logarithmic cycle axis
    #[serde(rename = "logx")]
    pub log_x: bool,

    /// Logarithmic stress axis
    #[serde(rename = "logy")]
    pub log_y: bool,
}

impl Default for PlotSettings {
    /// S-N plots are conventionally log-log
    fn default() -> Self {
        PlotSettings {
            log_x: true,
            log_y: true,
        }
    }
}

impl PlotSettings {
    pub fn is_log(&self, axis: Axis) -> bool {
        match axis {
            Axis::X => self.log_x,
            Axis::Y => self.log_y,
        }
    }

    pub fn set_log(&mut self, axis: Axis, log: bool) {
        match axis {
            Axis::X => self.log_x = log,
            Axis::Y => self.log_y = log,
        }
    }

    pub fn x_scale(&self) -> AxisScale {
        AxisScale::from_log_flag(self.log_x)
    }

    pub fn y_scale(&self) -> AxisScale {
        AxisScale::from_log_flag(self.log_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_log_log() {
        let s = PlotSettings::default();
        assert_eq!(s.x_scale(), AxisScale::Log10);
        assert_eq!(s.y_scale(), AxisScale::Log10);
    }

    #[test]
    fn test_set_log() {
        let mut s = PlotSettings::default();
        s.set_log(Axis::Y, false);
        assert!(s.is_log(Axis::X));
        assert!(!s.is_log(Axis::Y));
        assert_eq!(s.y_scale(), AxisScale::Linear);
    }

    #[test]
    fn test_wire_keys() {
        let json = serde_json::to_string(&PlotSettings::default()).unwrap();
        assert_eq!(json, r#"{"logx":true,"logy":true}"#);
    }
}
