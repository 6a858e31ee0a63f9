//! # Plot Scene
//!
//! Pure description of everything drawn on the S-N canvas for a given
//! canvas size: axes, ticks, labels, titles, and one polyline per curve.
//! Front-ends only translate a [`PlotScene`] into draw calls, so the layout
//! can be tested without a renderer.
//!
//! ## Ticks
//!
//! - Log x: decades 1e3 through 1e8, labelled `1e3`, `1e4`, ...
//! - Log y: 10, 20, 50, 100, 200, 500, 1000, 2000 MPa, labelled
//! - Linear: 8 even divisions, unlabelled
//!
//! Fixed log ticks outside the current extents are dropped.

use serde::{Deserialize, Serialize};

use crate::extents::AxisExtents;
use crate::mapping::{AxisScale, PlotArea};
use crate::state::AppState;

/// Fixed tick values on a log cycle axis
pub const LOG_X_TICKS: [f64; 6] = [1e3, 1e4, 1e5, 1e6, 1e7, 1e8];

/// Fixed tick values on a log stress axis (MPa)
pub const LOG_Y_TICKS: [f64; 8] = [10.0, 20.0, 50.0, 100.0, 200.0, 500.0, 1000.0, 2000.0];

/// Divisions on a linear axis
pub const LINEAR_DIVISIONS: usize = 8;

/// Tick mark length (px)
pub const TICK_LENGTH: f64 = 5.0;

/// Curve stroke width (px)
pub const CURVE_WIDTH: f64 = 2.0;

pub const X_AXIS_TITLE: &str = "Cycles to failure N";
pub const Y_AXIS_TITLE: &str = "Stress amplitude S_a (MPa)";

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn gray(level: u8) -> Self {
        Rgb {
            r: level,
            g: level,
            b: level,
        }
    }
}

/// Canvas background
pub const BACKGROUND: Rgb = Rgb { r: 14, g: 15, b: 18 };
/// Axis lines
pub const AXIS_COLOR: Rgb = Rgb::gray(120);
/// Tick marks
pub const TICK_COLOR: Rgb = Rgb::gray(60);
/// Tick labels
pub const LABEL_COLOR: Rgb = Rgb::gray(150);
/// Axis titles
pub const TITLE_COLOR: Rgb = Rgb::gray(180);

/// Gray level for the curve at `index`; cycles through 100..=254
pub fn curve_gray(index: usize) -> u8 {
    (100 + (index * 80) % 155) as u8
}

/// Pixel position on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenePoint {
    pub x: f64,
    pub y: f64,
}

impl ScenePoint {
    pub fn new(x: f64, y: f64) -> Self {
        ScenePoint { x, y }
    }
}

/// Horizontal text anchoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAnchor {
    Left,
    Center,
    Right,
}

/// A straight line segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: ScenePoint,
    pub to: ScenePoint,
}

/// A tick mark with an optional label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    /// Data value at the tick
    pub value: f64,
    pub mark: Segment,
    pub label: Option<Label>,
}

/// Positioned text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub text: String,
    pub position: ScenePoint,
    pub anchor: TextAnchor,
}

/// One curve as a pixel polyline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurvePath {
    pub color: Rgb,
    pub points: Vec<ScenePoint>,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotScene {
    pub area: PlotArea,
    pub extents: AxisExtents,
    pub x_scale: AxisScale,
    pub y_scale: AxisScale,
    pub x_axis: Segment,
    pub y_axis: Segment,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
    pub x_title: Label,
    pub y_title: Label,
    pub curves: Vec<CurvePath>,
}

/// Lay out the full plot for `state` on a canvas described by `area`.
pub fn build_scene(state: &AppState, area: PlotArea) -> PlotScene {
    let ext = state.extents();
    let x_scale = state.settings.x_scale();
    let y_scale = state.settings.y_scale();

    let left = area.left();
    let bottom = area.bottom();
    let right = area.width - area.padding.right;

    let y_axis = Segment {
        from: ScenePoint::new(left, area.padding.top),
        to: ScenePoint::new(left, bottom),
    };
    let x_axis = Segment {
        from: ScenePoint::new(left, bottom),
        to: ScenePoint::new(right, bottom),
    };

    let x_ticks = tick_values(x_scale, ext.x_min, ext.x_max, &LOG_X_TICKS)
        .into_iter()
        .map(|v| {
            let x = area.map_x(v, ext.x_min, ext.x_max, x_scale);
            Tick {
                value: v,
                mark: Segment {
                    from: ScenePoint::new(x, bottom),
                    to: ScenePoint::new(x, bottom + TICK_LENGTH),
                },
                label: x_scale.is_log().then(|| Label {
                    text: format_exponential(v),
                    position: ScenePoint::new(x, bottom + TICK_LENGTH + 1.0),
                    anchor: TextAnchor::Center,
                }),
            }
        })
        .collect();

    let y_ticks = tick_values(y_scale, ext.y_min, ext.y_max, &LOG_Y_TICKS)
        .into_iter()
        .map(|v| {
            let y = area.map_y(v, ext.y_min, ext.y_max, y_scale);
            Tick {
                value: v,
                mark: Segment {
                    from: ScenePoint::new(left - TICK_LENGTH, y),
                    to: ScenePoint::new(left, y),
                },
                label: y_scale.is_log().then(|| Label {
                    text: format!("{}", v),
                    position: ScenePoint::new(left - 8.0, y),
                    anchor: TextAnchor::Right,
                }),
            }
        })
        .collect();

    let x_title = Label {
        text: X_AXIS_TITLE.to_string(),
        position: ScenePoint::new(left + area.plot_width() / 2.0, area.height - 6.0),
        anchor: TextAnchor::Center,
    };
    let y_title = Label {
        text: Y_AXIS_TITLE.to_string(),
        position: ScenePoint::new(left - 8.0, area.padding.top + 10.0),
        anchor: TextAnchor::Right,
    };

    let curves = state
        .curves
        .iter()
        .enumerate()
        .map(|(idx, curve)| CurvePath {
            color: Rgb::gray(curve_gray(idx)),
            points: curve
                .samples()
                .map(|p| {
                    // A fully corrected-away curve has zero amplitude; pin it to
                    // the bottom of a log axis
                    let sa = if y_scale.is_log() { p.sa_mpa.max(ext.y_min) } else { p.sa_mpa };
                    ScenePoint::new(
                        area.map_x(p.n_cycles, ext.x_min, ext.x_max, x_scale),
                        area.map_y(sa, ext.y_min, ext.y_max, y_scale),
                    )
                })
                .collect(),
        })
        .collect();

    PlotScene {
        area,
        extents: ext,
        x_scale,
        y_scale,
        x_axis,
        y_axis,
        x_ticks,
        y_ticks,
        x_title,
        y_title,
        curves,
    }
}

/// Tick values for one axis
fn tick_values(scale: AxisScale, min: f64, max: f64, log_ticks: &[f64]) -> Vec<f64> {
    match scale {
        AxisScale::Log10 => log_ticks
            .iter()
            .copied()
            .filter(|v| *v >= min * (1.0 - 1e-9) && *v <= max * (1.0 + 1e-9))
            .collect(),
        AxisScale::Linear => (0..=LINEAR_DIVISIONS)
            .map(|i| min + (max - min) * i as f64 / LINEAR_DIVISIONS as f64)
            .collect(),
    }
}

/// `1000.0` -> `"1e3"`
fn format_exponential(v: f64) -> String {
    format!("{:.0e}", v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::CurveForm;
    use crate::settings::Axis;
    use crate::state::Command;

    fn area() -> PlotArea {
        PlotArea::new(800.0, 600.0)
    }

    #[test]
    fn test_empty_state_log_ticks() {
        let scene = build_scene(&AppState::default(), area());
        assert!(scene.curves.is_empty());
        assert_eq!(scene.x_ticks.len(), 6);
        assert_eq!(scene.y_ticks.len(), 8);

        let labels: Vec<_> = scene
            .x_ticks
            .iter()
            .map(|t| t.label.as_ref().unwrap().text.clone())
            .collect();
        assert_eq!(labels, vec!["1e3", "1e4", "1e5", "1e6", "1e7", "1e8"]);
        assert_eq!(scene.y_ticks[7].label.as_ref().unwrap().text, "2000");
    }

    #[test]
    fn test_linear_ticks_are_unlabelled() {
        let state = AppState::default()
            .apply(Command::ToggleAxis(Axis::X))
            .apply(Command::ToggleAxis(Axis::Y));
        let scene = build_scene(&state, area());
        assert_eq!(scene.x_ticks.len(), LINEAR_DIVISIONS + 1);
        assert_eq!(scene.y_ticks.len(), LINEAR_DIVISIONS + 1);
        assert!(scene.x_ticks.iter().all(|t| t.label.is_none()));
        assert_eq!(scene.x_ticks[0].mark.from.x, 70.0);
        assert!((scene.x_ticks[8].mark.from.x - 780.0).abs() < 1e-9);
    }

    #[test]
    fn test_log_ticks_outside_extents_dropped() {
        let state = AppState::default().apply(Command::AddCurve(CurveForm::default().to_curve()));
        let scene = build_scene(&state, area());
        // Curve spans 1e3..1e6
        let values: Vec<f64> = scene.x_ticks.iter().map(|t| t.value).collect();
        assert_eq!(values, vec![1e3, 1e4, 1e5, 1e6]);
    }

    #[test]
    fn test_curve_paths() {
        let state = AppState::default()
            .apply(Command::AddCurve(CurveForm::default().to_curve()))
            .apply(Command::AddCurve(CurveForm::default().to_curve()));
        let scene = build_scene(&state, area());
        assert_eq!(scene.curves.len(), 2);
        assert_eq!(scene.curves[0].color, Rgb::gray(100));
        assert_eq!(scene.curves[1].color, Rgb::gray(180));

        let path = &scene.curves[0].points;
        assert_eq!(path.len(), 301);
        // Curve starts at the left edge and ends at the right edge
        assert!((path[0].x - 70.0).abs() < 1e-9);
        assert!((path[300].x - 780.0).abs() < 1e-6);
        // Decreasing stress moves down the screen
        assert!(path[300].y > path[0].y);
    }

    #[test]
    fn test_zero_amplitude_curve_sits_on_log_axis() {
        let form = CurveForm {
            model: crate::MeanStressModel::Goodman,
            sm: "700".to_string(),
            su: "600".to_string(),
            ..CurveForm::default()
        };
        let state = AppState::default().apply(Command::AddCurve(form.to_curve()));
        let scene = build_scene(&state, area());

        let points = &scene.curves[0].points;
        assert_eq!(points.len(), 301);
        assert!(points.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
        // Pinned to y_min, which is the x axis
        assert!(points.iter().all(|p| (p.y - 550.0).abs() < 1e-9));

        let linear = build_scene(&state.apply(Command::ToggleAxis(Axis::Y)), area());
        assert!(linear.curves[0].points.iter().all(|p| p.y.is_finite()));
    }

    #[test]
    fn test_curve_gray_cycle() {
        assert_eq!(curve_gray(0), 100);
        assert_eq!(curve_gray(1), 180);
        assert_eq!(curve_gray(2), 105);
        assert!((0..50).all(|i| curve_gray(i) >= 100));
    }

    #[test]
    fn test_axes_and_titles() {
        let scene = build_scene(&AppState::default(), area());
        assert_eq!(scene.y_axis.from, ScenePoint::new(70.0, 20.0));
        assert_eq!(scene.x_axis.to, ScenePoint::new(780.0, 550.0));
        assert_eq!(scene.x_title.text, X_AXIS_TITLE);
        assert_eq!(scene.x_title.position, ScenePoint::new(425.0, 594.0));
        assert_eq!(scene.y_title.anchor, TextAnchor::Right);
    }
}
