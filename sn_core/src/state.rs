//! # Application State
//!
//! Everything the plot depends on, held in one explicit struct and changed
//! only through [`Command`]s.
//!
//! ```text
//! AppState
//! ├── curves: Vec<SnCurve>        (insertion order, identity = position)
//! ├── settings: PlotSettings      (log toggles)
//! └── scenario: Option<ScenarioResult>
//! ```
//!
//! ## Example
//!
//! ```rust
//! use sn_core::inputs::CurveForm;
//! use sn_core::settings::Axis;
//! use sn_core::state::{AppState, Command};
//!
//! let state = AppState::default()
//!     .apply(Command::AddCurve(CurveForm::default().to_curve()))
//!     .apply(Command::ToggleAxis(Axis::X));
//!
//! assert_eq!(state.curves.len(), 1);
//! assert!(!state.settings.log_x);
//! ```

use serde::{Deserialize, Serialize};

use crate::curve::SnCurve;
use crate::extents::{compute_extents, AxisExtents};
use crate::scenario::{self, ScenarioInput, ScenarioResult};
use crate::settings::{Axis, PlotSettings};

/// State transitions the UI can request
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Append a curve to the end of the collection
    AddCurve(SnCurve),
    /// Remove every curve
    ClearCurves,
    /// Flip one axis between linear and log
    ToggleAxis(Axis),
    /// Set one axis to log (`true`) or linear (`false`)
    SetAxisLog(Axis, bool),
    /// Evaluate and store a scenario
    ComputeScenario(ScenarioInput),
}

/// Plot state: curves, axis settings, and the last scenario.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub curves: Vec<SnCurve>,
    pub settings: PlotSettings,
    pub scenario: Option<ScenarioResult>,
}

impl AppState {
    /// Apply one command and return the new state.
    pub fn apply(mut self, command: Command) -> AppState {
        log::debug!("apply {:?}", command);
        match command {
            Command::AddCurve(curve) => {
                self.curves.push(curve);
            }
            Command::ClearCurves => {
                self.curves.clear();
            }
            Command::ToggleAxis(axis) => {
                let log = self.settings.is_log(axis);
                self.settings.set_log(axis, !log);
            }
            Command::SetAxisLog(axis, log) => {
                self.settings.set_log(axis, log);
            }
            Command::ComputeScenario(input) => {
                self.scenario = Some(scenario::calculate(&input));
            }
        }
        self
    }

    /// Axis extents for the current curves
    pub fn extents(&self) -> AxisExtents {
        compute_extents(&self.curves)
    }

    /// Curve list lines, one per curve
    pub fn curve_summaries(&self) -> Vec<String> {
        self.curves
            .iter()
            .enumerate()
            .map(|(i, c)| c.summary(i))
            .collect()
    }

    /// Read-only snapshot for the chat panel
    pub fn context(&self) -> PlotContext {
        PlotContext {
            curves: self.curves.clone(),
            settings: self.settings,
            scenario: self.scenario,
        }
    }
}

/// Snapshot of the on-screen state handed to the chat endpoint.
///
/// ## JSON Example
///
/// ```json
/// {
///   "curves": [{ "Sf": 1000.0, "b": 0.1, "Nmin": 1000.0, "Nmax": 1000000.0,
///                "model": "none", "sm": 0.0, "Su": 600.0, "Sy": 350.0 }],
///   "settings": { "logx": true, "logy": true },
///   "scenario": null
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlotContext {
    pub curves: Vec<SnCurve>,
    pub settings: PlotSettings,
    pub scenario: Option<ScenarioResult>,
}
