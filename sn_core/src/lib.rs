//! # sn_core - S-N Fatigue Curve Engine
//!
//! `sn_core` is the computational heart of Basquin, providing stress-life
//! curve math, plot layout, and a single-point scenario calculator. All
//! inputs and outputs are JSON-serializable so the on-screen state can be
//! handed to a chat assistant as-is.
//!
//! ## Design Philosophy
//!
//! - **Stateless math**: Pure functions over plain data
//! - **Explicit state**: One [`AppState`] struct, changed only via [`Command`]s
//! - **Lenient inputs**: Form text falls back to documented defaults, never errors
//! - **JSON-First**: All types implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use sn_core::inputs::CurveForm;
//! use sn_core::mapping::PlotArea;
//! use sn_core::plot::build_scene;
//! use sn_core::state::{AppState, Command};
//!
//! let state = AppState::default().apply(Command::AddCurve(CurveForm::default().to_curve()));
//! let scene = build_scene(&state, PlotArea::new(800.0, 600.0));
//! assert_eq!(scene.curves.len(), 1);
//!
//! // Snapshot for the chat endpoint
//! let json = serde_json::to_string_pretty(&state.context()).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`curve`] - Basquin relation, curve type, log-spaced sampling
//! - [`mean_stress`] - Goodman / Gerber / Soderberg reduction factors
//! - [`extents`] - Axis extents over the curve collection
//! - [`mapping`] - Data-to-pixel mapping (linear / log10)
//! - [`plot`] - Plot scene layout (axes, ticks, curve paths)
//! - [`scenario`] - Single-point scenario calculator
//! - [`inputs`] - Form parsing with a default policy table
//! - [`settings`] - Axis toggles
//! - [`state`] - Application state and commands
//! - [`chat`] - Chat request/response contract
//! - [`errors`] - Structured error types

pub mod chat;
pub mod curve;
pub mod errors;
pub mod extents;
pub mod inputs;
pub mod mapping;
pub mod mean_stress;
pub mod plot;
pub mod scenario;
pub mod settings;
pub mod state;

// Re-export commonly used types at crate root for convenience
pub use curve::{basquin_sa, SnCurve};
pub use errors::{FatigueError, FatigueResult};
pub use extents::{compute_extents, AxisExtents};
pub use mean_stress::{correction_factor, MeanStressModel};
pub use settings::{Axis, PlotSettings};
pub use state::{AppState, Command, PlotContext};
