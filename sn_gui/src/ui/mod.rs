//! UI module for Basquin GUI
//!
//! # Panel Structure
//! - `toolbar` - Header, axis scale toggles, theme toggle
//! - `curve_panel` - Left sidebar: curve form and list of plotted curves
//! - `plot_panel` - Center: the S-N canvas
//! - `scenario_panel` - Right top: scenario calculator
//! - `chat_panel` - Right bottom: chat transcript and input
//! - `status_bar` - Bottom status messages
//!
//! # Shared Components
//! - `shared/form` - Labeled inputs used by the form panels
//! - `shared/sn_plot` - Canvas program that draws a plot scene

// Top-level panels
pub mod toolbar;
pub mod curve_panel;
pub mod plot_panel;
pub mod scenario_panel;
pub mod chat_panel;
pub mod status_bar;

// Shared components
pub mod shared;
