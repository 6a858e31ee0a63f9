//! Shared UI components reusable across panels
//!
//! Contains:
//! - `form` - Labeled text inputs and pick lists
//! - `sn_plot` - Canvas drawing for the S-N plot

pub mod form;
pub mod sn_plot;
