//! UI module - contains UI rendering components
//!
//! Widgets and helpers shared by the app views.

pub mod chart;
pub mod components;
