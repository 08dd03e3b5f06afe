//! Folio TUI - a terminal client for the folio reading tracker
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod error;
pub mod models;
pub mod prefs;
pub mod state;
pub mod traits;
pub mod ui;
