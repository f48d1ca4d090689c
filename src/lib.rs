//! folio - a personal portfolio in the terminal
//!
//! This library exposes modules for use in integration tests and benches.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod content;
pub mod domain;
pub mod error;
pub mod startup;
pub mod terminal;
pub mod traits;
pub mod ui;
