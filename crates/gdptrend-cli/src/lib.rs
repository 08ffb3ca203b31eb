#![forbid(unsafe_code)]

//! GDPTrend CLI library.
//!
//! Argument types, configuration loading, and command handlers for the
//! `gdptrend` binary. Split from `main.rs` so handlers stay testable.

pub mod cli;
pub mod config;
pub mod handlers;

pub use config::GdptrendConfig;
