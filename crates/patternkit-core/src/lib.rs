//! # PatternKit Core
//!
//! Core types and utilities shared by the PatternKit crates.
//! Provides the error taxonomy for pattern operations, named
//! editor constants and measurement units.

pub mod constants;
pub mod error;
pub mod units;

pub use error::{PatternError, Result};
pub use units::MeasurementSystem;
