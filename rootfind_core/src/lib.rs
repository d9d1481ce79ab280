#![forbid(unsafe_code)]

//! Core logic for the rootfind bounded square root checker.
//!
//! This crate provides:
//! - The bounded integer square root finder
//! - Result types and the two-kind error taxonomy
//! - Presentation of results as text lines or JSON outcomes
//! - Configuration and logging setup

pub mod types;
pub mod error;
pub mod finder;
pub mod report;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result, RootError};
pub use types::*;
pub use finder::{find_integer_square_root, find_integer_square_root_within, perfect_squares_within};
pub use report::{describe, Outcome};
pub use config::{Config, OutputFormat};
