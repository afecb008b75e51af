//! Runtime orchestration: configuration, the showcase runner, and tracing.
//!
//! # Main Components
//!
//! - [`SolidShowcase`] - Collects every principle's scripts and runs the selected ones
//! - [`ShowcaseConfig`] - Which scripts to run, from the environment and CLI arguments
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod config;
pub mod solid_showcase;
pub mod tracing;

pub use config::*;
pub use solid_showcase::*;
pub use self::tracing::*;
