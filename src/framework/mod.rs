//! Generic showcase framework.
//!
//! This module provides the building blocks shared by every principle module.
//!
//! # Main Components
//!
//! - [`Console`] - Capability trait for line output, injected into every showcase
//! - [`Showcase`] - Trait that violation and refactored scripts implement
//! - [`ShowcaseError`] - Common error type
//!
//! # Testing
//!
//! See [`mock`] module for a recording console to assert golden output.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use self::core::*;
