//! # Core Showcase Framework
//!
//! This module defines the generic building blocks every principle module plugs into.
//!
//! ## Key Types
//!
//! - [`Console`]: The line-output capability every showcase writes through.
//! - [`StdoutConsole`]: The production console used by the binary.
//! - [`Showcase`]: The trait that every violation/refactored script implements.
//! - [`ShowcaseError`]: Common errors raised while running a showcase.

use std::fmt::{self, Display};
use tracing::debug;

use crate::model::Principle;

// =============================================================================
// 1. THE OUTPUT CAPABILITY
// =============================================================================

/// Capability trait for writing deterministic, line-oriented output.
///
/// # Architecture Note
/// Showcases never call `println!` directly. They receive a `&dyn Console` from
/// whoever runs them, which is the same Dependency Inversion move the
/// [`dependency_inversion`](crate::dependency_inversion) module teaches.
/// The binary injects [`StdoutConsole`]; tests inject a
/// [`Transcript`](crate::framework::mock::Transcript) and compare lines.
pub trait Console {
    /// Writes one line of output.
    fn line(&self, text: &str);
}

/// Console that writes every line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn line(&self, text: &str) {
        println!("{text}");
    }
}

// =============================================================================
// 2. THE SHOWCASE CONTRACT
// =============================================================================

/// Whether a showcase demonstrates the flawed design or its fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShowcaseKind {
    /// The design that breaks the principle.
    Violation,
    /// The design after refactoring.
    Refactored,
}

impl Display for ShowcaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShowcaseKind::Violation => f.write_str("violation"),
            ShowcaseKind::Refactored => f.write_str("refactored"),
        }
    }
}

/// Trait that every runnable script must implement to be driven by
/// [`SolidShowcase`](crate::lifecycle::SolidShowcase).
///
/// # Architecture Note
/// Each principle module owns one violation and one refactored showcase. By
/// writing them against this contract, the runner loop (selection, spans,
/// error reporting) is written *once* and works for all ten scripts.
pub trait Showcase {
    /// The principle this script illustrates.
    fn principle(&self) -> Principle;

    /// Violation or refactored design.
    fn kind(&self) -> ShowcaseKind;

    /// Short human-readable title, used in logs and reports.
    fn title(&self) -> &'static str;

    /// Runs the script, writing its output to `out`.
    fn run(&self, out: &dyn Console) -> Result<(), ShowcaseError>;
}

// =============================================================================
// 3. ERRORS
// =============================================================================

/// Errors that can occur while running showcases.
#[derive(Debug, thiserror::Error)]
pub enum ShowcaseError {
    /// A domain operation inside the script failed.
    #[error("{0}")]
    Domain(Box<dyn std::error::Error + Send + Sync>),

    /// A refactored script failed, which means the refactoring is broken.
    #[error("{title} failed unexpectedly: {source}")]
    Unexpected {
        title: &'static str,
        #[source]
        source: Box<ShowcaseError>,
    },
}

impl ShowcaseError {
    /// Wraps a domain error raised inside a showcase.
    pub fn domain(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        debug!(error = %error, "Domain error raised");
        ShowcaseError::Domain(Box::new(error))
    }
}
