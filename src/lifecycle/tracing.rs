//! # Logging
//!
//! [`setup_tracing`] installs the `tracing` subscriber for the showcase binary.
//!
//! Stdout carries nothing but the lines the showcase scripts print. Everything
//! else (which script is running, what a consumer was handed, why a violation
//! failed) is a `tracing` event on stderr, filtered by `RUST_LOG`. With
//! `RUST_LOG` unset only errors are shown, so a plain `cargo run` prints the
//! scripts' output and nothing more.
//!
//! Events are written in the compact format without the module path; the
//! `showcase{principle=.. kind=..}` span already says where an event comes from.
//!
//! ## What Gets Traced
//!
//! - **Runner**: One `showcase` span per script, with `principle` and `kind` fields
//! - **Consumers**: `#[instrument]` spans on the injected-collaborator entry points
//!   (`save_user_data`, `close_loan`, `process`, `authenticate_user`, ...)
//! - **Outcomes**: Authentication results, discount lookups, registry changes
//! - **Errors**: Violation failures as warnings, refactored failures as errors
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show discount amounts, tier lookups and configuration
//! RUST_LOG=debug cargo run -- ocp --violations
//!
//! # Filter to specific modules
//! RUST_LOG=solid_recipe::liskov=debug cargo run -- lsp --violations
//! ```
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=info`** for `cargo run -- lsp --violations` (stderr only):
//!
//! ```text
//! INFO showcase{principle=Liskov Substitution kind=violation}: Running title="Liskov Substitution (violation)" statement="Subtypes must be substitutable for their base types without altering the correctness of the program."
//! WARN showcase{principle=Liskov Substitution kind=violation}: foreclose_loan is not supported loan="credit card loan"
//! WARN showcase{principle=Liskov Substitution kind=violation}: Violation failed as demonstrated title="Liskov Substitution (violation)" error=Method not implemented: foreclose_loan (credit card loan)
//! INFO showcase{principle=Liskov Substitution kind=refactored}: Running title="Liskov Substitution (refactored)" statement="Subtypes must be substitutable for their base types without altering the correctness of the program."
//! INFO showcase{principle=Liskov Substitution kind=refactored}: Completed title="Liskov Substitution (refactored)"
//! INFO All showcases finished completed=1 violations=1
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr) // stdout belongs to the showcase output
        .with_target(false) // Don't show module paths - spans carry the principle instead
        .compact() // Compact format shows spans inline (e.g., "showcase{principle=...}")
        .init();
}
