//! Liskov Substitution: foreclosure split into its own capability.

pub mod error;
mod loans;
pub mod showcase;
pub mod violation;

pub use error::*;
pub use loans::*;

use crate::framework::Showcase;

/// Creates the violation and refactored showcases for this principle.
pub fn showcases() -> Vec<Box<dyn Showcase>> {
    vec![
        Box::new(showcase::UnsupportedForeclosureShowcase),
        Box::new(showcase::SecureLoanShowcase),
    ]
}
