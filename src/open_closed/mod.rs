//! Open/Closed: discount tiers as injected functions instead of branches.

mod calculator;
pub mod showcase;
mod table;
pub mod violation;

pub use calculator::*;
pub use table::*;

use crate::framework::Showcase;

/// Creates the violation and refactored showcases for this principle.
pub fn showcases() -> Vec<Box<dyn Showcase>> {
    vec![
        Box::new(showcase::TaggedDiscountShowcase),
        Box::new(showcase::InjectedDiscountShowcase),
    ]
}
