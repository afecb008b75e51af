//! Interface Segregation: notifications split off the core loan interface.

pub mod composition;
mod loans;
pub mod showcase;
pub mod violation;

pub use loans::*;

use crate::framework::Showcase;

/// Creates the violation and refactored showcases for this principle.
pub fn showcases() -> Vec<Box<dyn Showcase>> {
    vec![
        Box::new(showcase::BroadInterfaceShowcase),
        Box::new(showcase::SegregatedInterfaceShowcase),
    ]
}
