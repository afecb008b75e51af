//! Single Responsibility: collection management split from authentication.

mod authentication;
mod manager;
pub mod showcase;
pub mod violation;

pub use authentication::*;
pub use manager::*;

use crate::framework::Showcase;

/// Creates the violation and refactored showcases for this principle.
pub fn showcases() -> Vec<Box<dyn Showcase>> {
    vec![
        Box::new(showcase::CombinedManagerShowcase),
        Box::new(showcase::SplitManagersShowcase),
    ]
}
