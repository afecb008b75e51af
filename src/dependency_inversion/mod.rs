//! Dependency Inversion: the user service receives its database.

mod database;
mod service;
pub mod showcase;
pub mod violation;

pub use database::*;
pub use service::*;

use crate::framework::Showcase;

/// Creates the violation and refactored showcases for this principle.
pub fn showcases() -> Vec<Box<dyn Showcase>> {
    vec![
        Box::new(showcase::HardwiredDatabaseShowcase),
        Box::new(showcase::InjectedDatabaseShowcase),
    ]
}
