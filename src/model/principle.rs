//! The five SOLID principles, as a selectable value.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// One of the five SOLID principles.
///
/// On the command line it is given either as the full kebab-case name
/// (`single-responsibility`) or as the usual acronym (`srp`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Principle {
    #[value(alias = "srp")]
    SingleResponsibility,
    #[value(alias = "ocp")]
    OpenClosed,
    #[value(alias = "lsp")]
    LiskovSubstitution,
    #[value(alias = "isp")]
    InterfaceSegregation,
    #[value(alias = "dip")]
    DependencyInversion,
}

impl Principle {
    /// All principles, in SOLID order.
    pub const ALL: [Principle; 5] = [
        Principle::SingleResponsibility,
        Principle::OpenClosed,
        Principle::LiskovSubstitution,
        Principle::InterfaceSegregation,
        Principle::DependencyInversion,
    ];

    /// The conventional three-letter acronym.
    pub fn acronym(&self) -> &'static str {
        match self {
            Principle::SingleResponsibility => "SRP",
            Principle::OpenClosed => "OCP",
            Principle::LiskovSubstitution => "LSP",
            Principle::InterfaceSegregation => "ISP",
            Principle::DependencyInversion => "DIP",
        }
    }

    /// One-sentence statement of the principle.
    pub fn statement(&self) -> &'static str {
        match self {
            Principle::SingleResponsibility => {
                "A class should have one and only one reason to change."
            }
            Principle::OpenClosed => "Classes should be open for extension but closed for modification.",
            Principle::LiskovSubstitution => {
                "Subtypes must be substitutable for their base types without altering the correctness of the program."
            }
            Principle::InterfaceSegregation => {
                "A class should not be forced to implement interfaces it does not use."
            }
            Principle::DependencyInversion => {
                "High-level modules should not depend on low-level modules. Both should depend on abstractions."
            }
        }
    }
}

impl Display for Principle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Principle::SingleResponsibility => "Single Responsibility",
            Principle::OpenClosed => "Open/Closed",
            Principle::LiskovSubstitution => "Liskov Substitution",
            Principle::InterfaceSegregation => "Interface Segregation",
            Principle::DependencyInversion => "Dependency Inversion",
        };
        f.write_str(name)
    }
}
