#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # SOLID Recipe
//!
//! > **The five SOLID principles as Rust traits, each shown broken and then fixed.**
//!
//! Every principle gets a *violation* (the flawed design) and a *refactored*
//! design. Both are runnable scripts ("showcases") that write deterministic lines
//! to an injected [`Console`](framework::Console), so the output is the contract
//! and the tests compare it line by line.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Capability traits, producer variants, consumers
//!
//! The same three roles recur in every module:
//! - **Capability trait**: the smallest set of operations a consumer needs (`Database`, `LoanPayment`, ...).
//! - **Variant**: a plain struct implementing one or more capability traits (`SqlDb`, `HomeLoan`, ...).
//! - **Consumer**: receives a capability value from outside and calls only what the trait declares
//!   (`UserService`, `LoanClosureService`, `LoanDesk`, ...).
//!
//! Where the violation designs fail with "not implemented" at run time, the
//! refactored designs make the mistake unrepresentable: handing a
//! `CreditCardLoan` to `LoanClosureService` or calling `send_notification` on a
//! base `LoanProcessor` does not compile.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Principles
//! - [`single_responsibility`]: `UserManager` keeps the list, `AuthenticationManager` judges a snapshot of it.
//! - [`open_closed`]: `DiscountCalculator` takes the discount as a function; `DiscountTable` maps names to functions.
//! - [`liskov`]: foreclosure lives on `SecureLoan`, so only loans that support it can claim it.
//! - [`interface_segregation`]: notifications split off `LoanProcessor`, by extension or by composition.
//! - [`dependency_inversion`]: `UserService` borrows whichever `Database` it is given.
//!
//! Each module also has a `violation` submodule with the design before the fix.
//!
//! ### 2. The Engine ([`framework`])
//! - **Role**: The [`Showcase`](framework::Showcase) contract and the [`Console`](framework::Console) capability.
//! - **Testing**: [`framework::mock::Transcript`] records output and checks expectations.
//!
//! ### 3. The Orchestrator ([`lifecycle`])
//! - **Role**: [`SolidShowcase`](lifecycle::SolidShowcase) selects and runs scripts,
//!   [`ShowcaseConfig`](lifecycle::ShowcaseConfig) says which, [`setup_tracing`](lifecycle::setup_tracing) wires logging.
//!
//! ### 4. The Data ([`model`])
//! - [`User`](model::User) records and the [`Principle`](model::Principle) selector.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Every refactored showcase
//! cargo run
//!
//! # Liskov and Dependency Inversion, violations included, with logs
//! RUST_LOG=info cargo run -- lsp dip --violations
//!
//! # Same selection through the environment
//! SOLID_PRINCIPLES=lsp,dip SOLID_VIOLATIONS=1 cargo run
//!
//! # All options
//! cargo run -- --help
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod dependency_inversion;
pub mod framework;
pub mod interface_segregation;
pub mod lifecycle;
pub mod liskov;
pub mod model;
pub mod open_closed;
pub mod single_responsibility;
