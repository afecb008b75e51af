//! Error types for the loan hierarchies.

use thiserror::Error;

/// Errors that can occur during loan operations.
///
/// Only the violation hierarchy can produce these. The refactored traits
/// have no fallible operations at all.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LoanError {
    /// A variant claimed an interface it cannot honour.
    #[error("Method not implemented: {operation} ({loan})")]
    NotImplemented {
        loan: &'static str,
        operation: &'static str,
    },
}
