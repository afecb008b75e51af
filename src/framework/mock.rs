//! # Mock Framework
//!
//! Utilities for testing showcases in isolation.
//!
//! Use [`Transcript`] as the injected [`Console`] and either inspect
//! [`Transcript::lines`] directly or queue the expected output with
//! [`Transcript::expect_line`] and call [`Transcript::verify`] at the end.

use crate::framework::Console;
use std::cell::RefCell;
use std::collections::VecDeque;

/// A recording console with expectation tracking for fluent testing.
///
/// # Example
/// ```
/// use solid_recipe::framework::{mock::Transcript, Console};
///
/// let transcript = Transcript::new();
/// transcript
///     .expect_line("Connecting SQL database.")
///     .expect_line("Saving user data : [Kanishk] to DB : [SQL]");
///
/// transcript.line("Connecting SQL database.");
/// transcript.line("Saving user data : [Kanishk] to DB : [SQL]");
///
/// transcript.verify(); // Ensures all expectations were met, in order
/// ```
#[derive(Debug, Default)]
pub struct Transcript {
    recorded: RefCell<Vec<String>>,
    expectations: RefCell<VecDeque<String>>,
}

impl Transcript {
    /// Creates an empty transcript with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every line written so far.
    pub fn lines(&self) -> Vec<String> {
        self.recorded.borrow().clone()
    }

    /// Expects the next unmatched line to equal `text`.
    pub fn expect_line(&self, text: impl Into<String>) -> &Self {
        self.expectations.borrow_mut().push_back(text.into());
        self
    }

    /// Expects several lines, in order.
    pub fn expect_lines<I, S>(&self, lines: I) -> &Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expectations
            .borrow_mut()
            .extend(lines.into_iter().map(Into::into));
        self
    }

    /// Verifies that the recorded output is exactly the expected output.
    ///
    /// # Panics
    /// Panics with both listings when they differ.
    pub fn verify(&self) {
        let expected: Vec<String> = self.expectations.borrow().iter().cloned().collect();
        let recorded = self.recorded.borrow();
        if *recorded != expected {
            panic!(
                "Transcript mismatch.\n  expected: {:#?}\n  recorded: {:#?}",
                expected, *recorded
            );
        }
    }
}

impl Console for Transcript {
    fn line(&self, text: &str) {
        self.recorded.borrow_mut().push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_lines_in_order() {
        let transcript = Transcript::new();
        transcript.line("first");
        transcript.line("second");
        assert_eq!(transcript.lines(), vec!["first", "second"]);
    }

    #[test]
    fn test_transcript_with_expectations() {
        let transcript = Transcript::new();
        transcript.expect_lines(["a", "b"]).expect_line("c");

        transcript.line("a");
        transcript.line("b");
        transcript.line("c");

        transcript.verify();
    }

    #[test]
    #[should_panic(expected = "Transcript mismatch")]
    fn test_verify_panics_on_missing_line() {
        let transcript = Transcript::new();
        transcript.expect_line("never written");
        transcript.verify();
    }

    #[test]
    #[should_panic(expected = "Transcript mismatch")]
    fn test_verify_panics_on_unexpected_line() {
        let transcript = Transcript::new();
        transcript.line("surprise");
        transcript.verify();
    }
}
