//! Showcase scripts for the Liskov Substitution principle.

use super::{violation, HomeLoan, LoanClosureService};
use crate::framework::{Console, Showcase, ShowcaseError, ShowcaseKind};
use crate::model::Principle;

/// Closure service fed a loan that cannot be foreclosed. Fails on purpose.
pub struct UnsupportedForeclosureShowcase;

impl Showcase for UnsupportedForeclosureShowcase {
    fn principle(&self) -> Principle {
        Principle::LiskovSubstitution
    }

    fn kind(&self) -> ShowcaseKind {
        ShowcaseKind::Violation
    }

    fn title(&self) -> &'static str {
        "Liskov Substitution (violation)"
    }

    fn run(&self, out: &dyn Console) -> Result<(), ShowcaseError> {
        let home_loan = violation::HomeLoan;
        let credit_card_loan = violation::CreditCardLoan;

        let home_loan_closure = violation::LoanClosureService::new(&home_loan);
        let credit_loan_closure = violation::LoanClosureService::new(&credit_card_loan);

        home_loan_closure.close_loan(out).map_err(ShowcaseError::domain)?;
        credit_loan_closure.close_loan(out).map_err(ShowcaseError::domain)?;
        Ok(())
    }
}

/// Foreclosure moved to its own trait; only secured loans claim it.
pub struct SecureLoanShowcase;

impl Showcase for SecureLoanShowcase {
    fn principle(&self) -> Principle {
        Principle::LiskovSubstitution
    }

    fn kind(&self) -> ShowcaseKind {
        ShowcaseKind::Refactored
    }

    fn title(&self) -> &'static str {
        "Liskov Substitution (refactored)"
    }

    fn run(&self, out: &dyn Console) -> Result<(), ShowcaseError> {
        let home_loan = HomeLoan;
        let home_loan_closure = LoanClosureService::new(&home_loan);
        home_loan_closure.close_loan(out);

        // A CreditCardLoan is not a SecureLoan, so it cannot reach LoanClosureService.
        Ok(())
    }
}
