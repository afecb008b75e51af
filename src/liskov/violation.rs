//! The design before the refactor: one interface, one variant that cannot keep it.
//!
//! `CreditCardLoan` claims `LoanPayment` but has no foreclosure, so its
//! `foreclose_loan` fails. Any `LoanClosureService` built on it breaks.

use super::LoanError;
use crate::framework::Console;
use tracing::warn;

pub trait LoanPayment {
    fn do_payment(&self, out: &dyn Console);
    fn foreclose_loan(&self, out: &dyn Console) -> Result<(), LoanError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct HomeLoan;

impl LoanPayment for HomeLoan {
    fn do_payment(&self, out: &dyn Console) {
        out.line("Making home loan payment");
    }

    fn foreclose_loan(&self, out: &dyn Console) -> Result<(), LoanError> {
        out.line("Foreclosing home loan payment");
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CreditCardLoan;

impl LoanPayment for CreditCardLoan {
    fn do_payment(&self, out: &dyn Console) {
        out.line("Making Credit card loan payment");
    }

    fn foreclose_loan(&self, _out: &dyn Console) -> Result<(), LoanError> {
        warn!(loan = "credit card loan", "foreclose_loan is not supported");
        Err(LoanError::NotImplemented {
            loan: "credit card loan",
            operation: "foreclose_loan",
        })
    }
}

pub struct LoanClosureService<'a> {
    loan: &'a dyn LoanPayment,
}

impl<'a> LoanClosureService<'a> {
    pub fn new(loan: &'a dyn LoanPayment) -> Self {
        Self { loan }
    }

    pub fn close_loan(&self, out: &dyn Console) -> Result<(), LoanError> {
        self.loan.foreclose_loan(out)
    }
}
