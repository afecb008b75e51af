//! The design before the split: one broad interface for every loan.
//!
//! `CarLoan` never needs notifications but must implement `send_notification`
//! anyway, because it is bundled into `LoanProcessor`.

use crate::framework::Console;

pub trait LoanProcessor {
    fn apply_loan(&self, out: &dyn Console);
    fn approve_loan(&self, out: &dyn Console);
    fn process_payment(&self, out: &dyn Console);
    fn send_notification(&self, out: &dyn Console);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PersonalLoan;

impl LoanProcessor for PersonalLoan {
    fn apply_loan(&self, out: &dyn Console) {
        out.line("Applying for a personal loan.");
    }

    fn approve_loan(&self, out: &dyn Console) {
        out.line("Approving personal loan.");
    }

    fn process_payment(&self, out: &dyn Console) {
        out.line("Processing personal loan payment.");
    }

    fn send_notification(&self, out: &dyn Console) {
        out.line("Sending notification for personal loan.");
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BusinessLoan;

impl LoanProcessor for BusinessLoan {
    fn apply_loan(&self, out: &dyn Console) {
        out.line("Applying for a business loan.");
    }

    fn approve_loan(&self, out: &dyn Console) {
        out.line("Approving business loan.");
    }

    fn process_payment(&self, out: &dyn Console) {
        out.line("Processing business loan payment.");
    }

    fn send_notification(&self, out: &dyn Console) {
        out.line("Sending notification for business loan.");
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CarLoan;

impl LoanProcessor for CarLoan {
    fn apply_loan(&self, out: &dyn Console) {
        out.line("Applying for a car loan.");
    }

    fn approve_loan(&self, out: &dyn Console) {
        out.line("Approving car loan.");
    }

    fn process_payment(&self, out: &dyn Console) {
        out.line("Processing car loan payment.");
    }

    // Forced on CarLoan by the broad interface.
    fn send_notification(&self, out: &dyn Console) {
        out.line("Sending notification for car loan.");
    }
}
