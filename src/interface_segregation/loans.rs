use crate::framework::Console;
use tracing::{debug, instrument};

/// Core operations every loan type supports.
pub trait LoanProcessor {
    fn apply_loan(&self, out: &dyn Console);
    fn approve_loan(&self, out: &dyn Console);
    fn process_payment(&self, out: &dyn Console);
}

/// Extends [`LoanProcessor`] for loans that notify their borrowers.
///
/// A value typed as the base trait has no `send_notification` at all:
///
/// ```compile_fail
/// use solid_recipe::framework::StdoutConsole;
/// use solid_recipe::interface_segregation::{CarLoan, LoanProcessor};
///
/// let car_loan: &dyn LoanProcessor = &CarLoan;
/// car_loan.send_notification(&StdoutConsole);
/// ```
pub trait LoanProcessorWithNotification: LoanProcessor {
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
}

impl LoanProcessorWithNotification for PersonalLoan {
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
}

impl LoanProcessorWithNotification for BusinessLoan {
    fn send_notification(&self, out: &dyn Console) {
        out.line("Sending notification for business loan.");
    }
}

/// Needs no notifications, so it implements the base trait only.
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
}

/// Runs the base lifecycle (apply, approve, pay) for any loan.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoanDesk;

impl LoanDesk {
    pub fn new() -> Self {
        Self
    }

    #[instrument(skip_all)]
    pub fn process<L: LoanProcessor + ?Sized>(&self, loan: &L, out: &dyn Console) {
        debug!("Processing loan");
        loan.apply_loan(out);
        loan.approve_loan(out);
        loan.process_payment(out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::Transcript;

    #[test]
    fn desk_runs_the_base_lifecycle_for_every_variant() {
        let out = Transcript::new();
        let loans: [&dyn LoanProcessor; 3] = [&PersonalLoan, &BusinessLoan, &CarLoan];
        for loan in loans {
            LoanDesk::new().process(loan, &out);
        }
        assert_eq!(out.lines().len(), 9);
        assert_eq!(out.lines()[6], "Applying for a car loan.");
    }

    #[test]
    fn notifying_loans_notify() {
        let out = Transcript::new();
        let loans: [&dyn LoanProcessorWithNotification; 2] = [&PersonalLoan, &BusinessLoan];
        for loan in loans {
            loan.send_notification(&out);
        }
        assert_eq!(
            out.lines(),
            vec![
                "Sending notification for personal loan.",
                "Sending notification for business loan.",
            ]
        );
    }

    #[test]
    fn extension_values_are_usable_as_base() {
        let out = Transcript::new();
        let personal: &dyn LoanProcessorWithNotification = &PersonalLoan;
        LoanDesk.process(personal, &out);
        assert_eq!(out.lines()[0], "Applying for a personal loan.");
    }
}
