//! The second decomposition: notification as an independent capability.
//!
//! Instead of extending [`LoanProcessor`], a loan implements [`LoanNotifier`]
//! next to it, and a consumer that needs both says so in its bounds.

use super::LoanProcessor;
use crate::framework::Console;
use tracing::{debug, instrument};

/// Notifies a borrower. Unrelated to processing.
pub trait LoanNotifier {
    fn notify_borrower(&self, out: &dyn Console);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct EducationLoan;

impl LoanProcessor for EducationLoan {
    fn apply_loan(&self, out: &dyn Console) {
        out.line("Applying for an education loan.");
    }

    fn approve_loan(&self, out: &dyn Console) {
        out.line("Approving education loan.");
    }

    fn process_payment(&self, out: &dyn Console) {
        out.line("Processing education loan payment.");
    }
}

impl LoanNotifier for EducationLoan {
    fn notify_borrower(&self, out: &dyn Console) {
        out.line("Sending notification for education loan.");
    }
}

/// Processes a loan and then notifies its borrower.
#[instrument(skip_all)]
pub fn process_and_notify<L>(loan: &L, out: &dyn Console)
where
    L: LoanProcessor + LoanNotifier + ?Sized,
{
    debug!("Processing loan with notification");
    loan.apply_loan(out);
    loan.approve_loan(out);
    loan.process_payment(out);
    loan.notify_borrower(out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::Transcript;

    #[test]
    fn composed_capabilities() {
        let out = Transcript::new();
        out.expect_lines([
            "Applying for an education loan.",
            "Approving education loan.",
            "Processing education loan payment.",
            "Sending notification for education loan.",
        ]);

        process_and_notify(&EducationLoan, &out);

        out.verify();
    }
}
