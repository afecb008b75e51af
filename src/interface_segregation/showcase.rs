//! Showcase scripts for the Interface Segregation principle.

use super::{violation, BusinessLoan, CarLoan, LoanProcessor, LoanProcessorWithNotification, PersonalLoan};
use crate::framework::{Console, Showcase, ShowcaseError, ShowcaseKind};
use crate::model::Principle;

/// Every loan forced through one broad interface.
pub struct BroadInterfaceShowcase;

impl Showcase for BroadInterfaceShowcase {
    fn principle(&self) -> Principle {
        Principle::InterfaceSegregation
    }

    fn kind(&self) -> ShowcaseKind {
        ShowcaseKind::Violation
    }

    fn title(&self) -> &'static str {
        "Interface Segregation (violation)"
    }

    fn run(&self, out: &dyn Console) -> Result<(), ShowcaseError> {
        let loans: [&dyn violation::LoanProcessor; 3] = [
            &violation::PersonalLoan,
            &violation::BusinessLoan,
            &violation::CarLoan,
        ];
        for loan in loans {
            loan.send_notification(out);
        }
        Ok(())
    }
}

/// Notifications moved to an extension trait that only some loans implement.
pub struct SegregatedInterfaceShowcase;

impl Showcase for SegregatedInterfaceShowcase {
    fn principle(&self) -> Principle {
        Principle::InterfaceSegregation
    }

    fn kind(&self) -> ShowcaseKind {
        ShowcaseKind::Refactored
    }

    fn title(&self) -> &'static str {
        "Interface Segregation (refactored)"
    }

    fn run(&self, out: &dyn Console) -> Result<(), ShowcaseError> {
        let personal_loan: &dyn LoanProcessorWithNotification = &PersonalLoan;
        personal_loan.send_notification(out);

        let business_loan: &dyn LoanProcessorWithNotification = &BusinessLoan;
        business_loan.send_notification(out);

        // Base interface only: there is no send_notification to call.
        let _car_loan: &dyn LoanProcessor = &CarLoan;
        Ok(())
    }
}
