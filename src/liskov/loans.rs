use crate::framework::Console;
use tracing::{debug, instrument};

/// Anything that can take a payment.
pub trait LoanPayment {
    fn do_payment(&self, out: &dyn Console);
}

/// A loan that can also be foreclosed.
///
/// Separate from [`LoanPayment`] so that loans without foreclosure never have
/// to pretend they support it.
pub trait SecureLoan: LoanPayment {
    fn foreclose_loan(&self, out: &dyn Console);
}

/// Secured loan: payable and foreclosable.
#[derive(Debug, Default, Clone, Copy)]
pub struct HomeLoan;

impl LoanPayment for HomeLoan {
    fn do_payment(&self, out: &dyn Console) {
        out.line("Making home loan payment");
    }
}

impl SecureLoan for HomeLoan {
    fn foreclose_loan(&self, out: &dyn Console) {
        out.line("Foreclosing home loan payment");
    }
}

/// Unsecured loan: payable only.
#[derive(Debug, Default, Clone, Copy)]
pub struct CreditCardLoan;

impl LoanPayment for CreditCardLoan {
    fn do_payment(&self, out: &dyn Console) {
        out.line("Making Credit card loan payment");
    }
}

/// Closes loans early. Accepts only loans that guarantee foreclosure.
///
/// A [`CreditCardLoan`] is rejected by the compiler, not at run time:
///
/// ```compile_fail
/// use solid_recipe::liskov::{CreditCardLoan, LoanClosureService};
///
/// let credit_card = CreditCardLoan;
/// let closure = LoanClosureService::new(&credit_card);
/// ```
pub struct LoanClosureService<'a> {
    loan: &'a dyn SecureLoan,
}

impl<'a> LoanClosureService<'a> {
    pub fn new(loan: &'a dyn SecureLoan) -> Self {
        Self { loan }
    }

    #[instrument(skip_all)]
    pub fn close_loan(&self, out: &dyn Console) {
        debug!("Foreclosing");
        self.loan.foreclose_loan(out);
    }
}

/// Takes payments on any loan. Both variants substitute here.
pub struct LoanPaymentService<'a> {
    loan: &'a dyn LoanPayment,
}

impl<'a> LoanPaymentService<'a> {
    pub fn new(loan: &'a dyn LoanPayment) -> Self {
        Self { loan }
    }

    #[instrument(skip_all)]
    pub fn pay(&self, out: &dyn Console) {
        debug!("Paying");
        self.loan.do_payment(out);
    }
}
