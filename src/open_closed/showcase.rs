//! Showcase scripts for the Open/Closed principle.

use super::{
    diamond_discount, gold_discount, premium_discount, regular_discount, violation,
    DiscountCalculator,
};
use crate::framework::{Console, Showcase, ShowcaseError, ShowcaseKind};
use crate::model::Principle;

const AMOUNT: f64 = 1000.0;

/// Discount tiers selected by a string tag inside the calculator.
pub struct TaggedDiscountShowcase;

impl Showcase for TaggedDiscountShowcase {
    fn principle(&self) -> Principle {
        Principle::OpenClosed
    }

    fn kind(&self) -> ShowcaseKind {
        ShowcaseKind::Violation
    }

    fn title(&self) -> &'static str {
        "Open/Closed (violation)"
    }

    fn run(&self, out: &dyn Console) -> Result<(), ShowcaseError> {
        let calculator = violation::DiscountCalculator::new();
        for (label, kind) in [
            ("Regular", "regular"),
            ("Premium", "premium"),
            ("Gold", "gold"),
            ("No", "none"),
        ] {
            let discount = calculator.calculate_discount(kind, AMOUNT);
            out.line(&format!("{label} Discount: {discount}"));
        }
        Ok(())
    }
}

/// Discount tiers supplied as functions from outside the calculator.
pub struct InjectedDiscountShowcase;

impl Showcase for InjectedDiscountShowcase {
    fn principle(&self) -> Principle {
        Principle::OpenClosed
    }

    fn kind(&self) -> ShowcaseKind {
        ShowcaseKind::Refactored
    }

    fn title(&self) -> &'static str {
        "Open/Closed (refactored)"
    }

    fn run(&self, out: &dyn Console) -> Result<(), ShowcaseError> {
        let calculator = DiscountCalculator::new();

        let regular = calculator.calculate_discount(AMOUNT, Some(&regular_discount));
        out.line(&format!("Regular Discount: {regular}"));
        let premium = calculator.calculate_discount(AMOUNT, Some(&premium_discount));
        out.line(&format!("Premium Discount: {premium}"));
        let gold = calculator.calculate_discount(AMOUNT, Some(&gold_discount));
        out.line(&format!("Gold Discount: {gold}"));
        let none = calculator.calculate_discount(AMOUNT, None);
        out.line(&format!("No Discount: {none}"));

        // The new tier is only a new function.
        let diamond = calculator.calculate_discount(AMOUNT, Some(&diamond_discount));
        out.line(&format!("Diamond Discount: {diamond}"));
        Ok(())
    }
}
