use tracing::debug;

/// A discount computation: takes the purchase amount, returns the discount.
///
/// Must be free of side effects. New tiers are new functions, never new
/// branches in [`DiscountCalculator`].
pub type DiscountFn = dyn Fn(f64) -> f64 + Send + Sync;

/// Generic discount calculator, closed for modification.
///
/// # Example
/// ```
/// use solid_recipe::open_closed::{premium_discount, DiscountCalculator};
///
/// let calculator = DiscountCalculator::new();
/// assert_eq!(calculator.calculate_discount(1000.0, Some(&premium_discount)), 100.0);
/// assert_eq!(calculator.calculate_discount(1000.0, None), 0.0);
///
/// // A brand new tier, no change to the calculator.
/// let platinum = |amount: f64| amount * 0.25;
/// assert_eq!(calculator.calculate_discount(1000.0, Some(&platinum)), 250.0);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscountCalculator;

impl DiscountCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Applies `discount` to `amount`. No function means no discount.
    pub fn calculate_discount(&self, amount: f64, discount: Option<&DiscountFn>) -> f64 {
        match discount {
            Some(discount) => {
                let value = discount(amount);
                debug!(amount, discount = value, "Discount applied");
                value
            }
            None => {
                debug!(amount, "No discount function supplied");
                0.0
            }
        }
    }
}

/// 5% discount for regular customers.
pub fn regular_discount(amount: f64) -> f64 {
    amount * 0.05
}

/// 10% discount for premium customers.
pub fn premium_discount(amount: f64) -> f64 {
    amount * 0.1
}

/// 15% discount for gold customers.
pub fn gold_discount(amount: f64) -> f64 {
    amount * 0.15
}

/// 20% discount for diamond customers.
pub fn diamond_discount(amount: f64) -> f64 {
    amount * 0.2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_tiers_on_a_thousand() {
        let calculator = DiscountCalculator::new();
        assert_eq!(calculator.calculate_discount(1000.0, Some(&regular_discount)), 50.0);
        assert_eq!(calculator.calculate_discount(1000.0, Some(&premium_discount)), 100.0);
        assert_eq!(calculator.calculate_discount(1000.0, Some(&gold_discount)), 150.0);
        assert_eq!(calculator.calculate_discount(1000.0, Some(&diamond_discount)), 200.0);
    }

    #[test]
    fn missing_function_means_no_discount() {
        assert_eq!(DiscountCalculator.calculate_discount(1000.0, None), 0.0);
    }

    #[test]
    fn closures_are_discounts_too() {
        let flat = |_amount: f64| 30.0;
        assert_eq!(DiscountCalculator.calculate_discount(1000.0, Some(&flat)), 30.0);
    }
}
