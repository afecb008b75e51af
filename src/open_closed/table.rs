use super::{gold_discount, premium_discount, regular_discount, DiscountCalculator, DiscountFn};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Registry of named discount functions.
///
/// Replaces the `match` on a customer-type string: the caller chooses the
/// key, the table hands back a function, and [`DiscountCalculator`] never
/// learns what tiers exist. Unknown keys fall back to no discount.
#[derive(Default)]
pub struct DiscountTable {
    discounts: BTreeMap<String, Box<DiscountFn>>,
}

impl DiscountTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table preloaded with the regular, premium and gold tiers.
    pub fn with_standard_tiers() -> Self {
        let mut table = Self::new();
        table
            .register("regular", regular_discount)
            .register("premium", premium_discount)
            .register("gold", gold_discount);
        table
    }

    /// Registers (or replaces) a tier.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        discount: impl Fn(f64) -> f64 + Send + Sync + 'static,
    ) -> &mut Self {
        let name = name.into();
        info!(tier = %name, "Registered discount tier");
        self.discounts.insert(name, Box::new(discount));
        self
    }

    /// Looks up a tier's function.
    pub fn get(&self, name: &str) -> Option<&DiscountFn> {
        self.discounts.get(name).map(|discount| discount.as_ref())
    }

    /// Registered tier names, sorted.
    pub fn tiers(&self) -> impl Iterator<Item = &str> {
        self.discounts.keys().map(String::as_str)
    }

    /// Computes the discount for `tier` through `calculator`.
    pub fn calculate(&self, calculator: &DiscountCalculator, tier: &str, amount: f64) -> f64 {
        let discount = self.get(tier);
        debug!(tier, found = discount.is_some(), "Tier lookup");
        calculator.calculate_discount(amount, discount)
    }
}

impl std::fmt::Debug for DiscountTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscountTable")
            .field("tiers", &self.discounts.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_tiers() {
        let table = DiscountTable::with_standard_tiers();
        let calculator = DiscountCalculator::new();

        assert_eq!(table.calculate(&calculator, "regular", 1000.0), 50.0);
        assert_eq!(table.calculate(&calculator, "premium", 1000.0), 100.0);
        assert_eq!(table.calculate(&calculator, "gold", 1000.0), 150.0);
        assert_eq!(table.tiers().collect::<Vec<_>>(), vec!["gold", "premium", "regular"]);
    }

    #[test]
    fn unknown_tier_has_no_discount() {
        let table = DiscountTable::with_standard_tiers();
        assert_eq!(table.calculate(&DiscountCalculator, "none", 1000.0), 0.0);
    }

    #[test]
    fn new_tier_needs_only_registration() {
        let mut table = DiscountTable::with_standard_tiers();
        table.register("diamond", |amount| amount * 0.2);
        assert_eq!(table.calculate(&DiscountCalculator, "diamond", 1000.0), 200.0);
    }
}
