//! The design before the refactor: tiers hardcoded as string branches.
//!
//! Adding a tier (say "diamond") means editing `calculate_discount` itself.

use tracing::debug;

#[derive(Debug, Default, Clone, Copy)]
pub struct DiscountCalculator;

impl DiscountCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate_discount(&self, kind: &str, amount: f64) -> f64 {
        debug!(kind, amount, "Branching on customer type");
        match kind {
            "regular" => amount * 0.05,
            "premium" => amount * 0.1,
            "gold" => amount * 0.15,
            _ => 0.0,
        }
    }
}
