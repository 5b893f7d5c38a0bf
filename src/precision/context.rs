// ============================================================================
// Precision Context
// Rounding and precision configuration for fiscal arithmetic
// ============================================================================

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounding/precision configuration for all fiscal arithmetic.
///
/// The original application configured its decimal library once, globally, at
/// module load. Here the configuration is an explicit value threaded into
/// every call site: construct one context (usually `PrecisionContext::default()`)
/// and pass it around. The context is `Copy` and immutable after construction,
/// so it is safe to share across any number of concurrent callers.
///
/// # Defaults
/// - Money: 2 fractional digits
/// - Quantity (stock-keeping): 4 fractional digits
/// - Percentages: 2 fractional digits
/// - Rounding: half-up (`MidpointAwayFromZero`)
///
/// # Example
/// ```
/// use fiscal_engine::precision::PrecisionContext;
/// use rust_decimal::Decimal;
///
/// let ctx = PrecisionContext::default();
/// let total = ctx.multiply(Decimal::new(1999, 2), Decimal::from(3));
/// assert_eq!(ctx.to_money(total), 59.97);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PrecisionContext {
    /// Fractional digits for monetary values
    pub money_dp: u32,
    /// Fractional digits for stock-keeping quantities
    pub quantity_dp: u32,
    /// Fractional digits for percentages
    pub percent_dp: u32,
    rounding: RoundingStrategy,
}

impl PrecisionContext {
    /// Brazilian fiscal defaults: money 2dp, quantity 4dp, percent 2dp, half-up.
    pub const fn new() -> Self {
        Self {
            money_dp: 2,
            quantity_dp: 4,
            percent_dp: 2,
            rounding: RoundingStrategy::MidpointAwayFromZero,
        }
    }

    /// Override the monetary precision.
    pub const fn with_money_dp(mut self, dp: u32) -> Self {
        self.money_dp = dp;
        self
    }

    /// Override the quantity precision.
    pub const fn with_quantity_dp(mut self, dp: u32) -> Self {
        self.quantity_dp = dp;
        self
    }

    /// Round half-up to `dp` fractional digits, returning a `Decimal`.
    ///
    /// Idempotent: `round(round(x, n), n) == round(x, n)`.
    #[inline]
    pub fn round(&self, value: Decimal, dp: u32) -> Decimal {
        value.round_dp_with_strategy(dp, self.rounding)
    }

    /// Round to monetary precision, still as an exact `Decimal`.
    #[inline]
    pub fn round_money(&self, value: Decimal) -> Decimal {
        self.round(value, self.money_dp)
    }

    /// Round to stock-keeping precision, still as an exact `Decimal`.
    #[inline]
    pub fn round_quantity(&self, value: Decimal) -> Decimal {
        self.round(value, self.quantity_dp)
    }
}

impl Default for PrecisionContext {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        let ctx = PrecisionContext::default();
        assert_eq!(ctx.money_dp, 2);
        assert_eq!(ctx.quantity_dp, 4);
        assert_eq!(ctx.percent_dp, 2);
    }

    #[test]
    fn test_round_half_up() {
        let ctx = PrecisionContext::default();
        assert_eq!(ctx.round(dec!(2.675), 2), dec!(2.68));
        assert_eq!(ctx.round(dec!(2.674), 2), dec!(2.67));
        assert_eq!(ctx.round(dec!(-2.675), 2), dec!(-2.68));
    }

    #[test]
    fn test_round_idempotent() {
        let ctx = PrecisionContext::default();
        let once = ctx.round(dec!(1.23456789), 4);
        assert_eq!(ctx.round(once, 4), once);
    }

    #[test]
    fn test_builder_overrides() {
        let ctx = PrecisionContext::new().with_money_dp(3).with_quantity_dp(6);
        assert_eq!(ctx.money_dp, 3);
        assert_eq!(ctx.quantity_dp, 6);
    }
}
