// ============================================================================
// Brazilian Tax Computations
// ICMS / IPI / PIS / COFINS over a monetary tax base
// ============================================================================

use super::context::PrecisionContext;
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Statutory default PIS rate (%): 1.65, the non-cumulative regime rate.
pub const DEFAULT_PIS_RATE: Decimal = Decimal::from_parts(165, 0, 0, false, 2);

/// Statutory default COFINS rate (%): 7.6, the non-cumulative regime rate.
pub const DEFAULT_COFINS_RATE: Decimal = Decimal::from_parts(76, 0, 0, false, 1);

/// One fiscal document's tax lines plus their total.
///
/// Each component is rounded to monetary precision independently; `total` is
/// the exact sum of the already-rounded components. Brazilian fiscal
/// documents round each tax line before totaling, so the total here can
/// differ from a globally-rounded sum by a cent — that difference is
/// intentional and must be preserved.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TaxBreakdown {
    pub icms: Decimal,
    pub ipi: Decimal,
    pub pis: Decimal,
    pub cofins: Decimal,
    pub total: Decimal,
}

impl PrecisionContext {
    /// ICMS over `base` at `rate` percent, rounded to monetary precision.
    pub fn calculate_icms(&self, base: Decimal, rate: Decimal) -> Decimal {
        self.round_money(self.percent_of(base, rate))
    }

    /// IPI over `base` at `rate` percent, rounded to monetary precision.
    pub fn calculate_ipi(&self, base: Decimal, rate: Decimal) -> Decimal {
        self.round_money(self.percent_of(base, rate))
    }

    /// PIS over `base`. `None` applies the statutory 1.65% default.
    pub fn calculate_pis(&self, base: Decimal, rate: Option<Decimal>) -> Decimal {
        self.round_money(self.percent_of(base, rate.unwrap_or(DEFAULT_PIS_RATE)))
    }

    /// COFINS over `base`. `None` applies the statutory 7.6% default.
    pub fn calculate_cofins(&self, base: Decimal, rate: Option<Decimal>) -> Decimal {
        self.round_money(self.percent_of(base, rate.unwrap_or(DEFAULT_COFINS_RATE)))
    }

    /// Compute all four tax lines over a common base.
    ///
    /// Each line is rounded independently, then the rounded lines are summed.
    /// `ipi_rate` defaults to zero; `pis_rate`/`cofins_rate` default to the
    /// statutory rates.
    pub fn calculate_total_taxes(
        &self,
        base: Decimal,
        icms_rate: Decimal,
        ipi_rate: Option<Decimal>,
        pis_rate: Option<Decimal>,
        cofins_rate: Option<Decimal>,
    ) -> TaxBreakdown {
        let icms = self.calculate_icms(base, icms_rate);
        let ipi = self.calculate_ipi(base, ipi_rate.unwrap_or(Decimal::ZERO));
        let pis = self.calculate_pis(base, pis_rate);
        let cofins = self.calculate_cofins(base, cofins_rate);

        TaxBreakdown {
            icms,
            ipi,
            pis,
            cofins,
            total: icms + ipi + pis + cofins,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn ctx() -> PrecisionContext {
        PrecisionContext::default()
    }

    #[test]
    fn test_default_rates() {
        assert_eq!(DEFAULT_PIS_RATE, dec!(1.65));
        assert_eq!(DEFAULT_COFINS_RATE, dec!(7.6));
    }

    #[test]
    fn test_icms() {
        let ctx = ctx();
        assert_eq!(ctx.calculate_icms(dec!(1000), dec!(18)), dec!(180));
        assert_eq!(ctx.calculate_icms(dec!(333.33), dec!(18)), dec!(60.00));
    }

    #[test]
    fn test_ipi() {
        let ctx = ctx();
        assert_eq!(ctx.calculate_ipi(dec!(1000), dec!(10)), dec!(100));
    }

    #[test]
    fn test_pis_and_cofins_defaults() {
        let ctx = ctx();
        assert_eq!(ctx.calculate_pis(dec!(1000), None), dec!(16.50));
        assert_eq!(ctx.calculate_cofins(dec!(1000), None), dec!(76.00));
        assert_eq!(ctx.calculate_pis(dec!(1000), Some(dec!(0.65))), dec!(6.50));
        assert_eq!(ctx.calculate_cofins(dec!(1000), Some(dec!(3))), dec!(30.00));
    }

    #[test]
    fn test_total_taxes_reference_case() {
        let ctx = ctx();
        let taxes = ctx.calculate_total_taxes(dec!(1000), dec!(18), Some(dec!(10)), None, None);
        assert_eq!(taxes.icms, dec!(180.00));
        assert_eq!(taxes.ipi, dec!(100.00));
        assert_eq!(taxes.pis, dec!(16.50));
        assert_eq!(taxes.cofins, dec!(76.00));
        assert_eq!(taxes.total, dec!(372.50));
    }

    #[test]
    fn test_total_is_sum_of_rounded_components() {
        let ctx = ctx();
        // A base chosen so each line carries a rounding adjustment; the total
        // must equal the sum of the rounded lines, not a globally-rounded sum.
        let taxes =
            ctx.calculate_total_taxes(dec!(123.456), dec!(17.5), Some(dec!(6.5)), None, None);
        assert_eq!(taxes.total, taxes.icms + taxes.ipi + taxes.pis + taxes.cofins);
    }

    #[test]
    fn test_ipi_defaults_to_zero() {
        let ctx = ctx();
        let taxes = ctx.calculate_total_taxes(dec!(500), dec!(12), None, None, None);
        assert_eq!(taxes.ipi, Decimal::ZERO);
        assert_eq!(taxes.total, taxes.icms + taxes.pis + taxes.cofins);
    }

    #[test]
    fn test_zero_base_yields_zero_lines() {
        let ctx = ctx();
        let taxes = ctx.calculate_total_taxes(Decimal::ZERO, dec!(18), None, None, None);
        assert_eq!(taxes.total, Decimal::ZERO);
    }
}
