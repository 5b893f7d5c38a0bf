// ============================================================================
// Fiscal Engine Library
// Exact-decimal fiscal arithmetic and NFe XML digital signatures
// ============================================================================

//! # Fiscal Engine
//!
//! The numeric and signature core of a Brazilian ERP's fiscal module.
//!
//! ## Features
//!
//! - **Exact decimal arithmetic** for money, quantities and percentages
//!   (`0.1 + 0.2 == 0.3`, unlike native floating point)
//! - **Brazilian tax computations** (ICMS/IPI/PIS/COFINS) with per-line
//!   rounding, matching fiscal-document totaling practice
//! - **Stock-debit validation** and markup/margin pricing formulas
//! - **Enveloped XML-DSig signatures** (RSA-SHA1) for NFe/CTe documents,
//!   plus structural validation of signed documents on intake
//!
//! Both halves are pure, synchronous and stateless: no I/O, no shared
//! mutable state, safe to call from any number of threads.
//!
//! ## Example
//!
//! ```rust
//! use fiscal_engine::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let ctx = PrecisionContext::default();
//!
//! // Line total: 3 units at R$ 19.99, exact
//! let total = ctx.multiply(ctx.to_decimal("19.99"), Decimal::from(3));
//! assert_eq!(ctx.to_money(total), 59.97);
//!
//! // Tax lines over the total, each independently rounded
//! let taxes = ctx.calculate_total_taxes(total, Decimal::from(18), None, None, None);
//! assert_eq!(taxes.total, taxes.icms + taxes.ipi + taxes.pis + taxes.cofins);
//!
//! // Stock guard before the inventory deduction
//! let debit = ctx.validate_stock(Decimal::from(10), Decimal::from(3), false);
//! assert!(debit.valid);
//! ```

pub mod precision;
pub mod xmldsig;

// Re-exports for convenience
pub mod prelude {
    pub use crate::precision::{
        DecimalInput, PrecisionContext, StockValidation, TaxBreakdown, DEFAULT_COFINS_RATE,
        DEFAULT_PIS_RATE,
    };
    pub use crate::xmldsig::{
        certificate_thumbprint, load_certificate, sign_xml, sign_xml_with, validate_signature,
        CertificateInfo, SignError, SignerConfig,
    };
}


#[cfg(test)]
mod property_tests {
    use super::prelude::*;
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    fn small_decimal() -> impl Strategy<Value = Decimal> {
        // Values within typical invoice magnitude, up to 4 fractional digits
        (-1_000_000_000i64..1_000_000_000i64).prop_map(|raw| Decimal::new(raw, 4))
    }

    proptest! {
        #[test]
        fn prop_round_is_idempotent(value in small_decimal(), dp in 0u32..6) {
            let ctx = PrecisionContext::default();
            let once = ctx.round(value, dp);
            prop_assert_eq!(ctx.round(once, dp), once);
        }

        #[test]
        fn prop_divide_by_zero_is_total(value in small_decimal()) {
            let ctx = PrecisionContext::default();
            prop_assert_eq!(ctx.divide(value, Decimal::ZERO), Decimal::ZERO);
        }

        #[test]
        fn prop_sum_matches_exact_addition(a in small_decimal(), b in small_decimal()) {
            let ctx = PrecisionContext::default();
            prop_assert_eq!(ctx.sum([a, b]), a + b);
        }

        #[test]
        fn prop_tax_total_is_sum_of_rounded_lines(
            base in 0i64..100_000_000,
            icms in 0i64..3000,
            ipi in 0i64..2000,
        ) {
            let ctx = PrecisionContext::default();
            let base = Decimal::new(base, 2);
            let taxes = ctx.calculate_total_taxes(
                base,
                Decimal::new(icms, 2),
                Some(Decimal::new(ipi, 2)),
                None,
                None,
            );
            prop_assert_eq!(taxes.total, taxes.icms + taxes.ipi + taxes.pis + taxes.cofins);
        }

        #[test]
        fn prop_stock_newstock_is_always_the_difference(
            current in small_decimal(),
            qty in small_decimal(),
            allow in any::<bool>(),
        ) {
            let ctx = PrecisionContext::default();
            let result = ctx.validate_stock(current, qty, allow);
            prop_assert_eq!(result.new_stock, current - qty);
            let expected_valid = allow || current - qty >= Decimal::ZERO;
            prop_assert_eq!(result.valid, expected_valid);
        }
    }
}
