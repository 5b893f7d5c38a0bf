// ============================================================================
// Precision Module
// Exact-decimal arithmetic for monetary, quantity and tax calculations
// ============================================================================
//
// This module provides:
// - PrecisionContext: rounding/precision configuration threaded explicitly
// - DecimalInput: permissive conversion for UI-bound values
// - StockValidation: value-level stock-debit guard
// - TaxBreakdown: ICMS/IPI/PIS/COFINS computation results
//
// Design principles:
// - No floating-point arithmetic; every figure is a base-10 Decimal
// - No panics: degenerate inputs resolve to documented value-level policies
// - No global state; configuration is an explicit Copy struct
// - Precision loss to f64 happens only at the display/storage boundary

mod context;
mod ops;
mod taxes;

pub use context::PrecisionContext;
pub use ops::{DecimalInput, StockValidation};
pub use taxes::{TaxBreakdown, DEFAULT_COFINS_RATE, DEFAULT_PIS_RATE};
