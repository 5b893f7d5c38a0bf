// ============================================================================
// Precision Operations
// Conversions, arithmetic, comparisons and the stock-debit guard
// ============================================================================

use super::context::PrecisionContext;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Input Conversion
// ============================================================================

/// Permissive input for decimal conversion.
///
/// Values reaching the precision engine come from form fields, decimal-typed
/// database columns marshalled as strings, or prior calculation results. The
/// conversion is total: absent values (`None`) and unparseable text normalize
/// to zero instead of failing, matching the engine's "never throws for
/// numeric inputs" contract. Strict validation belongs to callers.
#[derive(Debug, Clone, PartialEq)]
pub enum DecimalInput {
    /// A native float (display-boundary values flowing back in)
    Number(f64),
    /// A raw numeric string, e.g. a form field or DB column
    Text(String),
    /// An already-exact decimal
    Value(Decimal),
    /// Absent value, normalizes to zero
    Missing,
}

impl From<f64> for DecimalInput {
    fn from(value: f64) -> Self {
        DecimalInput::Number(value)
    }
}

impl From<i64> for DecimalInput {
    fn from(value: i64) -> Self {
        DecimalInput::Value(Decimal::from(value))
    }
}

impl From<i32> for DecimalInput {
    fn from(value: i32) -> Self {
        DecimalInput::Value(Decimal::from(value))
    }
}

impl From<u32> for DecimalInput {
    fn from(value: u32) -> Self {
        DecimalInput::Value(Decimal::from(value))
    }
}

impl From<&str> for DecimalInput {
    fn from(value: &str) -> Self {
        DecimalInput::Text(value.to_string())
    }
}

impl From<String> for DecimalInput {
    fn from(value: String) -> Self {
        DecimalInput::Text(value)
    }
}

impl From<Decimal> for DecimalInput {
    fn from(value: Decimal) -> Self {
        DecimalInput::Value(value)
    }
}

impl<T: Into<DecimalInput>> From<Option<T>> for DecimalInput {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => DecimalInput::Missing,
        }
    }
}

// ============================================================================
// Stock Validation
// ============================================================================

/// Result of the stock-debit guard.
///
/// `new_stock` always equals `current - quantity`, whether or not the debit
/// is allowed; `error` carries an operator-facing message only when invalid.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StockValidation {
    pub valid: bool,
    pub new_stock: Decimal,
    pub error: Option<String>,
}

// ============================================================================
// Engine Operations
// ============================================================================

impl PrecisionContext {
    /// Convert any supported input to an exact `Decimal`.
    ///
    /// `None` and unparseable strings normalize to zero; floats outside the
    /// representable range normalize to zero. This conversion never fails.
    pub fn to_decimal(&self, value: impl Into<DecimalInput>) -> Decimal {
        match value.into() {
            DecimalInput::Number(n) => Decimal::from_f64(n).unwrap_or(Decimal::ZERO),
            DecimalInput::Text(s) => s.trim().parse::<Decimal>().unwrap_or(Decimal::ZERO),
            DecimalInput::Value(d) => d,
            DecimalInput::Missing => Decimal::ZERO,
        }
    }

    /// Lenient conversion to `f64` for rendering. Tolerates any input,
    /// falling back to 0.0 when the value cannot be represented.
    pub fn to_number(&self, value: impl Into<DecimalInput>) -> f64 {
        self.to_decimal(value).to_f64().unwrap_or(0.0)
    }

    /// Finalize a value for monetary display/storage (2 fractional digits).
    ///
    /// This is one of the only points where precision loss to a native float
    /// is acceptable: the value is already rounded before conversion.
    pub fn to_money(&self, value: impl Into<DecimalInput>) -> f64 {
        let rounded = self.round_money(self.to_decimal(value));
        rounded.to_f64().unwrap_or(0.0)
    }

    /// Finalize a value for stock-keeping display/storage (4 fractional digits).
    pub fn to_quantity(&self, value: impl Into<DecimalInput>) -> f64 {
        let rounded = self.round_quantity(self.to_decimal(value));
        rounded.to_f64().unwrap_or(0.0)
    }

    /// Finalize a percentage for display/storage (2 fractional digits).
    pub fn to_percent(&self, value: impl Into<DecimalInput>) -> f64 {
        let rounded = self.round(self.to_decimal(value), self.percent_dp);
        rounded.to_f64().unwrap_or(0.0)
    }

    /// Exact left-fold addition. Absent entries count as zero; an empty
    /// iterator sums to zero.
    pub fn sum<I, T>(&self, values: I) -> Decimal
    where
        I: IntoIterator<Item = T>,
        T: Into<DecimalInput>,
    {
        values
            .into_iter()
            .fold(Decimal::ZERO, |acc, v| acc + self.to_decimal(v))
    }

    /// Exact subtraction.
    #[inline]
    pub fn subtract(&self, minuend: Decimal, subtrahend: Decimal) -> Decimal {
        minuend - subtrahend
    }

    /// Exact multiplication.
    #[inline]
    pub fn multiply(&self, lhs: Decimal, rhs: Decimal) -> Decimal {
        lhs * rhs
    }

    /// Division with a zero-divisor clamp.
    ///
    /// A zero divisor yields `Decimal::ZERO` rather than an error. This is a
    /// deliberate policy favoring UI stability over exception propagation;
    /// callers must not rely on division by zero signaling failure.
    pub fn divide(&self, dividend: Decimal, divisor: Decimal) -> Decimal {
        match dividend.checked_div(divisor) {
            Some(quotient) => quotient,
            None => {
                tracing::debug!(%dividend, "division by zero clamped to zero");
                Decimal::ZERO
            }
        }
    }

    /// `value * (percent / 100)`, exact.
    pub fn percent_of(&self, value: Decimal, percent: Decimal) -> Decimal {
        value * percent / Decimal::ONE_HUNDRED
    }

    /// Strictly greater than zero. Zero itself is NOT positive.
    #[inline]
    pub fn is_positive(&self, value: Decimal) -> bool {
        value > Decimal::ZERO
    }

    /// Strictly less than zero.
    #[inline]
    pub fn is_negative(&self, value: Decimal) -> bool {
        value < Decimal::ZERO
    }

    /// Equal to zero.
    #[inline]
    pub fn is_zero(&self, value: Decimal) -> bool {
        value.is_zero()
    }

    /// Three-way comparison (total order).
    #[inline]
    pub fn compare(&self, a: Decimal, b: Decimal) -> Ordering {
        a.cmp(&b)
    }

    /// Maximum over a non-empty slice. `None` only for an empty slice.
    pub fn max(&self, values: &[Decimal]) -> Option<Decimal> {
        values.iter().copied().max()
    }

    /// Minimum over a non-empty slice. `None` only for an empty slice.
    pub fn min(&self, values: &[Decimal]) -> Option<Decimal> {
        values.iter().copied().min()
    }

    /// Absolute value.
    #[inline]
    pub fn abs(&self, value: Decimal) -> Decimal {
        value.abs()
    }

    /// Stock-debit guard: computes `new_stock = current - quantity` and flags
    /// the debit invalid when the result would go negative and negative stock
    /// is not allowed.
    ///
    /// This is the canonical check before any inventory deduction. The error
    /// message quotes both quantities at stock-keeping precision.
    pub fn validate_stock(
        &self,
        current_stock: Decimal,
        quantity: Decimal,
        allow_negative: bool,
    ) -> StockValidation {
        let new_stock = current_stock - quantity;

        if new_stock < Decimal::ZERO && !allow_negative {
            return StockValidation {
                valid: false,
                new_stock,
                error: Some(format!(
                    "Estoque insuficiente. Disponível: {}, Solicitado: {}",
                    self.fixed_quantity(current_stock),
                    self.fixed_quantity(quantity),
                )),
            };
        }

        StockValidation {
            valid: true,
            new_stock,
            error: None,
        }
    }

    /// Selling price from cost under markup-on-cost: `cost * (1 + pct/100)`.
    pub fn calculate_markup(&self, cost: Decimal, markup_percent: Decimal) -> Decimal {
        cost * (Decimal::ONE + markup_percent / Decimal::ONE_HUNDRED)
    }

    /// Selling price from cost under margin-on-price: `cost / (1 - pct/100)`.
    ///
    /// A margin of 100% or more makes the divisor non-positive, where the
    /// formula is undefined; the cost is returned unchanged in that case.
    /// Callers should treat a result equal to the cost at pct >= 100 as the
    /// clamp, not as a priced margin.
    pub fn calculate_margin(&self, cost: Decimal, margin_percent: Decimal) -> Decimal {
        let divisor = Decimal::ONE - margin_percent / Decimal::ONE_HUNDRED;
        if divisor <= Decimal::ZERO {
            tracing::debug!(%margin_percent, "margin at or above 100% clamped to cost");
            return cost;
        }
        cost / divisor
    }

    /// `value - percent_of(value, pct)`, exact. Used for line discounts.
    pub fn calculate_discount(&self, value: Decimal, discount_percent: Decimal) -> Decimal {
        value - self.percent_of(value, discount_percent)
    }

    /// Render a quantity padded to stock-keeping precision (e.g. "3.0000").
    fn fixed_quantity(&self, value: Decimal) -> Decimal {
        let mut padded = self.round_quantity(value);
        padded.rescale(self.quantity_dp);
        padded
    }
}

// ============================================================================
// Tests
// ============================================================================
