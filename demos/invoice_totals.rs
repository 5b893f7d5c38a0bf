// ============================================================================
// Invoice Totals Example
// ============================================================================

use fiscal_engine::prelude::*;
use rust_decimal::Decimal;

fn main() {
    println!("=== Invoice Totals Example ===\n");

    let ctx = PrecisionContext::default();

    // Three line items straight from form input
    let lines = [("19.99", 3i64), ("149.90", 1), ("2.55", 12)];

    let mut line_totals = Vec::new();
    for (unit_price, quantity) in lines {
        let total = ctx.multiply(ctx.to_decimal(unit_price), Decimal::from(quantity));
        println!("{quantity:>3} x {unit_price:>8} = {:>10.2}", total);
        line_totals.push(total);
    }

    let base = ctx.sum(line_totals);
    println!("{:>25.2}  (base)", base);

    // Tax lines, each independently rounded before totaling
    let taxes = ctx.calculate_total_taxes(base, Decimal::from(18), Some(Decimal::from(10)), None, None);
    println!("\nICMS 18%:   {:>10.2}", taxes.icms);
    println!("IPI 10%:    {:>10.2}", taxes.ipi);
    println!("PIS 1.65%:  {:>10.2}", taxes.pis);
    println!("COFINS 7.6%:{:>10.2}", taxes.cofins);
    println!("Total:      {:>10.2}", taxes.total);

    // Stock check before committing the sale
    let debit = ctx.validate_stock(Decimal::from(10), Decimal::from(12), false);
    if let Some(error) = debit.error {
        println!("\nStock guard: {error}");
    }

    // Pricing helpers
    println!("\nMarkup 30% on 70.00: {:.2}", ctx.calculate_markup(Decimal::from(70), Decimal::from(30)));
    println!("Margin 30% on 70.00: {:.2}", ctx.calculate_margin(Decimal::from(70), Decimal::from(30)));
}
