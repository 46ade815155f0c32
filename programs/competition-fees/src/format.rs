use rust_decimal::{Decimal, RoundingStrategy};

/// Render cents as dollars, e.g. `5325` -> `"$53.25"`. USD only.
pub fn format_cents(cents: i64) -> String {
    let dollars = Decimal::new(cents, 2).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${:.2}", dollars)
}
