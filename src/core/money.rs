use rust_decimal::Decimal;

/// Decimal places shown when presenting rupee amounts.
///
/// Stored figures stay unrounded; rounding happens only at display time so
/// that CGST, SGST and grand totals never accumulate rounding drift.
pub const DISPLAY_SCALE: u32 = 2;

/// Comparison tolerance when deciding whether an invoice is settled (one paisa).
pub fn epsilon() -> Decimal {
    Decimal::new(1, 2)
}

/// Round an amount for presentation.
pub fn round_display(amount: Decimal) -> Decimal {
    amount.round_dp(DISPLAY_SCALE)
}

/// Format an amount the way invoices and receipts print it.
pub fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", round_display(amount))
}
