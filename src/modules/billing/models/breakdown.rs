use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money;

/// Computed money figures for one bill.
///
/// Persisted as a snapshot on the invoice at save time: later changes to
/// line items or tax settings never retroactively alter issued invoices.
/// Figures are stored unrounded; `rounded()` produces the presentation copy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillBreakdown {
    pub subtotal: Decimal,
    pub cgst: Decimal,
    pub sgst: Decimal,
    pub total_tax: Decimal,
    pub tcs_amount: Decimal,
    pub discount_amount: Decimal,
    pub grand_total: Decimal,
}

impl BillBreakdown {
    /// Zero breakdown for an empty bill
    pub fn zero() -> Self {
        Self {
            subtotal: Decimal::ZERO,
            cgst: Decimal::ZERO,
            sgst: Decimal::ZERO,
            total_tax: Decimal::ZERO,
            tcs_amount: Decimal::ZERO,
            discount_amount: Decimal::ZERO,
            grand_total: Decimal::ZERO,
        }
    }

    /// Presentation copy with every figure rounded to two decimals.
    pub fn rounded(&self) -> Self {
        Self {
            subtotal: money::round_display(self.subtotal),
            cgst: money::round_display(self.cgst),
            sgst: money::round_display(self.sgst),
            total_tax: money::round_display(self.total_tax),
            tcs_amount: money::round_display(self.tcs_amount),
            discount_amount: money::round_display(self.discount_amount),
            grand_total: money::round_display(self.grand_total),
        }
    }
}
