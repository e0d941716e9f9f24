use rust_decimal::Decimal;

use crate::modules::billing::models::{Adjustment, AdjustmentKind, BillBreakdown, LineItem, LineItemDraft};

/// CGST rate, fixed at 9%
pub fn cgst_rate() -> Decimal {
    Decimal::new(9, 2)
}

/// SGST rate, fixed at 9%
pub fn sgst_rate() -> Decimal {
    Decimal::new(9, 2)
}

/// BillCalculator turns line items and adjustments into a money breakdown.
///
/// Pure and deterministic: identical inputs give bit-identical outputs, so a
/// stored breakdown can always be verified by recomputing. Nothing is
/// rounded here; rounding happens once, at presentation.
pub struct BillCalculator;

impl BillCalculator {
    /// Compute the full breakdown for a bill.
    ///
    /// * `subtotal` = sum of line amounts
    /// * `cgst` = `sgst` = subtotal × 9%, applied to the whole subtotal
    ///   (tax is not per-line)
    /// * percent adjustments resolve against the pre-tax subtotal
    /// * `grand_total` = subtotal + TCS − discount + total tax
    ///
    /// The grand total is not clamped: a discount larger than everything
    /// else yields a negative total, reported as-is.
    pub fn compute_breakdown(
        line_items: &[LineItem],
        adjustments: &[Adjustment],
    ) -> BillBreakdown {
        let subtotal: Decimal = line_items.iter().map(LineItem::amount).sum();

        let cgst = subtotal * cgst_rate();
        let sgst = subtotal * sgst_rate();
        let total_tax = cgst + sgst;

        let mut tcs_amount = Decimal::ZERO;
        let mut discount_amount = Decimal::ZERO;
        for adjustment in adjustments {
            let resolved = adjustment.resolve(subtotal);
            match adjustment.kind {
                AdjustmentKind::Tcs => tcs_amount += resolved,
                AdjustmentKind::Discount => discount_amount += resolved,
            }
        }

        let grand_total = subtotal + tcs_amount - discount_amount + total_tax;

        BillBreakdown {
            subtotal,
            cgst,
            sgst,
            total_tax,
            tcs_amount,
            discount_amount,
            grand_total,
        }
    }

    /// Compute a breakdown straight from form drafts.
    ///
    /// Rows with malformed numerics contribute zero; no row is rejected.
    pub fn compute_from_drafts(
        drafts: &[LineItemDraft],
        adjustments: &[Adjustment],
    ) -> BillBreakdown {
        let line_items: Vec<LineItem> = drafts.iter().map(LineItemDraft::resolve).collect();
        Self::compute_breakdown(&line_items, adjustments)
    }
}
