// Allocation planning: document-number ordering, greedy distribution, and
// cash conservation.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use rentledger::billing::models::BillBreakdown;
use rentledger::core::AppError;
use rentledger::invoices::models::{InvoiceRecord, InvoiceStatus};
use rentledger::numbering::services::natural_cmp;
use rentledger::settlement::services::SettlementAllocator;

fn invoice(id: &str, invoice_no: &str, total: Decimal) -> InvoiceRecord {
    InvoiceRecord {
        id: id.to_string(),
        client_id: "client-1".to_string(),
        invoice_no: invoice_no.to_string(),
        status: InvoiceStatus::Pending,
        issued_on: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
        due_date: None,
        line_items: vec![],
        adjustments: vec![],
        breakdown: Some(BillBreakdown {
            subtotal: total,
            cgst: Decimal::ZERO,
            sgst: Decimal::ZERO,
            total_tax: Decimal::ZERO,
            tcs_amount: Decimal::ZERO,
            discount_amount: Decimal::ZERO,
            grand_total: total,
        }),
        payments: vec![],
        created_at: None,
        updated_at: None,
    }
}

prop_compose! {
    fn arb_invoices()(totals in prop::collection::vec(100i64..10_000_000, 1..8)) -> Vec<InvoiceRecord> {
        totals
            .into_iter()
            .enumerate()
            .map(|(index, paise)| {
                invoice(
                    &format!("id-{}", index),
                    &format!("INV-{:03}", index + 1),
                    Decimal::new(paise, 2),
                )
            })
            .collect()
    }
}

proptest! {
    #[test]
    fn test_allocations_conserve_cash(
        invoices in arb_invoices(),
        lump_paise in 1i64..50_000_000,
    ) {
        let lump_sum = Decimal::new(lump_paise, 2);
        let plan = SettlementAllocator::plan(lump_sum, &invoices).unwrap();

        prop_assert!(plan.total_allocated() <= lump_sum);
        prop_assert_eq!(plan.total_allocated() + plan.remainder, lump_sum);
    }

    #[test]
    fn test_no_allocation_exceeds_outstanding(
        invoices in arb_invoices(),
        lump_paise in 1i64..50_000_000,
    ) {
        let plan =
            SettlementAllocator::plan(Decimal::new(lump_paise, 2), &invoices).unwrap();

        for allocation in &plan.allocations {
            let target = invoices
                .iter()
                .find(|invoice| invoice.id == allocation.invoice_id)
                .unwrap();
            prop_assert!(allocation.amount <= target.outstanding());
            prop_assert!(allocation.amount > Decimal::ZERO);
        }
    }

    #[test]
    fn test_allocations_follow_document_number_order(
        invoices in arb_invoices(),
        lump_paise in 1i64..50_000_000,
    ) {
        let plan =
            SettlementAllocator::plan(Decimal::new(lump_paise, 2), &invoices).unwrap();

        for pair in plan.allocations.windows(2) {
            prop_assert!(
                natural_cmp(&pair[0].invoice_no, &pair[1].invoice_no)
                    == std::cmp::Ordering::Less
            );
        }
    }

    #[test]
    fn test_at_most_last_allocation_is_partial(
        invoices in arb_invoices(),
        lump_paise in 1i64..50_000_000,
    ) {
        let plan =
            SettlementAllocator::plan(Decimal::new(lump_paise, 2), &invoices).unwrap();

        // Every allocation except possibly the final one settles its
        // invoice in full
        for allocation in plan.allocations.iter().rev().skip(1) {
            let target = invoices
                .iter()
                .find(|invoice| invoice.id == allocation.invoice_id)
                .unwrap();
            prop_assert_eq!(allocation.amount, target.outstanding());
        }
    }
}

#[test]
fn test_fifo_by_document_number_scenario() {
    // INV-002 owes 100, INV-010 owes 50; 120 settles INV-002 in full and
    // leaves INV-010 with 30 outstanding
    let invoices = vec![
        invoice("b", "INV-010", dec!(50)),
        invoice("a", "INV-002", dec!(100)),
    ];

    let plan = SettlementAllocator::plan(dec!(120), &invoices).unwrap();

    assert_eq!(plan.allocations.len(), 2);
    assert_eq!(plan.allocations[0].invoice_no, "INV-002");
    assert_eq!(plan.allocations[0].amount, dec!(100));
    assert_eq!(plan.allocations[1].invoice_no, "INV-010");
    assert_eq!(plan.allocations[1].amount, dec!(20));
    assert_eq!(plan.remainder, Decimal::ZERO);
}

#[test]
fn test_natural_order_beats_lexicographic() {
    // Lexicographically INV-10 < INV-9; natural order pays INV-9 first
    let invoices = vec![
        invoice("a", "INV-10", dec!(40)),
        invoice("b", "INV-9", dec!(40)),
    ];

    let plan = SettlementAllocator::plan(dec!(50), &invoices).unwrap();

    assert_eq!(plan.allocations[0].invoice_no, "INV-9");
    assert_eq!(plan.allocations[0].amount, dec!(40));
    assert_eq!(plan.allocations[1].invoice_no, "INV-10");
    assert_eq!(plan.allocations[1].amount, dec!(10));
}

#[test]
fn test_overpaying_every_invoice_reports_remainder() {
    let invoices = vec![
        invoice("a", "INV-001", dec!(100)),
        invoice("b", "INV-002", dec!(50)),
    ];

    let plan = SettlementAllocator::plan(dec!(500), &invoices).unwrap();

    assert_eq!(plan.total_allocated(), dec!(150));
    // Excess cash is reported, not auto-converted to a credit note
    assert_eq!(plan.remainder, dec!(350));
}

#[test]
fn test_invoices_within_tolerance_are_skipped() {
    // 0.01 outstanding is within the settled tolerance
    let mut nearly_settled = invoice("a", "INV-001", dec!(100.01));
    nearly_settled.payments.push(
        rentledger::invoices::models::PaymentRecord::new(
            NaiveDate::from_ymd_opt(2025, 5, 2).unwrap(),
            rentledger::invoices::models::PaymentMethod::Cash,
            dec!(100),
            None,
        )
        .unwrap(),
    );
    let invoices = vec![nearly_settled, invoice("b", "INV-002", dec!(75))];

    let plan = SettlementAllocator::plan(dec!(100), &invoices).unwrap();

    assert_eq!(plan.allocations.len(), 1);
    assert_eq!(plan.allocations[0].invoice_no, "INV-002");
}

#[test]
fn test_non_positive_lump_sum_rejected() {
    let invoices = vec![invoice("a", "INV-001", dec!(100))];

    assert!(matches!(
        SettlementAllocator::plan(Decimal::ZERO, &invoices),
        Err(AppError::InvalidAmount(_))
    ));
    assert!(matches!(
        SettlementAllocator::plan(dec!(-1), &invoices),
        Err(AppError::InvalidAmount(_))
    ));
}

#[test]
fn test_locked_invoice_in_input_fails_before_any_allocation() {
    let mut locked = invoice("a", "INV-001", dec!(100));
    locked.status = InvoiceStatus::Success;

    let result = SettlementAllocator::plan(dec!(50), &[locked]);
    assert!(matches!(result, Err(AppError::Locked(_))));
}

#[test]
fn test_empty_invoice_set_returns_full_remainder() {
    let plan = SettlementAllocator::plan(dec!(75), &[]).unwrap();

    assert!(plan.allocations.is_empty());
    assert_eq!(plan.remainder, dec!(75));
}
