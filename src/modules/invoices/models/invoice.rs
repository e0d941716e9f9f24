// Invoice record with its payment ledger and status machine.
//
// An invoice snapshots its money breakdown at save time; the breakdown is
// persisted and never recomputed on read, so later changes to rates or
// line items leave issued invoices untouched. Payments append to an
// insertion-ordered ledger. A Success invoice is locked for good.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{money, AppError, Result};
use crate::modules::billing::models::{Adjustment, BillBreakdown, LineItem, LineItemDraft};
use crate::modules::billing::services::BillCalculator;

use super::payment::PaymentRecord;

/// Invoice status lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceStatus {
    /// Open for payments and status updates
    Pending,

    /// Fully settled and locked; terminal
    Success,
}

impl Default for InvoiceStatus {
    fn default() -> Self {
        InvoiceStatus::Pending
    }
}

impl std::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvoiceStatus::Pending => write!(f, "Pending"),
            InvoiceStatus::Success => write!(f, "Success"),
        }
    }
}

impl std::str::FromStr for InvoiceStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(InvoiceStatus::Pending),
            "Success" => Ok(InvoiceStatus::Success),
            _ => Err(format!("Invalid invoice status: {}", s)),
        }
    }
}

/// A persisted invoice
///
/// The store owns persisted state; this type is a value passed in and out
/// of the core. Mutating operations return a new record and leave the
/// input untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRecord {
    /// Store-assigned identity
    #[serde(rename = "_id")]
    pub id: String,

    /// Client the invoice bills
    pub client_id: String,

    /// Formatted once at creation, stored verbatim
    pub invoice_no: String,

    #[serde(default)]
    pub status: InvoiceStatus,

    pub issued_on: NaiveDate,

    /// Issue date plus the configured credit days
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,

    #[serde(default)]
    pub line_items: Vec<LineItem>,

    #[serde(default)]
    pub adjustments: Vec<Adjustment>,

    /// Money snapshot computed at save time; absent only on legacy records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<BillBreakdown>,

    /// Payment ledger in arrival order
    #[serde(default)]
    pub payments: Vec<PaymentRecord>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl InvoiceRecord {
    /// Grand total from the stored breakdown, recomputing from stored line
    /// items and adjustments for legacy records that predate snapshots.
    pub fn grand_total(&self) -> Decimal {
        match &self.breakdown {
            Some(breakdown) => breakdown.grand_total,
            None => {
                BillCalculator::compute_breakdown(&self.line_items, &self.adjustments)
                    .grand_total
            }
        }
    }

    /// Sum of all recorded payment amounts
    pub fn total_paid(&self) -> Decimal {
        self.payments.iter().map(|payment| payment.amount).sum()
    }

    /// Grand total minus payments. Negative on overpayment; reported, not
    /// clamped.
    pub fn outstanding(&self) -> Decimal {
        self.grand_total() - self.total_paid()
    }

    /// True while more than one paisa remains unpaid
    pub fn has_outstanding(&self) -> bool {
        self.outstanding() > money::epsilon()
    }

    /// A Success invoice accepts no further mutation
    pub fn is_locked(&self) -> bool {
        self.status == InvoiceStatus::Success
    }

    /// Append a payment to the ledger.
    ///
    /// Validated before any effect: fails with `Locked` on a Success
    /// invoice and `InvalidAmount` on a non-positive amount, returning a
    /// new record otherwise. Arrival order is preserved.
    pub fn append_payment(&self, payment: PaymentRecord) -> Result<Self> {
        if self.is_locked() {
            return Err(AppError::locked(&self.invoice_no));
        }

        if payment.amount <= Decimal::ZERO {
            return Err(AppError::InvalidAmount(payment.amount));
        }

        let mut next = self.clone();
        next.payments.push(payment);
        next.updated_at = Some(Utc::now());
        Ok(next)
    }

    /// Update status. `Pending -> Success` is the only real transition and
    /// it is irreversible; any change on a Success invoice fails `Locked`.
    pub fn set_status(&self, status: InvoiceStatus) -> Result<Self> {
        if self.is_locked() {
            return Err(AppError::locked(&self.invoice_no));
        }

        let mut next = self.clone();
        next.status = status;
        next.updated_at = Some(Utc::now());
        Ok(next)
    }
}

/// Input to the bill-drafting flow.
///
/// Line items arrive as form drafts with string numerics; the sequence is
/// the user-editable ordinal inserted into the document number.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDraft {
    pub client_id: String,

    pub sequence: String,

    pub issued_on: NaiveDate,

    #[serde(default)]
    pub line_items: Vec<LineItemDraft>,

    #[serde(default)]
    pub adjustments: Vec<Adjustment>,
}
