use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::core::{money, AppError, Result};
use crate::modules::invoices::models::{InvoiceRecord, PaymentMethod, PaymentRecord};
use crate::modules::invoices::repositories::InvoiceStore;
use crate::modules::numbering::services::natural_cmp;
use crate::modules::settlement::models::{Allocation, BulkSettlement, SettlementPlan};

/// Note stamped on every payment a bulk settlement creates
pub const BULK_PAYMENT_NOTE: &str = "Automated Bulk Payment";

/// Plans how a lump sum spreads across a client's outstanding invoices.
///
/// Invoices are processed in ascending natural order of `invoice_no` (not
/// date, not insertion order): the oldest-numbered invoice settles first.
/// Pure; applying the plan is `SettlementService`'s job.
pub struct SettlementAllocator;

impl SettlementAllocator {
    /// Greedily assign `lump_sum` across `invoices`.
    ///
    /// Per invoice in number order: pay `min(remaining, outstanding)`,
    /// stopping once less than one paisa remains. Invoices already within
    /// the settled tolerance get no allocation. Whatever cash is left when
    /// every invoice reaches zero comes back as `remainder`.
    ///
    /// # Errors
    /// * `InvalidAmount` when `lump_sum` is zero or negative
    /// * `Locked` when a Success invoice is in the input set
    pub fn plan(lump_sum: Decimal, invoices: &[InvoiceRecord]) -> Result<SettlementPlan> {
        if lump_sum <= Decimal::ZERO {
            return Err(AppError::InvalidAmount(lump_sum));
        }

        if let Some(locked) = invoices.iter().find(|invoice| invoice.is_locked()) {
            return Err(AppError::locked(&locked.invoice_no));
        }

        let mut ordered: Vec<&InvoiceRecord> = invoices.iter().collect();
        ordered.sort_by(|a, b| natural_cmp(&a.invoice_no, &b.invoice_no));

        let epsilon = money::epsilon();
        let mut remaining = lump_sum;
        let mut allocations = Vec::new();

        for invoice in ordered {
            if remaining <= epsilon {
                break;
            }

            let outstanding = invoice.outstanding();
            if outstanding <= epsilon {
                continue;
            }

            let pay_amount = remaining.min(outstanding);
            allocations.push(Allocation {
                invoice_id: invoice.id.clone(),
                invoice_no: invoice.invoice_no.clone(),
                amount: pay_amount,
            });
            remaining -= pay_amount;
        }

        info!(
            allocations = allocations.len(),
            remainder = %remaining,
            "Settlement planned"
        );

        Ok(SettlementPlan {
            allocations,
            remainder: remaining,
        })
    }
}

/// Applies bulk settlements against the invoice store.
pub struct SettlementService<S: InvoiceStore> {
    store: S,
}

impl<S: InvoiceStore> SettlementService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Distribute one lump-sum payment across a client's open invoices.
    ///
    /// Lists the client's invoices, keeps the Pending ones with more than
    /// one paisa outstanding, plans with [`SettlementAllocator::plan`], and
    /// then persists one payment per allocation, strictly in order, each
    /// tagged with [`BULK_PAYMENT_NOTE`] and the uniform `date`/`method`.
    ///
    /// # Partial failure
    /// If persisting allocation *k* fails, the run stops there: earlier
    /// allocations stay applied (no rollback), later ones are never
    /// attempted, and the error is `SettlementHalted` naming the failed
    /// index and invoice. Callers detect and reconcile the partial state
    /// by re-reading invoice state from the store; the service never
    /// retries.
    pub async fn settle_client(
        &self,
        client_id: &str,
        lump_sum: Decimal,
        date: NaiveDate,
        method: PaymentMethod,
    ) -> Result<BulkSettlement> {
        let invoices = self.store.list_invoices(Some(client_id)).await?;
        let open: Vec<InvoiceRecord> = invoices
            .into_iter()
            .filter(|invoice| !invoice.is_locked() && invoice.has_outstanding())
            .collect();

        let plan = SettlementAllocator::plan(lump_sum, &open)?;
        info!(
            client_id = client_id,
            lump_sum = %lump_sum,
            open_invoices = open.len(),
            allocations = plan.allocations.len(),
            "Applying bulk settlement"
        );

        for (index, allocation) in plan.allocations.iter().enumerate() {
            let payment = PaymentRecord::new(
                date,
                method,
                allocation.amount,
                Some(BULK_PAYMENT_NOTE.to_string()),
            )?;

            if let Err(source) = self.store.append_payment(&allocation.invoice_id, payment).await
            {
                warn!(
                    invoice_no = allocation.invoice_no,
                    index = index,
                    error = %source,
                    "Bulk settlement halted; earlier allocations stay applied"
                );
                return Err(AppError::SettlementHalted {
                    index,
                    invoice_no: allocation.invoice_no.clone(),
                    source: Box::new(source),
                });
            }
        }

        Ok(BulkSettlement {
            client_id: client_id.to_string(),
            allocations: plan.allocations,
            remainder: plan.remainder,
        })
    }
}
