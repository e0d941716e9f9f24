use rust_decimal::Decimal;
use tracing::info;

use crate::core::{AppError, Result};
use crate::modules::invoices::models::{InvoiceRecord, InvoiceStatus, PaymentRecord};
use crate::modules::invoices::repositories::InvoiceStore;

/// Payment ledger operations against the store.
///
/// Each mutation re-reads the invoice and validates the `Locked` and
/// `InvalidAmount` rules on fresh state before the external call goes out,
/// so a rejected request has no partial effect.
pub struct PaymentLedgerService<S: InvoiceStore> {
    store: S,
}

impl<S: InvoiceStore> PaymentLedgerService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Record one payment against an invoice.
    pub async fn record_payment(
        &self,
        invoice_id: &str,
        payment: PaymentRecord,
    ) -> Result<InvoiceRecord> {
        let record = self.fetch(invoice_id).await?;

        // Validate before the store mutation is attempted
        record.append_payment(payment.clone())?;

        let updated = self.store.append_payment(invoice_id, payment).await?;
        info!(
            invoice_no = updated.invoice_no,
            outstanding = %updated.outstanding(),
            "Payment recorded"
        );

        Ok(updated)
    }

    /// Mark an invoice settled. Irreversible; the record locks.
    pub async fn mark_success(&self, invoice_id: &str) -> Result<InvoiceRecord> {
        let record = self.fetch(invoice_id).await?;
        record.set_status(InvoiceStatus::Success)?;

        let updated = self
            .store
            .set_status(invoice_id, InvoiceStatus::Success)
            .await?;
        info!(invoice_no = updated.invoice_no, "Invoice marked Success");

        Ok(updated)
    }

    /// Outstanding balance from current store state. Negative on
    /// overpayment.
    pub async fn outstanding(&self, invoice_id: &str) -> Result<Decimal> {
        Ok(self.fetch(invoice_id).await?.outstanding())
    }

    async fn fetch(&self, invoice_id: &str) -> Result<InvoiceRecord> {
        self.store
            .get_invoice(invoice_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Invoice '{}'", invoice_id)))
    }
}
