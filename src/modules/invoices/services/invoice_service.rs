use chrono::{Days, Utc};
use tracing::info;
use uuid::Uuid;

use crate::config::DocumentSettings;
use crate::core::{AppError, Result};
use crate::modules::billing::models::LineItemDraft;
use crate::modules::billing::services::BillCalculator;
use crate::modules::invoices::models::{InvoiceDraft, InvoiceRecord, InvoiceStatus};
use crate::modules::invoices::repositories::InvoiceStore;

/// Invoice drafting flow.
///
/// Runs the one-shot save pipeline: breakdown computed once, document
/// number formatted once from settings plus the caller's sequence, then
/// the record goes to the store. Settings are passed in by the caller;
/// the service holds no global state.
pub struct InvoiceService<S: InvoiceStore> {
    store: S,
    settings: DocumentSettings,
}

impl<S: InvoiceStore> InvoiceService<S> {
    pub fn new(store: S, settings: DocumentSettings) -> Self {
        Self { store, settings }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Save a draft as a new Pending invoice.
    ///
    /// The breakdown and invoice number are both frozen here: the stored
    /// snapshot is what every later read and payment uses.
    pub async fn create_invoice(&self, draft: InvoiceDraft) -> Result<InvoiceRecord> {
        let line_items: Vec<_> = draft.line_items.iter().map(LineItemDraft::resolve).collect();
        let breakdown = BillCalculator::compute_breakdown(&line_items, &draft.adjustments);

        let invoice_no = self
            .settings
            .invoice_template()
            .render(&draft.sequence, Some(draft.issued_on));

        let due_date = draft
            .issued_on
            .checked_add_days(Days::new(u64::from(self.settings.credit_days)))
            .ok_or_else(|| AppError::validation("Due date out of range"))?;

        let now = Utc::now();
        let record = InvoiceRecord {
            id: Uuid::new_v4().to_string(),
            client_id: draft.client_id,
            invoice_no: invoice_no.clone(),
            status: InvoiceStatus::Pending,
            issued_on: draft.issued_on,
            due_date: Some(due_date),
            line_items,
            adjustments: draft.adjustments,
            breakdown: Some(breakdown),
            payments: Vec::new(),
            created_at: Some(now),
            updated_at: Some(now),
        };

        let created = self.store.create_invoice(record).await?;
        info!(
            invoice_no = invoice_no,
            client_id = created.client_id,
            grand_total = %breakdown.grand_total,
            "Invoice created"
        );

        Ok(created)
    }

    /// Receipt number for a payment, from the payment template.
    pub fn receipt_number(&self, sequence: &str, reference: chrono::NaiveDate) -> String {
        self.settings
            .payment_template()
            .render(sequence, Some(reference))
    }
}
