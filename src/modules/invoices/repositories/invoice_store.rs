use std::sync::Arc;

use async_trait::async_trait;

use crate::core::Result;
use crate::modules::invoices::models::{InvoiceRecord, InvoiceStatus, PaymentRecord};

/// The external invoice persistence boundary.
///
/// The store exclusively owns persisted invoice state; core services read
/// records through it and hand back proposed mutations. Implementations
/// map failures to `AppError::Persistence` and missing records to `None`.
#[async_trait]
pub trait InvoiceStore: Send + Sync {
    /// List invoices, optionally restricted to one client
    async fn list_invoices(&self, client_id: Option<&str>) -> Result<Vec<InvoiceRecord>>;

    /// Fetch one invoice by id
    async fn get_invoice(&self, id: &str) -> Result<Option<InvoiceRecord>>;

    /// Persist a new invoice
    async fn create_invoice(&self, record: InvoiceRecord) -> Result<InvoiceRecord>;

    /// Append one payment to an invoice's ledger
    async fn append_payment(&self, id: &str, payment: PaymentRecord)
        -> Result<InvoiceRecord>;

    /// Update an invoice's status
    async fn set_status(&self, id: &str, status: InvoiceStatus) -> Result<InvoiceRecord>;

    /// Delete an invoice
    async fn delete_invoice(&self, id: &str) -> Result<()>;
}

// Shared handles delegate, so several services can front one store.
#[async_trait]
impl<S: InvoiceStore + ?Sized> InvoiceStore for Arc<S> {
    async fn list_invoices(&self, client_id: Option<&str>) -> Result<Vec<InvoiceRecord>> {
        (**self).list_invoices(client_id).await
    }

    async fn get_invoice(&self, id: &str) -> Result<Option<InvoiceRecord>> {
        (**self).get_invoice(id).await
    }

    async fn create_invoice(&self, record: InvoiceRecord) -> Result<InvoiceRecord> {
        (**self).create_invoice(record).await
    }

    async fn append_payment(
        &self,
        id: &str,
        payment: PaymentRecord,
    ) -> Result<InvoiceRecord> {
        (**self).append_payment(id, payment).await
    }

    async fn set_status(&self, id: &str, status: InvoiceStatus) -> Result<InvoiceRecord> {
        (**self).set_status(id, status).await
    }

    async fn delete_invoice(&self, id: &str) -> Result<()> {
        (**self).delete_invoice(id).await
    }
}
