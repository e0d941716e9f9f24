use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::{AppError, Result};
use crate::modules::invoices::models::{InvoiceRecord, InvoiceStatus, PaymentRecord};
use crate::modules::numbering::services::natural_cmp;

use super::invoice_store::InvoiceStore;

/// In-memory invoice store.
///
/// Reference implementation of [`InvoiceStore`] used by the test suites and
/// by embedders that want the engine without a real backend. Locking and
/// amount rules are enforced through the record methods, exactly as a real
/// store front-end would.
#[derive(Default)]
pub struct InMemoryInvoiceStore {
    records: RwLock<HashMap<String, InvoiceRecord>>,
}

impl InMemoryInvoiceStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, HashMap<String, InvoiceRecord>>> {
        self.records
            .read()
            .map_err(|_| AppError::persistence("invoice store lock poisoned"))
    }

    fn write(
        &self,
    ) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<String, InvoiceRecord>>> {
        self.records
            .write()
            .map_err(|_| AppError::persistence("invoice store lock poisoned"))
    }
}

#[async_trait]
impl InvoiceStore for InMemoryInvoiceStore {
    async fn list_invoices(&self, client_id: Option<&str>) -> Result<Vec<InvoiceRecord>> {
        let records = self.read()?;
        let mut invoices: Vec<InvoiceRecord> = records
            .values()
            .filter(|record| client_id.is_none_or(|client| record.client_id == client))
            .cloned()
            .collect();

        invoices.sort_by(|a, b| natural_cmp(&a.invoice_no, &b.invoice_no));
        Ok(invoices)
    }

    async fn get_invoice(&self, id: &str) -> Result<Option<InvoiceRecord>> {
        Ok(self.read()?.get(id).cloned())
    }

    async fn create_invoice(&self, mut record: InvoiceRecord) -> Result<InvoiceRecord> {
        if record.id.is_empty() {
            record.id = Uuid::new_v4().to_string();
        }

        let mut records = self.write()?;
        if records.contains_key(&record.id) {
            return Err(AppError::persistence(format!(
                "invoice '{}' already exists",
                record.id
            )));
        }

        records.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    async fn append_payment(
        &self,
        id: &str,
        payment: PaymentRecord,
    ) -> Result<InvoiceRecord> {
        let mut records = self.write()?;
        let record = records
            .get(id)
            .ok_or_else(|| AppError::not_found(format!("Invoice '{}'", id)))?;

        let updated = record.append_payment(payment)?;
        records.insert(id.to_string(), updated.clone());
        Ok(updated)
    }

    async fn set_status(&self, id: &str, status: InvoiceStatus) -> Result<InvoiceRecord> {
        let mut records = self.write()?;
        let record = records
            .get(id)
            .ok_or_else(|| AppError::not_found(format!("Invoice '{}'", id)))?;

        let updated = record.set_status(status)?;
        records.insert(id.to_string(), updated.clone());
        Ok(updated)
    }

    async fn delete_invoice(&self, id: &str) -> Result<()> {
        let mut records = self.write()?;
        records
            .remove(id)
            .ok_or_else(|| AppError::not_found(format!("Invoice '{}'", id)))?;
        Ok(())
    }
}
