// Invoices module

pub mod models;
pub mod repositories;
pub mod services;

pub use models::{InvoiceDraft, InvoiceRecord, InvoiceStatus, PaymentMethod, PaymentRecord};
pub use repositories::{InMemoryInvoiceStore, InvoiceStore};
pub use services::{InvoiceService, PaymentLedgerService};
