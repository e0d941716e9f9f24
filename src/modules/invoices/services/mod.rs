pub mod invoice_service;
pub mod payment_ledger;

pub use invoice_service::InvoiceService;
pub use payment_ledger::PaymentLedgerService;
