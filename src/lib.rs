//! Rentledger invoicing and settlement engine
//!
//! Core billing logic for an equipment-rental business: fiscal-year-aware
//! document numbering, GST bill computation, per-invoice payment ledgers,
//! and lump-sum settlement across a client's outstanding invoices.
//! Persistence stays behind the [`invoices::InvoiceStore`] trait; the
//! surrounding application owns the HTTP surface and the real backend.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::billing;
pub use modules::invoices;
pub use modules::numbering;
pub use modules::settlement;
