// Settlement module

pub mod models;
pub mod services;

pub use models::{Allocation, BulkSettlement, SettlementPlan};
pub use services::{SettlementAllocator, SettlementService, BULK_PAYMENT_NOTE};
