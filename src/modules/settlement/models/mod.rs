mod allocation;

pub use allocation::{Allocation, BulkSettlement, SettlementPlan};
