// Billing module

pub mod models;
pub mod services;

pub use models::{Adjustment, AdjustmentKind, AdjustmentMode, BillBreakdown, LineItem, LineItemDraft};
pub use services::BillCalculator;
