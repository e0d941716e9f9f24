pub mod allocator;

pub use allocator::{SettlementAllocator, SettlementService, BULK_PAYMENT_NOTE};
