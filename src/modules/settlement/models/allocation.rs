use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One slice of a lump sum assigned to one invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    pub invoice_id: String,
    pub invoice_no: String,
    pub amount: Decimal,
}

/// Outcome of planning a lump sum across outstanding invoices.
///
/// `remainder` is cash left after every invoice reached zero; it is
/// reported for the caller to handle, never turned into a credit note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementPlan {
    pub allocations: Vec<Allocation>,
    pub remainder: Decimal,
}

impl SettlementPlan {
    /// Total cash the plan assigns to invoices
    pub fn total_allocated(&self) -> Decimal {
        self.allocations
            .iter()
            .map(|allocation| allocation.amount)
            .sum()
    }
}

/// A fully applied bulk settlement for one client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkSettlement {
    pub client_id: String,
    pub allocations: Vec<Allocation>,
    pub remainder: Decimal,
}
