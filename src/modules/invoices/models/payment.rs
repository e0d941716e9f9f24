use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// How a payment was received
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,

    #[serde(rename = "UPI")]
    Upi,

    #[serde(rename = "Bank Transfer")]
    BankTransfer,

    Cheque,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::Cash => write!(f, "Cash"),
            PaymentMethod::Upi => write!(f, "UPI"),
            PaymentMethod::BankTransfer => write!(f, "Bank Transfer"),
            PaymentMethod::Cheque => write!(f, "Cheque"),
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Cash" => Ok(PaymentMethod::Cash),
            "UPI" => Ok(PaymentMethod::Upi),
            "Bank Transfer" => Ok(PaymentMethod::BankTransfer),
            "Cheque" => Ok(PaymentMethod::Cheque),
            _ => Err(format!("Invalid payment method: {}", s)),
        }
    }
}

/// One payment against an invoice.
///
/// Payments are append-only: once recorded they are never edited or
/// deleted. The ledger keeps arrival order; display layers sort by date
/// separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub date: NaiveDate,

    pub method: PaymentMethod,

    pub amount: Decimal,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl PaymentRecord {
    /// Create a payment record
    ///
    /// # Errors
    /// * `InvalidAmount` when `amount` is zero or negative
    pub fn new(
        date: NaiveDate,
        method: PaymentMethod,
        amount: Decimal,
        note: Option<String>,
    ) -> Result<Self> {
        if amount <= Decimal::ZERO {
            return Err(AppError::InvalidAmount(amount));
        }

        Ok(Self {
            date,
            method,
            amount,
            note,
        })
    }
}
