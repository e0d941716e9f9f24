// A line item is one billable row on a rental/service bill: hours worked
// against an hourly rate. Rows are immutable once the invoice is saved;
// edits go through a fresh draft.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// A single billable line on an invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Description of the machine or service billed
    pub description: String,

    /// Billed quantity (hours)
    pub quantity: Decimal,

    /// Rate per unit
    pub unit_rate: Decimal,
}

impl LineItem {
    /// Create a line item with validation
    ///
    /// # Arguments
    /// * `description` - What was billed
    /// * `quantity` - Must be non-negative
    /// * `unit_rate` - Must be non-negative
    pub fn new(
        description: impl Into<String>,
        quantity: Decimal,
        unit_rate: Decimal,
    ) -> Result<Self> {
        if quantity < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Quantity must be non-negative, got: {}",
                quantity
            )));
        }

        if unit_rate < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Unit rate must be non-negative, got: {}",
                unit_rate
            )));
        }

        Ok(Self {
            description: description.into(),
            quantity,
            unit_rate,
        })
    }

    /// Line amount: quantity × unit rate, unrounded
    pub fn amount(&self) -> Decimal {
        self.quantity * self.unit_rate
    }
}

/// A line item row as the drafting form submits it.
///
/// Quantity and rate arrive as free-form strings; empty or unparseable
/// values coerce to zero rather than rejecting the row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemDraft {
    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub quantity: String,

    #[serde(default)]
    pub unit_rate: String,
}

impl LineItemDraft {
    /// Resolve the draft into a line item, coercing malformed numerics to zero.
    pub fn resolve(&self) -> LineItem {
        LineItem {
            description: self.description.clone(),
            quantity: parse_or_zero(&self.quantity),
            unit_rate: parse_or_zero(&self.unit_rate),
        }
    }
}

fn parse_or_zero(raw: &str) -> Decimal {
    raw.trim().parse::<Decimal>().unwrap_or(Decimal::ZERO)
}
