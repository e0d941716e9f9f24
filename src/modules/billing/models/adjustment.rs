// TCS and discount adjustments against a bill's subtotal.
//
// The wire format is `{ "kind": "TCS"|"Discount", "mode": "Amount"|"Percent",
// "value": <decimal> }`; the strings are turned into tagged variants at the
// serde boundary so core logic never dispatches on free-form text.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What the adjustment does to the grand total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdjustmentKind {
    /// Tax Collected at Source, additive
    #[serde(rename = "TCS")]
    Tcs,

    /// Discount, subtractive
    Discount,
}

impl std::fmt::Display for AdjustmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdjustmentKind::Tcs => write!(f, "TCS"),
            AdjustmentKind::Discount => write!(f, "Discount"),
        }
    }
}

/// How the adjustment value resolves to a currency amount
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AdjustmentMode {
    /// Flat currency amount, used as-is
    Amount(Decimal),

    /// Percentage of the pre-tax subtotal
    Percent(Decimal),
}

/// One adjustment against a bill's subtotal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "AdjustmentWire", into = "AdjustmentWire")]
pub struct Adjustment {
    pub kind: AdjustmentKind,
    pub mode: AdjustmentMode,
}

impl Adjustment {
    pub fn tcs(mode: AdjustmentMode) -> Self {
        Self {
            kind: AdjustmentKind::Tcs,
            mode,
        }
    }

    pub fn discount(mode: AdjustmentMode) -> Self {
        Self {
            kind: AdjustmentKind::Discount,
            mode,
        }
    }

    /// Resolve to a currency amount against the pre-tax subtotal.
    ///
    /// Percent values compute against the subtotal, never the post-tax total.
    pub fn resolve(&self, subtotal: Decimal) -> Decimal {
        match self.mode {
            AdjustmentMode::Amount(value) => value,
            AdjustmentMode::Percent(value) => subtotal * value / Decimal::ONE_HUNDRED,
        }
    }
}

/// External JSON representation of an adjustment
#[derive(Debug, Clone, Serialize, Deserialize)]
struct AdjustmentWire {
    kind: AdjustmentKind,
    mode: WireMode,
    value: Decimal,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
enum WireMode {
    Amount,
    Percent,
}

impl From<AdjustmentWire> for Adjustment {
    fn from(wire: AdjustmentWire) -> Self {
        let mode = match wire.mode {
            WireMode::Amount => AdjustmentMode::Amount(wire.value),
            WireMode::Percent => AdjustmentMode::Percent(wire.value),
        };
        Self {
            kind: wire.kind,
            mode,
        }
    }
}

impl From<Adjustment> for AdjustmentWire {
    fn from(adjustment: Adjustment) -> Self {
        let (mode, value) = match adjustment.mode {
            AdjustmentMode::Amount(value) => (WireMode::Amount, value),
            AdjustmentMode::Percent(value) => (WireMode::Percent, value),
        };
        Self {
            kind: adjustment.kind,
            mode,
            value,
        }
    }
}
