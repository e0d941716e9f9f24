use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::modules::numbering::services::DocumentNumberFormatter;

/// Prefix/suffix pair for one document series (invoices or receipts).
///
/// The suffix may carry `{{mm}}`, `{{mmm}}`, `{{xx}}` and `{{xxxx}}` tokens;
/// see [`DocumentNumberFormatter`]. Templates come from the settings store
/// and are passed in by the caller, never read from global state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentNumberTemplate {
    #[serde(default)]
    pub prefix: Option<String>,

    #[serde(default)]
    pub suffix: Option<String>,
}

impl DocumentNumberTemplate {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
            suffix: Some(suffix.into()),
        }
    }

    /// Render a document number for the given sequence and reference date.
    pub fn render(&self, sequence: &str, reference: Option<NaiveDate>) -> String {
        DocumentNumberFormatter::format(
            self.prefix.as_deref(),
            self.suffix.as_deref(),
            sequence,
            reference,
        )
    }
}
