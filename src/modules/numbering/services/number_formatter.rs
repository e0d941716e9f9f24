use chrono::{Datelike, NaiveDate, Utc};

/// Formats document numbers from a configurable prefix/suffix pair.
///
/// The suffix may embed fiscal-year and month tokens that are resolved
/// against a reference date. The sequence is caller-supplied and used
/// verbatim; the caller decides zero-padding.
pub struct DocumentNumberFormatter;

impl DocumentNumberFormatter {
    /// Build a document number: `prefix + sequence + expanded suffix`.
    ///
    /// Token expansion applies to the suffix only; the prefix is literal.
    /// Supported tokens:
    /// * `{{mm}}`   - two-digit month (01-12)
    /// * `{{mmm}}`  - three-letter month abbreviation
    /// * `{{xx}}`   - two-digit fiscal-year start
    /// * `{{xxxx}}` - four-digit fiscal-year start
    ///
    /// Unrecognized `{{...}}` tokens pass through literally; a malformed
    /// template is never an error. `reference` defaults to today (UTC).
    pub fn format(
        prefix: Option<&str>,
        suffix: Option<&str>,
        sequence: &str,
        reference: Option<NaiveDate>,
    ) -> String {
        let date = reference.unwrap_or_else(|| Utc::now().date_naive());
        let prefix = prefix.unwrap_or_default();
        let suffix = suffix.unwrap_or_default();

        format!("{}{}{}", prefix, sequence, Self::expand_tokens(suffix, date))
    }

    /// Start year of the Indian fiscal year (April 1 - March 31) containing `date`.
    pub fn fiscal_year_start(date: NaiveDate) -> i32 {
        if date.month() >= 4 {
            date.year()
        } else {
            date.year() - 1
        }
    }

    fn expand_tokens(suffix: &str, date: NaiveDate) -> String {
        let fiscal_year = Self::fiscal_year_start(date);

        // Longer tokens first so {{mmm}}/{{xxxx}} are never split by the
        // shorter replacements.
        suffix
            .replace("{{mmm}}", &date.format("%b").to_string())
            .replace("{{mm}}", &format!("{:02}", date.month()))
            .replace("{{xxxx}}", &format!("{:04}", fiscal_year))
            .replace("{{xx}}", &format!("{:02}", fiscal_year.rem_euclid(100)))
    }
}
