use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::Deserialize;
use std::env;

use crate::core::{AppError, Result};
use crate::modules::numbering::models::DocumentNumberTemplate;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub documents: DocumentSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

/// Document numbering and display settings.
///
/// Mirrors what the settings store supplies: number templates for invoices
/// and payment receipts, the credit period, and the date display format.
/// Passed into services by value; nothing reads it globally.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentSettings {
    pub invoice_prefix: String,
    pub invoice_suffix: String,
    pub payment_prefix: String,
    pub payment_suffix: String,
    pub credit_days: u32,
    pub date_format: String,
}

impl DocumentSettings {
    pub fn invoice_template(&self) -> DocumentNumberTemplate {
        DocumentNumberTemplate::new(self.invoice_prefix.clone(), self.invoice_suffix.clone())
    }

    pub fn payment_template(&self) -> DocumentNumberTemplate {
        DocumentNumberTemplate::new(self.payment_prefix.clone(), self.payment_suffix.clone())
    }

    /// Render a date with the configured display format.
    ///
    /// `Config::validate` guarantees the format string parses, so
    /// rendering cannot fail afterwards.
    pub fn format_date(&self, date: NaiveDate) -> String {
        date.format(&self.date_format).to_string()
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            documents: DocumentSettings {
                invoice_prefix: env::var("INVOICE_PREFIX").unwrap_or_default(),
                invoice_suffix: env::var("INVOICE_SUFFIX").unwrap_or_default(),
                payment_prefix: env::var("PAYMENT_PREFIX").unwrap_or_default(),
                payment_suffix: env::var("PAYMENT_SUFFIX").unwrap_or_default(),
                credit_days: env::var("CREDIT_DAYS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()
                    .map_err(|_| AppError::Configuration("Invalid CREDIT_DAYS".to_string()))?,
                date_format: env::var("DATE_FORMAT")
                    .unwrap_or_else(|_| "%d-%m-%Y".to_string()),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.documents.date_format.is_empty() {
            return Err(AppError::Configuration(
                "DATE_FORMAT must not be empty".to_string(),
            ));
        }

        let has_bad_item = StrftimeItems::new(&self.documents.date_format)
            .any(|item| matches!(item, Item::Error));
        if has_bad_item {
            return Err(AppError::Configuration(format!(
                "Invalid DATE_FORMAT: {}",
                self.documents.date_format
            )));
        }

        Ok(())
    }
}
