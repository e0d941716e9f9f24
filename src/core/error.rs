use rust_decimal::Decimal;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Validation errors for business rules
    #[error("Validation error: {0}")]
    Validation(String),

    /// Payment amount was zero or negative
    #[error("Invalid payment amount: {0}")]
    InvalidAmount(Decimal),

    /// Mutation attempted on a settled (Success) invoice
    #[error("Invoice '{0}' is locked: settled invoices accept no further changes")]
    Locked(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// External store call failed
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Bulk settlement stopped partway through.
    ///
    /// Allocations before `index` were persisted and are NOT rolled back;
    /// the caller reconciles by re-reading invoice state from the store.
    #[error("Settlement halted at allocation {index} (invoice '{invoice_no}'): {source}")]
    SettlementHalted {
        index: usize,
        invoice_no: String,
        #[source]
        source: Box<AppError>,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn locked(invoice_no: impl Into<String>) -> Self {
        AppError::Locked(invoice_no.into())
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::NotFound(resource.into())
    }

    pub fn persistence(msg: impl Into<String>) -> Self {
        AppError::Persistence(msg.into())
    }
}
