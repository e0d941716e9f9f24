mod invoice;
mod payment;

pub use invoice::{InvoiceDraft, InvoiceRecord, InvoiceStatus};
pub use payment::{PaymentMethod, PaymentRecord};
