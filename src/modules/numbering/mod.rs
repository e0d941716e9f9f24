// Document numbering module

pub mod models;
pub mod services;

pub use models::DocumentNumberTemplate;
pub use services::{natural_cmp, DocumentNumberFormatter};
