//! Input adapters - load Member, Site and Offer documents.

mod file_input;

pub use file_input::{read_document, DocumentFormat, InputError};
