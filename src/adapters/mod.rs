//! Adapters - Connect the domain to external systems.
//!
//! - `input` - Reads Member, Site and Offer documents from files

pub mod input;

pub use input::{read_document, DocumentFormat, InputError};
