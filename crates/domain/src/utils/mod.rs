//! Validation helpers

pub mod domain_name;

pub use domain_name::{is_valid_domain, DomainCheck};
