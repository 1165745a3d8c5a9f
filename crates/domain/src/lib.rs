//! # Enforcement Domain
//!
//! Event model and shared types for the Enforcement API client.
//!
//! This crate contains:
//! - The security [`Event`] record and its wire conversion
//! - The property table mapping field names to API names
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Protocol constants
//!
//! ## Architecture
//! - No dependencies on other workspace crates
//! - No I/O: everything here is pure data and validation

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::{is_valid_domain, DomainCheck};
