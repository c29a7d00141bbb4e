//! `stockworth-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the valuation engine
//! and the report layer (no IO, no logging).

pub mod error;
pub mod float;
pub mod id;
pub mod money;

pub use error::{DomainError, DomainResult};
pub use id::ReportId;
pub use money::{Currency, format_amount, format_percent, resolve_symbol};
