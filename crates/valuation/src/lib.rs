//! Inventory valuation engine.
//!
//! This crate contains the valuation business rules, implemented purely as
//! deterministic domain logic (no IO, no logging, no shared state).

pub mod engine;
pub mod facts;
pub mod method;
pub mod reserve;

pub use engine::{ValuationResult, evaluate, try_evaluate};
pub use facts::InventoryFacts;
pub use method::ValuationMethod;
pub use reserve::{AgeReserveBand, AgeReserveTable};
