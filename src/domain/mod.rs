//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `report` - Base-name derivation, topic extraction and artifact kinds

pub mod report;
