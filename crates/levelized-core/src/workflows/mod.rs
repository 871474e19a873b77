//! # Workflows Module
//!
//! High-level entry points that carry a facility table through validation, valuation and
//! registration in one call.
//!
//! - **Evaluation Workflow** ([`evaluate`]) - Builds and registers every facility of a table
//!   under one set of industry parameters, halting on or skipping invalid definitions.

pub mod evaluate;
