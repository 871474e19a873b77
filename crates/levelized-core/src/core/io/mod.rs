//! # I/O Module
//!
//! Readers for tabular facility definitions.
//!
//! - [`fields`] - Column names recognized in facility tables
//! - [`table`] - [`table::FacilityTable`], loaded from CSV or TOML

pub mod fields;
pub mod table;
