//! # Facility Module
//!
//! One valuation record per energy source.
//!
//! - [`input`] - The recognized construction options, each independently optional except the name
//! - [`validation`] - The ordered constraint checks applied before any computation
//! - [`terms`] - The seven cost terms and their percentage shares
//! - [`facility`] - The immutable, fully derived [`facility::Facility`]

#[allow(clippy::module_inception)]
pub mod facility;
pub mod input;
pub mod terms;
pub mod validation;
