//! # Levelized Core Library
//!
//! A library for valuing electricity-generating facilities by their levelized cost of
//! energy (LCOE) and comparing many such facilities under one set of industry-wide
//! financial and tax parameters.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless inputs, validation rules, the capital recovery
//!   factor and the cost-term decomposition, plus loaders for tabular facility definitions.
//!
//! - **[`engine`]: The Stateful Layer.** Industry parameters, the facility registry used for
//!   ranking and enumeration, a lock-protected shared session for concurrent hosts, progress
//!   reporting and the error taxonomy.
//!
//! - **[`workflows`]: The Public API.** End-to-end procedures that tie a loaded facility
//!   table to a registry under a given set of industry parameters.

pub mod core;
pub mod engine;
pub mod workflows;
