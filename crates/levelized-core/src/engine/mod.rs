//! # Engine Module
//!
//! The stateful layer of the valuation engine.
//!
//! - **Industry Parameters** ([`industry`]) - Interest rate, loan period and externality tax rates
//! - **Registry** ([`registry`]) - Ordered facility list with ranking and enumeration
//! - **Shared Session** ([`session`]) - Parameters and registry behind one lock for concurrent hosts
//! - **Progress Monitoring** ([`progress`]) - Progress callbacks for long evaluations
//! - **Error Handling** ([`error`]) - Validation, indeterminate-ratio and loading errors
//!
//! Facilities take a snapshot of the parameters when they are built. Updating the
//! parameters afterwards never recomputes an existing facility.

pub mod error;
pub mod industry;
pub mod progress;
pub mod registry;
pub mod session;
