//! # Core Module
//!
//! The stateless foundation of the valuation engine.
//!
//! - **Constants** ([`constants`]) - Unit conversions and the thermodynamic heat-rate limit
//! - **Finance** ([`finance`]) - Capital recovery factor and thermal efficiency
//! - **Facilities** ([`facility`]) - Facility inputs, validation, cost terms and the derived record
//! - **File I/O** ([`io`]) - Reading facility tables from CSV and TOML
//!
//! Nothing in this module reads shared state: every derived quantity is a pure function of
//! a [`facility::input::FacilityInput`] and an explicit
//! [`IndustryParameters`](crate::engine::industry::IndustryParameters) value.

pub mod constants;
pub mod facility;
pub mod finance;
pub mod io;
