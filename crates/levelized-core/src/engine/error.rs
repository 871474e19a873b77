use crate::core::io::table::LoadError;
use std::fmt;
use thiserror::Error;

/// The rule a rejected value failed to satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Any finite value; NaN and infinities are rejected.
    Finite,
    /// `value >= 0`
    NonNegative,
    /// `value > 0`
    Positive,
    /// `0 < value < 1`
    OpenUnitInterval,
    /// `value > 3412.14148` BTU/kWh, the heat rate of a perfectly efficient plant.
    AboveThermalLimit,
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Finite => f.write_str("a finite number"),
            Constraint::NonNegative => f.write_str("greater than or equal to 0"),
            Constraint::Positive => f.write_str("greater than 0"),
            Constraint::OpenUnitInterval => f.write_str("strictly between 0 and 1"),
            Constraint::AboveThermalLimit => {
                f.write_str("greater than 3412.14148 BTU/kWh (100% thermal efficiency)")
            }
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Facility name must be a string, got '{rendered}'")]
    NameNotString { rendered: String },

    #[error("Facility name must not be empty")]
    EmptyName,

    #[error("Invalid value for '{parameter}': {value} (must be {constraint})")]
    OutOfRange {
        parameter: &'static str,
        value: f64,
        constraint: Constraint,
    },
}

impl ValidationError {
    /// The name of the offending parameter.
    pub fn parameter(&self) -> &'static str {
        match self {
            ValidationError::NameNotString { .. } | ValidationError::EmptyName => "name",
            ValidationError::OutOfRange { parameter, .. } => *parameter,
        }
    }
}

/// A derived ratio whose denominator is zero although every input was individually legal.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum IndeterminateError {
    #[error(
        "Capital recovery factor is undefined for interest {interest_fraction} over {loan_period_years} years"
    )]
    UndefinedCapitalRecovery {
        interest_fraction: f64,
        loan_period_years: f64,
    },

    #[error("Levelized cost is zero; there is no data to report")]
    ZeroTotalCost,
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Computation is indeterminate: {0}")]
    Indeterminate(#[from] IndeterminateError),

    #[error("Failed to load facility table: {0}")]
    Load(#[from] LoadError),

    #[error("Facility '{name}' failed: {source}")]
    Facility {
        name: String,
        #[source]
        source: Box<EngineError>,
    },
}
