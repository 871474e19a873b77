use super::input::{FacilityInput, NameValue};
use crate::core::constants::BTU_PER_KWH_PERFECT;
use crate::engine::error::{Constraint, ValidationError};

/// Checks a value against a constraint.
///
/// Non-finite values never pass: they are reported against [`Constraint::Finite`]
/// whichever constraint was requested.
pub fn check(
    parameter: &'static str,
    value: f64,
    constraint: Constraint,
) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::OutOfRange {
            parameter,
            value,
            constraint: Constraint::Finite,
        });
    }
    let ok = match constraint {
        Constraint::Finite => true,
        Constraint::NonNegative => value >= 0.0,
        Constraint::Positive => value > 0.0,
        Constraint::OpenUnitInterval => value > 0.0 && value < 1.0,
        Constraint::AboveThermalLimit => value > BTU_PER_KWH_PERFECT,
    };
    if ok {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            parameter,
            value,
            constraint,
        })
    }
}

fn check_optional(
    parameter: &'static str,
    value: Option<f64>,
    constraint: Constraint,
) -> Result<(), ValidationError> {
    value.map_or(Ok(()), |v| check(parameter, v, constraint))
}

/// Validates the facility name, returning it as text.
pub fn validate_name(name: &NameValue) -> Result<&str, ValidationError> {
    match name {
        NameValue::Text(text) if text.trim().is_empty() => Err(ValidationError::EmptyName),
        NameValue::Text(text) => Ok(text),
        other => Err(ValidationError::NameNotString {
            rendered: other.to_string(),
        }),
    }
}

/// Runs every construction check in order and reports the first failure.
///
/// Returns the validated name.
pub fn validate(input: &FacilityInput) -> Result<&str, ValidationError> {
    let name = validate_name(&input.name)?;
    check_optional("capacity", input.capacity, Constraint::NonNegative)?;
    check_optional(
        "capacity_factor",
        input.capacity_factor,
        Constraint::OpenUnitInterval,
    )?;
    check_optional("heat_rate", input.heat_rate, Constraint::AboveThermalLimit)?;
    check_optional("co2_rate", input.co2_rate, Constraint::NonNegative)?;
    check_optional("land_rate", input.land_rate, Constraint::Positive)?;
    check_optional("subsidy", input.subsidy, Constraint::NonNegative)?;
    check_optional("capital_cost", input.capital_cost, Constraint::Finite)?;
    check_optional("f_o_and_m", input.f_o_and_m, Constraint::Finite)?;
    check_optional("v_o_and_m", input.v_o_and_m, Constraint::Finite)?;
    check_optional("fuel_cost", input.fuel_cost, Constraint::Finite)?;
    Ok(name)
}
