use super::constants::BTU_PER_KWH_PERFECT;
use crate::engine::error::IndeterminateError;

/// Computes the capital recovery factor `i(1+i)^n / ((1+i)^n - 1)`.
///
/// Evaluated as `i / (1 - (1+i)^-n)` through `ln_1p`/`exp_m1`, so the result tends to `i`
/// for long loan periods instead of overflowing.
///
/// # Arguments
///
/// * `interest_fraction` - The interest (discount) rate as a fraction, e.g. `0.1` for 10%.
/// * `loan_period_years` - The amortization period in years.
///
/// # Errors
///
/// Returns [`IndeterminateError::UndefinedCapitalRecovery`] when the annuity denominator is
/// zero, which happens for a zero interest rate or a zero-length loan period.
pub fn capital_recovery_factor(
    interest_fraction: f64,
    loan_period_years: f64,
) -> Result<f64, IndeterminateError> {
    let undefined = IndeterminateError::UndefinedCapitalRecovery {
        interest_fraction,
        loan_period_years,
    };
    if interest_fraction == 0.0 {
        return Err(undefined);
    }
    // 1 - (1+i)^-n
    let denominator = -(-loan_period_years * interest_fraction.ln_1p()).exp_m1();
    if denominator == 0.0 || !denominator.is_finite() {
        return Err(undefined);
    }
    let crf = interest_fraction / denominator;
    if crf.is_finite() { Ok(crf) } else { Err(undefined) }
}

/// Thermal efficiency implied by a heat rate in BTU/kWh, or `0.0` when no heat rate is known.
#[inline]
pub fn thermal_efficiency(heat_rate: Option<f64>) -> f64 {
    match heat_rate {
        Some(rate) if rate > 0.0 => BTU_PER_KWH_PERFECT / rate,
        _ => 0.0,
    }
}
