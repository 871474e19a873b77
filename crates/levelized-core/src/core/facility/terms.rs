use super::input::FacilityInput;
use crate::core::constants::{
    BTU_PER_MMBTU, HOURS_PER_YEAR, KW_PER_W, KWH_PER_MMBTU, KWH_PER_MWH,
};
use crate::engine::error::IndeterminateError;
use std::fmt;

/// Identifies one of the seven components of the levelized cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermKind {
    Capital,
    FixedOm,
    VariableOm,
    Fuel,
    Co2Tax,
    LandTax,
    Subsidy,
}

impl TermKind {
    pub const ALL: [TermKind; 7] = [
        TermKind::Capital,
        TermKind::FixedOm,
        TermKind::VariableOm,
        TermKind::Fuel,
        TermKind::Co2Tax,
        TermKind::LandTax,
        TermKind::Subsidy,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TermKind::Capital => "Capital term",
            TermKind::FixedOm => "Fixed term",
            TermKind::VariableOm => "Variable term",
            TermKind::Fuel => "Fuel term",
            TermKind::Co2Tax => "CO2 tax term",
            TermKind::LandTax => "Land tax term",
            TermKind::Subsidy => "Subsidy term",
        }
    }
}

impl fmt::Display for TermKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// `capital_cost * CRF / (8760 * capacity_factor)`
#[inline]
pub fn capital_term(capital_cost: Option<f64>, capacity_factor: Option<f64>, crf: f64) -> f64 {
    match (capital_cost, capacity_factor) {
        (Some(cost), Some(cf)) => cost * crf / (HOURS_PER_YEAR * cf),
        _ => 0.0,
    }
}

/// `f_o_and_m / (8760 * capacity_factor)`
#[inline]
pub fn fixed_term(f_o_and_m: Option<f64>, capacity_factor: Option<f64>) -> f64 {
    match (f_o_and_m, capacity_factor) {
        (Some(fixed), Some(cf)) => fixed / (HOURS_PER_YEAR * cf),
        _ => 0.0,
    }
}

/// `v_o_and_m / 1000`
#[inline]
pub fn variable_term(v_o_and_m: Option<f64>) -> f64 {
    v_o_and_m.map_or(0.0, |v| v / KWH_PER_MWH)
}

/// `fuel_cost / 1e6 * heat_rate`
#[inline]
pub fn fuel_term(fuel_cost: Option<f64>, heat_rate: Option<f64>) -> f64 {
    match (fuel_cost, heat_rate) {
        (Some(price), Some(rate)) => price / BTU_PER_MMBTU * rate,
        _ => 0.0,
    }
}

/// `co2_tax_rate * co2_rate / 293.07107`
#[inline]
pub fn co2_tax_term(co2_rate: Option<f64>, co2_tax_rate: f64) -> f64 {
    co2_rate.map_or(0.0, |rate| co2_tax_rate * rate / KWH_PER_MMBTU)
}

/// `land_tax_rate * CRF / (8760 * land_rate * 1e-3)`
#[inline]
pub fn land_tax_term(land_rate: Option<f64>, land_tax_rate: f64, crf: f64) -> f64 {
    land_rate.map_or(0.0, |rate| {
        land_tax_rate * crf / (HOURS_PER_YEAR * rate * KW_PER_W)
    })
}

/// `-subsidy`; never positive.
#[inline]
pub fn subsidy_term(subsidy: Option<f64>) -> f64 {
    subsidy.map_or(0.0, |s| -s)
}

/// The decomposition of a levelized cost into its seven components, in $/kWh.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CostTerms {
    pub capital: f64,
    pub fixed: f64,
    pub variable: f64,
    pub fuel: f64,
    pub co2_tax: f64,
    pub land_tax: f64,
    pub subsidy: f64,
}

impl CostTerms {
    /// Evaluates every term for the given inputs. Each term is zero unless all of its own
    /// inputs are present; the absence of one input never suppresses unrelated terms.
    pub fn compute(input: &FacilityInput, crf: f64, co2_tax_rate: f64, land_tax_rate: f64) -> Self {
        Self {
            capital: capital_term(input.capital_cost, input.capacity_factor, crf),
            fixed: fixed_term(input.f_o_and_m, input.capacity_factor),
            variable: variable_term(input.v_o_and_m),
            fuel: fuel_term(input.fuel_cost, input.heat_rate),
            co2_tax: co2_tax_term(input.co2_rate, co2_tax_rate),
            land_tax: land_tax_term(input.land_rate, land_tax_rate, crf),
            subsidy: subsidy_term(input.subsidy),
        }
    }

    pub fn get(&self, kind: TermKind) -> f64 {
        match kind {
            TermKind::Capital => self.capital,
            TermKind::FixedOm => self.fixed,
            TermKind::VariableOm => self.variable,
            TermKind::Fuel => self.fuel,
            TermKind::Co2Tax => self.co2_tax,
            TermKind::LandTax => self.land_tax,
            TermKind::Subsidy => self.subsidy,
        }
    }

    /// All seven terms in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (TermKind, f64)> + '_ {
        TermKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }

    /// Levelized cost in $/kWh: the sum of all seven terms.
    #[inline]
    pub fn total(&self) -> f64 {
        self.capital
            + self.fixed
            + self.variable
            + self.fuel
            + self.co2_tax
            + self.land_tax
            + self.subsidy
    }

    /// Each term as a percentage of the total.
    ///
    /// # Errors
    ///
    /// Returns [`IndeterminateError::ZeroTotalCost`] when the total is zero.
    pub fn shares(&self) -> Result<Vec<(TermKind, f64)>, IndeterminateError> {
        let total = self.total();
        if total == 0.0 {
            return Err(IndeterminateError::ZeroTotalCost);
        }
        Ok(self
            .iter()
            .map(|(kind, value)| (kind, value / total * 100.0))
            .collect())
    }

    /// The non-zero terms, for proportional rendering.
    ///
    /// # Errors
    ///
    /// Returns [`IndeterminateError::ZeroTotalCost`] when there is nothing to render.
    pub fn chart_slices(&self) -> Result<Vec<(TermKind, f64)>, IndeterminateError> {
        if self.total() == 0.0 {
            return Err(IndeterminateError::ZeroTotalCost);
        }
        Ok(self.iter().filter(|(_, value)| *value != 0.0).collect())
    }
}
