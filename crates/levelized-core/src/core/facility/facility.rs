use super::input::FacilityInput;
use super::terms::{CostTerms, TermKind};
use super::validation::validate;
use crate::core::constants::KWH_PER_MWH;
use crate::core::finance::{capital_recovery_factor, thermal_efficiency};
use crate::engine::error::{EngineError, IndeterminateError};
use crate::engine::industry::IndustryParameters;
use tracing::{debug, trace};

/// A fully derived valuation record for one energy source.
///
/// All derived values are computed once in [`Facility::new`] from the inputs and the
/// industry parameters in force at that moment.
#[derive(Debug, Clone, PartialEq)]
pub struct Facility {
    name: String,
    input: FacilityInput,
    interest_fraction: f64,
    loan_period_years: f64,
    capital_recovery_factor: f64,
    efficiency: f64,
    terms: CostTerms,
    levelized_cost_per_kwh: f64,
    levelized_cost_per_mwh: f64,
}

impl Facility {
    /// Validates `input` and derives every quantity under `industry`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Validation`] for the first violated input constraint, or
    /// [`EngineError::Indeterminate`] if the capital recovery factor is undefined.
    pub fn new(input: &FacilityInput, industry: &IndustryParameters) -> Result<Self, EngineError> {
        let name = validate(input)?.to_string();

        let interest_fraction = industry.interest_fraction();
        let loan_period_years = industry.loan_period_years();
        let crf = capital_recovery_factor(interest_fraction, loan_period_years)?;
        trace!(facility = %name, crf, "Computed capital recovery factor.");

        let terms = CostTerms::compute(
            input,
            crf,
            industry.co2_tax_rate(),
            industry.land_tax_rate(),
        );
        let levelized_cost_per_kwh = terms.total();
        let levelized_cost_per_mwh = levelized_cost_per_kwh * KWH_PER_MWH;

        debug!(
            facility = %name,
            lcoe_per_mwh = levelized_cost_per_mwh,
            "Facility valuation complete."
        );

        Ok(Self {
            name,
            input: input.clone(),
            interest_fraction,
            loan_period_years,
            capital_recovery_factor: crf,
            efficiency: thermal_efficiency(input.heat_rate),
            terms,
            levelized_cost_per_kwh,
            levelized_cost_per_mwh,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw inputs this facility was built from.
    pub fn input(&self) -> &FacilityInput {
        &self.input
    }

    pub fn capacity(&self) -> Option<f64> {
        self.input.capacity
    }

    pub fn capacity_factor(&self) -> Option<f64> {
        self.input.capacity_factor
    }

    pub fn capital_cost(&self) -> Option<f64> {
        self.input.capital_cost
    }

    pub fn f_o_and_m(&self) -> Option<f64> {
        self.input.f_o_and_m
    }

    pub fn v_o_and_m(&self) -> Option<f64> {
        self.input.v_o_and_m
    }

    pub fn fuel_cost(&self) -> Option<f64> {
        self.input.fuel_cost
    }

    pub fn heat_rate(&self) -> Option<f64> {
        self.input.heat_rate
    }

    pub fn co2_rate(&self) -> Option<f64> {
        self.input.co2_rate
    }

    pub fn land_rate(&self) -> Option<f64> {
        self.input.land_rate
    }

    pub fn subsidy(&self) -> Option<f64> {
        self.input.subsidy
    }

    pub fn interest_fraction(&self) -> f64 {
        self.interest_fraction
    }

    pub fn loan_period_years(&self) -> f64 {
        self.loan_period_years
    }

    pub fn capital_recovery_factor(&self) -> f64 {
        self.capital_recovery_factor
    }

    /// Thermal efficiency in `(0, 1)`, or `0.0` without a heat rate.
    pub fn efficiency(&self) -> f64 {
        self.efficiency
    }

    pub fn terms(&self) -> &CostTerms {
        &self.terms
    }

    pub fn term(&self, kind: TermKind) -> f64 {
        self.terms.get(kind)
    }

    /// $/kWh
    pub fn levelized_cost_per_kwh(&self) -> f64 {
        self.levelized_cost_per_kwh
    }

    /// $/MWh
    pub fn levelized_cost_per_mwh(&self) -> f64 {
        self.levelized_cost_per_mwh
    }

    /// Actual average power output in MW, when both capacity and capacity factor are known.
    pub fn average_power_mw(&self) -> Option<f64> {
        Some(self.input.capacity? * self.input.capacity_factor?)
    }

    /// Each cost term as a percentage of the levelized cost.
    pub fn cost_shares(&self) -> Result<Vec<(TermKind, f64)>, IndeterminateError> {
        self.terms.shares()
    }

    /// The non-zero cost terms for proportional rendering, or
    /// [`IndeterminateError::ZeroTotalCost`] when there is nothing to render.
    pub fn chart_slices(&self) -> Result<Vec<(TermKind, f64)>, IndeterminateError> {
        self.terms.chart_slices()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::facility::input::NameValue;
    use crate::engine::error::ValidationError;

    fn round_to(value: f64, places: i32) -> f64 {
        let factor = 10f64.powi(places);
        (value * factor).round() / factor
    }

    fn industry(interest: f64, years: f64) -> IndustryParameters {
        IndustryParameters::new()
            .with_interest(interest)
            .and_then(|p| p.with_loan_period(years))
            .unwrap()
    }

    fn coal() -> FacilityInput {
        FacilityInput {
            name: NameValue::from("Coal"),
            capacity: Some(650.0),
            capacity_factor: Some(0.475),
            capital_cost: Some(3636.0),
            f_o_and_m: Some(42.1),
            v_o_and_m: Some(4.6),
            fuel_cost: Some(1.95),
            heat_rate: Some(8800.0),
            ..Default::default()
        }
    }

    fn natural_gas() -> FacilityInput {
        FacilityInput {
            name: NameValue::from("Natural Gas"),
            capacity: Some(702.0),
            capacity_factor: Some(0.568),
            capital_cost: Some(978.0),
            f_o_and_m: Some(11.0),
            v_o_and_m: Some(3.5),
            fuel_cost: Some(3.95),
            heat_rate: Some(6600.0),
            ..Default::default()
        }
    }

    #[test]
    fn coal_end_to_end_at_ten_percent_over_thirty_five_years() {
        let plant = Facility::new(&coal(), &industry(10.0, 35.0)).unwrap();
        assert_eq!(round_to(plant.capital_recovery_factor(), 5), 0.10369);
        assert_eq!(round_to(plant.levelized_cost_per_mwh(), 2), 122.48);
        assert_eq!(plant.interest_fraction(), 0.1);
        assert_eq!(plant.loan_period_years(), 35.0);
    }

    #[test]
    fn reference_plants_match_known_levelized_costs() {
        let mut coal = coal();
        coal.heat_rate = Some(10000.0);
        let coal = Facility::new(&coal, &industry(10.0, 20.0)).unwrap();
        assert_eq!(round_to(coal.capital_recovery_factor(), 3), 0.117);
        assert_eq!(round_to(coal.efficiency(), 3), 0.341);
        assert_eq!(round_to(coal.levelized_cost_per_mwh(), 2), 136.86);

        let gas = Facility::new(&natural_gas(), &industry(20.0, 30.0)).unwrap();
        assert_eq!(round_to(gas.capital_recovery_factor(), 3), 0.201);
        assert_eq!(round_to(gas.efficiency(), 3), 0.517);
        assert_eq!(round_to(gas.levelized_cost_per_mwh(), 2), 71.26);
    }

    #[test]
    fn levelized_cost_is_the_sum_of_its_terms() {
        let mut input = coal();
        input.co2_rate = Some(205.0);
        input.land_rate = Some(2.5);
        input.subsidy = Some(0.01);
        let params = industry(8.0, 30.0)
            .with_co2_tax(0.05)
            .and_then(|p| p.with_land_tax(1.5))
            .unwrap();
        let plant = Facility::new(&input, &params).unwrap();

        let summed = plant.terms().total();
        assert_eq!(plant.levelized_cost_per_kwh(), summed);
        assert_eq!(plant.levelized_cost_per_mwh(), summed * 1000.0);
        assert!(plant.term(TermKind::Co2Tax) > 0.0);
        assert!(plant.term(TermKind::LandTax) > 0.0);
        assert_eq!(plant.term(TermKind::Subsidy), -0.01);
    }

    #[test]
    fn missing_fuel_cost_zeroes_only_the_fuel_term() {
        let params = industry(10.0, 35.0);
        let fuelled = Facility::new(&coal(), &params).unwrap();
        let mut input = coal();
        input.fuel_cost = None;
        let unfuelled = Facility::new(&input, &params).unwrap();

        assert_eq!(unfuelled.term(TermKind::Fuel), 0.0);
        assert_eq!(
            unfuelled.term(TermKind::Capital),
            fuelled.term(TermKind::Capital)
        );
        assert!(unfuelled.levelized_cost_per_kwh() < fuelled.levelized_cost_per_kwh());
    }

    #[test]
    fn facility_without_costs_has_no_shares_to_report() {
        let plant = Facility::new(&FacilityInput::named("Empty"), &industry(5.0, 20.0)).unwrap();
        assert_eq!(plant.levelized_cost_per_kwh(), 0.0);
        assert_eq!(plant.efficiency(), 0.0);
        assert_eq!(plant.cost_shares(), Err(IndeterminateError::ZeroTotalCost));
        assert_eq!(plant.chart_slices(), Err(IndeterminateError::ZeroTotalCost));
    }

    #[test]
    fn invalid_input_fails_construction_with_parameter() {
        let mut input = coal();
        input.capacity_factor = Some(1.0);
        let err = Facility::new(&input, &industry(10.0, 35.0)).unwrap_err();
        match err {
            EngineError::Validation(v) => assert_eq!(v.parameter(), "capacity_factor"),
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn average_power_needs_capacity_and_capacity_factor() {
        let plant = Facility::new(&coal(), &IndustryParameters::default()).unwrap();
        assert!((plant.average_power_mw().unwrap() - 308.75).abs() < 1e-9);

        let mut input = coal();
        input.capacity = None;
        let plant = Facility::new(&input, &IndustryParameters::default()).unwrap();
        assert!(plant.average_power_mw().is_none());
    }

    #[test]
    fn very_long_loan_period_values_capital_at_the_interest_rate() {
        let plant = Facility::new(&coal(), &industry(10.0, 8000.0)).unwrap();
        assert!((plant.capital_recovery_factor() - 0.1).abs() < 1e-12);
        assert!(plant.levelized_cost_per_mwh().is_finite());
        assert!(plant.cost_shares().is_ok());
    }

    #[test]
    fn later_parameter_changes_do_not_touch_existing_facility() {
        let mut params = industry(10.0, 35.0);
        let plant = Facility::new(&coal(), &params).unwrap();
        let before = plant.levelized_cost_per_mwh();
        params.set_interest(2.0).unwrap();
        assert_eq!(plant.levelized_cost_per_mwh(), before);
        assert_eq!(plant.interest_fraction(), 0.1);
    }

    #[test]
    fn raw_inputs_are_exposed_read_only() {
        let plant = Facility::new(&coal(), &IndustryParameters::default()).unwrap();
        assert_eq!(plant.name(), "Coal");
        assert_eq!(plant.capacity(), Some(650.0));
        assert_eq!(plant.heat_rate(), Some(8800.0));
        assert!(plant.subsidy().is_none());
        assert_eq!(plant.input(), &coal());
    }

    #[test]
    fn non_string_name_is_reported_rendered() {
        let input = FacilityInput {
            name: NameValue::Float(3.5),
            ..Default::default()
        };
        let err = Facility::new(&input, &IndustryParameters::default()).unwrap_err();
        assert!(matches!(
            err,
            EngineError::Validation(ValidationError::NameNotString { ref rendered }) if rendered == "3.5"
        ));
    }
}
