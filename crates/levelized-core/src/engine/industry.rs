use super::error::{Constraint, ValidationError};
use crate::core::facility::validation::check;
use tracing::debug;

pub const DEFAULT_INTEREST_RATE_PERCENT: f64 = 5.0;
pub const DEFAULT_LOAN_PERIOD_YEARS: f64 = 20.0;

/// Industry-wide finance and tax parameters applied to every facility built under them.
///
/// Fields are private so that every value held here has passed its setter's check. A
/// facility copies what it needs at construction; changing these values afterwards does
/// not affect facilities that already exist.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndustryParameters {
    interest_rate_percent: f64,
    loan_period_years: f64,
    co2_tax_rate: f64,
    land_tax_rate: f64,
}

impl Default for IndustryParameters {
    fn default() -> Self {
        Self {
            interest_rate_percent: DEFAULT_INTEREST_RATE_PERCENT,
            loan_period_years: DEFAULT_LOAN_PERIOD_YEARS,
            co2_tax_rate: 0.0,
            land_tax_rate: 0.0,
        }
    }
}

impl IndustryParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn interest_rate_percent(&self) -> f64 {
        self.interest_rate_percent
    }

    /// The interest rate as a fraction, e.g. `0.05` for 5%.
    pub fn interest_fraction(&self) -> f64 {
        self.interest_rate_percent / 100.0
    }

    pub fn loan_period_years(&self) -> f64 {
        self.loan_period_years
    }

    /// $ per unit mass of CO2.
    pub fn co2_tax_rate(&self) -> f64 {
        self.co2_tax_rate
    }

    /// $ per unit area.
    pub fn land_tax_rate(&self) -> f64 {
        self.land_tax_rate
    }

    pub fn set_interest(&mut self, percent: f64) -> Result<(), ValidationError> {
        check("interest_rate", percent, Constraint::Positive)?;
        debug!(old = self.interest_rate_percent, new = percent, "Updating industry interest rate.");
        self.interest_rate_percent = percent;
        Ok(())
    }

    pub fn set_loan_period(&mut self, years: f64) -> Result<(), ValidationError> {
        check("loan_period", years, Constraint::Positive)?;
        debug!(old = self.loan_period_years, new = years, "Updating industry loan period.");
        self.loan_period_years = years;
        Ok(())
    }

    pub fn set_co2_tax(&mut self, rate: f64) -> Result<(), ValidationError> {
        check("co2_tax_rate", rate, Constraint::NonNegative)?;
        debug!(old = self.co2_tax_rate, new = rate, "Updating industry CO2 tax rate.");
        self.co2_tax_rate = rate;
        Ok(())
    }

    pub fn set_land_tax(&mut self, rate: f64) -> Result<(), ValidationError> {
        check("land_tax_rate", rate, Constraint::NonNegative)?;
        debug!(old = self.land_tax_rate, new = rate, "Updating industry land tax rate.");
        self.land_tax_rate = rate;
        Ok(())
    }

    /// Chainable form of [`set_interest`](Self::set_interest).
    pub fn with_interest(mut self, percent: f64) -> Result<Self, ValidationError> {
        self.set_interest(percent)?;
        Ok(self)
    }

    /// Chainable form of [`set_loan_period`](Self::set_loan_period).
    pub fn with_loan_period(mut self, years: f64) -> Result<Self, ValidationError> {
        self.set_loan_period(years)?;
        Ok(self)
    }

    /// Chainable form of [`set_co2_tax`](Self::set_co2_tax).
    pub fn with_co2_tax(mut self, rate: f64) -> Result<Self, ValidationError> {
        self.set_co2_tax(rate)?;
        Ok(self)
    }

    /// Chainable form of [`set_land_tax`](Self::set_land_tax).
    pub fn with_land_tax(mut self, rate: f64) -> Result<Self, ValidationError> {
        self.set_land_tax(rate)?;
        Ok(self)
    }
}
