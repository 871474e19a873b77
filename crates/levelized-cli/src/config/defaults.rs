use levelized::engine::industry::{DEFAULT_INTEREST_RATE_PERCENT, DEFAULT_LOAN_PERIOD_YEARS};
use levelized::workflows::evaluate::FailurePolicy;

pub struct DefaultsConfig {
    pub interest_rate: f64,
    pub loan_period: f64,
    pub co2_tax_rate: f64,
    pub land_tax_rate: f64,
    pub failure_policy: FailurePolicy,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            interest_rate: DEFAULT_INTEREST_RATE_PERCENT,
            loan_period: DEFAULT_LOAN_PERIOD_YEARS,
            co2_tax_rate: 0.0,
            land_tax_rate: 0.0,
            failure_policy: FailurePolicy::Halt,
        }
    }
}
