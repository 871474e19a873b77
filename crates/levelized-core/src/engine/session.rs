use super::error::{EngineError, ValidationError};
use super::industry::IndustryParameters;
use super::registry::{FacilityRegistry, ListedFacility, RankedFacility};
use crate::core::facility::facility::Facility;
use crate::core::facility::input::FacilityInput;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct SessionState {
    parameters: IndustryParameters,
    registry: FacilityRegistry,
}

/// Industry parameters and a facility registry behind a single lock.
///
/// Parameter updates and "read parameters, build, register" are each performed as one
/// critical section, so a facility never observes a half-applied update and concurrent
/// builds append to the registry one at a time.
#[derive(Debug, Default)]
pub struct SharedIndustry {
    state: Mutex<SessionState>,
}

impl SharedIndustry {
    pub fn new(parameters: IndustryParameters) -> Self {
        Self {
            state: Mutex::new(SessionState {
                parameters,
                registry: FacilityRegistry::new(),
            }),
        }
    }

    // Every mutation validates before writing, so a poisoned lock still guards
    // consistent state.
    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn parameters(&self) -> IndustryParameters {
        self.lock().parameters
    }

    pub fn set_interest(&self, percent: f64) -> Result<(), ValidationError> {
        self.lock().parameters.set_interest(percent)
    }

    pub fn set_loan_period(&self, years: f64) -> Result<(), ValidationError> {
        self.lock().parameters.set_loan_period(years)
    }

    pub fn set_co2_tax(&self, rate: f64) -> Result<(), ValidationError> {
        self.lock().parameters.set_co2_tax(rate)
    }

    pub fn set_land_tax(&self, rate: f64) -> Result<(), ValidationError> {
        self.lock().parameters.set_land_tax(rate)
    }

    /// Builds a facility under the current parameters and registers it.
    ///
    /// Returns a copy of the registered facility. On failure nothing is registered.
    pub fn build_facility(&self, input: &FacilityInput) -> Result<Facility, EngineError> {
        let mut state = self.lock();
        let facility = Facility::new(input, &state.parameters)?;
        state.registry.register(facility.clone());
        Ok(facility)
    }

    pub fn compare_all(&self) -> Vec<RankedFacility> {
        self.lock().registry.compare_all()
    }

    pub fn list_all(&self) -> Vec<ListedFacility> {
        self.lock().registry.list_all()
    }

    pub fn len(&self) -> usize {
        self.lock().registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().registry.is_empty()
    }

    pub fn reset(&self) {
        self.lock().registry.reset();
    }

    /// A point-in-time copy of the registry.
    pub fn snapshot(&self) -> FacilityRegistry {
        self.lock().registry.clone()
    }

    pub fn into_registry(self) -> FacilityRegistry {
        self.state
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .registry
    }
}
