use crate::core::facility::facility::Facility;
use crate::core::io::table::FacilityTable;
use crate::engine::error::EngineError;
use crate::engine::industry::IndustryParameters;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::registry::FacilityRegistry;
use tracing::{info, instrument, warn};

/// What to do when one facility definition fails to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Abort the whole evaluation with the first error.
    #[default]
    Halt,
    /// Record the failure and carry on with the remaining facilities.
    Skip,
}

/// A facility definition that was skipped, with the reason.
#[derive(Debug)]
pub struct Rejection {
    pub name: String,
    pub error: EngineError,
}

#[derive(Debug)]
pub struct Evaluation {
    pub parameters: IndustryParameters,
    pub registry: FacilityRegistry,
    pub rejected: Vec<Rejection>,
}

impl Evaluation {
    pub fn is_complete(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Builds every facility of `table` under `parameters`, in table order, and registers the
/// ones that succeed into a fresh registry.
///
/// # Errors
///
/// With [`FailurePolicy::Halt`], returns [`EngineError::Facility`] wrapping the first
/// failure. With [`FailurePolicy::Skip`] this function does not fail; failures are
/// collected in [`Evaluation::rejected`].
#[instrument(skip_all, name = "evaluation_workflow", fields(facilities = table.len()))]
pub fn run(
    table: &FacilityTable,
    parameters: &IndustryParameters,
    policy: FailurePolicy,
    reporter: &ProgressReporter,
) -> Result<Evaluation, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Evaluating facilities",
    });
    info!(
        interest = parameters.interest_rate_percent(),
        loan_period = parameters.loan_period_years(),
        co2_tax = parameters.co2_tax_rate(),
        land_tax = parameters.land_tax_rate(),
        "Evaluating {} facilities.",
        table.len()
    );

    reporter.report(Progress::TaskStart {
        total_steps: table.len() as u64,
    });

    let mut registry = FacilityRegistry::new();
    let mut rejected = Vec::new();

    for input in table {
        let name = input.display_name();
        match Facility::new(input, parameters) {
            Ok(facility) => {
                registry.register(facility);
            }
            Err(error) => match policy {
                FailurePolicy::Halt => {
                    reporter.report(Progress::TaskFinish);
                    reporter.report(Progress::PhaseFinish);
                    return Err(EngineError::Facility {
                        name,
                        source: Box::new(error),
                    });
                }
                FailurePolicy::Skip => {
                    warn!("Skipping facility '{}': {}", name, error);
                    reporter.report(Progress::Message(format!("Skipped '{}': {}", name, error)));
                    rejected.push(Rejection { name, error });
                }
            },
        }
        reporter.report(Progress::TaskIncrement);
    }

    reporter.report(Progress::TaskFinish);
    reporter.report(Progress::PhaseFinish);

    info!(
        "Evaluation complete: {} registered, {} rejected.",
        registry.len(),
        rejected.len()
    );

    Ok(Evaluation {
        parameters: *parameters,
        registry,
        rejected,
    })
}
