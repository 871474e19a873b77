use super::evaluate_sources;
use crate::cli::{ReportArgs, Section};
use crate::error::{CliError, Result};
use crate::report;
use levelized::core::facility::facility::Facility;

fn render(facility: &Facility, section: Section) -> String {
    match section {
        Section::Info => report::general_info(facility),
        Section::Inputs => report::input_properties(facility),
        Section::Power => report::power_info(facility),
        Section::Fuel => report::fuel_info(facility),
        Section::Costs => report::cost_distribution(facility),
        Section::All => [
            report::general_info(facility),
            report::input_properties(facility),
            report::power_info(facility),
            report::fuel_info(facility),
            report::cost_distribution(facility),
        ]
        .concat(),
    }
}

pub fn run(args: ReportArgs, show_progress: bool) -> Result<()> {
    let evaluation = evaluate_sources(&args.source, show_progress)?;

    match &args.name {
        Some(name) => {
            let facility = evaluation.registry.find(name).ok_or_else(|| {
                CliError::Argument(format!("No facility named '{}' was evaluated.", name))
            })?;
            print!("{}", render(facility, args.section));
        }
        None => {
            for facility in &evaluation.registry {
                print!("{}", render(facility, args.section));
            }
        }
    }
    Ok(())
}
