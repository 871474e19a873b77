use super::evaluate_sources;
use crate::chart;
use crate::cli::ChartArgs;
use crate::error::{CliError, Result};
use tracing::warn;

pub fn run(args: ChartArgs, show_progress: bool) -> Result<()> {
    if args.width == 0 {
        return Err(CliError::Argument(
            "Chart width must be at least 1.".to_string(),
        ));
    }

    let evaluation = evaluate_sources(&args.source, show_progress)?;
    let facility = evaluation.registry.find(&args.name).ok_or_else(|| {
        CliError::Argument(format!("No facility named '{}' was evaluated.", args.name))
    })?;

    match facility.chart_slices() {
        Ok(slices) => {
            let title = format!(
                "{} - ${:.2}/MWh",
                facility.name(),
                facility.levelized_cost_per_mwh()
            );
            print!("{}", chart::render_bars(&title, &slices, args.width));
        }
        Err(e) => {
            warn!("Nothing to chart for '{}': {}", facility.name(), e);
            println!("Nothing to render for '{}': {}", facility.name(), e);
        }
    }
    Ok(())
}
