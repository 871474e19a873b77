pub mod chart;
pub mod compare;
pub mod list;
pub mod report;

use crate::cli::SourceArgs;
use crate::config::build_config;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use levelized::core::io::table::FacilityTable;
use levelized::engine::progress::ProgressReporter;
use levelized::workflows::evaluate::{self, Evaluation};
use tracing::info;

/// Loads the facility table named by `source` and evaluates it under the merged
/// configuration. Skipped facilities are summarized on stderr.
pub(crate) fn evaluate_sources(source: &SourceArgs, show_progress: bool) -> Result<Evaluation> {
    let app_config = build_config(source)?;

    info!("Loading facility table from {:?}", &app_config.input_path);
    let table =
        FacilityTable::load(&app_config.input_path).map_err(|e| CliError::FileParsing {
            path: app_config.input_path.clone(),
            source: e.into(),
        })?;

    let progress_handler = CliProgressHandler::new(show_progress);
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    let evaluation = evaluate::run(
        &table,
        &app_config.parameters,
        app_config.failure_policy,
        &reporter,
    )?;

    if !evaluation.is_complete() {
        eprintln!(
            "⚠️  {} of {} facilities were skipped as invalid.",
            evaluation.rejected.len(),
            table.len()
        );
        if !show_progress {
            for rejection in &evaluation.rejected {
                eprintln!("  - {}: {}", rejection.name, rejection.error);
            }
        }
    }

    Ok(evaluation)
}
