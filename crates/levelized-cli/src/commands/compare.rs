use super::evaluate_sources;
use crate::cli::SourceArgs;
use crate::error::Result;
use crate::report;
use tracing::info;

pub fn run(args: SourceArgs, show_progress: bool) -> Result<()> {
    let evaluation = evaluate_sources(&args, show_progress)?;
    let ranked = evaluation.registry.compare_all();
    info!("Ranking {} facilities.", ranked.len());

    if ranked.is_empty() {
        println!("No facilities to compare.");
    } else {
        print!("{}", report::comparison_table(&ranked));
    }
    Ok(())
}
