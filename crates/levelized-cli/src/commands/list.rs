use super::evaluate_sources;
use crate::cli::SourceArgs;
use crate::error::Result;
use crate::report;

pub fn run(args: SourceArgs, show_progress: bool) -> Result<()> {
    let evaluation = evaluate_sources(&args, show_progress)?;
    let listed = evaluation.registry.list_all();

    if listed.is_empty() {
        println!("No facilities defined.");
    } else {
        print!("{}", report::listing(&listed));
    }
    Ok(())
}
