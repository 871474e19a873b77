use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "LCOE CLI - Compute and compare the levelized cost of energy of electricity-generating facilities.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output and progress display
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a detailed report for each facility.
    Report(ReportArgs),
    /// Rank all facilities by levelized cost, cheapest first.
    Compare(SourceArgs),
    /// List all facilities in the order they were defined.
    List(SourceArgs),
    /// Draw a proportional chart of one facility's cost breakdown.
    Chart(ChartArgs),
}

/// Where facilities come from and the industry parameters they are valued under.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Path to the facility table (.csv or .toml).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Industry Overrides ---
    /// Override the industry interest rate, in percent.
    #[arg(long, value_name = "PERCENT")]
    pub interest: Option<f64>,

    /// Override the industry loan period, in years.
    #[arg(long, value_name = "YEARS")]
    pub loan_period: Option<f64>,

    /// Override the CO2 tax rate ($ per unit mass of CO2).
    #[arg(long, value_name = "RATE")]
    pub co2_tax: Option<f64>,

    /// Override the land tax rate ($ per unit area).
    #[arg(long, value_name = "RATE")]
    pub land_tax: Option<f64>,

    /// Skip facilities that fail validation instead of aborting.
    #[arg(long)]
    pub skip_invalid: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S industry.interest-rate=7.5
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

#[derive(Args, Debug)]
pub struct ReportArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Only report the facility with this name.
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// Which section of the report to print.
    #[arg(long, value_enum, default_value_t = Section::All)]
    pub section: Section,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Info,
    Inputs,
    Power,
    Fuel,
    Costs,
    All,
}

#[derive(Args, Debug)]
pub struct ChartArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// The facility to chart.
    #[arg(short, long, required = true, value_name = "NAME")]
    pub name: String,

    /// Width of the longest bar, in characters.
    #[arg(long, default_value_t = 40, value_name = "COLUMNS")]
    pub width: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_compare_with_overrides() {
        let cli = Cli::parse_from([
            "lcoe",
            "compare",
            "-i",
            "sources.csv",
            "--interest",
            "10",
            "--loan-period",
            "35",
            "-S",
            "industry.co2-tax-rate=20",
        ]);
        let Commands::Compare(args) = cli.command else {
            panic!("Expected 'compare' subcommand");
        };
        assert_eq!(args.input, PathBuf::from("sources.csv"));
        assert_eq!(args.interest, Some(10.0));
        assert_eq!(args.loan_period, Some(35.0));
        assert_eq!(args.set_values, vec!["industry.co2-tax-rate=20"]);
        assert!(!args.skip_invalid);
    }

    #[test]
    fn parses_report_section_and_global_flags() {
        let cli = Cli::parse_from([
            "lcoe", "-vv", "report", "-i", "s.toml", "--section", "costs", "--name", "Coal",
        ]);
        assert_eq!(cli.verbose, 2);
        let Commands::Report(args) = cli.command else {
            panic!("Expected 'report' subcommand");
        };
        assert_eq!(args.section, Section::Costs);
        assert_eq!(args.name.as_deref(), Some("Coal"));
    }

    #[test]
    fn parses_inputs_section() {
        let cli = Cli::parse_from(["lcoe", "report", "-i", "s.csv", "--section", "inputs"]);
        let Commands::Report(args) = cli.command else {
            panic!("Expected 'report' subcommand");
        };
        assert_eq!(args.section, Section::Inputs);
    }

    #[test]
    fn chart_requires_a_name() {
        let result = Cli::try_parse_from(["lcoe", "chart", "-i", "s.csv"]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["lcoe", "-q", "-v", "list", "-i", "s.csv"]);
        assert!(result.is_err());
    }
}
