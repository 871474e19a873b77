use super::defaults::DefaultsConfig;
use super::file::{FileConfig, FileOnInvalid};
use super::models::AppConfig;
use crate::cli::SourceArgs;
use crate::error::{CliError, Result};
use levelized::engine::industry::IndustryParameters;
use levelized::workflows::evaluate::FailurePolicy;
use tracing::debug;

/// Merges CLI flags, `--set` values, the config file and built-in defaults, in that order
/// of precedence.
pub fn build_config(args: &SourceArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let industry_file = file_config.industry.take().unwrap_or_default();
    let interest_rate = args
        .interest
        .or(industry_file.interest_rate)
        .unwrap_or(defaults.interest_rate);
    let loan_period = args
        .loan_period
        .or(industry_file.loan_period)
        .unwrap_or(defaults.loan_period);
    let co2_tax_rate = args
        .co2_tax
        .or(industry_file.co2_tax_rate)
        .unwrap_or(defaults.co2_tax_rate);
    let land_tax_rate = args
        .land_tax
        .or(industry_file.land_tax_rate)
        .unwrap_or(defaults.land_tax_rate);

    let parameters = IndustryParameters::new()
        .with_interest(interest_rate)
        .and_then(|p| p.with_loan_period(loan_period))
        .and_then(|p| p.with_co2_tax(co2_tax_rate))
        .and_then(|p| p.with_land_tax(land_tax_rate))
        .map_err(|e| CliError::Config(e.to_string()))?;

    let failure_policy = if args.skip_invalid {
        FailurePolicy::Skip
    } else {
        file_config
            .evaluation
            .and_then(|e| e.on_invalid)
            .map(Into::into)
            .unwrap_or(defaults.failure_policy)
    };

    debug!(?parameters, ?failure_policy, "Resolved configuration.");

    Ok(AppConfig {
        input_path: args.input.clone(),
        parameters,
        failure_policy,
    })
}

fn parse_float(key: &str, value_str: &str) -> Result<f64> {
    value_str
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid float value for {}: {}", key, value_str)))
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };
        let (key, value_str) = (key.trim(), value_str.trim());

        match key {
            "industry.interest-rate" => {
                config
                    .industry
                    .get_or_insert_with(Default::default)
                    .interest_rate = Some(parse_float(key, value_str)?);
            }
            "industry.loan-period" => {
                config
                    .industry
                    .get_or_insert_with(Default::default)
                    .loan_period = Some(parse_float(key, value_str)?);
            }
            "industry.co2-tax-rate" => {
                config
                    .industry
                    .get_or_insert_with(Default::default)
                    .co2_tax_rate = Some(parse_float(key, value_str)?);
            }
            "industry.land-tax-rate" => {
                config
                    .industry
                    .get_or_insert_with(Default::default)
                    .land_tax_rate = Some(parse_float(key, value_str)?);
            }
            "evaluation.on-invalid" => {
                let policy = match value_str {
                    "halt" => FileOnInvalid::Halt,
                    "skip" => FileOnInvalid::Skip,
                    other => {
                        return Err(CliError::Config(format!(
                            "Invalid value for {}: '{}'. Expected 'halt' or 'skip'.",
                            key, other
                        )));
                    }
                };
                config
                    .evaluation
                    .get_or_insert_with(Default::default)
                    .on_invalid = Some(policy);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
