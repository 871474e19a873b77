use levelized::core::facility::facility::Facility;
use levelized::core::facility::terms::TermKind;
use levelized::engine::registry::{ListedFacility, RankedFacility};
use std::fmt::Write;

const RULE_WIDTH: usize = 70;

fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

fn known(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) if unit.is_empty() => format!("{}", v),
        Some(v) => format!("{} {}", v, unit),
        None => "unknown".to_string(),
    }
}

fn section(title: &str, lines: &[String]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", rule());
    let _ = writeln!(out, "{}", title);
    for line in lines {
        let _ = writeln!(out, "{}", line);
    }
    let _ = writeln!(out, "{}", rule());
    out
}

pub fn general_info(facility: &Facility) -> String {
    section(
        "General Information",
        &[
            format!("Source: {}", facility.name()),
            format!("Capacity: {}", known(facility.capacity(), "MW")),
            format!("Capacity Factor: {}", known(facility.capacity_factor(), "")),
            format!(
                "Used capital recovery factor: {:.3}",
                facility.capital_recovery_factor()
            ),
            format!(
                "Levelized Cost ${:.2}/MWh",
                facility.levelized_cost_per_mwh()
            ),
        ],
    )
}

/// Every raw construction input, with "unknown" for the absent ones.
pub fn input_properties(facility: &Facility) -> String {
    section(
        "Input Properties",
        &[
            format!("Capacity: {}", known(facility.capacity(), "MW")),
            format!("Capacity factor: {}", known(facility.capacity_factor(), "")),
            format!("Capital cost: {}", known(facility.capital_cost(), "$/kW")),
            format!("Fixed O&M: {}", known(facility.f_o_and_m(), "$/kW-yr")),
            format!("Variable O&M: {}", known(facility.v_o_and_m(), "$/MWh")),
            format!("Fuel cost: {}", known(facility.fuel_cost(), "$/mmBTU")),
            format!("Heat rate: {}", known(facility.heat_rate(), "BTU/kWh")),
            format!("CO2 rate: {}", known(facility.co2_rate(), "per mmBTU")),
            format!("Land rate: {}", known(facility.land_rate(), "W per unit area")),
            format!("Subsidy: {}", known(facility.subsidy(), "$/kWh")),
        ],
    )
}

pub fn power_info(facility: &Facility) -> String {
    let average = facility
        .average_power_mw()
        .map(|p| format!("{:.2} MW", p))
        .unwrap_or_else(|| "unknown".to_string());
    section(
        "Power Information",
        &[
            format!("Total capacity: {}", known(facility.capacity(), "MW")),
            format!("Capacity factor: {}", known(facility.capacity_factor(), "")),
            format!("Actual average power: {}", average),
        ],
    )
}

pub fn fuel_info(facility: &Facility) -> String {
    let fuel_cost = facility
        .fuel_cost()
        .map(|c| format!("${}/mmBTU", c))
        .unwrap_or_else(|| "unknown".to_string());
    let efficiency = if facility.heat_rate().is_some() {
        format!("{:.2}%", facility.efficiency() * 100.0)
    } else {
        "n/a (no heat rate)".to_string()
    };
    section(
        "Fuel Information",
        &[
            format!("Fuel costs: {}", fuel_cost),
            format!("Heat rate: {}", known(facility.heat_rate(), "BTU/kWh")),
            format!("Fuel efficiency: {}", efficiency),
        ],
    )
}

pub fn cost_distribution(facility: &Facility) -> String {
    let mut lines = Vec::with_capacity(TermKind::ALL.len() + 1);
    match facility.cost_shares() {
        Ok(shares) => {
            for (kind, share) in shares {
                lines.push(format!("{}: {:.2}%", kind, share));
            }
        }
        Err(e) => lines.push(format!("No cost data to report ({}).", e)),
    }
    lines.push(format!(
        "Total LCOE: ${:.2}/MWh",
        facility.levelized_cost_per_mwh()
    ));
    section("Cost Distribution Information", &lines)
}

pub fn comparison_table(ranked: &[RankedFacility]) -> String {
    let mut out = String::new();
    let name_width = ranked
        .iter()
        .map(|r| r.name.len())
        .max()
        .unwrap_or(0)
        .max("Source".len());
    let _ = writeln!(out, "{:>4}  {:<name_width$}  {:>12}", "Rank", "Source", "LCOE $/MWh");
    for (i, r) in ranked.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>4}  {:<name_width$}  {:>12.2}",
            i + 1,
            r.name,
            r.levelized_cost_per_mwh
        );
    }
    out
}

pub fn listing(listed: &[ListedFacility]) -> String {
    let mut out = String::new();
    for entry in listed {
        let _ = writeln!(out, "{:>3}. {}", entry.ordinal, entry.name);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use levelized::core::facility::input::FacilityInput;
    use levelized::engine::industry::IndustryParameters;

    fn coal() -> Facility {
        let input = FacilityInput {
            capacity: Some(650.0),
            capacity_factor: Some(0.475),
            capital_cost: Some(3636.0),
            f_o_and_m: Some(42.1),
            v_o_and_m: Some(4.6),
            fuel_cost: Some(1.95),
            heat_rate: Some(8800.0),
            ..FacilityInput::named("Coal")
        };
        let params = IndustryParameters::new()
            .with_interest(10.0)
            .and_then(|p| p.with_loan_period(35.0))
            .unwrap();
        Facility::new(&input, &params).unwrap()
    }

    #[test]
    fn general_info_shows_crf_and_lcoe() {
        let text = general_info(&coal());
        assert!(text.contains("Source: Coal"));
        assert!(text.contains("Capacity: 650 MW"));
        assert!(text.contains("Used capital recovery factor: 0.104"));
        assert!(text.contains("Levelized Cost $122.48/MWh"));
    }

    #[test]
    fn input_properties_list_every_raw_input() {
        let text = input_properties(&coal());
        assert!(text.contains("Capital cost: 3636 $/kW"));
        assert!(text.contains("Fixed O&M: 42.1 $/kW-yr"));
        assert!(text.contains("Variable O&M: 4.6 $/MWh"));
        assert!(text.contains("Fuel cost: 1.95 $/mmBTU"));
        assert!(text.contains("CO2 rate: unknown"));
        assert!(text.contains("Land rate: unknown"));
        assert!(text.contains("Subsidy: unknown"));
    }

    #[test]
    fn power_and_fuel_info() {
        let plant = coal();
        assert!(power_info(&plant).contains("Actual average power: 308.75 MW"));
        let fuel = fuel_info(&plant);
        assert!(fuel.contains("Fuel costs: $1.95/mmBTU"));
        assert!(fuel.contains("Heat rate: 8800 BTU/kWh"));
        assert!(fuel.contains("Fuel efficiency: 38.77%"));
    }

    #[test]
    fn fuel_info_without_heat_rate() {
        let plant = Facility::new(&FacilityInput::named("Wind"), &IndustryParameters::default())
            .unwrap();
        let fuel = fuel_info(&plant);
        assert!(fuel.contains("Heat rate: unknown"));
        assert!(fuel.contains("n/a"));
    }

    #[test]
    fn cost_distribution_lists_every_term() {
        let text = cost_distribution(&coal());
        for kind in TermKind::ALL {
            assert!(text.contains(kind.label()), "{}", kind);
        }
        assert!(text.contains("Total LCOE: $122.48/MWh"));
    }

    #[test]
    fn cost_distribution_without_costs_reports_no_data() {
        let plant = Facility::new(&FacilityInput::named("Empty"), &IndustryParameters::default())
            .unwrap();
        let text = cost_distribution(&plant);
        assert!(text.contains("No cost data to report"));
        assert!(!text.contains('%'));
    }

    #[test]
    fn comparison_table_numbers_ranks() {
        let ranked = vec![
            RankedFacility {
                name: "Wind".to_string(),
                levelized_cost_per_mwh: 40.0,
            },
            RankedFacility {
                name: "Coal".to_string(),
                levelized_cost_per_mwh: 136.857,
            },
        ];
        let text = comparison_table(&ranked);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("Wind") && lines[1].contains("40.00"));
        assert!(lines[2].trim_start().starts_with('2'));
        assert!(lines[2].contains("136.86"));
    }

    #[test]
    fn listing_shows_ordinals() {
        let listed = vec![
            ListedFacility {
                ordinal: 1,
                name: "Coal".to_string(),
            },
            ListedFacility {
                ordinal: 2,
                name: "Wind".to_string(),
            },
        ];
        assert_eq!(listing(&listed), "  1. Coal\n  2. Wind\n");
    }
}
