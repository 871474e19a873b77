use serde::Deserialize;
use std::fmt;

/// The value supplied for a facility's `name`.
///
/// Data loaders may hand over a name that is not text (for instance a numeric-looking CSV
/// cell). Such a value is kept in its rendered form so that validation can report it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NameValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl NameValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            NameValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl Default for NameValue {
    fn default() -> Self {
        NameValue::Text(String::new())
    }
}

impl fmt::Display for NameValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameValue::Text(s) => f.write_str(s),
            NameValue::Integer(i) => write!(f, "{}", i),
            NameValue::Float(x) => write!(f, "{}", x),
            NameValue::Boolean(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for NameValue {
    fn from(s: &str) -> Self {
        NameValue::Text(s.to_string())
    }
}

impl From<String> for NameValue {
    fn from(s: String) -> Self {
        NameValue::Text(s)
    }
}

/// Construction options for a [`Facility`](super::facility::Facility).
///
/// Units: `capacity` in MW, `capital_cost` in $/kW, `f_o_and_m` in $/kW-yr, `v_o_and_m` in
/// $/MWh, `fuel_cost` in $/mmBTU, `heat_rate` in BTU/kWh, `co2_rate` in mass of CO2 per
/// mmBTU, `land_rate` in W per unit area and `subsidy` in $/kWh.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FacilityInput {
    pub name: NameValue,
    pub capacity: Option<f64>,
    pub capacity_factor: Option<f64>,
    pub capital_cost: Option<f64>,
    pub f_o_and_m: Option<f64>,
    pub v_o_and_m: Option<f64>,
    pub fuel_cost: Option<f64>,
    pub heat_rate: Option<f64>,
    pub co2_rate: Option<f64>,
    pub land_rate: Option<f64>,
    pub subsidy: Option<f64>,
}

impl FacilityInput {
    /// Creates an input with the given name and every other option absent.
    pub fn named(name: impl Into<NameValue>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// The name as it should appear in reports, whether or not it is valid.
    pub fn display_name(&self) -> String {
        self.name.to_string()
    }
}
