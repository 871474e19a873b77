use crate::core::facility::input::FacilityInput;
use phf::{Map, phf_map};

/// A recognized column of a facility table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacilityField {
    Name,
    Capacity,
    CapacityFactor,
    CapitalCost,
    FixedOm,
    VariableOm,
    FuelCost,
    HeatRate,
    Co2Rate,
    LandRate,
    Subsidy,
}

static FIELDS_BY_COLUMN: Map<&'static str, FacilityField> = phf_map! {
    "name" => FacilityField::Name,
    "capacity" => FacilityField::Capacity,
    "capacity_factor" => FacilityField::CapacityFactor,
    "capital_cost" => FacilityField::CapitalCost,
    "f_o_and_m" => FacilityField::FixedOm,
    "v_o_and_m" => FacilityField::VariableOm,
    "fuel_cost" => FacilityField::FuelCost,
    "heat_rate" => FacilityField::HeatRate,
    "co2_rate" => FacilityField::Co2Rate,
    "land_rate" => FacilityField::LandRate,
    "subsidy" => FacilityField::Subsidy,
};

impl FacilityField {
    /// Looks up a column header, ignoring surrounding whitespace and ASCII case.
    pub fn from_column(header: &str) -> Option<Self> {
        let key = header.trim().to_ascii_lowercase();
        FIELDS_BY_COLUMN.get(key.as_str()).copied()
    }

    /// The numeric slot this field fills, or `None` for the name.
    pub fn slot_mut(self, input: &mut FacilityInput) -> Option<&mut Option<f64>> {
        match self {
            FacilityField::Name => None,
            FacilityField::Capacity => Some(&mut input.capacity),
            FacilityField::CapacityFactor => Some(&mut input.capacity_factor),
            FacilityField::CapitalCost => Some(&mut input.capital_cost),
            FacilityField::FixedOm => Some(&mut input.f_o_and_m),
            FacilityField::VariableOm => Some(&mut input.v_o_and_m),
            FacilityField::FuelCost => Some(&mut input.fuel_cost),
            FacilityField::HeatRate => Some(&mut input.heat_rate),
            FacilityField::Co2Rate => Some(&mut input.co2_rate),
            FacilityField::LandRate => Some(&mut input.land_rate),
            FacilityField::Subsidy => Some(&mut input.subsidy),
        }
    }
}
