use crate::core::facility::facility::Facility;
use tracing::debug;

/// A facility's position in registration order, starting at 1.
#[derive(Debug, Clone, PartialEq)]
pub struct ListedFacility {
    pub ordinal: usize,
    pub name: String,
}

/// A facility's name with its levelized cost in $/MWh.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedFacility {
    pub name: String,
    pub levelized_cost_per_mwh: f64,
}

/// An ordered, append-only collection of constructed facilities.
#[derive(Debug, Clone, Default)]
pub struct FacilityRegistry {
    facilities: Vec<Facility>,
}

impl FacilityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a facility and returns its 1-based ordinal.
    pub fn register(&mut self, facility: Facility) -> usize {
        self.facilities.push(facility);
        let ordinal = self.facilities.len();
        debug!(ordinal, name = %self.facilities[ordinal - 1].name(), "Registered facility.");
        ordinal
    }

    /// Facilities ranked by ascending levelized cost per MWh. Ties keep registration order.
    pub fn compare_all(&self) -> Vec<RankedFacility> {
        let mut ranked: Vec<RankedFacility> = self
            .facilities
            .iter()
            .map(|f| RankedFacility {
                name: f.name().to_string(),
                levelized_cost_per_mwh: f.levelized_cost_per_mwh(),
            })
            .collect();
        ranked.sort_by(|a, b| a.levelized_cost_per_mwh.total_cmp(&b.levelized_cost_per_mwh));
        ranked
    }

    /// Facilities in registration order with their 1-based ordinals.
    pub fn list_all(&self) -> Vec<ListedFacility> {
        self.facilities
            .iter()
            .enumerate()
            .map(|(i, f)| ListedFacility {
                ordinal: i + 1,
                name: f.name().to_string(),
            })
            .collect()
    }

    /// First facility registered under `name`.
    pub fn find(&self, name: &str) -> Option<&Facility> {
        self.facilities.iter().find(|f| f.name() == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Facility> {
        self.facilities.iter()
    }

    pub fn len(&self) -> usize {
        self.facilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facilities.is_empty()
    }

    /// Removes every registered facility.
    pub fn reset(&mut self) {
        debug!(count = self.facilities.len(), "Clearing facility registry.");
        self.facilities.clear();
    }
}

impl<'a> IntoIterator for &'a FacilityRegistry {
    type Item = &'a Facility;
    type IntoIter = std::slice::Iter<'a, Facility>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::facility::input::FacilityInput;
    use crate::engine::industry::IndustryParameters;

    fn flat_cost_facility(name: &str, lcoe_per_mwh: f64) -> Facility {
        let mut input = FacilityInput::named(name);
        input.v_o_and_m = Some(lcoe_per_mwh);
        Facility::new(&input, &IndustryParameters::default()).unwrap()
    }

    fn registry_of(entries: &[(&str, f64)]) -> FacilityRegistry {
        let mut registry = FacilityRegistry::new();
        for (name, cost) in entries {
            registry.register(flat_cost_facility(name, *cost));
        }
        registry
    }

    #[test]
    fn register_returns_one_based_ordinals() {
        let mut registry = FacilityRegistry::new();
        assert_eq!(registry.register(flat_cost_facility("A", 1.0)), 1);
        assert_eq!(registry.register(flat_cost_facility("B", 2.0)), 2);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn compare_all_ranks_ascending_regardless_of_construction_order() {
        let registry = registry_of(&[("Coal", 136.86), ("Natural Gas", 71.26), ("Wind", 40.00)]);
        let ranked = registry.compare_all();
        let names: Vec<_> = ranked.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Wind", "Natural Gas", "Coal"]);
        assert!((ranked[0].levelized_cost_per_mwh - 40.0).abs() < 1e-9);
    }

    #[test]
    fn compare_all_keeps_registration_order_for_ties() {
        let registry = registry_of(&[("B", 50.0), ("A", 50.0), ("C", 10.0)]);
        let names: Vec<_> = registry
            .compare_all()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["C", "B", "A"]);
    }

    #[test]
    fn list_all_preserves_construction_order() {
        let registry = registry_of(&[("Coal", 136.86), ("Natural Gas", 71.26), ("Wind", 40.00)]);
        assert_eq!(
            registry.list_all(),
            vec![
                ListedFacility { ordinal: 1, name: "Coal".to_string() },
                ListedFacility { ordinal: 2, name: "Natural Gas".to_string() },
                ListedFacility { ordinal: 3, name: "Wind".to_string() },
            ]
        );
    }

    #[test]
    fn find_and_reset() {
        let mut registry = registry_of(&[("Coal", 136.86), ("Wind", 40.0)]);
        assert!(registry.find("Wind").is_some());
        assert!(registry.find("Solar").is_none());
        registry.reset();
        assert!(registry.is_empty());
        assert!(registry.compare_all().is_empty());
    }

    #[test]
    fn independent_registries_do_not_share_facilities() {
        let a = registry_of(&[("Coal", 136.86)]);
        let b = registry_of(&[("Wind", 40.0), ("Solar", 35.0)]);
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 2);
    }
}
