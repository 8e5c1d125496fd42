//! The fixed catalog of offered home improvements.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::LazyLock;

use crate::error::CatalogError;
use crate::improvement::{ImprovementRecord, Priority};

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| Catalog {
    records: builtin_records(),
});

/// An ordered, read-only list of improvements with unique ids
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    records: Vec<ImprovementRecord>,
}

impl Catalog {
    /// Build a catalog from arbitrary records, rejecting duplicate ids
    pub fn new(records: Vec<ImprovementRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for r in &records {
            if !seen.insert(r.id.as_str()) {
                return Err(CatalogError::DuplicateId(r.id.clone()));
            }
        }
        Ok(Self { records })
    }

    /// The compiled-in catalog
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// All records in catalog order
    pub fn all(&self) -> &[ImprovementRecord] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&ImprovementRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[allow(clippy::too_many_arguments)]
fn record(
    id: &str,
    title: &str,
    icon: &str,
    cost: Decimal,
    value_increase: Decimal,
    roi: u32,
    duration: &str,
    priority: Priority,
    description: &str,
) -> ImprovementRecord {
    ImprovementRecord {
        id: id.to_string(),
        title: title.to_string(),
        icon: icon.to_string(),
        cost,
        value_increase,
        roi,
        duration: duration.to_string(),
        priority,
        description: description.to_string(),
    }
}

#[rustfmt::skip]
fn builtin_records() -> Vec<ImprovementRecord> {
    use Priority::{High, Low, Medium};

    vec![
        record("kitchen-remodel", "Kitchen Remodel", "🍳", dec!(25000), dec!(20000), 80, "4-6 weeks", High,
            "Modern kitchen with updated appliances, countertops, and cabinets"),
        record("bathroom-renovation", "Bathroom Renovation", "🛁", dec!(15000), dec!(12000), 80, "3-4 weeks", High,
            "Updated fixtures, tile, and vanity"),
        record("flooring-upgrade", "Flooring Upgrade", "🏠", dec!(8000), dec!(6500), 81, "2-3 weeks", Medium,
            "Hardwood or high-quality laminate flooring throughout"),
        record("exterior-painting", "Exterior Painting", "🎨", dec!(5000), dec!(5000), 100, "1-2 weeks", High,
            "Fresh coat of paint to boost curb appeal"),
        record("landscaping", "Professional Landscaping", "🌳", dec!(4000), dec!(4500), 113, "1 week", High,
            "Enhanced curb appeal with professional landscaping"),
        record("hvac-system", "HVAC System Upgrade", "❄️", dec!(7000), dec!(5500), 79, "1 week", Medium,
            "Energy-efficient heating and cooling system"),
        record("window-replacement", "Window Replacement", "🪟", dec!(10000), dec!(8000), 80, "2-3 weeks", Medium,
            "Energy-efficient windows throughout"),
        record("roof-replacement", "Roof Replacement", "🏚️", dec!(12000), dec!(9000), 75, "1-2 weeks", Medium,
            "New roof with modern materials"),
        record("deck-addition", "Deck Addition", "🪵", dec!(10000), dec!(8500), 85, "2-3 weeks", Low,
            "Outdoor living space with quality decking"),
        record("smart-home", "Smart Home Technology", "📱", dec!(3000), dec!(3500), 117, "1 week", Medium,
            "Smart thermostat, locks, and lighting"),
        record("garage-door", "Garage Door Replacement", "🚪", dec!(3500), dec!(3500), 100, "1 day", Medium,
            "Modern insulated garage door"),
        record("basement-finish", "Basement Finishing", "🏗️", dec!(20000), dec!(15000), 75, "6-8 weeks", Low,
            "Convert basement into usable living space"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_twelve_unique_entries() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 12);
        let ids: HashSet<_> = catalog.ids().collect();
        assert_eq!(ids.len(), 12);
    }

    #[test]
    fn test_builtin_amounts_are_valid() {
        for r in Catalog::builtin().all() {
            assert!(r.cost > Decimal::ZERO, "{} has non-positive cost", r.id);
            assert!(r.value_increase >= Decimal::ZERO, "{} has negative value", r.id);
        }
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::builtin();
        let landscaping = catalog.get("landscaping").unwrap();
        assert_eq!(landscaping.cost, dec!(4000));
        assert_eq!(landscaping.roi, 113);
        assert!(catalog.contains("garage-door"));
        assert!(!catalog.contains("nonexistent-item"));
    }

    #[test]
    fn test_catalog_order_is_stable() {
        let first: Vec<_> = Catalog::builtin().ids().take(3).collect();
        assert_eq!(first, ["kitchen-remodel", "bathroom-renovation", "flooring-upgrade"]);
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let kitchen = Catalog::builtin().get("kitchen-remodel").unwrap().clone();
        let err = Catalog::new(vec![kitchen.clone(), kitchen]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateId("kitchen-remodel".into()));
    }

    #[test]
    fn test_authored_roi_close_to_derived() {
        // Authored figures are hand-rounded; they should never drift far.
        for r in Catalog::builtin().all() {
            let derived = r.derived_roi().unwrap();
            assert!((derived - r.roi as i64).abs() <= 1, "{}: {} vs {}", r.id, r.roi, derived);
        }
    }
}
