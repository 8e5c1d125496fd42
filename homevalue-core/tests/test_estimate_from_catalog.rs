use homevalue_core::{
    Catalog, EstimateError, Phase, PropertyData, Selection, aggregate, estimate, select_items,
};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn selection(ids: &[&str]) -> Selection {
    ids.iter().copied().collect()
}

/// Curb-appeal pair against a 300k house: the reference scenario for the calculator.
#[test]
fn test_exterior_painting_and_landscaping() {
    let catalog = Catalog::builtin();
    let sel = selection(&["exterior-painting", "landscaping"]);
    let items = select_items(catalog, &sel);
    let result = aggregate(&items, dec!(300000)).unwrap();

    assert_eq!(result.total_cost, dec!(9000));
    assert_eq!(result.total_value_increase, dec!(9500));
    assert_eq!(result.net_gain, dec!(500));
    assert_eq!(result.average_roi, 106);
    assert_eq!(result.projected_value, dec!(309500));
    assert_eq!(result.percent_increase, "3.17");
    // "1-2 weeks" + "1 week"
    assert_eq!(result.total_weeks, 2.5);
}

#[test]
fn test_single_week_items_sum() {
    let catalog = Catalog::builtin();
    let sel = selection(&["landscaping", "hvac-system"]);
    let result = aggregate(&select_items(catalog, &sel), dec!(300000)).unwrap();
    assert_eq!(result.total_weeks, 2.0);
}

#[test]
fn test_unknown_id_is_filtered() {
    let catalog = Catalog::builtin();
    let sel = selection(&["nonexistent-item", "landscaping"]);
    let items = select_items(catalog, &sel);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, "landscaping");

    let only_unknown = selection(&["nonexistent-item"]);
    assert!(select_items(catalog, &only_unknown).is_empty());
}

#[test]
fn test_select_items_uses_catalog_order() {
    let catalog = Catalog::builtin();
    let sel = selection(&["basement-finish", "kitchen-remodel", "smart-home"]);
    let ids: Vec<_> = select_items(catalog, &sel).iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["kitchen-remodel", "smart-home", "basement-finish"]);
}

#[test]
fn test_totals_independent_of_selection_order() {
    let catalog = Catalog::builtin();
    let forward = selection(&["kitchen-remodel", "deck-addition", "garage-door"]);
    let backward = selection(&["garage-door", "deck-addition", "kitchen-remodel"]);

    let a = aggregate(&select_items(catalog, &forward), dec!(500000)).unwrap();
    let b = aggregate(&select_items(catalog, &backward), dec!(500000)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_estimate_is_idempotent() {
    let catalog = Catalog::builtin();
    let sel = selection(&["roof-replacement", "window-replacement", "deck-addition"]);
    let property = PropertyData::new(dec!(420000));
    let first = estimate(catalog, &sel, &property).unwrap();
    let second = estimate(catalog, &sel, &property).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_full_catalog_totals() {
    let catalog = Catalog::builtin();
    let sel: Selection = catalog.ids().collect();
    let result = estimate(catalog, &sel, &PropertyData::new(dec!(400000))).unwrap();

    let expected_cost: Decimal = catalog.all().iter().map(|r| r.cost).sum();
    let expected_value: Decimal = catalog.all().iter().map(|r| r.value_increase).sum();
    assert_eq!(result.total_cost, expected_cost);
    assert_eq!(result.total_cost, dec!(122500));
    assert_eq!(result.total_value_increase, expected_value);
    assert_eq!(result.total_value_increase, dec!(101000));
    assert_eq!(result.net_gain, dec!(-21500));
    assert_eq!(result.projected_value, dec!(501000));
    assert_eq!(result.average_roi, 82);
    assert_eq!(result.percent_increase, "25.25");
    assert_eq!(result.recommendations.len(), 12);

    let markers: Vec<_> = result
        .timeline
        .iter()
        .flat_map(|p| p.entries.iter().map(|e| e.marker))
        .collect();
    assert_eq!(markers, (1..=12).collect::<Vec<_>>());
}

#[test]
fn test_priority_grouping_scenario() {
    let catalog = Catalog::builtin();
    // low, medium, high in selection order
    let sel = selection(&["deck-addition", "smart-home", "bathroom-renovation"]);
    let result = estimate(catalog, &sel, &PropertyData::new(dec!(250000))).unwrap();

    let rec_ids: Vec<_> = result.recommendations.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(rec_ids, ["bathroom-renovation", "smart-home", "deck-addition"]);

    let phases: Vec<_> = result.timeline.iter().map(|p| p.phase).collect();
    assert_eq!(phases, [Phase::Immediate, Phase::Secondary, Phase::Future]);
    for (i, phase) in result.timeline.iter().enumerate() {
        assert_eq!(phase.entries.len(), 1);
        assert_eq!(phase.entries[0].marker, i + 1);
    }
}

#[test]
fn test_estimate_surfaces_contract_errors() {
    let catalog = Catalog::builtin();
    let err = estimate(catalog, &Selection::new(), &PropertyData::new(dec!(300000))).unwrap_err();
    assert_eq!(err, EstimateError::EmptySelection);
    assert_eq!(err.user_message(), "Please select at least one improvement");

    let err = estimate(catalog, &selection(&["landscaping"]), &PropertyData::default())
        .unwrap_err();
    assert_eq!(err.user_message(), "Please enter a valid current home value");
}

#[test]
fn test_result_json_shape() {
    let catalog = Catalog::builtin();
    let sel = selection(&["garage-door"]);
    let result = estimate(catalog, &sel, &PropertyData::new(dec!(200000))).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["percentIncrease"], "1.75");
    assert_eq!(json["averageROI"], 100);
    assert_eq!(json["recommendations"][0]["priority"], "medium");
    assert_eq!(json["timeline"][0]["name"], "Secondary Priority");
    assert_eq!(json["timeline"][0]["entries"][0]["marker"], 1);
}
