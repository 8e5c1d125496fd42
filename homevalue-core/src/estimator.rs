//! Estimator: resolves a selection against the catalog and aggregates cost,
//! value, ROI and timeline figures.
//!
//! Every function here is pure; callers own the selection and property data.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::catalog::Catalog;
use crate::error::EstimateError;
use crate::improvement::ImprovementRecord;
use crate::plan::{TimelinePhase, group_for_recommendation, group_for_timeline};
use crate::property::PropertyData;
use crate::selection::Selection;

/// Everything derived from one selection + property value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimationResult {
    pub current_value: Decimal,
    pub total_cost: Decimal,
    pub total_value_increase: Decimal,
    /// May be negative
    pub net_gain: Decimal,
    /// 0 when total cost is 0
    #[serde(rename = "averageROI")]
    pub average_roi: i64,
    pub projected_value: Decimal,
    /// Always two fractional digits, e.g. "3.17"
    pub percent_increase: String,
    pub total_weeks: f64,
    pub recommendations: Vec<ImprovementRecord>,
    pub timeline: Vec<TimelinePhase>,
}

/// Catalog entries whose id is selected, in catalog order.
///
/// Selected ids missing from the catalog are dropped.
pub fn select_items<'a>(
    catalog: &'a Catalog,
    selection: &Selection,
) -> Vec<&'a ImprovementRecord> {
    for id in selection.iter().filter(|id| !catalog.contains(id)) {
        tracing::debug!(id, "ignoring unknown improvement id");
    }

    catalog
        .all()
        .iter()
        .filter(|r| selection.contains(&r.id))
        .collect()
}

/// Aggregate the selected items against the current property value.
///
/// Fails fast on a non-positive value or an empty item list instead of
/// producing division artifacts, and on amounts outside decimal range
/// instead of panicking.
pub fn aggregate(
    items: &[&ImprovementRecord],
    current_value: Decimal,
) -> Result<EstimationResult, EstimateError> {
    if current_value <= Decimal::ZERO {
        return Err(EstimateError::NonPositiveValue(current_value));
    }
    if items.is_empty() {
        return Err(EstimateError::EmptySelection);
    }

    let total_cost = checked_sum(items.iter().map(|i| i.cost))?;
    let total_value_increase = checked_sum(items.iter().map(|i| i.value_increase))?;
    let net_gain = total_value_increase
        .checked_sub(total_cost)
        .ok_or(EstimateError::Overflow)?;

    let average_roi = if total_cost > Decimal::ZERO {
        round_percent(total_value_increase, total_cost)
            .and_then(|roi| roi.to_i64())
            .ok_or(EstimateError::Overflow)?
    } else {
        0
    };

    let projected_value = current_value
        .checked_add(total_value_increase)
        .ok_or(EstimateError::Overflow)?;
    let percent_increase = percent_of(total_value_increase, current_value)
        .map(format_fixed2)
        .ok_or(EstimateError::Overflow)?;
    let total_weeks: f64 = items.iter().map(|i| i.weeks()).sum();

    tracing::debug!(
        items = items.len(),
        %total_cost,
        %total_value_increase,
        average_roi,
        total_weeks,
        "aggregated estimate"
    );

    Ok(EstimationResult {
        current_value,
        total_cost,
        total_value_increase,
        net_gain,
        average_roi,
        projected_value,
        percent_increase,
        total_weeks,
        recommendations: group_for_recommendation(items),
        timeline: group_for_timeline(items),
    })
}

/// Resolve `selection` against `catalog` and aggregate using the property's value
pub fn estimate(
    catalog: &Catalog,
    selection: &Selection,
    property: &PropertyData,
) -> Result<EstimationResult, EstimateError> {
    let items = select_items(catalog, selection);
    aggregate(&items, property.current_value)
}

fn checked_sum(mut amounts: impl Iterator<Item = Decimal>) -> Result<Decimal, EstimateError> {
    amounts.try_fold(Decimal::ZERO, |acc, x| {
        acc.checked_add(x).ok_or(EstimateError::Overflow)
    })
}

/// `numerator / denominator * 100`, unrounded. `None` on a zero denominator or overflow.
fn percent_of(numerator: Decimal, denominator: Decimal) -> Option<Decimal> {
    numerator
        .checked_mul(Decimal::ONE_HUNDRED)?
        .checked_div(denominator)
}

/// Whole-number percentage, halves rounded away from zero
pub(crate) fn round_percent(numerator: Decimal, denominator: Decimal) -> Option<Decimal> {
    percent_of(numerator, denominator)
        .map(|p| p.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
}

fn format_fixed2(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}
