//! Plain-text rendering of the catalog and estimation results.

use homevalue_core::{Catalog, EstimationResult, PropertyData};
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt::Write;

use crate::config::DisplaySection;

/// "$1,234" / "-$500" / "$10.50"
pub fn format_currency(amount: Decimal, symbol: &str) -> String {
    let sign = if amount.is_sign_negative() && !amount.is_zero() { "-" } else { "" };
    let abs = amount.abs().round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let whole = abs.trunc();
    let cents = abs - whole;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if cents.is_zero() {
        format!("{sign}{symbol}{grouped}")
    } else {
        let mut cents = cents;
        cents.rescale(2);
        // "0.50" -> ".50"
        let frac = cents.to_string();
        format!("{sign}{symbol}{grouped}{}", frac.trim_start_matches('0'))
    }
}

/// Weeks with at most two decimals and no trailing zeros
pub fn format_weeks(weeks: f64) -> String {
    let s = format!("{weeks:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    let unit = if s == "1" { "week" } else { "weeks" };
    format!("{s} {unit}")
}

pub fn render_catalog(catalog: &Catalog, display: &DisplaySection) -> String {
    let sym = &display.currency_symbol;
    let mut out = String::new();
    for (n, r) in catalog.all().iter().enumerate() {
        let _ = writeln!(out, "{:>2}. {} {} [{}]", n + 1, r.icon, r.title, r.id);
        let _ = writeln!(
            out,
            "    Cost: {} | Value Added: +{} | ROI: {}% | Duration: {} | Priority: {}",
            format_currency(r.cost, sym),
            format_currency(r.value_increase, sym),
            r.roi,
            r.duration,
            r.priority,
        );
    }
    out
}

pub fn render_result(
    result: &EstimationResult,
    property: &PropertyData,
    display: &DisplaySection,
) -> String {
    let sym = &display.currency_symbol;
    let mut out = String::new();

    let _ = writeln!(out, "# Estimate\n");
    let mut facts = vec![property.property_type.to_string()];
    if property.square_feet > 0 {
        facts.push(format!("{} sq ft", property.square_feet));
    }
    if property.bedrooms > 0 || property.bathrooms > 0.0 {
        facts.push(format!("{} bd / {} ba", property.bedrooms, property.bathrooms));
    }
    if let Some(age) = property.current_age_years() {
        facts.push(format!("built {} ({} yrs)", property.year_built, age));
    }
    let _ = writeln!(out, "Property: {}", facts.join(", "));
    let _ = writeln!(out, "Current Value:      {}", format_currency(result.current_value, sym));
    let _ = writeln!(out, "Projected Value:    {}", format_currency(result.projected_value, sym));
    let _ = writeln!(
        out,
        "Value Increase:     {} (+{}%)",
        format_currency(result.total_value_increase, sym),
        result.percent_increase
    );
    let _ = writeln!(out, "Total Investment:   {}", format_currency(result.total_cost, sym));
    let _ = writeln!(out, "Net Gain:           {}", format_currency(result.net_gain, sym));
    let _ = writeln!(out, "Average ROI:        {}%", result.average_roi);
    let _ = writeln!(out, "Total Timeline:     {}", format_weeks(result.total_weeks));

    let _ = writeln!(out, "\n## Recommendations\n");
    for item in &result.recommendations {
        let _ = writeln!(
            out,
            "[{}] {} {} ({})",
            item.priority.label(),
            item.icon,
            item.title,
            item.priority.phase()
        );
        if display.show_descriptions && !item.description.is_empty() {
            let _ = writeln!(out, "    {}", item.description);
        }
        let _ = writeln!(
            out,
            "    Cost: {} | Value Added: {} | Net: {} | ROI: {}% | Duration: {}",
            format_currency(item.cost, sym),
            format_currency(item.value_increase, sym),
            format_currency(item.net_gain(), sym),
            item.roi,
            item.duration,
        );
    }

    let _ = writeln!(out, "\n## Timeline\n");
    for phase in &result.timeline {
        for entry in &phase.entries {
            let _ = writeln!(
                out,
                "{}. {} - {} {} (Estimated Duration: {})",
                entry.marker, phase.name, entry.item.icon, entry.item.title, entry.item.duration
            );
        }
    }

    out
}
