//! Improvement records and their priority / timeline phase classification

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::duration::parse_duration_weeks;

/// How urgently an improvement should be scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Sort rank: high=1, medium=2, low=3
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }

    /// Upper-case badge text shown on recommendation cards
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Timeline phase this priority is scheduled into
    pub fn phase(&self) -> Phase {
        match self {
            Priority::High => Phase::Immediate,
            Priority::Medium => Phase::Secondary,
            Priority::Low => Phase::Future,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the three fixed timeline groupings, in schedule order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    Immediate,
    Secondary,
    Future,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::Immediate, Phase::Secondary, Phase::Future];

    pub fn name(&self) -> &'static str {
        match self {
            Phase::Immediate => "Immediate Priority",
            Phase::Secondary => "Secondary Priority",
            Phase::Future => "Future Consideration",
        }
    }

    pub fn priority(&self) -> Priority {
        match self {
            Phase::Immediate => Priority::High,
            Phase::Secondary => Priority::Medium,
            Phase::Future => Priority::Low,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single offered home improvement.
///
/// `roi` is authored data shown as-is; it is never cross-checked against
/// `cost` / `value_increase`. See [`ImprovementRecord::derived_roi`] for the
/// computed figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovementRecord {
    /// Unique catalog key, e.g. `kitchen-remodel`
    pub id: String,
    pub title: String,
    pub icon: String,
    /// Positive currency amount
    pub cost: Decimal,
    /// Non-negative currency amount
    pub value_increase: Decimal,
    /// Percent, display only
    pub roi: u32,
    /// Free text such as "4-6 weeks" or "1 day"
    pub duration: String,
    pub priority: Priority,
    pub description: String,
}

impl ImprovementRecord {
    /// Duration in weeks, parsed from the free-text `duration`
    pub fn weeks(&self) -> f64 {
        parse_duration_weeks(&self.duration)
    }

    /// round(value_increase / cost * 100), or `None` for a zero cost
    pub fn derived_roi(&self) -> Option<i64> {
        if self.cost.is_zero() {
            return None;
        }
        crate::estimator::round_percent(self.value_increase, self.cost)?.to_i64()
    }

    /// Value added minus cost for this item alone
    pub fn net_gain(&self) -> Decimal {
        self.value_increase.saturating_sub(self.cost)
    }
}
