//! Recommendation ordering and phased timeline grouping

use serde::Serialize;

use crate::improvement::{ImprovementRecord, Phase};

/// One scheduled improvement with its position in the overall sequence
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineEntry {
    /// 1-based, counted across all phases
    pub marker: usize,
    pub item: ImprovementRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelinePhase {
    pub phase: Phase,
    pub name: &'static str,
    pub entries: Vec<TimelineEntry>,
}

/// Order items high → medium → low, keeping catalog order within a priority
pub fn group_for_recommendation(items: &[&ImprovementRecord]) -> Vec<ImprovementRecord> {
    let mut sorted: Vec<ImprovementRecord> = items.iter().map(|i| (*i).clone()).collect();
    // sort_by_key is stable
    sorted.sort_by_key(|i| i.priority.rank());
    sorted
}

/// Group items into the fixed phase sequence, skipping empty phases.
///
/// Markers run 1..=n over the items in phase order, so an omitted phase
/// leaves no gap in the numbering.
pub fn group_for_timeline(items: &[&ImprovementRecord]) -> Vec<TimelinePhase> {
    let mut marker = 0;
    let mut phases = Vec::new();

    for phase in Phase::ALL {
        let mut entries = Vec::new();
        for item in items.iter().filter(|i| i.priority == phase.priority()) {
            marker += 1;
            entries.push(TimelineEntry {
                marker,
                item: (*item).clone(),
            });
        }
        if !entries.is_empty() {
            phases.push(TimelinePhase {
                phase,
                name: phase.name(),
                entries,
            });
        }
    }

    phases
}
