//! homevalue-core: improvement catalog and pure estimation functions for the
//! home value calculator

pub mod catalog;
pub mod duration;
pub mod error;
pub mod estimator;
pub mod improvement;
pub mod plan;
pub mod property;
pub mod selection;

pub use catalog::Catalog;
pub use duration::{DEFAULT_WEEKS, parse_duration_weeks};
pub use error::{CatalogError, EstimateError, ParseError};
pub use estimator::{EstimationResult, aggregate, estimate, select_items};
pub use improvement::{ImprovementRecord, Phase, Priority};
pub use plan::{TimelineEntry, TimelinePhase, group_for_recommendation, group_for_timeline};
pub use property::{Area, Condition, Conditions, PropertyData, PropertyType};
pub use selection::Selection;
