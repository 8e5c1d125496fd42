//! Error types returned by the estimator core

use rust_decimal::Decimal;
use thiserror::Error;

/// Input contract violations rejected by [`crate::estimator::aggregate`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimateError {
    #[error("current home value must be greater than zero (got {0})")]
    NonPositiveValue(Decimal),

    #[error("no improvements selected")]
    EmptySelection,

    #[error("amounts are outside the representable decimal range")]
    Overflow,
}

impl EstimateError {
    /// Message suitable for showing to the person filling in the form
    pub fn user_message(&self) -> &'static str {
        match self {
            EstimateError::NonPositiveValue(_) => "Please enter a valid current home value",
            EstimateError::EmptySelection => "Please select at least one improvement",
            EstimateError::Overflow => "Please enter a realistic current home value",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("duplicate improvement id: {0}")]
    DuplicateId(String),
}

/// A string could not be parsed into one of the closed enums
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind}: '{value}'")]
pub struct ParseError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseError {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}
