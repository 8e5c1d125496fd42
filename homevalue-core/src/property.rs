//! Property attributes entered by the user.
//!
//! Only `current_value` feeds the estimate; everything else is descriptive
//! context carried alongside it.

use chrono::{Datelike, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyType {
    #[default]
    SingleFamily,
    Condo,
    Townhouse,
    MultiFamily,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::SingleFamily => "single-family",
            PropertyType::Condo => "condo",
            PropertyType::Townhouse => "townhouse",
            PropertyType::MultiFamily => "multi-family",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['_', ' '], "-").as_str() {
            "single-family" => Ok(PropertyType::SingleFamily),
            "condo" => Ok(PropertyType::Condo),
            "townhouse" => Ok(PropertyType::Townhouse),
            "multi-family" => Ok(PropertyType::MultiFamily),
            _ => Err(ParseError::new("property type", s)),
        }
    }
}

/// Condition rating for one area of the house
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Excellent,
    #[default]
    Good,
    Fair,
    Poor,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Excellent => "excellent",
            Condition::Good => "good",
            Condition::Fair => "fair",
            Condition::Poor => "poor",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Condition {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "excellent" => Ok(Condition::Excellent),
            "good" => Ok(Condition::Good),
            "fair" => Ok(Condition::Fair),
            "poor" => Ok(Condition::Poor),
            _ => Err(ParseError::new("condition", s)),
        }
    }
}

/// Rated areas of the house
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Area {
    Kitchen,
    Bathroom,
    Flooring,
    Exterior,
}

impl Area {
    pub const ALL: [Area; 4] = [Area::Kitchen, Area::Bathroom, Area::Flooring, Area::Exterior];

    pub fn as_str(&self) -> &'static str {
        match self {
            Area::Kitchen => "kitchen",
            Area::Bathroom => "bathroom",
            Area::Flooring => "flooring",
            Area::Exterior => "exterior",
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Area {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kitchen" => Ok(Area::Kitchen),
            "bathroom" => Ok(Area::Bathroom),
            "flooring" => Ok(Area::Flooring),
            "exterior" => Ok(Area::Exterior),
            _ => Err(ParseError::new("area", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Conditions {
    pub kitchen: Condition,
    pub bathroom: Condition,
    pub flooring: Condition,
    pub exterior: Condition,
}

impl Conditions {
    pub fn get(&self, area: Area) -> Condition {
        match area {
            Area::Kitchen => self.kitchen,
            Area::Bathroom => self.bathroom,
            Area::Flooring => self.flooring,
            Area::Exterior => self.exterior,
        }
    }

    pub fn set(&mut self, area: Area, condition: Condition) {
        let slot = match area {
            Area::Kitchen => &mut self.kitchen,
            Area::Bathroom => &mut self.bathroom,
            Area::Flooring => &mut self.flooring,
            Area::Exterior => &mut self.exterior,
        };
        *slot = condition;
    }
}

/// Everything the user tells us about the property.
///
/// `Default` is the reset state: zero value, single-family, every area rated good.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyData {
    /// Must be positive before an estimate can be produced
    pub current_value: Decimal,
    pub square_feet: u32,
    pub bedrooms: u32,
    /// Half baths count as 0.5
    pub bathrooms: f64,
    /// 0 when unknown
    pub year_built: i32,
    pub property_type: PropertyType,
    #[serde(default)]
    pub notes: String,
    pub conditions: Conditions,
}

impl PropertyData {
    pub fn new(current_value: Decimal) -> Self {
        Self {
            current_value,
            ..Default::default()
        }
    }

    pub fn with_square_feet(mut self, square_feet: u32) -> Self {
        self.square_feet = square_feet;
        self
    }

    pub fn with_rooms(mut self, bedrooms: u32, bathrooms: f64) -> Self {
        self.bedrooms = bedrooms;
        self.bathrooms = bathrooms;
        self
    }

    pub fn with_year_built(mut self, year_built: i32) -> Self {
        self.year_built = year_built;
        self
    }

    pub fn with_property_type(mut self, property_type: PropertyType) -> Self {
        self.property_type = property_type;
        self
    }

    pub fn with_condition(mut self, area: Area, condition: Condition) -> Self {
        self.conditions.set(area, condition);
        self
    }

    /// Whether an estimate can be run against this property
    pub fn has_valid_value(&self) -> bool {
        self.current_value > Decimal::ZERO
    }

    /// Age in years relative to `reference_year`; `None` if the build year is
    /// unknown or later than the reference.
    pub fn age_years(&self, reference_year: i32) -> Option<i32> {
        if self.year_built <= 0 || self.year_built > reference_year {
            return None;
        }
        Some(reference_year - self.year_built)
    }

    pub fn current_age_years(&self) -> Option<i32> {
        self.age_years(Utc::now().year())
    }

    /// Restore the reset state in place
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
