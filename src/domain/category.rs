//! Two-level expense taxonomy used by case expenses and the note-based suggester.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::TrackerError;

pub const MEDICAL_SUBCATEGORIES: [&str; 7] = [
    "Scans",
    "Bloodwork",
    "Medication",
    "Hormone.Stash",
    "Consultation",
    "Retrieval.Procedure",
    "Insurance",
];

pub const TRAVEL_SUBCATEGORIES: [&str; 12] = [
    "Flights",
    "Hotel",
    "Stipend.Meals.Taxi.Petrol",
    "Airport.Shuttle",
    "Train",
    "Bus",
    "Car.Rental",
    "Parking",
    "Visa.Passport",
    "Travel.Insurance",
    "Baggage",
    "Companion",
];

/// Top-level expense categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MainCategory {
    Essay,
    Misc,
    #[serde(rename = "Shipping.Courier")]
    ShippingCourier,
    Medical,
    Travel,
}

impl MainCategory {
    pub const ALL: [MainCategory; 5] = [
        MainCategory::Essay,
        MainCategory::Misc,
        MainCategory::ShippingCourier,
        MainCategory::Medical,
        MainCategory::Travel,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MainCategory::Essay => "Essay",
            MainCategory::Misc => "Misc",
            MainCategory::ShippingCourier => "Shipping.Courier",
            MainCategory::Medical => "Medical",
            MainCategory::Travel => "Travel",
        }
    }

    /// Subcategories offered under this main category; empty for flat categories.
    pub fn subcategories(&self) -> &'static [&'static str] {
        match self {
            MainCategory::Medical => &MEDICAL_SUBCATEGORIES,
            MainCategory::Travel => &TRAVEL_SUBCATEGORIES,
            _ => &[],
        }
    }

    /// Returns the canonical spelling of `sub` if it belongs to this category.
    pub fn canonical_subcategory(&self, sub: &str) -> Option<&'static str> {
        let wanted = sub.trim();
        self.subcategories()
            .iter()
            .copied()
            .find(|candidate| candidate.eq_ignore_ascii_case(wanted))
    }

    pub fn is_valid_subcategory(&self, sub: &str) -> bool {
        self.canonical_subcategory(sub).is_some()
    }
}

impl fmt::Display for MainCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MainCategory {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        MainCategory::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| TrackerError::UnknownCategory(wanted.to_string()))
    }
}

/// A suggested `(main, sub)` pair.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct CategorySuggestion {
    pub main: MainCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<&'static str>,
}

impl CategorySuggestion {
    pub const fn main_only(main: MainCategory) -> Self {
        Self { main, sub: None }
    }

    pub const fn with_sub(main: MainCategory, sub: &'static str) -> Self {
        Self {
            main,
            sub: Some(sub),
        }
    }
}

impl Default for CategorySuggestion {
    fn default() -> Self {
        Self::main_only(MainCategory::Misc)
    }
}

impl fmt::Display for CategorySuggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sub {
            Some(sub) => write!(f, "{} / {}", self.main, sub),
            None => write!(f, "{}", self.main),
        }
    }
}
