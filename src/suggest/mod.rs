//! Maps free-text expense notes to a suggested category.
//!
//! The rule table is evaluated top to bottom against the lowercased note and the first match
//! wins. Travel subcategory rules come first, then Medical subcategory rules, then coarse
//! main-category rules. Anything unmatched is `Misc`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::category::{CategorySuggestion, MainCategory};

use MainCategory::{Essay, Medical, ShippingCourier, Travel};

/// A compiled suggestion rule.
#[derive(Debug)]
pub struct CategoryRule {
    pub pattern: Regex,
    pub suggestion: CategorySuggestion,
}

impl CategoryRule {
    pub fn matches(&self, normalized: &str) -> bool {
        self.pattern.is_match(normalized)
    }
}

const RULE_TABLE: &[(&str, MainCategory, Option<&str>)] = &[
    // Travel
    (
        r"\b(taxi|uber|lyft|cab|petrol|fuel|gas station|stipend|per diem|meals?|food|lunch|dinner|breakfast)\b",
        Travel,
        Some("Stipend.Meals.Taxi.Petrol"),
    ),
    (r"\b(flights?|airfare|airline|plane ticket)\b", Travel, Some("Flights")),
    (r"\b(airport|shuttle)\b", Travel, Some("Airport.Shuttle")),
    (r"\b(hotel|motel|airbnb|lodging|accommodation)\b", Travel, Some("Hotel")),
    (r"\b(train|rail|amtrak|subway|metro)\b", Travel, Some("Train")),
    (r"\b(bus|coach|greyhound)\b", Travel, Some("Bus")),
    (r"\b(car rental|rental car|car hire|hertz|avis)\b", Travel, Some("Car.Rental")),
    (r"\bparking\b", Travel, Some("Parking")),
    (r"\b(visa|passport)\b", Travel, Some("Visa.Passport")),
    (r"\btravel insurance\b", Travel, Some("Travel.Insurance")),
    (r"\b(baggage|luggage|checked bag)\b", Travel, Some("Baggage")),
    (r"\bcompanion\b", Travel, Some("Companion")),
    // Medical
    (r"\bhormones?\b.*\bstash\b", Medical, Some("Hormone.Stash")),
    (r"\b(ultrasound|sonogram|scans?|mri|x-?ray)\b", Medical, Some("Scans")),
    (r"\b(blood|bloodwork|labs?|panel|screening)\b", Medical, Some("Bloodwork")),
    (
        r"\b(hormones?|medications?|meds|pharmacy|prescription|injections?)\b",
        Medical,
        Some("Medication"),
    ),
    (
        r"\b(consult|consultation|appointment|doctor|evaluation|psych\w*)\b",
        Medical,
        Some("Consultation"),
    ),
    (
        r"\b(retrieval|procedure|surgery|embryo transfer)\b",
        Medical,
        Some("Retrieval.Procedure"),
    ),
    (r"\binsurance\b", Medical, Some("Insurance")),
    // Coarse main categories
    (r"\b(essay|writing|statement|profile)\b", Essay, None),
    (
        r"\b(courier|shipping|fedex|dhl|ups|postage|parcel|delivery)\b",
        ShippingCourier,
        None,
    ),
    (r"\b(clinic|hospital|medical|nurse|health)\b", Medical, None),
    (r"\b(travel|trip|journey)\b", Travel, None),
];

static RULES: Lazy<Vec<CategoryRule>> = Lazy::new(|| {
    RULE_TABLE
        .iter()
        .map(|(pattern, main, sub)| CategoryRule {
            pattern: Regex::new(pattern).expect("category rule patterns are static and valid"),
            suggestion: CategorySuggestion { main: *main, sub: *sub },
        })
        .collect()
});

/// The compiled rules in priority order.
pub fn rules() -> &'static [CategoryRule] {
    &RULES
}

/// Suggests a category for `text`. Empty or unrecognised text yields `Misc`.
pub fn suggest_category(text: &str) -> CategorySuggestion {
    let normalized = text.trim().to_lowercase();
    if normalized.is_empty() {
        return CategorySuggestion::default();
    }
    rules()
        .iter()
        .find(|rule| rule.matches(&normalized))
        .map(|rule| rule.suggestion)
        .unwrap_or_default()
}
