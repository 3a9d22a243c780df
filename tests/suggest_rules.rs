use case_ledger::{
    domain::{CategorySuggestion, MainCategory},
    suggest::{rules, suggest_category},
};

use MainCategory::{Essay, Medical, Misc, ShippingCourier, Travel};

/// One note per rule, in rule priority order, that the rule should claim.
const RULE_SAMPLES: &[(&str, MainCategory, Option<&str>)] = &[
    ("Uber to airport", Travel, Some("Stipend.Meals.Taxi.Petrol")),
    ("Return flight JFK", Travel, Some("Flights")),
    ("Airport shuttle", Travel, Some("Airport.Shuttle")),
    ("Hotel near clinic", Travel, Some("Hotel")),
    ("Amtrak ticket", Travel, Some("Train")),
    ("Greyhound coach", Travel, Some("Bus")),
    ("Hertz car rental", Travel, Some("Car.Rental")),
    ("Parking garage", Travel, Some("Parking")),
    ("Passport renewal", Travel, Some("Visa.Passport")),
    ("Travel insurance policy", Travel, Some("Travel.Insurance")),
    ("Extra luggage fee", Travel, Some("Baggage")),
    ("Companion ticket", Travel, Some("Companion")),
    ("Hormone stash pickup", Medical, Some("Hormone.Stash")),
    ("Clinic ultrasound", Medical, Some("Scans")),
    ("Bloodwork panel", Medical, Some("Bloodwork")),
    ("Pharmacy prescription", Medical, Some("Medication")),
    ("Psych evaluation", Medical, Some("Consultation")),
    ("Retrieval procedure", Medical, Some("Retrieval.Procedure")),
    ("Insurance premium", Medical, Some("Insurance")),
    ("Personal essay edits", Essay, None),
    ("FedEx overnight", ShippingCourier, None),
    ("Hospital copay", Medical, None),
    ("Trip expenses", Travel, None),
];

#[test]
fn every_rule_has_a_sample_in_priority_order() {
    assert_eq!(rules().len(), RULE_SAMPLES.len());
    for (rule, (sample, main, sub)) in rules().iter().zip(RULE_SAMPLES) {
        let expected = CategorySuggestion { main: *main, sub: *sub };
        assert_eq!(rule.suggestion, expected, "rule order drifted at `{sample}`");
        assert_eq!(suggest_category(sample), expected, "sample `{sample}`");
    }
}

#[test]
fn first_rule_wins_on_overlap() {
    assert_eq!(
        suggest_category("Taxi to hotel then flight"),
        CategorySuggestion::with_sub(Travel, "Stipend.Meals.Taxi.Petrol")
    );
    assert_eq!(
        suggest_category("Travel insurance"),
        CategorySuggestion::with_sub(Travel, "Travel.Insurance")
    );
    assert_eq!(
        suggest_category("hormone"),
        CategorySuggestion::with_sub(Medical, "Medication")
    );
}

#[test]
fn unmatched_text_falls_back_to_misc() {
    assert_eq!(suggest_category(""), CategorySuggestion::main_only(Misc));
    assert_eq!(suggest_category("office chair"), CategorySuggestion::main_only(Misc));
}

#[test]
fn suggestion_is_deterministic() {
    for (sample, _, _) in RULE_SAMPLES {
        assert_eq!(suggest_category(sample), suggest_category(sample));
    }
}

#[test]
fn matching_ignores_case() {
    assert_eq!(suggest_category("CLINIC ULTRASOUND"), suggest_category("clinic ultrasound"));
}
