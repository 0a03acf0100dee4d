use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::domain::food_profile::{
    entities::{
        CanonicalFoodProfile, DEFAULT_CAFFEINE_MG, DEFAULT_CALORIES_KCAL, DEFAULT_CATEGORY,
        DEFAULT_FLAVOR_PROFILE, DEFAULT_GLYCEMIC_INDEX, DEFAULT_INFLAMMATORY_INDEX,
        MAX_GLYCEMIC_INDEX, MAX_INFLAMMATORY_INDEX, MIN_INFLAMMATORY_INDEX, NON_EDIBLE_CATEGORY,
        ProcessingLevel, STANDARD_SERVING,
    },
    errors::NormalizationError,
    value_objects::{DegradedInputPolicy, FieldSource, NormalizationReport, RawAttributes, keys},
};

/// Representative indices for glycemic index given as a word.
const GLYCEMIC_LOW_WORD: u8 = 40;
const GLYCEMIC_MEDIUM_WORD: u8 = 62;
const GLYCEMIC_HIGH_WORD: u8 = 78;

const SENTINELS: &[&str] = &["", "unknown", "none", "n/a", "na", "null", "not applicable"];

static RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+(?:\.\d+)?)\s*(?:-|–|to)\s*(\d+(?:\.\d+)?)")
        .expect("range pattern is valid")
});

static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?\d+(?:\.\d+)?").expect("number pattern is valid"));

static ALLERGEN_DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,;/&|]|\band\b").expect("delimiter pattern is valid"));

/// Normalizes a raw attribute record, silently defaulting malformed values.
pub fn normalize(raw: &RawAttributes) -> CanonicalFoodProfile {
    normalize_with_report(raw).0
}

/// Normalizes under the strict policy: any malformed value is an error.
pub fn try_normalize(raw: &RawAttributes) -> Result<CanonicalFoodProfile, NormalizationError> {
    DegradedInputPolicy::Strict.apply(raw)
}

impl DegradedInputPolicy {
    pub fn apply(self, raw: &RawAttributes) -> Result<CanonicalFoodProfile, NormalizationError> {
        let (profile, report) = normalize_with_report(raw);

        match self {
            DegradedInputPolicy::Lenient => Ok(profile),
            DegradedInputPolicy::Strict if report.is_clean() => Ok(profile),
            DegradedInputPolicy::Strict => Err(NormalizationError::Malformed {
                fields: report.recovered_fields(),
            }),
        }
    }
}

/// Normalizes and reports, per field, where each value came from.
pub fn normalize_with_report(raw: &RawAttributes) -> (CanonicalFoodProfile, NormalizationReport) {
    let mut report = NormalizationReport::default();

    let quantity_modifier = report.take("quantity_modifier", read_quantity(raw));
    let non_edible_flag = report.take("is_non_edible", read_non_edible(raw));
    let category_says_none = raw
        .get_any(keys::CATEGORY)
        .and_then(Value::as_str)
        .is_some_and(|c| c.trim().eq_ignore_ascii_case(NON_EDIBLE_CATEGORY));

    if non_edible_flag || category_says_none {
        return (CanonicalFoodProfile::non_edible(quantity_modifier), report);
    }

    let profile = CanonicalFoodProfile {
        category: report.take("category", read_text(raw, keys::CATEGORY, DEFAULT_CATEGORY)),
        subcategory: report.take(
            "subcategory",
            read_text(raw, keys::SUBCATEGORY, DEFAULT_CATEGORY),
        ),
        processing_level: report.take("processing_level", read_processing_level(raw)),
        caffeine_mg: report.take("caffeine_mg", read_caffeine(raw)),
        glycemic_index: report.take("glycemic_index", read_glycemic_index(raw)),
        inflammatory_index: report.take("inflammatory_index", read_inflammatory_index(raw)),
        calories_kcal: report.take("calories_kcal", read_calories(raw)),
        allergens: report.take("allergens", read_allergens(raw)),
        flavor_profile: report.take(
            "flavor_profile",
            read_text(raw, keys::FLAVOR_PROFILE, DEFAULT_FLAVOR_PROFILE),
        ),
        is_non_edible: false,
        quantity_modifier,
    };

    (profile, report)
}

impl NormalizationReport {
    fn take<T>(&mut self, field: &'static str, (value, source): (T, FieldSource)) -> T {
        self.record(field, source);
        value
    }
}

enum Reading<'a> {
    Missing,
    Sentinel,
    Present(&'a Value),
}

fn read<'a>(raw: &'a RawAttributes, aliases: &[&str]) -> Reading<'a> {
    match raw.get_any(aliases) {
        None => Reading::Missing,
        Some(Value::Null) => Reading::Sentinel,
        Some(Value::String(s)) if is_sentinel(s) => Reading::Sentinel,
        Some(value) => Reading::Present(value),
    }
}

fn is_sentinel(text: &str) -> bool {
    let text = text.trim().to_lowercase();
    SENTINELS.contains(&text.as_str())
}

/// Extracts a number from a JSON number or from text such as "95 mg",
/// "7/10" or "55-65" (midpoint).
fn parse_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            if let Some(captures) = RANGE.captures(s) {
                let low: f64 = captures[1].parse().ok()?;
                let high: f64 = captures[2].parse().ok()?;
                Some((low + high) / 2.0)
            } else {
                NUMBER.find(s).and_then(|m| m.as_str().parse().ok())
            }
        }
        _ => None,
    };

    number.filter(|n| n.is_finite())
}

fn read_text(raw: &RawAttributes, aliases: &[&str], default: &str) -> (String, FieldSource) {
    match read(raw, aliases) {
        Reading::Missing => (default.to_string(), FieldSource::Missing),
        Reading::Sentinel => (default.to_string(), FieldSource::Sentinel),
        Reading::Present(Value::String(s)) => (s.trim().to_string(), FieldSource::Provided),
        Reading::Present(Value::Array(items)) => {
            let parts: Vec<&str> = items
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|s| !is_sentinel(s))
                .collect();

            if parts.is_empty() {
                (default.to_string(), FieldSource::Recovered)
            } else {
                (parts.join(", "), FieldSource::Provided)
            }
        }
        Reading::Present(_) => (default.to_string(), FieldSource::Recovered),
    }
}

fn read_quantity(raw: &RawAttributes) -> (String, FieldSource) {
    match read(raw, keys::QUANTITY) {
        Reading::Present(Value::String(s)) => (s.trim().to_string(), FieldSource::Provided),
        Reading::Present(_) => (STANDARD_SERVING.to_string(), FieldSource::Recovered),
        Reading::Missing => (STANDARD_SERVING.to_string(), FieldSource::Missing),
        Reading::Sentinel => (STANDARD_SERVING.to_string(), FieldSource::Sentinel),
    }
}

fn read_non_edible(raw: &RawAttributes) -> (bool, FieldSource) {
    match read(raw, keys::IS_NON_EDIBLE) {
        Reading::Missing => (false, FieldSource::Missing),
        Reading::Sentinel => (false, FieldSource::Sentinel),
        Reading::Present(Value::Bool(flag)) => (*flag, FieldSource::Provided),
        Reading::Present(Value::Number(n)) => match n.as_i64() {
            Some(1) => (true, FieldSource::Provided),
            Some(0) => (false, FieldSource::Provided),
            _ => (false, FieldSource::Recovered),
        },
        Reading::Present(Value::String(s)) => match s.trim().to_lowercase().as_str() {
            "true" | "yes" | "1" => (true, FieldSource::Provided),
            "false" | "no" | "0" => (false, FieldSource::Provided),
            _ => (false, FieldSource::Recovered),
        },
        Reading::Present(_) => (false, FieldSource::Recovered),
    }
}

fn parse_processing_level(text: &str) -> Option<ProcessingLevel> {
    let text = text.trim().to_lowercase();
    let words: Vec<&str> = text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();
    let has = |candidates: &[&str]| words.iter().any(|w| candidates.contains(w));
    let negated = words
        .windows(2)
        .any(|pair| matches!(pair, ["not" | "non" | "un", "processed"]));

    if has(&["ultra", "ultraprocessed", "highly"]) {
        Some(ProcessingLevel::UltraProcessed)
    } else if has(&["minimal", "minimally", "lightly"]) {
        Some(ProcessingLevel::MinimallyProcessed)
    } else if negated || has(&["unprocessed", "natural", "whole", "raw", "fresh"]) {
        Some(ProcessingLevel::Natural)
    } else if has(&["processed"]) {
        Some(ProcessingLevel::Processed)
    } else {
        None
    }
}

fn read_processing_level(raw: &RawAttributes) -> (ProcessingLevel, FieldSource) {
    match read(raw, keys::PROCESSING_LEVEL) {
        Reading::Missing => (ProcessingLevel::Natural, FieldSource::Missing),
        Reading::Sentinel => (ProcessingLevel::Natural, FieldSource::Sentinel),
        Reading::Present(Value::String(s)) => match parse_processing_level(s) {
            Some(level) => (level, FieldSource::Provided),
            None => (ProcessingLevel::Natural, FieldSource::Recovered),
        },
        Reading::Present(_) => (ProcessingLevel::Natural, FieldSource::Recovered),
    }
}

fn read_caffeine(raw: &RawAttributes) -> (f64, FieldSource) {
    match read(raw, keys::CAFFEINE) {
        Reading::Missing => (DEFAULT_CAFFEINE_MG, FieldSource::Missing),
        Reading::Sentinel => (DEFAULT_CAFFEINE_MG, FieldSource::Sentinel),
        Reading::Present(value) => match parse_number(value) {
            Some(mg) => (mg.max(0.0), FieldSource::Provided),
            None => (DEFAULT_CAFFEINE_MG, FieldSource::Recovered),
        },
    }
}

fn glycemic_word(text: &str) -> Option<u8> {
    let text = text.to_lowercase();

    if text.contains("high") {
        Some(GLYCEMIC_HIGH_WORD)
    } else if text.contains("medium") || text.contains("moderate") {
        Some(GLYCEMIC_MEDIUM_WORD)
    } else if text.contains("low") {
        Some(GLYCEMIC_LOW_WORD)
    } else {
        None
    }
}

fn read_glycemic_index(raw: &RawAttributes) -> (Option<u8>, FieldSource) {
    let value = match read(raw, keys::GLYCEMIC_INDEX) {
        Reading::Missing => return (Some(DEFAULT_GLYCEMIC_INDEX), FieldSource::Missing),
        Reading::Sentinel => return (None, FieldSource::Sentinel),
        Reading::Present(value) => value,
    };

    let parsed = parse_number(value)
        .map(|gi| gi.round().clamp(0.0, f64::from(MAX_GLYCEMIC_INDEX)) as u8)
        .or_else(|| value.as_str().and_then(glycemic_word));

    match parsed {
        Some(gi) => (Some(gi), FieldSource::Provided),
        None => (Some(DEFAULT_GLYCEMIC_INDEX), FieldSource::Recovered),
    }
}

fn inflammation_word(text: &str) -> Option<u8> {
    let text = text.to_lowercase();

    if text.contains("anti") {
        Some(2)
    } else if text.contains("high") {
        Some(8)
    } else if text.contains("moderate") || text.contains("medium") {
        Some(5)
    } else if text.contains("low") {
        Some(3)
    } else {
        None
    }
}

fn read_inflammatory_index(raw: &RawAttributes) -> (u8, FieldSource) {
    let value = match read(raw, keys::INFLAMMATORY_INDEX) {
        Reading::Missing => return (DEFAULT_INFLAMMATORY_INDEX, FieldSource::Missing),
        Reading::Sentinel => return (DEFAULT_INFLAMMATORY_INDEX, FieldSource::Sentinel),
        Reading::Present(value) => value,
    };

    let parsed = parse_number(value)
        .map(|index| {
            index.round().clamp(
                f64::from(MIN_INFLAMMATORY_INDEX),
                f64::from(MAX_INFLAMMATORY_INDEX),
            ) as u8
        })
        .or_else(|| value.as_str().and_then(inflammation_word));

    match parsed {
        Some(index) => (index, FieldSource::Provided),
        None => (DEFAULT_INFLAMMATORY_INDEX, FieldSource::Recovered),
    }
}

fn read_calories(raw: &RawAttributes) -> (Option<f64>, FieldSource) {
    match read(raw, keys::CALORIES) {
        Reading::Missing => (Some(DEFAULT_CALORIES_KCAL), FieldSource::Missing),
        Reading::Sentinel => (None, FieldSource::Sentinel),
        Reading::Present(value) => match parse_number(value) {
            Some(kcal) => (Some(kcal.max(0.0)), FieldSource::Provided),
            None => (Some(DEFAULT_CALORIES_KCAL), FieldSource::Recovered),
        },
    }
}

fn split_allergens(text: &str, into: &mut BTreeSet<String>) {
    let text = text.to_lowercase();

    for token in ALLERGEN_DELIMITER.split(&text) {
        let token = token.trim();
        if !is_sentinel(token) {
            into.insert(token.to_string());
        }
    }
}

fn read_allergens(raw: &RawAttributes) -> (BTreeSet<String>, FieldSource) {
    let mut allergens = BTreeSet::new();

    let source = match read(raw, keys::ALLERGENS) {
        Reading::Missing => FieldSource::Missing,
        Reading::Sentinel => FieldSource::Sentinel,
        Reading::Present(Value::String(s)) => {
            split_allergens(s, &mut allergens);
            FieldSource::Provided
        }
        Reading::Present(Value::Array(items)) => {
            let listed: Vec<&str> = items
                .iter()
                .filter_map(Value::as_str)
                .filter(|item| !is_sentinel(item))
                .collect();

            for item in &listed {
                split_allergens(item, &mut allergens);
            }

            if listed.is_empty() && !items.is_empty() {
                FieldSource::Sentinel
            } else {
                FieldSource::Provided
            }
        }
        Reading::Present(_) => FieldSource::Recovered,
    };

    (allergens, source)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn raw(value: Value) -> RawAttributes {
        RawAttributes::from(value)
    }

    #[test]
    fn test_empty_record_yields_documented_defaults() {
        let profile = normalize(&RawAttributes::new());

        assert_eq!(profile, CanonicalFoodProfile::default());
        assert_eq!(profile.category, "Unspecified");
        assert_eq!(profile.processing_level, ProcessingLevel::Natural);
        assert_eq!(profile.caffeine_mg, 0.0);
        assert_eq!(profile.glycemic_index, Some(50));
        assert_eq!(profile.inflammatory_index, 5);
        assert_eq!(profile.calories_kcal, Some(100.0));
        assert!(profile.allergens.is_empty());
        assert_eq!(profile.quantity_modifier, "Standard serving");
    }

    #[test]
    fn test_unrecognized_keys_normalize_like_empty_record() {
        let profile = normalize(&raw(json!({
            "colour": "red",
            "origin": "Spain",
            "rating": 4
        })));

        assert_eq!(profile, normalize(&RawAttributes::new()));
    }

    #[test]
    fn test_fallback_attributes_normalize_like_empty_record() {
        let (profile, report) = normalize_with_report(&RawAttributes::fallback("pizza"));

        assert_eq!(profile, normalize(&RawAttributes::new()));
        assert!(report.is_clean());
    }

    #[test]
    fn test_full_record_is_parsed() {
        let profile = normalize(&raw(json!({
            "food_name": "Dark chocolate",
            "food_category": "Sweets",
            "food_subcategory": "Chocolate",
            "processing_level": "Processed",
            "caffeine_content_mg": 43,
            "flavor_profile": "Bitter",
            "common_allergens": "Dairy, Soy",
            "glycemic_index": 23,
            "inflammatory_index": 4,
            "calories_kcal": 546,
            "is_non_edible": false
        })));

        assert_eq!(profile.category, "Sweets");
        assert_eq!(profile.subcategory, "Chocolate");
        assert_eq!(profile.processing_level, ProcessingLevel::Processed);
        assert_eq!(profile.caffeine_mg, 43.0);
        assert_eq!(profile.flavor_profile, "Bitter");
        assert_eq!(
            profile.allergens,
            BTreeSet::from(["dairy".to_string(), "soy".to_string()])
        );
        assert_eq!(profile.glycemic_index, Some(23));
        assert_eq!(profile.inflammatory_index, 4);
        assert_eq!(profile.calories_kcal, Some(546.0));
        assert!(!profile.is_non_edible);
    }

    #[test]
    fn test_sentinels_map_to_unknown_representation() {
        let (profile, report) = normalize_with_report(&raw(json!({
            "food_category": "Unknown",
            "glycemic_index": "Unknown",
            "calories_kcal": "N/A",
            "caffeine_content_mg": "None",
            "inflammatory_index": "",
            "processing_level": null
        })));

        assert_eq!(profile.category, "Unspecified");
        assert_eq!(profile.glycemic_index, None);
        assert_eq!(profile.calories_kcal, None);
        assert_eq!(profile.caffeine_mg, 0.0);
        assert_eq!(profile.inflammatory_index, 5);
        assert_eq!(profile.processing_level, ProcessingLevel::Natural);
        assert_eq!(report.source("glycemic_index"), Some(FieldSource::Sentinel));
        assert_eq!(report.source("processing_level"), Some(FieldSource::Sentinel));
        assert!(report.is_clean());
    }

    #[test]
    fn test_malformed_numbers_degrade_to_defaults() {
        let (profile, report) = normalize_with_report(&raw(json!({
            "caffeine_content_mg": "lots",
            "glycemic_index": { "value": 40 },
            "inflammatory_index": true,
            "calories_kcal": "plenty"
        })));

        assert_eq!(profile.caffeine_mg, 0.0);
        assert_eq!(profile.glycemic_index, Some(50));
        assert_eq!(profile.inflammatory_index, 5);
        assert_eq!(profile.calories_kcal, Some(100.0));
        assert_eq!(
            report.recovered_fields(),
            vec![
                "caffeine_mg",
                "calories_kcal",
                "glycemic_index",
                "inflammatory_index"
            ]
        );
    }

    #[test]
    fn test_numbers_inside_text_are_extracted() {
        let profile = normalize(&raw(json!({
            "caffeine_content_mg": "95 mg",
            "glycemic_index": "55-65",
            "inflammatory_index": "7/10",
            "calories_kcal": "250 kcal per 100g"
        })));

        assert_eq!(profile.caffeine_mg, 95.0);
        assert_eq!(profile.glycemic_index, Some(60));
        assert_eq!(profile.inflammatory_index, 7);
        assert_eq!(profile.calories_kcal, Some(250.0));
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let profile = normalize(&raw(json!({
            "caffeine_content_mg": -20,
            "glycemic_index": 140,
            "inflammatory_index": 0,
            "calories_kcal": -5
        })));

        assert_eq!(profile.caffeine_mg, 0.0);
        assert_eq!(profile.glycemic_index, Some(100));
        assert_eq!(profile.inflammatory_index, 1);
        assert_eq!(profile.calories_kcal, Some(0.0));
    }

    #[test]
    fn test_glycemic_index_given_as_word() {
        let gi = |word: &str| normalize(&raw(json!({ "glycemic_index": word }))).glycemic_index;

        assert_eq!(gi("Low"), Some(40));
        assert_eq!(gi("Medium"), Some(62));
        assert_eq!(gi("moderate"), Some(62));
        assert_eq!(gi("HIGH"), Some(78));
        assert_eq!(gi("Low (35)"), Some(35));
    }

    #[test]
    fn test_processing_level_free_text() {
        let level = |text: &str| {
            normalize(&raw(json!({ "processing_level": text }))).processing_level
        };

        assert_eq!(level("Natural"), ProcessingLevel::Natural);
        assert_eq!(level("Unprocessed"), ProcessingLevel::Natural);
        assert_eq!(level("Minimally Processed"), ProcessingLevel::MinimallyProcessed);
        assert_eq!(level("Processed"), ProcessingLevel::Processed);
        assert_eq!(level("Ultra-Processed"), ProcessingLevel::UltraProcessed);
        assert_eq!(level("highly processed"), ProcessingLevel::UltraProcessed);
        assert_eq!(level("fermented"), ProcessingLevel::Natural);
    }

    #[test]
    fn test_processing_level_matches_whole_words() {
        let parsed = |text: &str| {
            let (profile, report) =
                normalize_with_report(&raw(json!({ "processing_level": text })));
            (profile.processing_level, report.source("processing_level"))
        };
        let provided = |level| (level, Some(FieldSource::Provided));

        assert_eq!(parsed("not processed"), provided(ProcessingLevel::Natural));
        assert_eq!(parsed("Non-processed"), provided(ProcessingLevel::Natural));
        assert_eq!(
            parsed("wholesale packaged, processed"),
            provided(ProcessingLevel::Processed)
        );
        assert_eq!(
            parsed("drawn butter"),
            (ProcessingLevel::Natural, Some(FieldSource::Recovered))
        );
    }

    #[test]
    fn test_allergens_are_split_and_lowercased() {
        let allergens = |value: Value| normalize(&raw(json!({ "common_allergens": value }))).allergens;

        assert_eq!(
            allergens(json!("Dairy; Gluten and Eggs / Nuts")),
            BTreeSet::from([
                "dairy".to_string(),
                "eggs".to_string(),
                "gluten".to_string(),
                "nuts".to_string()
            ])
        );
        assert_eq!(
            allergens(json!(["Soy", "none", " Wheat "])),
            BTreeSet::from(["soy".to_string(), "wheat".to_string()])
        );
        assert!(allergens(json!("None")).is_empty());
        assert!(allergens(json!("NONE")).is_empty());
    }

    #[test]
    fn test_allergen_sentinels_are_not_split() {
        for value in [json!("N/A"), json!(["N/A"]), json!(["none", "Not applicable"])] {
            let (profile, report) =
                normalize_with_report(&raw(json!({ "common_allergens": value })));

            assert!(profile.allergens.is_empty());
            assert_eq!(report.source("allergens"), Some(FieldSource::Sentinel));
        }

        let profile = normalize(&raw(json!({ "common_allergens": ["N/A", "Peanuts"] })));
        assert_eq!(profile.allergens, BTreeSet::from(["peanuts".to_string()]));
    }

    #[test]
    fn test_non_edible_flag_short_circuits() {
        let profile = normalize(&raw(json!({
            "food_category": "Electronics",
            "glycemic_index": 70,
            "caffeine_content_mg": 200,
            "is_non_edible": true,
            "quantity": "double serving"
        })));

        assert!(profile.is_non_edible);
        assert_eq!(profile.glycemic_index, None);
        assert_eq!(profile.calories_kcal, None);
        assert_eq!(profile.caffeine_mg, 0.0);
        assert_eq!(profile.quantity_modifier, "double serving");
    }

    #[test]
    fn test_category_none_short_circuits() {
        let profile = normalize(&raw(json!({
            "name": "keyboard",
            "category": "None",
            "subcategory": "None",
            "processing_level": "None",
            "calories": "Unknown",
            "glycemic_index": "Unknown",
            "inflammatory_index": "1/10",
            "allergens": "None"
        })));

        assert!(profile.is_non_edible);
        assert_eq!(profile, CanonicalFoodProfile::non_edible("Standard serving".to_string()));
    }

    #[test]
    fn test_non_edible_string_flag() {
        let profile = normalize(&raw(json!({ "is_non_edible": "yes" })));
        assert!(profile.is_non_edible);

        let (profile, report) = normalize_with_report(&raw(json!({ "is_non_edible": "maybe" })));
        assert!(!profile.is_non_edible);
        assert_eq!(report.source("is_non_edible"), Some(FieldSource::Recovered));
    }

    #[test]
    fn test_flavor_profile_array_is_joined() {
        let profile = normalize(&raw(json!({ "flavor_profile": ["Sweet", "Sour"] })));
        assert_eq!(profile.flavor_profile, "Sweet, Sour");
    }

    #[test]
    fn test_strict_policy_rejects_malformed_values() {
        let record = raw(json!({ "caffeine_content_mg": "lots", "glycemic_index": 40 }));

        assert_eq!(
            try_normalize(&record),
            Err(NormalizationError::Malformed {
                fields: vec!["caffeine_mg"]
            })
        );
        assert!(DegradedInputPolicy::Lenient.apply(&record).is_ok());
    }

    #[test]
    fn test_strict_policy_accepts_missing_and_sentinel_values() {
        let record = raw(json!({ "glycemic_index": "Unknown" }));

        let profile = try_normalize(&record).unwrap();
        assert_eq!(profile.glycemic_index, None);
    }
}
