use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::domain::food_profile::entities::{
    DEFAULT_CAFFEINE_MG, DEFAULT_CALORIES_KCAL, DEFAULT_CATEGORY, DEFAULT_FLAVOR_PROFILE,
    DEFAULT_GLYCEMIC_INDEX, DEFAULT_INFLAMMATORY_INDEX,
};

/// Attribute keys, each with the aliases emitted by the lookup.
pub mod keys {
    pub const FOOD_NAME: &[&str] = &["food_name", "name"];
    pub const CATEGORY: &[&str] = &["food_category", "category"];
    pub const SUBCATEGORY: &[&str] = &["food_subcategory", "subcategory"];
    pub const PROCESSING_LEVEL: &[&str] = &["processing_level", "processing"];
    pub const CAFFEINE: &[&str] = &["caffeine_content_mg", "caffeine_mg", "caffeine"];
    pub const FLAVOR_PROFILE: &[&str] = &["flavor_profile", "flavor"];
    pub const ALLERGENS: &[&str] = &["common_allergens", "allergens"];
    pub const GLYCEMIC_INDEX: &[&str] = &["glycemic_index"];
    pub const INFLAMMATORY_INDEX: &[&str] = &["inflammatory_index"];
    pub const CALORIES: &[&str] = &["calories_kcal", "calories"];
    pub const IS_NON_EDIBLE: &[&str] = &["is_non_edible"];
    pub const QUANTITY: &[&str] = &["quantity"];
    pub const ALERT: &str = "alert";
}

pub const DEFAULT_ALERT: &str = "The food lookup flagged this input.";

/// Loosely-typed attribute record as returned by a food lookup.
///
/// Any key may be absent, wrongly typed or hold a sentinel such as
/// `"Unknown"`; [`crate::domain::food_profile::normalizer`] turns it into a
/// [`CanonicalFoodProfile`](crate::domain::food_profile::entities::CanonicalFoodProfile).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawAttributes(Map<String, Value>);

impl RawAttributes {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Attributes substituted when the lookup fails.
    pub fn fallback(food_name: &str) -> Self {
        let value = json!({
            "food_name": food_name,
            "food_category": DEFAULT_CATEGORY,
            "food_subcategory": DEFAULT_CATEGORY,
            "processing_level": "Natural",
            "caffeine_content_mg": DEFAULT_CAFFEINE_MG,
            "flavor_profile": DEFAULT_FLAVOR_PROFILE,
            "common_allergens": "None",
            "glycemic_index": DEFAULT_GLYCEMIC_INDEX,
            "inflammatory_index": DEFAULT_INFLAMMATORY_INDEX,
            "calories_kcal": DEFAULT_CALORIES_KCAL,
            "is_non_edible": false
        });

        Self::from(value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// First value present under any of `aliases`.
    pub fn get_any(&self, aliases: &[&str]) -> Option<&Value> {
        aliases.iter().find_map(|key| self.0.get(*key))
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn set_quantity(&mut self, quantity: &str) {
        self.insert(keys::QUANTITY[0], quantity);
    }

    pub fn food_name(&self) -> Option<&str> {
        self.get_any(keys::FOOD_NAME).and_then(Value::as_str)
    }

    /// Warning attached by the lookup. Any `alert` key counts, whatever its
    /// value; an empty or null one yields [`DEFAULT_ALERT`].
    pub fn alert(&self) -> Option<String> {
        let message = match self.0.get(keys::ALERT)? {
            Value::String(message) => message.trim().to_string(),
            Value::Null => String::new(),
            other => other.to_string(),
        };

        if message.is_empty() {
            Some(DEFAULT_ALERT.to_string())
        } else {
            Some(message)
        }
    }
}

impl From<Map<String, Value>> for RawAttributes {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Non-object values carry no attributes and become an empty record.
impl From<Value> for RawAttributes {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::new(),
        }
    }
}

/// How a canonical field value was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldSource {
    /// Parsed from the raw record.
    Provided,
    /// Key absent; the documented default applies.
    Missing,
    /// An "Unknown"/"None"-style sentinel; the unknown representation applies.
    Sentinel,
    /// Present but malformed; silently replaced by the default.
    Recovered,
}

/// Per-field provenance collected while normalizing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizationReport {
    fields: BTreeMap<&'static str, FieldSource>,
}

impl NormalizationReport {
    pub fn record(&mut self, field: &'static str, source: FieldSource) {
        self.fields.insert(field, source);
    }

    pub fn source(&self, field: &str) -> Option<FieldSource> {
        self.fields.get(field).copied()
    }

    pub fn recovered_fields(&self) -> Vec<&'static str> {
        self.fields_with(FieldSource::Recovered)
    }

    pub fn fields_with(&self, source: FieldSource) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|(_, s)| **s == source)
            .map(|(field, _)| *field)
            .collect()
    }

    /// True when no field had to be recovered from malformed input.
    pub fn is_clean(&self) -> bool {
        self.fields.values().all(|s| *s != FieldSource::Recovered)
    }
}

/// What to do when a present attribute value cannot be parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DegradedInputPolicy {
    /// Replace it with the field default and carry on.
    #[default]
    Lenient,
    /// Reject the record.
    Strict,
}
