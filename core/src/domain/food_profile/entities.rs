use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DEFAULT_CATEGORY: &str = "Unspecified";
pub const NON_EDIBLE_CATEGORY: &str = "None";
pub const DEFAULT_FLAVOR_PROFILE: &str = "Neutral";
pub const STANDARD_SERVING: &str = "Standard serving";

pub const DEFAULT_CAFFEINE_MG: f64 = 0.0;
pub const DEFAULT_GLYCEMIC_INDEX: u8 = 50;
pub const DEFAULT_INFLAMMATORY_INDEX: u8 = 5;
pub const DEFAULT_CALORIES_KCAL: f64 = 100.0;

pub const MAX_GLYCEMIC_INDEX: u8 = 100;
pub const MIN_INFLAMMATORY_INDEX: u8 = 1;
pub const MAX_INFLAMMATORY_INDEX: u8 = 10;

/// Lower bound (inclusive) of the medium glycemic band.
pub const GLYCEMIC_MEDIUM_FROM: u8 = 55;
/// Lower bound (inclusive) of the high glycemic band.
pub const GLYCEMIC_HIGH_FROM: u8 = 70;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
pub enum ProcessingLevel {
    #[default]
    Natural,
    #[serde(rename = "Minimally Processed")]
    MinimallyProcessed,
    Processed,
    #[serde(rename = "Ultra-Processed")]
    UltraProcessed,
}

impl ProcessingLevel {
    pub fn as_str(&self) -> &str {
        match self {
            ProcessingLevel::Natural => "Natural",
            ProcessingLevel::MinimallyProcessed => "Minimally Processed",
            ProcessingLevel::Processed => "Processed",
            ProcessingLevel::UltraProcessed => "Ultra-Processed",
        }
    }

    /// Ordinal penalty step, 0 for natural foods up to 3 for ultra-processed.
    pub fn ordinal(&self) -> u8 {
        match self {
            ProcessingLevel::Natural => 0,
            ProcessingLevel::MinimallyProcessed => 1,
            ProcessingLevel::Processed => 2,
            ProcessingLevel::UltraProcessed => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum GlycemicBand {
    Low,
    Medium,
    High,
}

impl GlycemicBand {
    pub fn from_index(index: u8) -> Self {
        if index >= GLYCEMIC_HIGH_FROM {
            GlycemicBand::High
        } else if index >= GLYCEMIC_MEDIUM_FROM {
            GlycemicBand::Medium
        } else {
            GlycemicBand::Low
        }
    }
}

/// Normalized, fully-defaulted attributes of a single food.
///
/// `glycemic_index` and `calories_kcal` are `None` when the value is known to
/// be unknown (an "Unknown" sentinel, or a non-edible item), which is distinct
/// from a missing value that takes the documented default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CanonicalFoodProfile {
    pub category: String,
    pub subcategory: String,
    pub processing_level: ProcessingLevel,
    pub caffeine_mg: f64,
    pub glycemic_index: Option<u8>,
    pub inflammatory_index: u8,
    pub calories_kcal: Option<f64>,
    pub allergens: BTreeSet<String>,
    pub flavor_profile: String,
    pub is_non_edible: bool,
    pub quantity_modifier: String,
}

impl Default for CanonicalFoodProfile {
    fn default() -> Self {
        Self {
            category: DEFAULT_CATEGORY.to_string(),
            subcategory: DEFAULT_CATEGORY.to_string(),
            processing_level: ProcessingLevel::Natural,
            caffeine_mg: DEFAULT_CAFFEINE_MG,
            glycemic_index: Some(DEFAULT_GLYCEMIC_INDEX),
            inflammatory_index: DEFAULT_INFLAMMATORY_INDEX,
            calories_kcal: Some(DEFAULT_CALORIES_KCAL),
            allergens: BTreeSet::new(),
            flavor_profile: DEFAULT_FLAVOR_PROFILE.to_string(),
            is_non_edible: false,
            quantity_modifier: STANDARD_SERVING.to_string(),
        }
    }
}

impl CanonicalFoodProfile {
    /// Profile for items that are not food. Every nutritional field sits in
    /// its unknown or zero state so nothing downstream can score it.
    pub fn non_edible(quantity_modifier: String) -> Self {
        Self {
            category: NON_EDIBLE_CATEGORY.to_string(),
            subcategory: NON_EDIBLE_CATEGORY.to_string(),
            processing_level: ProcessingLevel::Natural,
            caffeine_mg: 0.0,
            glycemic_index: None,
            inflammatory_index: MIN_INFLAMMATORY_INDEX,
            calories_kcal: None,
            allergens: BTreeSet::new(),
            flavor_profile: NON_EDIBLE_CATEGORY.to_string(),
            is_non_edible: true,
            quantity_modifier,
        }
    }

    pub fn glycemic_band(&self) -> Option<GlycemicBand> {
        self.glycemic_index.map(GlycemicBand::from_index)
    }

    pub fn has_allergen(&self, allergen: &str) -> bool {
        self.allergens.contains(allergen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glycemic_band_boundaries() {
        assert_eq!(GlycemicBand::from_index(0), GlycemicBand::Low);
        assert_eq!(GlycemicBand::from_index(54), GlycemicBand::Low);
        assert_eq!(GlycemicBand::from_index(55), GlycemicBand::Medium);
        assert_eq!(GlycemicBand::from_index(69), GlycemicBand::Medium);
        assert_eq!(GlycemicBand::from_index(70), GlycemicBand::High);
        assert_eq!(GlycemicBand::from_index(100), GlycemicBand::High);
    }

    #[test]
    fn test_processing_level_serializes_with_display_names() {
        let json = serde_json::to_string(&ProcessingLevel::UltraProcessed).unwrap();
        assert_eq!(json, "\"Ultra-Processed\"");

        let level: ProcessingLevel = serde_json::from_str("\"Minimally Processed\"").unwrap();
        assert_eq!(level, ProcessingLevel::MinimallyProcessed);
        assert_eq!(level.ordinal(), 1);
    }

    #[test]
    fn test_non_edible_profile_is_in_unknown_state() {
        let profile = CanonicalFoodProfile::non_edible(STANDARD_SERVING.to_string());

        assert!(profile.is_non_edible);
        assert_eq!(profile.glycemic_index, None);
        assert_eq!(profile.calories_kcal, None);
        assert_eq!(profile.caffeine_mg, 0.0);
        assert_eq!(profile.inflammatory_index, MIN_INFLAMMATORY_INDEX);
        assert!(profile.allergens.is_empty());
        assert_eq!(profile.glycemic_band(), None);
    }
}
