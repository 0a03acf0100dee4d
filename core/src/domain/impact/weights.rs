use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::domain::impact::entities::SymptomCategory;

pub const SCORE_MIN: f64 = -10.0;
pub const SCORE_MAX: f64 = 10.0;

/// Scores at or below this classify as Harmful.
pub const HARMFUL_THRESHOLD: f64 = -2.0;
/// Scores at or above this classify as Beneficial.
pub const BENEFICIAL_THRESHOLD: f64 = 2.0;

/// Inflammatory index that contributes nothing. Lower indices push towards
/// Beneficial, higher ones towards Harmful.
pub const INFLAMMATION_PIVOT: f64 = 5.0;

#[derive(Debug, Error)]
pub enum WeightTableError {
    #[error("Weight table has no entry for {0:?}")]
    MissingSymptom(SymptomCategory),

    #[error("Weight `{field}` for {symptom:?} must be a finite, non-negative number")]
    InvalidWeight {
        symptom: SymptomCategory,
        field: &'static str,
    },

    #[error("Failed to parse weight table: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read weight table: {0}")]
    Io(#[from] std::io::Error),
}

/// Signed score per glycemic band, multiplied by the serving size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GlycemicWeights {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryAdjustment {
    /// Word or phrase matched against whole words of "category subcategory",
    /// plural forms included.
    pub keyword: String,
    pub weight: f64,
}

impl CategoryAdjustment {
    pub fn new(keyword: &str, weight: f64) -> Self {
        Self {
            keyword: keyword.to_lowercase(),
            weight,
        }
    }
}

/// Rule weights for a single symptom.
///
/// Penalties are magnitudes (>= 0) and are subtracted by the engine;
/// glycemic and category weights are signed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SymptomWeights {
    /// Subtracted once per processing level step (0 natural .. 3 ultra-processed).
    pub processing_penalty: f64,
    pub glycemic: GlycemicWeights,
    /// Score per inflammatory index point below [`INFLAMMATION_PIVOT`].
    pub inflammation_weight: f64,
    /// Caffeine per serving above which `caffeine_penalty` applies.
    pub caffeine_threshold_mg: f64,
    pub caffeine_penalty: f64,
    pub allergen_watch_list: BTreeSet<String>,
    /// Subtracted once per allergen on the watch list.
    pub allergen_penalty: f64,
    #[serde(default)]
    pub category_adjustments: Vec<CategoryAdjustment>,
}

impl SymptomWeights {
    fn validate(&self, symptom: SymptomCategory) -> Result<(), WeightTableError> {
        let magnitudes = [
            ("processing_penalty", self.processing_penalty),
            ("inflammation_weight", self.inflammation_weight),
            ("caffeine_threshold_mg", self.caffeine_threshold_mg),
            ("caffeine_penalty", self.caffeine_penalty),
            ("allergen_penalty", self.allergen_penalty),
        ];

        for (field, value) in magnitudes {
            if !value.is_finite() || value < 0.0 {
                return Err(WeightTableError::InvalidWeight { symptom, field });
            }
        }

        let signed = [
            self.glycemic.low,
            self.glycemic.medium,
            self.glycemic.high,
        ]
        .into_iter()
        .chain(self.category_adjustments.iter().map(|a| a.weight));

        if signed.into_iter().any(|value| !value.is_finite()) {
            return Err(WeightTableError::InvalidWeight {
                symptom,
                field: "signed weights",
            });
        }

        Ok(())
    }
}

/// Per-symptom rule weights driving the impact engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WeightTable {
    pub symptoms: BTreeMap<SymptomCategory, SymptomWeights>,
}

impl WeightTable {
    pub fn weights_for(&self, symptom: SymptomCategory) -> Option<&SymptomWeights> {
        self.symptoms.get(&symptom)
    }

    /// Every symptom must be present and every penalty non-negative.
    pub fn validate(&self) -> Result<(), WeightTableError> {
        for symptom in SymptomCategory::ALL {
            self.weights_for(symptom)
                .ok_or(WeightTableError::MissingSymptom(symptom))?
                .validate(symptom)?;
        }

        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, WeightTableError> {
        let table: WeightTable = serde_json::from_str(json)?;
        table.validate()?;

        Ok(table)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, WeightTableError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

fn watch_list(allergens: &[&str]) -> BTreeSet<String> {
    allergens.iter().map(|a| a.to_string()).collect()
}

fn adjustments(entries: &[(&str, f64)]) -> Vec<CategoryAdjustment> {
    entries
        .iter()
        .map(|(keyword, weight)| CategoryAdjustment::new(keyword, *weight))
        .collect()
}

impl Default for WeightTable {
    fn default() -> Self {
        let cramps = SymptomWeights {
            processing_penalty: 0.5,
            glycemic: GlycemicWeights {
                low: 0.5,
                medium: 0.0,
                high: -1.0,
            },
            inflammation_weight: 0.6,
            caffeine_threshold_mg: 50.0,
            caffeine_penalty: 1.5,
            allergen_watch_list: watch_list(&["dairy"]),
            allergen_penalty: 1.0,
            category_adjustments: adjustments(&[
                ("leafy", 1.5),
                ("vegetable", 1.0),
                ("nuts", 1.0),
                ("seeds", 1.0),
                ("fish", 1.0),
                ("seafood", 1.0),
                ("red meat", -1.0),
                ("sweets", -1.0),
            ]),
        };

        let bloating = SymptomWeights {
            processing_penalty: 0.7,
            glycemic: GlycemicWeights {
                low: 0.3,
                medium: 0.0,
                high: -0.5,
            },
            inflammation_weight: 0.3,
            caffeine_threshold_mg: 80.0,
            caffeine_penalty: 1.0,
            allergen_watch_list: watch_list(&["dairy", "lactose", "gluten", "wheat", "soy"]),
            allergen_penalty: 1.5,
            category_adjustments: adjustments(&[
                ("legume", -1.0),
                ("cruciferous", -1.0),
                ("carbonated", -1.5),
                ("snack", -0.5),
                ("fruit", 0.5),
                ("herbal", 1.0),
            ]),
        };

        let mood_swings = SymptomWeights {
            processing_penalty: 0.5,
            glycemic: GlycemicWeights {
                low: 1.0,
                medium: 0.0,
                high: -2.0,
            },
            inflammation_weight: 0.4,
            caffeine_threshold_mg: 100.0,
            caffeine_penalty: 1.5,
            allergen_watch_list: BTreeSet::new(),
            allergen_penalty: 0.0,
            category_adjustments: adjustments(&[
                ("whole grain", 1.0),
                ("nuts", 0.5),
                ("fish", 1.0),
                ("sweets", -1.5),
                ("dessert", -1.5),
                ("alcohol", -2.0),
            ]),
        };

        let fatigue = SymptomWeights {
            processing_penalty: 0.4,
            glycemic: GlycemicWeights {
                low: 0.8,
                medium: 0.0,
                high: -1.5,
            },
            inflammation_weight: 0.3,
            caffeine_threshold_mg: 200.0,
            caffeine_penalty: 1.0,
            allergen_watch_list: BTreeSet::new(),
            allergen_penalty: 0.0,
            category_adjustments: adjustments(&[
                ("leafy", 1.5),
                ("legume", 1.0),
                ("whole grain", 1.0),
                ("red meat", 0.5),
                ("sweets", -1.0),
            ]),
        };

        let headache = SymptomWeights {
            processing_penalty: 0.6,
            glycemic: GlycemicWeights {
                low: 0.3,
                medium: 0.0,
                high: -0.8,
            },
            inflammation_weight: 0.3,
            caffeine_threshold_mg: 100.0,
            caffeine_penalty: 2.0,
            allergen_watch_list: watch_list(&["gluten"]),
            allergen_penalty: 0.5,
            category_adjustments: adjustments(&[
                ("processed meat", -1.5),
                ("cured", -1.0),
                ("cheese", -1.0),
                ("alcohol", -2.0),
                ("water", 1.0),
                ("fruit", 0.5),
            ]),
        };

        let acne = SymptomWeights {
            processing_penalty: 0.6,
            glycemic: GlycemicWeights {
                low: 0.5,
                medium: 0.0,
                high: -1.5,
            },
            inflammation_weight: 0.5,
            caffeine_threshold_mg: 300.0,
            caffeine_penalty: 0.5,
            allergen_watch_list: watch_list(&["dairy"]),
            allergen_penalty: 1.5,
            category_adjustments: adjustments(&[
                ("dairy", -1.0),
                ("sweets", -1.0),
                ("fried", -1.0),
                ("vegetable", 1.0),
                ("fish", 0.5),
            ]),
        };

        Self {
            symptoms: BTreeMap::from([
                (SymptomCategory::Cramps, cramps),
                (SymptomCategory::Bloating, bloating),
                (SymptomCategory::MoodSwings, mood_swings),
                (SymptomCategory::Fatigue, fatigue),
                (SymptomCategory::Headache, headache),
                (SymptomCategory::Acne, acne),
            ]),
        }
    }
}
