use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::impact::weights::{BENEFICIAL_THRESHOLD, HARMFUL_THRESHOLD, SCORE_MAX, SCORE_MIN};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SymptomCategory {
    Cramps,
    Bloating,
    MoodSwings,
    Fatigue,
    Headache,
    Acne,
}

impl SymptomCategory {
    pub const ALL: [SymptomCategory; 6] = [
        SymptomCategory::Cramps,
        SymptomCategory::Bloating,
        SymptomCategory::MoodSwings,
        SymptomCategory::Fatigue,
        SymptomCategory::Headache,
        SymptomCategory::Acne,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            SymptomCategory::Cramps => "cramps",
            SymptomCategory::Bloating => "bloating",
            SymptomCategory::MoodSwings => "mood_swings",
            SymptomCategory::Fatigue => "fatigue",
            SymptomCategory::Headache => "headache",
            SymptomCategory::Acne => "acne",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ImpactClassification {
    Beneficial,
    Neutral,
    Harmful,
}

impl ImpactClassification {
    pub fn from_score(score: f64) -> Self {
        if score <= HARMFUL_THRESHOLD {
            ImpactClassification::Harmful
        } else if score >= BENEFICIAL_THRESHOLD {
            ImpactClassification::Beneficial
        } else {
            ImpactClassification::Neutral
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ImpactClassification::Beneficial => "Beneficial",
            ImpactClassification::Neutral => "Neutral",
            ImpactClassification::Harmful => "Harmful",
        }
    }
}

/// Signed per-factor score contributions. Negative values push towards
/// Harmful, positive values towards Beneficial.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Contributions {
    pub processing: f64,
    pub glycemic: f64,
    pub inflammation: f64,
    pub caffeine: f64,
    pub allergens: f64,
    pub category: f64,
}

impl Contributions {
    pub fn total(&self) -> f64 {
        self.processing
            + self.glycemic
            + self.inflammation
            + self.caffeine
            + self.allergens
            + self.category
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SymptomImpact {
    pub classification: ImpactClassification,
    pub score: f64,
    pub contributions: Contributions,
}

impl SymptomImpact {
    pub fn from_contributions(contributions: Contributions) -> Self {
        let score = contributions.total().clamp(SCORE_MIN, SCORE_MAX);

        Self {
            classification: ImpactClassification::from_score(score),
            score,
            contributions,
        }
    }

    pub fn neutral() -> Self {
        Self::from_contributions(Contributions::default())
    }
}

/// Impact of one food on every symptom category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ImpactResult {
    pub quantity_multiplier: f64,
    pub impacts: BTreeMap<SymptomCategory, SymptomImpact>,
}

impl ImpactResult {
    /// All-neutral, zero-score result used for non-edible items.
    pub fn neutral(quantity_multiplier: f64) -> Self {
        Self {
            quantity_multiplier,
            impacts: SymptomCategory::ALL
                .iter()
                .map(|symptom| (*symptom, SymptomImpact::neutral()))
                .collect(),
        }
    }

    pub fn get(&self, symptom: SymptomCategory) -> Option<&SymptomImpact> {
        self.impacts.get(&symptom)
    }

    pub fn count(&self, classification: ImpactClassification) -> usize {
        self.impacts
            .values()
            .filter(|impact| impact.classification == classification)
            .count()
    }

    pub fn is_complete(&self) -> bool {
        SymptomCategory::ALL
            .iter()
            .all(|symptom| self.impacts.contains_key(symptom))
    }
}
