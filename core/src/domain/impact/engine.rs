use std::sync::LazyLock;

use tracing::trace;

use crate::domain::food_profile::{CanonicalFoodProfile, GlycemicBand};
use crate::domain::impact::{
    entities::{Contributions, ImpactResult, SymptomCategory, SymptomImpact},
    quantity::QuantityModifier,
    weights::{INFLAMMATION_PIVOT, SymptomWeights, WeightTable, WeightTableError},
};

static DEFAULT_ENGINE: LazyLock<ImpactEngine> = LazyLock::new(ImpactEngine::default);

/// Predicts per-symptom impacts with the default weight table.
pub fn predict(profile: &CanonicalFoodProfile, quantity: &str) -> ImpactResult {
    DEFAULT_ENGINE.predict(profile, quantity)
}

/// Deterministic rule engine mapping a canonical profile onto symptom impacts.
#[derive(Debug, Clone, Default)]
pub struct ImpactEngine {
    table: WeightTable,
}

impl ImpactEngine {
    pub fn new(table: WeightTable) -> Result<Self, WeightTableError> {
        table.validate()?;
        Ok(Self { table })
    }

    pub fn predict(&self, profile: &CanonicalFoodProfile, quantity: &str) -> ImpactResult {
        let modifier = QuantityModifier::parse(quantity);

        if profile.is_non_edible {
            return ImpactResult::neutral(modifier.multiplier());
        }

        let category = format!("{} {}", profile.category, profile.subcategory).to_lowercase();
        let category_words = words(&category);

        let impacts = SymptomCategory::ALL
            .iter()
            .map(|symptom| {
                let impact = match self.table.weights_for(*symptom) {
                    Some(weights) => SymptomImpact::from_contributions(contributions(
                        weights,
                        profile,
                        &category_words,
                        modifier,
                    )),
                    None => SymptomImpact::neutral(),
                };

                trace!(
                    symptom = symptom.as_str(),
                    score = impact.score,
                    classification = impact.classification.as_str(),
                    "scored symptom"
                );

                (*symptom, impact)
            })
            .collect();

        ImpactResult {
            quantity_multiplier: modifier.multiplier(),
            impacts,
        }
    }
}

fn contributions(
    weights: &SymptomWeights,
    profile: &CanonicalFoodProfile,
    category_words: &[&str],
    modifier: QuantityModifier,
) -> Contributions {
    let processing = -weights.processing_penalty * f64::from(profile.processing_level.ordinal());

    let glycemic = match profile.glycemic_band() {
        Some(GlycemicBand::Low) => modifier.scale(weights.glycemic.low),
        Some(GlycemicBand::Medium) => modifier.scale(weights.glycemic.medium),
        Some(GlycemicBand::High) => modifier.scale(weights.glycemic.high),
        None => 0.0,
    };

    let inflammation =
        weights.inflammation_weight * (INFLAMMATION_PIVOT - f64::from(profile.inflammatory_index));

    // Threshold applies to a single serving; the quantity scales the penalty.
    let caffeine = if profile.caffeine_mg > weights.caffeine_threshold_mg {
        -modifier.scale(weights.caffeine_penalty)
    } else {
        0.0
    };

    let watched = profile
        .allergens
        .iter()
        .filter(|allergen| weights.allergen_watch_list.contains(*allergen))
        .count();
    let allergens = -weights.allergen_penalty * watched as f64;

    let category = weights
        .category_adjustments
        .iter()
        .filter(|adjustment| matches_keyword(category_words, &adjustment.keyword))
        .map(|adjustment| adjustment.weight)
        .sum::<f64>();

    Contributions {
        processing,
        glycemic,
        inflammation,
        caffeine,
        allergens,
        category,
    }
}

fn words(text: &str) -> Vec<&str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect()
}

/// Whole-word match of a one or more word keyword; plural forms match too.
fn matches_keyword(category_words: &[&str], keyword: &str) -> bool {
    let keyword = keyword.to_lowercase();
    let needle = words(&keyword);

    !needle.is_empty()
        && category_words.windows(needle.len()).any(|window| {
            window
                .iter()
                .zip(&needle)
                .all(|(word, expected)| same_word(word, expected))
        })
}

fn same_word(word: &str, expected: &str) -> bool {
    word == expected
        || word.strip_suffix('s').is_some_and(|stem| {
            stem == expected || stem.strip_suffix('e') == Some(expected)
        })
}
