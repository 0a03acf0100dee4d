use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const MIN_MULTIPLIER: f64 = 0.25;
pub const MAX_MULTIPLIER: f64 = 4.0;
pub const STANDARD_MULTIPLIER: f64 = 1.0;

static MIXED_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|\s)(\d+)\s+(\d+)\s*/\s*(\d+)").expect("mixed number pattern is valid")
});

static AND_A_PART: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(one|two|three|\d+)\s+and\s+an?\s+(half|quarter)\b")
        .expect("and-a-part pattern is valid")
});

static FRACTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)\s*/\s*(\d+(?:\.\d+)?)").expect("fraction pattern is valid")
});

static COUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:(\d+(?:\.\d+)?)\s*(?:x|×|times|servings?|portions?|helpings?)\b)|(?:(?:^|\s)(?:x|×)\s*(\d+(?:\.\d+)?))",
    )
    .expect("count pattern is valid")
});

/// Checked in order; the first word found in the text wins.
const KEYWORDS: &[(&[&str], f64)] = &[
    (&["double", "twice", "two"], 2.0),
    (&["triple", "three"], 3.0),
    (&["half"], 0.5),
    (&["quarter"], 0.25),
    (&["large", "big", "generous"], 1.5),
    (&["small", "light", "little"], 0.75),
    (&["standard", "normal", "regular", "single", "one"], 1.0),
];

/// Serving-size multiplier parsed from free text such as "half a cup" or
/// "2x". Always within [`MIN_MULTIPLIER`, `MAX_MULTIPLIER`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct QuantityModifier {
    multiplier: f64,
}

impl Default for QuantityModifier {
    fn default() -> Self {
        Self::standard()
    }
}

impl QuantityModifier {
    pub fn standard() -> Self {
        Self {
            multiplier: STANDARD_MULTIPLIER,
        }
    }

    pub fn parse(text: &str) -> Self {
        let text = text.trim().to_lowercase();

        let multiplier = parse_mixed_number(&text)
            .or_else(|| parse_fraction(&text))
            .or_else(|| parse_count(&text))
            .or_else(|| parse_keyword(&text))
            .filter(|m| m.is_finite() && *m > 0.0)
            .unwrap_or(STANDARD_MULTIPLIER);

        Self {
            multiplier: multiplier.clamp(MIN_MULTIPLIER, MAX_MULTIPLIER),
        }
    }

    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    pub fn scale(&self, value: f64) -> f64 {
        value * self.multiplier
    }
}

/// "1 1/2" or "two and a half".
fn parse_mixed_number(text: &str) -> Option<f64> {
    if let Some(captures) = MIXED_NUMBER.captures(text) {
        let whole: f64 = captures[1].parse().ok()?;
        let numerator: f64 = captures[2].parse().ok()?;
        let denominator: f64 = captures[3].parse().ok()?;

        return (denominator > 0.0).then(|| whole + numerator / denominator);
    }

    let captures = AND_A_PART.captures(text)?;
    let whole = match &captures[1] {
        "one" => 1.0,
        "two" => 2.0,
        "three" => 3.0,
        digits => digits.parse().ok()?,
    };
    let part = if &captures[2] == "half" { 0.5 } else { 0.25 };

    Some(whole + part)
}

fn parse_fraction(text: &str) -> Option<f64> {
    let captures = FRACTION.captures(text)?;
    let numerator: f64 = captures[1].parse().ok()?;
    let denominator: f64 = captures[2].parse().ok()?;

    (denominator > 0.0).then(|| numerator / denominator)
}

fn parse_count(text: &str) -> Option<f64> {
    let captures = COUNT.captures(text)?;
    captures
        .get(1)
        .or_else(|| captures.get(2))
        .and_then(|m| m.as_str().parse().ok())
}

fn parse_keyword(text: &str) -> Option<f64> {
    let words: Vec<&str> = text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    KEYWORDS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| words.contains(k)))
        .map(|(_, multiplier)| *multiplier)
}
