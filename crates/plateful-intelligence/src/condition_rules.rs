// ABOUTME: Priority decision table mapping body-condition notes to score adjustments
// ABOUTME: Critical categories replace goal bonuses; non-critical ones augment them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateful

//! Condition Rules
//!
//! Free-text body-condition notes are matched against a bilingual keyword
//! table, top to bottom, first category wins. Critical categories (kidney,
//! blood sugar, blood pressure) override the fitness-goal bonuses entirely;
//! non-critical categories add moderate bonuses alongside them. Notes that
//! match no category fall through to a catch-all content-word match.

use crate::keywords::{
    self, ANTI_INFLAMMATORY_KEYWORDS, CALMING_KEYWORDS, COMPLEX_CARB_KEYWORDS,
    FATIGUE_PROTEIN_KEYWORDS, FIBER_KEYWORDS, GREENS_KEYWORDS, LEAN_PROTEIN_KEYWORDS,
    OMEGA3_KEYWORDS, PROBIOTIC_KEYWORDS, PRODUCE_KEYWORDS, SPICY_KEYWORDS, STOP_WORDS,
    WHOLE_GRAIN_KEYWORDS,
};
use crate::nutrition_constants::{
    diabetes, digestion, fatigue, high_protein, hypertension, kidney, muscle_recovery, stress,
    word_match,
};
use plateful_core::Meal;
use serde::{Deserialize, Serialize};

/// Recognized body-condition categories, in priority order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ConditionCategory {
    /// Kidney/proteinuria concern or explicit low-protein request (critical)
    Kidney,
    /// Diabetes/blood-sugar concern or explicit low-carb request (critical)
    Diabetes,
    /// Hypertension/blood-pressure concern or explicit low-sodium request (critical)
    Hypertension,
    /// Explicit high-protein request
    HighProtein,
    /// Fatigue or exhaustion
    Fatigue,
    /// Digestion trouble
    Digestion,
    /// Muscle soreness or pain
    MuscleRecovery,
    /// Stress or anxiety
    Stress,
}

impl ConditionCategory {
    /// Critical categories skip the fitness-goal bonuses entirely
    #[must_use]
    pub const fn is_critical(&self) -> bool {
        matches!(self, Self::Kidney | Self::Diabetes | Self::Hypertension)
    }
}

/// Bilingual detection keywords per category, in priority order.
///
/// Health concerns outrank dietary style requests outrank mood notes, so a
/// note mentioning both kidney trouble and a high-protein wish resolves to
/// the kidney rules.
pub const CONDITION_KEYWORDS: &[(ConditionCategory, &[&str])] = &[
    (
        ConditionCategory::Kidney,
        &[
            "단백뇨",
            "proteinuria",
            "신장",
            "kidney",
            "콩팥",
            "저단백",
            "low protein",
            "낮은 단백질",
        ],
    ),
    (
        ConditionCategory::Diabetes,
        &[
            "당뇨",
            "diabetes",
            "혈당",
            "blood sugar",
            "저탄수",
            "low carb",
            "낮은 탄수화물",
        ],
    ),
    (
        ConditionCategory::Hypertension,
        &[
            "고혈압",
            "hypertension",
            "blood pressure",
            "저염",
            "low sodium",
            "낮은 나트륨",
            "low salt",
        ],
    ),
    (
        ConditionCategory::HighProtein,
        &["고단백", "high protein", "높은 단백질", "단백질 많이"],
    ),
    (
        ConditionCategory::Fatigue,
        &["피곤", "tired", "fatigue", "exhausted", "지침"],
    ),
    (
        ConditionCategory::Digestion,
        &["소화", "digestion", "indigestion", "stomach", "속쓰림"],
    ),
    (
        ConditionCategory::MuscleRecovery,
        &["근육통", "muscle", "pain", "sore", "아프", "통증"],
    ),
    (
        ConditionCategory::Stress,
        &["스트레스", "stress", "압박", "불안", "anxiety"],
    ),
];

/// Detect the highest-priority category mentioned in a note.
///
/// `note` may be raw user text; matching is case-insensitive substring
/// containment. Returns `None` for empty or unrecognized notes.
#[must_use]
pub fn detect_condition(note: &str) -> Option<ConditionCategory> {
    let note_lower = note.trim().to_lowercase();
    if note_lower.is_empty() {
        return None;
    }
    CONDITION_KEYWORDS
        .iter()
        .find(|(_, terms)| keywords::any_keyword_in(terms, &note_lower))
        .map(|(category, _)| *category)
}

/// Score adjustment for one meal under one detected category.
///
/// `meal_text` is the meal's pre-lowered searchable text (names plus
/// ingredients), computed once per meal by the scorer.
#[must_use]
pub fn condition_adjustment(category: ConditionCategory, meal: &Meal, meal_text: &str) -> f64 {
    match category {
        ConditionCategory::Kidney => kidney_adjustment(meal, meal_text),
        ConditionCategory::Diabetes => diabetes_adjustment(meal, meal_text),
        ConditionCategory::Hypertension => hypertension_adjustment(meal),
        ConditionCategory::HighProtein => high_protein_adjustment(meal, meal_text),
        ConditionCategory::Fatigue => fatigue_adjustment(meal, meal_text),
        ConditionCategory::Digestion => digestion_adjustment(meal, meal_text),
        ConditionCategory::MuscleRecovery => muscle_recovery_adjustment(meal, meal_text),
        ConditionCategory::Stress => stress_adjustment(meal, meal_text),
    }
}

fn kidney_adjustment(meal: &Meal, meal_text: &str) -> f64 {
    let mut bonus = 0.0;
    let protein = meal.protein_g();
    let sodium = meal.sodium_mg();

    if protein > kidney::PROTEIN_HEAVY_G {
        bonus -= kidney::PROTEIN_HEAVY_PENALTY;
    } else if protein > kidney::PROTEIN_MODERATE_G {
        bonus -= kidney::PROTEIN_MODERATE_PENALTY;
    }
    if sodium > kidney::SODIUM_HEAVY_MG {
        bonus -= kidney::SODIUM_HEAVY_PENALTY;
    } else if sodium > kidney::SODIUM_MODERATE_MG {
        bonus -= kidney::SODIUM_MODERATE_PENALTY;
    }
    if protein < kidney::PROTEIN_SAFE_G && sodium < kidney::SODIUM_SAFE_MG {
        bonus += kidney::SAFE_MEAL_BONUS;
    }
    if keywords::any_keyword_in(PRODUCE_KEYWORDS, meal_text) {
        bonus += kidney::PRODUCE_BONUS;
    }
    bonus
}

fn diabetes_adjustment(meal: &Meal, meal_text: &str) -> f64 {
    let mut bonus = 0.0;
    let carbs = meal.carbs_g();

    if carbs > diabetes::CARBS_HIGH_G {
        bonus -= diabetes::CARBS_HIGH_PENALTY;
    } else if carbs < diabetes::CARBS_LOW_G {
        bonus += diabetes::CARBS_LOW_BONUS;
    }
    if keywords::any_keyword_in(WHOLE_GRAIN_KEYWORDS, meal_text) {
        bonus += diabetes::WHOLE_GRAIN_BONUS;
    }
    bonus
}

fn hypertension_adjustment(meal: &Meal) -> f64 {
    let sodium = meal.sodium_mg();
    if sodium > hypertension::SODIUM_HIGH_MG {
        -hypertension::SODIUM_HIGH_PENALTY
    } else if sodium < hypertension::SODIUM_LOW_MG {
        hypertension::SODIUM_LOW_BONUS
    } else {
        0.0
    }
}

fn high_protein_adjustment(meal: &Meal, meal_text: &str) -> f64 {
    let mut bonus = 0.0;
    let protein = meal.protein_g();

    if protein > high_protein::PROTEIN_VERY_HIGH_G {
        bonus += high_protein::VERY_HIGH_BONUS;
    } else if protein > high_protein::PROTEIN_HIGH_G {
        bonus += high_protein::HIGH_BONUS;
    }
    if keywords::any_keyword_in(LEAN_PROTEIN_KEYWORDS, meal_text) {
        bonus += high_protein::INGREDIENT_BONUS;
    }
    bonus
}

fn fatigue_adjustment(meal: &Meal, meal_text: &str) -> f64 {
    let mut bonus = 0.0;
    let protein = meal.protein_g();

    if protein > fatigue::PROTEIN_BAND_MIN_G && protein < fatigue::PROTEIN_BAND_MAX_G {
        bonus += fatigue::PROTEIN_BAND_BONUS;
    }
    if keywords::any_keyword_in(FATIGUE_PROTEIN_KEYWORDS, meal_text) {
        bonus += fatigue::PROTEIN_SOURCE_BONUS;
    }
    if keywords::any_keyword_in(GREENS_KEYWORDS, meal_text) {
        bonus += fatigue::GREENS_BONUS;
    }
    bonus
}

fn digestion_adjustment(meal: &Meal, meal_text: &str) -> f64 {
    let mut bonus = 0.0;

    if meal.sodium_mg() < digestion::SODIUM_GENTLE_MG {
        bonus += digestion::SODIUM_GENTLE_BONUS;
    }
    if keywords::any_keyword_in(FIBER_KEYWORDS, meal_text) {
        bonus += digestion::FIBER_BONUS;
    }
    if keywords::any_keyword_in(PROBIOTIC_KEYWORDS, meal_text) {
        bonus += digestion::PROBIOTIC_BONUS;
    }
    if meal.fat_g() > digestion::FAT_HEAVY_G {
        bonus -= digestion::FAT_HEAVY_PENALTY;
    }
    bonus
}

fn muscle_recovery_adjustment(meal: &Meal, meal_text: &str) -> f64 {
    let mut bonus = 0.0;

    if meal.protein_g() > muscle_recovery::PROTEIN_RECOVERY_G {
        bonus += muscle_recovery::PROTEIN_BONUS;
    }
    if keywords::any_keyword_in(OMEGA3_KEYWORDS, meal_text) {
        bonus += muscle_recovery::OMEGA3_BONUS;
    }
    if keywords::any_keyword_in(ANTI_INFLAMMATORY_KEYWORDS, meal_text) {
        bonus += muscle_recovery::ANTI_INFLAMMATORY_BONUS;
    }
    bonus
}

fn stress_adjustment(meal: &Meal, meal_text: &str) -> f64 {
    let mut bonus = 0.0;
    let carbs = meal.carbs_g();

    if carbs > stress::CARBS_BAND_MIN_G && carbs < stress::CARBS_BAND_MAX_G {
        bonus += stress::CARBS_BAND_BONUS;
    }
    if keywords::any_keyword_in(COMPLEX_CARB_KEYWORDS, meal_text) {
        bonus += stress::COMPLEX_CARB_BONUS;
    }
    if keywords::any_keyword_in(CALMING_KEYWORDS, meal_text) {
        bonus += stress::CALMING_BONUS;
    }
    bonus
}

/// Catch-all adjustment for notes that match no category.
///
/// Each content word of the note (stop words and single characters
/// excluded) found in the meal's searchable text earns a flat bonus, so
/// "연어 먹고 싶어" still boosts salmon dishes without a hardcoded rule for
/// every food. A spicy-food request matching a spicy meal earns a little
/// extra.
#[must_use]
pub fn fallback_word_match(note: &str, meal_text: &str) -> f64 {
    let note_lower = note.trim().to_lowercase();
    if note_lower.is_empty() {
        return 0.0;
    }

    let mut bonus = 0.0;
    for word in note_lower.split_whitespace() {
        if word.chars().count() <= 1 || STOP_WORDS.contains(&word) {
            continue;
        }
        if meal_text.contains(word) {
            bonus += word_match::CONTENT_WORD_BONUS;
        }
    }

    if keywords::any_keyword_in(SPICY_KEYWORDS, &note_lower)
        && keywords::any_keyword_in(SPICY_KEYWORDS, meal_text)
    {
        bonus += word_match::SPICY_BONUS;
    }

    bonus
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meal(protein: f64, carbs: f64, fat: f64, sodium: f64) -> Meal {
        Meal {
            id: "m".to_owned(),
            name: "Grilled Dish".to_owned(),
            name_en: None,
            brand: None,
            category: None,
            calories: Some(400.0),
            protein_g: Some(protein),
            carbs_g: Some(carbs),
            fat_g: Some(fat),
            sodium_mg: Some(sodium),
            ingredients: vec![],
            allergen_tags: vec![],
            serving_size: None,
        }
    }

    #[test]
    fn critical_categories_win_over_later_matches() {
        // mentions both kidney trouble and a high-protein wish
        let detected = detect_condition("신장이 안 좋은데 high protein 먹고 싶어요");
        assert_eq!(detected, Some(ConditionCategory::Kidney));
        assert!(detected.is_some_and(|c| c.is_critical()));
    }

    #[test]
    fn unrecognized_notes_detect_nothing() {
        assert_eq!(detect_condition("그냥 맛있는 거"), None);
        assert_eq!(detect_condition(""), None);
        assert_eq!(detect_condition("   "), None);
    }

    #[test]
    fn kidney_rules_penalize_protein_and_sodium_together() {
        // both thresholds breached: -30 (protein) -20 (sodium)
        let penalty = condition_adjustment(ConditionCategory::Kidney, &meal(30.0, 20.0, 5.0, 700.0), "");
        assert_eq!(penalty, -50.0);

        // renal-friendly meal gets the combined safe bonus
        let bonus = condition_adjustment(ConditionCategory::Kidney, &meal(10.0, 20.0, 5.0, 300.0), "");
        assert_eq!(bonus, 25.0);
    }

    #[test]
    fn diabetes_rules_reward_low_carb_whole_grains() {
        let adjustment = condition_adjustment(
            ConditionCategory::Diabetes,
            &meal(20.0, 25.0, 5.0, 300.0),
            "quinoa salad with vegetables",
        );
        // +15 low carb, +10 whole grain keyword
        assert_eq!(adjustment, 25.0);
    }

    #[test]
    fn hypertension_rules_are_sodium_only() {
        assert_eq!(
            condition_adjustment(ConditionCategory::Hypertension, &meal(30.0, 80.0, 20.0, 700.0), ""),
            -30.0
        );
        assert_eq!(
            condition_adjustment(ConditionCategory::Hypertension, &meal(30.0, 80.0, 20.0, 200.0), ""),
            20.0
        );
    }

    #[test]
    fn fallback_matches_content_words_not_stop_words() {
        let text = "연어 샐러드 salmon salad";
        assert_eq!(fallback_word_match("연어 먹고 싶어", text), 35.0);
        assert_eq!(fallback_word_match("먹고 싶어", text), 0.0);
    }

    #[test]
    fn spicy_request_matches_spicy_meals() {
        // no literal word overlap, but both sides hit the spicy table
        assert_eq!(fallback_word_match("매운 거 먹고 싶어", "불닭볶음면"), 20.0);
        assert_eq!(fallback_word_match("매운 거 먹고 싶어", "연어 샐러드"), 0.0);
        // literal overlap and the spicy table stack
        assert_eq!(fallback_word_match("매운 불닭 먹고 싶어", "불닭볶음면"), 55.0);
    }
}
