// ABOUTME: Composite meal scoring: calorie fit, macro similarity, goal bonuses, overrides
// ABOUTME: Health conditions outrank fitness goals; preference signals outrank everything
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateful

//! Meal Scorer
//!
//! Assigns every surviving meal a composite score:
//!
//! - calorie fit against the per-meal calorie target
//! - macro similarity between the meal's own ratio triple and the target
//!   triple, with protein and fat deviations penalized more heavily than
//!   carbohydrate deviations
//! - goal-based bonuses, replaced by the condition decision table for
//!   critical health notes
//! - preference bonuses/penalties, always applied last and sized to dominate
//!   base-score ties
//!
//! The final score is floored at zero and deliberately has **no upper cap**:
//! downstream ranking depends on large preference bonuses outranking ties,
//! so reintroducing a 100-point ceiling would be a regression, not a fix.

use crate::condition_rules::{self, ConditionCategory};
use crate::config::ScoringConfig;
use crate::nutrition_calculator::{MacroRatio, MacroTargets};
use crate::nutrition_constants::goal_bonus as bonus;
use plateful_core::{HealthGoal, Meal, PreferenceSignal};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Per-factor contributions to a meal's final score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Calorie fit against the per-meal target (0-100)
    pub calorie_score: f64,
    /// Macro-ratio similarity (0-100)
    pub macro_similarity_score: f64,
    /// Goal-based bonus (zero under critical condition overrides)
    pub goal_bonus: f64,
    /// Condition decision table adjustment (may be negative)
    pub condition_adjustment: f64,
    /// Preference layer adjustment (may be negative)
    pub preference_adjustment: f64,
}

/// A meal annotated with its score; created once per scoring pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredMeal {
    /// The corpus meal (copied, never mutated in place)
    pub meal: Meal,
    /// Weighted calorie + macro-similarity score before adjustments
    pub base_score: f64,
    /// Floored-at-zero, uncapped final score
    pub final_score: f64,
    /// Per-factor contributions
    pub breakdown: ScoreBreakdown,
    /// Human-readable justification, filled by the rationale stage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// Lower-cased searchable text for keyword and preference matching:
/// display names plus the ingredient list
#[must_use]
pub fn searchable_text(meal: &Meal) -> String {
    let mut text = meal.name.to_lowercase();
    if let Some(name_en) = &meal.name_en {
        text.push(' ');
        text.push_str(&name_en.to_lowercase());
    }
    if !meal.ingredients.is_empty() {
        text.push(' ');
        text.push_str(&meal.ingredients.join(" ").to_lowercase());
    }
    text
}

/// Scorer bound to one request's targets, goal, note, and preferences
#[derive(Debug)]
pub struct MealScorer<'a> {
    targets: &'a MacroTargets,
    goal: HealthGoal,
    body_condition: Option<&'a str>,
    condition: Option<ConditionCategory>,
    preferences: Option<&'a PreferenceSignal>,
    config: &'a ScoringConfig,
}

impl<'a> MealScorer<'a> {
    /// Build a scorer for one request. The body-condition note is matched
    /// against the decision table once, here, not per meal.
    #[must_use]
    pub fn new(
        targets: &'a MacroTargets,
        goal: HealthGoal,
        body_condition: Option<&'a str>,
        preferences: Option<&'a PreferenceSignal>,
        config: &'a ScoringConfig,
    ) -> Self {
        let condition = body_condition.and_then(condition_rules::detect_condition);
        Self {
            targets,
            goal,
            body_condition,
            condition,
            preferences,
            config,
        }
    }

    /// Condition category detected from the note, if any
    #[must_use]
    pub const fn condition(&self) -> Option<ConditionCategory> {
        self.condition
    }

    /// Score one meal. Never fails: malformed records coerce to zero macros
    /// and land on a neutral/low score instead of crashing the pipeline.
    #[must_use]
    pub fn score(&self, meal: &Meal) -> ScoredMeal {
        let meal_text = searchable_text(meal);

        let calorie_score = self.calorie_score(meal);
        let macro_similarity_score = self.macro_similarity_score(meal);
        let base_score = self.config.calorie_weight.mul_add(
            calorie_score,
            self.config.macro_weight * macro_similarity_score,
        );

        let preference_adjustment = self.preference_adjustment(meal, &meal_text);

        let (goal_bonus_points, condition_adjustment) = match (self.body_condition, self.condition)
        {
            // critical conditions replace the fitness-goal bonuses entirely
            (_, Some(category)) if category.is_critical() => (
                0.0,
                condition_rules::condition_adjustment(category, meal, &meal_text),
            ),
            (_, Some(category)) => (
                goal_bonus(self.goal, meal, self.targets),
                condition_rules::condition_adjustment(category, meal, &meal_text),
            ),
            // a note that matches no category still gets the catch-all word match
            (Some(note), None) => (
                goal_bonus(self.goal, meal, self.targets),
                condition_rules::fallback_word_match(note, &meal_text),
            ),
            (None, None) => (goal_bonus(self.goal, meal, self.targets), 0.0),
        };

        let final_score =
            (base_score + goal_bonus_points + condition_adjustment + preference_adjustment)
                .max(0.0);

        ScoredMeal {
            meal: meal.clone(),
            base_score,
            final_score,
            breakdown: ScoreBreakdown {
                calorie_score,
                macro_similarity_score,
                goal_bonus: goal_bonus_points,
                condition_adjustment,
                preference_adjustment,
            },
            explanation: None,
        }
    }

    /// `max(0, 100 - |calories - target| / target * 100)`; a zero target
    /// short-circuits to 0 for this factor instead of dividing by zero
    fn calorie_score(&self, meal: &Meal) -> f64 {
        let target = self.targets.per_meal_calories;
        if target <= 0.0 {
            return 0.0;
        }
        (100.0 - (meal.calories() - target).abs() / target * 100.0).max(0.0)
    }

    /// Asymmetric ratio-deviation penalty: protein and fat deviations count
    /// 1.5x against carbohydrate deviations. A meal with no macro data at
    /// all scores 0 for this factor.
    fn macro_similarity_score(&self, meal: &Meal) -> f64 {
        let total = meal.protein_g() + meal.carbs_g() + meal.fat_g();
        if total <= 0.0 {
            return 0.0;
        }
        let meal_ratio = MacroRatio::from_grams(
            meal.protein_g(),
            meal.carbs_g(),
            meal.fat_g(),
            self.targets.ratio,
        );
        let target = self.targets.ratio;

        let penalty = self.config.fat_deviation_penalty.mul_add(
            (meal_ratio.fat - target.fat).abs(),
            self.config.protein_deviation_penalty.mul_add(
                (meal_ratio.protein - target.protein).abs(),
                self.config.carbs_deviation_penalty * (meal_ratio.carbs - target.carbs).abs(),
            ),
        );
        (100.0 - penalty).max(0.0)
    }

    /// Disliked terms are checked before liked terms and each list
    /// contributes at most once per meal
    fn preference_adjustment(&self, meal: &Meal, meal_text: &str) -> f64 {
        let Some(preferences) = self.preferences else {
            return 0.0;
        };
        let mut adjustment = 0.0;

        for disliked in &preferences.disliked_foods {
            let term = disliked.trim().to_lowercase();
            if !term.is_empty() && meal_text.contains(&term) {
                debug!(meal = %meal.name, %term, "disliked food match");
                adjustment -= self.config.disliked_food_penalty;
                break;
            }
        }
        for liked in &preferences.liked_foods {
            let term = liked.trim().to_lowercase();
            if !term.is_empty() && meal_text.contains(&term) {
                debug!(meal = %meal.name, %term, "liked food match");
                adjustment += self.config.liked_food_bonus;
                break;
            }
        }
        adjustment
    }
}

/// Goal-based bonus applied outside critical condition overrides.
///
/// Muscle goals reward protein-dense, calorie-dense meals; weight loss
/// rewards meals under the per-meal calorie target that still carry enough
/// protein to satiate. Maintenance adds nothing.
#[must_use]
pub fn goal_bonus(goal: HealthGoal, meal: &Meal, targets: &MacroTargets) -> f64 {
    match goal {
        HealthGoal::GainMuscle | HealthGoal::BulkUp => {
            let mut points = 0.0;
            if meal.protein_g() > bonus::MUSCLE_PROTEIN_G {
                points += bonus::MUSCLE_PROTEIN_BONUS;
            }
            if meal.calories() > bonus::MUSCLE_CALORIES {
                points += bonus::MUSCLE_CALORIE_BONUS;
            }
            points
        }
        HealthGoal::LoseWeight => {
            let mut points = 0.0;
            if meal.calories() < targets.per_meal_calories {
                points += bonus::LOSS_CALORIE_BONUS;
            }
            if meal.protein_g() > bonus::LOSS_PROTEIN_G {
                points += bonus::LOSS_PROTEIN_BONUS;
            }
            points
        }
        HealthGoal::Maintain => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MacroTargetConfig;
    use crate::nutrition_calculator::allocate_macro_targets;

    fn targets() -> MacroTargets {
        // 1800 kcal/day -> 600 kcal per meal
        allocate_macro_targets(1800.0, HealthGoal::Maintain, &MacroTargetConfig::default())
    }

    fn meal(name: &str, calories: f64, protein: f64, carbs: f64, fat: f64) -> Meal {
        Meal {
            id: name.to_owned(),
            name: name.to_owned(),
            name_en: None,
            brand: None,
            category: None,
            calories: Some(calories),
            protein_g: Some(protein),
            carbs_g: Some(carbs),
            fat_g: Some(fat),
            sodium_mg: Some(300.0),
            ingredients: vec![],
            allergen_tags: vec![],
            serving_size: None,
        }
    }

    #[test]
    fn exact_calorie_target_scores_one_hundred() {
        let targets = targets();
        let config = ScoringConfig::default();
        let scorer = MealScorer::new(&targets, HealthGoal::Maintain, None, None, &config);
        let scored = scorer.score(&meal("exact", targets.per_meal_calories, 25.0, 60.0, 15.0));
        assert!((scored.breakdown.calorie_score - 100.0).abs() < 1e-9);
    }

    #[test]
    fn zero_macro_meal_is_scorable_and_low() {
        let targets = targets();
        let config = ScoringConfig::default();
        let scorer = MealScorer::new(&targets, HealthGoal::Maintain, None, None, &config);
        let scored = scorer.score(&meal("empty", 0.0, 0.0, 0.0, 0.0));
        assert_eq!(scored.breakdown.calorie_score, 0.0);
        assert_eq!(scored.breakdown.macro_similarity_score, 0.0);
        assert_eq!(scored.final_score, 0.0);
    }

    #[test]
    fn disliked_meal_ranks_below_identical_unmatched_meal() {
        let targets = targets();
        let config = ScoringConfig::default();
        let preferences = PreferenceSignal {
            disliked_foods: vec!["broccoli".to_owned()],
            ..PreferenceSignal::default()
        };
        let scorer = MealScorer::new(
            &targets,
            HealthGoal::Maintain,
            None,
            Some(&preferences),
            &config,
        );
        let disliked = scorer.score(&meal("Broccoli Bowl", 600.0, 25.0, 60.0, 15.0));
        let neutral = scorer.score(&meal("Rice Bowl", 600.0, 25.0, 60.0, 15.0));
        assert!(disliked.final_score < neutral.final_score);
        assert_eq!(disliked.breakdown.preference_adjustment, -100.0);
    }

    #[test]
    fn liked_match_can_push_score_past_one_hundred() {
        // no upper cap: strong preference signals outrank base-score ties
        let targets = targets();
        let config = ScoringConfig::default();
        let preferences = PreferenceSignal {
            liked_foods: vec!["salmon".to_owned()],
            ..PreferenceSignal::default()
        };
        let scorer = MealScorer::new(
            &targets,
            HealthGoal::Maintain,
            None,
            Some(&preferences),
            &config,
        );
        let scored = scorer.score(&meal("Salmon Bowl", 600.0, 25.0, 60.0, 15.0));
        assert!(scored.final_score > 100.0);
    }

    #[test]
    fn critical_condition_skips_goal_bonus() {
        let targets = targets();
        let config = ScoringConfig::default();
        let scorer = MealScorer::new(
            &targets,
            HealthGoal::GainMuscle,
            Some("kidney concerns"),
            None,
            &config,
        );
        // protein 30g would earn +10 under the muscle goal, but the kidney
        // override zeroes the goal bonus and penalizes instead
        let scored = scorer.score(&meal("Protein Plate", 600.0, 30.0, 40.0, 15.0));
        assert_eq!(scored.breakdown.goal_bonus, 0.0);
        assert!(scored.breakdown.condition_adjustment < 0.0);
    }

    #[test]
    fn preference_lists_contribute_at_most_once_each() {
        let targets = targets();
        let config = ScoringConfig::default();
        let preferences = PreferenceSignal {
            liked_foods: vec!["rice".to_owned(), "bowl".to_owned()],
            disliked_foods: vec![],
            ..PreferenceSignal::default()
        };
        let scorer = MealScorer::new(
            &targets,
            HealthGoal::Maintain,
            None,
            Some(&preferences),
            &config,
        );
        let scored = scorer.score(&meal("Rice Bowl", 600.0, 25.0, 60.0, 15.0));
        assert_eq!(scored.breakdown.preference_adjustment, 100.0);
    }
}
