// ABOUTME: Energy requirement estimation (BMR/TDEE) and macro target allocation
// ABOUTME: Mifflin-St Jeor with activity multipliers, goal adjustment, and ratio derivation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateful

//! Nutrition Calculator Module
//!
//! Implements the energy requirement estimator and macro target allocator.
//! All formulas are based on peer-reviewed research.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology:
//!   Nutrition, Energy, and Human Performance (activity factors).
//!
//! This layer performs no input validation: physiologically absurd profiles
//! still produce numbers, and screening them is the transport layer's
//! responsibility. The goal-adjusted target is deliberately left unfloored.

use crate::config::{EnergyConfig, GoalAdjustment, MacroTargetConfig};
use crate::nutrition_constants::energy;
use plateful_core::{ActivityLevel, HealthGoal, Sex, UserProfile};
use serde::{Deserialize, Serialize};

/// A protein/carbohydrate/fat ratio triple.
///
/// Normalized triples sum to 1.0 within floating tolerance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroRatio {
    /// Protein share of total calories or grams
    pub protein: f64,
    /// Carbohydrate share
    pub carbs: f64,
    /// Fat share
    pub fat: f64,
}

impl MacroRatio {
    /// Construct a ratio triple
    #[must_use]
    pub const fn new(protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            protein,
            carbs,
            fat,
        }
    }

    /// Sum of the three components
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.protein + self.carbs + self.fat
    }

    /// Derive a ratio triple from gram quantities.
    ///
    /// A non-positive gram total short-circuits to `fallback` instead of
    /// dividing by zero.
    #[must_use]
    pub fn from_grams(protein_g: f64, carbs_g: f64, fat_g: f64, fallback: Self) -> Self {
        let total = protein_g + carbs_g + fat_g;
        if total <= 0.0 {
            return fallback;
        }
        Self {
            protein: protein_g / total,
            carbs: carbs_g / total,
            fat: fat_g / total,
        }
    }
}

/// Energy requirement estimate for one profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyTargets {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: f64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: f64,
    /// Goal-adjusted daily calorie target (kcal/day)
    pub daily_calorie_target: f64,
    /// Activity multiplier that produced the TDEE
    pub activity_multiplier: f64,
    /// Signed kcal delta actually applied for the goal
    pub calorie_adjustment: f64,
}

/// Per-day and per-meal macronutrient targets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroTargets {
    /// Daily protein target (grams)
    pub protein_g: f64,
    /// Daily carbohydrate target (grams)
    pub carbs_g: f64,
    /// Daily fat target (grams)
    pub fat_g: f64,
    /// Daily calorie target (kcal)
    pub daily_calories: f64,
    /// Per-meal protein target (grams)
    pub per_meal_protein_g: f64,
    /// Per-meal carbohydrate target (grams)
    pub per_meal_carbs_g: f64,
    /// Per-meal fat target (grams)
    pub per_meal_fat_g: f64,
    /// Per-meal calorie target (kcal)
    pub per_meal_calories: f64,
    /// Gram-derived ratio triple used for macro-similarity scoring
    pub ratio: MacroRatio,
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990).
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + constant
/// - Men: +5
/// - Women: -161
/// - Unspecified/other: arithmetic mean of both branches. This is an
///   explicit policy for profiles outside the two formula branches, not a
///   fallback of convenience.
#[must_use]
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age: u32, sex: Sex, config: &EnergyConfig) -> f64 {
    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age);
    let base = weight_component + height_component + age_component;

    match sex {
        Sex::Male => base + config.msj_male_constant,
        Sex::Female => base + config.msj_female_constant,
        Sex::Other => f64::midpoint(
            base + config.msj_male_constant,
            base + config.msj_female_constant,
        ),
    }
}

/// Activity multiplier for a level, from the configured factor table
#[must_use]
pub const fn activity_multiplier(level: ActivityLevel, config: &EnergyConfig) -> f64 {
    match level {
        ActivityLevel::Sedentary => config.activity_factors.sedentary,
        ActivityLevel::LightlyActive => config.activity_factors.lightly_active,
        ActivityLevel::ModeratelyActive => config.activity_factors.moderately_active,
        ActivityLevel::VeryActive => config.activity_factors.very_active,
        ActivityLevel::ExtraActive => config.activity_factors.extra_active,
    }
}

/// Estimate BMR, TDEE, and the goal-adjusted daily calorie target.
///
/// The goal adjustment follows the configured convention: additive kcal
/// deltas (canonical) or multiplicative percentage factors (accepted
/// alternative). Both report the applied delta in `calorie_adjustment`.
#[must_use]
pub fn estimate_energy_targets(profile: &UserProfile, config: &EnergyConfig) -> EnergyTargets {
    let bmr = calculate_bmr(
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.sex,
        config,
    );
    let multiplier = activity_multiplier(profile.activity_level, config);
    let tdee = bmr * multiplier;

    let daily_calorie_target = match config.goal_adjustment {
        GoalAdjustment::Additive => {
            tdee + config.additive_deltas.for_goal(profile.health_goal)
        }
        GoalAdjustment::Multiplicative => {
            tdee * config.multiplicative_factors.for_goal(profile.health_goal)
        }
    };

    EnergyTargets {
        bmr,
        tdee,
        daily_calorie_target,
        activity_multiplier: multiplier,
        calorie_adjustment: daily_calorie_target - tdee,
    }
}

/// Allocate per-day and per-meal macro targets from a daily calorie target.
///
/// Ratios come from the goal table (protein and carbs at 4 kcal/g, fat at
/// 9 kcal/g); per-meal targets divide by the configured meals-per-day
/// (fixed at 3). The returned `ratio` is re-derived from the gram targets
/// so that later similarity scoring compares like with like; a zero gram
/// total substitutes the configured default ratio.
#[must_use]
pub fn allocate_macro_targets(
    daily_calorie_target: f64,
    goal: HealthGoal,
    config: &MacroTargetConfig,
) -> MacroTargets {
    let goal_ratio = config.ratio_for_goal(goal);

    let protein_g = daily_calorie_target * goal_ratio.protein / energy::KCAL_PER_GRAM_PROTEIN;
    let carbs_g = daily_calorie_target * goal_ratio.carbs / energy::KCAL_PER_GRAM_CARBS;
    let fat_g = daily_calorie_target * goal_ratio.fat / energy::KCAL_PER_GRAM_FAT;

    let meals = config.meals_per_day;
    let ratio = MacroRatio::from_grams(protein_g, carbs_g, fat_g, config.default_ratio);

    MacroTargets {
        protein_g,
        carbs_g,
        fat_g,
        daily_calories: daily_calorie_target,
        per_meal_protein_g: protein_g / meals,
        per_meal_carbs_g: carbs_g / meals,
        per_meal_fat_g: fat_g / meals,
        per_meal_calories: daily_calorie_target / meals,
        ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use uuid::Uuid;

    fn profile(sex: Sex, goal: HealthGoal, level: ActivityLevel) -> UserProfile {
        UserProfile {
            user_id: Uuid::new_v4(),
            sex,
            age: 25,
            weight_kg: 70.0,
            height_cm: 175.0,
            target_weight_kg: 75.0,
            activity_level: level,
            health_goal: goal,
            allergies: vec![],
            body_condition: None,
        }
    }

    #[test]
    fn male_bmr_matches_mifflin_st_jeor() {
        let config = EnergyConfig::default();
        // 10*70 + 6.25*175 - 5*25 + 5 = 1673.75
        let bmr = calculate_bmr(70.0, 175.0, 25, Sex::Male, &config);
        assert!((bmr - 1673.75).abs() < 1e-9);
    }

    #[test]
    fn other_sex_takes_mean_of_both_branches() {
        let config = EnergyConfig::default();
        let male = calculate_bmr(70.0, 175.0, 25, Sex::Male, &config);
        let female = calculate_bmr(70.0, 175.0, 25, Sex::Female, &config);
        let other = calculate_bmr(70.0, 175.0, 25, Sex::Other, &config);
        assert!((other - f64::midpoint(male, female)).abs() < 1e-9);
    }

    #[test]
    fn tdee_is_bmr_times_multiplier_and_never_below_bmr() {
        let config = EnergyConfig::default();
        for level in [
            ActivityLevel::Sedentary,
            ActivityLevel::LightlyActive,
            ActivityLevel::ModeratelyActive,
            ActivityLevel::VeryActive,
            ActivityLevel::ExtraActive,
        ] {
            let targets =
                estimate_energy_targets(&profile(Sex::Male, HealthGoal::Maintain, level), &config);
            assert!(targets.bmr > 0.0);
            assert!(targets.tdee >= targets.bmr);
        }
    }

    #[test]
    fn additive_muscle_gain_adds_surplus() {
        let config = EnergyConfig::default();
        let targets = estimate_energy_targets(
            &profile(
                Sex::Male,
                HealthGoal::GainMuscle,
                ActivityLevel::ModeratelyActive,
            ),
            &config,
        );
        assert!((targets.tdee - 1673.75 * 1.55).abs() < 1e-9);
        assert!((targets.calorie_adjustment - 300.0).abs() < 1e-9);
        assert!((targets.daily_calorie_target - (targets.tdee + 300.0)).abs() < 1e-9);
    }

    #[test]
    fn multiplicative_variant_applies_percentage_deltas() {
        let config = EnergyConfig {
            goal_adjustment: GoalAdjustment::Multiplicative,
            ..EnergyConfig::default()
        };
        let targets = estimate_energy_targets(
            &profile(
                Sex::Female,
                HealthGoal::LoseWeight,
                ActivityLevel::Sedentary,
            ),
            &config,
        );
        assert!((targets.daily_calorie_target - targets.tdee * 0.85).abs() < 1e-9);
        assert!(targets.calorie_adjustment < 0.0);
    }

    #[test]
    fn macro_ratios_normalize_for_every_goal() {
        let config = MacroTargetConfig::default();
        for goal in [
            HealthGoal::LoseWeight,
            HealthGoal::Maintain,
            HealthGoal::GainMuscle,
            HealthGoal::BulkUp,
        ] {
            let targets = allocate_macro_targets(2200.0, goal, &config);
            assert!((targets.ratio.sum() - 1.0).abs() < 1e-6);
            assert!(targets.per_meal_calories > 0.0);
            assert!((targets.per_meal_protein_g * 3.0 - targets.protein_g).abs() < 1e-9);
        }
    }

    #[test]
    fn zero_calorie_target_falls_back_to_default_ratio() {
        let config = MacroTargetConfig::default();
        let targets = allocate_macro_targets(0.0, HealthGoal::Maintain, &config);
        assert_eq!(targets.ratio, config.default_ratio);
        assert!((targets.ratio.sum() - 1.0).abs() < 1e-6);
    }
}
