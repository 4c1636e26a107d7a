// ABOUTME: Engine configuration: thresholds, weights, tables, and selection policy
// ABOUTME: Defaults from nutrition_constants, process-wide global, PLATEFUL_* env overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateful

//! Engine Configuration
//!
//! Provides type-safe configuration for every stage of the recommendation
//! pipeline: energy estimation, macro allocation, corpus filtering, scoring,
//! and ranking. Defaults are drawn from [`crate::nutrition_constants`];
//! deployments override individual values through `PLATEFUL_*` environment
//! variables read once at startup by [`EngineConfig::global`].

use crate::nutrition_calculator::MacroRatio;
use crate::nutrition_constants::energy;
use plateful_core::HealthGoal;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;
use tracing::warn;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A weight or fraction fell outside its valid range
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// A ratio table entry does not normalize
    #[error("Invalid ratio: {0}")]
    InvalidRatio(&'static str),
}

/// How the health goal adjusts the daily calorie target.
///
/// The product shipped both conventions at different times; additive is
/// canonical, multiplicative remains supported for deployments that prefer
/// percentage deltas.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GoalAdjustment {
    /// Fixed kcal delta per goal (default: -500 / 0 / +300 / +300)
    Additive,
    /// Percentage delta per goal (x0.85 / x1.00 / x1.10 / x1.10)
    Multiplicative,
}

/// Selection policy for the final recommendation slice
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// Deterministic highest-score slice
    StrictTopN,
    /// Uniform random sample of N from the top-K unique meals, trading
    /// strict optimality for variety across repeated identical requests
    TopKSample,
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub lightly_active: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderately_active: f64,
    /// Very active (6-7 days/week): 1.725
    pub very_active: f64,
    /// Extra active (hard training 2x/day): 1.9
    pub extra_active: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            lightly_active: 1.375,
            moderately_active: 1.55,
            very_active: 1.725,
            extra_active: 1.9,
        }
    }
}

/// Goal-keyed calorie deltas for the additive adjustment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalCalorieDeltas {
    /// Deficit for weight loss (kcal)
    pub lose_weight: f64,
    /// Maintenance delta (kcal)
    pub maintain: f64,
    /// Surplus for muscle gain (kcal)
    pub gain_muscle: f64,
    /// Surplus for bulking (kcal)
    pub bulk_up: f64,
}

impl GoalCalorieDeltas {
    /// Delta for a given goal
    #[must_use]
    pub const fn for_goal(&self, goal: HealthGoal) -> f64 {
        match goal {
            HealthGoal::LoseWeight => self.lose_weight,
            HealthGoal::Maintain => self.maintain,
            HealthGoal::GainMuscle => self.gain_muscle,
            HealthGoal::BulkUp => self.bulk_up,
        }
    }
}

impl Default for GoalCalorieDeltas {
    fn default() -> Self {
        Self {
            lose_weight: -500.0,
            maintain: 0.0,
            gain_muscle: 300.0,
            bulk_up: 300.0,
        }
    }
}

/// Goal-keyed multipliers for the multiplicative adjustment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalCalorieFactors {
    /// Deficit factor for weight loss
    pub lose_weight: f64,
    /// Maintenance factor
    pub maintain: f64,
    /// Surplus factor for muscle gain
    pub gain_muscle: f64,
    /// Surplus factor for bulking
    pub bulk_up: f64,
}

impl GoalCalorieFactors {
    /// Factor for a given goal
    #[must_use]
    pub const fn for_goal(&self, goal: HealthGoal) -> f64 {
        match goal {
            HealthGoal::LoseWeight => self.lose_weight,
            HealthGoal::Maintain => self.maintain,
            HealthGoal::GainMuscle => self.gain_muscle,
            HealthGoal::BulkUp => self.bulk_up,
        }
    }
}

impl Default for GoalCalorieFactors {
    fn default() -> Self {
        Self {
            lose_weight: 0.85,
            maintain: 1.0,
            gain_muscle: 1.10,
            bulk_up: 1.10,
        }
    }
}

/// Energy estimation configuration (BMR formula + TDEE + goal adjustment)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
    /// Activity multipliers per level
    pub activity_factors: ActivityFactorsConfig,
    /// Active goal adjustment convention
    pub goal_adjustment: GoalAdjustment,
    /// Deltas used when `goal_adjustment` is additive
    pub additive_deltas: GoalCalorieDeltas,
    /// Factors used when `goal_adjustment` is multiplicative
    pub multiplicative_factors: GoalCalorieFactors,
}

impl Default for EnergyConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: energy::MSJ_WEIGHT_COEF,
            msj_height_coef: energy::MSJ_HEIGHT_COEF,
            msj_age_coef: energy::MSJ_AGE_COEF,
            msj_male_constant: energy::MSJ_MALE_CONSTANT,
            msj_female_constant: energy::MSJ_FEMALE_CONSTANT,
            activity_factors: ActivityFactorsConfig::default(),
            goal_adjustment: GoalAdjustment::Additive,
            additive_deltas: GoalCalorieDeltas::default(),
            multiplicative_factors: GoalCalorieFactors::default(),
        }
    }
}

/// Macro allocation configuration (goal ratio table + fallback)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroTargetConfig {
    /// Ratio triple for weight loss (protein-heavy)
    pub lose_weight: MacroRatio,
    /// Ratio triple for maintenance
    pub maintain: MacroRatio,
    /// Ratio triple for muscle gain (carb-leaning)
    pub gain_muscle: MacroRatio,
    /// Ratio triple for bulking
    pub bulk_up: MacroRatio,
    /// Fallback ratio when a target would otherwise divide by zero
    pub default_ratio: MacroRatio,
    /// Meals per day used to derive per-meal targets
    pub meals_per_day: f64,
}

impl MacroTargetConfig {
    /// Ratio triple for a given goal
    #[must_use]
    pub const fn ratio_for_goal(&self, goal: HealthGoal) -> MacroRatio {
        match goal {
            HealthGoal::LoseWeight => self.lose_weight,
            HealthGoal::Maintain => self.maintain,
            HealthGoal::GainMuscle => self.gain_muscle,
            HealthGoal::BulkUp => self.bulk_up,
        }
    }
}

impl Default for MacroTargetConfig {
    fn default() -> Self {
        Self {
            lose_weight: MacroRatio::new(0.40, 0.30, 0.30),
            maintain: MacroRatio::new(0.30, 0.40, 0.30),
            gain_muscle: MacroRatio::new(0.35, 0.45, 0.20),
            bulk_up: MacroRatio::new(0.30, 0.50, 0.20),
            default_ratio: MacroRatio::new(0.33, 0.53, 0.14),
            meals_per_day: energy::MEALS_PER_DAY,
        }
    }
}

/// Corpus filter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Single meals above this fraction of the daily calorie target are
    /// excluded, preventing single-meal calorie blowouts
    pub calorie_ceiling_fraction: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            calorie_ceiling_fraction: 0.4,
        }
    }
}

/// Scoring weights and preference adjustments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Weight of the calorie-fit component in the base score
    pub calorie_weight: f64,
    /// Weight of the macro-similarity component in the base score
    pub macro_weight: f64,
    /// Penalty per unit of absolute protein-ratio deviation
    pub protein_deviation_penalty: f64,
    /// Penalty per unit of absolute carb-ratio deviation
    pub carbs_deviation_penalty: f64,
    /// Penalty per unit of absolute fat-ratio deviation
    pub fat_deviation_penalty: f64,
    /// Flat bonus for the first liked-food match
    pub liked_food_bonus: f64,
    /// Flat penalty for the first disliked-food match
    pub disliked_food_penalty: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            calorie_weight: 0.5,
            macro_weight: 0.5,
            protein_deviation_penalty: 150.0,
            carbs_deviation_penalty: 100.0,
            fat_deviation_penalty: 150.0,
            liked_food_bonus: 100.0,
            disliked_food_penalty: 100.0,
        }
    }
}

/// Ranking and diversity sampling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Active selection policy
    pub policy: SelectionPolicy,
    /// Pool size for `TopKSample`
    pub top_k_pool: usize,
    /// Output size when the caller does not specify one
    pub default_recommendations: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            policy: SelectionPolicy::StrictTopN,
            top_k_pool: 50,
            default_recommendations: 10,
        }
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Energy estimation configuration
    pub energy: EnergyConfig,
    /// Macro allocation configuration
    pub macros: MacroTargetConfig,
    /// Corpus filter configuration
    pub filter: FilterConfig,
    /// Scoring configuration
    pub scoring: ScoringConfig,
    /// Ranking configuration
    pub ranking: RankingConfig,
}

static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

impl EngineConfig {
    /// Process-wide configuration, initialized from defaults plus
    /// environment overrides on first access
    #[must_use]
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(Self::from_env)
    }

    /// Build configuration from defaults and `PLATEFUL_*` environment
    /// variables. Unparsable values are logged and ignored.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("PLATEFUL_GOAL_ADJUSTMENT") {
            match val.to_lowercase().as_str() {
                "additive" => config.energy.goal_adjustment = GoalAdjustment::Additive,
                "multiplicative" => {
                    config.energy.goal_adjustment = GoalAdjustment::Multiplicative;
                }
                other => warn!("ignoring unknown PLATEFUL_GOAL_ADJUSTMENT value: {other}"),
            }
        }

        if let Ok(val) = std::env::var("PLATEFUL_CALORIE_CEILING_FRACTION") {
            if let Ok(parsed) = val.parse::<f64>() {
                config.filter.calorie_ceiling_fraction = parsed;
            } else {
                warn!("ignoring unparsable PLATEFUL_CALORIE_CEILING_FRACTION: {val}");
            }
        }

        if let Ok(val) = std::env::var("PLATEFUL_SELECTION_POLICY") {
            match val.to_lowercase().as_str() {
                "strict_top_n" => config.ranking.policy = SelectionPolicy::StrictTopN,
                "top_k_sample" => config.ranking.policy = SelectionPolicy::TopKSample,
                other => warn!("ignoring unknown PLATEFUL_SELECTION_POLICY value: {other}"),
            }
        }

        if let Ok(val) = std::env::var("PLATEFUL_TOP_K_POOL") {
            if let Ok(parsed) = val.parse::<usize>() {
                config.ranking.top_k_pool = parsed;
            } else {
                warn!("ignoring unparsable PLATEFUL_TOP_K_POOL: {val}");
            }
        }

        if let Ok(val) = std::env::var("PLATEFUL_DEFAULT_RECOMMENDATIONS") {
            if let Ok(parsed) = val.parse::<usize>() {
                config.ranking.default_recommendations = parsed;
            } else {
                warn!("ignoring unparsable PLATEFUL_DEFAULT_RECOMMENDATIONS: {val}");
            }
        }

        if let Err(error) = config.validate() {
            warn!(%error, "environment overrides produced an invalid config, using defaults");
            return Self::default();
        }

        config
    }

    /// Validate ranges and ratio tables.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.filter.calorie_ceiling_fraction <= 0.0 || self.filter.calorie_ceiling_fraction > 1.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "filter.calorie_ceiling_fraction must be in (0, 1]",
            ));
        }
        if (self.scoring.calorie_weight + self.scoring.macro_weight - 1.0).abs() > 1e-6 {
            return Err(ConfigError::ValueOutOfRange(
                "scoring.calorie_weight and scoring.macro_weight must sum to 1.0",
            ));
        }
        if self.ranking.top_k_pool == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "ranking.top_k_pool must be positive",
            ));
        }
        if self.macros.meals_per_day <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "macros.meals_per_day must be positive",
            ));
        }

        for (name, ratio) in [
            ("lose_weight", self.macros.lose_weight),
            ("maintain", self.macros.maintain),
            ("gain_muscle", self.macros.gain_muscle),
            ("bulk_up", self.macros.bulk_up),
            ("default", self.macros.default_ratio),
        ] {
            if (ratio.sum() - 1.0).abs() > 1e-6 {
                warn!(table = name, sum = ratio.sum(), "macro ratio does not normalize");
                return Err(ConfigError::InvalidRatio(
                    "macro ratio tables must sum to 1.0",
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_goal_adjustment_is_additive() {
        let config = EngineConfig::default();
        assert_eq!(config.energy.goal_adjustment, GoalAdjustment::Additive);
        assert_eq!(config.energy.additive_deltas.lose_weight, -500.0);
        assert_eq!(config.energy.additive_deltas.gain_muscle, 300.0);
    }

    #[test]
    fn goal_tables_cover_every_goal() {
        let config = MacroTargetConfig::default();
        for goal in [
            HealthGoal::LoseWeight,
            HealthGoal::Maintain,
            HealthGoal::GainMuscle,
            HealthGoal::BulkUp,
        ] {
            let ratio = config.ratio_for_goal(goal);
            assert!((ratio.protein + ratio.carbs + ratio.fat - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn default_selection_policy_is_strict() {
        let config = RankingConfig::default();
        assert_eq!(config.policy, SelectionPolicy::StrictTopN);
        assert_eq!(config.top_k_pool, 50);
    }

    #[test]
    fn default_config_validates() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn validation_rejects_broken_weights_and_ratios() {
        let broken_weights = EngineConfig {
            scoring: ScoringConfig {
                calorie_weight: 0.9,
                macro_weight: 0.5,
                ..ScoringConfig::default()
            },
            ..EngineConfig::default()
        };
        assert!(broken_weights.validate().is_err());

        let broken_ratio = EngineConfig {
            macros: MacroTargetConfig {
                maintain: MacroRatio::new(0.5, 0.5, 0.5),
                ..MacroTargetConfig::default()
            },
            ..EngineConfig::default()
        };
        assert!(broken_ratio.validate().is_err());
    }
}
