// ABOUTME: Nutrition constants backing the scoring rule tables
// ABOUTME: Atwater factors, Mifflin-St Jeor coefficients, condition thresholds and bonuses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateful

//! Nutrition constants used throughout the recommendation engine.
//!
//! Energy conversion factors and the BMR formula coefficients come from the
//! standard literature; the condition-override thresholds mirror the clinical
//! rule tables the product ships with and are deliberately kept here, in one
//! place, rather than scattered through the scorer.

/// Energy conversion and formula coefficients
pub mod energy {
    /// Atwater factor for protein (kcal per gram)
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;

    /// Atwater factor for carbohydrate (kcal per gram)
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;

    /// Atwater factor for fat (kcal per gram)
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

    /// Mifflin-St Jeor weight coefficient
    ///
    /// Reference: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
    pub const MSJ_WEIGHT_COEF: f64 = 10.0;

    /// Mifflin-St Jeor height coefficient
    pub const MSJ_HEIGHT_COEF: f64 = 6.25;

    /// Mifflin-St Jeor age coefficient
    pub const MSJ_AGE_COEF: f64 = -5.0;

    /// Mifflin-St Jeor male constant
    pub const MSJ_MALE_CONSTANT: f64 = 5.0;

    /// Mifflin-St Jeor female constant
    pub const MSJ_FEMALE_CONSTANT: f64 = -161.0;

    /// Meals per day used to derive per-meal targets from daily targets
    pub const MEALS_PER_DAY: f64 = 3.0;
}

/// Kidney / proteinuria / explicit low-protein request overrides
pub mod kidney {
    /// Protein above this triggers the heavy penalty (grams)
    pub const PROTEIN_HEAVY_G: f64 = 20.0;
    /// Protein above this triggers the moderate penalty (grams)
    pub const PROTEIN_MODERATE_G: f64 = 15.0;
    /// Sodium above this triggers the heavy penalty (mg)
    pub const SODIUM_HEAVY_MG: f64 = 600.0;
    /// Sodium above this triggers the moderate penalty (mg)
    pub const SODIUM_MODERATE_MG: f64 = 400.0;
    /// Protein below this qualifies for the renal-friendly bonus (grams)
    pub const PROTEIN_SAFE_G: f64 = 12.0;
    /// Sodium below this qualifies for the renal-friendly bonus (mg)
    pub const SODIUM_SAFE_MG: f64 = 400.0;

    /// Penalty for protein above [`PROTEIN_HEAVY_G`]
    pub const PROTEIN_HEAVY_PENALTY: f64 = 30.0;
    /// Penalty for protein above [`PROTEIN_MODERATE_G`]
    pub const PROTEIN_MODERATE_PENALTY: f64 = 15.0;
    /// Penalty for sodium above [`SODIUM_HEAVY_MG`]
    pub const SODIUM_HEAVY_PENALTY: f64 = 20.0;
    /// Penalty for sodium above [`SODIUM_MODERATE_MG`]
    pub const SODIUM_MODERATE_PENALTY: f64 = 10.0;
    /// Bonus for meals under both safe thresholds
    pub const SAFE_MEAL_BONUS: f64 = 25.0;
    /// Bonus for vegetable/salad/fruit meals
    pub const PRODUCE_BONUS: f64 = 15.0;
}

/// Diabetes / blood sugar / explicit low-carb request overrides
pub mod diabetes {
    /// Carbs above this are penalized (grams)
    pub const CARBS_HIGH_G: f64 = 60.0;
    /// Carbs below this earn a bonus (grams)
    pub const CARBS_LOW_G: f64 = 30.0;
    /// Penalty for carbs above [`CARBS_HIGH_G`]
    pub const CARBS_HIGH_PENALTY: f64 = 25.0;
    /// Bonus for carbs below [`CARBS_LOW_G`]
    pub const CARBS_LOW_BONUS: f64 = 15.0;
    /// Bonus for whole-grain ingredients
    pub const WHOLE_GRAIN_BONUS: f64 = 10.0;
}

/// Hypertension / blood pressure / explicit low-sodium request overrides
pub mod hypertension {
    /// Sodium above this is penalized (mg)
    pub const SODIUM_HIGH_MG: f64 = 600.0;
    /// Sodium below this earns a bonus (mg)
    pub const SODIUM_LOW_MG: f64 = 300.0;
    /// Penalty for sodium above [`SODIUM_HIGH_MG`]
    pub const SODIUM_HIGH_PENALTY: f64 = 30.0;
    /// Bonus for sodium below [`SODIUM_LOW_MG`]
    pub const SODIUM_LOW_BONUS: f64 = 20.0;
}

/// High-protein request bonuses (non-critical)
pub mod high_protein {
    /// Protein above this earns the larger bonus (grams)
    pub const PROTEIN_VERY_HIGH_G: f64 = 25.0;
    /// Protein above this earns the smaller bonus (grams)
    pub const PROTEIN_HIGH_G: f64 = 20.0;
    /// Bonus for protein above [`PROTEIN_VERY_HIGH_G`]
    pub const VERY_HIGH_BONUS: f64 = 20.0;
    /// Bonus for protein above [`PROTEIN_HIGH_G`]
    pub const HIGH_BONUS: f64 = 15.0;
    /// Bonus for named lean-protein ingredients
    pub const INGREDIENT_BONUS: f64 = 10.0;
}

/// Fatigue note bonuses (non-critical)
pub mod fatigue {
    /// Lower bound of the moderate-protein band (grams)
    pub const PROTEIN_BAND_MIN_G: f64 = 15.0;
    /// Upper bound of the moderate-protein band (grams)
    pub const PROTEIN_BAND_MAX_G: f64 = 25.0;
    /// Bonus for protein inside the band
    pub const PROTEIN_BAND_BONUS: f64 = 15.0;
    /// Bonus for named protein sources (salmon, chicken)
    pub const PROTEIN_SOURCE_BONUS: f64 = 10.0;
    /// Bonus for iron-rich greens
    pub const GREENS_BONUS: f64 = 5.0;
}

/// Digestion note bonuses (non-critical)
pub mod digestion {
    /// Sodium below this earns a bonus (mg)
    pub const SODIUM_GENTLE_MG: f64 = 500.0;
    /// Bonus for sodium below [`SODIUM_GENTLE_MG`]
    pub const SODIUM_GENTLE_BONUS: f64 = 15.0;
    /// Bonus for fiber-rich ingredients
    pub const FIBER_BONUS: f64 = 10.0;
    /// Bonus for probiotic ingredients
    pub const PROBIOTIC_BONUS: f64 = 10.0;
    /// Fat above this is penalized (grams)
    pub const FAT_HEAVY_G: f64 = 15.0;
    /// Penalty for fat above [`FAT_HEAVY_G`]
    pub const FAT_HEAVY_PENALTY: f64 = 10.0;
}

/// Muscle soreness note bonuses (non-critical)
pub mod muscle_recovery {
    /// Protein above this earns a bonus (grams)
    pub const PROTEIN_RECOVERY_G: f64 = 18.0;
    /// Bonus for protein above [`PROTEIN_RECOVERY_G`]
    pub const PROTEIN_BONUS: f64 = 15.0;
    /// Bonus for omega-3 rich fish
    pub const OMEGA3_BONUS: f64 = 10.0;
    /// Bonus for anti-inflammatory ingredients
    pub const ANTI_INFLAMMATORY_BONUS: f64 = 5.0;
}

/// Stress note bonuses (non-critical)
pub mod stress {
    /// Lower bound of the complex-carb band (grams)
    pub const CARBS_BAND_MIN_G: f64 = 40.0;
    /// Upper bound of the complex-carb band (grams)
    pub const CARBS_BAND_MAX_G: f64 = 70.0;
    /// Bonus for carbs inside the band
    pub const CARBS_BAND_BONUS: f64 = 10.0;
    /// Bonus for complex-carb ingredients
    pub const COMPLEX_CARB_BONUS: f64 = 10.0;
    /// Bonus for calming ingredients (salmon, avocado)
    pub const CALMING_BONUS: f64 = 5.0;
}

/// Goal-based bonuses applied outside critical condition overrides
pub mod goal_bonus {
    /// Protein threshold for the muscle-gain bonus (grams)
    pub const MUSCLE_PROTEIN_G: f64 = 20.0;
    /// Bonus for protein above [`MUSCLE_PROTEIN_G`] under muscle goals
    pub const MUSCLE_PROTEIN_BONUS: f64 = 10.0;
    /// Calorie threshold for the muscle-gain calorie bonus
    pub const MUSCLE_CALORIES: f64 = 400.0;
    /// Bonus for calories above [`MUSCLE_CALORIES`] under muscle goals
    pub const MUSCLE_CALORIE_BONUS: f64 = 5.0;
    /// Bonus for calories below the per-meal target under weight loss
    pub const LOSS_CALORIE_BONUS: f64 = 5.0;
    /// Protein threshold for the weight-loss satiety bonus (grams)
    pub const LOSS_PROTEIN_G: f64 = 15.0;
    /// Bonus for protein above [`LOSS_PROTEIN_G`] under weight loss
    pub const LOSS_PROTEIN_BONUS: f64 = 5.0;
}

/// Catch-all adjustments for unrecognized body-condition notes
pub mod word_match {
    /// Bonus per content word from the note found in a meal name/ingredients
    pub const CONTENT_WORD_BONUS: f64 = 35.0;
    /// Bonus when a spicy-food request matches a spicy meal
    pub const SPICY_BONUS: f64 = 20.0;
}
