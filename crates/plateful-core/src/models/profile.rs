// ABOUTME: User physiological profile and the enums that describe it
// ABOUTME: Sex, ActivityLevel, and HealthGoal with lossy bilingual parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateful

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// Biological sex for BMR calculations.
///
/// `Other` is a deliberate policy, not an oversight: profiles that decline to
/// specify, or specify something outside the two formula branches, receive
/// the arithmetic mean of the male and female Mifflin-St Jeor results.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male formula branch (+5 constant)
    Male,
    /// Female formula branch (-161 constant)
    Female,
    /// Mean of both formula branches
    Other,
}

impl Sex {
    /// Parse from free-form labels, accepting English and Korean variants.
    /// Anything unrecognized resolves to `Other`.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "남성" | "남자" => Self::Male,
            "female" | "f" | "여성" | "여자" => Self::Female,
            _ => Self::Other,
        }
    }
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Sedentary (little/no exercise)
    Sedentary,
    /// Lightly active (1-3 days/week)
    LightlyActive,
    /// Moderately active (3-5 days/week)
    ModeratelyActive,
    /// Very active (6-7 days/week)
    VeryActive,
    /// Extra active (hard training 2x/day)
    ExtraActive,
}

impl ActivityLevel {
    /// Parse from free-form labels, accepting English and Korean variants.
    ///
    /// The source databases used "활동적"/"active" for the middle bucket, so
    /// both map to `ModeratelyActive`; unrecognized labels default there too.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "sedentary" | "비활동적" => Self::Sedentary,
            "light" | "lightly_active" | "lightly active" | "가볍게 활동적" => {
                Self::LightlyActive
            }
            "very_active" | "very active" | "매우 활동적" => Self::VeryActive,
            "extra_active" | "extra active" | "극도로 활동적" => Self::ExtraActive,
            "moderate" | "moderately_active" | "active" | "활동적" => Self::ModeratelyActive,
            other => {
                debug!(label = other, "unrecognized activity level, defaulting to moderate");
                Self::ModeratelyActive
            }
        }
    }
}

/// Health goal driving calorie adjustment and macro distribution
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HealthGoal {
    /// Weight loss (caloric deficit, protein-heavy macros)
    LoseWeight,
    /// Weight maintenance (caloric balance)
    Maintain,
    /// Muscle gain (caloric surplus, carb-leaning macros)
    GainMuscle,
    /// Bulking (larger surplus share from carbohydrates)
    BulkUp,
}

impl HealthGoal {
    /// Parse from free-form labels, accepting English and Korean variants.
    /// Anything unrecognized resolves to `Maintain`.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "lose_weight" | "weight_loss" | "체중감량" => Self::LoseWeight,
            "gain_muscle" | "muscle_gain" | "근육증가" => Self::GainMuscle,
            "bulk_up" | "bulking" | "벌크업" => Self::BulkUp,
            "maintain" | "maintenance" | "체중유지" => Self::Maintain,
            other => {
                debug!(label = other, "unrecognized health goal, defaulting to maintain");
                Self::Maintain
            }
        }
    }
}

/// User physiological profile for a single recommendation request.
///
/// Immutable per request. Validation of physiologically absurd inputs is the
/// transport layer's responsibility; the engine always produces numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// User identifier
    pub user_id: Uuid,
    /// Biological sex
    pub sex: Sex,
    /// Age in years
    pub age: u32,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Target body weight in kilograms
    pub target_weight_kg: f64,
    /// Activity level for the TDEE multiplier
    pub activity_level: ActivityLevel,
    /// Health goal
    pub health_goal: HealthGoal,
    /// Declared allergies, free-form
    #[serde(default)]
    pub allergies: Vec<String>,
    /// Free-text body condition note ("요즘 피곤해요", "low sodium please", ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_condition: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sex_parses_bilingual_labels() {
        assert_eq!(Sex::from_str_lossy("남성"), Sex::Male);
        assert_eq!(Sex::from_str_lossy("FEMALE"), Sex::Female);
        assert_eq!(Sex::from_str_lossy("nonbinary"), Sex::Other);
    }

    #[test]
    fn activity_level_defaults_to_moderate() {
        assert_eq!(
            ActivityLevel::from_str_lossy("활동적"),
            ActivityLevel::ModeratelyActive
        );
        assert_eq!(
            ActivityLevel::from_str_lossy("couch potato"),
            ActivityLevel::ModeratelyActive
        );
        assert_eq!(
            ActivityLevel::from_str_lossy("매우 활동적"),
            ActivityLevel::VeryActive
        );
    }

    #[test]
    fn health_goal_defaults_to_maintain() {
        assert_eq!(HealthGoal::from_str_lossy("체중감량"), HealthGoal::LoseWeight);
        assert_eq!(HealthGoal::from_str_lossy("keto"), HealthGoal::Maintain);
    }
}
