// ABOUTME: Bilingual recommendation rationale: deterministic composer + pluggable provider seam
// ABOUTME: Critical conditions carry a safety caveat; the deterministic path is the fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateful

//! Rationale Composer
//!
//! Produces the human-readable justification attached to a recommendation
//! response. The deterministic composer walks the same priority decision
//! table as the scorer: critical conditions get an explicit safety caveat
//! and a suggestion to consult a professional, non-critical conditions get a
//! tailored sentence, and a missing note falls back to a goal-only sentence.
//!
//! An external language-model collaborator may implement
//! [`RationaleProvider`] to return richer prose; the engine falls back to
//! [`DeterministicRationale`] whenever that collaborator is unavailable or
//! errors. This module is pure string composition with no side effects.

use crate::condition_rules::{self, ConditionCategory};
use crate::nutrition_calculator::EnergyTargets;
use async_trait::async_trait;
use plateful_core::{AppResult, HealthGoal, Meal};

/// Structured inputs for rationale composition
#[derive(Debug, Clone)]
pub struct RationaleContext<'a> {
    /// User health goal
    pub health_goal: HealthGoal,
    /// Free-text body-condition note, if present
    pub body_condition: Option<&'a str>,
    /// Current body weight (kg)
    pub weight_kg: f64,
    /// Target body weight (kg)
    pub target_weight_kg: f64,
    /// Energy targets echoed into the explanation
    pub energy: &'a EnergyTargets,
    /// Number of meals recommended
    pub meal_count: usize,
}

/// Pluggable rationale seam. Implementations receive the same structured
/// inputs as the deterministic composer and return finished prose.
#[async_trait]
pub trait RationaleProvider: Send + Sync {
    /// Compose a recommendation rationale
    async fn compose(&self, context: &RationaleContext<'_>) -> AppResult<String>;
}

/// The deterministic, always-available rationale composer
#[derive(Debug, Clone, Copy, Default)]
pub struct DeterministicRationale;

#[async_trait]
impl RationaleProvider for DeterministicRationale {
    async fn compose(&self, context: &RationaleContext<'_>) -> AppResult<String> {
        Ok(compose_reason(context))
    }
}

const fn goal_labels(goal: HealthGoal) -> (&'static str, &'static str) {
    match goal {
        HealthGoal::LoseWeight => ("weight loss", "체중 감량"),
        HealthGoal::Maintain => ("weight maintenance", "체중 유지"),
        HealthGoal::GainMuscle => ("muscle gain", "근육 증가"),
        HealthGoal::BulkUp => ("bulking up", "벌크업"),
    }
}

/// Compose the bilingual explanation for a recommendation response.
///
/// Deterministic: the same inputs always produce the same string.
#[must_use]
pub fn compose_reason(context: &RationaleContext<'_>) -> String {
    let (goal_en, goal_ko) = goal_labels(context.health_goal);
    let calories = context.energy.daily_calorie_target.round();
    let mut reason = format!(
        "Based on your {goal_en} goal ({goal_ko} 목표), I've selected {count} meals with around {calories:.0} kcal/day. ",
        count = context.meal_count,
    );

    let weight_delta = (context.target_weight_kg - context.weight_kg).abs();
    if weight_delta >= 1.0 {
        reason.push_str(&format!(
            "That accounts for the {weight_delta:.0} kg between your current and target weight. "
        ));
    }

    let condition = context
        .body_condition
        .map(str::trim)
        .filter(|note| !note.is_empty());

    match condition {
        Some(note) => match condition_rules::detect_condition(note) {
            Some(category) => reason.push_str(condition_sentence(category)),
            None => reason.push_str(
                "Considering your current condition, I customized these meals for your needs. \
                 현재 몸 상태를 고려하여 맞춤 식단을 준비했습니다. ",
            ),
        },
        None => reason.push_str(goal_sentence(context.health_goal)),
    }

    reason.push_str("Enjoy your meals! 맛있게 드세요!");
    reason
}

const fn condition_sentence(category: ConditionCategory) -> &'static str {
    match category {
        ConditionCategory::Kidney => {
            "IMPORTANT: Due to kidney concerns, I selected low-protein and low-sodium meals \
             to protect your kidney health. Please consult a doctor. \
             신장 건강을 고려하여 저단백, 저염 식단을 선택했습니다. 의사 상담을 권장합니다. "
        }
        ConditionCategory::Diabetes => {
            "IMPORTANT: For blood sugar management, I chose low-carb meals with complex \
             carbohydrates to help stabilize your glucose levels. Please consult a doctor. \
             혈당 관리를 위해 저탄수화물 식단을 선택했습니다. 의사 상담을 권장합니다. "
        }
        ConditionCategory::Hypertension => {
            "IMPORTANT: For blood pressure management, I selected low-sodium meals to support \
             your cardiovascular health. Please consult a doctor. \
             혈압 관리를 위해 저염 식단을 선택했습니다. 의사 상담을 권장합니다. "
        }
        ConditionCategory::HighProtein => {
            "As requested, I favored high-protein meals (more than 20g protein per serving). \
             요청하신 대로 고단백 식단(1회 제공량당 20g 이상)을 우선했습니다. "
        }
        ConditionCategory::Fatigue => {
            "Since you're feeling tired, I focused on moderate-protein and vitamin-rich meals \
             for energy. 피곤하시다고 하셔서 에너지를 위한 적정 단백질, 비타민이 풍부한 \
             식단을 선택했습니다. "
        }
        ConditionCategory::Digestion => {
            "For your digestion concerns, I chose easily digestible and low-sodium meals. \
             소화 문제를 고려하여 소화가 잘 되고 저염 식단을 선택했습니다. "
        }
        ConditionCategory::MuscleRecovery => {
            "To help with muscle recovery, I selected moderate-protein meals with \
             anti-inflammatory benefits. 근육 회복을 위해 적정 단백질 및 항염 효과가 있는 \
             식단을 선택했습니다. "
        }
        ConditionCategory::Stress => {
            "To help manage stress, I picked balanced meals with complex carbs and calming \
             nutrients. 스트레스 관리를 위해 복합 탄수화물과 안정 효과가 있는 균형잡힌 \
             식단을 선택했습니다. "
        }
    }
}

const fn goal_sentence(goal: HealthGoal) -> &'static str {
    match goal {
        HealthGoal::LoseWeight => {
            "These meals are lower in calories but high in protein to keep you satisfied. \
             칼로리는 낮지만 단백질이 풍부하여 포만감을 유지합니다. "
        }
        HealthGoal::GainMuscle => {
            "These meals are protein-rich to support muscle growth and recovery. \
             근육 성장과 회복을 위한 고단백 식단입니다. "
        }
        HealthGoal::BulkUp => {
            "These meals have higher calories and protein for effective bulking. \
             효과적인 벌크업을 위한 고칼로리, 고단백 식단입니다. "
        }
        HealthGoal::Maintain => {
            "These balanced meals will help you maintain your current weight. \
             현재 체중 유지를 위한 균형잡힌 식단입니다. "
        }
    }
}

/// Deterministic per-meal explanation used when no richer collaborator
/// supplied one
#[must_use]
pub fn meal_explanation(meal: &Meal) -> String {
    format!(
        "This meal provides {protein:.0}g protein, {carbs:.0}g carbs, and {fat:.0}g fat \
         at {calories:.0} kcal. 이 식단은 {calories:.0} kcal에 단백질 {protein:.0}g, \
         탄수화물 {carbs:.0}g, 지방 {fat:.0}g을 제공합니다.",
        protein = meal.protein_g(),
        carbs = meal.carbs_g(),
        fat = meal.fat_g(),
        calories = meal.calories(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn energy() -> EnergyTargets {
        EnergyTargets {
            bmr: 1500.0,
            tdee: 2325.0,
            daily_calorie_target: 2625.0,
            activity_multiplier: 1.55,
            calorie_adjustment: 300.0,
        }
    }

    fn context(goal: HealthGoal, note: Option<&'static str>) -> RationaleContext<'static> {
        RationaleContext {
            health_goal: goal,
            body_condition: note,
            weight_kg: 70.0,
            target_weight_kg: 75.0,
            energy: Box::leak(Box::new(energy())),
            meal_count: 10,
        }
    }

    #[test]
    fn critical_condition_includes_safety_caveat() {
        let reason = compose_reason(&context(HealthGoal::GainMuscle, Some("신장이 걱정돼요")));
        assert!(reason.contains("IMPORTANT"));
        assert!(reason.contains("consult a doctor"));
        assert!(reason.contains("의사 상담"));
    }

    #[test]
    fn missing_note_falls_back_to_goal_sentence() {
        let reason = compose_reason(&context(HealthGoal::LoseWeight, None));
        assert!(reason.contains("weight loss"));
        assert!(reason.contains("체중 감량"));
        assert!(reason.contains("포만감"));
        assert!(!reason.contains("IMPORTANT"));
    }

    #[test]
    fn unrecognized_note_gets_generic_customization_sentence() {
        let reason = compose_reason(&context(HealthGoal::Maintain, Some("그냥 기분이 별로")));
        assert!(reason.contains("customized these meals"));
    }

    #[test]
    fn composition_is_deterministic() {
        let a = compose_reason(&context(HealthGoal::BulkUp, Some("스트레스 받아요")));
        let b = compose_reason(&context(HealthGoal::BulkUp, Some("스트레스 받아요")));
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn deterministic_provider_matches_pure_function() {
        let ctx = context(HealthGoal::Maintain, None);
        let provider = DeterministicRationale;
        let composed = provider.compose(&ctx).await.unwrap();
        assert_eq!(composed, compose_reason(&ctx));
    }
}
