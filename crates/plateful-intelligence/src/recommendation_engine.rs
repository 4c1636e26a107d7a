// ABOUTME: Orchestrating recommendation engine: targets, filter, score, rank, explain
// ABOUTME: Pure synchronous pipeline; only the optional rationale collaborator is async
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateful

//! Recommendation Engine
//!
//! Wires the pipeline stages together for one request: energy targets,
//! macro targets, corpus filtering, parallel scoring, ranking/sampling, and
//! rationale composition. Every invocation is independent; the engine keeps
//! no per-user state and never mutates the corpus snapshot it is handed.
//!
//! An empty filtered corpus is a valid, reportable outcome — the caller
//! decides whether zero recommendations is a user-facing failure.

use crate::config::EngineConfig;
use crate::corpus_filter::CorpusFilter;
use crate::meal_scorer::{MealScorer, ScoredMeal};
use crate::nutrition_calculator::{
    allocate_macro_targets, estimate_energy_targets, EnergyTargets, MacroTargets,
};
use crate::ranker;
use crate::rationale::{
    compose_reason, meal_explanation, DeterministicRationale, RationaleContext, RationaleProvider,
};
use crate::translation::TranslationStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use plateful_core::{AppResult, Meal, PreferenceSignal, UserProfile};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

/// Pipeline audit counters echoed back to the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationDiagnostics {
    /// Corpus size before filtering
    pub total_evaluated: usize,
    /// Meals removed by the allergen rule
    pub filtered_out: usize,
    /// Meals removed by the category rule
    pub category_filtered: usize,
    /// Meals removed by the supplement keyword rule
    pub supplement_filtered: usize,
    /// Meals removed by the calorie ceiling
    pub calorie_filtered: usize,
    /// Unique candidates before truncation
    pub unique_candidates: usize,
}

/// Complete engine output for one request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    /// Request identifier for tracing
    pub request_id: Uuid,
    /// When this response was produced
    pub generated_at: DateTime<Utc>,
    /// Ranked recommendations, highest score first
    pub recommendations: Vec<ScoredMeal>,
    /// Energy targets echoed for display
    pub energy_targets: EnergyTargets,
    /// Macro targets echoed for display
    pub macro_targets: MacroTargets,
    /// Pipeline audit counters
    pub diagnostics: RecommendationDiagnostics,
    /// Human-readable justification for the selection
    pub recommendation_reason: String,
}

/// Trait for generating meal recommendations
#[async_trait]
pub trait RecommendationEngineTrait {
    /// Generate personalized meal recommendations from a corpus snapshot
    async fn recommend_meals(
        &self,
        profile: &UserProfile,
        corpus: &[Meal],
        preferences: Option<&PreferenceSignal>,
        num_recommendations: usize,
    ) -> AppResult<RecommendationResponse>;
}

/// Recommendation engine implementation with configurable collaborators
pub struct RecommendationEngine {
    config: EngineConfig,
    rationale: Box<dyn RationaleProvider>,
    translations: Option<Arc<dyn TranslationStore>>,
    sampler_seed: Option<u64>,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationEngine {
    /// Create an engine with the process-wide configuration and the
    /// deterministic rationale composer
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::global().clone())
    }

    /// Create an engine with a custom configuration
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            rationale: Box::new(DeterministicRationale),
            translations: None,
            sampler_seed: None,
        }
    }

    /// Replace the rationale provider (e.g. with an LLM-backed collaborator).
    /// The deterministic composer remains the fallback on provider errors.
    #[must_use]
    pub fn with_rationale_provider(mut self, provider: Box<dyn RationaleProvider>) -> Self {
        self.rationale = provider;
        self
    }

    /// Attach a translation store used to fill English display names
    #[must_use]
    pub fn with_translation_store(mut self, store: Arc<dyn TranslationStore>) -> Self {
        self.translations = Some(store);
        self
    }

    /// Fix the diversity sampler seed for reproducible output
    #[must_use]
    pub fn with_sampler_seed(mut self, seed: u64) -> Self {
        self.sampler_seed = Some(seed);
        self
    }

    fn fill_display_fields(&self, selected: &mut [ScoredMeal]) {
        for entry in selected.iter_mut() {
            if entry.explanation.is_none() {
                entry.explanation = Some(meal_explanation(&entry.meal));
            }
            if entry.meal.name_en.is_none() {
                if let Some(store) = &self.translations {
                    entry.meal.name_en = store.get(&entry.meal.name);
                }
            }
        }
    }
}

#[async_trait]
impl RecommendationEngineTrait for RecommendationEngine {
    async fn recommend_meals(
        &self,
        profile: &UserProfile,
        corpus: &[Meal],
        preferences: Option<&PreferenceSignal>,
        num_recommendations: usize,
    ) -> AppResult<RecommendationResponse> {
        let energy_targets = estimate_energy_targets(profile, &self.config.energy);
        let macro_targets = allocate_macro_targets(
            energy_targets.daily_calorie_target,
            profile.health_goal,
            &self.config.macros,
        );

        let filter = CorpusFilter::new(
            &profile.allergies,
            energy_targets.daily_calorie_target,
            &self.config.filter,
        );
        let outcome = filter.apply(corpus);

        let scorer = MealScorer::new(
            &macro_targets,
            profile.health_goal,
            profile.body_condition.as_deref(),
            preferences,
            &self.config.scoring,
        );
        let scored: Vec<ScoredMeal> = outcome.meals.par_iter().map(|m| scorer.score(m)).collect();

        let mut rng = self
            .sampler_seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        let selection = ranker::select(scored, num_recommendations, &self.config.ranking, &mut rng);

        let mut recommendations = selection.selected;
        self.fill_display_fields(&mut recommendations);

        let context = RationaleContext {
            health_goal: profile.health_goal,
            body_condition: profile.body_condition.as_deref(),
            weight_kg: profile.weight_kg,
            target_weight_kg: profile.target_weight_kg,
            energy: &energy_targets,
            meal_count: recommendations.len(),
        };
        let recommendation_reason = match self.rationale.compose(&context).await {
            Ok(reason) => reason,
            Err(error) => {
                warn!(%error, "rationale provider failed, using deterministic fallback");
                compose_reason(&context)
            }
        };

        let diagnostics = RecommendationDiagnostics {
            total_evaluated: corpus.len(),
            filtered_out: outcome.filtered_out,
            category_filtered: outcome.category_filtered,
            supplement_filtered: outcome.supplement_filtered,
            calorie_filtered: outcome.calorie_filtered,
            unique_candidates: selection.unique_candidates,
        };

        info!(
            user_id = %profile.user_id,
            goal = ?profile.health_goal,
            evaluated = diagnostics.total_evaluated,
            recommended = recommendations.len(),
            "recommendation pipeline complete"
        );

        Ok(RecommendationResponse {
            request_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            recommendations,
            energy_targets,
            macro_targets,
            diagnostics,
            recommendation_reason,
        })
    }
}
