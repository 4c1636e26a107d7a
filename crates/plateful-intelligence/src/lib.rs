// ABOUTME: Meal recommendation scoring engine: deterministic pipeline from profile to ranked meals
// ABOUTME: Energy/macro targets, corpus filter, rule-driven scorer, ranker/sampler, rationale
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateful

#![deny(unsafe_code)]

//! # Plateful Intelligence
//!
//! The recommendation scoring engine: a pure, synchronous pipeline that turns
//! a [`plateful_core::UserProfile`] plus a candidate meal corpus into a
//! ranked, deduplicated, optionally diversity-sampled list of meals with
//! per-meal rationale.
//!
//! Data flows strictly forward:
//!
//! ```text
//! Profile -> energy targets -> macro targets
//! Targets + Corpus -> corpus filter -> filtered corpus
//! Filtered corpus + Targets + PreferenceSignal -> scorer -> scored corpus
//! Scored corpus -> ranker/sampler -> ranked list -> rationale -> response
//! ```
//!
//! Each invocation is independent and may run concurrently with others; the
//! only permitted non-determinism is the diversity sampler, which draws from
//! an injectable seed so tests can assert exact output.

/// Threshold and bonus constants for the nutrition rule tables
pub mod nutrition_constants;

/// Bilingual keyword tables (allergens, supplements, ingredients, stop words)
pub mod keywords;

/// Engine configuration with defaults, a process-wide global, and env overrides
pub mod config;

/// BMR/TDEE estimation and macro target allocation
pub mod nutrition_calculator;

/// Hard-constraint corpus filtering with audit counters
pub mod corpus_filter;

/// Priority decision table for free-text body-condition notes
pub mod condition_rules;

/// Composite meal scoring (calorie fit, macro similarity, bonuses, overrides)
pub mod meal_scorer;

/// Ranking, name deduplication, and diversity sampling
pub mod ranker;

/// Deterministic bilingual rationale composition and the pluggable provider seam
pub mod rationale;

/// Injected key-value contract for meal-name translations
pub mod translation;

/// The orchestrating recommendation engine
pub mod recommendation_engine;

pub use config::{ConfigError, EngineConfig, GoalAdjustment, SelectionPolicy};
pub use corpus_filter::{CorpusFilter, FilterOutcome};
pub use meal_scorer::{MealScorer, ScoreBreakdown, ScoredMeal};
pub use nutrition_calculator::{EnergyTargets, MacroRatio, MacroTargets};
pub use rationale::{DeterministicRationale, RationaleContext, RationaleProvider};
pub use recommendation_engine::{
    RecommendationDiagnostics, RecommendationEngine, RecommendationEngineTrait,
    RecommendationResponse,
};
pub use translation::{InMemoryTranslationStore, TranslationStore};
