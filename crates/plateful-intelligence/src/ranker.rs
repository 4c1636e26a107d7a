// ABOUTME: Ranking, normalized-name deduplication, and top-N/top-K-sample selection
// ABOUTME: The only permitted non-determinism, behind an injectable random source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateful

//! Ranker & Diversity Sampler
//!
//! Sorts scored meals descending, deduplicates by normalized display name
//! (keeping the highest-scoring occurrence), and selects the requested
//! count. The strict top-N slice is canonical; the top-K sampling policy
//! trades strict optimality for variety across repeated identical requests
//! and draws from an explicitly injected random source so tests can fix a
//! seed and assert exact output.

use crate::config::{RankingConfig, SelectionPolicy};
use crate::meal_scorer::ScoredMeal;
use rand::seq::index;
use rand::Rng;
use std::collections::HashSet;
use tracing::debug;

/// Result of ranking, deduplication, and selection
#[derive(Debug, Clone)]
pub struct RankedSelection {
    /// Selected meals, highest score first
    pub selected: Vec<ScoredMeal>,
    /// Unique candidates available before truncation
    pub unique_candidates: usize,
}

/// Sort descending by final score with a deterministic tie-break on
/// normalized name, then drop duplicate names keeping the first (and
/// therefore highest-scoring) occurrence.
#[must_use]
pub fn rank_and_dedup(mut scored: Vec<ScoredMeal>) -> Vec<ScoredMeal> {
    scored.sort_by(|a, b| {
        b.final_score
            .total_cmp(&a.final_score)
            .then_with(|| a.meal.normalized_name().cmp(&b.meal.normalized_name()))
    });

    let mut seen = HashSet::new();
    scored.retain(|entry| seen.insert(entry.meal.normalized_name()));
    scored
}

/// Rank, deduplicate, and select `count` meals under the configured policy.
///
/// `StrictTopN` takes the highest-scoring slice. `TopKSample` draws `count`
/// meals uniformly, without replacement, from the top `top_k_pool` unique
/// meals, then re-sorts the draw by score for presentation. Both policies
/// return everything available when the pool is smaller than `count`.
#[must_use]
pub fn select<R: Rng + ?Sized>(
    scored: Vec<ScoredMeal>,
    count: usize,
    config: &RankingConfig,
    rng: &mut R,
) -> RankedSelection {
    let unique = rank_and_dedup(scored);
    let unique_candidates = unique.len();

    let selected = match config.policy {
        SelectionPolicy::StrictTopN => {
            let mut top = unique;
            top.truncate(count);
            top
        }
        SelectionPolicy::TopKSample => sample_from_top_k(unique, count, config.top_k_pool, rng),
    };

    debug!(
        unique_candidates,
        selected = selected.len(),
        policy = ?config.policy,
        "ranking complete"
    );

    RankedSelection {
        selected,
        unique_candidates,
    }
}

fn sample_from_top_k<R: Rng + ?Sized>(
    unique: Vec<ScoredMeal>,
    count: usize,
    top_k_pool: usize,
    rng: &mut R,
) -> Vec<ScoredMeal> {
    let mut pool = unique;
    pool.truncate(top_k_pool.max(count));

    if pool.len() <= count {
        return pool;
    }

    let chosen = index::sample(rng, pool.len(), count);
    let mut picks: Vec<ScoredMeal> = Vec::with_capacity(count);
    let mut keep: Vec<bool> = vec![false; pool.len()];
    for idx in chosen.iter() {
        keep[idx] = true;
    }
    for (idx, entry) in pool.into_iter().enumerate() {
        if keep[idx] {
            picks.push(entry);
        }
    }
    // pool order is already score-descending, so picks stay sorted
    picks
}
