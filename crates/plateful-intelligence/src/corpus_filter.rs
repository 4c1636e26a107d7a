// ABOUTME: Hard-constraint corpus filtering: allergens, non-food categories, calorie ceiling
// ABOUTME: Pure set subtraction with audit counters; meals are never mutated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateful

//! Corpus Filter
//!
//! Removes meals that violate hard constraints before scoring. Rules apply
//! per meal and short-circuit on the first match:
//!
//! 1. allergen match (synonym-expanded, checked against tags, ingredients,
//!    and display names)
//! 2. non-food category (supplements, formula, chocolate products)
//! 3. supplement keyword in the meal name (catches miscategorized products)
//! 4. calorie ceiling (single meals above a fraction of the daily target)
//!
//! Filtering only shrinks the candidate set; running the filter on its own
//! output removes nothing further.

use crate::config::FilterConfig;
use crate::keywords::{self, ALLERGEN_SYNONYMS, EXCLUDED_CATEGORIES, SUPPLEMENT_KEYWORDS};
use plateful_core::Meal;
use tracing::debug;

/// Result of one filtering pass, with audit counters for the caller
#[derive(Debug, Clone)]
pub struct FilterOutcome {
    /// Meals that survived every rule
    pub meals: Vec<Meal>,
    /// Meals removed by the allergen rule
    pub filtered_out: usize,
    /// Meals removed by the category rule
    pub category_filtered: usize,
    /// Meals removed by the supplement keyword rule
    pub supplement_filtered: usize,
    /// Meals removed by the calorie ceiling
    pub calorie_filtered: usize,
}

/// Corpus filter bound to one user's constraints
#[derive(Debug, Clone)]
pub struct CorpusFilter {
    expanded_allergens: Vec<String>,
    calorie_ceiling: f64,
}

impl CorpusFilter {
    /// Build a filter for the given allergy list and daily calorie target.
    ///
    /// Each declared allergen is expanded through the bilingual synonym
    /// table; unrecognized terms are kept verbatim so novel allergens still
    /// match by substring.
    #[must_use]
    pub fn new(allergies: &[String], daily_calorie_target: f64, config: &FilterConfig) -> Self {
        let mut expanded = Vec::new();
        for raw in allergies {
            let term = raw.trim().to_lowercase();
            if term.is_empty() {
                continue;
            }
            let synonyms = ALLERGEN_SYNONYMS
                .iter()
                .find(|(category, variants)| *category == term || variants.contains(&term.as_str()));
            match synonyms {
                Some((category, variants)) => {
                    expanded.push((*category).to_owned());
                    expanded.extend(variants.iter().map(|v| (*v).to_owned()));
                }
                None => expanded.push(term),
            }
        }
        expanded.sort_unstable();
        expanded.dedup();

        Self {
            expanded_allergens: expanded,
            calorie_ceiling: daily_calorie_target * config.calorie_ceiling_fraction,
        }
    }

    /// Apply every rule to the corpus, returning survivors and counters
    #[must_use]
    pub fn apply(&self, corpus: &[Meal]) -> FilterOutcome {
        let mut outcome = FilterOutcome {
            meals: Vec::with_capacity(corpus.len()),
            filtered_out: 0,
            category_filtered: 0,
            supplement_filtered: 0,
            calorie_filtered: 0,
        };

        for meal in corpus {
            if self.matches_allergen(meal) {
                outcome.filtered_out += 1;
                continue;
            }
            if Self::is_excluded_category(meal) {
                outcome.category_filtered += 1;
                continue;
            }
            if Self::is_supplement(meal) {
                outcome.supplement_filtered += 1;
                continue;
            }
            if self.exceeds_calorie_ceiling(meal) {
                outcome.calorie_filtered += 1;
                continue;
            }
            outcome.meals.push(meal.clone());
        }

        debug!(
            total = corpus.len(),
            kept = outcome.meals.len(),
            allergen = outcome.filtered_out,
            category = outcome.category_filtered,
            supplement = outcome.supplement_filtered,
            calorie = outcome.calorie_filtered,
            "corpus filtered"
        );

        outcome
    }

    /// True when any expanded allergen keyword appears in the meal's tags,
    /// ingredients, or display names. The name check catches allergens that
    /// are not tagged but implied by the dish name.
    #[must_use]
    pub fn matches_allergen(&self, meal: &Meal) -> bool {
        if self.expanded_allergens.is_empty() {
            return false;
        }

        let mut haystacks: Vec<String> = Vec::with_capacity(4);
        haystacks.push(meal.name.to_lowercase());
        if let Some(name_en) = &meal.name_en {
            haystacks.push(name_en.to_lowercase());
        }
        haystacks.push(meal.allergen_tags.join(" ").to_lowercase());
        haystacks.push(meal.ingredients.join(" ").to_lowercase());

        self.expanded_allergens
            .iter()
            .any(|keyword| haystacks.iter().any(|haystack| haystack.contains(keyword)))
    }

    fn is_excluded_category(meal: &Meal) -> bool {
        meal.category
            .as_deref()
            .is_some_and(|category| EXCLUDED_CATEGORIES.contains(&category))
    }

    fn is_supplement(meal: &Meal) -> bool {
        keywords::any_keyword_in(SUPPLEMENT_KEYWORDS, &meal.name.to_lowercase())
    }

    fn exceeds_calorie_ceiling(&self, meal: &Meal) -> bool {
        self.calorie_ceiling > 0.0 && meal.calories() > self.calorie_ceiling
    }
}
