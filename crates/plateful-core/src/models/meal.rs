// ABOUTME: Meal record model consumed by the recommendation engine
// ABOUTME: Read-only corpus entries with zero-coercing macro accessors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateful

use serde::{Deserialize, Serialize};

/// A candidate meal from the corpus snapshot.
///
/// Meals are read-only inputs loaded upstream (database, CSV import, partner
/// feeds). The engine never mutates them; scoring annotates copies. Macro
/// fields are optional because upstream records are frequently incomplete —
/// the zero-coercing accessors below keep such records scorable instead of
/// failing the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    /// Opaque identifier (also used as a stable reference in responses)
    pub id: String,
    /// Primary display name
    pub name: String,
    /// English display name, if a translation is known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,
    /// Brand name (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Category tag from the source database
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Calories per serving
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    /// Protein per serving (grams)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein_g: Option<f64>,
    /// Carbohydrates per serving (grams)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbs_g: Option<f64>,
    /// Fat per serving (grams)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat_g: Option<f64>,
    /// Sodium per serving (milligrams)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sodium_mg: Option<f64>,
    /// Free-form ingredient list
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Explicit allergen tags from the source database
    #[serde(default)]
    pub allergen_tags: Vec<String>,
    /// Serving size description ("1팩(250g)", "200ml", ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serving_size: Option<String>,
}

impl Meal {
    /// Calories, with missing data coerced to zero
    #[must_use]
    pub fn calories(&self) -> f64 {
        self.calories.unwrap_or(0.0)
    }

    /// Protein grams, with missing data coerced to zero
    #[must_use]
    pub fn protein_g(&self) -> f64 {
        self.protein_g.unwrap_or(0.0)
    }

    /// Carbohydrate grams, with missing data coerced to zero
    #[must_use]
    pub fn carbs_g(&self) -> f64 {
        self.carbs_g.unwrap_or(0.0)
    }

    /// Fat grams, with missing data coerced to zero
    #[must_use]
    pub fn fat_g(&self) -> f64 {
        self.fat_g.unwrap_or(0.0)
    }

    /// Sodium milligrams, with missing data coerced to zero
    #[must_use]
    pub fn sodium_mg(&self) -> f64 {
        self.sodium_mg.unwrap_or(0.0)
    }

    /// Display name normalized for deduplication (lower-cased, trimmed)
    #[must_use]
    pub fn normalized_name(&self) -> String {
        self.name.trim().to_lowercase()
    }

    /// Record-level sanity check used by corpus loaders before the engine runs.
    ///
    /// A record is implausible when it claims calories but carries no macro
    /// data at all, or when macro-derived calories (Atwater factors: 4/4/9
    /// kcal per gram) disagree with stated calories by more than a factor of
    /// two in either direction. The corpus filter does not enforce this —
    /// implausible records stay scorable — but loaders drop them up front.
    #[must_use]
    pub fn is_plausible(&self) -> bool {
        let calories = self.calories();
        if calories <= 0.0 {
            return true;
        }

        let macro_total = self.protein_g() + self.carbs_g() + self.fat_g();
        if macro_total == 0.0 {
            return false;
        }

        let derived = self
            .fat_g()
            .mul_add(9.0, self.protein_g().mul_add(4.0, self.carbs_g() * 4.0));
        if derived <= 0.0 {
            return false;
        }

        let ratio = derived / calories;
        (0.5..=2.0).contains(&ratio)
    }
}
