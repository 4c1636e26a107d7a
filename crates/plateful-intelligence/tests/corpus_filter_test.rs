// ABOUTME: Integration tests for the corpus filter through its public interface
// ABOUTME: Allergen synonym expansion, category/supplement exclusion, ceiling, idempotence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateful

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use plateful_core::Meal;
use plateful_intelligence::config::FilterConfig;
use plateful_intelligence::CorpusFilter;

fn meal(name: &str, calories: f64) -> Meal {
    Meal {
        id: name.to_owned(),
        name: name.to_owned(),
        name_en: None,
        brand: None,
        category: None,
        calories: Some(calories),
        protein_g: Some(20.0),
        carbs_g: Some(40.0),
        fat_g: Some(10.0),
        sodium_mg: Some(300.0),
        ingredients: vec![],
        allergen_tags: vec![],
        serving_size: None,
    }
}

fn tagged(name: &str, allergens: &[&str]) -> Meal {
    Meal {
        allergen_tags: allergens.iter().map(|a| (*a).to_owned()).collect(),
        ..meal(name, 400.0)
    }
}

#[test]
fn untagged_meal_named_after_allergen_is_excluded() {
    // "Peanut Butter Sandwich" carries no allergen tag but the name itself
    // must trip the peanut synonym check
    let filter = CorpusFilter::new(&["peanuts".to_owned()], 2000.0, &FilterConfig::default());
    let corpus = vec![meal("Peanut Butter Sandwich", 400.0), meal("Rice Bowl", 400.0)];

    let outcome = filter.apply(&corpus);
    assert_eq!(outcome.filtered_out, 1);
    assert_eq!(outcome.meals.len(), 1);
    assert_eq!(outcome.meals[0].name, "Rice Bowl");
}

#[test]
fn korean_allergy_label_matches_english_tags() {
    // "땅콩" expands through the synonym table and matches the English tag
    let filter = CorpusFilter::new(&["땅콩".to_owned()], 2000.0, &FilterConfig::default());
    let corpus = vec![tagged("Mystery Snack", &["peanut"]), meal("Rice Bowl", 400.0)];

    let outcome = filter.apply(&corpus);
    assert_eq!(outcome.filtered_out, 1);
    assert_eq!(outcome.meals[0].name, "Rice Bowl");
}

#[test]
fn allergen_match_covers_ingredient_lists() {
    let filter = CorpusFilter::new(&["milk".to_owned()], 2000.0, &FilterConfig::default());
    let dairy_dish = Meal {
        ingredients: vec!["감자".to_owned(), "치즈".to_owned()],
        ..meal("Potato Gratin", 450.0)
    };

    let outcome = filter.apply(&[dairy_dish, meal("Rice Bowl", 400.0)]);
    assert_eq!(outcome.filtered_out, 1);
}

#[test]
fn supplement_products_are_excluded_by_name_keyword() {
    let filter = CorpusFilter::new(&[], 2000.0, &FilterConfig::default());
    let corpus = vec![
        meal("프리미엄 콜라겐 3000", 50.0),
        meal("Whey Gold Standard", 120.0),
        meal("Grilled Chicken Salad", 350.0),
    ];

    let outcome = filter.apply(&corpus);
    assert_eq!(outcome.supplement_filtered, 2);
    assert_eq!(outcome.meals.len(), 1);
}

#[test]
fn non_food_categories_are_excluded() {
    let filter = CorpusFilter::new(&[], 2000.0, &FilterConfig::default());
    let formula = Meal {
        category: Some("특수영양식품".to_owned()),
        ..meal("Infant Formula A", 200.0)
    };

    let outcome = filter.apply(&[formula, meal("Rice Bowl", 400.0)]);
    assert_eq!(outcome.category_filtered, 1);
    assert_eq!(outcome.meals.len(), 1);
}

#[test]
fn calorie_ceiling_blocks_single_meal_blowouts() {
    // 40% of a 2000 kcal day is 800 kcal
    let filter = CorpusFilter::new(&[], 2000.0, &FilterConfig::default());
    let outcome = filter.apply(&[meal("Buffet Platter", 900.0), meal("Rice Bowl", 400.0)]);
    assert_eq!(outcome.calorie_filtered, 1);
    assert_eq!(outcome.meals.len(), 1);
}

#[test]
fn filtering_is_idempotent() {
    let filter = CorpusFilter::new(&["fish".to_owned()], 2000.0, &FilterConfig::default());
    let corpus = vec![
        meal("연어 샐러드", 350.0),
        meal("Rice Bowl", 400.0),
        meal("Tuna Melt", 500.0),
        meal("Buffet Platter", 900.0),
    ];

    let first = filter.apply(&corpus);
    let second = filter.apply(&first.meals);
    assert_eq!(second.meals.len(), first.meals.len());
    assert_eq!(second.filtered_out, 0);
    assert_eq!(second.category_filtered, 0);
    assert_eq!(second.supplement_filtered, 0);
    assert_eq!(second.calorie_filtered, 0);
}

#[test]
fn empty_allergy_list_skips_allergen_rule_entirely() {
    let filter = CorpusFilter::new(&[], 2000.0, &FilterConfig::default());
    let outcome = filter.apply(&[tagged("Shrimp Fried Rice", &["shellfish"])]);
    assert_eq!(outcome.filtered_out, 0);
    assert_eq!(outcome.meals.len(), 1);
}
