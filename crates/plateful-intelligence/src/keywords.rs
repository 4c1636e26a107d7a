// ABOUTME: Data-driven bilingual keyword tables for filtering and scoring
// ABOUTME: Allergen synonyms, supplement/category exclusions, ingredient and stop-word lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateful

//! Bilingual keyword tables.
//!
//! The corpus databases mix Korean and English names, categories, and
//! ingredient lists, so every matching table carries variants in both
//! languages. Tables live here as data rather than as inline conditionals so
//! the filter and the condition decision table stay testable in isolation.

/// Canonical allergen categories mapped to their bilingual synonym lists.
///
/// Matching is substring containment against a meal's allergen tags,
/// ingredients, and display names; the name check catches allergens implied
/// by a dish literally named after one (e.g. "Peanut Butter Sandwich" with
/// no tag).
pub const ALLERGEN_SYNONYMS: &[(&str, &[&str])] = &[
    ("peanuts", &["peanut", "peanuts", "땅콩"]),
    (
        "tree nuts",
        &[
            "nuts",
            "almond",
            "walnut",
            "cashew",
            "pistachio",
            "견과류",
            "아몬드",
            "호두",
        ],
    ),
    (
        "milk",
        &[
            "milk", "dairy", "cheese", "butter", "cream", "lactose", "우유", "유제품", "치즈",
        ],
    ),
    ("eggs", &["egg", "eggs", "계란", "달걀"]),
    (
        "fish",
        &["fish", "salmon", "tuna", "cod", "생선", "연어", "참치"],
    ),
    (
        "shellfish",
        &[
            "shellfish", "shrimp", "crab", "lobster", "clam", "갑각류", "새우", "게",
        ],
    ),
    ("soy", &["soy", "soybean", "tofu", "콩", "대두", "두부"]),
    (
        "wheat",
        &["wheat", "gluten", "flour", "밀", "밀가루", "글루텐"],
    ),
    ("sesame", &["sesame", "참깨", "깨"]),
    ("chicken", &["chicken", "닭", "치킨"]),
    ("beef", &["beef", "소고기"]),
    ("pork", &["pork", "돼지고기"]),
];

/// Source-database categories that are not meals (supplements, formula,
/// chocolate products frequently hiding protein bars). Matched exactly.
pub const EXCLUDED_CATEGORIES: &[&str] = &["당류", "특수영양식품", "코코아가공품류 또는 초콜릿류"];

/// Supplement and vitamin keywords matched against meal names.
///
/// Some processed "protein" products are miscategorized upstream, so name
/// matching excludes them regardless of category tag.
pub const SUPPLEMENT_KEYWORDS: &[&str] = &[
    // supplements and vitamins
    "콜라겐",
    "아르기닌",
    "bcaa",
    "글루타민",
    "타우린",
    "비타",
    "프로틴",
    "protein powder",
    "영양제",
    "보충제",
    "캡슐",
    "알약",
    "collagen",
    "arginine",
    "vitamin",
    "supplement",
    "파우더",
    "powder",
    // processed protein / nutrient isolates
    "가수분해",
    "분리대두",
    "추출물",
    "추출액",
    "isolate",
    "hydrolyzed",
    "펩타이드",
    "peptide",
    "아미노산",
    "amino",
    // functional-food staples
    "프로바이오틱스",
    "유산균",
    "효소",
    "enzyme",
    "크레아틴",
    "creatine",
    "글루코사민",
    "루테인",
    "엽산",
    "folic",
    "코엔자임",
    "coenzyme",
    // sports supplements
    "게이너",
    "gainer",
    "웨이",
    "whey",
    "카제인",
    "casein",
    "부스터",
    "booster",
    "워크아웃",
    "workout",
    // diet-aid products
    "다이어트식",
    "저칼로리바",
    "쉐이크믹스",
    "체중조절",
    "meal replacement",
    // medical nutrition
    "환자식",
    "영양액",
    "영양음료",
    "환자용",
];

/// Vegetable, salad, and fruit keywords (renal-friendly bonus)
pub const PRODUCE_KEYWORDS: &[&str] = &["채소", "vegetable", "샐러드", "salad", "과일", "fruit"];

/// Whole-grain keywords (blood-sugar bonus)
pub const WHOLE_GRAIN_KEYWORDS: &[&str] = &[
    "현미",
    "brown rice",
    "통곡물",
    "whole grain",
    "퀴노아",
    "quinoa",
];

/// Named lean-protein ingredients (high-protein request bonus)
pub const LEAN_PROTEIN_KEYWORDS: &[&str] = &[
    "닭", "chicken", "연어", "salmon", "참치", "tuna", "계란", "egg",
];

/// Moderate protein sources favored for fatigue notes
pub const FATIGUE_PROTEIN_KEYWORDS: &[&str] = &["연어", "salmon", "닭", "chicken"];

/// Iron-rich greens favored for fatigue notes
pub const GREENS_KEYWORDS: &[&str] = &["시금치", "spinach", "브로콜리", "broccoli"];

/// Fiber-rich, easy-to-digest ingredients
pub const FIBER_KEYWORDS: &[&str] = &[
    "퀴노아",
    "quinoa",
    "렌틸",
    "lentil",
    "채소",
    "vegetable",
    "샐러드",
    "salad",
];

/// Probiotic ingredients (digestion bonus)
pub const PROBIOTIC_KEYWORDS: &[&str] = &["요거트", "yogurt", "프로바이오틱", "probiotic"];

/// Omega-3 rich fish (muscle recovery bonus)
pub const OMEGA3_KEYWORDS: &[&str] = &["연어", "salmon", "참치", "tuna", "고등어", "mackerel"];

/// Anti-inflammatory ingredients (muscle recovery bonus)
pub const ANTI_INFLAMMATORY_KEYWORDS: &[&str] =
    &["베리", "berry", "견과", "nuts", "올리브", "olive"];

/// Complex-carbohydrate ingredients (stress bonus)
pub const COMPLEX_CARB_KEYWORDS: &[&str] = &[
    "퀴노아",
    "quinoa",
    "현미",
    "brown rice",
    "통곡물",
    "whole grain",
];

/// Calming ingredients (stress bonus)
pub const CALMING_KEYWORDS: &[&str] = &["연어", "salmon", "아보카도", "avocado"];

/// Spicy-food keywords, both for detecting the request and the meal
pub const SPICY_KEYWORDS: &[&str] = &["매운", "spicy", "고추", "불닭"];

/// Words from body-condition notes that never indicate a food preference
pub const STOP_WORDS: &[&str] = &[
    "먹고",
    "싶어",
    "싶다",
    "원해",
    "want",
    "need",
    "like",
    "would",
    "could",
    "today",
    "tonight",
    "오늘",
    "내일",
    "그리고",
    "and",
    "or",
    "또는",
    "아니면",
    "먹을",
    "먹을래",
];

/// True when any keyword in `table` is a substring of `haystack`.
///
/// `haystack` must already be lower-cased; table entries are stored
/// lower-cased.
#[must_use]
pub fn any_keyword_in(table: &[&str], haystack: &str) -> bool {
    table.iter().any(|keyword| haystack.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allergen_table_covers_both_languages() {
        let (_, peanut_variants) = ALLERGEN_SYNONYMS
            .iter()
            .find(|(category, _)| *category == "peanuts")
            .copied()
            .unwrap();
        assert!(peanut_variants.contains(&"peanut"));
        assert!(peanut_variants.contains(&"땅콩"));
    }

    #[test]
    fn keyword_containment_is_substring_based() {
        assert!(any_keyword_in(SUPPLEMENT_KEYWORDS, "골드 콜라겐 3000"));
        assert!(any_keyword_in(SPICY_KEYWORDS, "불닭볶음면"));
        assert!(!any_keyword_in(PRODUCE_KEYWORDS, "치킨 스테이크"));
    }
}
