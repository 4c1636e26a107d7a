// ABOUTME: Structured food preference signal extracted by an external collaborator
// ABOUTME: Opaque liked/disliked terms and free-text summaries for string matching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateful

use serde::{Deserialize, Serialize};

/// Food preferences extracted from free text by an external
/// language-model or rule-based collaborator.
///
/// The engine treats this as opaque string-matching input and never inspects
/// its provenance. An absent signal is equivalent to `Default::default()`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreferenceSignal {
    /// Foods the user likes ("닭가슴살", "salmon", ...)
    #[serde(default)]
    pub liked_foods: Vec<String>,
    /// Foods the user dislikes
    #[serde(default)]
    pub disliked_foods: Vec<String>,
    /// Free-text health notes carried alongside the extraction
    #[serde(default)]
    pub health_notes: String,
    /// One-line dietary summary produced by the extractor
    #[serde(default)]
    pub dietary_summary: String,
}

impl PreferenceSignal {
    /// True when the signal carries no usable matching terms
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.liked_foods.is_empty() && self.disliked_foods.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::PreferenceSignal;

    #[test]
    fn default_signal_is_empty() {
        assert!(PreferenceSignal::default().is_empty());
    }

    #[test]
    fn signal_with_terms_is_not_empty() {
        let signal = PreferenceSignal {
            disliked_foods: vec!["broccoli".to_owned()],
            ..PreferenceSignal::default()
        };
        assert!(!signal.is_empty());
    }
}
