//! Intent classification and soft-criteria extraction
//!
//! `classify` is a pure function over the raw query text. Intent is picked by
//! keyword precedence; criteria are additive and stay unset when no signal is
//! present.

use serde::{Deserialize, Serialize};

/// Coarse classification of what a query is asking for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Comparison,
    Recommendation,
    Specs,
    General,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Comparison => "comparison",
            Intent::Recommendation => "recommendation",
            Intent::Specs => "specs",
            Intent::General => "general",
        }
    }
}

/// Attribute dimension a query wants weighted most heavily
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Focus {
    Battery,
    Camera,
    Display,
}

impl Focus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Focus::Battery => "battery",
            Focus::Camera => "camera",
            Focus::Display => "display",
        }
    }
}

/// Soft constraints extracted from a query. Absent signals leave fields
/// unset; there are no defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CriteriaSet {
    pub price_max: Option<f64>,
    pub focus: Option<Focus>,
}

const COMPARISON_KEYWORDS: [&str; 5] = ["compare", "versus", "vs", "difference", "better"];
const RECOMMENDATION_KEYWORDS: [&str; 5] = ["best", "recommend", "which", "should i", "top"];
const SPECS_KEYWORDS: [&str; 6] = ["spec", "feature", "detail", "what is", "what are", "tell me about"];

/// Classify a query into an intent and criteria set
pub fn classify(text: &str) -> (Intent, CriteriaSet) {
    let lower = text.to_lowercase();

    let intent = if COMPARISON_KEYWORDS.iter().any(|k| lower.contains(k)) {
        Intent::Comparison
    } else if RECOMMENDATION_KEYWORDS.iter().any(|k| lower.contains(k)) {
        Intent::Recommendation
    } else if SPECS_KEYWORDS.iter().any(|k| lower.contains(k)) {
        Intent::Specs
    } else {
        Intent::General
    };

    let mut criteria = CriteriaSet::default();

    // "under $N" first, "below $N" second; a later match overwrites, so the
    // extraction order is part of the contract
    if let Some(price) = price_after_keyword(&lower, "under") {
        criteria.price_max = Some(price);
    }
    if let Some(price) = price_after_keyword(&lower, "below") {
        criteria.price_max = Some(price);
    }

    // Focus groups checked in fixed order; the last matching group wins
    // (display over camera over battery). Compatibility behavior, kept as-is.
    if lower.contains("battery") || lower.contains("long lasting") {
        criteria.focus = Some(Focus::Battery);
    }
    if lower.contains("camera") || lower.contains("photo") {
        criteria.focus = Some(Focus::Camera);
    }
    if lower.contains("display") || lower.contains("screen") {
        criteria.focus = Some(Focus::Display);
    }

    (intent, criteria)
}

/// Find `<keyword> [$]N` in lowercased text and parse N. The keyword must
/// start at a word boundary; the first occurrence with a number wins.
fn price_after_keyword(lower: &str, keyword: &str) -> Option<f64> {
    let bytes = lower.as_bytes();
    let mut search_from = 0;

    while let Some(rel) = lower[search_from..].find(keyword) {
        let at = search_from + rel;
        let boundary = at == 0 || !bytes[at - 1].is_ascii_alphanumeric();
        if boundary {
            let mut i = at + keyword.len();
            while i < bytes.len() && bytes[i] == b' ' {
                i += 1;
            }
            if i < bytes.len() && bytes[i] == b'$' {
                i += 1;
                while i < bytes.len() && bytes[i] == b' ' {
                    i += 1;
                }
            }
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            if i > start {
                if let Ok(value) = lower[start..i].parse::<f64>() {
                    return Some(value);
                }
            }
        }
        search_from = at + keyword.len();
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparison_intent() {
        let (intent, _) = classify("Compare Galaxy S23 Ultra and S22 Ultra");
        assert_eq!(intent, Intent::Comparison);

        let (intent, _) = classify("is the S24 better than the S23?");
        assert_eq!(intent, Intent::Comparison);
    }

    #[test]
    fn test_recommendation_intent() {
        let (intent, _) = classify("which phone should I buy");
        assert_eq!(intent, Intent::Recommendation);
    }

    #[test]
    fn test_specs_intent() {
        let (intent, _) = classify("tell me about the Galaxy A54");
        assert_eq!(intent, Intent::Specs);
    }

    #[test]
    fn test_general_intent() {
        let (intent, _) = classify("Galaxy S24 Ultra");
        assert_eq!(intent, Intent::General);
    }

    #[test]
    fn test_comparison_precedes_recommendation() {
        // "which" and "better" both appear; comparison keywords win
        let (intent, _) = classify("which one is better, S24 or S23?");
        assert_eq!(intent, Intent::Comparison);
    }

    #[test]
    fn test_price_under_dollar() {
        let (_, criteria) = classify("best phone under $1000");
        assert_eq!(criteria.price_max, Some(1000.0));
    }

    #[test]
    fn test_price_below_without_dollar() {
        let (_, criteria) = classify("anything below 500 worth it?");
        assert_eq!(criteria.price_max, Some(500.0));
    }

    #[test]
    fn test_price_below_overwrites_under() {
        let (_, criteria) = classify("under $800 or below $600");
        assert_eq!(criteria.price_max, Some(600.0));
    }

    #[test]
    fn test_price_absent_stays_unset() {
        let (_, criteria) = classify("best camera phone");
        assert_eq!(criteria.price_max, None);
    }

    #[test]
    fn test_price_keyword_needs_word_boundary() {
        let (_, criteria) = classify("thunder 500 review");
        assert_eq!(criteria.price_max, None);
    }

    #[test]
    fn test_focus_groups() {
        let (_, c) = classify("longest battery life");
        assert_eq!(c.focus, Some(Focus::Battery));

        let (_, c) = classify("best for photography");
        assert_eq!(c.focus, Some(Focus::Camera));

        let (_, c) = classify("nicest screen");
        assert_eq!(c.focus, Some(Focus::Display));
    }

    #[test]
    fn test_focus_last_group_wins() {
        // battery and display both mentioned: display group is checked last
        let (_, c) = classify("good battery and a great screen");
        assert_eq!(c.focus, Some(Focus::Display));

        let (_, c) = classify("camera quality and battery life");
        assert_eq!(c.focus, Some(Focus::Camera));
    }

    #[test]
    fn test_focus_absent_stays_unset() {
        let (_, c) = classify("what are the specs of the S24");
        assert_eq!(c.focus, None);
    }

    #[test]
    fn test_round_trip_recommendation_query() {
        let (intent, criteria) = classify("which Samsung phone has the best battery under $1000");
        assert_eq!(intent, Intent::Recommendation);
        assert_eq!(criteria.focus, Some(Focus::Battery));
        assert_eq!(criteria.price_max, Some(1000.0));
    }
}
