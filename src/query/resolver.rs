//! Fuzzy entity resolution of model names mentioned in a query
//!
//! Each known name is scored independently against the query through four
//! rules, strongest first; the first rule that produces a match decides that
//! name's confidence. Matches are then merged by confidence with a high bar
//! (>= 80) and a weak-fallback bar (>= 30).
//!
//! The awkward part this exists for: "Galaxy S24" must never swallow a query
//! that actually says "Galaxy S24 Ultra", and vice versa a query saying just
//! "S24" may still weakly suggest the Ultra when no base model exists.

use std::collections::HashSet;

use crate::query::lexer::{
    is_suffix_token, normalize_suffix, tokenize_normalized, FoldRef, ModelRef,
};

/// Confidence for a verbatim full-name mention
const CONFIDENCE_FULL_NAME: u8 = 100;
/// Confidence for a mention with the "galaxy" prefix dropped
const CONFIDENCE_CORE_NAME: u8 = 95;
/// Confidence for a series+suffix or fold/flip structural match
const CONFIDENCE_SERIES: u8 = 90;
/// Weak fold/flip match where the variant is ambiguous
const CONFIDENCE_FOLD_AMBIGUOUS: u8 = 40;
/// Weak series match where the query omitted the candidate's suffix
const CONFIDENCE_SUFFIX_FALLBACK: u8 = 30;

/// Threshold for the primary result set
const HIGH_CONFIDENCE: u8 = 80;
/// Threshold for the weak fallback set
const LOW_CONFIDENCE: u8 = 30;

/// A scored resolution candidate; transient, never persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCandidate {
    pub model_name: String,
    pub confidence: u8,
}

/// Resolve model names mentioned in `text` against the known catalog names.
///
/// Returns names ordered by confidence (descending, ties in catalog order),
/// deduplicated. Only matches with confidence >= 80 are returned; when none
/// clear that bar, matches >= 30 are returned instead. Empty output means "no
/// entities recognized" and is not an error.
pub fn resolve_names(text: &str, known_names: &[String]) -> Vec<String> {
    let candidates = match_candidates(text, known_names);
    select(candidates)
}

/// Run the matching rules over every known name, unmerged
pub fn match_candidates(text: &str, known_names: &[String]) -> Vec<MatchCandidate> {
    let query_tokens = tokenize_normalized(text);
    let query_models = ModelRef::scan_query(&query_tokens);
    let query_folds = FoldRef::scan_query(&query_tokens);

    let mut matched = Vec::new();

    for name in known_names {
        let name_tokens = tokenize_normalized(name);
        let core_tokens: Vec<String> = name_tokens
            .iter()
            .filter(|t| t.as_str() != "galaxy")
            .cloned()
            .collect();

        // Rule 1: verbatim full name
        if sequence_matches(&query_tokens, &name_tokens) {
            matched.push(MatchCandidate {
                model_name: name.clone(),
                confidence: CONFIDENCE_FULL_NAME,
            });
            continue;
        }

        // Rule 2: core name with the "galaxy" prefix dropped
        if sequence_matches(&query_tokens, &core_tokens) {
            matched.push(MatchCandidate {
                model_name: name.clone(),
                confidence: CONFIDENCE_CORE_NAME,
            });
            continue;
        }

        // Rule 3: series model number + trim suffix
        if let Some(model) = ModelRef::parse_name(&core_tokens) {
            if let Some(confidence) = match_series(&model, &query_models) {
                matched.push(MatchCandidate {
                    model_name: name.clone(),
                    confidence,
                });
            }
            continue;
        }

        // Rule 4: Z Fold / Z Flip family
        if let Some(fold) = FoldRef::parse_name(&core_tokens) {
            if let Some(confidence) = match_fold(&fold, &query_folds) {
                matched.push(MatchCandidate {
                    model_name: name.clone(),
                    confidence,
                });
            }
        }
    }

    matched
}

/// Series rule: walk the query's model references in text order. An exact
/// suffix match (including both absent) wins at 90 and stops; a query
/// reference without a suffix against a suffixed candidate records the weak
/// 30 and stops; a query suffix the candidate lacks never matches and the
/// scan continues.
fn match_series(candidate: &ModelRef, query_models: &[ModelRef]) -> Option<u8> {
    for query_ref in query_models.iter().filter(|m| m.num == candidate.num) {
        if query_ref.suffix == candidate.suffix {
            return Some(CONFIDENCE_SERIES);
        }
        if query_ref.suffix.is_none() && candidate.suffix.is_some() {
            return Some(CONFIDENCE_SUFFIX_FALLBACK);
        }
    }
    None
}

/// Fold rule: only the first query mention of the candidate's series counts.
/// Generation must agree; an exact variant match scores 90, a query that
/// omits the variant scores the ambiguous 40, and a variant the candidate
/// lacks never matches.
fn match_fold(candidate: &FoldRef, query_folds: &[FoldRef]) -> Option<u8> {
    let query_ref = query_folds.iter().find(|f| f.series == candidate.series)?;

    if query_ref.gen != candidate.gen {
        return None;
    }
    if query_ref.variant == candidate.variant {
        return Some(CONFIDENCE_SERIES);
    }
    if query_ref.variant.is_none() {
        return Some(CONFIDENCE_FOLD_AMBIGUOUS);
    }
    None
}

/// True when `name` appears in `query` as a whole contiguous token sequence
/// that is not immediately followed by a trim suffix the name itself lacks.
/// That guard keeps a base model from matching a query naming its variant.
fn sequence_matches(query: &[String], name: &[String]) -> bool {
    if name.is_empty() || query.len() < name.len() {
        return false;
    }

    'position: for start in 0..=(query.len() - name.len()) {
        for (offset, name_token) in name.iter().enumerate() {
            if &query[start + offset] != name_token {
                continue 'position;
            }
        }

        if let Some(next) = query.get(start + name.len()) {
            if is_suffix_token(next) {
                let suffix = normalize_suffix(next);
                let name_has_it = name.iter().any(|t| normalize_suffix(t) == suffix);
                if !name_has_it {
                    continue 'position;
                }
            }
        }
        return true;
    }

    false
}

/// Merge scored candidates: stable confidence-descending sort, then the
/// high-confidence set deduplicated by name, falling back to the weak set
/// only when the high set is empty.
fn select(mut candidates: Vec<MatchCandidate>) -> Vec<String> {
    candidates.sort_by(|a, b| b.confidence.cmp(&a.confidence));

    let mut seen = HashSet::new();
    let mut result: Vec<String> = candidates
        .iter()
        .filter(|c| c.confidence >= HIGH_CONFIDENCE)
        .filter(|c| seen.insert(c.model_name.clone()))
        .map(|c| c.model_name.clone())
        .collect();

    if result.is_empty() {
        seen.clear();
        result = candidates
            .iter()
            .filter(|c| c.confidence >= LOW_CONFIDENCE)
            .filter(|c| seen.insert(c.model_name.clone()))
            .map(|c| c.model_name.clone())
            .collect();
    }

    result
}
