//! Tokenizer and name-shape pattern rules
//!
//! Two shapes cover the whole catalog naming scheme:
//! - [`ModelRef`]: `<letter><number>[ultra|plus|+|fe]`, e.g. "s24 ultra",
//!   "a54", "s24+"
//! - [`FoldRef`]: `z fold|flip [generation] [fe|special]`, e.g. "z fold 6",
//!   "z flip 5 fe"
//!
//! Both parse from candidate names (anchored, whole-name) and from query
//! token streams (scanning). The resolver composes these rules; nothing here
//! looks at the catalog.

/// Variant suffix tokens that distinguish trim levels of the same series
const SUFFIX_TOKENS: [&str; 4] = ["ultra", "plus", "+", "fe"];

/// Series letters that lead a model number token
const SERIES_LETTERS: [char; 4] = ['s', 'a', 'z', 'n'];

/// True when the token names a trim-level suffix
pub fn is_suffix_token(token: &str) -> bool {
    SUFFIX_TOKENS.contains(&token)
}

/// Canonical suffix spelling ("+" folds into "plus")
pub fn normalize_suffix(token: &str) -> &str {
    if token == "+" {
        "plus"
    } else {
        token
    }
}

/// Lowercase and split into tokens of alphanumerics plus `+`; every other
/// character separates tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut tokens = Vec::new();
    let mut current = String::new();

    for ch in lower.chars() {
        if ch.is_alphanumeric() || ch == '+' {
            current.push(ch);
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

/// Tokenize with the "samsung" marketing token dropped. Queries and catalog
/// names both pass through this so either side may carry the brand prefix
/// without affecting matching.
pub fn tokenize_normalized(text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|t| t != "samsung")
        .collect()
}

/// A series model reference: model number plus optional trim suffix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRef {
    /// Series letter + number, e.g. "s24"
    pub num: String,
    /// Normalized suffix ("ultra", "plus", "fe"), if present
    pub suffix: Option<String>,
}

impl ModelRef {
    /// Parse a single token of the form `<letter><digits>[suffix]`, where the
    /// suffix may be glued on ("s24ultra", "s24+").
    fn from_token(token: &str) -> Option<(String, Option<String>)> {
        let mut chars = token.chars();
        let first = chars.next()?;
        if !SERIES_LETTERS.contains(&first) {
            return None;
        }

        let rest: &str = &token[first.len_utf8()..];
        let digit_end = rest
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        if digit_end == 0 {
            return None;
        }

        let num = format!("{}{}", first, &rest[..digit_end]);
        let tail = &rest[digit_end..];
        if tail.is_empty() {
            Some((num, None))
        } else if is_suffix_token(tail) {
            Some((num, Some(normalize_suffix(tail).to_string())))
        } else {
            None
        }
    }

    /// Parse a whole candidate core name (tokens after "galaxy" is stripped).
    /// Anchored: the name must be exactly the model shape.
    pub fn parse_name(tokens: &[String]) -> Option<ModelRef> {
        match tokens {
            [model] => {
                let (num, suffix) = Self::from_token(model)?;
                Some(ModelRef { num, suffix })
            }
            [model, suffix_tok] if is_suffix_token(suffix_tok) => {
                let (num, glued) = Self::from_token(model)?;
                if glued.is_some() {
                    return None;
                }
                Some(ModelRef {
                    num,
                    suffix: Some(normalize_suffix(suffix_tok).to_string()),
                })
            }
            _ => None,
        }
    }

    /// Scan a query token stream for every model reference, in text order.
    /// A standalone suffix token immediately after a model token attaches to
    /// it.
    pub fn scan_query(tokens: &[String]) -> Vec<ModelRef> {
        let mut refs = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            if let Some((num, glued)) = Self::from_token(&tokens[i]) {
                let suffix = match glued {
                    Some(s) => Some(s),
                    None => match tokens.get(i + 1) {
                        Some(next) if is_suffix_token(next) => {
                            i += 1;
                            Some(normalize_suffix(next).to_string())
                        }
                        _ => None,
                    },
                };
                refs.push(ModelRef { num, suffix });
            }
            i += 1;
        }

        refs
    }
}

/// A foldable-series reference: Z Fold / Z Flip family
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldRef {
    /// "fold" or "flip"
    pub series: String,
    /// Numeric generation, kept as text ("6"); absent on unnumbered names
    pub gen: Option<String>,
    /// "fe" or "special" variant tag
    pub variant: Option<String>,
}

impl FoldRef {
    /// Try to parse a fold reference starting at `tokens[start]`. Returns the
    /// reference and the number of tokens consumed.
    fn parse_at(tokens: &[String], start: usize) -> Option<(FoldRef, usize)> {
        let tok = tokens.get(start)?;
        let mut consumed = 1;

        // Either a lone "z" followed by the series token, or "zfold…"/"zflip…"
        let series_part: String = if tok == "z" {
            let next = tokens.get(start + 1)?;
            consumed += 1;
            next.clone()
        } else if let Some(rest) = tok.strip_prefix('z') {
            if rest.starts_with("fold") || rest.starts_with("flip") {
                rest.to_string()
            } else {
                return None;
            }
        } else {
            return None;
        };

        let (series, attached) = if let Some(rest) = series_part.strip_prefix("fold") {
            ("fold".to_string(), rest.to_string())
        } else if let Some(rest) = series_part.strip_prefix("flip") {
            ("flip".to_string(), rest.to_string())
        } else {
            return None;
        };

        // Generation digits may be glued to the series or stand alone
        let gen = if !attached.is_empty() {
            if !attached.chars().all(|c| c.is_ascii_digit()) {
                return None;
            }
            Some(attached)
        } else {
            match tokens.get(start + consumed) {
                Some(next) if next.chars().all(|c| c.is_ascii_digit()) && !next.is_empty() => {
                    consumed += 1;
                    Some(next.clone())
                }
                _ => None,
            }
        };

        let variant = match tokens.get(start + consumed) {
            Some(next) if next == "fe" || next == "special" => {
                consumed += 1;
                Some(next.clone())
            }
            _ => None,
        };

        Some((
            FoldRef {
                series,
                gen,
                variant,
            },
            consumed,
        ))
    }

    /// Parse a whole candidate core name; anchored like [`ModelRef::parse_name`]
    pub fn parse_name(tokens: &[String]) -> Option<FoldRef> {
        let (parsed, consumed) = Self::parse_at(tokens, 0)?;
        if consumed == tokens.len() {
            Some(parsed)
        } else {
            None
        }
    }

    /// Scan a query token stream for every fold reference, in text order
    pub fn scan_query(tokens: &[String]) -> Vec<FoldRef> {
        let mut refs = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            if let Some((parsed, consumed)) = Self::parse_at(tokens, i) {
                refs.push(parsed);
                i += consumed;
            } else {
                i += 1;
            }
        }

        refs
    }
}
