//! Candidate extraction: recovers person names from a free-text AI answer.
//!
//! An ordered list of `Matcher`s scans the whole answer; a single reducer
//! normalizes every capture to Title Case and keeps the first occurrence of
//! each normalized name. New ways of spotting a name are added as matchers
//! without touching the reducer.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

/// Two or more capitalized words, e.g. `Nadia Delgado`.
const CAPITALIZED_NAME: &str = r"[A-Z][a-z]+(?:\s+[A-Z][a-z]+)+";

/// Normalized names must be longer than this many chars to be kept.
const MIN_NAME_CHARS: usize = 2;

static DEFAULT_EXTRACTOR: LazyLock<CandidateExtractor> = LazyLock::new(CandidateExtractor::default);

// ────────────────────────────────────────────────────────────────────────────
// Matcher trait
// ────────────────────────────────────────────────────────────────────────────

/// One way an AI answer tends to name a person.
///
/// `scan` returns every raw capture over the full text, in text order.
pub trait Matcher: Send + Sync {
    fn name(&self) -> &str;
    fn scan<'t>(&self, text: &'t str) -> Vec<&'t str>;
}

/// A matcher backed by a regex whose first capture group is the name.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    name: &'static str,
    regex: Regex,
}

impl PatternMatcher {
    pub fn new(name: &'static str, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            name,
            regex: Regex::new(pattern)?,
        })
    }
}

impl Matcher for PatternMatcher {
    fn name(&self) -> &str {
        self.name
    }

    fn scan<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.regex
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .collect()
    }
}

/// The built-in matchers, in the order they are applied.
pub fn default_matchers() -> Vec<Box<dyn Matcher>> {
    let patterns = [
        // **1. Nadia Delgado**
        (
            "bold_ranked",
            format!(r"\*\*(?:[0-9]+\.\s*)?({CAPITALIZED_NAME})\*\*"),
        ),
        // *Nadia Delgado:*
        ("label", format!(r"\*({CAPITALIZED_NAME}):\*")),
        // Nadia Delgado: ...
        ("line_label", format!(r"(?m)^({CAPITALIZED_NAME}):")),
        // - Nadia Delgado / * Nadia Delgado
        ("bulleted", format!(r"(?m)^[*-]\s+({CAPITALIZED_NAME})")),
        // **Nadia Delgado**
        ("bold", format!(r"\*\*({CAPITALIZED_NAME})\*\*")),
        // 1. Nadia Delgado
        ("numbered", format!(r"(?m)^[0-9]+\.\s+({CAPITALIZED_NAME})")),
        // ANTHONY KRASANO; ASCII word boundaries, so a neighboring `é` counts as a boundary
        (
            "all_caps",
            r"(?-u:\b)([A-Z]{2,}(?:\s+[A-Z]{2,})+)(?-u:\b)".to_string(),
        ),
    ];

    patterns
        .into_iter()
        .map(|(name, pattern)| {
            let matcher = PatternMatcher::new(name, &pattern)
                .unwrap_or_else(|e| panic!("built-in matcher '{name}' is invalid: {e}"));
            Box::new(matcher) as Box<dyn Matcher>
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Reducer
// ────────────────────────────────────────────────────────────────────────────

pub struct CandidateExtractor {
    matchers: Vec<Box<dyn Matcher>>,
}

impl Default for CandidateExtractor {
    fn default() -> Self {
        Self::new(default_matchers())
    }
}

impl CandidateExtractor {
    pub fn new(matchers: Vec<Box<dyn Matcher>>) -> Self {
        Self { matchers }
    }

    /// Returns distinct Title Case names in order of first capture.
    ///
    /// Matchers run in order; within a matcher, captures are taken in text order.
    /// Dedup is exact string equality after normalization, so a truncated capture
    /// of a name already seen is kept as a separate entry.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let mut candidates = Vec::new();
        let mut seen = HashSet::new();

        for matcher in &self.matchers {
            for raw in matcher.scan(text) {
                let name = title_case(raw);
                if name.chars().count() > MIN_NAME_CHARS && seen.insert(name.clone()) {
                    debug!(matcher = matcher.name(), candidate = %name, "candidate extracted");
                    candidates.push(name);
                }
            }
        }

        candidates
    }
}

/// Extracts candidates with the built-in matchers.
pub fn extract_candidates(text: &str) -> Vec<String> {
    DEFAULT_EXTRACTOR.extract(text)
}

/// Lower-cases `raw` and upper-cases the first letter of every whitespace-separated word.
/// Surrounding whitespace is trimmed; inner whitespace is kept as is.
pub fn title_case(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut at_word_start = true;

    for ch in lowered.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            out.push(ch);
        } else if at_word_start {
            out.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            out.push(ch);
        }
    }

    out
}
