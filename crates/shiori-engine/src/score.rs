//! Per-book relevance scoring.
//!
//! A score is a weighted count of which fields mention which axis. Matching is
//! case-insensitive substring containment: a field matches a term list when any term
//! occurs anywhere in the field.

use serde::Serialize;
use shiori_catalog::{Book, Catalog};
use shiori_config::{Axis, Dictionaries, ScoreWeights};
use tracing::warn;

use crate::Selection;

/// Which signals fired for a book.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MatchFlags {
    /// Interest term in the keywords.
    pub interest_keywords: bool,
    /// Interest term in the title.
    pub interest_title: bool,
    /// Interest term in the description.
    pub interest_description: bool,
    /// Feeling term in the keywords.
    pub feeling_keywords: bool,
    /// Feeling term in the description.
    pub feeling_description: bool,
    /// Style term in the keywords.
    pub style_keywords: bool,
    /// Penalty term in the keywords.
    pub penalty_keywords: bool,
    /// The selection is a bonus pair.
    pub bonus_pair: bool,
}

/// A book with its score for one selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredBook<'a> {
    /// The scored book.
    pub book: &'a Book,
    /// Total score; may be negative.
    pub score: i32,
    /// Signals that contributed.
    pub matches: MatchFlags,
}

/// Scores books against one selection.
///
/// Term lists are looked up and lower-cased once at construction.
#[derive(Debug, Clone)]
pub struct Scorer {
    /// Interest terms.
    interest: Vec<String>,
    /// Feeling terms.
    feeling: Vec<String>,
    /// Style terms.
    style: Vec<String>,
    /// Penalty terms for the chosen interest.
    penalty: Vec<String>,
    /// Interest and feeling terms, deduplicated, for the loose tier.
    loose: Vec<String>,
    /// Whether the selection earns the pair bonus.
    bonus: bool,
    /// Signal weights.
    weights: ScoreWeights,
}

impl Scorer {
    /// Prepares a scorer for `selection`.
    pub fn new(dictionaries: &Dictionaries, weights: &ScoreWeights, selection: &Selection) -> Self {
        let terms = |axis: Axis| {
            let label = selection.label(axis);
            if !dictionaries.table(axis).contains_key(label) {
                warn!(%axis, label, "no terms for label");
            }
            lowered(dictionaries.terms(axis, label))
        };

        let interest = terms(Axis::Interest);
        let feeling = terms(Axis::Feeling);
        let style = terms(Axis::Style);

        let mut loose = interest.clone();
        for term in &feeling {
            if !loose.contains(term) {
                loose.push(term.clone());
            }
        }

        Self {
            interest,
            feeling,
            style,
            penalty: lowered(dictionaries.penalty_terms(&selection.interest)),
            loose,
            bonus: dictionaries.is_bonus_pair(&selection.interest, &selection.feeling),
            weights: *weights,
        }
    }

    /// Score of one book.
    pub fn score(&self, book: &Book) -> i32 {
        self.score_book(book).score
    }

    /// Scores one book and records which signals fired.
    pub fn score_book<'a>(&self, book: &'a Book) -> ScoredBook<'a> {
        let title = book.title.to_lowercase();
        let description = book.description.to_lowercase();
        let keywords = book.keywords.to_lowercase();

        let matches = MatchFlags {
            interest_keywords: matches_any(&keywords, &self.interest),
            interest_title: matches_any(&title, &self.interest),
            interest_description: matches_any(&description, &self.interest),
            feeling_keywords: matches_any(&keywords, &self.feeling),
            feeling_description: matches_any(&description, &self.feeling),
            style_keywords: matches_any(&keywords, &self.style),
            penalty_keywords: matches_any(&keywords, &self.penalty),
            bonus_pair: self.bonus,
        };

        ScoredBook {
            book,
            score: self.weigh(&matches),
            matches,
        }
    }

    /// Scores every book in catalog order.
    pub fn score_catalog<'a>(&self, catalog: &'a Catalog) -> Vec<ScoredBook<'a>> {
        catalog.iter().map(|book| self.score_book(book)).collect()
    }

    /// Returns true if the keywords or description mention any interest or feeling term.
    pub fn loose_match(&self, book: &Book) -> bool {
        matches_any(&book.keywords.to_lowercase(), &self.loose)
            || matches_any(&book.description.to_lowercase(), &self.loose)
    }

    /// Sums the weights of the signals that fired, saturating at the `i32` bounds.
    fn weigh(&self, m: &MatchFlags) -> i32 {
        let w = &self.weights;
        [
            (m.interest_keywords, w.interest_keywords),
            (m.interest_title, w.interest_title),
            (m.interest_description, w.interest_description),
            (m.feeling_keywords, w.feeling_keywords),
            (m.feeling_description, w.feeling_description),
            (m.style_keywords, w.style_keywords),
            (m.penalty_keywords, w.penalty_keywords.saturating_neg()),
            (m.bonus_pair, w.bonus_pair),
        ]
        .into_iter()
        .filter(|(fired, _)| *fired)
        .fold(0, |total, (_, weight)| total.saturating_add(weight))
    }
}

/// Lower-cases terms, dropping blank ones.
fn lowered(terms: &[String]) -> Vec<String> {
    terms
        .iter()
        .filter(|t| !t.trim().is_empty())
        .map(|t| t.to_lowercase())
        .collect()
}

/// Returns true if any term occurs in the already lower-cased field.
fn matches_any(field: &str, terms: &[String]) -> bool {
    terms.iter().any(|term| field.contains(term.as_str()))
}
