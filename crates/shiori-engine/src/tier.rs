//! Tiered candidate selection.
//!
//! Scored books fall into a strong tier and a medium tier by score threshold. The selector
//! takes the strictest pool that still holds enough books, loosening the criteria step by
//! step until it falls back to the whole catalog.

use std::{collections::HashSet, fmt};

use serde::Serialize;
use shiori_catalog::Book;
use shiori_config::SelectionSettings;
use tracing::debug;

use crate::ScoredBook;

/// Which rule produced a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolTier {
    /// Strong matches only.
    Strong,
    /// Strong then medium matches.
    StrongMedium,
    /// Strong, medium, then any book mentioning an interest or feeling term.
    Loose,
    /// Nothing was sufficient; the whole catalog.
    Catalog,
}

impl PoolTier {
    /// Short name used in output.
    pub fn name(self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::StrongMedium => "strong+medium",
            Self::Loose => "loose",
            Self::Catalog => "catalog",
        }
    }
}

impl fmt::Display for PoolTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The candidate pool chosen for one request.
#[derive(Debug, Clone)]
pub struct Pool<'a> {
    /// Rule that produced the pool.
    tier: PoolTier,
    /// Books that met some matching criterion, in tier order.
    matched: Vec<ScoredBook<'a>>,
}

impl<'a> Pool<'a> {
    /// Rule that produced the pool.
    pub fn tier(&self) -> PoolTier {
        self.tier
    }

    /// Returns true if the selector fell back to the whole catalog.
    pub fn is_fallback(&self) -> bool {
        self.tier == PoolTier::Catalog
    }

    /// Books that met a matching criterion.
    ///
    /// For the catalog tier this is the partial strong, medium and loose set that was too
    /// small to use on its own.
    pub fn matched(&self) -> &[ScoredBook<'a>] {
        &self.matched
    }
}

/// Chooses the candidate pool.
///
/// `scored` is every book in catalog order. `loose` tells whether a book mentions any
/// interest or feeling term.
pub fn select_pool<'a>(
    scored: &[ScoredBook<'a>],
    loose: impl Fn(&Book) -> bool,
    settings: &SelectionSettings,
) -> Pool<'a> {
    let min = settings.min_candidates;
    let strong: Vec<_> = scored
        .iter()
        .filter(|s| s.score >= settings.strong_threshold)
        .copied()
        .collect();
    let medium: Vec<_> = scored
        .iter()
        .filter(|s| s.score >= settings.medium_threshold && s.score < settings.strong_threshold)
        .copied()
        .collect();
    debug!(
        strong = strong.len(),
        medium = medium.len(),
        "partitioned scored books"
    );

    if strong.len() >= min {
        return pool(PoolTier::Strong, strong);
    }

    if strong.len() + medium.len() >= min {
        let mut merged = strong;
        merged.extend(medium);
        merged.truncate(settings.pool_cap);
        return pool(PoolTier::StrongMedium, merged);
    }

    let mut seen = HashSet::new();
    let mut merged: Vec<_> = strong
        .into_iter()
        .chain(medium)
        .chain(scored.iter().copied().filter(|s| loose(s.book)))
        .filter(|s| seen.insert(s.book.title.as_str()))
        .collect();
    let sufficient = merged.len() >= min;
    merged.truncate(settings.pool_cap);

    let tier = if sufficient {
        PoolTier::Loose
    } else {
        PoolTier::Catalog
    };
    pool(tier, merged)
}

/// Builds a pool and logs the decision.
fn pool(tier: PoolTier, matched: Vec<ScoredBook<'_>>) -> Pool<'_> {
    debug!(%tier, matched = matched.len(), "selected pool");
    Pool { tier, matched }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MatchFlags;

    fn books(n: usize) -> Vec<Book> {
        (0..n)
            .map(|i| Book::new(format!("book-{i}")).with_keywords(format!("kw-{i}")))
            .collect()
    }

    fn scored<'a>(books: &'a [Book], scores: &[i32]) -> Vec<ScoredBook<'a>> {
        books
            .iter()
            .zip(scores)
            .map(|(book, &score)| ScoredBook {
                book,
                score,
                matches: MatchFlags::default(),
            })
            .collect()
    }

    fn titles<'a>(pool: &'a [ScoredBook<'a>]) -> Vec<&'a str> {
        pool.iter().map(|s| s.book.title.as_str()).collect()
    }

    fn never(_: &Book) -> bool {
        false
    }

    #[test]
    fn test_strong_tier_keeps_catalog_order_uncapped() {
        let books = books(40);
        let scores = vec![5; 40];
        let all = scored(&books, &scores);
        let settings = SelectionSettings::default();

        let pool = select_pool(&all, never, &settings);
        assert_eq!(pool.tier(), PoolTier::Strong);
        assert_eq!(pool.matched().len(), 40);
        assert_eq!(pool.matched()[0].book.title, "book-0");
    }

    #[test]
    fn test_strong_then_medium() {
        let books = books(5);
        let all = scored(&books, &[2, 4, 0, 3, 1]);

        let pool = select_pool(&all, never, &SelectionSettings::default());
        assert_eq!(pool.tier(), PoolTier::StrongMedium);
        assert_eq!(titles(pool.matched()), ["book-1", "book-0", "book-3"]);
    }

    #[test]
    fn test_merged_tiers_are_capped() {
        let books = books(10);
        let all = scored(&books, &[3; 10]);
        let settings = SelectionSettings {
            pool_cap: 4,
            ..SelectionSettings::default()
        };

        let pool = select_pool(&all, never, &settings);
        assert_eq!(pool.tier(), PoolTier::StrongMedium);
        assert_eq!(pool.matched().len(), 4);
    }

    #[test]
    fn test_loose_tier_is_capped() {
        let books = books(40);
        let mut scores = vec![0; 40];
        scores[0] = 4;
        scores[1] = 2;
        let all = scored(&books, &scores);
        let loose = |b: &Book| b.title != "book-39";

        let pool = select_pool(&all, loose, &SelectionSettings::default());
        assert_eq!(pool.tier(), PoolTier::Loose);
        assert_eq!(pool.matched().len(), 30);
        assert_eq!(&titles(pool.matched())[..3], ["book-0", "book-1", "book-2"]);
        assert!(!titles(pool.matched()).contains(&"book-30"));
    }

    #[test]
    fn test_loose_tier_dedups_in_tier_order() {
        let books = books(6);
        let all = scored(&books, &[0, 4, 1, 0, 2, 0]);
        // Loose matches book-1 (already strong), book-2 and book-5.
        let loose = |b: &Book| ["book-1", "book-2", "book-5"].contains(&b.title.as_str());

        let pool = select_pool(&all, loose, &SelectionSettings::default());
        assert_eq!(pool.tier(), PoolTier::Loose);
        assert_eq!(
            titles(pool.matched()),
            ["book-1", "book-4", "book-2", "book-5"]
        );
    }

    #[test]
    fn test_catalog_fallback_keeps_partial_matches() {
        let books = books(10);
        let mut scores = vec![0; 10];
        scores[7] = 2;
        let all = scored(&books, &scores);

        let pool = select_pool(&all, never, &SelectionSettings::default());
        assert_eq!(pool.tier(), PoolTier::Catalog);
        assert!(pool.is_fallback());
        assert_eq!(titles(pool.matched()), ["book-7"]);
    }

    #[test]
    fn test_empty_catalog() {
        let pool = select_pool(&[], never, &SelectionSettings::default());
        assert_eq!(pool.tier(), PoolTier::Catalog);
        assert!(pool.is_fallback());
        assert!(pool.matched().is_empty());
    }

    #[test]
    fn test_negative_scores_never_match() {
        let books = books(3);
        let all = scored(&books, &[-1, -2, 1]);

        let pool = select_pool(&all, never, &SelectionSettings::default());
        assert_eq!(pool.tier(), PoolTier::Catalog);
        assert!(pool.matched().is_empty());
    }
}
