//! Recommendation engine for shiori.
//!
//! Given a catalog and a reader's three answers, the engine scores every book, picks a
//! candidate pool by tier, and assembles three recommendations:
//!
//! 1. [`Scorer`] computes a weighted keyword score per book
//! 2. [`select_pool`] takes the strictest tier that holds enough books
//! 3. [`assemble`] ranks the pool and fills any missing slots from the rest of the catalog
//!
//! All randomness goes through a [`RandomSource`], so a seeded source makes a
//! recommendation reproducible.

#![warn(missing_docs)]

mod assemble;
mod random;
mod result;
mod score;
mod selection;
mod tier;

pub use assemble::{Assembly, PICK_COUNT, Pick, Slot, assemble, rank};
pub use random::{RandomSource, RngSource};
pub use result::{Recommendation, RecommendedBook};
pub use score::{MatchFlags, ScoredBook, Scorer};
pub use selection::Selection;
use shiori_catalog::Catalog;
use shiori_config::{Config, Dictionaries, ScoreWeights, SelectionSettings};
pub use tier::{Pool, PoolTier, select_pool};
use tracing::debug_span;

/// Every book's score for one selection, with the pool the selector chose.
#[derive(Debug, Clone)]
pub struct ScoreReport<'a> {
    /// Scored books in catalog order.
    pub scored: Vec<ScoredBook<'a>>,
    /// The selected pool.
    pub pool: Pool<'a>,
}

impl<'a> ScoreReport<'a> {
    /// The selected candidates: the matched books, or every book when the selector fell
    /// back to the whole catalog.
    pub fn candidates(&self) -> &[ScoredBook<'a>] {
        if self.pool.is_fallback() {
            &self.scored
        } else {
            self.pool.matched()
        }
    }
}

/// Runs the recommendation pipeline with one set of dictionaries and settings.
#[derive(Debug, Clone)]
pub struct Recommender {
    /// Keyword dictionaries.
    dictionaries: Dictionaries,
    /// Score weights.
    weights: ScoreWeights,
    /// Tier thresholds and pool sizes.
    selection: SelectionSettings,
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Recommender {
    /// Creates a recommender from a loaded configuration.
    pub fn new(config: &Config) -> Self {
        Self::from_parts(config.dictionaries.clone(), config.weights, config.selection)
    }

    /// Creates a recommender from explicit parts.
    pub fn from_parts(
        dictionaries: Dictionaries,
        weights: ScoreWeights,
        selection: SelectionSettings,
    ) -> Self {
        Self {
            dictionaries,
            weights,
            selection,
        }
    }

    /// The dictionaries in use.
    pub fn dictionaries(&self) -> &Dictionaries {
        &self.dictionaries
    }

    /// Builds a scorer for `selection`.
    pub fn scorer(&self, selection: &Selection) -> Scorer {
        Scorer::new(&self.dictionaries, &self.weights, selection)
    }

    /// Scores the whole catalog and selects the pool, without picking.
    pub fn score_all<'a>(&self, catalog: &'a Catalog, selection: &Selection) -> ScoreReport<'a> {
        let scorer = self.scorer(selection);
        let scored = scorer.score_catalog(catalog);
        let pool = select_pool(&scored, |book| scorer.loose_match(book), &self.selection);
        ScoreReport { scored, pool }
    }

    /// Recommends up to three books.
    pub fn recommend(
        &self,
        catalog: &Catalog,
        selection: &Selection,
        rng: &mut dyn RandomSource,
    ) -> Recommendation {
        let _span = debug_span!("recommend", %selection, books = catalog.len()).entered();
        let report = self.score_all(catalog, selection);
        let matched = report.pool.matched();
        let assembly = assemble(matched, &report.scored, rng);
        Recommendation::from_assembly(selection, assembly, report.pool.tier(), matched.len())
    }

    /// Recommends with a freshly seeded generator.
    pub fn recommend_with_entropy(&self, catalog: &Catalog, selection: &Selection) -> Recommendation {
        self.recommend(catalog, selection, &mut RngSource::entropy())
    }

    /// Note for supplemented picks under `selection`, if the interest has one.
    pub fn related_hint(&self, selection: &Selection) -> Option<&str> {
        self.dictionaries.related_hint(&selection.interest)
    }
}
