//! Finished recommendations.

use std::collections::BTreeSet;

use serde::Serialize;
use shiori_catalog::Book;

use crate::{Assembly, PoolTier, Selection, Slot};

/// One recommended book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendedBook {
    /// The book.
    pub book: Book,
    /// Its score for the selection.
    pub score: i32,
    /// Why it was chosen.
    pub slot: Slot,
    /// True if it was drawn from outside the matched pool.
    pub supplemented: bool,
}

/// The answer to one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    /// The selection the picks were made for.
    pub selection: Selection,
    /// Chosen books, best first. At most three.
    pub picks: Vec<RecommendedBook>,
    /// Titles of the supplemented picks.
    pub supplemented: BTreeSet<String>,
    /// Rule that produced the candidate pool.
    pub tier: PoolTier,
    /// Number of books that met a matching criterion.
    pub matched: usize,
}

impl Recommendation {
    /// Builds the owned result from an assembly.
    pub(crate) fn from_assembly(
        selection: &Selection,
        assembly: Assembly<'_>,
        tier: PoolTier,
        matched: usize,
    ) -> Self {
        let picks = assembly
            .picks
            .into_iter()
            .map(|pick| RecommendedBook {
                book: pick.scored.book.clone(),
                score: pick.scored.score,
                slot: pick.slot,
                supplemented: pick.slot.is_supplemented(),
            })
            .collect();
        Self {
            selection: selection.clone(),
            picks,
            supplemented: assembly.supplemented,
            tier,
            matched,
        }
    }

    /// Titles of the picks in order.
    pub fn titles(&self) -> Vec<&str> {
        self.picks.iter().map(|p| p.book.title.as_str()).collect()
    }

    /// Returns true if no books were picked.
    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    /// Returns true if no book met a matching criterion.
    pub fn nothing_matched(&self) -> bool {
        self.matched == 0
    }
}
