//! Pick assembly.
//!
//! The matched pool is ranked by score with a random tie-break. With three or more matched
//! books the result is the top two plus one random pick from the rest of the ranking. With
//! fewer, every matched book is kept and the remaining slots are drawn from the rest of the
//! catalog; those backfilled books are reported as supplemented.

use std::collections::{BTreeSet, HashSet};

use serde::Serialize;

use crate::{RandomSource, ScoredBook};

/// Number of books in a full result.
pub const PICK_COUNT: usize = 3;

/// How a pick earned its place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    /// Highest-ranked matched book.
    Top,
    /// Second-ranked matched book.
    RunnerUp,
    /// Random draw from the matched books ranked below the top two.
    Exploration,
    /// A matched book kept because fewer than three matched.
    Kept,
    /// Drawn from outside the matched pool to fill the result.
    Backfill,
}

impl Slot {
    /// Returns true for books added from outside the matched pool.
    pub fn is_supplemented(self) -> bool {
        self == Self::Backfill
    }
}

/// One chosen book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pick<'a> {
    /// The book and its score.
    pub scored: ScoredBook<'a>,
    /// Why it was chosen.
    pub slot: Slot,
}

/// Result of assembling picks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assembly<'a> {
    /// Chosen books, best first.
    pub picks: Vec<Pick<'a>>,
    /// Titles of the backfilled picks.
    pub supplemented: BTreeSet<String>,
}

/// Ranks `pool` by score descending, breaking ties with a fresh random key per book.
pub fn rank<'a>(pool: &[ScoredBook<'a>], rng: &mut dyn RandomSource) -> Vec<ScoredBook<'a>> {
    let mut keyed: Vec<(f64, ScoredBook<'a>)> =
        pool.iter().map(|s| (rng.next_uniform(), *s)).collect();
    keyed.sort_by(|(ka, a), (kb, b)| b.score.cmp(&a.score).then(ka.total_cmp(kb)));
    keyed.into_iter().map(|(_, s)| s).collect()
}

/// Chooses up to [`PICK_COUNT`] books.
///
/// `matched` is the matched pool; `catalog` is every scored book. The result is shorter
/// than [`PICK_COUNT`] only when the catalog itself is.
pub fn assemble<'a>(
    matched: &[ScoredBook<'a>],
    catalog: &[ScoredBook<'a>],
    rng: &mut dyn RandomSource,
) -> Assembly<'a> {
    let ranked = rank(matched, rng);

    if ranked.len() >= PICK_COUNT {
        let explore = rng
            .sample(ranked.len() - 2, 1)
            .first()
            .map_or(2, |offset| offset + 2);
        let picks = vec![
            Pick {
                scored: ranked[0],
                slot: Slot::Top,
            },
            Pick {
                scored: ranked[1],
                slot: Slot::RunnerUp,
            },
            Pick {
                scored: ranked[explore],
                slot: Slot::Exploration,
            },
        ];
        return Assembly {
            picks,
            supplemented: BTreeSet::new(),
        };
    }

    let taken: HashSet<&str> = ranked.iter().map(|s| s.book.title.as_str()).collect();
    let rest: Vec<ScoredBook<'a>> = catalog
        .iter()
        .filter(|s| !taken.contains(s.book.title.as_str()))
        .copied()
        .collect();

    let mut picks: Vec<Pick<'a>> = ranked
        .into_iter()
        .map(|scored| Pick {
            scored,
            slot: Slot::Kept,
        })
        .collect();
    let needed = PICK_COUNT - picks.len();
    picks.extend(rng.sample(rest.len(), needed).into_iter().map(|i| Pick {
        scored: rest[i],
        slot: Slot::Backfill,
    }));

    let supplemented = picks
        .iter()
        .filter(|p| p.slot.is_supplemented())
        .map(|p| p.scored.book.title.clone())
        .collect();
    Assembly {
        picks,
        supplemented,
    }
}

#[cfg(test)]
mod tests {
    use shiori_catalog::Book;

    use super::*;
    use crate::MatchFlags;

    /// Returns scripted uniforms and always samples the lowest indices.
    struct Scripted {
        /// Values returned by `next_uniform`, cycled.
        uniforms: Vec<f64>,
        /// Next position in `uniforms`.
        at: usize,
        /// Offset added to every sampled index, modulo `n`.
        shift: usize,
    }

    impl Scripted {
        fn new(uniforms: &[f64], shift: usize) -> Self {
            Self {
                uniforms: uniforms.to_vec(),
                at: 0,
                shift,
            }
        }
    }

    impl RandomSource for Scripted {
        fn next_uniform(&mut self) -> f64 {
            let v = self.uniforms.get(self.at % self.uniforms.len().max(1));
            self.at += 1;
            v.copied().unwrap_or(0.0)
        }

        fn sample(&mut self, n: usize, k: usize) -> Vec<usize> {
            (0..k.min(n)).map(|i| (i + self.shift) % n).collect()
        }
    }

    fn books(n: usize) -> Vec<Book> {
        (0..n).map(|i| Book::new(format!("book-{i}"))).collect()
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

    fn titles<'a>(assembly: &'a Assembly<'_>) -> Vec<&'a str> {
        assembly
            .picks
            .iter()
            .map(|p| p.scored.book.title.as_str())
            .collect()
    }

    #[test]
    fn test_rank_breaks_ties_by_key() {
        let books = books(3);
        let pool = scored(&books, &[1, 5, 1]);
        let mut rng = Scripted::new(&[0.9, 0.5, 0.1], 0);

        let ranked = rank(&pool, &mut rng);
        let order: Vec<_> = ranked.iter().map(|s| s.book.title.as_str()).collect();
        assert_eq!(order, ["book-1", "book-2", "book-0"]);
    }

    #[test]
    fn test_three_or_more_uses_exploration_slot() {
        let books = books(6);
        let all = scored(&books, &[9, 8, 7, 6, 5, 4]);
        let mut rng = Scripted::new(&[0.0], 2);

        let assembly = assemble(&all, &all, &mut rng);
        assert_eq!(titles(&assembly), ["book-0", "book-1", "book-4"]);
        assert_eq!(assembly.picks[2].slot, Slot::Exploration);
        assert!(assembly.supplemented.is_empty());
    }

    #[test]
    fn test_exactly_three_matched() {
        let books = books(5);
        let all = scored(&books, &[0, 4, 4, 4, 0]);
        let matched = &all[1..4];
        let mut rng = Scripted::new(&[0.3, 0.2, 0.1], 0);

        let assembly = assemble(matched, &all, &mut rng);
        assert_eq!(titles(&assembly), ["book-3", "book-2", "book-1"]);
        assert!(assembly.supplemented.is_empty());
    }

    #[test]
    fn test_two_matched_backfills_one() {
        let books = books(5);
        let all = scored(&books, &[0, 3, 0, 2, 0]);
        let matched = [all[1], all[3]];
        let mut rng = Scripted::new(&[0.5], 1);

        let assembly = assemble(&matched, &all, &mut rng);
        assert_eq!(titles(&assembly), ["book-1", "book-3", "book-2"]);
        assert_eq!(
            assembly.picks.iter().map(|p| p.slot).collect::<Vec<_>>(),
            [Slot::Kept, Slot::Kept, Slot::Backfill]
        );
        assert_eq!(
            assembly.supplemented,
            BTreeSet::from(["book-2".to_string()])
        );
    }

    #[test]
    fn test_one_matched_backfills_two() {
        let books = books(4);
        let all = scored(&books, &[0, 0, 5, 0]);
        let mut rng = Scripted::new(&[0.5], 0);

        let assembly = assemble(&all[2..3], &all, &mut rng);
        assert_eq!(titles(&assembly), ["book-2", "book-0", "book-1"]);
        assert_eq!(assembly.supplemented.len(), 2);
        assert!(!assembly.supplemented.contains("book-2"));
    }

    #[test]
    fn test_nothing_matched_draws_from_catalog() {
        let books = books(4);
        let all = scored(&books, &[0; 4]);
        let mut rng = Scripted::new(&[0.5], 1);

        let assembly = assemble(&[], &all, &mut rng);
        assert_eq!(titles(&assembly), ["book-1", "book-2", "book-3"]);
        assert_eq!(assembly.supplemented.len(), 3);
    }

    #[test]
    fn test_short_catalog_gives_short_result() {
        let books = books(2);
        let all = scored(&books, &[0, 0]);
        let mut rng = Scripted::new(&[0.5], 0);

        assert_eq!(assemble(&all[..1], &all, &mut rng).picks.len(), 2);
        assert_eq!(assemble(&[], &all, &mut rng).picks.len(), 2);
        assert!(assemble(&[], &[], &mut rng).picks.is_empty());
    }
}
