//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::fmt;

use crate::{Config, ScoreWeights, SelectionSettings, TermTable};

/// Largest weight magnitude accepted without a warning.
pub const WEIGHT_LIMIT: i32 = 1_000;

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// A dictionary label maps to no terms, so it can never match.
    EmptyTermList {
        /// Dictionary section (`interest`, `feeling`, `style` or `penalty`).
        table: &'static str,
        /// Label with no terms.
        label: String,
    },
    /// A term is empty or whitespace; the scorer ignores it.
    EmptyTerm {
        /// Dictionary section.
        table: &'static str,
        /// Label the term belongs to.
        label: String,
    },
    /// A bonus pair names a label with no dictionary entry.
    BonusUnknownLabel {
        /// Interest label of the pair.
        interest: String,
        /// Feeling label of the pair.
        feeling: String,
    },
    /// A related hint is attached to an interest with no dictionary entry.
    HintUnknownLabel {
        /// Interest label of the hint.
        label: String,
    },
    /// The medium tier is empty because its threshold is not below the strong one.
    MediumNotBelowStrong {
        /// Medium threshold.
        medium: i32,
        /// Strong threshold.
        strong: i32,
    },
    /// `min_candidates` is zero, so the strong tier is always accepted.
    ZeroMinCandidates,
    /// `pool_cap` is below `min_candidates`, so merged tiers can never be accepted.
    PoolCapBelowMin {
        /// Pool cap.
        cap: usize,
        /// Minimum candidates.
        min: usize,
    },
    /// A score weight is larger than [`WEIGHT_LIMIT`] in magnitude.
    WeightOutOfRange {
        /// Key under `[weights]`.
        name: &'static str,
        /// Configured value.
        value: i32,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTermList { table, label } => {
                write!(f, "[{table}] label '{label}' has no terms")
            }
            Self::EmptyTerm { table, label } => {
                write!(f, "[{table}] label '{label}' contains an empty term")
            }
            Self::BonusUnknownLabel { interest, feeling } => {
                write!(
                    f,
                    "bonus pair '{interest}' x '{feeling}' names a label with no terms"
                )
            }
            Self::HintUnknownLabel { label } => {
                write!(f, "[related] label '{label}' is not an interest")
            }
            Self::MediumNotBelowStrong { medium, strong } => {
                write!(
                    f,
                    "medium_threshold ({medium}) is not below strong_threshold ({strong})"
                )
            }
            Self::ZeroMinCandidates => write!(f, "min_candidates is 0"),
            Self::PoolCapBelowMin { cap, min } => {
                write!(f, "pool_cap ({cap}) is below min_candidates ({min})")
            }
            Self::WeightOutOfRange { name, value } => {
                write!(
                    f,
                    "weight {name} ({value}) is outside -{WEIGHT_LIMIT}..={WEIGHT_LIMIT}"
                )
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
///
/// This checks for:
/// - Labels with no terms, and empty terms
/// - Bonus pairs and related hints that reference missing labels
/// - Selection constants that make a tier unreachable
/// - Score weights too large to sum safely
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let dicts = &config.dictionaries;
    let mut warnings = Vec::new();

    warnings.extend(validate_table("interest", &dicts.interest));
    warnings.extend(validate_table("feeling", &dicts.feeling));
    warnings.extend(validate_table("style", &dicts.style));
    warnings.extend(validate_table("penalty", &dicts.penalty));

    for pair in &dicts.bonus_pairs {
        if !dicts.interest.contains_key(&pair.interest)
            || !dicts.feeling.contains_key(&pair.feeling)
        {
            warnings.push(ConfigWarning::BonusUnknownLabel {
                interest: pair.interest.clone(),
                feeling: pair.feeling.clone(),
            });
        }
    }

    for label in dicts.related.keys() {
        if !dicts.interest.contains_key(label) {
            warnings.push(ConfigWarning::HintUnknownLabel {
                label: label.clone(),
            });
        }
    }

    warnings.extend(validate_selection(&config.selection));
    warnings.extend(validate_weights(&config.weights));
    warnings
}

/// Checks one dictionary section.
fn validate_table(table: &'static str, terms: &TermTable) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();
    for (label, list) in terms {
        if list.is_empty() {
            warnings.push(ConfigWarning::EmptyTermList {
                table,
                label: label.clone(),
            });
        } else if list.iter().any(|t| t.trim().is_empty()) {
            warnings.push(ConfigWarning::EmptyTerm {
                table,
                label: label.clone(),
            });
        }
    }
    warnings
}

/// Checks the selection constants against each other.
fn validate_selection(selection: &SelectionSettings) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();
    if selection.medium_threshold >= selection.strong_threshold {
        warnings.push(ConfigWarning::MediumNotBelowStrong {
            medium: selection.medium_threshold,
            strong: selection.strong_threshold,
        });
    }
    if selection.min_candidates == 0 {
        warnings.push(ConfigWarning::ZeroMinCandidates);
    } else if selection.pool_cap < selection.min_candidates {
        warnings.push(ConfigWarning::PoolCapBelowMin {
            cap: selection.pool_cap,
            min: selection.min_candidates,
        });
    }
    warnings
}

/// Checks each weight against [`WEIGHT_LIMIT`].
fn validate_weights(weights: &ScoreWeights) -> Vec<ConfigWarning> {
    weights
        .named()
        .into_iter()
        .filter(|(_, value)| value.unsigned_abs() > WEIGHT_LIMIT.unsigned_abs())
        .map(|(name, value)| ConfigWarning::WeightOutOfRange { name, value })
        .collect()
}
