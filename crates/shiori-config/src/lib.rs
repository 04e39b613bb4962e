//! Configuration system for shiori.
//!
//! shiori uses TOML configuration files named `.shiori.toml`. Configuration is resolved by
//! walking up the directory tree from the current working directory, collecting any
//! `.shiori.toml` files found, then loading `~/.shiori.toml` as the global config with lowest
//! precedence.
//!
//! Besides the selection constants and score weights, a config file can extend or replace
//! the keyword dictionaries the recommender scores books with.

#![warn(missing_docs)]

mod dictionaries;
mod discovery;
mod error;
mod merge;
mod parse;
mod resolve;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;
pub mod vocab;

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

pub use dictionaries::{BonusPair, Dictionaries, TermTable};
pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path};
pub use error::{ConfigError, UnknownCategory};
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawBonus, RawConfig, RawSelectionSettings, RawSettings, RawWeights, parse_config_file,
    parse_config_str,
};
pub use resolve::resolve_catalog_path;
use serde::{Deserialize, Serialize};
pub use templates::{global_template, local_template};
pub use validate::{ConfigWarning, WEIGHT_LIMIT};
use validate::validate_config;
pub use vocab::{Axis, Category, Feeling, Interest, Style};

/// Minimum score for the strong tier.
pub const DEFAULT_STRONG_THRESHOLD: i32 = 4;
/// Minimum score for the medium tier.
pub const DEFAULT_MEDIUM_THRESHOLD: i32 = 2;
/// Pool size a tier must reach to be accepted.
pub const DEFAULT_MIN_CANDIDATES: usize = 3;
/// Upper bound on merged pools.
pub const DEFAULT_POOL_CAP: usize = 30;

/// Top-level merged configuration for shiori.
///
/// This represents the fully resolved configuration after merging all discovered
/// `.shiori.toml` files according to precedence rules.
#[derive(Debug, Clone)]
pub struct Config {
    /// General settings.
    pub settings: Settings,
    /// Tier thresholds and pool sizes.
    pub selection: SelectionSettings,
    /// Score weights per signal.
    pub weights: ScoreWeights,
    /// Keyword dictionaries after merging.
    pub dictionaries: Dictionaries,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            selection: SelectionSettings::default(),
            weights: ScoreWeights::default(),
            dictionaries: Dictionaries::builtin(),
            config_root: None,
        }
    }
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.shiori.toml` files.
    ///
    /// This is the main entry point for loading configuration. It:
    /// 1. Discovers all `.shiori.toml` files from `cwd` up to the filesystem root
    /// 2. Appends `~/.shiori.toml` if it exists
    /// 3. Parses each file
    /// 4. Merges them according to precedence rules (closest to `cwd` wins)
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        tracing::debug!(count = files.len(), "loading config files");
        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Validates the configuration and returns any warnings.
    ///
    /// This checks for empty term lists and terms, bonus pairs and hints that name labels
    /// with no dictionary entry, and selection constants that can never be satisfied.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective configuration to TOML format.
    ///
    /// The output uses the same layout as a `.shiori.toml` file, including the merged
    /// dictionaries, so it can be copied into a config with `builtin_dictionaries = false`.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let dicts = &self.dictionaries;
        let serializable = SerializableConfig {
            settings: &self.settings,
            selection: &self.selection,
            weights: &self.weights,
            interest: &dicts.interest,
            feeling: &dicts.feeling,
            style: &dicts.style,
            penalty: &dicts.penalty,
            related: &dicts.related,
            bonus: dicts.bonus_pairs.iter().collect(),
        };
        Ok(toml::to_string_pretty(&serializable)?)
    }
}

/// General settings for shiori.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Start from the built-in dictionaries before applying config tables.
    pub builtin_dictionaries: bool,
    /// Catalog file used when none is given on the command line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            builtin_dictionaries: true,
            catalog: None,
        }
    }
}

/// Tier thresholds and pool sizes for candidate selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SelectionSettings {
    /// Minimum score for the strong tier.
    pub strong_threshold: i32,
    /// Minimum score for the medium tier.
    pub medium_threshold: i32,
    /// Pool size a tier must reach to be accepted.
    pub min_candidates: usize,
    /// Upper bound on merged pools.
    pub pool_cap: usize,
}

impl Default for SelectionSettings {
    fn default() -> Self {
        Self {
            strong_threshold: DEFAULT_STRONG_THRESHOLD,
            medium_threshold: DEFAULT_MEDIUM_THRESHOLD,
            min_candidates: DEFAULT_MIN_CANDIDATES,
            pool_cap: DEFAULT_POOL_CAP,
        }
    }
}

/// Score contribution of each matching signal.
///
/// `penalty_keywords` is subtracted; every other weight is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Interest term in the keywords field.
    pub interest_keywords: i32,
    /// Interest term in the title.
    pub interest_title: i32,
    /// Interest term in the description.
    pub interest_description: i32,
    /// Feeling term in the keywords field.
    pub feeling_keywords: i32,
    /// Feeling term in the description.
    pub feeling_description: i32,
    /// Style term in the keywords field.
    pub style_keywords: i32,
    /// Penalty term in the keywords field.
    pub penalty_keywords: i32,
    /// Flat bonus for a listed interest×feeling pair.
    pub bonus_pair: i32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            interest_keywords: 3,
            interest_title: 2,
            interest_description: 1,
            feeling_keywords: 2,
            feeling_description: 1,
            style_keywords: 1,
            penalty_keywords: 1,
            bonus_pair: 1,
        }
    }
}

impl ScoreWeights {
    /// Each weight with its `[weights]` key.
    pub fn named(&self) -> [(&'static str, i32); 8] {
        [
            ("interest_keywords", self.interest_keywords),
            ("interest_title", self.interest_title),
            ("interest_description", self.interest_description),
            ("feeling_keywords", self.feeling_keywords),
            ("feeling_description", self.feeling_description),
            ("style_keywords", self.style_keywords),
            ("penalty_keywords", self.penalty_keywords),
            ("bonus_pair", self.bonus_pair),
        ]
    }
}

/// Internal struct for TOML serialization of the effective config.
#[derive(Serialize)]
struct SerializableConfig<'a> {
    /// General settings.
    settings: &'a Settings,
    /// Selection constants.
    selection: &'a SelectionSettings,
    /// Score weights.
    weights: &'a ScoreWeights,
    /// Interest terms.
    interest: &'a TermTable,
    /// Feeling terms.
    feeling: &'a TermTable,
    /// Style terms.
    style: &'a TermTable,
    /// Penalty terms.
    penalty: &'a TermTable,
    /// Related-theme hints.
    related: &'a BTreeMap<String, String>,
    /// Bonus pairs, emitted last as an array of tables.
    bonus: Vec<&'a BonusPair>,
}
